use super::{
    PatternError,
    palette::{Hsl, Palette},
    prng::{Draw, FIRST_FREE_SLOT, global_salt},
};
use std::f64::consts::PI;

const FAMILY_SALT: u32 = 0;
const COUNT_SLOT: u32 = FIRST_FREE_SLOT;
const SECOND_COUNT_SLOT: u32 = FIRST_FREE_SLOT + 1;
const THIRD_COUNT_SLOT: u32 = FIRST_FREE_SLOT + 2;

/// Horizontal step of the wave outlines, in canvas units.
const WAVE_STEP: usize = 10;
/// Simple-style shapes are laid out on a 100 unit grid and scaled to the canvas.
const SIMPLE_GRID: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn clamped(self, size: f64) -> Self {
        Self::new(self.x.clamp(0.0, size), self.y.clamp(0.0, size))
    }

    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub degrees: f64,
    pub pivot: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Triangle {
        points: [Point; 3],
        rotation: Option<Rotation>,
    },
    Hexagon {
        points: [Point; 6],
    },
    Polygon {
        points: Vec<Point>,
    },
    Circle {
        center: Point,
        radius: f64,
        /// `Some` draws an unfilled ring.
        stroke_width: Option<f64>,
    },
    Rect {
        origin: Point,
        width: f64,
        height: f64,
        rotation: Option<Rotation>,
    },
    Line {
        from: Point,
        to: Point,
        stroke_width: f64,
    },
    /// Band below a sampled wave, closed along the bottom edge at `base`.
    WaveBand {
        crest: Vec<Point>,
        base: f64,
    },
}

impl Geometry {
    /// Every coordinate the shape is positioned by.
    #[must_use]
    pub fn anchor_points(&self) -> Vec<Point> {
        match self {
            Geometry::Triangle { points, rotation } => {
                let mut all = points.to_vec();
                all.extend(rotation.map(|rotation| rotation.pivot));
                all
            }
            Geometry::Hexagon { points } => points.to_vec(),
            Geometry::Polygon { points } => points.clone(),
            Geometry::WaveBand { crest, base } => {
                let mut all = crest.clone();
                all.extend([Point::new(*base, *base), Point::new(0.0, *base)]);
                all
            }
            Geometry::Circle { center, .. } => vec![*center],
            Geometry::Rect {
                origin,
                width,
                height,
                rotation,
            } => {
                let mut all = vec![*origin, Point::new(origin.x + width, origin.y + height)];
                all.extend(rotation.map(|rotation| rotation.pivot));
                all
            }
            Geometry::Line { from, to, .. } => vec![*from, *to],
        }
    }

    fn is_finite(&self) -> bool {
        let scalars_finite = match self {
            Geometry::Circle {
                radius,
                stroke_width,
                ..
            } => radius.is_finite() && stroke_width.is_none_or(f64::is_finite),
            Geometry::Rect {
                width,
                height,
                rotation,
                ..
            } => {
                width.is_finite()
                    && height.is_finite()
                    && rotation.is_none_or(|rotation| rotation.degrees.is_finite())
            }
            Geometry::Line { stroke_width, .. } => stroke_width.is_finite(),
            Geometry::Triangle { rotation, .. } => {
                rotation.is_none_or(|rotation| rotation.degrees.is_finite())
            }
            Geometry::Hexagon { .. } | Geometry::Polygon { .. } | Geometry::WaveBand { .. } => true,
        };
        scalars_finite && self.anchor_points().into_iter().all(Point::is_finite)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub geometry: Geometry,
    pub color: Hsl,
    pub opacity: f64,
}

/// Which generator a pattern uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PatternStyle {
    /// Palette-driven patterns at arbitrary canvas size.
    #[default]
    Geometric,
    /// Coarser compositions laid out on a 100 unit grid.
    Simple,
}

impl PatternStyle {
    #[must_use]
    pub fn families(self) -> &'static [PatternFamily] {
        match self {
            PatternStyle::Geometric => &[
                PatternFamily::Triangles,
                PatternFamily::Circles,
                PatternFamily::Hexagons,
                PatternFamily::Lines,
                PatternFamily::Waves,
            ],
            PatternStyle::Simple => &[
                PatternFamily::TiltedTriangles,
                PatternFamily::Rings,
                PatternFamily::Blocks,
                PatternFamily::Composition,
            ],
        }
    }

    /// `random_int(seed, 1, N, 0)` over the style's families.
    #[must_use]
    pub fn select_family(self, seed: &str) -> PatternFamily {
        let families = self.families();
        let pick = Draw::new(seed).int(1, families.len() as u32, FAMILY_SALT);
        families[(pick - 1) as usize]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PatternFamily {
    #[display("triangles")]
    Triangles,
    #[display("circles")]
    Circles,
    #[display("hexagons")]
    Hexagons,
    #[display("lines")]
    Lines,
    #[display("waves")]
    Waves,
    #[display("tilted triangles")]
    TiltedTriangles,
    #[display("rings")]
    Rings,
    #[display("blocks")]
    Blocks,
    #[display("composition")]
    Composition,
}

/// A fully synthesized pattern, ready to be serialized.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub style: PatternStyle,
    pub family: PatternFamily,
    pub size: u32,
    pub palette: Palette,
    pub shapes: Vec<Shape>,
}

/// Builds the palette and shape list for `seed` on a `size` × `size` canvas.
pub fn synthesize(seed: &str, size: u32, style: PatternStyle) -> Result<Pattern, PatternError> {
    if seed.is_empty() {
        return Err(PatternError::EmptySeed);
    }
    if size == 0 {
        return Err(PatternError::ZeroCanvas);
    }
    let palette = Palette::from_seed(seed);
    let family = style.select_family(seed);
    let synth = Synth {
        draw: Draw::new(seed),
        size: f64::from(size),
        palette,
    };
    let shapes = match family {
        PatternFamily::Triangles => synth.triangles(),
        PatternFamily::Circles => synth.circles(),
        PatternFamily::Hexagons => synth.hexagons(),
        PatternFamily::Lines => synth.lines(),
        PatternFamily::Waves => synth.waves(),
        PatternFamily::TiltedTriangles => synth.tilted_triangles(),
        PatternFamily::Rings => synth.rings(),
        PatternFamily::Blocks => synth.blocks(),
        PatternFamily::Composition => synth.composition(),
    };
    if let Some(index) = shapes
        .iter()
        .position(|shape| !shape.geometry.is_finite() || !shape.opacity.is_finite())
    {
        return Err(PatternError::NonFinite { family, index });
    }
    Ok(Pattern {
        style,
        family,
        size,
        palette,
        shapes,
    })
}

struct Synth<'a> {
    draw: Draw<'a>,
    size: f64,
    palette: Palette,
}

impl Synth<'_> {
    fn shape(&self, index: usize, geometry: Geometry, opacity: f64) -> Shape {
        Shape {
            geometry,
            color: self.palette.color(index),
            opacity: opacity.clamp(0.0, 1.0),
        }
    }

    /// Count in `base..=base + spread`, drawn from a pattern-wide slot.
    fn count(&self, base: usize, spread: usize, slot: u32) -> usize {
        base + (self.draw.unit(global_salt(slot)) * spread as f64).floor() as usize
    }

    fn coord(&self, index: usize, field: u32) -> f64 {
        self.draw.shape(index, field) * self.size
    }

    fn triangles(&self) -> Vec<Shape> {
        (0..self.count(5, 10, COUNT_SLOT))
            .map(|i| {
                let points = [
                    Point::new(self.coord(i, 0), self.coord(i, 1)),
                    Point::new(self.coord(i, 2), self.coord(i, 3)),
                    Point::new(self.coord(i, 4), self.coord(i, 5)),
                ];
                let opacity = 0.3 + self.draw.shape(i, 6) * 0.7;
                self.shape(
                    i,
                    Geometry::Triangle {
                        points,
                        rotation: None,
                    },
                    opacity,
                )
            })
            .collect()
    }

    fn circles(&self) -> Vec<Shape> {
        (0..self.count(5, 10, COUNT_SLOT))
            .map(|i| {
                let center = Point::new(self.coord(i, 0), self.coord(i, 1));
                let radius = 10.0 + self.draw.shape(i, 2) * (self.size / 4.0);
                let opacity = 0.3 + self.draw.shape(i, 3) * 0.7;
                self.shape(
                    i,
                    Geometry::Circle {
                        center,
                        radius,
                        stroke_width: None,
                    },
                    opacity,
                )
            })
            .collect()
    }

    fn hexagons(&self) -> Vec<Shape> {
        let hex_size = 20.0 + (self.draw.unit(global_salt(COUNT_SLOT)) * 30.0).floor();
        let column_step = hex_size * 3_f64.sqrt();
        let rows = (self.size / (hex_size * 1.5)).ceil() as usize;
        let cols = (self.size / column_step).ceil() as usize;
        let mut shapes = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                let cell = row * cols + col;
                // Roughly 70% of the cells are filled.
                if self.draw.shape(cell, 0) <= 0.3 {
                    continue;
                }
                let offset = if row % 2 == 0 { 0.0 } else { column_step / 2.0 };
                let cx = col as f64 * column_step + offset;
                let cy = row as f64 * hex_size * 1.5;
                let points = std::array::from_fn(|corner| {
                    let angle = (corner as f64 * 60.0).to_radians();
                    Point::new(cx + hex_size * angle.cos(), cy + hex_size * angle.sin())
                        .clamped(self.size)
                });
                let opacity = 0.3 + self.draw.shape(cell, 1) * 0.7;
                shapes.push(self.shape(row + col, Geometry::Hexagon { points }, opacity));
            }
        }
        shapes
    }

    fn lines(&self) -> Vec<Shape> {
        (0..self.count(10, 20, COUNT_SLOT))
            .map(|i| {
                let from = Point::new(self.coord(i, 0), self.coord(i, 1));
                let to = Point::new(self.coord(i, 2), self.coord(i, 3));
                let stroke_width = 1.0 + self.draw.shape(i, 4) * 10.0;
                let opacity = 0.3 + self.draw.shape(i, 5) * 0.7;
                self.shape(
                    i,
                    Geometry::Line {
                        from,
                        to,
                        stroke_width,
                    },
                    opacity,
                )
            })
            .collect()
    }

    fn waves(&self) -> Vec<Shape> {
        let count = self.count(3, 5, COUNT_SLOT);
        (0..count)
            .map(|i| {
                let start_y = i as f64 / count as f64 * self.size;
                let amplitude = 10.0 + self.draw.shape(i, 0) * 40.0;
                let frequency = 1.0 + self.draw.shape(i, 1) * 5.0;
                let crest = (0..=self.size as usize)
                    .step_by(WAVE_STEP)
                    .map(|x| {
                        let x = x as f64;
                        let y = start_y + (x * frequency / self.size * PI).sin() * amplitude;
                        Point::new(x, y).clamped(self.size)
                    })
                    .collect();
                let opacity = 0.2 + self.draw.shape(i, 2) * 0.4;
                self.shape(
                    i,
                    Geometry::WaveBand {
                        crest,
                        base: self.size,
                    },
                    opacity,
                )
            })
            .collect()
    }

    /// Grid position scaled from the 100 unit layout grid onto the canvas.
    fn grid(&self, value: u32) -> f64 {
        f64::from(value) * self.size / SIMPLE_GRID
    }

    fn grid_point(&self, x: u32, y: u32) -> Point {
        Point::new(self.grid(x), self.grid(y))
    }

    fn simple_opacity(&self, index: usize, field: u32) -> f64 {
        0.3 + self.draw.shape(index, field) * 0.5
    }

    fn tilted_triangles(&self) -> Vec<Shape> {
        let count = self.draw.int(3, 8, global_salt(COUNT_SLOT)) as usize;
        (0..count)
            .map(|i| {
                let size = self.draw.shape_int(15, 40, i, 0);
                let x = self.draw.shape_int(0, 100, i, 1);
                let y = self.draw.shape_int(0, 100, i, 2);
                let degrees = f64::from(self.draw.shape_int(0, 360, i, 3));
                let apex = self.grid_point(x, y);
                let half = self.grid(size);
                let points = [
                    apex,
                    Point::new(apex.x + half, apex.y + half).clamped(self.size),
                    Point::new(apex.x - half, apex.y + half).clamped(self.size),
                ];
                self.shape(
                    i,
                    Geometry::Triangle {
                        points,
                        rotation: Some(Rotation {
                            degrees,
                            pivot: apex,
                        }),
                    },
                    self.simple_opacity(i, 4),
                )
            })
            .collect()
    }

    fn rings(&self) -> Vec<Shape> {
        let count = self.draw.int(3, 7, global_salt(COUNT_SLOT)) as usize;
        (0..count)
            .map(|i| {
                let radius = self.grid(self.draw.shape_int(5, 25, i, 0));
                let center = self.grid_point(
                    self.draw.shape_int(0, 100, i, 1),
                    self.draw.shape_int(0, 100, i, 2),
                );
                let stroke = self.draw.shape_int(0, 5, i, 4);
                self.shape(
                    i,
                    Geometry::Circle {
                        center,
                        radius,
                        stroke_width: (stroke > 0).then(|| self.grid(stroke)),
                    },
                    self.simple_opacity(i, 3),
                )
            })
            .collect()
    }

    fn blocks(&self) -> Vec<Shape> {
        let count = self.draw.int(3, 8, global_salt(COUNT_SLOT)) as usize;
        (0..count)
            .map(|i| {
                let origin = self.grid_point(
                    self.draw.shape_int(0, 100, i, 2),
                    self.draw.shape_int(0, 100, i, 3),
                );
                let opacity = self.simple_opacity(i, 5);
                if self.draw.shape(i, 6) > 0.7 {
                    let to = self.grid_point(
                        self.draw.shape_int(0, 100, i, 7),
                        self.draw.shape_int(0, 100, i, 8),
                    );
                    let stroke_width = self.grid(self.draw.shape_int(1, 3, i, 9));
                    return self.shape(
                        i,
                        Geometry::Line {
                            from: origin,
                            to,
                            stroke_width,
                        },
                        opacity,
                    );
                }
                let width = self
                    .grid(self.draw.shape_int(5, 40, i, 0))
                    .min(self.size - origin.x);
                let height = self
                    .grid(self.draw.shape_int(5, 40, i, 1))
                    .min(self.size - origin.y);
                let degrees = f64::from(self.draw.shape_int(0, 90, i, 4));
                let pivot = Point::new(origin.x + width / 2.0, origin.y + height / 2.0);
                self.shape(
                    i,
                    Geometry::Rect {
                        origin,
                        width,
                        height,
                        rotation: Some(Rotation { degrees, pivot }),
                    },
                    opacity,
                )
            })
            .collect()
    }

    /// Strokes, then jittered polygons, then small dots; shape indices keep
    /// counting across the three groups so every draw gets its own salt.
    fn composition(&self) -> Vec<Shape> {
        let line_count = self.draw.int(2, 5, global_salt(COUNT_SLOT)) as usize;
        let polygon_count = self.draw.int(1, 3, global_salt(SECOND_COUNT_SLOT)) as usize;
        let dot_count = self.draw.int(2, 5, global_salt(THIRD_COUNT_SLOT)) as usize;
        let mut shapes = Vec::with_capacity(line_count + polygon_count + dot_count);

        for i in 0..line_count {
            let from = self.grid_point(
                self.draw.shape_int(0, 100, i, 0),
                self.draw.shape_int(0, 100, i, 1),
            );
            let to = self.grid_point(
                self.draw.shape_int(0, 100, i, 2),
                self.draw.shape_int(0, 100, i, 3),
            );
            let stroke_width = self.grid(self.draw.shape_int(1, 4, i, 4));
            shapes.push(self.shape(
                i,
                Geometry::Line {
                    from,
                    to,
                    stroke_width,
                },
                self.simple_opacity(i, 5),
            ));
        }

        for i in line_count..line_count + polygon_count {
            let corners = self.draw.shape_int(3, 6, i, 0);
            let center = self.grid_point(
                self.draw.shape_int(20, 80, i, 1),
                self.draw.shape_int(20, 80, i, 2),
            );
            let radius = self.grid(self.draw.shape_int(10, 30, i, 3));
            let points = (0..corners)
                .map(|corner| {
                    let angle = f64::from(corner) / f64::from(corners) * 2.0 * PI;
                    let jitter = 0.7 + self.draw.shape(i, 8 + corner) * 0.3;
                    let r = radius * jitter;
                    Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
                        .clamped(self.size)
                })
                .collect();
            shapes.push(self.shape(
                i,
                Geometry::Polygon { points },
                self.simple_opacity(i, 4),
            ));
        }

        let first_dot = line_count + polygon_count;
        for i in first_dot..first_dot + dot_count {
            let radius = self.grid(self.draw.shape_int(2, 8, i, 0));
            let center = self.grid_point(
                self.draw.shape_int(0, 100, i, 1),
                self.draw.shape_int(0, 100, i, 2),
            );
            let opacity = 0.4 + self.draw.shape(i, 3) * 0.6;
            shapes.push(self.shape(
                i,
                Geometry::Circle {
                    center,
                    radius,
                    stroke_width: None,
                },
                opacity,
            ));
        }
        shapes
    }
}
