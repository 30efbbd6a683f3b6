use super::shape::{Geometry, Pattern, PatternStyle, Point, Rotation, Shape, synthesize};
use crate::util::encode::encode_uri_component;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use itertools::Itertools as _;
use log::warn;
use std::fmt::{self, Display};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// How markup is packed into a `data:` URI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataUriEncoding {
    /// `data:image/svg+xml;utf8,` followed by URI-component escaped markup.
    Utf8,
    /// `data:image/svg+xml;base64,` followed by the base64 of the UTF-8 markup.
    Base64,
}

impl PatternStyle {
    #[must_use]
    pub fn encoding(self) -> DataUriEncoding {
        match self {
            PatternStyle::Geometric => DataUriEncoding::Utf8,
            PatternStyle::Simple => DataUriEncoding::Base64,
        }
    }

    /// Solid swatch painted when a pattern cannot be generated.
    #[must_use]
    pub fn fallback_color(self) -> &'static str {
        match self {
            PatternStyle::Geometric => "#3498db",
            PatternStyle::Simple => "#7c3aed",
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

struct Points<'a>(&'a [Point]);

impl Display for Points<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().format(" "))
    }
}

struct Transform(Option<Rotation>);

impl Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(Rotation { degrees, pivot }) => write!(
                f,
                r#" transform="rotate({degrees}, {}, {})""#,
                pivot.x, pivot.y
            ),
            None => Ok(()),
        }
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Shape {
            geometry,
            color,
            opacity,
        } = self;
        match geometry {
            Geometry::Triangle { points, rotation } => write!(
                f,
                r#"<polygon points="{}"{} fill="{color}" opacity="{opacity}" />"#,
                Points(points),
                Transform(*rotation)
            ),
            Geometry::Hexagon { points } => write!(
                f,
                r#"<polygon points="{}" fill="{color}" opacity="{opacity}" />"#,
                Points(points)
            ),
            Geometry::Polygon { points } => write!(
                f,
                r#"<polygon points="{}" fill="{color}" opacity="{opacity}" />"#,
                Points(points)
            ),
            Geometry::Circle {
                center,
                radius,
                stroke_width: Some(stroke_width),
            } => write!(
                f,
                r#"<circle cx="{}" cy="{}" r="{radius}" fill="none" stroke="{color}" stroke-width="{stroke_width}" opacity="{opacity}" />"#,
                center.x, center.y
            ),
            Geometry::Circle {
                center,
                radius,
                stroke_width: None,
            } => write!(
                f,
                r#"<circle cx="{}" cy="{}" r="{radius}" fill="{color}" opacity="{opacity}" />"#,
                center.x, center.y
            ),
            Geometry::Rect {
                origin,
                width,
                height,
                rotation,
            } => write!(
                f,
                r#"<rect x="{}" y="{}" width="{width}" height="{height}"{} fill="{color}" opacity="{opacity}" />"#,
                origin.x,
                origin.y,
                Transform(*rotation)
            ),
            Geometry::Line {
                from,
                to,
                stroke_width,
            } => write!(
                f,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="{stroke_width}" opacity="{opacity}" />"#,
                from.x, from.y, to.x, to.y
            ),
            Geometry::WaveBand { crest, base } => {
                let Some(first) = crest.first() else {
                    return Ok(());
                };
                write!(f, r#"<path d="M 0 {}"#, first.y)?;
                for point in crest {
                    write!(f, " L {} {}", point.x, point.y)?;
                }
                write!(
                    f,
                    r#" L {base} {base} L 0 {base} Z" fill="{color}" opacity="{opacity}" />"#
                )
            }
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size;
        write!(
            f,
            r#"<svg width="{size}" height="{size}" xmlns="{SVG_NS}" viewBox="0 0 {size} {size}">"#
        )?;
        write!(
            f,
            r#"<rect width="{size}" height="{size}" fill="{}" />"#,
            self.palette.background
        )?;
        for shape in &self.shapes {
            write!(f, "{shape}")?;
        }
        f.write_str("</svg>")
    }
}

/// Solid single-color swatch used in place of a pattern.
#[must_use]
pub fn fallback_svg(size: u32, color: &str) -> String {
    format!(
        r#"<svg width="{size}" height="{size}" xmlns="{SVG_NS}"><rect width="{size}" height="{size}" fill="{color}"/></svg>"#
    )
}

/// Markup for `seed`. Never fails: generation errors degrade to the style's
/// fallback swatch.
#[must_use]
pub fn render_svg(seed: &str, size: u32, style: PatternStyle) -> String {
    match synthesize(seed, size, style) {
        Ok(pattern) => pattern.to_string(),
        Err(err) => {
            warn!("Falling back to a solid swatch for seed {seed:?}: {err}");
            fallback_svg(size.max(1), style.fallback_color())
        }
    }
}

#[must_use]
pub fn to_data_uri(svg: &str, encoding: DataUriEncoding) -> String {
    match encoding {
        DataUriEncoding::Utf8 => {
            format!("data:image/svg+xml;utf8,{}", encode_uri_component(svg))
        }
        DataUriEncoding::Base64 => {
            format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
        }
    }
}

/// Data URI for `seed`, encoded the way the style expects.
#[must_use]
pub fn data_uri(seed: &str, size: u32, style: PatternStyle) -> String {
    to_data_uri(&render_svg(seed, size, style), style.encoding())
}
