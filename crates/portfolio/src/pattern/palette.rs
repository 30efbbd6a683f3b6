use super::prng::seeded_random;
use std::fmt::{self, Display};

const HUE_SALT: u32 = 1;
const SATURATION_SALT: u32 = 2;
const LIGHTNESS_SALT: u32 = 3;

/// Color in HSL space; saturation and lightness are percentages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    #[must_use]
    pub fn new(hue: u16, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: hue % 360,
            saturation,
            lightness,
        }
    }

    #[must_use]
    pub fn rotate(self, degrees: u16) -> Self {
        Self::new((self.hue + degrees) % 360, self.saturation, self.lightness)
    }
}

impl Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// The five colors a pattern is painted with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Hsl,
    pub secondary: Hsl,
    pub accent1: Hsl,
    pub accent2: Hsl,
    pub background: Hsl,
}

impl Palette {
    /// Derives a palette from the seed: a base hue plus its complement and two
    /// accents at fixed offsets, over a pale tint of the base hue.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let hue = ((seeded_random(seed, HUE_SALT) * 360.0).floor() as u16).min(359);
        let saturation = 60.0 + (seeded_random(seed, SATURATION_SALT) * 20.0).floor();
        let lightness = 50.0 + (seeded_random(seed, LIGHTNESS_SALT) * 10.0).floor();
        let primary = Hsl::new(hue, saturation, lightness);
        Self {
            primary,
            secondary: primary.rotate(180),
            accent1: primary.rotate(60),
            accent2: primary.rotate(240),
            background: Hsl::new(hue, saturation / 3.0, 95.0),
        }
    }

    /// Foreground colors in round-robin order; the background is never picked.
    #[must_use]
    pub fn color(&self, index: usize) -> Hsl {
        match index % 4 {
            0 => self.primary,
            1 => self.secondary,
            2 => self.accent1,
            _ => self.accent2,
        }
    }
}
