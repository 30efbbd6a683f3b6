//! Deterministic artwork derived from a string seed.
//!
//! [`synthesize`] turns a seed into a palette and a list of shapes, the
//! [`Display`](std::fmt::Display) impl of [`Pattern`] writes SVG markup, and
//! [`data_uri`] packs that markup so it can be used as an image source.
//! Rendering never fails; see [`render_svg`].

pub mod cache;
pub mod palette;
pub mod prng;
pub mod shape;
pub mod svg;

pub use cache::{PatternCache, SharedPatternCache};
pub use palette::{Hsl, Palette};
pub use prng::{hash_code, random_int, seeded_random};
pub use shape::{Geometry, Pattern, PatternFamily, PatternStyle, Point, Shape, synthesize};
pub use svg::{DataUriEncoding, data_uri, fallback_svg, render_svg, to_data_uri};

/// Canvas edge length used when the caller does not pick one.
pub const DEFAULT_SIZE: u32 = 200;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
    #[error("seed must not be empty")]
    EmptySeed,
    #[error("canvas size must be positive")]
    ZeroCanvas,
    #[error("{family} shape #{index} has non-finite geometry")]
    NonFinite { family: PatternFamily, index: usize },
}
