//! Seeded, string-keyed number stream.
//!
//! Every draw is a pure function of `(seed, salt)`: the salt is appended to the
//! seed as a decimal string and the result is run through a 31-multiplier
//! rolling hash over UTF-16 code units with 32-bit wraparound. Identical input
//! gives identical output on every platform, which is what keeps the generated
//! artwork stable between builds.

/// Salts below this value are reserved for draws that are not tied to a shape.
const RESERVED_SALTS: u32 = 16;
/// Salts `0..=3` are used verbatim by the family selector and the palette.
pub(crate) const FIRST_FREE_SLOT: u32 = 4;
/// Number of attribute slots available to a single shape.
const FIELDS_PER_SHAPE: u32 = 16;
/// Odd multiplier, so scrambling is a bijection on `u32`.
const SCRAMBLE: u32 = 0x9E37_79B1;
const SIGN_MASK: i32 = 0x7fff_ffff;

/// Rolling hash: `hash = hash * 31 + unit`, truncated to 32 bits at every step.
#[must_use]
pub fn hash_code(input: &str) -> i32 {
    input.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Deterministic number in `[0, 1]` for `seed` and `index`.
///
/// The sign bit is masked off rather than taking the absolute value.
/// `1.0` is only produced when the masked hash is exactly `0x7fffffff`.
#[must_use]
pub fn seeded_random(seed: &str, index: u32) -> f64 {
    let hash = hash_code(&format!("{seed}{index}"));
    f64::from(hash & SIGN_MASK) / f64::from(SIGN_MASK)
}

/// Integer in `min..=max` drawn with [`seeded_random`].
#[must_use]
pub fn random_int(seed: &str, min: u32, max: u32, salt: u32) -> u32 {
    debug_assert!(min <= max);
    let span = f64::from(max - min + 1);
    let offset = (seeded_random(seed, salt) * span).floor() as u32;
    (min + offset).min(max)
}

/// Salt for a pattern-wide draw (shape counts, cell size, ...).
///
/// Adjacent salts hash to adjacent values, so slots are scrambled before use.
pub(crate) fn global_salt(slot: u32) -> u32 {
    debug_assert!((FIRST_FREE_SLOT..RESERVED_SALTS).contains(&slot));
    slot.wrapping_mul(SCRAMBLE)
}

/// Salt for attribute `field` of shape number `shape`. Unique per pair.
pub(crate) fn shape_salt(shape: usize, field: u32) -> u32 {
    debug_assert!(field < FIELDS_PER_SHAPE);
    let key = RESERVED_SALTS + (shape as u32) * FIELDS_PER_SHAPE + field;
    key.wrapping_mul(SCRAMBLE)
}

/// Draws bound to one seed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Draw<'a> {
    seed: &'a str,
}

impl<'a> Draw<'a> {
    pub(crate) fn new(seed: &'a str) -> Self {
        Self { seed }
    }

    pub(crate) fn unit(&self, salt: u32) -> f64 {
        seeded_random(self.seed, salt)
    }

    pub(crate) fn int(&self, min: u32, max: u32, salt: u32) -> u32 {
        random_int(self.seed, min, max, salt)
    }

    pub(crate) fn shape(&self, shape: usize, field: u32) -> f64 {
        self.unit(shape_salt(shape, field))
    }

    pub(crate) fn shape_int(&self, min: u32, max: u32, shape: usize, field: u32) -> u32 {
        self.int(min, max, shape_salt(shape, field))
    }
}
