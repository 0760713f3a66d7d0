//! Axis length bounds and uniform length sampling.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SampleError};

/// Inclusive range of axis lengths used when generating vectors.
///
/// Always satisfies `HARD_MIN <= min < max <= HARD_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawBounds", into = "RawBounds")]
pub struct LengthBounds {
    min: u32,
    max: u32,
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
struct RawBounds {
    min: i64,
    max: i64,
}

impl From<RawBounds> for LengthBounds {
    fn from(raw: RawBounds) -> Self {
        Self::from_inputs(Some(raw.min), Some(raw.max))
    }
}

impl From<LengthBounds> for RawBounds {
    fn from(b: LengthBounds) -> Self {
        Self {
            min: b.min as i64,
            max: b.max as i64,
        }
    }
}

impl Default for RawBounds {
    fn default() -> Self {
        LengthBounds::default().into()
    }
}

impl LengthBounds {
    /// Smallest permitted minimum.
    pub const HARD_MIN: u32 = 1;
    /// Largest permitted maximum.
    pub const HARD_MAX: u32 = 400;
    /// Minimum used before any user input.
    pub const DEFAULT_MIN: u32 = 10;
    /// Maximum used before any user input.
    pub const DEFAULT_MAX: u32 = 400;

    /// Strict constructor: rejects anything outside `1 <= min < max <= 400`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        let ok = min >= Self::HARD_MIN as i64 && min < max && max <= Self::HARD_MAX as i64;
        if !ok {
            return Err(SampleError::InvalidBounds { min, max });
        }
        Ok(Self {
            min: min as u32,
            max: max as u32,
        })
    }

    /// Lenient constructor for raw user input. Never fails.
    ///
    /// A missing or too-small minimum becomes `1`, a missing or too-large
    /// maximum becomes `400`. If the minimum still does not sit below the
    /// maximum, the maximum is forced to `min + 1`; when that overshoots
    /// the ceiling the pair becomes `399..=400`.
    pub fn from_inputs(min: Option<i64>, max: Option<i64>) -> Self {
        let hard_min = Self::HARD_MIN as i64;
        let hard_max = Self::HARD_MAX as i64;

        let mut lo = match min {
            Some(v) if v >= hard_min => v,
            _ => hard_min,
        };
        let mut hi = match max {
            Some(v) if v <= hard_max => v,
            _ => hard_max,
        };

        if lo >= hi {
            hi = lo + 1;
            if hi > hard_max {
                hi = hard_max;
                lo = hard_max - 1;
            }
        }

        if min != Some(lo) || max != Some(hi) {
            log::warn!(
                "length bounds corrected from ({:?}, {:?}) to ({}, {})",
                min,
                max,
                lo,
                hi
            );
        }

        Self {
            min: lo as u32,
            max: hi as u32,
        }
    }

    /// Lenient constructor from text fields, parsed like a web form would.
    pub fn parse(min: &str, max: &str) -> Self {
        Self::from_inputs(parse_leading_int(min), parse_leading_int(max))
    }

    /// Lower bound (inclusive).
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound (inclusive).
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Whether `length` lies inside the bounds.
    pub fn contains(&self, length: u32) -> bool {
        (self.min..=self.max).contains(&length)
    }

    /// Draw a uniform integer length in `[min, max]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(self.min..=self.max)
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Parse an optional sign followed by leading decimal digits, ignoring
/// surrounding whitespace and any trailing text (`"12px"` is `12`).
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[..digits].parse::<i64>().ok().map(|v| sign * v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_strict_bounds() {
        assert!(LengthBounds::new(1, 400).is_ok());
        assert!(LengthBounds::new(0, 400).is_err());
        assert!(LengthBounds::new(10, 10).is_err());
        assert!(LengthBounds::new(10, 401).is_err());
    }

    #[test]
    fn test_missing_inputs_use_hard_limits() {
        let b = LengthBounds::from_inputs(None, None);
        assert_eq!((b.min(), b.max()), (1, 400));

        let b = LengthBounds::from_inputs(Some(-5), Some(1000));
        assert_eq!((b.min(), b.max()), (1, 400));
    }

    #[test]
    fn test_inverted_bounds_are_corrected() {
        let b = LengthBounds::from_inputs(Some(50), Some(20));
        assert_eq!((b.min(), b.max()), (50, 51));

        let b = LengthBounds::from_inputs(Some(400), Some(400));
        assert_eq!((b.min(), b.max()), (399, 400));

        let b = LengthBounds::from_inputs(Some(900), Some(100));
        assert_eq!((b.min(), b.max()), (399, 400));
    }

    #[test]
    fn test_parse_text_inputs() {
        let b = LengthBounds::parse(" 25", "300px");
        assert_eq!((b.min(), b.max()), (25, 300));

        let b = LengthBounds::parse("abc", "");
        assert_eq!((b.min(), b.max()), (1, 400));

        assert_eq!(parse_leading_int("3.7"), Some(3));
        assert_eq!(parse_leading_int("-12"), Some(-12));
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_sample_within_bounds() {
        let b = LengthBounds::new(10, 12).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let len = b.sample(&mut rng);
            assert!(b.contains(len));
            seen[(len - 10) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every length in range is reachable");
    }

    #[test]
    fn test_deserialized_bounds_are_corrected() {
        let b = LengthBounds::from(RawBounds { min: 30, max: 5 });
        assert_eq!((b.min(), b.max()), (30, 31));

        let b = LengthBounds::from(RawBounds { min: 0, max: 999 });
        assert_eq!((b.min(), b.max()), (1, 400));
    }
}
