//! Rejection sampling of three well-separated axis directions.

use rand::Rng;
use serde::{Deserialize, Serialize};
use vecbox_math::angular_distance;

use crate::error::{Result, SampleError};

/// Draws three whole-degree angles in `[0, 360)` whose pairwise
/// shorter-arc distance is at least `min_separation`.
///
/// Every attempt redraws all three angles. Unlike an unbounded loop the
/// sampler gives up after `max_attempts` and reports
/// [`SampleError::Infeasible`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AngleSampler {
    /// Minimum pairwise separation in degrees.
    pub min_separation: f64,
    /// Upper bound on drawn triples before failing.
    pub max_attempts: usize,
}

impl AngleSampler {
    /// Separation used when none is configured.
    pub const DEFAULT_MIN_SEPARATION: f64 = 90.0;

    /// Retry bound used when none is configured.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 4096;

    /// Create a sampler with an explicit separation and retry bound.
    pub fn new(min_separation: f64, max_attempts: usize) -> Self {
        Self {
            min_separation,
            max_attempts,
        }
    }

    /// Whether every pair in `angles` is at least `min_separation` apart.
    pub fn accepts(&self, angles: &[f64; 3]) -> bool {
        let [a, b, c] = *angles;
        angular_distance(a, b) >= self.min_separation
            && angular_distance(a, c) >= self.min_separation
            && angular_distance(b, c) >= self.min_separation
    }

    /// Sample a triple, consuming entropy from `rng` only.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<[f64; 3]> {
        for attempt in 1..=self.max_attempts {
            let angles = [
                rng.random_range(0..360u32) as f64,
                rng.random_range(0..360u32) as f64,
                rng.random_range(0..360u32) as f64,
            ];
            if self.accepts(&angles) {
                log::debug!(
                    "sampled angles A={}°, B={}°, C={}° after {} attempt(s)",
                    angles[0],
                    angles[1],
                    angles[2],
                    attempt
                );
                return Ok(angles);
            }
        }

        log::warn!(
            "angle sampling gave up after {} attempts (separation {}°)",
            self.max_attempts,
            self.min_separation
        );
        Err(SampleError::Infeasible {
            attempts: self.max_attempts,
            min_separation: self.min_separation,
        })
    }
}

impl Default for AngleSampler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_SEPARATION, Self::DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sampled_triples_are_separated() {
        let sampler = AngleSampler::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let angles = sampler.sample(&mut rng).unwrap();
            for a in angles {
                assert!((0.0..360.0).contains(&a));
                assert_eq!(a.fract(), 0.0, "angles are whole degrees");
            }
            assert!(angular_distance(angles[0], angles[1]) >= 90.0);
            assert!(angular_distance(angles[0], angles[2]) >= 90.0);
            assert!(angular_distance(angles[1], angles[2]) >= 90.0);
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let sampler = AngleSampler::default();
        let a = sampler.sample(&mut StdRng::seed_from_u64(99)).unwrap();
        let b = sampler.sample(&mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_accepts_boundary() {
        let sampler = AngleSampler::default();
        // exactly 90 apart on every pair is allowed
        assert!(sampler.accepts(&[0.0, 90.0, 180.0]));
        assert!(sampler.accepts(&[0.0, 120.0, 240.0]));
        // 45 apart is not
        assert!(!sampler.accepts(&[0.0, 45.0, 180.0]));
        // wrap-around: 350 and 10 are only 20 apart
        assert!(!sampler.accepts(&[350.0, 10.0, 180.0]));
    }

    #[test]
    fn test_impossible_separation_fails_explicitly() {
        // three directions can be at most 120° apart pairwise
        let sampler = AngleSampler::new(121.0, 50);
        let mut rng = StdRng::seed_from_u64(1);
        let err = sampler.sample(&mut rng).unwrap_err();
        assert_eq!(
            err,
            SampleError::Infeasible {
                attempts: 50,
                min_separation: 121.0
            }
        );
    }

    #[test]
    fn test_zero_attempts_fails() {
        let sampler = AngleSampler::new(90.0, 0);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(
            sampler.sample(&mut rng),
            Err(SampleError::Infeasible { attempts: 0, .. })
        ));
    }
}
