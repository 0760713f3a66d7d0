#![warn(missing_docs)]

//! Constrained random axis generation for the vecbox perspective engine.
//!
//! Produces the raw parameters of a scene: three directions with a
//! minimum pairwise separation and three integer lengths drawn from
//! validated bounds. The random source is always passed in, so tests
//! and callers can seed it.
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use vecbox_sampler::{sample_axes, AngleSampler, LengthBounds};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let axes = sample_axes(&AngleSampler::default(), &LengthBounds::default(), &mut rng).unwrap();
//! assert!(axes.iter().all(|a| a.length >= 10 && a.length <= 400));
//! ```

pub mod angles;
pub mod error;
pub mod lengths;

pub use angles::AngleSampler;
pub use error::{Result, SampleError};
pub use lengths::LengthBounds;

use rand::Rng;

/// Raw parameters for one axis: direction in degrees and integer length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSample {
    /// Direction in whole degrees, `[0, 360)`.
    pub angle_degrees: f64,
    /// Length in canvas units.
    pub length: u32,
}

/// Draw lengths for A, B, C and then a separated angle triple.
///
/// Lengths are drawn first so that the entropy consumed matches the
/// order in which the axes are later built.
pub fn sample_axes<R: Rng>(
    sampler: &AngleSampler,
    bounds: &LengthBounds,
    rng: &mut R,
) -> Result<[AxisSample; 3]> {
    let lengths = [bounds.sample(rng), bounds.sample(rng), bounds.sample(rng)];
    let angles = sampler.sample(rng)?;
    Ok([0, 1, 2].map(|i| AxisSample {
        angle_degrees: angles[i],
        length: lengths[i],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_axes_respects_both_constraints() {
        let sampler = AngleSampler::default();
        let bounds = LengthBounds::new(20, 80).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let axes = sample_axes(&sampler, &bounds, &mut rng).unwrap();
            assert!(axes.iter().all(|a| bounds.contains(a.length)));
            let angles = axes.map(|a| a.angle_degrees);
            assert!(sampler.accepts(&angles));
        }
    }

    #[test]
    fn test_sample_axes_propagates_infeasible() {
        let sampler = AngleSampler::new(150.0, 10);
        let mut rng = StdRng::seed_from_u64(2);
        let result = sample_axes(&sampler, &LengthBounds::default(), &mut rng);
        assert!(matches!(result, Err(SampleError::Infeasible { .. })));
    }
}
