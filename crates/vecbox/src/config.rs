//! Scene configuration loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use vecbox_math::Point2;
use vecbox_sampler::{AngleSampler, LengthBounds};

use crate::error::Result;

/// Canvas dimensions. The axes share the canvas centre as origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    /// Width in canvas units.
    pub width: f64,
    /// Height in canvas units.
    pub height: f64,
}

impl Canvas {
    /// Centre of the canvas.
    pub fn origin(&self) -> Point2 {
        Point2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
        }
    }
}

/// Everything needed to generate and draw a scene.
///
/// Every field is optional in TOML; missing ones take their defaults.
///
/// ```toml
/// convergence = [0.2, 0.0, 0.35]
///
/// [lengths]
/// min = 50
/// max = 300
///
/// [sampler]
/// min_separation = 90.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Per-axis convergence factors for A, B, C.
    pub convergence: [f64; 3],
    /// Canvas size.
    pub canvas: Canvas,
    /// Bounds for generated lengths.
    pub lengths: LengthBounds,
    /// Angle sampling constraint.
    pub sampler: AngleSampler,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            convergence: [0.0; 3],
            canvas: Canvas::default(),
            lengths: LengthBounds::default(),
            sampler: AngleSampler::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Self::from_toml_str(&text)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        let cfg = SceneConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, SceneConfig::default());
        assert_eq!(cfg.canvas.origin(), Point2::new(400.0, 400.0));
    }

    #[test]
    fn test_partial_toml() {
        let cfg = SceneConfig::from_toml_str(
            r#"
            convergence = [0.2, 0.0, 0.35]

            [lengths]
            min = 50

            [sampler]
            max_attempts = 100
            "#,
        )
        .unwrap();
        assert_eq!(cfg.convergence, [0.2, 0.0, 0.35]);
        assert_eq!(cfg.lengths.min(), 50);
        assert_eq!(cfg.lengths.max(), 400);
        assert_eq!(cfg.sampler.max_attempts, 100);
        assert_eq!(cfg.sampler.min_separation, 90.0);
    }

    #[test]
    fn test_invalid_bounds_corrected() {
        let cfg = SceneConfig::from_toml_str("[lengths]\nmin = 300\nmax = 20\n").unwrap();
        assert_eq!((cfg.lengths.min(), cfg.lengths.max()), (300, 301));

        let cfg = SceneConfig::from_toml_str("[lengths]\nmin = 0\nmax = 999\n").unwrap();
        assert_eq!((cfg.lengths.min(), cfg.lengths.max()), (1, 400));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut cfg = SceneConfig::default();
        cfg.convergence = [0.1, 0.2, 0.3];
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(SceneConfig::from_toml_str(&text).unwrap(), cfg);
    }
}
