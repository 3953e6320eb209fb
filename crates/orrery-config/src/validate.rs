//! Range checks run before any generation starts.
//!
//! Every check runs; the caller gets the full list of problems rather than the
//! first one.

use crate::config::{AnimationConfig, Config, SceneConfig};
use crate::error::{ConfigError, Violations};

/// Smallest accepted canvas width or height, in pixels.
pub const MIN_DIMENSION: u32 = 64;

impl SceneConfig {
    /// Collect every out-of-range scene setting.
    pub fn violations(&self) -> Violations {
        let mut v = Violations::default();

        if !(0.0..=1.0).contains(&self.star_density) {
            v.push(
                "scene.star_density",
                format!("must be within [0, 1], got {}", self.star_density),
            );
        }
        if self.planets < 1 {
            v.push("scene.planets", "must be at least 1");
        }
        if self.sun_size < 1 {
            v.push("scene.sun_size", "must be at least 1");
        }
        if self.width < MIN_DIMENSION {
            v.push(
                "scene.width",
                format!("must be at least {MIN_DIMENSION}, got {}", self.width),
            );
        }
        if self.height < MIN_DIMENSION {
            v.push(
                "scene.height",
                format!("must be at least {MIN_DIMENSION}, got {}", self.height),
            );
        }
        // Orbit radii are drawn from [sun_size, min(width, height) / 4].
        let max_radius = self.width.min(self.height) / 4;
        if self.sun_size > max_radius {
            v.push(
                "scene.sun_size",
                format!(
                    "must not exceed a quarter of the smaller canvas dimension ({max_radius}), got {}",
                    self.sun_size
                ),
            );
        }

        v
    }

    /// `Ok(())` or [`ConfigError::Invalid`] listing every violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.violations().into_result()
    }
}

impl AnimationConfig {
    /// Collect every out-of-range animation setting.
    pub fn violations(&self) -> Violations {
        let mut v = Violations::default();

        if !self.trail_length.is_finite() || self.trail_length < 0.0 {
            v.push(
                "animation.trail_length",
                format!("must be a non-negative number, got {}", self.trail_length),
            );
        }
        if !self.perfect_loop && self.frames < 1 {
            v.push("animation.frames", "must be at least 1");
        }

        v
    }
}

impl Config {
    /// Validate every section, reporting all violations together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut all = self.scene.violations();
        all.0.extend(self.animation.violations().0);
        all.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_negative_density_rejected() {
        let scene = SceneConfig {
            star_density: -1.0,
            ..SceneConfig::default()
        };
        let violations = scene.violations();
        assert_eq!(violations.len(), 1);
        assert!(violations.contains("scene.star_density"));
    }

    #[test]
    fn test_density_bounds_inclusive() {
        for density in [0.0, 1.0] {
            let scene = SceneConfig {
                star_density: density,
                ..SceneConfig::default()
            };
            assert!(scene.validate().is_ok(), "density {density} rejected");
        }
    }

    #[test]
    fn test_nan_density_rejected() {
        let scene = SceneConfig {
            star_density: f64::NAN,
            ..SceneConfig::default()
        };
        assert!(scene.violations().contains("scene.star_density"));
    }

    #[test]
    fn test_all_violations_reported_together() {
        let config = Config {
            scene: SceneConfig {
                width: 10,
                height: 0,
                star_density: 2.0,
                planets: 0,
                sun_size: 0,
                ..SceneConfig::default()
            },
            animation: AnimationConfig {
                trail_length: -1.0,
                frames: 0,
                ..AnimationConfig::default()
            },
            ..Config::default()
        };

        match config.validate() {
            Err(ConfigError::Invalid(v)) => {
                for field in [
                    "scene.width",
                    "scene.height",
                    "scene.star_density",
                    "scene.planets",
                    "scene.sun_size",
                    "animation.trail_length",
                    "animation.frames",
                ] {
                    assert!(v.contains(field), "missing violation for {field}: {v}");
                }
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_sun_larger_than_orbit_ceiling_rejected() {
        let scene = SceneConfig {
            width: 400,
            height: 100,
            sun_size: 30,
            ..SceneConfig::default()
        };
        assert!(scene.violations().contains("scene.sun_size"));
    }

    #[test]
    fn test_perfect_loop_ignores_frame_count() {
        let animation = AnimationConfig {
            frames: 0,
            perfect_loop: true,
            ..AnimationConfig::default()
        };
        assert!(animation.violations().is_empty());
    }
}
