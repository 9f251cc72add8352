//! Radar panel configuration
//!
//! The tunable values that shape the projection, with explanations of
//! their purpose. Loadable from a TOML file for data-driven setups.

use glam::{Vec2, Vec3};
use serde::Deserialize;
use std::path::Path;

use crate::core::error::{RadarError, Result};

/// Configuration for the radar panel projection
///
/// These values control how much of the game world the panel shows and
/// where projected icons land on it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// Multiplier on projected distance (world units -> panel units)
    ///
    /// Larger values magnify the world around the player, pushing icons
    /// toward the panel edge sooner.
    pub map_scale: f32,

    /// Anchor point of the panel; icon offsets are measured from here
    pub pivot: Vec2,

    /// World position of the radar panel surface
    ///
    /// Added to every projected icon position so icons travel with the
    /// panel if the host UI moves it.
    pub panel_position: Vec3,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            map_scale: 2.0,
            pivot: Vec2::ZERO,
            panel_position: Vec3::ZERO,
        }
    }
}

impl RadarConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.map_scale.is_finite() || self.map_scale <= 0.0 {
            return Err(RadarError::InvalidConfig(format!(
                "map_scale ({}) must be finite and positive",
                self.map_scale
            )));
        }
        if !self.pivot.is_finite() || !self.panel_position.is_finite() {
            return Err(RadarError::InvalidConfig(
                "pivot and panel_position must be finite".into(),
            ));
        }
        Ok(())
    }

    /// Parse a config from TOML text
    ///
    /// Missing fields fall back to their defaults.
    pub fn parse(content: &str) -> Result<Self> {
        let config: RadarConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RadarConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.map_scale, 2.0);
    }

    #[test]
    fn test_zero_map_scale_rejected() {
        let config = RadarConfig {
            map_scale: 0.0,
            ..RadarConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_map_scale_rejected() {
        let config = RadarConfig {
            map_scale: -1.5,
            ..RadarConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_nan_map_scale_rejected() {
        let config = RadarConfig {
            map_scale: f32::NAN,
            ..RadarConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            map_scale = 3.5
            pivot = [64.0, 64.0]
            panel_position = [640.0, 360.0, 0.0]
        "#;
        let config = RadarConfig::parse(toml).expect("config should parse");
        assert_eq!(config.map_scale, 3.5);
        assert_eq!(config.pivot, Vec2::new(64.0, 64.0));
        assert_eq!(config.panel_position, Vec3::new(640.0, 360.0, 0.0));
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = RadarConfig::parse("").expect("empty config should parse");
        assert_eq!(config.map_scale, 2.0);
        assert_eq!(config.pivot, Vec2::ZERO);
    }

    #[test]
    fn test_parse_rejects_invalid_scale() {
        let result = RadarConfig::parse("map_scale = -2.0");
        assert!(result.is_err());
    }
}
