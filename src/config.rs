//! Game configuration
//!
//! The five tunables the round simulation reads, plus the paddle and ball
//! geometry derived from the field's aspect ratio.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Environment variable naming a JSON config file (native only)
pub const CONFIG_ENV_VAR: &str = "DUO_PONG_CONFIG";

/// Field and speed configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Field width in pixels
    pub field_width: f32,
    /// Field height in pixels
    pub field_height: f32,
    /// Target frames (and ticks) per second
    pub frame_rate: u32,
    /// Paddle displacement per tick, in pixels
    pub paddle_speed: f32,
    /// Ball displacement per tick, in pixels
    pub ball_speed: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            frame_rate: FRAME_RATE,
            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
        }
    }
}

impl GameConfig {
    /// Width over height
    pub fn aspect_ratio(&self) -> f32 {
        self.field_width / self.field_height
    }

    /// Paddle half extents, scaled by the aspect ratio
    pub fn paddle_half_extents(&self) -> Vec2 {
        PADDLE_BASE_SIZE * self.aspect_ratio() * 0.5
    }

    /// Ball radius, scaled by the aspect ratio
    pub fn ball_radius(&self) -> f32 {
        BALL_BASE_RADIUS * self.aspect_ratio()
    }

    /// Center of the field
    pub fn field_center(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field: name,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid {
                field: "frame_rate",
                reason: "must be at least 1".to_string(),
            });
        }
        // Both paddles must fit vertically or no move could ever be accepted
        let paddle_height = self.paddle_half_extents().y * 2.0;
        if paddle_height >= self.field_height {
            return Err(ConfigError::Invalid {
                field: "field_height",
                reason: format!("paddle height {paddle_height:.1} does not fit"),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing keys take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

/// Why a configuration could not be used
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, .. } => write!(f, "failed to read config file {path}"),
            ConfigError::Parse(_) => write!(f, "config is not valid JSON"),
            ConfigError::Invalid { field, reason } => write!(f, "invalid {field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.field_width, 640.0);
        assert_eq!(config.field_height, 480.0);
        assert_eq!(config.frame_rate, 60);
        assert!(config.validate().is_ok());

        // 20x80 paddle and radius 8 scaled by 4:3
        let half = config.paddle_half_extents();
        assert!((half.x - 40.0 / 3.0).abs() < 1e-4);
        assert!((half.y - 160.0 / 3.0).abs() < 1e-4);
        assert!((config.ball_radius() - 32.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "ball_speed": 9.5 }"#).unwrap();
        assert_eq!(config.ball_speed, 9.5);
        assert_eq!(config.field_width, FIELD_WIDTH);
        assert_eq!(config.paddle_speed, PADDLE_SPEED);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = GameConfig::from_json(r#"{ "paddle_speed": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "paddle_speed", .. }));

        let err = GameConfig::from_json(r#"{ "frame_rate": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "frame_rate", .. }));

        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_field_too_short_for_paddle() {
        // A very wide, short field scales the paddle past the field height
        let config = GameConfig {
            field_width: 2000.0,
            field_height: 100.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = GameConfig::load(Path::new("/nonexistent/duo-pong.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/duo-pong.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
