//! Game settings
//!
//! Passed to `GameState::new` at construction. Loadable from JSON; missing
//! fields fall back to the defaults in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of cells generated for each run
    pub road_length: usize,
    /// Distance between neighbouring cells along the road axis
    pub cell_width: f32,
    /// Fallback jump duration (seconds) when no clip table is wired
    pub jump_duration: f32,
    /// Delay (seconds) before input is accepted after the start command
    pub input_enable_delay: f32,
    /// Run seed; `None` draws a fresh one from the OS
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            road_length: DEFAULT_ROAD_LENGTH,
            cell_width: CELL_WIDTH,
            jump_duration: DEFAULT_JUMP_DURATION,
            input_enable_delay: INPUT_ENABLE_DELAY,
            seed: None,
        }
    }
}

impl Settings {
    /// Default settings with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Check every tunable; the first violation wins
    pub fn validate(&self) -> Result<(), GameError> {
        if self.road_length == 0 {
            return Err(GameError::invalid("road_length", "must be at least 1"));
        }
        if !(self.cell_width.is_finite() && self.cell_width > 0.0) {
            return Err(GameError::invalid(
                "cell_width",
                format!("must be a positive number (got {})", self.cell_width),
            ));
        }
        if !(self.jump_duration.is_finite() && self.jump_duration > 0.0) {
            return Err(GameError::invalid(
                "jump_duration",
                format!("must be a positive number (got {})", self.jump_duration),
            ));
        }
        if !(self.input_enable_delay.is_finite() && self.input_enable_delay >= 0.0) {
            return Err(GameError::invalid(
                "input_enable_delay",
                format!("must not be negative (got {})", self.input_enable_delay),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON settings document
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.road_length, 50);
        assert_eq!(settings.cell_width, 40.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_road_length_rejected() {
        let settings = Settings {
            road_length: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(GameError::InvalidConfiguration {
                field: "road_length",
                ..
            })
        ));
    }

    #[test]
    fn test_bad_cell_width_rejected() {
        for width in [0.0, -40.0, f32::NAN, f32::INFINITY] {
            let settings = Settings {
                cell_width: width,
                ..Settings::default()
            };
            assert!(settings.validate().is_err(), "width {width} accepted");
        }
    }

    #[test]
    fn test_bad_jump_duration_rejected() {
        for duration in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let settings = Settings {
                jump_duration: duration,
                ..Settings::default()
            };
            assert!(
                matches!(
                    settings.validate(),
                    Err(GameError::InvalidConfiguration {
                        field: "jump_duration",
                        ..
                    })
                ),
                "duration {duration} accepted"
            );
        }
    }

    #[test]
    fn test_bad_input_delay_rejected() {
        for delay in [-0.1, f32::NAN] {
            let settings = Settings {
                input_enable_delay: delay,
                ..Settings::default()
            };
            assert!(
                matches!(
                    settings.validate(),
                    Err(GameError::InvalidConfiguration {
                        field: "input_enable_delay",
                        ..
                    })
                ),
                "delay {delay} accepted"
            );
        }

        let immediate = Settings {
            input_enable_delay: 0.0,
            ..Settings::default()
        };
        assert!(immediate.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GameError::ConfigIo(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "road_length": 8, "jump_duration": 0.25 }"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.road_length, 8);
        assert_eq!(settings.jump_duration, 0.25);
        assert_eq!(settings.cell_width, CELL_WIDTH);
    }

    #[test]
    fn test_load_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "cell_width": -1.0 }"#).unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(GameError::InvalidConfiguration {
                field: "cell_width",
                ..
            })
        ));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "road_length": 12, "seed": 7 }"#).unwrap();
        assert_eq!(settings.road_length, 12);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.jump_duration, DEFAULT_JUMP_DURATION);
    }

    #[test]
    fn test_json_validation_applies() {
        let err = Settings::from_json(r#"{ "road_length": 0 }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration { .. }));

        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GameError::ConfigParse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::seeded(42);
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
