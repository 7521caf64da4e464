//! Board configuration loaded from JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::Orientation;

/// Default drawn board length, margins included.
pub const DEFAULT_BOARD_LENGTH: f32 = 400.0;

/// Proportions of the last-move arrow head, relative to the arrow length
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ArrowStyle {
    /// How far before the target center the shaft stops
    pub head_length_fraction: f32,
    /// Perpendicular offset of each head stroke
    pub head_width_fraction: f32,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            head_length_fraction: 0.25,
            head_width_fraction: 0.2,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BoardConfig {
    pub orientation: Orientation,
    /// Pixel length of the drawn board, coordinate margins included
    pub board_length: f32,
    pub arrow: ArrowStyle,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            board_length: DEFAULT_BOARD_LENGTH,
            arrow: ArrowStyle::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: BoardConfig =
            serde_json::from_str(json).context("failed to parse board config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read board config {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("invalid board config {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.board_length.is_finite() || self.board_length <= 0.0 {
            bail!("board_length must be positive, got {}", self.board_length);
        }
        for (name, value) in [
            ("head_length_fraction", self.arrow.head_length_fraction),
            ("head_width_fraction", self.arrow.head_width_fraction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                bail!("arrow.{name} must be in (0, 1], got {value}");
            }
        }
        Ok(())
    }

    /// JSON schema of the config file
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(BoardConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let config = BoardConfig::from_json_str(r#"{ "orientation": "BlackAtBottom" }"#).unwrap();
        assert_eq!(config.orientation, Orientation::BlackAtBottom);
        assert_eq!(config.board_length, DEFAULT_BOARD_LENGTH);
        assert_eq!(config.arrow, ArrowStyle::default());
    }

    #[test]
    fn test_partial_arrow_style() {
        let config =
            BoardConfig::from_json_str(r#"{ "board_length": 900, "arrow": { "head_width_fraction": 0.1 } }"#)
                .unwrap();
        assert_eq!(config.board_length, 900.0);
        assert_eq!(config.arrow.head_length_fraction, 0.25);
        assert_eq!(config.arrow.head_width_fraction, 0.1);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(BoardConfig::from_json_str(r#"{ "board_length": 0 }"#).is_err());
        assert!(BoardConfig::from_json_str(r#"{ "board_length": -50 }"#).is_err());
        assert!(BoardConfig::from_json_str(r#"{ "arrow": { "head_length_fraction": 1.5 } }"#).is_err());
        assert!(BoardConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = BoardConfig::load("/nonexistent/board.json").unwrap_err();
        assert!(err.to_string().contains("failed to read board config"));
    }

    #[test]
    fn test_schema_lists_fields() {
        let schema = serde_json::to_string(&BoardConfig::json_schema()).unwrap();
        assert!(schema.contains("board_length"));
        assert!(schema.contains("head_width_fraction"));
    }
}
