//! Story configuration shared by the platform shells.
//!
//! Shells build a `StoryConfig` (defaults, optionally overridden from JSON) and
//! hand it to the story view through Dioxus context.

use serde::{Deserialize, Serialize};

/// Margins around the plotting area of the shared drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 30.0,
            bottom: 60.0,
            left: 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryConfig {
    /// URL (web) or filesystem path (desktop) of the CSV dataset.
    pub dataset_location: String,
    /// State followed by the line charts and highlighted in the scatterplot.
    pub focus_state: String,
    /// Aggregate row excluded from the per-state scatterplot.
    pub national_label: String,
    pub scatter_year: String,
    /// Fraction of the viewport height where a step becomes active.
    pub trigger_offset: f64,
    pub step_height_ratio: f64,
    pub surface_height_ratio: f64,
    pub margin: Margin,
    pub line_color: String,
    pub reveal_ms: u64,
    /// Pause before the first view redraws so the clear fade can finish.
    pub redraw_delay_ms: u64,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            dataset_location: "state_crime.csv".to_string(),
            focus_state: "Georgia".to_string(),
            national_label: "United States".to_string(),
            scatter_year: "2019".to_string(),
            trigger_offset: 0.33,
            step_height_ratio: 0.75,
            surface_height_ratio: 0.5,
            margin: Margin::default(),
            line_color: "#8da0cb".to_string(),
            reveal_ms: 2000,
            redraw_delay_ms: 500,
        }
    }
}

impl StoryConfig {
    /// Parse a partial JSON override; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.trigger_offset = config.trigger_offset.clamp(0.0, 1.0);
        Ok(config)
    }

    pub fn with_dataset_location(mut self, location: impl Into<String>) -> Self {
        self.dataset_location = location.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = StoryConfig::from_json(r#"{ "focus_state": "Ohio", "reveal_ms": 900 }"#)
            .unwrap();
        assert_eq!(config.focus_state, "Ohio");
        assert_eq!(config.reveal_ms, 900);
        assert_eq!(config.scatter_year, "2019");
        assert_eq!(config.margin, Margin::default());
    }

    #[test]
    fn trigger_offset_is_clamped() {
        let config = StoryConfig::from_json(r#"{ "trigger_offset": 3.5 }"#).unwrap();
        assert_eq!(config.trigger_offset, 1.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(StoryConfig::from_json("{ not json").is_err());
    }
}
