//! Button configuration loaded from JSON.

use crate::color::SerializableColor;
use crate::easing::Easing;
use crate::geometry::{CHECK_CIRCLE_LINE_WIDTH, CIRCLE_INSET, LINE_WIDTH};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunable geometry, timing and colors of an [`IconButton`](crate::IconButton).
///
/// Every field has a default, so a partial JSON document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    /// Subtracted from the short side before halving into the circle radius.
    pub circle_inset: f64,
    /// Stroke width of circles, lines and the check mark.
    pub line_width: f64,
    /// Stroke width of the circle behind a check mark.
    pub check_circle_line_width: f64,
    /// Default first phase duration, in seconds.
    pub start_duration_secs: f64,
    /// Default second phase duration, in seconds.
    pub end_duration_secs: f64,
    /// Timing curve of every transition animation.
    pub easing: Easing,
    /// Flash color used by transitions and the check mark stroke.
    pub highlight_color: SerializableColor,
    /// Fill the circle settles on after a circle-to-exit transition.
    pub accent_color: SerializableColor,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            circle_inset: CIRCLE_INSET,
            line_width: LINE_WIDTH,
            check_circle_line_width: CHECK_CIRCLE_LINE_WIDTH,
            start_duration_secs: 0.5,
            end_duration_secs: 0.5,
            easing: Easing::EaseInEaseOut,
            highlight_color: SerializableColor::white(),
            accent_color: SerializableColor::red(),
        }
    }
}

impl ButtonConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every numeric field is finite and non-negative, and that
    /// both phase durations fit in a [`Duration`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("circle_inset", self.circle_inset),
            ("line_width", self.line_width),
            ("check_circle_line_width", self.check_circle_line_width),
            ("start_duration_secs", self.start_duration_secs),
            ("end_duration_secs", self.end_duration_secs),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }
        let durations = [
            ("start_duration_secs", self.start_duration_secs),
            ("end_duration_secs", self.end_duration_secs),
        ];
        for (name, secs) in durations {
            if let Err(err) = Duration::try_from_secs_f64(secs) {
                return Err(ConfigError::Invalid(format!("{} is out of range: {}", name, err)));
            }
        }
        Ok(())
    }

    /// Default first phase duration.
    pub fn start_duration(&self) -> Duration {
        phase_duration(self.start_duration_secs)
    }

    /// Default second phase duration.
    pub fn end_duration(&self) -> Duration {
        phase_duration(self.end_duration_secs)
    }

    pub fn highlight(&self) -> Color {
        self.highlight_color.into()
    }

    pub fn accent(&self) -> Color {
        self.accent_color.into()
    }
}

/// Seconds to a phase duration for a config that skipped [`ButtonConfig::validate`].
/// Values too large for a `Duration` saturate to `Duration::MAX`; negative or
/// NaN values become zero.
fn phase_duration(secs: f64) -> Duration {
    match Duration::try_from_secs_f64(secs) {
        Ok(duration) => duration,
        Err(_) if secs > 0.0 => Duration::MAX,
        Err(_) => Duration::ZERO,
    }
}
