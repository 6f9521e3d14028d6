//! Match configuration
//!
//! A fixed set of numeric constants supplied when the match is built. Loaded
//! from JSON by the native driver; missing fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Side;

/// Geometry, speeds and rules for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Thickness of the top and bottom borders
    pub border_thickness: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Vertical travel speed (units/s)
    pub paddle_speed: f32,

    // === Ball ===
    /// Side length of the square ball
    pub ball_radius: f32,
    /// Maximum horizontal speed; serves start at 75% of it
    pub ball_base_speed: f32,

    // === Rules ===
    /// Pause after every serve before the ball moves
    pub serve_delay_seconds: f32,
    pub winning_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            border_thickness: BORDER_THICKNESS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_base_speed: BALL_BASE_SPEED,

            serve_delay_seconds: SERVE_DELAY_SECONDS,
            winning_score: WINNING_SCORE,
        }
    }
}

impl MatchConfig {
    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded match config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("ball_radius", self.ball_radius)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("ball_base_speed", self.ball_base_speed)?;
        non_negative("border_thickness", self.border_thickness)?;
        non_negative("serve_delay_seconds", self.serve_delay_seconds)?;

        if self.winning_score == 0 {
            return Err(ConfigError::invalid("winning_score", "must be at least 1"));
        }
        if self.paddle_max_y() < self.paddle_min_y() {
            return Err(ConfigError::invalid(
                "paddle_height",
                format!(
                    "paddle of height {} does not fit between the borders",
                    self.paddle_height
                ),
            ));
        }
        if self.border_bottom_y() <= self.border_top_y() {
            return Err(ConfigError::invalid(
                "ball_radius",
                "ball does not fit between the borders",
            ));
        }
        Ok(())
    }

    /// Shared unit used for nudges and paddle inset
    #[inline]
    pub fn element_width(&self) -> f32 {
        self.ball_radius
    }

    /// Fixed horizontal position of a side's paddle (left edge)
    pub fn paddle_x(&self, side: Side) -> f32 {
        let inset = self.element_width() * PADDLE_INSET_ELEMENTS;
        match side {
            Side::Left => inset,
            Side::Right => self.field_width - (self.paddle_width + inset),
        }
    }

    /// Paddle y that vertically centres it in the field
    pub fn paddle_center_y(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_height / 2.0
    }

    #[inline]
    pub fn paddle_min_y(&self) -> f32 {
        self.border_thickness
    }

    #[inline]
    pub fn paddle_max_y(&self) -> f32 {
        self.field_height - (self.paddle_height + self.border_thickness - PADDLE_BOTTOM_MARGIN)
    }

    /// Clamp paddle Y to its travel range.
    ///
    /// Never panics: a NaN `y` lands on the top of the range, and an
    /// unvalidated config whose range is empty pins the paddle to `paddle_max_y`.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.max(self.paddle_min_y()).min(self.paddle_max_y())
    }

    /// Ball y at or above which the top border bounces it
    #[inline]
    pub fn border_top_y(&self) -> f32 {
        self.border_thickness
    }

    /// Ball y at or below which the bottom border bounces it
    #[inline]
    pub fn border_bottom_y(&self) -> f32 {
        self.field_height - (self.ball_radius + self.border_thickness)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be zero or positive, got {value}"),
        ))
    }
}
