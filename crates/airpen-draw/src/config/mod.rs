//! Pen configuration
//!
//! Everything tunable about the pen lives in [`PenConfig`]. A config is
//! validated once, when the controller is built, so nothing downstream has
//! to re-check palette bounds or thresholds at draw time.

mod loader;

use airpen_core::{ClosureSettings, RecognitionSettings, SamplerSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gesture::Handedness;
use crate::palette::Color;

/// Allowed line width range
pub const LINE_WIDTH_RANGE: (f32, f32) = (0.005, 0.1);

/// Configuration error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Initial color {index} out of range for a palette of {len}")]
    InitialColorOutOfRange { index: usize, len: usize },

    #[error("Line width {0} outside [0.005, 0.1]")]
    LineWidthOutOfRange(f32),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("{name} must lie in [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f32 },

    #[error("Circle needs at least 3 segments, got {0}")]
    TooFewSegments(u32),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Pinch thresholds used to derive draw and clear signals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Index pinch strength above which the drawing hand draws
    pub draw_threshold: f32,
    /// Strength every finger must exceed for a fist
    pub clear_threshold: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            draw_threshold: 0.95,
            clear_threshold: 0.9,
        }
    }
}

/// Complete pen configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PenConfig {
    /// Width of drawn lines
    pub line_width: f32,
    /// Ordered pen colors
    pub palette: Vec<Color>,
    /// Palette index selected at start-up
    pub initial_color: usize,
    /// Hand whose index pinch draws and whose middle pinch switches color
    pub draw_hand: Handedness,
    pub sampler: SamplerSettings,
    pub closure: ClosureSettings,
    pub recognition: RecognitionSettings,
    pub gestures: GestureSettings,
}

impl Default for PenConfig {
    fn default() -> Self {
        Self {
            line_width: 0.005,
            palette: vec![
                [1.0, 1.0, 1.0, 1.0],
                [0.9, 0.2, 0.2, 1.0],
                [0.2, 0.8, 0.3, 1.0],
                [0.2, 0.4, 0.9, 1.0],
                [0.95, 0.85, 0.2, 1.0],
            ],
            initial_color: 0,
            draw_hand: Handedness::Left,
            sampler: SamplerSettings::default(),
            closure: ClosureSettings::default(),
            recognition: RecognitionSettings::default(),
            gestures: GestureSettings::default(),
        }
    }
}

impl PenConfig {
    /// Check every precondition the controller relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.initial_color >= self.palette.len() {
            return Err(ConfigError::InitialColorOutOfRange {
                index: self.initial_color,
                len: self.palette.len(),
            });
        }

        let (min_width, max_width) = LINE_WIDTH_RANGE;
        if !(min_width..=max_width).contains(&self.line_width) {
            return Err(ConfigError::LineWidthOutOfRange(self.line_width));
        }

        positive("sampler.min_spacing", self.sampler.min_spacing)?;
        positive("closure.max_gap", self.closure.max_gap)?;

        let tolerance = self.recognition.circle_tolerance;
        if tolerance < 0.0 || !tolerance.is_finite() {
            return Err(ConfigError::Negative {
                name: "recognition.circle_tolerance",
                value: tolerance,
            });
        }
        if self.recognition.circle_segments < 3 {
            return Err(ConfigError::TooFewSegments(self.recognition.circle_segments));
        }

        unit_interval("gestures.draw_threshold", self.gestures.draw_threshold)?;
        unit_interval("gestures.clear_threshold", self.gestures.clear_threshold)?;

        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

fn unit_interval(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { name, value })
    }
}
