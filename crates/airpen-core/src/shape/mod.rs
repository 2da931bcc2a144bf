//! Closed-shape recognition
//!
//! Provides:
//! - Classification of a closed stroke (sample-count triage, then a
//!   circularity test)
//! - Canonical reconstruction of the recognized shape as a closed vertex loop

mod classify;
mod reconstruct;

pub use classify::*;
pub use reconstruct::*;

use serde::{Deserialize, Serialize};

use crate::Point;

/// Shape a closed stroke was recognized as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    Circle,
    Triangle,
    Rectangle,
    Undefined,
}

impl ShapeType {
    /// Get the display name of the shape
    pub fn name(&self) -> &'static str {
        match self {
            ShapeType::Circle => "Circle",
            ShapeType::Triangle => "Triangle",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Undefined => "Undefined",
        }
    }

    /// Check if the shape has a canonical reconstruction
    pub fn is_defined(&self) -> bool {
        !matches!(self, ShapeType::Undefined)
    }
}

/// Recognition parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionSettings {
    /// Allowed deviation of any sample from the mean radius
    pub circle_tolerance: f32,
    /// Number of segments in a reconstructed circle
    pub circle_segments: u32,
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            circle_tolerance: 0.05,
            circle_segments: 20,
        }
    }
}

/// A recognized shape ready to replace the raw stroke
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeResult {
    pub shape: ShapeType,
    /// Closed vertex loop, first vertex repeated at the end
    pub vertices: Vec<Point>,
    /// Palette index of the originating stroke
    pub color: usize,
}

/// Classify and reconstruct a closed stroke in one step
///
/// Returns `None` when the stroke is not recognized or cannot be rebuilt.
pub fn recognize(points: &[Point], color: usize, settings: &RecognitionSettings) -> Option<ShapeResult> {
    let shape = ShapeClassifier::new(settings.circle_tolerance).classify(points);
    if !shape.is_defined() {
        return None;
    }
    let vertices = ShapeReconstructor::new(settings.circle_segments).reconstruct(shape, points)?;
    Some(ShapeResult {
        shape,
        vertices,
        color,
    })
}

/// Mean of all points
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum: Point = points.iter().copied().sum();
    Some(sum / points.len() as f32)
}

/// Mean distance from `center` to each point
pub fn average_radius(points: &[Point], center: Point) -> f32 {
    if points.is_empty() {
        return 0.0;
    }
    let total: f32 = points.iter().map(|p| p.distance(center)).sum();
    total / points.len() as f32
}
