//! Shape classification
//!
//! Triage is by sample count first: three samples are always a triangle and
//! four always a rectangle, whatever their geometry. Only longer strokes get
//! a geometric (circularity) test.

use super::{ShapeType, average_radius, centroid};
use crate::Point;

/// Classifies a closed stroke
#[derive(Debug, Clone, Copy)]
pub struct ShapeClassifier {
    /// Allowed deviation of any sample from the mean radius
    circle_tolerance: f32,
}

impl Default for ShapeClassifier {
    fn default() -> Self {
        Self::new(0.05)
    }
}

impl ShapeClassifier {
    pub fn new(circle_tolerance: f32) -> Self {
        Self { circle_tolerance }
    }

    pub fn classify(&self, points: &[Point]) -> ShapeType {
        let shape = match points.len() {
            0..=2 => ShapeType::Undefined,
            3 => ShapeType::Triangle,
            4 => ShapeType::Rectangle,
            _ if self.is_circle(points) => ShapeType::Circle,
            _ => ShapeType::Undefined,
        };
        tracing::trace!(count = points.len(), shape = shape.name(), "Classified stroke");
        shape
    }

    /// Every sample lies within tolerance of the mean distance to the centroid
    fn is_circle(&self, points: &[Point]) -> bool {
        let Some(center) = centroid(points) else {
            return false;
        };
        let radius = average_radius(points, center);
        if !radius.is_finite() {
            return false;
        }
        points
            .iter()
            .all(|p| (p.distance(center) - radius).abs() <= self.circle_tolerance)
    }
}
