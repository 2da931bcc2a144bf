//! Closed-loop detection

use serde::{Deserialize, Serialize};

use crate::Point;

/// Closure test parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosureSettings {
    /// A stroke needs strictly more samples than this before it can close
    pub min_points: usize,
    /// Maximum distance between first and last sample of a closed stroke
    pub max_gap: f32,
}

impl Default for ClosureSettings {
    fn default() -> Self {
        Self {
            min_points: 10,
            max_gap: 0.05,
        }
    }
}

/// Reports whether a stroke loops back to its start
///
/// Only the endpoints are compared. A spiral or figure-eight that returns
/// near its first sample counts as closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosureDetector {
    settings: ClosureSettings,
}

impl ClosureDetector {
    pub fn new(settings: ClosureSettings) -> Self {
        Self { settings }
    }

    pub fn is_closed(&self, points: &[Point]) -> bool {
        if points.len() <= self.settings.min_points {
            return false;
        }
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return false;
        };
        first.distance(*last) < self.settings.max_gap
    }
}
