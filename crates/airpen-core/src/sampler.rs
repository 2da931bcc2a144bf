//! Tip sampling
//!
//! Turns a per-frame tip position and draw signal into stroke lifecycle
//! events. Near-stationary samples are dropped so a stroke never contains
//! zero-length segments.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Outcome of feeding one frame to the sampler
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleEvent {
    /// Draw signal rose: begin a stroke at this point
    StartStroke(Point),
    /// Tip moved far enough: extend the active stroke
    AppendPoint(Point),
    /// Draw signal dropped: detach the active stroke
    EndStroke,
    NoOp,
}

/// Sampling parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerSettings {
    /// Minimum distance between consecutive samples
    pub min_spacing: f32,
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self { min_spacing: 0.01 }
    }
}

/// Decides when a moving tip produces a new stroke sample
#[derive(Debug, Clone, Default)]
pub struct GeometrySampler {
    settings: SamplerSettings,
    /// Last accepted sample; `Some` while a stroke is being drawn
    last_sample: Option<Point>,
}

impl GeometrySampler {
    pub fn new(settings: SamplerSettings) -> Self {
        Self {
            settings,
            last_sample: None,
        }
    }

    /// Whether the sampler is tracking an active stroke
    pub fn is_active(&self) -> bool {
        self.last_sample.is_some()
    }

    pub fn last_sample(&self) -> Option<Point> {
        self.last_sample
    }

    /// Feed one frame
    pub fn sample(&mut self, tip: Point, draw_active: bool) -> SampleEvent {
        match (draw_active, self.last_sample) {
            (false, Some(_)) => {
                self.last_sample = None;
                SampleEvent::EndStroke
            }
            (false, None) => SampleEvent::NoOp,
            (true, None) => {
                self.last_sample = Some(tip);
                SampleEvent::StartStroke(tip)
            }
            (true, Some(last)) => {
                let distance = last.distance(tip);
                if distance > self.settings.min_spacing {
                    self.last_sample = Some(tip);
                    SampleEvent::AppendPoint(tip)
                } else {
                    tracing::trace!(distance, "Sample below spacing threshold");
                    SampleEvent::NoOp
                }
            }
        }
    }

    /// Forget the active stroke without emitting an event
    pub fn reset(&mut self) {
        self.last_sample = None;
    }
}
