//! Output events for the rendering collaborator
//!
//! The controller never touches visual objects itself. Each stroke's drawable
//! is keyed by its [`StrokeId`] and driven entirely by these events.

use airpen_core::{Point, ShapeType, StrokeId};

use crate::palette::Color;

/// Instruction for the drawable owned by the rendering collaborator
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableEvent {
    /// A stroke started at `origin`
    Create {
        id: StrokeId,
        origin: Point,
        color: Color,
        width: f32,
    },
    /// A sample was appended to a stroke
    Append { id: StrokeId, point: Point },
    /// A stroke's samples were replaced by a recognized shape
    Replace {
        id: StrokeId,
        shape: ShapeType,
        vertices: Vec<Point>,
        color: Color,
    },
    /// A stroke was destroyed
    Destroy { id: StrokeId },
    /// The pen tip should show a new color
    TipColor { index: usize, color: Color },
}

impl DrawableEvent {
    /// Stroke the event refers to, if any
    pub fn stroke_id(&self) -> Option<StrokeId> {
        match self {
            DrawableEvent::Create { id, .. }
            | DrawableEvent::Append { id, .. }
            | DrawableEvent::Replace { id, .. }
            | DrawableEvent::Destroy { id } => Some(*id),
            DrawableEvent::TipColor { .. } => None,
        }
    }
}

/// Receiver of drawable events
pub trait DrawableSink {
    fn handle(&mut self, event: DrawableEvent);
}

impl DrawableSink for Vec<DrawableEvent> {
    fn handle(&mut self, event: DrawableEvent) {
        self.push(event);
    }
}
