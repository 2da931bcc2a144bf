//! AirPen Drawing Controller
//!
//! Per-frame drawing surface for a hand-tracked pen:
//! - FrameInput / HandState: pinch signals reported by the tracking layer
//! - PenConfig: validated configuration (palette, thresholds, widths)
//! - DrawingController: stroke lifecycle, shape recognition, color switching
//!   and clearing, driven once per frame through `tick`
//! - DrawableEvent: instructions for the rendering collaborator

pub mod config;
pub mod controller;
pub mod events;
pub mod gesture;
pub mod palette;

pub use config::{ConfigError, GestureSettings, PenConfig};
pub use controller::{ControllerState, DrawingController};
pub use events::{DrawableEvent, DrawableSink};
pub use gesture::{EdgeDetector, Finger, FrameInput, GestureSignals, HandState, Handedness};
pub use palette::{Color, Palette};

pub use airpen_core::{Point, ShapeType, StrokeId};
