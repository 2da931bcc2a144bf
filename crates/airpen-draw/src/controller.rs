//! Per-frame drawing controller
//!
//! The host calls [`DrawingController::tick`] once per frame. Within a frame
//! the controller samples the tip, tests the active stroke for closure right
//! after an append, handles the color-switch edge and finally the clear
//! gesture. Each step runs to completion before the frame returns.

use airpen_core::{ClosureDetector, GeometrySampler, Point, SampleEvent, StrokeId, StrokeStore};

use crate::config::{ConfigError, PenConfig};
use crate::events::{DrawableEvent, DrawableSink};
use crate::gesture::{EdgeDetector, FrameInput, GestureSignals};
use crate::palette::Palette;

/// Whether a stroke is accepting samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Drawing(StrokeId),
}

impl ControllerState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, ControllerState::Drawing(_))
    }
}

/// Orchestrates sampling, recognition and stroke lifecycle
#[derive(Debug)]
pub struct DrawingController {
    config: PenConfig,
    palette: Palette,
    store: StrokeStore,
    sampler: GeometrySampler,
    closure: ClosureDetector,
    color_switch: EdgeDetector,
    /// Set after a shape is finished; cleared once the draw signal drops,
    /// so a held pinch cannot start a stray stroke at the closing point
    awaiting_release: bool,
    /// The initial tip color has been sent
    tip_announced: bool,
}

impl DrawingController {
    /// Build a controller, rejecting invalid configuration up front
    pub fn new(config: PenConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = Palette::new(config.palette.clone(), config.initial_color)?;

        Ok(Self {
            palette,
            store: StrokeStore::new(),
            sampler: GeometrySampler::new(config.sampler),
            closure: ClosureDetector::new(config.closure),
            color_switch: EdgeDetector::default(),
            awaiting_release: false,
            tip_announced: false,
            config,
        })
    }

    pub fn config(&self) -> &PenConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn strokes(&self) -> &StrokeStore {
        &self.store
    }

    pub fn state(&self) -> ControllerState {
        match self.store.active_id() {
            Some(id) => ControllerState::Drawing(id),
            None => ControllerState::Idle,
        }
    }

    /// Process one frame and return the events it produced, in order
    pub fn tick(&mut self, input: &FrameInput) -> Vec<DrawableEvent> {
        let mut events = Vec::new();
        self.tick_into(input, &mut events);
        events
    }

    /// Process one frame, handing events to `sink` as they are produced
    pub fn tick_into<S: DrawableSink + ?Sized>(&mut self, input: &FrameInput, sink: &mut S) {
        if !self.tip_announced {
            self.tip_announced = true;
            sink.handle(DrawableEvent::TipColor {
                index: self.palette.index(),
                color: self.palette.current(),
            });
        }

        let signals =
            GestureSignals::from_input(input, self.config.draw_hand, &self.config.gestures);

        self.update_drawing(input.tip, signals.draw, sink);

        if self.color_switch.rising(signals.color_switch) {
            self.switch_color(sink);
        }

        if signals.clear {
            self.clear_all(sink);
        }
    }

    /// Advance to the next palette color
    pub fn switch_color<S: DrawableSink + ?Sized>(&mut self, sink: &mut S) {
        let index = self.palette.advance();
        tracing::info!(index, "Switched pen color");
        sink.handle(DrawableEvent::TipColor {
            index,
            color: self.palette.current(),
        });
    }

    /// Destroy every stroke and return to idle
    pub fn clear_all<S: DrawableSink + ?Sized>(&mut self, sink: &mut S) {
        let ids = self.store.clear_all();
        self.sampler.reset();
        if !ids.is_empty() {
            tracing::info!(count = ids.len(), "Cleared all strokes");
        }
        for id in ids {
            sink.handle(DrawableEvent::Destroy { id });
        }
    }

    fn update_drawing<S: DrawableSink + ?Sized>(&mut self, tip: Point, draw: bool, sink: &mut S) {
        if self.awaiting_release {
            if draw {
                return;
            }
            self.awaiting_release = false;
        }

        match self.sampler.sample(tip, draw) {
            SampleEvent::StartStroke(origin) => {
                let color = self.palette.index();
                let width = self.config.line_width;
                let id = self.store.create_stroke(origin, color, width);
                sink.handle(DrawableEvent::Create {
                    id,
                    origin,
                    color: self.palette.current(),
                    width,
                });
            }
            SampleEvent::AppendPoint(point) => {
                let Some(id) = self.store.active_id() else {
                    return;
                };
                if self.store.append_point(id, point) {
                    sink.handle(DrawableEvent::Append { id, point });
                    self.recognize(id, sink);
                }
            }
            SampleEvent::EndStroke => {
                if let Some(id) = self.store.active_id() {
                    self.store.deactivate(id);
                }
            }
            SampleEvent::NoOp => {}
        }
    }

    /// Replace the stroke with a canonical shape if it has closed
    fn recognize<S: DrawableSink + ?Sized>(&mut self, id: StrokeId, sink: &mut S) {
        let Some(stroke) = self.store.get(id) else {
            return;
        };
        let points = stroke.points();
        if !self.closure.is_closed(points) {
            return;
        }
        tracing::debug!(%id, count = points.len(), "Stroke closed");

        let Some(result) = airpen_core::recognize(points, stroke.color(), &self.config.recognition)
        else {
            tracing::debug!(%id, "Closed stroke not recognized, keeping free-hand");
            return;
        };
        let shape = result.shape;

        let color = self
            .palette
            .color(result.color)
            .unwrap_or_else(|| self.palette.current());
        let vertices = result.vertices.clone();
        if !self.store.apply_shape(id, result) {
            return;
        }
        self.store.deactivate(id);
        self.sampler.reset();
        self.awaiting_release = true;

        tracing::info!(%id, shape = shape.name(), "Recognized shape");
        sink.handle(DrawableEvent::Replace {
            id,
            shape,
            vertices,
            color,
        });
    }
}
