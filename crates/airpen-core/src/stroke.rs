//! Stroke storage
//!
//! The store owns every live stroke in creation order and tracks which one,
//! if any, is currently accepting appended samples.

use uuid::Uuid;

use crate::Point;
use crate::shape::{ShapeResult, ShapeType};

/// Handle identifying a stroke and its drawable representation
pub type StrokeId = Uuid;

/// One continuous free-hand gesture
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Point>,
    /// Palette index the stroke was drawn with
    color: usize,
    /// Line width the stroke was drawn with
    width: f32,
    /// Set once the raw samples were replaced by a canonical shape
    shape: Option<ShapeType>,
}

impl Stroke {
    /// Create a stroke starting at `origin`
    pub fn new(origin: Point, color: usize, width: f32) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: vec![origin],
            color,
            width,
            shape: None,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> usize {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// The recognized shape, if the stroke has been canonicalized
    pub fn shape(&self) -> Option<ShapeType> {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a stroke built through [`Stroke::new`]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Owner of all live strokes
#[derive(Debug, Clone, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    active: Option<StrokeId>,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new stroke and make it the active one
    pub fn create_stroke(&mut self, origin: Point, color: usize, width: f32) -> StrokeId {
        let stroke = Stroke::new(origin, color, width);
        let id = stroke.id();
        self.strokes.push(stroke);
        self.active = Some(id);
        tracing::debug!(%id, color, "Stroke started");
        id
    }

    /// Append a sample to the active stroke
    ///
    /// Returns false (and does nothing) if `id` is not the active stroke.
    pub fn append_point(&mut self, id: StrokeId, point: Point) -> bool {
        if self.active != Some(id) {
            tracing::trace!(%id, "Ignoring append to inactive stroke");
            return false;
        }
        match self.get_mut(id) {
            Some(stroke) => {
                stroke.points.push(point);
                true
            }
            None => false,
        }
    }

    /// Detach the active stroke from further appends, keeping its points
    pub fn deactivate(&mut self, id: StrokeId) -> bool {
        if self.active != Some(id) {
            return false;
        }
        self.active = None;
        tracing::debug!(%id, "Stroke ended");
        true
    }

    /// Overwrite a stroke's samples
    ///
    /// An empty vertex sequence is rejected so that every stored stroke keeps
    /// at least one point.
    pub fn replace(&mut self, id: StrokeId, vertices: Vec<Point>) -> bool {
        if vertices.is_empty() {
            return false;
        }
        match self.get_mut(id) {
            Some(stroke) => {
                stroke.points = vertices;
                true
            }
            None => false,
        }
    }

    /// Replace a stroke's samples with a recognized shape
    pub fn apply_shape(&mut self, id: StrokeId, result: ShapeResult) -> bool {
        let shape = result.shape;
        if !self.replace(id, result.vertices) {
            return false;
        }
        if let Some(stroke) = self.get_mut(id) {
            stroke.shape = Some(shape);
        }
        true
    }

    /// Destroy every stroke, returning their ids in creation order
    pub fn clear_all(&mut self) -> Vec<StrokeId> {
        self.active = None;
        self.strokes.drain(..).map(|s| s.id).collect()
    }

    pub fn get(&self, id: StrokeId) -> Option<&Stroke> {
        self.strokes.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: StrokeId) -> Option<&mut Stroke> {
        self.strokes.iter_mut().find(|s| s.id == id)
    }

    pub fn active_id(&self) -> Option<StrokeId> {
        self.active
    }

    /// The stroke currently receiving samples
    pub fn active(&self) -> Option<&Stroke> {
        self.active.and_then(|id| self.get(id))
    }

    /// Iterate over strokes in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}
