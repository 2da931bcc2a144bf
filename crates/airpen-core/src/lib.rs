//! AirPen Core
//!
//! Data model and pure algorithms for spatial free-hand drawing:
//! - Stroke: ordered tip samples with a palette color
//! - GeometrySampler: decides when a moving tip produces a new sample
//! - ClosureDetector: first/last proximity test on the active stroke
//! - ShapeClassifier / ShapeReconstructor: closed-loop recognition and
//!   canonical regeneration (circle, triangle, rectangle)

pub mod closure;
pub mod sampler;
pub mod shape;
pub mod stroke;

pub use closure::*;
pub use sampler::*;
pub use shape::*;
pub use stroke::*;

/// A sampled 3D tip position
pub type Point = glam::Vec3;
