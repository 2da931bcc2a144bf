//! Canonical shape reconstruction
//!
//! Every reconstruction is a closed loop: the first vertex is repeated as the
//! last one.

use std::f32::consts::TAU;

use glam::Vec3;

use super::{ShapeType, average_radius, centroid};
use crate::Point;

/// Regenerates an idealized vertex loop for a classified stroke
#[derive(Debug, Clone, Copy)]
pub struct ShapeReconstructor {
    /// Number of segments in a reconstructed circle
    circle_segments: u32,
}

impl Default for ShapeReconstructor {
    fn default() -> Self {
        Self::new(20)
    }
}

impl ShapeReconstructor {
    pub fn new(circle_segments: u32) -> Self {
        Self { circle_segments }
    }

    /// Build the canonical vertex loop, or `None` if nothing should change
    pub fn reconstruct(&self, shape: ShapeType, points: &[Point]) -> Option<Vec<Point>> {
        match shape {
            ShapeType::Circle => self.circle(points),
            ShapeType::Rectangle => rectangle(points),
            ShapeType::Triangle => triangle(points),
            ShapeType::Undefined => None,
        }
    }

    /// Circle around the centroid at the mean radius
    ///
    /// The circle always lies in the x/y plane at the centroid's z.
    fn circle(&self, points: &[Point]) -> Option<Vec<Point>> {
        if self.circle_segments == 0 {
            return None;
        }
        let center = centroid(points)?;
        let radius = average_radius(points, center);
        let segments = self.circle_segments;

        let mut vertices: Vec<Point> = (0..segments)
            .map(|i| {
                let angle = TAU * i as f32 / segments as f32;
                Vec3::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                    center.z,
                )
            })
            .collect();
        vertices.push(vertices[0]);
        Some(vertices)
    }
}

/// Axis-aligned bounding box outline on the minimum-z face
fn rectangle(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < 4 {
        return None;
    }
    let (min, max) = points.iter().fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(min, max), p| (min.min(*p), max.max(*p)),
    );

    let corners = [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, max.y, min.z),
    ];
    let mut vertices = corners.to_vec();
    vertices.push(corners[0]);
    Some(vertices)
}

/// The first three raw samples, closed
fn triangle(points: &[Point]) -> Option<Vec<Point>> {
    match points {
        [a, b, c, ..] => Some(vec![*a, *b, *c, *a]),
        _ => None,
    }
}
