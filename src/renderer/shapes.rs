//! Shape generation for 2D primitives
//!
//! Every primitive is emitted as a triangle list appended to `out`.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Filled axis-aligned rectangle with its top-left corner at `min`
pub fn rect(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    let max = min + size;
    out.extend_from_slice(&[
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]);
}

/// Filled ellipse inscribed in the box at `min` with the given size
pub fn ellipse(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4], segments: u32) {
    let radius = size / 2.0;
    let center = min + radius;
    out.reserve((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius.x * theta1.cos(),
            center.y + radius.y * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius.x * theta2.cos(),
            center.y + radius.y * theta2.sin(),
            color,
        ));
    }
}

/// Filled triangle pointing up: bottom-left, apex at top-center, bottom-right
pub fn triangle(out: &mut Vec<Vertex>, min: Vec2, size: Vec2, color: [f32; 4]) {
    out.extend_from_slice(&[
        Vertex::new(min.x, min.y + size.y, color),
        Vertex::new(min.x + size.x / 2.0, min.y, color),
        Vertex::new(min.x + size.x, min.y + size.y, color),
    ]);
}
