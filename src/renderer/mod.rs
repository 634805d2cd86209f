//! Frame tessellation
//!
//! [`FrameBuilder`] is a [`RenderAdapter`] that turns one frame's draw calls
//! into a flat triangle list ready to upload as a vertex buffer.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::consts::FOOTPRINT;
use crate::ports::RenderAdapter;
use crate::sim::ShapeKind;

/// Triangle fan resolution for circles
pub const CIRCLE_SEGMENTS: u32 = 24;

/// Outline a style is filled with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rect,
    Ellipse,
    Triangle,
}

/// How an entity is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub geometry: Geometry,
    pub color: [f32; 4],
}

pub const PLAYER_STYLE: ShapeStyle = ShapeStyle {
    geometry: Geometry::Ellipse,
    color: colors::PLAYER,
};

/// Shape variant lookup, indexed in `ShapeKind::ALL` order
const SHAPE_STYLES: [ShapeStyle; 3] = [
    ShapeStyle {
        geometry: Geometry::Rect,
        color: colors::RECTANGLE,
    },
    ShapeStyle {
        geometry: Geometry::Ellipse,
        color: colors::CIRCLE,
    },
    ShapeStyle {
        geometry: Geometry::Triangle,
        color: colors::TRIANGLE,
    },
];

pub const fn style_for(kind: ShapeKind) -> ShapeStyle {
    SHAPE_STYLES[kind as usize]
}

/// Collects one frame's worth of vertices
#[derive(Debug)]
pub struct FrameBuilder {
    vertices: Vec<Vertex>,
    /// Color the target is cleared to before the vertices are drawn
    pub clear_color: [f32; 4],
}

impl Default for FrameBuilder {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: colors::BACKGROUND,
        }
    }
}

impl FrameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame, keeping the allocation
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    fn fill(&mut self, style: ShapeStyle, x: i32, y: i32) {
        let min = Vec2::new(x as f32, y as f32);
        let size = Vec2::splat(FOOTPRINT as f32);
        match style.geometry {
            Geometry::Rect => shapes::rect(&mut self.vertices, min, size, style.color),
            Geometry::Ellipse => {
                shapes::ellipse(&mut self.vertices, min, size, style.color, CIRCLE_SEGMENTS)
            }
            Geometry::Triangle => shapes::triangle(&mut self.vertices, min, size, style.color),
        }
    }
}

impl RenderAdapter for FrameBuilder {
    fn draw_player(&mut self, x: i32, y: i32) {
        self.fill(PLAYER_STYLE, x, y);
    }

    fn draw_shape(&mut self, kind: ShapeKind, x: i32, y: i32) {
        self.fill(style_for(kind), x, y);
    }
}
