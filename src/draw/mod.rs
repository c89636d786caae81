// src/draw/mod.rs
// Canvas-style transforms and the stroke surface the draw routines paint onto.
// Draw routines work in canvas space: origin top-left, y pointing down.

pub mod line_draw;
pub mod nannou_surface;

pub use line_draw::{draw_ltmr_node, draw_ver_to_hor_line, node_style};
pub use nannou_surface::NannouSurface;

use nannou::prelude::*;

/// Size of the surface being drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Translation followed by rotation, composed the way a 2D canvas context
/// stacks `translate` and `rotate` calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub translation: Vec2,
    pub rotation: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    /// Moves the local origin by `(x, y)` measured in the current local axes.
    pub fn translate(self, x: f32, y: f32) -> Self {
        Self {
            translation: self.translation + rotate_vec(vec2(x, y), self.rotation),
            ..self
        }
    }

    pub fn rotate(self, angle: f32) -> Self {
        Self {
            rotation: self.rotation + angle,
            ..self
        }
    }

    /// Maps a local point into canvas space.
    pub fn apply(&self, point: Point2) -> Point2 {
        self.translation + rotate_vec(point, self.rotation)
    }
}

fn rotate_vec(v: Vec2, angle: f32) -> Vec2 {
    let (sin_rot, cos_rot) = angle.sin_cos();
    vec2(v.x * cos_rot - v.y * sin_rot, v.x * sin_rot + v.y * cos_rot)
}

#[derive(Debug, Clone, Copy)]
pub struct DrawStyle {
    pub color: Rgb,
    pub stroke_weight: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: rgb(0.1, 0.1, 0.1),
            stroke_weight: 5.0,
        }
    }
}

pub fn hex_color([r, g, b]: [u8; 3]) -> Rgb {
    rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

/// Anything that can stroke a round-capped line between two canvas points.
pub trait StrokeSurface {
    fn stroke_line(&mut self, start: Point2, end: Point2, style: &DrawStyle);
}

/// Records strokes instead of drawing them.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct StrokeLog {
    pub strokes: Vec<(Point2, Point2, f32)>,
}

#[cfg(test)]
impl StrokeSurface for StrokeLog {
    fn stroke_line(&mut self, start: Point2, end: Point2, style: &DrawStyle) {
        self.strokes.push((start, end, style.stroke_weight));
    }
}
