// src/draw/nannou_surface.rs
// StrokeSurface backed by a nannou Draw

use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;

use super::{DrawStyle, StrokeSurface, Viewport};

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    viewport: Viewport,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, viewport: Viewport) -> Self {
        Self { draw, viewport }
    }
}

impl StrokeSurface for NannouSurface<'_> {
    fn stroke_line(&mut self, start: Point2, end: Point2, style: &DrawStyle) {
        self.draw
            .line()
            .points(
                canvas_to_nannou(start, self.viewport),
                canvas_to_nannou(end, self.viewport),
            )
            .color(style.color)
            .stroke_weight(style.stroke_weight)
            .caps(LineCap::Round);
    }
}

/// Moves the origin from the top-left corner to the centre and flips y to point up.
pub fn canvas_to_nannou(point: Point2, viewport: Viewport) -> Point2 {
    pt2(
        point.x - viewport.width / 2.0,
        viewport.height / 2.0 - point.y,
    )
}
