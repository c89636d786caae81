// src/draw/line_draw.rs
// Paints one node's group of L-shaped strokes.

use nannou::prelude::*;
use std::f32::consts::FRAC_PI_2;

use super::{hex_color, DrawStyle, StrokeSurface, Transform2D, Viewport};
use crate::constants::{FORE_COLOR, LINES, SIZE_FACTOR, STROKE_FACTOR};
use crate::utilities::divide_scale;

/// Draws the `i`-th L of a group: a vertical stroke from `size * scale` down to
/// `size`, then a horizontal stroke growing from 0 to `size * scale`.
pub fn draw_ver_to_hor_line<S: StrokeSurface + ?Sized>(
    surface: &mut S,
    transform: Transform2D,
    i: usize,
    size: f32,
    scale: f32,
    style: &DrawStyle,
) {
    let local = transform.translate(0.0, size * i as f32);
    let corner = local.apply(pt2(0.0, size));

    surface.stroke_line(local.apply(pt2(0.0, size * scale)), corner, style);
    surface.stroke_line(corner, local.apply(pt2(size * scale, size)), style);
}

pub fn node_style(viewport: Viewport) -> DrawStyle {
    DrawStyle {
        color: hex_color(FORE_COLOR),
        stroke_weight: viewport.width.min(viewport.height) / STROKE_FACTOR,
    }
}

/// Draws node `i` of a row of `count` at progress `scale`.
///
/// The first half of the scale range is idle for this node type; over the
/// second half the group unrotates from a quarter turn while its sub-lines
/// reveal one after another.
pub fn draw_ltmr_node<S: StrokeSurface + ?Sized>(
    surface: &mut S,
    i: usize,
    count: usize,
    scale: f32,
    viewport: Viewport,
) {
    let sc2 = divide_scale(scale, 1, 2);
    let gap = viewport.width / (count + 1) as f32;
    let size = gap / SIZE_FACTOR;
    let y_size = size / LINES as f32;
    let style = node_style(viewport);

    let transform = Transform2D::default()
        .translate(gap * (i + 1) as f32, viewport.height / 2.0)
        .rotate(FRAC_PI_2 * (1.0 - sc2));

    for j in 0..LINES {
        draw_ver_to_hor_line(
            surface,
            transform,
            j,
            y_size,
            divide_scale(sc2, j, LINES),
            &style,
        );
    }
}
