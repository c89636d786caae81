// End-to-end tap cycles through the public renderer API.

use std::time::Duration;

use linerot::constants::{NODES, TICK_INTERVAL};
use linerot::draw::{DrawStyle, StrokeSurface, Viewport};
use linerot::models::Traversal;
use linerot::render::Renderer;
use nannou::prelude::Point2;

fn tap_and_settle(renderer: &mut Renderer) {
    assert!(renderer.handle_tap(), "tap was ignored");
    for _ in 0..1000 {
        if !renderer.is_animating() {
            return;
        }
        renderer.update(TICK_INTERVAL);
    }
    panic!("animation never settled");
}

fn scales(renderer: &Renderer) -> Vec<f32> {
    renderer
        .sequence()
        .nodes()
        .iter()
        .map(|node| node.state().scale())
        .collect()
}

#[test]
fn taps_walk_the_row_and_bounce() {
    let mut renderer = Renderer::new();
    assert_eq!(NODES, 5);

    tap_and_settle(&mut renderer);
    assert_eq!(renderer.sequence().cursor(), 1);
    assert_eq!(scales(&renderer), vec![1.0, 0.0, 0.0, 0.0, 0.0]);

    tap_and_settle(&mut renderer);
    assert_eq!(renderer.sequence().cursor(), 2);
    assert_eq!(scales(&renderer), vec![1.0, 1.0, 0.0, 0.0, 0.0]);

    tap_and_settle(&mut renderer);
    tap_and_settle(&mut renderer);
    assert_eq!(renderer.sequence().cursor(), 4);

    // the last node completes and the walk bounces in place
    tap_and_settle(&mut renderer);
    assert_eq!(renderer.sequence().cursor(), 4);
    assert_eq!(renderer.sequence().dir(), Traversal::Backward);
    assert_eq!(scales(&renderer), vec![1.0; 5]);

    // the next tap drives node 4 back to rest at zero
    tap_and_settle(&mut renderer);
    assert_eq!(scales(&renderer), vec![1.0, 1.0, 1.0, 1.0, 0.0]);
    assert_eq!(renderer.sequence().cursor(), 3);
    assert_eq!(renderer.sequence().nodes()[4].state().prev_scale(), 0.0);
}

#[test]
fn full_round_trip_returns_to_start() {
    let mut renderer = Renderer::new();
    // five taps forward, five back
    for _ in 0..2 * NODES {
        tap_and_settle(&mut renderer);
    }
    assert_eq!(scales(&renderer), vec![0.0; NODES]);
    assert_eq!(renderer.sequence().cursor(), 0);
    assert_eq!(renderer.sequence().dir(), Traversal::Forward);
}

#[test]
fn redundant_taps_do_not_disturb_animation() {
    let mut renderer = Renderer::new();
    assert!(renderer.handle_tap());
    for _ in 0..5 {
        renderer.update(TICK_INTERVAL);
        assert!(!renderer.handle_tap());
    }
    renderer.update(Duration::from_secs(5));
    assert!(!renderer.is_animating());
    assert_eq!(renderer.sequence().cursor(), 1);
}

struct CountingSurface {
    strokes: usize,
}

impl StrokeSurface for CountingSurface {
    fn stroke_line(&mut self, _start: Point2, _end: Point2, _style: &DrawStyle) {
        self.strokes += 1;
    }
}

#[test]
fn every_node_is_painted_mid_animation() {
    let mut renderer = Renderer::new();
    renderer.handle_tap();
    renderer.update(TICK_INTERVAL * 3);

    let mut surface = CountingSurface { strokes: 0 };
    renderer.render(&mut surface, Viewport::new(900.0, 500.0));
    assert_eq!(surface.strokes, NODES * linerot::constants::LINES * 2);
}
