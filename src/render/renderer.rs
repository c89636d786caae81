// src/render/renderer.rs
// The renderer owns the node row and the animator. A tap animates exactly one
// node through to rest, then the animator halts until the next tap.

use std::time::Duration;

use crate::animation::Animator;
use crate::constants::TICK_INTERVAL;
use crate::draw::{StrokeSurface, Viewport};
use crate::models::LineToMultRot;

#[derive(Debug, Clone)]
pub struct Renderer {
    sequence: LineToMultRot,
    animator: Animator,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_sequence(LineToMultRot::new())
    }

    pub fn with_sequence(sequence: LineToMultRot) -> Self {
        Self {
            sequence,
            animator: Animator::new(TICK_INTERVAL),
        }
    }

    pub fn sequence(&self) -> &LineToMultRot {
        &self.sequence
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn render<S: StrokeSurface + ?Sized>(&self, surface: &mut S, viewport: Viewport) {
        self.sequence.draw(surface, viewport);
    }

    /// Starts animating the node under the cursor. Taps that arrive while a
    /// node is still moving are ignored and return false.
    pub fn handle_tap(&mut self) -> bool {
        if !self.sequence.start_updating() {
            log::debug!("Tap ignored, node {} still animating", self.sequence.cursor());
            return false;
        }
        log::debug!("Tap: animating node {}", self.sequence.cursor());
        self.animator.start();
        true
    }

    /// Runs every tick that has come due in `dt`.
    pub fn update(&mut self, dt: Duration) {
        let ticks = self.animator.due_ticks(dt);
        for _ in 0..ticks {
            let node = self.sequence.cursor();
            if self.sequence.update() {
                self.animator.stop();
                log::info!(
                    "Node {} came to rest, next tap animates node {}",
                    node,
                    self.sequence.cursor()
                );
                break;
            }
        }
    }
}
