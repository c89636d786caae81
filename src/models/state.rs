// src/models/state.rs
//
// Per-node animation progress.
// Idle while dir == 0; animating toward the opposite resting scale while dir is +1 or -1.

use crate::constants::LINES;
use crate::utilities::update_value;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    scale: f32,
    dir: f32,
    // last resting scale, always 0 or 1
    prev_scale: f32,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn dir(&self) -> f32 {
        self.dir
    }

    pub fn prev_scale(&self) -> f32 {
        self.prev_scale
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    /// Begins animating toward the other resting scale.
    /// Returns false, and leaves the state untouched, while an animation is running.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.dir = 1.0 - 2.0 * self.prev_scale;
        true
    }

    /// Advances one tick. Returns true on the tick that completes the animation.
    pub fn update(&mut self) -> bool {
        self.scale += update_value(self.scale, self.dir, 1.0, LINES as f32);
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return true;
        }
        false
    }
}
