// src/animation/animator.rs
//
// Fixed-period tick gate. Accumulates frame time while running and reports
// how many ticks have come due; reports none while stopped.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Animator {
    animated: bool,
    frame_timer: Duration,
    frame_duration: Duration,
}

impl Animator {
    pub fn new(frame_duration: Duration) -> Self {
        Self {
            animated: false,
            frame_timer: Duration::ZERO,
            // with a zero period due_ticks would loop forever
            frame_duration: frame_duration.max(Duration::from_millis(1)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.animated
    }

    /// Returns false if already running; the running timer is left as is.
    pub fn start(&mut self) -> bool {
        if self.animated {
            return false;
        }
        self.animated = true;
        self.frame_timer = Duration::ZERO;
        true
    }

    pub fn stop(&mut self) {
        if self.animated {
            self.animated = false;
            self.frame_timer = Duration::ZERO;
        }
    }

    pub fn due_ticks(&mut self, dt: Duration) -> u32 {
        if !self.animated {
            return 0;
        }
        self.frame_timer += dt;
        let mut ticks = 0;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            ticks += 1;
        }
        ticks
    }
}
