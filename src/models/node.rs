// src/models/node.rs
//
// One visual unit in the row: a slot index plus its own animation state.

use crate::draw::{draw_ltmr_node, StrokeSurface, Viewport};
use crate::models::State;

#[derive(Debug, Clone)]
pub struct Node {
    index: usize,
    state: State,
}

impl Node {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            state: State::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Paints this node in its slot of a row of `count`.
    pub fn draw<S: StrokeSurface + ?Sized>(
        &self,
        surface: &mut S,
        count: usize,
        viewport: Viewport,
    ) {
        draw_ltmr_node(surface, self.index, count, self.state.scale(), viewport);
    }

    pub fn update(&mut self) -> bool {
        self.state.update()
    }

    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }
}
