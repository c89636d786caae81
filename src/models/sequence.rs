// src/models/sequence.rs
//
// The row of nodes and the cursor that walks it.
// Nodes live in a fixed arena; neighbours are found by index and the walk
// bounces when it runs off either end.

use crate::constants::NODES;
use crate::draw::{StrokeSurface, Viewport};
use crate::models::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Forward,
    Backward,
}

impl Traversal {
    pub fn flipped(self) -> Self {
        match self {
            Traversal::Forward => Traversal::Backward,
            Traversal::Backward => Traversal::Forward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    Node(usize),
    Boundary,
}

#[derive(Debug, Clone)]
pub struct LineToMultRot {
    nodes: Vec<Node>,
    cursor: usize,
    dir: Traversal,
}

impl Default for LineToMultRot {
    fn default() -> Self {
        Self::new()
    }
}

impl LineToMultRot {
    pub fn new() -> Self {
        Self::with_nodes(NODES)
    }

    /// Builds a row of `count` nodes, at least one. The cursor starts on the
    /// first node walking forward.
    pub fn with_nodes(count: usize) -> Self {
        Self {
            nodes: (0..count.max(1)).map(Node::new).collect(),
            cursor: 0,
            dir: Traversal::Forward,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn dir(&self) -> Traversal {
        self.dir
    }

    /// The node one step from the cursor in `dir`, or `Boundary` at either end.
    pub fn get_next(&self, dir: Traversal) -> Neighbor {
        let next = match dir {
            Traversal::Forward => self.cursor.checked_add(1),
            Traversal::Backward => self.cursor.checked_sub(1),
        };
        match next {
            Some(index) if index < self.nodes.len() => Neighbor::Node(index),
            _ => Neighbor::Boundary,
        }
    }

    /// Moves the cursor one step, or reverses direction in place at a boundary.
    pub fn advance(&mut self) {
        match self.get_next(self.dir) {
            Neighbor::Node(index) => self.cursor = index,
            Neighbor::Boundary => {
                self.dir = self.dir.flipped();
                log::debug!(
                    "Bounced at node {}, now walking {:?}",
                    self.cursor,
                    self.dir
                );
            }
        }
    }

    /// Ticks the current node. Returns true when that node finished, after
    /// the cursor has moved on.
    pub fn update(&mut self) -> bool {
        if self.nodes[self.cursor].update() {
            self.advance();
            return true;
        }
        false
    }

    pub fn start_updating(&mut self) -> bool {
        self.nodes[self.cursor].start_updating()
    }

    /// Paints every node, not just the one animating.
    pub fn draw<S: StrokeSurface + ?Sized>(&self, surface: &mut S, viewport: Viewport) {
        let count = self.nodes.len();
        for node in &self.nodes {
            node.draw(surface, count, viewport);
        }
    }
}
