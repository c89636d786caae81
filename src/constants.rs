// src/constants.rs
//
// Fixed geometry, palette and timing for the stage

use std::time::Duration;

/// Number of nodes laid out across the stage.
pub const NODES: usize = 5;
/// Sub-segments drawn inside each node.
pub const LINES: usize = 4;

pub const SC_GAP: f32 = 0.05;
pub const SC_DIV: f32 = 0.51;

pub const STROKE_FACTOR: f32 = 90.0;
pub const SIZE_FACTOR: f32 = 2.8;

pub const FORE_COLOR: [u8; 3] = [0x67, 0x3A, 0xB7]; // #673AB7
pub const BACK_COLOR: [u8; 3] = [0xBD, 0xBD, 0xBD]; // #BDBDBD

/// Period of one animation tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);
