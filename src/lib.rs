// src/lib.rs
//
// linerot: a row of line groups that rotate from vertical to horizontal, one node per tap.

pub mod animation;
pub mod config;
pub mod constants;
pub mod controllers;
pub mod draw;
pub mod models;
pub mod render;
pub mod utilities;
