// src/render/mod.rs
// Ties the node row to the tick gate and exposes drawing and tap handling to the stage

pub mod renderer;

pub use renderer::Renderer;
