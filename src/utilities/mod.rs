pub mod scale;

pub use scale::{divide_scale, max_scale, mirror_value, scale_factor, update_value};
