pub mod animator;

pub use animator::Animator;
