pub mod node;
pub mod sequence;
pub mod state;

pub use node::Node;
pub use sequence::{LineToMultRot, Neighbor, Traversal};
pub use state::State;
