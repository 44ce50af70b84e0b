pub mod description;
pub mod json;
pub mod node;

pub use description::{Content, Description};
pub use node::{Container, Node, NodeId, NodeKind, Visual, VisualId};
