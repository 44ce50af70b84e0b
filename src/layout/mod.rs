pub mod anchor;
pub mod config;
pub mod flexbox;
pub mod geometry;
pub mod node;
pub mod size;

pub use config::{AutoHeight, FlowBox, LayoutConfig, PassOrder};
pub use geometry::Geometry;
pub use node::LayoutNode;
pub use size::AutoSizeMode;
