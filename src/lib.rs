pub mod error;
pub mod layout;
pub mod notify;
pub mod style;
pub mod text;
pub mod tree;

pub use error::LayoutError;
pub use layout::{AutoHeight, FlowBox, Geometry, LayoutConfig, LayoutNode, PassOrder};
pub use notify::{GeometryLog, RenderNotifier};
pub use style::Style;
pub use text::{CosmicTextMeasure, MonospaceMeasure, TextMeasure};
pub use tree::{Content, Description, Node, Visual};

pub use glam::{Vec2, Vec4};

pub type Result<T> = std::result::Result<T, LayoutError>;

pub fn init_logging() {
    env_logger::init();
}
