//! Chart layer: visual tree, layout configuration, rendering capability

pub mod arena;
pub mod config;
pub mod renderer;

pub use arena::{TreeNode, VisualNode, VisualTree};
pub use config::{ChartConfig, ConnectorStyle, RootOrientation};
pub use renderer::{ChartHandle, Renderer, TermRenderer};
