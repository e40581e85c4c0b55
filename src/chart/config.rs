//! Fixed layout configuration handed to the rendering capability.

use serde::{Deserialize, Serialize};

/// Orientation of the root relative to the rest of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootOrientation {
    North,
    South,
    East,
    West,
}

/// Connector line style between parent and child nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorStyle {
    Step,
    Curve,
    Bcurve,
    Straight,
}

/// Layout configuration passed to the rendering capability.
///
/// A renderer consumes the parts it supports; the defaults reproduce the
/// original chart setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub root_orientation: RootOrientation,
    /// Vertical space between levels
    pub level_separation: u32,
    /// Space between sibling nodes
    pub sibling_separation: u32,
    /// Space between adjacent subtrees
    pub subtree_separation: u32,
    pub connector: ConnectorStyle,
    /// Whether subtrees may be collapsed on the surface
    pub collapsible: bool,
    /// Class marker carried by every visual node element
    pub node_class: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            root_orientation: RootOrientation::North,
            level_separation: 40,
            sibling_separation: 20,
            subtree_separation: 30,
            connector: ConnectorStyle::Step,
            collapsible: true,
            node_class: "node".to_string(),
        }
    }
}
