//! Rendering capability boundary and the built-in terminal renderer.

use colored::Colorize;
use generational_arena::Index;
use termtree::Tree;
use tracing::instrument;

use crate::chart::arena::{VisualNode, VisualTree};
use crate::chart::config::ChartConfig;
use crate::domain::HierarchyNode;

/// Handle to a rendered chart, retained for the whole session.
///
/// Owns the visual tree, the container scale transform, and the log of
/// scroll-into-view requests issued by search.
#[derive(Debug)]
pub struct ChartHandle {
    nodes: VisualTree,
    scale: f64,
    scroll_log: Vec<Index>,
}

impl ChartHandle {
    pub fn new(nodes: VisualTree) -> Self {
        Self {
            nodes,
            scale: 1.0,
            scroll_log: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &VisualTree {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut VisualTree {
        &mut self.nodes
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Apply a new scale to the chart container. The transform is the sole
    /// visual effect of zoom: no re-layout, no recentering.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Transform currently applied to the chart container.
    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }

    /// Record a scroll-into-view request for the given node.
    pub fn scroll_into_view(&mut self, idx: Index) {
        self.scroll_log.push(idx);
    }

    /// All scroll requests issued so far, oldest first.
    pub fn scroll_log(&self) -> &[Index] {
        &self.scroll_log
    }

    pub fn last_scrolled(&self) -> Option<Index> {
        self.scroll_log.last().copied()
    }

    /// Format the chart as a terminal tree, accenting highlighted nodes.
    pub fn to_tree_string(&self) -> Option<Tree<String>> {
        self.nodes.root().map(|root| self.subtree_string(root))
    }

    fn subtree_string(&self, idx: Index) -> Tree<String> {
        let Some(node) = self.nodes.get_node(idx) else {
            return Tree::new(String::new());
        };
        let label = if node.data.highlighted {
            node.data.label().black().on_yellow().to_string()
        } else {
            node.data.label()
        };
        let leaves: Vec<_> = node
            .children
            .iter()
            .map(|&child| self.subtree_string(child))
            .collect();
        Tree::new(label).with_leaves(leaves)
    }
}

/// External layout capability: materializes the hierarchy into a chart.
///
/// The contract matches the original surface: `render` hands back the
/// handle directly, and a failing capability panics. The panic is not
/// caught anywhere in the session.
pub trait Renderer {
    fn render(&self, root: &HierarchyNode, config: &ChartConfig) -> ChartHandle;
}

/// Built-in renderer: one visual node per hierarchy node, nesting and
/// sibling order preserved.
#[derive(Debug, Default)]
pub struct TermRenderer;

impl Renderer for TermRenderer {
    #[instrument(level = "debug", skip_all)]
    fn render(&self, root: &HierarchyNode, _config: &ChartConfig) -> ChartHandle {
        let mut tree = VisualTree::new();
        Self::insert(&mut tree, root, None);
        ChartHandle::new(tree)
    }
}

impl TermRenderer {
    fn insert(tree: &mut VisualTree, node: &HierarchyNode, parent: Option<Index>) {
        let idx = tree.insert_node(
            VisualNode {
                name: node.display_name().map(str::to_string),
                title: node.title().map(str::to_string),
                highlighted: false,
            },
            parent,
        );
        for child in &node.children {
            Self::insert(tree, child, Some(idx));
        }
    }
}
