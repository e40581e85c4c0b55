use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// Data payload for rendered chart nodes.
#[derive(Debug, Clone, Default)]
pub struct VisualNode {
    /// Display name, when the hierarchy node carried one
    pub name: Option<String>,
    /// Title line shown under the name
    pub title: Option<String>,
    /// Search highlight flag (the accent background of the original surface)
    pub highlighted: bool,
}

impl VisualNode {
    /// Label shown on the chart surface.
    pub fn label(&self) -> String {
        match (&self.name, &self.title) {
            (Some(name), Some(title)) if !title.is_empty() => format!("{} ({})", name, title),
            (Some(name), _) => name.clone(),
            (None, _) => "(unnamed)".to_string(),
        }
    }
}

impl fmt::Display for VisualNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tree node in the arena-based visual tree.
#[derive(Debug)]
pub struct TreeNode {
    /// Rendered payload for this node
    pub data: VisualNode,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena
    pub children: Vec<Index>,
}

/// Arena-based tree of rendered visual nodes.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Preorder iteration order is the document order consumed by search.
#[derive(Debug, Default)]
pub struct VisualTree {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl VisualTree {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, data: VisualNode, parent: Option<Index>) -> Index {
        let node = TreeNode {
            data,
            parent,
            children: Vec::new(),
        };
        let node_idx = self.arena.insert(node);

        if let Some(parent_idx) = parent {
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.push(node_idx);
            }
        } else {
            self.root = Some(node_idx);
        }

        node_idx
    }

    pub fn get_node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode> {
        self.arena.get_mut(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Preorder iterator: parents before children, siblings left to right.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator {
        TreeIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Indices of all highlighted nodes, in document order.
    pub fn highlighted(&self) -> Vec<Index> {
        self.iter()
            .filter(|(_, node)| node.data.highlighted)
            .map(|(idx, _)| idx)
            .collect()
    }
}

pub struct TreeIterator<'a> {
    tree: &'a VisualTree,
    stack: Vec<Index>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a VisualTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push(root);
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
