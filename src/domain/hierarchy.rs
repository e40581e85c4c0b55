//! The hierarchy document contract.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Text block of a hierarchy node (the shape the layout library consumes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Image path, kept under its original document key.
    #[serde(rename = "imagem", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Library-specific extra fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One node of the hierarchy document.
///
/// Generated documents nest the display name under `text`; plain documents
/// may carry a top-level `name`. Both are accepted. The structure is a
/// finite tree by construction: the parser cannot produce a node that is
/// its own ancestor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<NodeText>,
    #[serde(default)]
    pub children: Vec<HierarchyNode>,
    /// Library-specific extra fields, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HierarchyNode {
    /// Display name of this node: a top-level `name` wins, then `text.name`.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or_else(|| self.text.as_ref().and_then(|t| t.name.as_deref()))
    }

    /// Title line of this node, when present.
    pub fn title(&self) -> Option<&str> {
        self.text.as_ref().and_then(|t| t.title.as_deref())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree (including self).
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(HierarchyNode::node_count)
            .sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(HierarchyNode::depth)
            .max()
            .unwrap_or(0)
    }
}
