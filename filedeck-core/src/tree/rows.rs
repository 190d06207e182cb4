//! Flattened display rows
//!
//! The tree view renders one row per visible node, indented by depth.
//! Children of collapsed folders are hidden.

use serde::Serialize;

use super::node::Node;
use super::store::Tree;
use super::types::{NodeId, NodeKind};

/// One visible row of the tree view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibleRow {
    /// Id of the node shown in this row
    pub id: NodeId,
    /// Display name
    pub title: String,
    /// Folder or file
    pub kind: NodeKind,
    /// Nesting level, 0 for root nodes
    pub depth: usize,
    /// Expansion flag (always false for files)
    pub expanded: bool,
    /// File type tag used to pick an icon
    pub extension: String,
}

impl VisibleRow {
    fn from_node(node: &Node, depth: usize) -> Self {
        Self {
            id: node.id().clone(),
            title: node.title().to_string(),
            kind: node.kind(),
            depth,
            expanded: node.is_expanded(),
            extension: node.extension().to_string(),
        }
    }
}

impl Tree {
    /// Flattens the tree into rows in display order.
    ///
    /// A folder's children are included only while it is expanded.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        push_rows(self.roots(), 0, &mut rows);
        rows
    }
}

fn push_rows(nodes: &[Node], depth: usize, rows: &mut Vec<VisibleRow>) {
    for node in nodes {
        rows.push(VisibleRow::from_node(node, depth));
        if node.is_expanded() {
            push_rows(node.children(), depth + 1, rows);
        }
    }
}
