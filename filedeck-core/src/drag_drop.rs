//! Drag-and-drop model for file tree operations
//!
//! This module provides a pure data model for drop requests coming from the
//! tree view. Pointer tracking happens upstream; by the time a request gets
//! here it is already a `(dragged, target, position)` triple.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreeResult;
use crate::tree::{NodeId, Tree};

/// Drop position relative to a target item
///
/// Determines where a dragged item will be placed among the target's siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    /// Drop before the target item (line indicator above)
    Above,
    /// Drop after the target item (line indicator below)
    Below,
}

impl DropPosition {
    /// Returns the index to insert at, given the target's index among
    /// its siblings.
    #[must_use]
    pub const fn insertion_index(self, target_index: usize) -> usize {
        match self {
            Self::Above => target_index,
            Self::Below => target_index + 1,
        }
    }

    /// Returns the opposite position.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Above => Self::Below,
            Self::Below => Self::Above,
        }
    }
}

impl fmt::Display for DropPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Above => write!(f, "above"),
            Self::Below => write!(f, "below"),
        }
    }
}

impl FromStr for DropPosition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "above" | "before" => Ok(Self::Above),
            "below" | "after" => Ok(Self::Below),
            _ => Err(()),
        }
    }
}

/// A drop emitted by the drag layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropRequest {
    /// The node being dragged
    pub dragged: NodeId,
    /// The node it was dropped on
    pub target: NodeId,
    /// Placement relative to the target
    pub position: DropPosition,
}

impl DropRequest {
    /// Creates a new drop request.
    #[must_use]
    pub fn new(
        dragged: impl Into<NodeId>,
        target: impl Into<NodeId>,
        position: DropPosition,
    ) -> Self {
        Self {
            dragged: dragged.into(),
            target: target.into(),
            position,
        }
    }

    /// Applies the request to a tree, returning the rearranged tree.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Tree::move_node`].
    pub fn apply(&self, tree: &Tree) -> TreeResult<Tree> {
        tree.move_node(&self.dragged, &self.target, self.position)
    }
}

/// Validates a drop request against a tree without applying it
///
/// # Errors
///
/// Returns the rejection `Tree::move_node` would produce: a self drop, a
/// missing id, or a drop into the dragged node's own subtree.
pub fn validate_drop(tree: &Tree, request: &DropRequest) -> TreeResult<()> {
    tree.can_move(&request.dragged, &request.target)
}

/// Returns true if the target can accept the dragged node
///
/// Used to decide whether to draw a drop indicator while hovering.
#[must_use]
pub fn is_valid_drop_target(tree: &Tree, dragged: &NodeId, target: &NodeId) -> bool {
    tree.can_move(dragged, target).is_ok()
}
