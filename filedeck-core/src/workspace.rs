//! Workspace state owner
//!
//! The [`Workspace`] holds the one canonical [`Tree`] and the
//! [`SelectionController`] for a running document. It receives the events of
//! the tree view, the drag layer and the editor, applies the matching pure
//! operation, and replaces its tree wholesale when the operation succeeds.
//!
//! Rejected operations leave the state untouched. They are logged at debug
//! level and returned so callers can decide whether to care.
//!
//! The workspace has no internal locking. Share it across threads behind a
//! `Mutex` or a single-writer queue.

use serde::Serialize;

use crate::config::Settings;
use crate::drag_drop::{DropPosition, DropRequest};
use crate::error::{TreeError, TreeResult};
use crate::selection::{DEFAULT_PLACEHOLDER, SelectionController};
use crate::tracing::span_names;
use crate::tree::{NodeId, Tree, VisibleRow};
use crate::{trace_operation, trace_operation_debug};

/// Serializable view of the workspace for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceSnapshot {
    /// The current tree
    pub tree: Tree,
    /// The file bound to the editor
    pub active_file: Option<NodeId>,
    /// The editor text
    pub active_content: String,
}

/// Owner of the canonical tree and the editor selection.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Canonical tree, replaced on every successful mutation
    tree: Tree,
    /// Editor binding
    selection: SelectionController,
    /// Editor text restored when the active file disappears
    placeholder: String,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(Tree::new())
    }
}

impl Workspace {
    /// Creates a workspace over the given tree with nothing selected.
    #[must_use]
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            selection: SelectionController::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Creates a workspace from settings (seed tree and editor placeholder).
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let placeholder = settings.editor.placeholder.clone();
        Self {
            tree: settings.workspace.seed.build(),
            selection: SelectionController::with_placeholder(placeholder.as_str()),
            placeholder,
        }
    }

    /// Returns the current tree.
    #[must_use]
    pub const fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns the selection controller.
    #[must_use]
    pub const fn selection(&self) -> &SelectionController {
        &self.selection
    }

    /// Returns the file bound to the editor.
    #[must_use]
    pub const fn active_file(&self) -> Option<&NodeId> {
        self.selection.active_file()
    }

    /// Returns the editor text.
    #[must_use]
    pub fn active_content(&self) -> &str {
        self.selection.active_content()
    }

    /// Returns the rows the tree view should render.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        self.tree.visible_rows()
    }

    /// Returns a serializable copy of the outbound state.
    #[must_use]
    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            tree: self.tree.clone(),
            active_file: self.selection.active_file().cloned(),
            active_content: self.selection.active_content().to_string(),
        }
    }

    /// Handles a drop from the drag layer.
    ///
    /// # Errors
    ///
    /// Returns the rejection from [`Tree::move_node`]; the tree is unchanged.
    pub fn on_drop(
        &mut self,
        dragged: &NodeId,
        target: &NodeId,
        position: DropPosition,
    ) -> TreeResult<()> {
        let _span = trace_operation!(
            span_names::TREE_MOVE,
            dragged = %dragged,
            target = %target,
            position = %position
        )
        .entered();

        let tree = self
            .tree
            .move_node(dragged, target, position)
            .inspect_err(|e| tracing::debug!(error = %e, "Drop rejected"))?;
        self.tree = tree;
        tracing::debug!("Node moved");
        Ok(())
    }

    /// Handles a [`DropRequest`].
    ///
    /// # Errors
    ///
    /// See [`Workspace::on_drop`].
    pub fn apply_drop(&mut self, request: &DropRequest) -> TreeResult<()> {
        self.on_drop(&request.dragged, &request.target, request.position)
    }

    /// Handles a click on a folder's expand/collapse control.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NotFound` or `TreeError::NotAFolder`; the tree is
    /// unchanged.
    pub fn on_toggle(&mut self, id: &NodeId) -> TreeResult<()> {
        let _span = trace_operation!(span_names::TREE_TOGGLE, node_id = %id).entered();

        let tree = self
            .tree
            .toggle_expanded(id)
            .inspect_err(|e| tracing::debug!(error = %e, "Toggle ignored"))?;
        self.tree = tree;
        Ok(())
    }

    /// Handles a click on a node's title.
    ///
    /// Returns `Ok(true)` when a file became active, `Ok(false)` for a
    /// folder, which does not affect the selection.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NotFound` if the id is not in the tree.
    pub fn on_select(&mut self, id: &NodeId) -> TreeResult<bool> {
        let _span = trace_operation!(span_names::SELECTION_SELECT, node_id = %id).entered();

        let node = self
            .tree
            .find(id)
            .ok_or_else(|| TreeError::NotFound(id.clone()))
            .inspect_err(|e| tracing::debug!(error = %e, "Select ignored"))?;
        let selected = self.selection.select(node);
        if selected {
            tracing::debug!(content_len = self.selection.active_content().len(), "File selected");
        }
        Ok(selected)
    }

    /// Handles new text from the editor.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NoActiveFile` when nothing is selected, or the
    /// error from [`Tree::update_content`]; the tree is unchanged.
    pub fn on_content_change(&mut self, new_text: impl Into<String>) -> TreeResult<()> {
        let new_text = new_text.into();
        let _span =
            trace_operation_debug!(span_names::SELECTION_EDIT, content_len = new_text.len())
                .entered();

        let tree = self
            .selection
            .apply_edit(&self.tree, new_text)
            .inspect_err(|e| tracing::debug!(error = %e, "Edit dropped"))?;
        self.tree = tree;
        Ok(())
    }

    /// Deletes a node and its subtree.
    ///
    /// If the active file was inside the deleted subtree the editor is
    /// unbound and shows the placeholder again.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NotFound` if the id is not in the tree.
    pub fn delete(&mut self, id: &NodeId) -> TreeResult<()> {
        let _span = trace_operation!(span_names::TREE_DELETE, node_id = %id).entered();

        let (tree, removed) = self.tree.remove(id);
        let removed = removed.ok_or_else(|| TreeError::NotFound(id.clone()))?;

        if let Some(active) = self.selection.active_file()
            && removed.contains(active)
        {
            tracing::debug!(active = %active, "Active file deleted, releasing editor");
            self.selection.release(&self.placeholder);
        }

        self.tree = tree;
        tracing::info!(node_count = removed.subtree_len(), "Nodes deleted");
        Ok(())
    }
}
