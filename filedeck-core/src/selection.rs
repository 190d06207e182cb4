//! Active file tracking for the editor panel
//!
//! The [`SelectionController`] binds at most one file to the editor. It keeps
//! a snapshot of that file's content and routes edits back into the tree.

use crate::error::{TreeError, TreeResult};
use crate::tree::{Node, NodeId, Tree};

/// Text shown by the editor before any file is selected.
pub const DEFAULT_PLACEHOLDER: &str = "// Start typing your code...";

/// Tracks which file is bound to the editor.
///
/// There are two states: no active file, or exactly one. Selecting a file
/// moves into the second state. Clicking a folder never changes the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    /// Id of the file bound to the editor
    active_file: Option<NodeId>,
    /// Snapshot of the editor text, not live-linked to the tree
    active_content: String,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    /// Creates a controller with no active file and the default placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self::with_placeholder(DEFAULT_PLACEHOLDER)
    }

    /// Creates a controller with no active file and a custom placeholder.
    #[must_use]
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            active_file: None,
            active_content: placeholder.into(),
        }
    }

    /// Returns the id of the active file, if any.
    #[must_use]
    pub const fn active_file(&self) -> Option<&NodeId> {
        self.active_file.as_ref()
    }

    /// Returns the editor text snapshot.
    #[must_use]
    pub fn active_content(&self) -> &str {
        &self.active_content
    }

    /// Returns true if a file is bound to the editor.
    #[must_use]
    pub const fn has_active_file(&self) -> bool {
        self.active_file.is_some()
    }

    /// Binds a file to the editor.
    ///
    /// Returns `false` and leaves the state unchanged for folders.
    pub fn select(&mut self, node: &Node) -> bool {
        let Some(file) = node.as_file() else {
            return false;
        };
        self.active_file = Some(file.id.clone());
        self.active_content.clone_from(&file.content);
        true
    }

    /// Applies editor text to the active file.
    ///
    /// On success the local snapshot follows the new text and the updated
    /// tree is returned for the caller to store.
    ///
    /// # Errors
    ///
    /// - `TreeError::NoActiveFile` if nothing is selected; the edit is dropped.
    /// - Any error from [`Tree::update_content`], e.g. when the active file
    ///   no longer exists.
    pub fn apply_edit(&mut self, tree: &Tree, new_text: impl Into<String>) -> TreeResult<Tree> {
        let id = self.active_file.as_ref().ok_or(TreeError::NoActiveFile)?;
        let new_text = new_text.into();
        let updated = tree.update_content(id, new_text.as_str())?;
        self.active_content = new_text;
        Ok(updated)
    }

    /// Unbinds the editor when the active file has been deleted.
    pub(crate) fn release(&mut self, placeholder: &str) {
        self.active_file = None;
        placeholder.clone_into(&mut self.active_content);
    }
}
