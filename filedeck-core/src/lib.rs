//! `FileDeck` Core Library
//!
//! This crate provides the document model behind a file-explorer style
//! editor: an ordered tree of folders and files, drag-and-drop reordering,
//! folder expansion, and a single-file editor selection.
//!
//! Every tree operation is pure. It takes the current [`Tree`] by reference
//! and returns a new one, leaving the input untouched. The [`Workspace`]
//! owns the canonical tree and swaps it in when an operation succeeds.
//!
//! # Crate Structure
//!
//! - [`tree`] - Node types, the tree store and its operations
//! - [`drag_drop`] - Drop positions and drop request validation
//! - [`selection`] - Active file and editor text
//! - [`workspace`] - Event handlers tying the pieces together
//! - [`config`] - TOML settings
//! - [`error`] - Error and result types
//! - [`tracing`] - Structured logging setup

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod drag_drop;
pub mod error;
pub mod selection;
pub mod tracing;
pub mod tree;
pub mod workspace;

// =============================================================================
// Convenience re-exports
// =============================================================================

pub use config::{EditorSettings, LoggingSettings, SeedTree, Settings, WorkspaceSettings};
pub use drag_drop::{DropPosition, DropRequest, is_valid_drop_target, validate_drop};
pub use error::{ConfigError, ConfigResult, MoveRejection, TreeError, TreeResult};
pub use selection::{DEFAULT_PLACEHOLDER, SelectionController};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
};
pub use tree::{FileNode, FolderNode, Node, NodeId, NodeKind, Tree, VisibleRow};
pub use workspace::{Workspace, WorkspaceSnapshot};
