//! Error types for `FileDeck`
//!
//! [`TreeError`] covers the tree model and the selection controller,
//! [`ConfigError`] covers settings files.
//!
//! Every lookup in the tree model is total: an id that matches nothing is
//! reported as a [`TreeError`] instead of silently producing an identical
//! tree. None of these errors is fatal. Callers are expected to keep their
//! current tree and re-render.

use std::fmt;
use std::path::PathBuf;

use crate::tree::NodeId;

/// Reason a move request was refused before touching the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The dragged node was dropped onto itself.
    SelfTarget,
    /// The drop target lives inside the dragged node's subtree.
    IntoOwnSubtree,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfTarget => write!(f, "node dropped onto itself"),
            Self::IntoOwnSubtree => write!(f, "illegal move into own subtree"),
        }
    }
}

/// Errors that can occur during tree and selection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// No node with the given id exists anywhere in the tree.
    #[error("node not found: {0}")]
    NotFound(NodeId),

    /// The move would drop a node onto itself or into its own subtree.
    #[error("invalid move: {0}")]
    InvalidMove(MoveRejection),

    /// The id names a file where a folder was required.
    #[error("node is not a folder: {0}")]
    NotAFolder(NodeId),

    /// The id names a folder where a file was required.
    #[error("node is not a file: {0}")]
    NotAFile(NodeId),

    /// The id is already used by another node in the tree.
    #[error("duplicate node id: {0}")]
    DuplicateId(NodeId),

    /// An edit arrived while no file is bound to the editor.
    #[error("no file is active")]
    NoActiveFile,
}

impl TreeError {
    /// Returns true for the "nothing happened" family of errors.
    ///
    /// These correspond to lookups that found nothing to act on. Invalid
    /// moves and duplicate ids are rejections of a malformed request instead.
    #[must_use]
    pub const fn is_no_op(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::NotAFolder(_) | Self::NotAFile(_) | Self::NoActiveFile
        )
    }

    /// Returns the move rejection reason, if this is an invalid move.
    #[must_use]
    pub const fn move_rejection(&self) -> Option<MoveRejection> {
        match self {
            Self::InvalidMove(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Errors that can occur while loading or saving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file does not exist.
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// The settings file could not be read.
    #[error("Failed to read configuration: {0}")]
    Read(String),

    /// The settings text is not valid TOML for the settings schema.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The settings could not be rendered back to TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// A setting has an unusable value.
    #[error("Invalid configuration value for {field}: {reason}")]
    Validation {
        /// Dotted path of the offending setting
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
