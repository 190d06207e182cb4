//! Configuration management for `FileDeck`
//!
//! This module provides [`Settings`] for loading and saving the TOML
//! settings file that drives logging, the seed tree and the editor panel.

mod settings;

pub use settings::{EditorSettings, LoggingSettings, SeedTree, Settings, WorkspaceSettings};
