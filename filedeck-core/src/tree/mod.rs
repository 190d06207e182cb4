//! Ordered file tree model
//!
//! This module provides the tree of folders and files shown in the
//! workspace sidebar, together with the pure operations behind
//! drag-and-drop reordering, folder expansion and content edits.
//!
//! # Module Structure
//!
//! - `types` - Identifier and kind tag (`NodeId`, `NodeKind`)
//! - `node` - Node shapes (`Node`, `FolderNode`, `FileNode`)
//! - `store` - The tree value and its operations (`Tree`)
//! - `rows` - Flattened display rows (`VisibleRow`)
//!
//! # Example
//!
//! ```
//! use filedeck_core::drag_drop::DropPosition;
//! use filedeck_core::tree::{NodeId, Tree};
//!
//! let tree = Tree::sample();
//!
//! // Drag App.tsx above index.mjs
//! let moved = tree
//!     .move_node(&NodeId::from("3"), &NodeId::from("2"), DropPosition::Above)
//!     .unwrap();
//!
//! let src = moved.find(&NodeId::from("1")).unwrap();
//! assert_eq!(src.children()[0].title(), "App.tsx");
//!
//! // The input value is untouched
//! assert_eq!(tree.find(&NodeId::from("1")).unwrap().children()[0].title(), "index.mjs");
//! ```

mod node;
mod rows;
mod store;
mod types;

pub use node::{FileNode, FolderNode, Node};
pub use rows::VisibleRow;
pub use store::Tree;
pub use types::{NodeId, NodeKind};
