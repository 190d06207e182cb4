//! Node shapes of the file tree
//!
//! A node is either a folder (ordered children, expansion flag) or a file
//! (text content). Both shapes share an id and a title.
//!
//! ```text
//! Folder(src, expanded)
//! ├── File(index.mjs)
//! └── File(App.tsx)
//! File(package.json)
//! ```

use serde::{Deserialize, Serialize};

use super::types::{NodeId, NodeKind};

/// A node in the file tree.
///
/// The variant is the node's kind. Since children only exist on
/// [`FolderNode`] and content only on [`FileNode`], a node cannot carry both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// A folder containing ordered children.
    Folder(FolderNode),
    /// A file with editable content.
    File(FileNode),
}

/// A folder in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNode {
    /// Unique identifier for this folder.
    pub id: NodeId,
    /// Display name.
    pub title: String,
    /// Whether the children are shown.
    #[serde(default)]
    pub expanded: bool,
    /// Children in display order.
    #[serde(default)]
    pub children: Vec<Node>,
}

/// A file in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// Unique identifier for this file.
    pub id: NodeId,
    /// Display name, the type tag follows the last `.`.
    pub title: String,
    /// Text content bound to the editor.
    #[serde(default)]
    pub content: String,
}

impl FolderNode {
    /// Creates a new collapsed, empty folder.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            expanded: false,
            children: Vec::new(),
        }
    }

    /// Sets the expansion flag.
    #[must_use]
    pub const fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Sets the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

impl FileNode {
    /// Creates a new file with empty content.
    #[must_use]
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
        }
    }

    /// Sets the content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Returns the type tag: the part of the title after the last `.`.
    ///
    /// Titles without a `.` have an empty tag.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.title.rsplit_once('.').map_or("", |(_, ext)| ext)
    }
}

impl From<FolderNode> for Node {
    fn from(folder: FolderNode) -> Self {
        Self::Folder(folder)
    }
}

impl From<FileNode> for Node {
    fn from(file: FileNode) -> Self {
        Self::File(file)
    }
}

impl Node {
    /// Creates a new collapsed, empty folder node.
    #[must_use]
    pub fn folder(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self::Folder(FolderNode::new(id, title))
    }

    /// Creates a new empty file node.
    #[must_use]
    pub fn file(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self::File(FileNode::new(id, title))
    }

    /// Returns the node's id.
    #[must_use]
    pub const fn id(&self) -> &NodeId {
        match self {
            Self::Folder(folder) => &folder.id,
            Self::File(file) => &file.id,
        }
    }

    /// Returns the node's title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.title,
            Self::File(file) => &file.title,
        }
    }

    /// Returns the node's kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Folder(_) => NodeKind::Folder,
            Self::File(_) => NodeKind::File,
        }
    }

    /// Returns true if this is a folder.
    #[must_use]
    pub const fn is_folder(&self) -> bool {
        matches!(self, Self::Folder(_))
    }

    /// Returns true if this is a file.
    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Returns the folder if this is a folder node.
    #[must_use]
    pub const fn as_folder(&self) -> Option<&FolderNode> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::File(_) => None,
        }
    }

    /// Returns the file if this is a file node.
    #[must_use]
    pub const fn as_file(&self) -> Option<&FileNode> {
        match self {
            Self::Folder(_) => None,
            Self::File(file) => Some(file),
        }
    }

    /// Returns a mutable reference to the folder if this is a folder node.
    #[must_use]
    pub fn as_folder_mut(&mut self) -> Option<&mut FolderNode> {
        match self {
            Self::Folder(folder) => Some(folder),
            Self::File(_) => None,
        }
    }

    /// Returns a mutable reference to the file if this is a file node.
    #[must_use]
    pub fn as_file_mut(&mut self) -> Option<&mut FileNode> {
        match self {
            Self::Folder(_) => None,
            Self::File(file) => Some(file),
        }
    }

    /// Returns the children. Files have none.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Folder(folder) => &folder.children,
            Self::File(_) => &[],
        }
    }

    /// Returns the children for editing, or `None` for a file.
    #[must_use]
    pub fn children_mut(&mut self) -> Option<&mut Vec<Self>> {
        self.as_folder_mut().map(|folder| &mut folder.children)
    }

    /// Returns the content, or `None` for a folder.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.as_file().map(|file| file.content.as_str())
    }

    /// Returns true if this is an expanded folder.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        match self {
            Self::Folder(folder) => folder.expanded,
            Self::File(_) => false,
        }
    }

    /// Returns the file type tag, empty for folders.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.as_file().map_or("", FileNode::extension)
    }

    // ========================================================================
    // Subtree Traversal Methods
    // ========================================================================

    /// Finds this node or one of its descendants by id.
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&Self> {
        if self.id() == id {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(id))
    }

    /// Returns true if the subtree rooted here contains the id.
    ///
    /// The node itself counts as part of its subtree.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Returns the number of nodes in this subtree, including this one.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Self::subtree_len).sum::<usize>()
    }

    /// Returns the depth of this subtree. A node without children has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Self::depth).max().unwrap_or(0)
    }

    /// Collects the ids of this subtree in pre-order.
    pub(crate) fn collect_ids<'a>(&'a self, ids: &mut Vec<&'a NodeId>) {
        ids.push(self.id());
        for child in self.children() {
            child.collect_ids(ids);
        }
    }
}
