//! Ordered tree value and its pure mutation operations
//!
//! Every mutation takes `&self` and returns a new [`Tree`]. The input is
//! never modified: the root sequence is cloned and the private copy is
//! edited, so an old tree value held by a caller never observes a change.
//!
//! Lookups that find nothing are reported through [`TreeError`] so callers
//! can tell "nothing happened" apart from a successful edit.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::node::{FileNode, FolderNode, Node};
use super::types::NodeId;
use crate::drag_drop::DropPosition;
use crate::error::{MoveRejection, TreeError, TreeResult};

/// The ordered forest of root nodes making up a workspace.
///
/// Ids are unique across all levels. The constructor and deserialization
/// both enforce this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Node>", into = "Vec<Node>")]
pub struct Tree {
    roots: Vec<Node>,
}

impl TryFrom<Vec<Node>> for Tree {
    type Error = TreeError;

    fn try_from(roots: Vec<Node>) -> TreeResult<Self> {
        Self::from_roots(roots)
    }
}

impl From<Tree> for Vec<Node> {
    fn from(tree: Tree) -> Self {
        tree.roots
    }
}

impl Tree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree from root nodes.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::DuplicateId` if two nodes anywhere in the forest
    /// share an id.
    pub fn from_roots(roots: Vec<Node>) -> TreeResult<Self> {
        let mut ids = Vec::new();
        for root in &roots {
            root.collect_ids(&mut ids);
        }
        let mut seen = HashSet::with_capacity(ids.len());
        if let Some(duplicate) = ids.into_iter().find(|id| !seen.insert(*id)) {
            return Err(TreeError::DuplicateId(duplicate.clone()));
        }
        Ok(Self { roots })
    }

    /// Returns the seed workspace: an expanded `src` folder with two files,
    /// followed by a root-level `package.json`.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            roots: vec![
                FolderNode::new("1", "src")
                    .expanded(true)
                    .with_children(vec![
                        FileNode::new("2", "index.mjs")
                            .with_content("// index.tsx content")
                            .into(),
                        FileNode::new("3", "App.tsx")
                            .with_content("// App.tsx content")
                            .into(),
                    ])
                    .into(),
                FileNode::new("4", "package.json")
                    .with_content(r#"{ "name": "my-app", "version": "1.0.0" }"#)
                    .into(),
            ],
        }
    }

    /// Returns the root nodes in display order.
    #[must_use]
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Consumes the tree and returns its root nodes.
    #[must_use]
    pub fn into_roots(self) -> Vec<Node> {
        self.roots
    }

    /// Returns the total number of nodes at all levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    /// Returns true if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns the number of levels. An empty tree has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.roots.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Returns all ids in pre-order (depth-first, in display order).
    #[must_use]
    pub fn ids(&self) -> Vec<&NodeId> {
        let mut ids = Vec::new();
        for root in &self.roots {
            root.collect_ids(&mut ids);
        }
        ids
    }

    // ========================================================================
    // Lookup Methods
    // ========================================================================

    /// Finds a node by id at any depth.
    #[must_use]
    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    /// Returns true if a node with the id exists anywhere in the tree.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Returns true if `id` lies strictly inside the subtree of `ancestor`.
    #[must_use]
    pub fn is_descendant(&self, ancestor: &NodeId, id: &NodeId) -> bool {
        self.find(ancestor)
            .is_some_and(|node| node.id() != id && node.contains(id))
    }

    /// Returns the folder that directly contains the node.
    ///
    /// Root-level nodes have no parent and yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NotFound` if the id is not in the tree.
    pub fn parent_of(&self, id: &NodeId) -> TreeResult<Option<&Node>> {
        if self.roots.iter().any(|root| root.id() == id) {
            return Ok(None);
        }
        find_parent(&self.roots, id)
            .map(Some)
            .ok_or_else(|| TreeError::NotFound(id.clone()))
    }

    /// Returns the sibling sequence the node belongs to, itself included.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NotFound` if the id is not in the tree.
    pub fn siblings(&self, id: &NodeId) -> TreeResult<&[Node]> {
        Ok(match self.parent_of(id)? {
            Some(parent) => parent.children(),
            None => self.roots.as_slice(),
        })
    }

    // ========================================================================
    // Mutation Methods
    // ========================================================================

    /// Detaches the node with the given id, subtree included.
    ///
    /// Returns the new tree and the removed node. When nothing matches the
    /// returned tree equals `self` and the node is `None`.
    #[must_use]
    pub fn remove(&self, id: &NodeId) -> (Self, Option<Node>) {
        let mut roots = self.roots.clone();
        let removed = detach(&mut roots, id);
        (Self { roots }, removed)
    }

    /// Inserts `node` as a sibling of `target`, directly above or below it.
    ///
    /// The target may live at any depth. Expansion flags are left untouched.
    ///
    /// # Errors
    ///
    /// - `TreeError::NotFound` if `target` does not exist; the node is dropped.
    /// - `TreeError::DuplicateId` if the node or one of its descendants
    ///   reuses an id already in the tree.
    pub fn insert(&self, target: &NodeId, node: Node, position: DropPosition) -> TreeResult<Self> {
        if !self.contains(target) {
            return Err(TreeError::NotFound(target.clone()));
        }
        if let Some(duplicate) = self.first_clashing_id(&node) {
            return Err(TreeError::DuplicateId(duplicate));
        }

        let mut roots = self.roots.clone();
        attach(&mut roots, target, node, position)
            .map_err(|_| TreeError::NotFound(target.clone()))?;
        Ok(Self { roots })
    }

    /// Checks whether `dragged` may be moved next to `target`.
    ///
    /// # Errors
    ///
    /// - `TreeError::InvalidMove(SelfTarget)` if both ids are equal.
    /// - `TreeError::NotFound` if either id is missing.
    /// - `TreeError::InvalidMove(IntoOwnSubtree)` if `target` is a
    ///   descendant of `dragged`.
    pub fn can_move(&self, dragged: &NodeId, target: &NodeId) -> TreeResult<()> {
        if dragged == target {
            return Err(TreeError::InvalidMove(MoveRejection::SelfTarget));
        }
        let source = self
            .find(dragged)
            .ok_or_else(|| TreeError::NotFound(dragged.clone()))?;
        if !self.contains(target) {
            return Err(TreeError::NotFound(target.clone()));
        }
        if source.contains(target) {
            return Err(TreeError::InvalidMove(MoveRejection::IntoOwnSubtree));
        }
        Ok(())
    }

    /// Moves `dragged` (with its subtree) next to `target`.
    ///
    /// The request is validated before anything is detached, so a rejected
    /// move never loses the dragged node.
    ///
    /// # Errors
    ///
    /// See [`Tree::can_move`].
    pub fn move_node(
        &self,
        dragged: &NodeId,
        target: &NodeId,
        position: DropPosition,
    ) -> TreeResult<Self> {
        self.can_move(dragged, target)?;

        let mut roots = self.roots.clone();
        let node =
            detach(&mut roots, dragged).ok_or_else(|| TreeError::NotFound(dragged.clone()))?;
        attach(&mut roots, target, node, position)
            .map_err(|_| TreeError::NotFound(target.clone()))?;
        Ok(Self { roots })
    }

    /// Flips the expansion flag of a folder.
    ///
    /// # Errors
    ///
    /// - `TreeError::NotFound` if the id is missing.
    /// - `TreeError::NotAFolder` if the id names a file; the tree is unchanged.
    pub fn toggle_expanded(&self, id: &NodeId) -> TreeResult<Self> {
        let mut roots = self.roots.clone();
        let node = find_mut(&mut roots, id).ok_or_else(|| TreeError::NotFound(id.clone()))?;
        let folder = node
            .as_folder_mut()
            .ok_or_else(|| TreeError::NotAFolder(id.clone()))?;
        folder.expanded = !folder.expanded;
        Ok(Self { roots })
    }

    /// Replaces the content of a file.
    ///
    /// # Errors
    ///
    /// - `TreeError::NotFound` if the id is missing.
    /// - `TreeError::NotAFile` if the id names a folder.
    pub fn update_content(&self, id: &NodeId, content: impl Into<String>) -> TreeResult<Self> {
        let mut roots = self.roots.clone();
        let node = find_mut(&mut roots, id).ok_or_else(|| TreeError::NotFound(id.clone()))?;
        let file = node
            .as_file_mut()
            .ok_or_else(|| TreeError::NotAFile(id.clone()))?;
        file.content = content.into();
        Ok(Self { roots })
    }

    /// Removes a node and its subtree for good.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::NotFound` if the id is missing.
    pub fn delete(&self, id: &NodeId) -> TreeResult<Self> {
        match self.remove(id) {
            (tree, Some(_)) => Ok(tree),
            (_, None) => Err(TreeError::NotFound(id.clone())),
        }
    }

    /// Returns the first id of `node`'s subtree that is already taken,
    /// either by this tree or earlier in the subtree itself.
    fn first_clashing_id(&self, node: &Node) -> Option<NodeId> {
        let mut seen: HashSet<&NodeId> = self.ids().into_iter().collect();
        let mut incoming = Vec::new();
        node.collect_ids(&mut incoming);
        incoming
            .into_iter()
            .find(|id| !seen.insert(*id))
            .cloned()
    }
}

fn find_parent<'a>(nodes: &'a [Node], id: &NodeId) -> Option<&'a Node> {
    for node in nodes {
        if node.children().iter().any(|child| child.id() == id) {
            return Some(node);
        }
        if let Some(parent) = find_parent(node.children(), id) {
            return Some(parent);
        }
    }
    None
}

fn find_mut<'a>(nodes: &'a mut [Node], id: &NodeId) -> Option<&'a mut Node> {
    for node in nodes.iter_mut() {
        if node.id() == id {
            return Some(node);
        }
        if let Some(children) = node.children_mut()
            && let Some(found) = find_mut(children, id)
        {
            return Some(found);
        }
    }
    None
}

/// Detaches the first node with the id, searching each level before
/// descending into folders.
fn detach(nodes: &mut Vec<Node>, id: &NodeId) -> Option<Node> {
    if let Some(index) = nodes.iter().position(|node| node.id() == id) {
        return Some(nodes.remove(index));
    }
    nodes
        .iter_mut()
        .filter_map(Node::children_mut)
        .find_map(|children| detach(children, id))
}

/// Inserts next to the target. Hands the node back if the target is absent.
fn attach(
    nodes: &mut Vec<Node>,
    target: &NodeId,
    node: Node,
    position: DropPosition,
) -> Result<(), Node> {
    if let Some(index) = nodes.iter().position(|candidate| candidate.id() == target) {
        nodes.insert(position.insertion_index(index), node);
        return Ok(());
    }

    let mut node = node;
    for children in nodes.iter_mut().filter_map(Node::children_mut) {
        match attach(children, target, node, position) {
            Ok(()) => return Ok(()),
            Err(returned) => node = returned,
        }
    }
    Err(node)
}
