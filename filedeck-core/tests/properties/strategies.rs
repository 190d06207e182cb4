//! Shared strategies for generating trees
//!
//! Trees are generated as shapes first and numbered afterwards, so every
//! generated tree has unique ids `"1"`, `"2"`, ... in pre-order.

use filedeck_core::{FileNode, FolderNode, Node, NodeId, Tree};
use proptest::prelude::*;

/// Tree shape without ids
#[derive(Debug, Clone)]
pub enum Shape {
    File { title: String, content: String },
    Folder {
        title: String,
        expanded: bool,
        children: Vec<Shape>,
    },
}

fn title_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(\\.[a-z]{1,3})?"
}

fn content_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,32}"
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let leaf = (title_strategy(), content_strategy())
        .prop_map(|(title, content)| Shape::File { title, content });

    leaf.prop_recursive(4, 32, 5, |inner| {
        (
            title_strategy(),
            any::<bool>(),
            prop::collection::vec(inner, 0..5),
        )
            .prop_map(|(title, expanded, children)| Shape::Folder {
                title,
                expanded,
                children,
            })
    })
}

fn build(shape: &Shape, next_id: &mut u32) -> Node {
    *next_id += 1;
    let id = next_id.to_string();
    match shape {
        Shape::File { title, content } => {
            FileNode::new(id, title.as_str()).with_content(content.as_str()).into()
        }
        Shape::Folder {
            title,
            expanded,
            children,
        } => {
            let folder = FolderNode::new(id, title.as_str()).expanded(*expanded);
            let children = children.iter().map(|c| build(c, next_id)).collect();
            folder.with_children(children).into()
        }
    }
}

/// Strategy for generating non-empty trees with unique ids
pub fn tree_strategy() -> impl Strategy<Value = Tree> {
    prop::collection::vec(shape_strategy(), 1..5).prop_map(|shapes| {
        let mut next_id = 0;
        let roots = shapes.iter().map(|s| build(s, &mut next_id)).collect();
        Tree::from_roots(roots).expect("generated ids are unique")
    })
}

/// Strategy for a tree plus two indexes into its pre-order id list
pub fn tree_with_two_picks() -> impl Strategy<Value = (Tree, usize, usize)> {
    tree_strategy().prop_flat_map(|tree| {
        let len = tree.len();
        (Just(tree), 0..len, 0..len)
    })
}

/// Strategy for a tree plus one index into its pre-order id list
pub fn tree_with_pick() -> impl Strategy<Value = (Tree, usize)> {
    tree_strategy().prop_flat_map(|tree| {
        let len = tree.len();
        (Just(tree), 0..len)
    })
}

/// Returns the id at a pre-order index
pub fn id_at(tree: &Tree, index: usize) -> NodeId {
    tree.ids()[index].clone()
}

/// Returns true if all ids in the tree are distinct
pub fn ids_are_unique(tree: &Tree) -> bool {
    let ids = tree.ids();
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().all(|id| seen.insert(id))
}
