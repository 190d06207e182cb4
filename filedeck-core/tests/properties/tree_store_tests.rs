//! Property-based tests for the tree store operations
//!
//! These tests verify that every operation keeps ids unique, leaves its input
//! untouched, and moves whole subtrees without losing or duplicating nodes.

use filedeck_core::{DropPosition, MoveRejection, Node, NodeKind, TreeError};
use proptest::prelude::*;

use super::strategies::{id_at, ids_are_unique, tree_strategy, tree_with_pick, tree_with_two_picks};

fn position_strategy() -> impl Strategy<Value = DropPosition> {
    prop_oneof![Just(DropPosition::Above), Just(DropPosition::Below)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Generated trees satisfy the uniqueness invariant
    #[test]
    fn prop_generated_trees_have_unique_ids(tree in tree_strategy()) {
        prop_assert!(ids_are_unique(&tree));
        prop_assert_eq!(tree.ids().len(), tree.len());
    }

    /// A move either fails and leaves nothing changed, or keeps every node
    #[test]
    fn prop_move_preserves_node_count_and_uniqueness(
        (tree, a, b) in tree_with_two_picks(),
        position in position_strategy(),
    ) {
        let dragged = id_at(&tree, a);
        let target = id_at(&tree, b);
        let before = tree.clone();

        match tree.move_node(&dragged, &target, position) {
            Ok(moved) => {
                prop_assert_eq!(moved.len(), tree.len());
                prop_assert!(ids_are_unique(&moved));
            }
            Err(err) => {
                prop_assert!(
                    matches!(err, TreeError::InvalidMove(_)),
                    "Only structural rejections expected for existing ids, got {:?}",
                    err
                );
            }
        }
        prop_assert_eq!(tree, before, "Input tree must never change");
    }

    /// Dropping a node onto itself is always rejected
    #[test]
    fn prop_self_move_is_rejected(
        (tree, a) in tree_with_pick(),
        position in position_strategy(),
    ) {
        let id = id_at(&tree, a);
        prop_assert_eq!(
            tree.move_node(&id, &id, position),
            Err(TreeError::InvalidMove(MoveRejection::SelfTarget))
        );
    }

    /// Dropping a folder next to one of its descendants is always rejected
    #[test]
    fn prop_move_into_own_subtree_is_rejected(
        (tree, a, b) in tree_with_two_picks(),
        position in position_strategy(),
    ) {
        let dragged = id_at(&tree, a);
        let target = id_at(&tree, b);
        prop_assume!(tree.is_descendant(&dragged, &target));

        prop_assert_eq!(
            tree.move_node(&dragged, &target, position),
            Err(TreeError::InvalidMove(MoveRejection::IntoOwnSubtree))
        );
    }

    /// A successful move carries the whole subtree and lands next to the target
    #[test]
    fn prop_move_lands_next_to_target(
        (tree, a, b) in tree_with_two_picks(),
        position in position_strategy(),
    ) {
        let dragged = id_at(&tree, a);
        let target = id_at(&tree, b);
        let Ok(moved) = tree.move_node(&dragged, &target, position) else {
            return Ok(());
        };

        prop_assert_eq!(moved.find(&dragged), tree.find(&dragged));

        let siblings = moved.siblings(&dragged).unwrap();
        let dragged_index = siblings.iter().position(|n| n.id() == &dragged).unwrap();
        let target_index = siblings.iter().position(|n| n.id() == &target);
        prop_assert!(target_index.is_some(), "Dragged node must share the target's parent");
        let target_index = target_index.unwrap();
        match position {
            DropPosition::Above => prop_assert_eq!(dragged_index + 1, target_index),
            DropPosition::Below => prop_assert_eq!(dragged_index, target_index + 1),
        }
    }

    /// Removing a node drops exactly its subtree
    #[test]
    fn prop_remove_drops_whole_subtree((tree, a) in tree_with_pick()) {
        let id = id_at(&tree, a);
        let (pruned, removed) = tree.remove(&id);
        let removed = removed.unwrap();

        prop_assert_eq!(pruned.len() + removed.subtree_len(), tree.len());
        let mut gone = Vec::new();
        collect(&removed, &mut gone);
        for gone_id in gone {
            prop_assert!(!pruned.contains(&gone_id), "{} should be gone", gone_id);
        }
    }

    /// Removing then re-inserting next to the old neighbour restores the tree
    #[test]
    fn prop_remove_then_insert_restores((tree, a) in tree_with_pick()) {
        let id = id_at(&tree, a);
        let siblings = tree.siblings(&id).unwrap();
        prop_assume!(siblings.len() > 1);
        let index = siblings.iter().position(|n| n.id() == &id).unwrap();
        let (anchor, position) = if index == 0 {
            (siblings[1].id().clone(), DropPosition::Above)
        } else {
            (siblings[index - 1].id().clone(), DropPosition::Below)
        };

        let (pruned, removed) = tree.remove(&id);
        let restored = pruned.insert(&anchor, removed.unwrap(), position).unwrap();
        prop_assert_eq!(restored, tree);
    }

    /// Toggling a folder twice is the identity, toggling a file is refused
    #[test]
    fn prop_toggle_is_involution((tree, a) in tree_with_pick()) {
        let id = id_at(&tree, a);
        match tree.find(&id).unwrap().kind() {
            NodeKind::Folder => {
                let once = tree.toggle_expanded(&id).unwrap();
                prop_assert_ne!(
                    once.find(&id).unwrap().is_expanded(),
                    tree.find(&id).unwrap().is_expanded()
                );
                prop_assert_eq!(once.toggle_expanded(&id).unwrap(), tree);
            }
            NodeKind::File => {
                prop_assert_eq!(tree.toggle_expanded(&id), Err(TreeError::NotAFolder(id)));
            }
        }
    }

    /// Content updates touch only the named file
    #[test]
    fn prop_update_content_is_isolated(
        (tree, a) in tree_with_pick(),
        text in "[ -~]{0,40}",
    ) {
        let id = id_at(&tree, a);
        let Ok(updated) = tree.update_content(&id, text.as_str()) else {
            prop_assert!(tree.find(&id).unwrap().is_folder());
            return Ok(());
        };

        prop_assert_eq!(updated.find(&id).unwrap().content(), Some(text.as_str()));
        for other in tree.ids() {
            if other != &id {
                prop_assert_eq!(updated.find(other), tree.find(other));
            }
        }
    }

    /// Visible rows never include children of collapsed folders
    #[test]
    fn prop_visible_rows_respect_expansion(tree in tree_strategy()) {
        let rows = tree.visible_rows();
        prop_assert!(rows.len() <= tree.len());
        for row in &rows {
            if let Some(parent) = tree.parent_of(&row.id).unwrap() {
                prop_assert!(parent.is_expanded(), "{} is under a collapsed folder", row.id);
            }
        }
    }

    /// Serialized trees deserialize to the same tree
    #[test]
    fn prop_json_snapshot_restores_tree(tree in tree_strategy()) {
        let json = serde_json::to_string(&tree).unwrap();
        let restored: filedeck_core::Tree = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(restored, tree);
    }
}

fn collect(node: &Node, out: &mut Vec<filedeck_core::NodeId>) {
    out.push(node.id().clone());
    for child in node.children() {
        collect(child, out);
    }
}
