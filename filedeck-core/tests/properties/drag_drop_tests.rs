//! Property-based tests for drop request validation
//!
//! These tests verify that hover validation agrees with the outcome of
//! actually applying the drop.

use filedeck_core::{DropPosition, DropRequest, is_valid_drop_target, validate_drop};
use proptest::prelude::*;

use super::strategies::{id_at, tree_with_two_picks};

fn position_strategy() -> impl Strategy<Value = DropPosition> {
    prop_oneof![Just(DropPosition::Above), Just(DropPosition::Below)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Validation succeeds exactly when applying the request succeeds
    #[test]
    fn prop_validate_matches_apply(
        (tree, a, b) in tree_with_two_picks(),
        position in position_strategy(),
    ) {
        let request = DropRequest::new(id_at(&tree, a), id_at(&tree, b), position);
        let validated = validate_drop(&tree, &request);
        let applied = request.apply(&tree);

        prop_assert_eq!(validated.is_ok(), applied.is_ok());
        if let (Err(expected), Err(actual)) = (validated, applied) {
            prop_assert_eq!(expected, actual);
        }
    }

    /// Hover highlighting ignores the drop position
    #[test]
    fn prop_valid_target_independent_of_position(
        (tree, a, b) in tree_with_two_picks(),
    ) {
        let dragged = id_at(&tree, a);
        let target = id_at(&tree, b);
        let above = DropRequest::new(dragged.clone(), target.clone(), DropPosition::Above);
        let below = DropRequest::new(dragged.clone(), target.clone(), DropPosition::Below);

        prop_assert_eq!(
            is_valid_drop_target(&tree, &dragged, &target),
            validate_drop(&tree, &above).is_ok()
        );
        prop_assert_eq!(
            validate_drop(&tree, &above).is_ok(),
            validate_drop(&tree, &below).is_ok()
        );
    }

    /// Positions survive a trip through their text form
    #[test]
    fn prop_position_display_parses_back(position in position_strategy()) {
        prop_assert_eq!(position.to_string().parse::<DropPosition>(), Ok(position));
        prop_assert_ne!(position.opposite(), position);
        prop_assert_eq!(position.opposite().opposite(), position);
    }
}
