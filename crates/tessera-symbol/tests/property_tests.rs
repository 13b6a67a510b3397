use proptest::prelude::*;
use std::collections::HashSet;
use tessera_symbol::{Catalog, SymbolMap, SymbolTags};
use tessera_test_utils::{assert_strictly_ascending, single_tags};

fn tag_mask() -> impl Strategy<Value = SymbolTags> {
    prop_oneof![
        any::<u32>().prop_map(SymbolTags::from_bits_retain),
        prop::sample::subsequence(single_tags(), 1..4)
            .prop_map(|tags| tags.into_iter().fold(SymbolTags::empty(), |acc, t| acc | t)),
    ]
}

fn edits() -> impl Strategy<Value = Vec<(bool, SymbolTags)>> {
    proptest::collection::vec((any::<bool>(), tag_mask()), 0..8)
}

fn apply(map: &mut SymbolMap, edits: &[(bool, SymbolTags)]) {
    for &(add, tags) in edits {
        if add {
            map.add_by_tags(tags);
        } else {
            map.remove_by_tags(tags);
        }
    }
}

fn code_point_sample() -> impl Strategy<Value = char> {
    let catalog = Catalog::builtin();
    let known: Vec<char> = catalog.iter().map(|s| s.code_point).collect();
    prop_oneof![prop::sample::select(known), any::<char>()]
}

proptest! {
    #[test]
    fn prop_add_is_idempotent(history in edits(), tags in tag_mask()) {
        let mut once = SymbolMap::new();
        apply(&mut once, &history);
        once.add_by_tags(tags);

        let mut twice = once.copy_contents();
        twice.add_by_tags(tags);

        prop_assert_eq!(once.desired_indices(), twice.desired_indices());
        prop_assert_eq!(once.symbols().to_vec(), twice.symbols().to_vec());
    }

    #[test]
    fn prop_add_then_remove_restores_selection(
        history in edits(),
        tags in tag_mask(),
    ) {
        let mut map = SymbolMap::new();
        apply(&mut map, &history);
        // remove tags from the baseline so no selected symbol matches them
        map.remove_by_tags(tags);
        let before = map.desired_indices();

        map.add_by_tags(tags);
        map.remove_by_tags(tags);

        prop_assert_eq!(map.desired_indices(), before);
    }

    #[test]
    fn prop_table_is_strictly_ascending(history in edits()) {
        let mut map = SymbolMap::new();
        apply(&mut map, &history);

        assert_strictly_ascending(map.symbols());
        prop_assert_eq!(map.symbols().len(), map.len());
    }

    #[test]
    fn prop_membership_matches_selection(
        history in edits(),
        samples in proptest::collection::vec(code_point_sample(), 1..32),
    ) {
        let mut map = SymbolMap::new();
        apply(&mut map, &history);

        let catalog = Catalog::builtin();
        let selected: HashSet<usize> = map.desired_indices().into_iter().collect();

        for c in samples {
            let expected = catalog
                .find(c)
                .is_some_and(|(index, _)| selected.contains(&index));
            prop_assert_eq!(map.has_symbol(c), expected, "code point U+{:04X}", u32::from(c));
        }
    }

    #[test]
    fn prop_copies_are_independent(
        history in edits(),
        src_edit in tag_mask(),
        dest_edit in tag_mask(),
    ) {
        let mut src = SymbolMap::new();
        apply(&mut src, &history);

        let mut dest = src.copy_contents();
        let dest_before = dest.symbols().to_vec();
        let src_before = src.symbols().to_vec();

        src.add_by_tags(src_edit);
        prop_assert_eq!(dest.symbols().to_vec(), dest_before);

        let src_after = src.symbols().to_vec();
        dest.remove_by_tags(dest_edit);
        prop_assert_eq!(src.symbols().to_vec(), src_after);
        prop_assert!(src_before.len() <= src.len());
    }
}

#[test]
fn test_empty_map_answers_false() {
    let mut map = SymbolMap::new();
    assert!(map.symbols().is_empty());
    assert!(Catalog::builtin().iter().all(|sym| !map.has_symbol(sym.code_point)));
}
