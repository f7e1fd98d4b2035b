//! Property-based tests for item list lookups.
//!
//! Builds lists of random distinct values and checks that the forward and
//! reverse lookups invert each other, and that everything outside the list
//! falls back to the sentinel id or the default value.

use proptest::prelude::*;
use wavesel_core::{Entry, ItemId, ItemList};

/// Build a list over `values`, naming each entry after its value.
fn list_of(values: &[u32]) -> ItemList<u32> {
    values
        .iter()
        .map(|&v| Entry::owned(v, format!("Item {v}")))
        .collect()
}

/// Distinct values, 0..=40 entries. Zero is excluded so the default value
/// never appears as a legitimate entry.
fn distinct_values() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::hash_set(1u32..10_000, 0..=40).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For every id in 1..=N, reverse then forward lookup returns the id.
    #[test]
    fn id_round_trip(values in distinct_values()) {
        let list = list_of(&values);
        for raw in 1..=values.len() as i32 {
            let id = ItemId(raw);
            prop_assert_eq!(list.value_to_id(&list.id_to_value(id)), id);
        }
    }

    /// For every listed value, forward then reverse lookup returns the value.
    #[test]
    fn value_round_trip(values in distinct_values()) {
        let list = list_of(&values);
        for v in &values {
            prop_assert_eq!(list.id_to_value(list.value_to_id(v)), *v);
        }
    }

    /// Values absent from the list map to the sentinel id.
    #[test]
    fn absent_values_are_not_found(values in distinct_values(), missing in 10_000u32..20_000) {
        let list = list_of(&values);
        prop_assert_eq!(list.value_to_id(&missing), ItemId::NONE);
        prop_assert!(list.value_to_id(&0).is_none());
    }

    /// Ids outside 1..=N return the default value, and the strict lookup says so.
    #[test]
    fn out_of_range_ids_fall_back(values in distinct_values(), offset in 1i32..1000) {
        let list = list_of(&values);
        let n = values.len() as i32;
        for id in [ItemId(0), ItemId(-offset), ItemId(n + offset)] {
            prop_assert_eq!(list.id_to_value(id), u32::default());
            prop_assert_eq!(list.try_id_to_value(id), None);
        }
    }

    /// Populating yields N options in list order with ids 1..=N, and a second
    /// populate does not change the result.
    #[test]
    fn populate_matches_list_order(values in distinct_values()) {
        let list = list_of(&values);
        let mut sink: Vec<(ItemId, String)> = vec![(ItemId(99), "stale".to_string())];

        list.apply_to(&mut sink);
        let first = sink.clone();
        list.apply_to(&mut sink);

        prop_assert_eq!(&sink, &first);
        prop_assert_eq!(sink.len(), values.len());
        for (pos, ((id, label), v)) in sink.iter().zip(&values).enumerate() {
            prop_assert_eq!(*id, ItemId::from_position(pos));
            prop_assert_eq!(label, &format!("Item {v}"));
        }
    }

    /// With a duplicate inserted, forward lookup resolves to the first copy.
    #[test]
    fn duplicates_resolve_to_first(values in distinct_values().prop_filter("non-empty", |v| !v.is_empty()), pick in any::<prop::sample::Index>()) {
        let mut with_dup = values.clone();
        let pos = pick.index(values.len());
        with_dup.push(values[pos]);
        let list = list_of(&with_dup);

        prop_assert_eq!(list.value_to_id(&values[pos]), ItemId::from_position(pos));
        prop_assert_eq!(list.first_duplicate(), Some((pos, values.len())));
    }
}
