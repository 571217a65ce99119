//! Property-based tests for the enumeration combinators.
//!
//! These tests verify the traversal, selection, counting, quantifier and
//! folding laws over arbitrary sequences, ranges and ordered hashes.

use enumerables::prelude::*;
use proptest::prelude::*;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

fn arbitrary_values(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-1000_i32..1000, 0..max_size)
}

fn arbitrary_ordered_hash(max_size: usize) -> impl Strategy<Value = OrderedHash<i32, i32>> {
    prop::collection::vec((0_i32..50, any::<i32>()), 0..max_size)
        .prop_map(|entries| entries.into_iter().collect::<OrderedHash<i32, i32>>())
}

fn arbitrary_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Boolean),
        any::<i64>().prop_map(Value::Integer),
        "[a-z]{0,4}".prop_map(Value::Text),
    ]
}

// =============================================================================
// Traversal Laws
// =============================================================================

proptest! {
    /// Law: my_each returns the source and visits every element once, in order.
    #[test]
    fn prop_each_visits_in_order(values in arbitrary_values(30)) {
        let mut visited = Vec::new();
        let returned = values.my_each(|value| visited.push(*value));
        prop_assert!(std::ptr::eq(returned, &values));
        prop_assert_eq!(visited, values);
    }

    /// Law: my_each_with_index passes consecutive indices starting at zero.
    #[test]
    fn prop_each_with_index_counts_up(values in arbitrary_values(30)) {
        let mut indices = Vec::new();
        values.my_each_with_index(|_, index| indices.push(index));
        prop_assert_eq!(indices, (0..values.len()).collect::<Vec<_>>());
    }

    /// Law: my_each over an ordered hash follows insertion order.
    #[test]
    fn prop_each_on_hash_follows_insertion(hash in arbitrary_ordered_hash(30)) {
        let mut keys = Vec::new();
        hash.my_each(|(key, _)| keys.push(*key));
        prop_assert_eq!(keys, hash.keys().copied().collect::<Vec<_>>());
    }

    /// Law: a range is traversed in ascending order.
    #[test]
    fn prop_range_ascending(start in -100_i32..100, length in 0_i32..50) {
        let range = start..start + length;
        let visited = range.my_map(|value| *value);
        prop_assert_eq!(visited, range.clone().collect::<Vec<_>>());
    }
}

// =============================================================================
// Map and Select Laws
// =============================================================================

proptest! {
    /// Law: my_map keeps length and order.
    /// s.my_map(f)[i] == f(s[i])
    #[test]
    fn prop_map_keeps_length_and_order(values in arbitrary_values(30)) {
        let mapped = values.my_map(|value| i64::from(*value) * 3);
        prop_assert_eq!(mapped.len(), values.len());
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(mapped[index], i64::from(*value) * 3);
        }
    }

    /// Law: my_map over a hash keeps one result per entry.
    #[test]
    fn prop_map_on_hash_keeps_length(hash in arbitrary_ordered_hash(30)) {
        prop_assert_eq!(hash.my_map(|(key, _)| *key).len(), hash.len());
    }

    /// Law: my_select returns exactly the matching elements, in order.
    #[test]
    fn prop_select_matches_filter(values in arbitrary_values(30), divisor in 1_i32..5) {
        let selected = values
            .my_select(Args::block(|value: &i32| value % divisor == 0))
            .unwrap()
            .into_selection()
            .unwrap();
        let expected: Vec<i32> = values.iter().copied().filter(|value| value % divisor == 0).collect();
        prop_assert_eq!(selected, expected);
    }

    /// Law: selecting with an always-true block is the identity.
    #[test]
    fn prop_select_all_is_identity(hash in arbitrary_ordered_hash(30)) {
        let selected = hash
            .my_select(Args::block(|_: &(i32, i32)| true))
            .unwrap()
            .into_selection()
            .unwrap();
        prop_assert_eq!(selected.keys().collect::<Vec<_>>(), hash.keys().collect::<Vec<_>>());
    }

    /// Law: running a deferred handle twice gives the same result.
    #[test]
    fn prop_deferred_handle_is_restartable(values in arbitrary_values(30)) {
        let enumerator = values.my_select(Args::none()).unwrap().into_enumerator().unwrap();
        let first = enumerator.my_select(|value| *value > 0);
        let second = enumerator.my_select(|value| *value > 0);
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Count Laws
// =============================================================================

proptest! {
    /// Law: my_count with no arguments is the length.
    #[test]
    fn prop_count_is_length(values in arbitrary_values(30)) {
        prop_assert_eq!(values.my_count(Args::none()), Ok(values.len()));
    }

    /// Law: my_count(block) == |my_select(block)|
    #[test]
    fn prop_count_agrees_with_select(values in arbitrary_values(30)) {
        let counted = values.my_count(Args::block(|value: &i32| *value < 0)).unwrap();
        let selected = values
            .my_select(Args::block(|value: &i32| *value < 0))
            .unwrap()
            .into_selection()
            .unwrap();
        prop_assert_eq!(counted, selected.len());
    }

    /// Law: my_count(literal) counts the equal elements.
    #[test]
    fn prop_count_literal(values in prop::collection::vec(0_i32..5, 0..30), target in 0_i32..5) {
        let expected = values.iter().filter(|value| **value == target).count();
        prop_assert_eq!(values.my_count(Args::literal(target)), Ok(expected));
    }
}

// =============================================================================
// Quantifier Laws
// =============================================================================

proptest! {
    /// Law: my_none(p) == !my_any(p)
    #[test]
    fn prop_none_is_not_any(values in arbitrary_values(30), threshold: i32) {
        let any = values.my_any(Args::block(|value: &i32| *value > threshold)).unwrap();
        let none = values.my_none(Args::block(|value: &i32| *value > threshold)).unwrap();
        prop_assert_eq!(none, !any);
    }

    /// Law: my_all(p) == !my_any(!p)
    #[test]
    fn prop_all_is_not_any_negated(values in arbitrary_values(30), threshold: i32) {
        let all = values.my_all(Args::block(|value: &i32| *value > threshold)).unwrap();
        let any_negated = values.my_any(Args::block(|value: &i32| *value <= threshold)).unwrap();
        prop_assert_eq!(all, !any_negated);
    }

    /// Law: without arguments, quantifiers test truthiness.
    #[test]
    fn prop_truthiness_fallback(values in prop::collection::vec(arbitrary_value(), 0..20)) {
        let truthy = values.iter().filter(|value| value.is_truthy()).count();
        prop_assert_eq!(values.my_any(Args::none()), Ok(truthy > 0));
        prop_assert_eq!(values.my_all(Args::none()), Ok(truthy == values.len()));
        prop_assert_eq!(values.my_none(Args::none()), Ok(truthy == 0));
    }

    /// Law: my_any stops at the first satisfying element.
    #[test]
    fn prop_any_short_circuits(values in arbitrary_values(30)) {
        let mut calls = 0;
        let found = values
            .my_any(Args::block(|value: &i32| {
                calls += 1;
                *value >= 0
            }))
            .unwrap();
        let expected_calls = values
            .iter()
            .position(|value| *value >= 0)
            .map_or(values.len(), |index| index + 1);
        prop_assert_eq!(found, values.iter().any(|value| *value >= 0));
        prop_assert_eq!(calls, expected_calls);
    }
}

// =============================================================================
// Inject Laws
// =============================================================================

proptest! {
    /// Law: the block and symbol forms of inject agree.
    #[test]
    fn prop_inject_forms_agree(values in prop::collection::vec(-1000_i64..1000, 1..30)) {
        let block = values.my_inject(|sum, value| sum + value);
        let symbol = values.my_inject_with(Operator::Add);
        prop_assert_eq!(block, symbol.clone());
        prop_assert_eq!(symbol, Ok(values.iter().sum::<i64>()));
    }

    /// Law: a seeded inject folds from the seed.
    #[test]
    fn prop_inject_from_is_fold(values in arbitrary_values(30), seed in -1000_i64..1000) {
        let injected = values.my_inject_from(seed, |sum, value| sum + i64::from(*value));
        let expected = values.iter().fold(seed, |sum, value| sum + i64::from(*value));
        prop_assert_eq!(injected, expected);
    }

    /// Law: min and max agree with the iterator adapters.
    #[test]
    fn prop_inject_min_max(values in prop::collection::vec(any::<i32>(), 1..30)) {
        prop_assert_eq!(values.my_inject_with(Operator::Min).ok(), values.iter().copied().min());
        prop_assert_eq!(values.my_inject_with(Operator::Max).ok(), values.iter().copied().max());
    }

    /// Law: every operator parses back from its symbol, with or without a colon.
    #[test]
    fn prop_operator_symbol_roundtrip(operator in prop::sample::select(Operator::ALL.to_vec())) {
        let symbol = operator.to_string();
        prop_assert_eq!(symbol.parse::<Operator>(), Ok(operator));
        prop_assert_eq!(format!(":{symbol}").parse::<Operator>(), Ok(operator));
    }
}
