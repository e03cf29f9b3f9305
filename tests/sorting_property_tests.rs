//! Property-based testing for counting sort and radix sort
//!
//! Both algorithms must return a sorted permutation of their input, agree
//! with the standard library sort, and leave the caller's data untouched.

use proptest::prelude::*;
use sortlab::algorithms::{
    counting_sort, counting_sort_by_key, counting_sort_in_range, counting_sort_ratings,
    counting_sort_with_range, is_sorted, radix_sort, Algorithm, CountingSort, CountingSortConfig,
    RadixSort, SortAlgorithm, ValueRange, DEFAULT_MAX_TABLE_LEN,
};
use sortlab::containers::ContainerKind;
use sortlab::SortlabError;

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

/// Small non-negative values keep the counting table short
fn small_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..5_000, 0..1_000)
}

/// Values across the whole non-negative range, for radix sort
fn wide_values() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..=i64::MAX, 0..500)
}

fn std_sorted(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
}

// =============================================================================
// COUNTING SORT
// =============================================================================

proptest! {
    #[test]
    fn prop_counting_sort_matches_std(values in small_values()) {
        let sorted = counting_sort(&values).unwrap();
        prop_assert_eq!(sorted, std_sorted(&values));
    }

    #[test]
    fn prop_counting_sort_is_idempotent(values in small_values()) {
        let once = counting_sort(&values).unwrap();
        let twice = counting_sort(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_counting_sort_leaves_input(values in small_values()) {
        let copy = values.clone();
        let _ = counting_sort(&values).unwrap();
        prop_assert_eq!(values, copy);
    }

    #[test]
    fn prop_in_range_keeps_only_range(
        values in prop::collection::vec(-20i64..40, 0..500),
        min in 0i64..10,
        span in 0i64..20
    ) {
        let range = ValueRange::new(min, min + span).unwrap();
        let sorted = counting_sort_in_range(&values, range).unwrap();

        let expected: Vec<i64> =
            std_sorted(&values).into_iter().filter(|&v| range.contains(v)).collect();
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_with_range_in_place(
        values in prop::collection::vec(-5i64..15, 0..500)
    ) {
        let mut data = values.clone();
        counting_sort_with_range(&mut data, ValueRange::RATINGS).unwrap();

        prop_assert!(is_sorted(&data));
        let expected: Vec<i64> =
            std_sorted(&values).into_iter().filter(|v| (1..=10).contains(v)).collect();
        prop_assert_eq!(data, expected);
    }

    #[test]
    fn prop_by_key_is_stable(
        keys in prop::collection::vec(0usize..8, 0..400)
    ) {
        let tagged: Vec<(usize, usize)> = keys.iter().copied().enumerate().map(|(i, k)| (k, i)).collect();
        let sorted = counting_sort_by_key(&tagged, 8, |&(k, _)| k);

        prop_assert_eq!(sorted.len(), tagged.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].0 <= pair[1].0);
            if pair[0].0 == pair[1].0 {
                prop_assert!(pair[0].1 < pair[1].1);
            }
        }
    }
}

// =============================================================================
// RADIX SORT
// =============================================================================

proptest! {
    #[test]
    fn prop_radix_sort_matches_std(values in wide_values()) {
        let sorted = radix_sort(&values).unwrap();
        prop_assert_eq!(sorted, std_sorted(&values));
    }

    #[test]
    fn prop_radix_agrees_with_counting(values in small_values()) {
        prop_assert_eq!(radix_sort(&values).unwrap(), counting_sort(&values).unwrap());
    }

    #[test]
    fn prop_radix_sort_rejects_any_negative(
        mut values in small_values(),
        negative in i64::MIN..0,
        position in any::<prop::sample::Index>()
    ) {
        let at = position.index(values.len() + 1);
        values.insert(at, negative);
        let err = radix_sort(&values).unwrap_err();
        let is_invalid_input = matches!(err, SortlabError::InvalidInput { .. });
        prop_assert!(is_invalid_input);
    }

    #[test]
    fn prop_full_round_trip_through_containers(
        values in prop::collection::vec(1i64..=10, 0..300),
        kind in prop::sample::select(ContainerKind::ALL.to_vec()),
        algorithm in prop::sample::select(SortAlgorithm::ALL.to_vec())
    ) {
        let mut container = kind.create(values.len());
        container.from_sequence(&values);

        let mut sorter = algorithm.build(None, DEFAULT_MAX_TABLE_LEN);
        let sorted = sorter.sort(&container.to_sequence()).unwrap();
        container.from_sequence(&sorted);

        prop_assert!(is_sorted(&sorted));
        prop_assert_eq!(&sorted, &std_sorted(&values));
        prop_assert_eq!(container.size(), values.len());
    }
}

// =============================================================================
// DOCUMENTED EXAMPLES AND EDGE CASES
// =============================================================================

#[test]
fn test_counting_sort_example() {
    assert_eq!(counting_sort(&[4, 2, 2, 8, 3, 3, 1]).unwrap(), vec![1, 2, 2, 3, 3, 4, 8]);
}

#[test]
fn test_radix_sort_example() {
    assert_eq!(
        radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66]).unwrap(),
        vec![2, 24, 45, 66, 75, 90, 170, 802]
    );
}

#[test]
fn test_ratings_drop_out_of_range() {
    assert_eq!(counting_sort_ratings(&[0, 11, 5, 1, 10, 5]).unwrap(), vec![1, 5, 5, 10]);
}

#[test]
fn test_empty_inputs() {
    assert!(counting_sort(&[]).unwrap().is_empty());
    assert!(radix_sort(&[]).unwrap().is_empty());
    assert!(counting_sort_ratings(&[]).unwrap().is_empty());

    let mut empty = Vec::new();
    counting_sort_with_range(&mut empty, ValueRange::RATINGS).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn test_counting_sort_rejects_huge_max() {
    let err = counting_sort(&[1, i64::MAX]).unwrap_err();
    assert_eq!(err.category(), "range");
}

#[test]
fn test_counting_sort_table_limit() {
    let mut sorter = CountingSort::with_config(CountingSortConfig {
        range: None,
        max_table_len: 16,
    });
    assert_eq!(sorter.sort(&[15, 0, 3]).unwrap(), vec![0, 3, 15]);
    assert!(matches!(
        sorter.sort(&[16]).unwrap_err(),
        SortlabError::RangeTooLarge { .. }
    ));
}

#[test]
fn test_front_end_stats_recorded() {
    let data: Vec<i64> = (0..1_000).map(|i| (i * 7919) % 1_000).collect();

    let mut counting = CountingSort::new();
    let mut radix = RadixSort::new();
    assert_eq!(counting.sort(&data).unwrap(), radix.sort(&data).unwrap());

    assert_eq!(counting.stats().items_processed, 1_000);
    assert_eq!(radix.stats().items_processed, 1_000);
    assert_eq!(radix.stats().passes, 3);
    assert!(counting.estimate_memory(1_000) > 0);
}
