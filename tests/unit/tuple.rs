//! Example-based tests for the core tuple: the comparison case table,
//! sorting, extrema, round trips, and rendering.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use polyad::{Tuple, TupleError};

use super::common::{keyed, shuffled_tuple};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// CONSTRUCTION & BOUNDS
// ============================================================================

#[test]
fn construction_succeeds_when_counts_agree() {
    for n in 0..24 {
        let items: Vec<usize> = (0..n).collect();
        let tuple = Tuple::new(n, items).unwrap();
        assert_eq!(tuple.len(), n);
        assert_eq!(tuple.is_empty(), n == 0);
    }
}

#[test]
fn construction_fails_when_counts_disagree() {
    let err = Tuple::new(4, vec![1, 2]).unwrap_err();
    assert_eq!(
        err,
        TupleError::ArityMismatch {
            expected: 4,
            actual: 2
        }
    );

    let err = Tuple::new(0, vec![1]).unwrap_err();
    assert_eq!(
        err,
        TupleError::ArityMismatch {
            expected: 0,
            actual: 1
        }
    );
}

#[test]
fn fetch_succeeds_exactly_inside_bounds() {
    let tuple = shuffled_tuple(6);
    for idx in 0..6 {
        assert!(tuple.fetch(idx).is_ok(), "index {} should be valid", idx);
    }
    for idx in [6, 7, 100] {
        assert!(tuple.fetch(idx).is_err(), "index {} should be rejected", idx);
    }
}

// ============================================================================
// LEXICOGRAPHIC COMPARISON
// ============================================================================

#[test]
fn empty_tuples_are_equal() {
    let a: Tuple<i32> = Tuple::from_items(vec![]);
    let b: Tuple<i32> = Tuple::from_items(vec![]);
    assert_eq!(a.cmp(&b), Ordering::Equal);
}

#[test]
fn empty_tuple_is_the_unique_minimum() {
    let empty: Tuple<i32> = Tuple::from_items(vec![]);
    let one = Tuple::from_items(vec![1]);
    assert_eq!(empty.cmp(&one), Ordering::Less);
    assert!(empty < one);
}

#[test]
fn first_differing_element_decides() {
    let a = Tuple::from_items(vec![1, 2]);
    let b = Tuple::from_items(vec![1, 3]);
    assert_eq!(a.cmp(&b), Ordering::Less);
}

#[test]
fn shorter_wins_when_prefix_equal() {
    let a = Tuple::from_items(vec![1, 2]);
    let b = Tuple::from_items(vec![1, 2, 0]);
    assert_eq!(a.cmp(&b), Ordering::Less);
}

#[test]
fn length_is_irrelevant_once_elements_differ() {
    let a = Tuple::from_items(vec![2]);
    let b = Tuple::from_items(vec![1, 9]);
    assert_eq!(a.cmp(&b), Ordering::Greater);
}

// ============================================================================
// SORTING
// ============================================================================

#[test]
fn sort_natural_orders_ascending() {
    let mut tuple = Tuple::from_items(vec![3, 1, 2]);
    tuple.sort_natural();
    assert_eq!(tuple.to_vec(), vec![1, 2, 3]);
}

#[test]
fn sort_reverse_natural_orders_descending() {
    let mut tuple = Tuple::from_items(vec![1, 2, 3]);
    tuple.sort_reverse_natural();
    assert_eq!(tuple.to_vec(), vec![3, 2, 1]);
}

#[test]
fn sorting_twice_changes_nothing() {
    let mut once = shuffled_tuple(9);
    once.sort_natural();
    let mut twice = once.clone();
    twice.sort_natural();
    assert_eq!(once, twice);
}

#[test]
fn sort_preserves_relative_order_of_equal_elements() {
    let mut tuple = Tuple::from_items(keyed(&[(3, 0), (1, 1), (3, 2), (1, 3), (2, 4)]));
    tuple.sort_natural();
    let ids: Vec<u8> = tuple.iter().map(|k| k.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 0, 2]);
}

// ============================================================================
// EXTREMA
// ============================================================================

#[test]
fn extrema_on_mixed_values() {
    let tuple = Tuple::from_items(vec![5, 3, 5, 1]);
    assert_eq!(tuple.smallest(), Ok(&1));
    assert_eq!(tuple.largest(), Ok(&5));
}

#[test]
fn extrema_on_empty_tuple_report_the_nullad() {
    let tuple: Tuple<i32> = Tuple::from_items(vec![]);
    assert_eq!(tuple.smallest(), Err(TupleError::EmptyTuple));
    assert_eq!(tuple.largest(), Err(TupleError::EmptyTuple));
}

// ============================================================================
// ROUND TRIP & RENDERING
// ============================================================================

#[test]
fn to_vec_matches_fetch_order() {
    let tuple = shuffled_tuple(7);
    let list = tuple.to_vec();
    assert_eq!(list.len(), tuple.len());
    for (idx, item) in list.iter().enumerate() {
        assert_eq!(tuple.fetch(idx), Ok(item));
    }
}

#[test]
fn mutating_the_extracted_list_leaves_the_tuple_alone() {
    let tuple = Tuple::from_items(vec![4, 5, 6]);
    let mut list = tuple.to_vec();
    list.clear();
    assert_eq!(tuple.len(), 3);
    assert_eq!(tuple.fetch(1), Ok(&5));
}

#[test]
fn rendering_forms() {
    let empty: Tuple<i32> = Tuple::from_items(vec![]);
    assert_eq!(empty.to_string(), "⟨⟩");
    assert_eq!(Tuple::from_items(vec![5, 3]).to_string(), "⟨5, 3⟩");
    assert_eq!(Tuple::from_items(vec![7]).to_string(), "⟨7⟩");
}

#[test]
fn rendering_tracks_position_order() {
    let mut tuple = Tuple::from_items(vec![2, 3, 1]);
    tuple.sort_reverse_natural();
    assert_eq!(tuple.to_string(), "⟨3, 2, 1⟩");
}

// ============================================================================
// EQUALITY & HASH
// ============================================================================

#[test]
fn equal_sequences_compare_equal_and_hash_identically() {
    let a = Tuple::from_items(vec![1, 2, 3]);
    let b = Tuple::new(3, vec![1, 2, 3]).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn equality_is_positional() {
    let a = Tuple::from_items(vec![1, 2, 3]);
    let b = Tuple::from_items(vec![3, 2, 1]);
    assert_ne!(a, b);
}
