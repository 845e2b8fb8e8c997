#![cfg(test)]

use std::cmp::Ordering;

use rand::prelude::*;
use rand::rngs::StdRng;

use super::*;
use crate::util::error::Incomparable;

fn random_vec(rng: &mut StdRng, len: usize, max: i32) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..=max)).collect()
}

#[test]
fn test_small_inputs() {
    let mut empty: [i32; 0] = [];
    quick_sort(&mut empty);
    assert_eq!(empty, []);

    let mut single = [1];
    quick_sort(&mut single);
    assert_eq!(single, [1]);

    let mut pair = [2, 1];
    quick_sort(&mut pair);
    assert_eq!(pair, [1, 2]);
}

#[test]
fn test_known_input() {
    let mut v = [22, 5, 12, 3, 7, 4, 34, 5];
    quick_sort(&mut v);
    assert_eq!(v, [3, 4, 5, 5, 7, 12, 22, 34]);
}

#[test]
fn test_matches_std_sort() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for len in [2, 3, 7, 8, 31, 64, 100, 257, 1000] {
        // A small range forces plenty of duplicates, a large one mostly distinct values.
        for max in [3, 1_000_000] {
            let mut v = random_vec(&mut rng, len, max);
            let mut expected = v.clone();
            expected.sort();

            quick_sort(&mut v);
            assert_eq!(
                v, expected,
                "Quicksort should agree with std for len {len} and max {max}."
            );
        }
    }
}

#[test]
fn test_patterns() {
    let ascending: Vec<i32> = (0..100).collect();
    let descending: Vec<i32> = (0..100).rev().collect();
    let equal = vec![66; 100];
    let organ_pipe: Vec<i32> = (0..50).chain((0..50).rev()).collect();

    for pattern in [ascending, descending, equal, organ_pipe] {
        let mut v = pattern.clone();
        let mut expected = pattern;
        expected.sort();
        quick_sort(&mut v);
        assert_eq!(v, expected);
    }
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut v = random_vec(&mut rng, 200, 50);

    quick_sort(&mut v);
    let once = v.clone();
    quick_sort(&mut v);
    assert_eq!(v, once, "Sorting a sorted slice shouldn't change it.");
}

#[test]
fn test_comparator_equivalence() {
    let mut rng = StdRng::seed_from_u64(11);
    let input = random_vec(&mut rng, 300, 100);

    let mut natural = input.clone();
    quick_sort(&mut natural);

    let mut explicit = input.clone();
    quick_sort_by(&mut explicit, |a, b| {
        if a > b {
            Ordering::Greater
        } else if a < b {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    });
    assert_eq!(
        natural, explicit,
        "A comparator equal to the natural ordering should give the same result."
    );

    let mut reversed = input;
    quick_sort_by(&mut reversed, |a, b| b.cmp(a));
    natural.reverse();
    assert_eq!(reversed, natural);
}

#[test]
fn test_unstable() {
    let mut v = [(1, 'a'), (1, 'b')];
    quick_sort_by(&mut v, |a, b| a.0.cmp(&b.0));
    assert_eq!(
        v,
        [(1, 'b'), (1, 'a')],
        "Hoare partitioning swaps equal elements, so the sort isn't stable."
    );
}

#[test]
fn test_range() {
    let mut v = [9, 8, 7, 3, 2, 1, 0];
    let result: Result<(), Incomparable> =
        quick_sort_range(&mut v, 1, 5, &mut |a: &i32, b: &i32| Ok(a.cmp(b)));
    assert!(result.is_ok());
    assert_eq!(v, [9, 1, 2, 3, 7, 8, 0], "Only the inclusive range should be sorted.");

    let mut v = [3, 2, 1];
    let result: Result<(), Incomparable> =
        quick_sort_range(&mut v, 2, 0, &mut |a: &i32, b: &i32| Ok(a.cmp(b)));
    assert!(result.is_ok());
    assert_eq!(v, [3, 2, 1], "An inverted range should be a no-op.");
}

#[test]
fn test_partial_order() {
    let mut v = [2.5, -1.0, 0.0, 10.0];
    assert_eq!(try_quick_sort(&mut v), Ok(()));
    assert_eq!(v, [-1.0, 0.0, 2.5, 10.0]);

    let mut v = [2.5, f64::NAN, 0.0, 10.0];
    assert_eq!(
        try_quick_sort(&mut v),
        Err(Incomparable),
        "NaN has no ordering, so sorting should fail."
    );
    assert_eq!(
        v.iter().filter(|f| f.is_nan()).count(),
        1,
        "A failed sort should still hold every element."
    );
}

#[test]
fn test_fallible_comparator_stops() {
    let mut calls = 0;
    let mut v = [5, 4, 3, 2, 1];
    let result = try_quick_sort_by(&mut v, |a: &i32, b: &i32| {
        calls += 1;
        if calls > 3 { Err("stop") } else { Ok(a.cmp(b)) }
    });

    assert_eq!(result, Err("stop"));
    assert_eq!(calls, 4, "No comparisons should happen after the first error.");
}

#[test]
fn test_inconsistent_comparator_terminates() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut v = random_vec(&mut rng, 100, 10);
    let mut expected = v.clone();

    quick_sort_by(&mut v, |_, _| {
        if rng.gen_bool(0.5) { Ordering::Less } else { Ordering::Greater }
    });

    v.sort();
    expected.sort();
    assert_eq!(v, expected, "A bad comparator may scramble the order, but not lose elements.");
}
