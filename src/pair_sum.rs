//! Pair-sum searches
//!
//! Two ways to find indices `(i, j)` with `sequence[i] + sequence[j] == target`:
//! - unsorted input: one left-to-right pass with a value -> index lookup table;
//! - sorted input: converging pointers from both ends.
//!
//! Values are `i32`; the target and every sum are `i64`, so no pair can
//! overflow.

use ahash::AHashMap;

use crate::IndexPair;
use crate::error::{Result, check_ascending};
use crate::probe::Probe;

//
// Unsorted input: single pass with a lookup table
//

/// Find the first pair summing to `target` in an unsorted sequence.
///
/// Returns `Some((i, j))` with `i < j`, where `j` is the smallest index that
/// completes a pair and `i` is the earliest occurrence of its complement.
/// Returns `None` for inputs shorter than two elements or when no pair exists.
///
/// O(n) time, O(n) auxiliary space.
#[inline]
pub fn pair_sum_unsorted(sequence: &[i32], target: i64) -> Option<IndexPair> {
    pair_sum_unsorted_probed(sequence, target, &mut ())
}

/// [`pair_sum_unsorted`] reporting one step per element visited.
pub fn pair_sum_unsorted_probed<P: Probe>(
    sequence: &[i32],
    target: i64,
    probe: &mut P,
) -> Option<IndexPair> {
    if sequence.len() < 2 {
        return None;
    }

    let mut seen: AHashMap<i64, usize> = AHashMap::with_capacity(sequence.len());
    for (j, &value) in sequence.iter().enumerate() {
        probe.step();
        let value = i64::from(value);
        let complement = target - value;

        // Lookup must precede the insert, otherwise `target == 2 * value`
        // would match an element against itself or be shadowed.
        if let Some(&i) = seen.get(&complement) {
            log::trace!("pair_sum_unsorted: target {target} at ({i}, {j})");
            return Some((i, j));
        }
        seen.entry(value).or_insert(j);
    }

    None
}

/// Every pair `(i, j)`, `i < j`, whose values sum to `target`.
///
/// Pairs are ordered by `j`, then by `i`. A value repeated `k` times before
/// position `j` contributes `k` pairs ending at `j`.
///
/// O(n + p) time for `p` reported pairs, O(n) auxiliary space.
pub fn pair_sum_all_pairs(sequence: &[i32], target: i64) -> Vec<IndexPair> {
    let mut pairs = Vec::new();
    if sequence.len() < 2 {
        return pairs;
    }

    let mut seen: AHashMap<i64, Vec<usize>> = AHashMap::with_capacity(sequence.len());
    for (j, &value) in sequence.iter().enumerate() {
        let value = i64::from(value);
        if let Some(earlier) = seen.get(&(target - value)) {
            pairs.extend(earlier.iter().map(|&i| (i, j)));
        }
        seen.entry(value).or_default().push(j);
    }

    log::debug!("pair_sum_all_pairs: {} pairs for target {target}", pairs.len());
    pairs
}

/// Quadratic baseline: first pair in `(i, j)` lexicographic order.
pub fn pair_sum_brute_force(sequence: &[i32], target: i64) -> Option<IndexPair> {
    for i in 0..sequence.len() {
        for j in i + 1..sequence.len() {
            if i64::from(sequence[i]) + i64::from(sequence[j]) == target {
                return Some((i, j));
            }
        }
    }
    None
}

//
// Sorted input: converging pointers
//

/// Find a pair summing to `target` in a sequence sorted ascending.
///
/// Precondition: `sorted` is ascending. This is the caller's responsibility
/// and is only asserted in debug builds; on unsorted input the result is
/// unspecified (but never out of bounds). Use [`pair_sum_sorted_checked`] to
/// have it verified.
///
/// Pointers start at both ends. A sum below the target advances `left`, above
/// the target retreats `right`, equal returns `(left, right)` immediately.
///
/// O(n) time, O(1) auxiliary space.
#[inline]
pub fn pair_sum_sorted(sorted: &[i32], target: i64) -> Option<IndexPair> {
    pair_sum_sorted_probed(sorted, target, &mut ())
}

/// [`pair_sum_sorted`] reporting one step per pointer comparison.
pub fn pair_sum_sorted_probed<P: Probe>(
    sorted: &[i32],
    target: i64,
    probe: &mut P,
) -> Option<IndexPair> {
    debug_assert!(sorted.is_sorted(), "pair_sum_sorted requires ascending input");

    if sorted.len() < 2 {
        return None;
    }

    let mut left = 0;
    let mut right = sorted.len() - 1;
    while left < right {
        probe.step();
        let sum = i64::from(sorted[left]) + i64::from(sorted[right]);
        if sum < target {
            left += 1;
        } else if sum > target {
            right -= 1;
        } else {
            log::trace!("pair_sum_sorted: target {target} at ({left}, {right})");
            return Some((left, right));
        }
    }

    None
}

/// [`pair_sum_sorted`] after verifying the ascending precondition.
///
/// Unsorted input is reported as [`ScanError::Unsorted`](crate::ScanError)
/// and left untouched.
pub fn pair_sum_sorted_checked(sorted: &[i32], target: i64) -> Result<Option<IndexPair>> {
    if let Err(err) = check_ascending(sorted) {
        log::warn!("pair_sum_sorted_checked: {err}");
        return Err(err);
    }
    Ok(pair_sum_sorted(sorted, target))
}
