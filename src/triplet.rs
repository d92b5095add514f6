//! Zero-sum triplets
//!
//! Find every distinct multiset `{a, b, c}` drawn from the input (respecting
//! multiplicity) with `a + b + c == 0`.
//!
//! Approach
//! --------
//! 1) Sort ascending.
//! 2) Fix an anchor `i` (the smallest element of the triplet):
//!    - stop at the first positive anchor, nothing after it can reach 0;
//!    - skip an anchor equal to its predecessor (duplicate anchors);
//!    - stop if the three smallest remaining values already exceed 0;
//!    - skip if the anchor plus the two largest values is still below 0.
//! 3) Converge `left = i + 1` and `right = n - 1`. On a hit, emit, then move
//!    both pointers past their runs of equal values so the second and third
//!    slots never repeat.
//!
//! Output is ascending by anchor, then by the middle value, so each triplet
//! is sorted and the list is in lexicographic order. O(n log n + n^2) time,
//! O(1) auxiliary space beyond the sort buffer and output.
//!
//! Ownership: [`zero_sum_triplets`] sorts a private copy and leaves the
//! caller's slice alone; [`zero_sum_triplets_in_place`] sorts the caller's
//! buffer and says so in its signature.

use std::cmp::Ordering;

use crate::probe::Probe;

/// A zero-sum value triplet, sorted ascending.
pub type Triplet = [i32; 3];

/// All unique zero-sum triplets. The input is not modified.
#[inline]
pub fn zero_sum_triplets(sequence: &[i32]) -> Vec<Triplet> {
    zero_sum_triplets_probed(sequence, &mut ())
}

/// [`zero_sum_triplets`] reporting one step per inner pointer comparison
/// (at most `n^2`).
pub fn zero_sum_triplets_probed<P: Probe>(sequence: &[i32], probe: &mut P) -> Vec<Triplet> {
    let mut sorted = sequence.to_vec();
    zero_sum_triplets_in_place_probed(&mut sorted, probe)
}

/// All unique zero-sum triplets, sorting `buffer` ascending as a side effect.
///
/// Use this to avoid the copy when the caller no longer needs the original
/// order.
#[inline]
pub fn zero_sum_triplets_in_place(buffer: &mut [i32]) -> Vec<Triplet> {
    zero_sum_triplets_in_place_probed(buffer, &mut ())
}

fn zero_sum_triplets_in_place_probed<P: Probe>(buffer: &mut [i32], probe: &mut P) -> Vec<Triplet> {
    buffer.sort_unstable();
    let sorted: &[i32] = buffer;

    let mut triplets = Vec::new();
    scan_sorted(
        sorted.len(),
        |k| i64::from(sorted[k]),
        probe,
        |i, left, right| triplets.push([sorted[i], sorted[left], sorted[right]]),
    );

    log::debug!("zero_sum_triplets: {} triplets from {} values", triplets.len(), sorted.len());
    triplets
}

/// Original positions of one element per slot for every unique zero-sum
/// triplet.
///
/// Runs the same search over a stable argsort, so `result[t]` holds indices
/// into `sequence` whose values, in order, are ascending and sum to 0. Among
/// equal values the lower original index is preferred for the earlier slot.
pub fn zero_sum_triplet_indices(sequence: &[i32]) -> Vec<[usize; 3]> {
    let mut order: Vec<usize> = (0..sequence.len()).collect();
    order.sort_by_key(|&k| sequence[k]);

    let mut triplets = Vec::new();
    scan_sorted(
        order.len(),
        |k| i64::from(sequence[order[k]]),
        &mut (),
        |i, left, right| triplets.push([order[i], order[left], order[right]]),
    );
    triplets
}

/// Anchor loop plus inner two-pointer scan over `len` ascending values read
/// through `value`. `emit` receives sorted positions of each hit.
fn scan_sorted<V, P, E>(len: usize, value: V, probe: &mut P, mut emit: E)
where
    V: Fn(usize) -> i64,
    P: Probe,
    E: FnMut(usize, usize, usize),
{
    if len < 3 {
        return;
    }

    for i in 0..len - 2 {
        let anchor = value(i);
        if anchor > 0 {
            break;
        }
        if i > 0 && anchor == value(i - 1) {
            continue;
        }
        if anchor + value(i + 1) + value(i + 2) > 0 {
            break;
        }
        if anchor + value(len - 2) + value(len - 1) < 0 {
            continue;
        }

        let mut left = i + 1;
        let mut right = len - 1;
        while left < right {
            probe.step();
            match (anchor + value(left) + value(right)).cmp(&0) {
                Ordering::Less => left += 1,
                Ordering::Greater => right -= 1,
                Ordering::Equal => {
                    emit(i, left, right);
                    while left < right && value(left) == value(left + 1) {
                        left += 1;
                    }
                    while left < right && value(right) == value(right - 1) {
                        right -= 1;
                    }
                    left += 1;
                    right -= 1;
                }
            }
        }
    }
}

/// Cubic baseline: every index triple, deduplicated, in lexicographic order.
pub fn zero_sum_triplets_brute_force(sequence: &[i32]) -> Vec<Triplet> {
    let mut found = std::collections::BTreeSet::new();
    let n = sequence.len();
    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let (a, b, c) = (sequence[i], sequence[j], sequence[k]);
                if i64::from(a) + i64::from(b) + i64::from(c) == 0 {
                    let mut triplet = [a, b, c];
                    triplet.sort_unstable();
                    found.insert(triplet);
                }
            }
        }
    }
    found.into_iter().collect()
}
