//! Container with most water
//!
//! Given bar heights, find `max over i < j of (j - i) * min(h[i], h[j])`.
//!
//! Approach: pointers start at both ends. After measuring the current pair,
//! the pointer at the shorter bar moves inward. Moving the taller one instead
//! can never help: the width shrinks and the bounding height stays capped by
//! the shorter bar, so the taller bar's position is discarded safely. On equal
//! heights `right` retreats.
//!
//! The tie direction never changes the result. After a tie at height `h`, no
//! pair touching either tied bar can beat the area just recorded, and both
//! directions next measure the same inner pair: the first bar taller than `h`
//! from each side. So `max_container` on reversed input reports the mirrored
//! span.
//!
//! Areas are `i64` (`usize` width times an `i32` height). Negative heights
//! produce non-positive areas and therefore never beat the initial 0.

use crate::IndexPair;
use crate::probe::Probe;

/// Best area and the pair of bars achieving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Container {
    pub area: i64,
    /// `None` for inputs shorter than two bars. Otherwise the first pair found
    /// during the sweep whose area strictly improved, or the full span
    /// `(0, n - 1)` when no pair beats an area of 0.
    pub span: Option<IndexPair>,
}

impl Container {
    const EMPTY: Container = Container {
        area: 0,
        span: None,
    };
}

#[inline(always)]
fn area(heights: &[i32], left: usize, right: usize) -> i64 {
    let width = (right - left) as i64;
    width * i64::from(heights[left].min(heights[right]))
}

/// Maximum area over all bar pairs; 0 for fewer than two bars.
///
/// O(n) time, O(1) auxiliary space.
#[inline]
pub fn max_container_area(heights: &[i32]) -> i64 {
    max_container_probed(heights, &mut ()).area
}

/// Maximum area together with the bars achieving it.
#[inline]
pub fn max_container(heights: &[i32]) -> Container {
    max_container_probed(heights, &mut ())
}

/// [`max_container`] reporting one step per area evaluated (exactly `n - 1`
/// for `n >= 2`).
pub fn max_container_probed<P: Probe>(heights: &[i32], probe: &mut P) -> Container {
    if heights.len() < 2 {
        return Container::EMPTY;
    }

    let mut left = 0;
    let mut right = heights.len() - 1;
    let mut best = Container {
        area: 0,
        span: Some((left, right)),
    };

    while left < right {
        probe.step();
        let current = area(heights, left, right);
        if current > best.area {
            best.area = current;
            best.span = Some((left, right));
        }

        if heights[left] < heights[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }

    log::trace!("max_container: area {} at {:?}", best.area, best.span);
    best
}

/// Quadratic baseline over every pair.
pub fn max_container_area_brute_force(heights: &[i32]) -> i64 {
    let mut best = 0;
    for left in 0..heights.len() {
        for right in left + 1..heights.len() {
            best = best.max(area(heights, left, right));
        }
    }
    best
}
