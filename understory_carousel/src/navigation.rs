// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index arithmetic for paging.
//!
//! These functions only compute the next index; the
//! [`Carousel`](crate::Carousel) applies it, republishes the offset, and
//! notifies its listener.

/// One navigation request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Move back one page.
    Prev,
    /// Move forward one page.
    Next,
    /// Jump to an index; out-of-range values are clamped.
    GoTo(isize),
}

impl Step {
    /// Resolve the index reached from `current` with `last` as the largest
    /// valid index.
    pub fn apply(self, current: usize, last: usize, slide_count: usize, looping: bool) -> usize {
        match self {
            Self::Prev => prev_index(current, last, looping),
            Self::Next => next_index(current, last, looping),
            Self::GoTo(requested) => go_to_index(requested, slide_count, last),
        }
    }
}

/// Index after a `prev()` step.
///
/// Wraps from 0 to `last` when looping, otherwise stays at 0.
pub fn prev_index(current: usize, last: usize, looping: bool) -> usize {
    if current == 0 && looping {
        last
    } else {
        current.saturating_sub(1).min(last)
    }
}

/// Index after a `next()` step.
///
/// Wraps from `last` to 0 when looping, otherwise stays at `last`.
pub fn next_index(current: usize, last: usize, looping: bool) -> usize {
    if current == last && looping {
        0
    } else {
        current.saturating_add(1).min(last)
    }
}

/// Index after `go_to(requested)`.
///
/// The request is clamped to `[0, slide_count - 1]`, and the result is held
/// at or below `last` so the visible pages stay filled.
pub fn go_to_index(requested: isize, slide_count: usize, last: usize) -> usize {
    let upper = slide_count.saturating_sub(1);
    let clamped = usize::try_from(requested).unwrap_or(0).min(upper);
    clamped.min(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prev_floors_at_zero_without_loop() {
        assert_eq!(prev_index(0, 4, false), 0);
        assert_eq!(prev_index(3, 4, false), 2);
    }

    #[test]
    fn prev_wraps_to_last_with_loop() {
        assert_eq!(prev_index(0, 4, true), 4);
        assert_eq!(prev_index(2, 4, true), 1);
    }

    #[test]
    fn next_caps_at_last_without_loop() {
        assert_eq!(next_index(3, 4, false), 4);
        assert_eq!(next_index(4, 4, false), 4);
    }

    #[test]
    fn next_wraps_to_zero_with_loop() {
        assert_eq!(next_index(4, 4, true), 0);
        assert_eq!(next_index(1, 4, true), 2);
    }

    #[test]
    fn go_to_clamps_both_bounds() {
        assert_eq!(go_to_index(-7, 5, 4), 0);
        assert_eq!(go_to_index(2, 5, 4), 2);
        assert_eq!(go_to_index(99, 5, 4), 4);
        // Three pages per view: the last two slides cannot lead the view.
        assert_eq!(go_to_index(4, 5, 2), 2);
    }

    #[test]
    fn degenerate_counts_stay_at_zero() {
        assert_eq!(go_to_index(3, 0, 0), 0);
        assert_eq!(next_index(0, 0, false), 0);
        assert_eq!(next_index(0, 0, true), 0);
        assert_eq!(prev_index(0, 0, true), 0);
    }

    #[test]
    fn invariant_holds_over_mixed_sequences() {
        let (count, last) = (7, 4);
        for looping in [false, true] {
            let mut i = 0;
            let steps = [
                Step::Next,
                Step::Next,
                Step::GoTo(40),
                Step::Next,
                Step::Prev,
                Step::GoTo(-2),
                Step::Prev,
                Step::Next,
                Step::GoTo(6),
            ];
            for s in steps {
                i = s.apply(i, last, count, looping);
                assert!(i <= last, "index {i} exceeded {last} after {s:?}");
            }
        }
    }
}
