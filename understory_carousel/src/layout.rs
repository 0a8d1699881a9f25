// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout resolver: pages per view, per-slide extent, and frame offsets.
//!
//! ## Overview
//!
//! A [`Layout`] is a pure snapshot computed from a [`Measurement`], the
//! configuration, and the slide count. It never mutates the carousel; the
//! [`Carousel`](crate::Carousel) recomputes it on mount, update, and after a
//! resize settles.
//!
//! - Proportional mode divides the container between the visible pages.
//! - Fixed-width mode gives every slide the configured width and clamps the
//!   offset so the frame never shows empty space past the last slide.
//!
//! ```
//! use kurbo::Size;
//! use understory_carousel::{CarouselConfig, Layout, Measurement};
//!
//! let config = CarouselConfig { fixed_width: Some(200.0), ..Default::default() };
//! let m = Measurement::new(Size::new(900.0, 300.0), 1280.0);
//! let layout = Layout::resolve(&config, m, 6);
//! assert_eq!(layout.total_extent(), 1200.0);
//! assert!(layout.navigation_enabled());
//! assert_eq!(layout.resting_offset(5), 300.0);
//! ```

use crate::config::{CarouselConfig, PerPage};
use crate::types::Measurement;

/// Resolve the number of visible pages for a viewport width.
pub fn resolve_per_page(per_page: &PerPage, viewport_width: f64) -> usize {
    match per_page {
        PerPage::Fixed(n) => *n,
        PerPage::Breakpoints(map) => {
            let viewport = sanitize(viewport_width);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Breakpoints are whole pixels; the cast saturates."
            )]
            let key = viewport as u32;
            map.range(..=key).next_back().map(|(_, &n)| n).unwrap_or(1)
        }
    }
}

/// Clamp a measured length to a finite, non-negative value.
pub(crate) fn sanitize(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Snapshot of the carousel geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    /// Measured container width in pixels.
    pub container_width: f64,
    /// Resolved pages per view (at least 1).
    pub per_page: usize,
    /// Number of slides in the frame.
    pub slide_count: usize,
    /// Fixed slide width, when in fixed-width mode.
    pub fixed_width: Option<f64>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            container_width: 0.0,
            per_page: 1,
            slide_count: 0,
            fixed_width: None,
        }
    }
}

impl Layout {
    /// Compute the layout for `slide_count` slides under `measurement`.
    pub fn resolve(config: &CarouselConfig, measurement: Measurement, slide_count: usize) -> Self {
        Self {
            container_width: sanitize(measurement.container.width),
            per_page: resolve_per_page(&config.per_page, measurement.viewport_width).max(1),
            slide_count,
            fixed_width: config.fixed_width,
        }
    }

    /// Width allotted to a single slide.
    pub fn extent(&self) -> f64 {
        match self.fixed_width {
            Some(w) => w,
            None => self.container_width / self.per_page as f64,
        }
    }

    /// Width of the whole frame.
    pub fn total_extent(&self) -> f64 {
        self.extent() * self.slide_count as f64
    }

    /// True when the slides do not all fit in the container.
    pub fn navigation_enabled(&self) -> bool {
        self.total_extent() > self.container_width
    }

    /// Largest offset that keeps the frame's trailing edge inside the container.
    pub fn max_scroll(&self) -> f64 {
        (self.total_extent() - self.container_width).max(0.0)
    }

    /// Largest valid index: `slide_count - per_page`, saturating at zero.
    ///
    /// In fixed-width mode this is further limited to the first index whose
    /// offset reaches [`max_scroll`](Self::max_scroll), so paging past the
    /// point where the frame stops moving is not possible.
    pub fn last_index(&self) -> usize {
        let last = self.slide_count.saturating_sub(self.per_page);
        let extent = self.extent();
        if self.fixed_width.is_none() || extent <= 0.0 {
            return last;
        }
        let steps = self.max_scroll() / extent;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "steps is finite, non-negative, and bounded by slide_count."
        )]
        let whole = steps as usize;
        let ceil = if (whole as f64) < steps { whole + 1 } else { whole };
        last.min(ceil)
    }

    /// Offset of the frame when `index` is at rest.
    pub fn resting_offset(&self, index: usize) -> f64 {
        let offset = index as f64 * self.extent();
        if self.fixed_width.is_some() {
            offset.min(self.max_scroll())
        } else {
            offset
        }
    }

    /// Offset of the frame while dragging with `delta = start - end`.
    ///
    /// Positive deltas (leftward drags) move toward later slides.
    pub fn drag_offset(&self, index: usize, delta: f64) -> f64 {
        self.resting_offset(index) + delta
    }

    /// Share of the frame width given to each slide, in percent.
    pub fn slide_width_percent(&self) -> f64 {
        if self.slide_count == 0 {
            0.0
        } else {
            100.0 / self.slide_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;

    fn measure(container: f64, viewport: f64) -> Measurement {
        Measurement::new(Size::new(container, 100.0), viewport)
    }

    #[test]
    fn proportional_extent_divides_container() {
        let config = CarouselConfig {
            per_page: PerPage::Fixed(2),
            ..Default::default()
        };
        let l = Layout::resolve(&config, measure(600.0, 1024.0), 5);
        assert_eq!(l.extent(), 300.0);
        assert_eq!(l.total_extent(), 1500.0);
        assert_eq!(l.last_index(), 3);
        assert_eq!(l.resting_offset(3), 900.0);
        assert!(l.navigation_enabled());
        assert_eq!(l.slide_width_percent(), 20.0);
    }

    #[test]
    fn breakpoints_pick_largest_not_exceeding_viewport() {
        let map = PerPage::breakpoints([(0, 1), (640, 2), (1024, 4)]);
        assert_eq!(resolve_per_page(&map, 320.0), 1);
        assert_eq!(resolve_per_page(&map, 640.0), 2);
        assert_eq!(resolve_per_page(&map, 1023.9), 2);
        assert_eq!(resolve_per_page(&map, 1024.0), 4);
        assert_eq!(resolve_per_page(&map, 4000.0), 4);
    }

    #[test]
    fn breakpoints_fall_back_to_one_page() {
        let map = PerPage::breakpoints([(768, 3)]);
        assert_eq!(resolve_per_page(&map, 500.0), 1);
        assert_eq!(resolve_per_page(&map, f64::NAN), 1);
    }

    #[test]
    fn fixed_width_enables_navigation_when_frame_overflows() {
        let config = CarouselConfig {
            fixed_width: Some(200.0),
            ..Default::default()
        };
        let l = Layout::resolve(&config, measure(900.0, 900.0), 6);
        assert_eq!(l.total_extent(), 1200.0);
        assert!(l.navigation_enabled());
        assert_eq!(l.max_scroll(), 300.0);
        // Offset 400 would expose empty space; index 2 already reaches 300.
        assert_eq!(l.last_index(), 2);
        assert_eq!(l.resting_offset(2), 300.0);
        assert_eq!(l.resting_offset(5), 300.0);
    }

    #[test]
    fn fixed_width_that_fits_disables_navigation() {
        let config = CarouselConfig {
            fixed_width: Some(100.0),
            ..Default::default()
        };
        let l = Layout::resolve(&config, measure(900.0, 900.0), 6);
        assert!(!l.navigation_enabled());
        assert_eq!(l.last_index(), 0);
        assert_eq!(l.resting_offset(3), 0.0);
    }

    #[test]
    fn empty_and_degenerate_measurements_yield_zero_extent() {
        let config = CarouselConfig::default();
        let empty = Layout::resolve(&config, measure(800.0, 800.0), 0);
        assert_eq!(empty.total_extent(), 0.0);
        assert_eq!(empty.last_index(), 0);
        assert_eq!(empty.slide_width_percent(), 0.0);
        assert!(!empty.navigation_enabled());

        let bad = Layout::resolve(&config, measure(f64::INFINITY, -1.0), 3);
        assert_eq!(bad.container_width, 0.0);
        assert_eq!(bad.extent(), 0.0);
    }

    #[test]
    fn more_pages_than_slides_saturates_last_index() {
        let config = CarouselConfig {
            per_page: PerPage::Fixed(4),
            ..Default::default()
        };
        let l = Layout::resolve(&config, measure(800.0, 800.0), 2);
        assert_eq!(l.last_index(), 0);
    }

    #[test]
    fn drag_offset_adds_delta_to_resting_offset() {
        let l = Layout::resolve(&CarouselConfig::default(), measure(400.0, 400.0), 4);
        assert_eq!(l.drag_offset(1, 30.0), 430.0);
        assert_eq!(l.drag_offset(1, -50.0), 350.0);
    }
}
