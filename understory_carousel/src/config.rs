// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration: paging, transitions, dragging, and timers.
//!
//! Configuration is plain data. Start from [`CarouselConfig::default`] and
//! override fields with struct-update syntax:
//!
//! ```
//! use core::time::Duration;
//! use understory_carousel::{CarouselConfig, PerPage};
//!
//! let config = CarouselConfig {
//!     per_page: PerPage::Fixed(3),
//!     looping: true,
//!     auto_advance: None,
//!     ..Default::default()
//! };
//! assert_eq!(config.threshold, 20.0);
//! assert_eq!(config.resize_debounce, Duration::from_millis(250));
//! assert!(config.validate().is_ok());
//! ```

use alloc::collections::BTreeMap;
use core::fmt;
use core::time::Duration;

use crate::error::CarouselError;

/// How many pages are visible at once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PerPage {
    /// A constant number of pages.
    Fixed(usize),
    /// Viewport width breakpoint → page count.
    ///
    /// The entry with the largest breakpoint not exceeding the viewport width
    /// wins. When the viewport is narrower than every breakpoint, one page is
    /// shown.
    Breakpoints(BTreeMap<u32, usize>),
}

impl Default for PerPage {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

impl PerPage {
    /// Build a breakpoint mapping from `(min_viewport_width, pages)` pairs.
    pub fn breakpoints(entries: impl IntoIterator<Item = (u32, usize)>) -> Self {
        Self::Breakpoints(entries.into_iter().collect())
    }
}

/// Easing token handed to the host's transition primitive.
///
/// The carousel never interpolates; the `Display` output is the CSS-style
/// timing function name.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Easing {
    /// `linear`
    Linear,
    /// `ease`
    Ease,
    /// `ease-in`
    EaseIn,
    /// `ease-out`
    #[default]
    EaseOut,
    /// `ease-in-out`
    EaseInOut,
    /// `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f64, f64, f64, f64),
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("linear"),
            Self::Ease => f.write_str("ease"),
            Self::EaseIn => f.write_str("ease-in"),
            Self::EaseOut => f.write_str("ease-out"),
            Self::EaseInOut => f.write_str("ease-in-out"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// A transition applied to every frame property change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    /// Transition duration. Zero during a drag for immediate feedback.
    pub duration: Duration,
    /// Easing token.
    pub easing: Easing,
}

impl Transition {
    /// The same easing with a zero duration.
    pub const fn immediate(self) -> Self {
        Self {
            duration: Duration::ZERO,
            easing: self.easing,
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(200),
            easing: Easing::EaseOut,
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all {}ms {}", self.duration.as_millis(), self.easing)
    }
}

/// Carousel configuration.
///
/// Immutable for the lifetime of a mount; replace it with
/// [`Carousel::update`](crate::Carousel::update).
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Quiet period a resize burst must settle for before layout is recomputed.
    pub resize_debounce: Duration,
    /// Transition used for every non-drag frame update.
    pub transition: Transition,
    /// Pages visible at once.
    pub per_page: PerPage,
    /// Index shown after mount.
    pub start_index: usize,
    /// Whether touch and mouse drags page the carousel.
    pub draggable: bool,
    /// Drag distance in pixels that must be exceeded to commit a page change.
    pub threshold: f64,
    /// Wrap from the last page to the first and back.
    pub looping: bool,
    /// Auto-advance period; `None` disables auto-advance.
    pub auto_advance: Option<Duration>,
    /// Fixed-width mode: every slide is this many pixels wide regardless of
    /// container width. `None` divides the container between visible pages.
    pub fixed_width: Option<f64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            resize_debounce: Duration::from_millis(250),
            transition: Transition::default(),
            per_page: PerPage::default(),
            start_index: 0,
            draggable: true,
            threshold: 20.0,
            looping: false,
            auto_advance: Some(Duration::from_secs(10)),
            fixed_width: None,
        }
    }
}

impl CarouselConfig {
    /// Check that the configuration can produce a meaningful layout.
    pub fn validate(&self) -> Result<(), CarouselError> {
        match &self.per_page {
            PerPage::Fixed(0) => return Err(CarouselError::ZeroPerPage),
            PerPage::Breakpoints(map) if map.values().any(|&n| n == 0) => {
                return Err(CarouselError::ZeroPerPage);
            }
            _ => {}
        }
        if let Some(width) = self.fixed_width
            && !(width.is_finite() && width > 0.0)
        {
            return Err(CarouselError::InvalidSlideWidth(width));
        }
        if !(self.threshold.is_finite() && self.threshold >= 0.0) {
            return Err(CarouselError::InvalidThreshold(self.threshold));
        }
        if self.auto_advance == Some(Duration::ZERO) {
            return Err(CarouselError::ZeroAutoAdvance);
        }
        Ok(())
    }
}
