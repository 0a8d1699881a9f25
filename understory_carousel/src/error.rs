// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported by [`Carousel::new`](crate::Carousel::new) and
//! [`Carousel::update`](crate::Carousel::update).
//!
//! Runtime operations never fail; only a configuration that cannot produce a
//! meaningful layout is rejected.

/// Reasons a [`CarouselConfig`](crate::CarouselConfig) is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CarouselError {
    /// A page count of zero, either fixed or attached to a breakpoint.
    #[error("pages per view must be at least 1")]
    ZeroPerPage,
    /// Fixed-width mode with a width that is not finite and positive.
    #[error("fixed slide width must be finite and positive, got {0}")]
    InvalidSlideWidth(f64),
    /// A drag threshold that is negative or not finite.
    #[error("drag threshold must be finite and non-negative, got {0}")]
    InvalidThreshold(f64),
    /// An auto-advance period of zero would fire continuously.
    #[error("auto-advance period must be non-zero")]
    ZeroAutoAdvance,
}
