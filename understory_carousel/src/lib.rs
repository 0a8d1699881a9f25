// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless, `no_std` carousel core.
//!
//! ## Overview
//!
//! This crate computes what a carousel (slider) widget shows and how it reacts to input.
//! It does not render. The host view layer supplies slide handles and measurements,
//! delivers pointer/touch events and a monotonic clock, and applies the published
//! [`FrameStyle`] and [`SlideStyle`].
//!
//! - [`Layout`] resolves pages per view (fixed or by viewport breakpoint), the per-slide extent,
//!   and the frame offset, in proportional or fixed-width mode.
//! - [`Carousel::prev`], [`Carousel::next`], and [`Carousel::go_to`] move the index with optional
//!   wraparound and report through a [`CarouselListener`].
//! - [`Carousel::handle_gesture`] previews drags live and commits a page step once the drag passes
//!   the configured threshold.
//! - [`Carousel::advance`] drives the auto-advance interval and the resize debounce.
//!
//! ## Host integration
//!
//! [`Carousel::mount`] and [`Carousel::update`] return the [`Subscriptions`] to attach and
//! [`Carousel::unmount`] returns the ones to detach, so event registration is explicit and
//! deterministic. Each handled event returns [`EventEffects`] (stop propagation, prevent default).
//!
//! ## Minimal usage
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Size;
//! use understory_carousel::{Carousel, CarouselConfig, Measurement, PerPage};
//!
//! let config = CarouselConfig {
//!     per_page: PerPage::breakpoints([(0, 1), (768, 3)]),
//!     looping: true,
//!     ..Default::default()
//! };
//! let mut carousel = Carousel::new(config, 0..6_u32).unwrap();
//! let subs = carousel.mount(Measurement::new(Size::new(900.0, 240.0), 1280.0), Duration::ZERO);
//! assert!(!subs.is_empty());
//! assert_eq!(carousel.per_page(), 3);
//!
//! carousel.prev(); // wraps to the last full page
//! assert_eq!(carousel.index(), 3);
//! assert_eq!(carousel.frame_style().offset, 900.0);
//!
//! // Ten seconds later the default auto-advance wraps back to the start.
//! carousel.advance(Duration::from_secs(10));
//! assert_eq!(carousel.index(), 0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod error;
pub mod gesture;
mod layout;
pub mod navigation;
pub mod schedule;
mod types;

pub use carousel::Carousel;
pub use config::{CarouselConfig, Easing, PerPage, Transition};
pub use error::CarouselError;
pub use gesture::GestureEvent;
pub use layout::{Layout, resolve_per_page};
pub use types::{
    Callbacks, CarouselListener, Cursor, EventEffects, FrameStyle, Measurement, NoListener,
    SlideStyle, Subscriptions,
};
