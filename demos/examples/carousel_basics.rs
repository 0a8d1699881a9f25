// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics.
//!
//! Page through five slides with buttons, then check when a fixed-width strip
//! needs navigation at all.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_basics`

use core::time::Duration;

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_carousel::{Callbacks, Carousel, CarouselConfig, Measurement};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_carousel=debug")),
        )
        .init();

    let config = CarouselConfig {
        auto_advance: None,
        ..Default::default()
    };
    let callbacks = Callbacks::new()
        .with_on_next(|i| println!("  on_next({i})"))
        .with_on_prev(|i| println!("  on_prev({i})"));
    let mut carousel =
        Carousel::with_listener(config, ["a", "b", "c", "d", "e"], callbacks).unwrap();
    carousel.mount(
        Measurement::new(Size::new(640.0, 360.0), 1280.0),
        Duration::ZERO,
    );

    println!("== Buttons ==");
    carousel.prev();
    assert_eq!(carousel.index(), 0, "prev at the first slide stays put");
    for _ in 0..3 {
        carousel.next();
    }
    assert_eq!(carousel.index(), 3);
    carousel.next();
    carousel.next();
    assert_eq!(carousel.index(), 4, "next clamps at the last slide");
    println!(
        "  showing {:?} at offset {}",
        carousel.slides()[carousel.index()],
        carousel.frame_style().offset
    );

    println!("== Fixed width ==");
    let fixed = CarouselConfig {
        fixed_width: Some(200.0),
        auto_advance: None,
        ..Default::default()
    };
    let mut strip = Carousel::new(fixed, 0..6).unwrap();
    strip.mount(
        Measurement::new(Size::new(900.0, 120.0), 900.0),
        Duration::ZERO,
    );
    println!(
        "  frame {}px in a 900px container, navigation enabled: {}",
        strip.frame_style().width,
        strip.navigation_enabled()
    );
    assert!(strip.navigation_enabled());
}
