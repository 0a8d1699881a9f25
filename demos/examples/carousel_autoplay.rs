// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-advance and responsive resizing.
//!
//! Drive a looping carousel with a simulated clock, resize the window in a
//! burst, and watch breakpoints change the pages per view once it settles.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_autoplay`

use core::time::Duration;

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_carousel::{Carousel, CarouselConfig, Measurement, PerPage};

fn window(width: f64) -> Measurement {
    Measurement::new(Size::new(width, 400.0), width)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_carousel=debug")),
        )
        .init();

    let config = CarouselConfig {
        per_page: PerPage::breakpoints([(0, 1), (768, 2), (1200, 3)]),
        looping: true,
        auto_advance: Some(Duration::from_secs(3)),
        ..Default::default()
    };
    let mut carousel = Carousel::new(config, 0..6).unwrap();
    carousel.mount(window(600.0), Duration::ZERO);

    let ms = Duration::from_millis;
    let mut now = Duration::ZERO;
    let mut step = |carousel: &mut Carousel<i32>, to: Duration| {
        now = to;
        carousel.advance(now);
        tracing::info!(
            at_ms = now.as_millis() as u64,
            index = carousel.index(),
            per_page = carousel.per_page(),
            offset = carousel.frame_style().offset,
            "tick"
        );
    };

    step(&mut carousel, ms(3000));
    step(&mut carousel, ms(6000));
    assert_eq!(carousel.index(), 2);

    // A drag-resize burst: only the last size counts.
    for (t, w) in [(6100, 800.0), (6150, 1000.0), (6200, 1300.0)] {
        carousel.resize(window(w), ms(t));
    }
    step(&mut carousel, ms(6300));
    assert_eq!(carousel.per_page(), 1, "still settling");
    step(&mut carousel, ms(6450));
    assert_eq!(carousel.per_page(), 3);

    // Index 2 is still valid with three pages; the next ticks reach the end and wrap.
    step(&mut carousel, ms(9000));
    assert_eq!(carousel.index(), 3);
    step(&mut carousel, ms(12000));
    assert_eq!(carousel.index(), 0);

    let detach = carousel.unmount();
    println!("detached {detach:?}; next deadline {:?}", carousel.next_deadline());
    assert!(carousel.next_deadline().is_none());
}
