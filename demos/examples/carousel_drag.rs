// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag gestures.
//!
//! Feed touch and mouse sequences to a carousel and print the frame style the
//! host would apply after each event.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_drag`

use core::time::Duration;

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_carousel::{Carousel, CarouselConfig, GestureEvent, Measurement};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_carousel=trace")),
        )
        .init();

    let config = CarouselConfig {
        auto_advance: None,
        ..Default::default()
    };
    let mut carousel = Carousel::new(config, 0..4).unwrap();
    let subs = carousel.mount(
        Measurement::new(Size::new(400.0, 300.0), 400.0),
        Duration::ZERO,
    );
    println!("attach: {subs:?}");

    let at = |x: f64| Point::new(x, 120.0);
    let gestures = [
        // A short wiggle: snaps back.
        vec![
            GestureEvent::TouchStart(at(200.0)),
            GestureEvent::TouchMove(at(190.0)),
            GestureEvent::TouchEnd,
        ],
        // A long leftward swipe: next page.
        vec![
            GestureEvent::TouchStart(at(300.0)),
            GestureEvent::TouchMove(at(220.0)),
            GestureEvent::TouchMove(at(150.0)),
            GestureEvent::TouchEnd,
        ],
        // A mouse drag to the right that leaves the container: previous page.
        vec![
            GestureEvent::MouseDown(at(100.0)),
            GestureEvent::MouseMove(at(140.0)),
            GestureEvent::MouseLeave(at(180.0)),
        ],
    ];

    let mut indices = Vec::new();
    for (n, gesture) in gestures.into_iter().enumerate() {
        println!("== Gesture {n} ==");
        for event in gesture {
            let effects = carousel.handle_gesture(event);
            let frame = carousel.frame_style();
            println!(
                "  {event:?} -> offset {} ({}), cursor {:?}, effects {effects:?}",
                frame.offset, frame.transition, frame.cursor
            );
        }
        indices.push(carousel.index());
    }
    assert_eq!(indices, vec![0, 1, 0]);

    let detach = carousel.unmount();
    println!("detach: {detach:?}");
}
