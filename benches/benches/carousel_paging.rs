// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_carousel::{Carousel, CarouselConfig, GestureEvent, Measurement, PerPage};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn mounted(slides: usize, config: CarouselConfig) -> Carousel<usize> {
    let mut c = Carousel::new(config, 0..slides).unwrap();
    c.mount(
        Measurement::new(Size::new(1280.0, 720.0), 1280.0),
        Duration::ZERO,
    );
    c
}

fn gen_swipes(count: usize, seed: u64) -> Vec<[GestureEvent; 4]> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let start = rng.next_f64() * 1280.0;
            let mid = start + (rng.next_f64() - 0.5) * 80.0;
            let end = start + (rng.next_f64() - 0.5) * 400.0;
            [
                GestureEvent::TouchStart(Point::new(start, 0.0)),
                GestureEvent::TouchMove(Point::new(mid, 0.0)),
                GestureEvent::TouchMove(Point::new(end, 0.0)),
                GestureEvent::TouchEnd,
            ]
        })
        .collect()
}

fn bench_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    for &n in &[8usize, 64, 512] {
        let config = CarouselConfig {
            per_page: PerPage::breakpoints([(0, 1), (768, 2), (1200, 4)]),
            looping: true,
            auto_advance: None,
            ..Default::default()
        };
        let mut rng = Rng::new(0xC0FFEE);
        let steps: Vec<u64> = (0..1024).map(|_| rng.next_u64()).collect();
        group.throughput(Throughput::Elements(steps.len() as u64));
        group.bench_function(format!("mixed_steps_n{}", n), |b| {
            b.iter_batched(
                || mounted(n, config.clone()),
                |mut carousel| {
                    for &s in &steps {
                        match s % 3 {
                            0 => carousel.prev(),
                            1 => carousel.next(),
                            _ => carousel.go_to((s % (n as u64 * 2)) as isize - n as isize / 2),
                        }
                    }
                    black_box(carousel.frame_style().offset);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures");
    for (name, fixed_width) in [("proportional", None), ("fixed_width", Some(300.0))] {
        let config = CarouselConfig {
            fixed_width,
            auto_advance: None,
            ..Default::default()
        };
        let swipes = gen_swipes(256, 42);
        group.throughput(Throughput::Elements(swipes.len() as u64));
        group.bench_function(format!("swipes_{}", name), |b| {
            b.iter_batched(
                || mounted(32, config.clone()),
                |mut carousel| {
                    for swipe in &swipes {
                        for &event in swipe {
                            black_box(carousel.handle_gesture(event));
                        }
                    }
                    black_box(carousel.index());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");
    let config = CarouselConfig {
        auto_advance: Some(Duration::from_millis(16)),
        ..Default::default()
    };
    group.bench_function("resize_burst_and_ticks", |b| {
        b.iter_batched(
            || mounted(64, config.clone()),
            |mut carousel| {
                for frame in 0..600_u64 {
                    let now = Duration::from_millis(frame * 16);
                    if frame % 50 < 10 {
                        let w = 600.0 + (frame % 7) as f64 * 100.0;
                        carousel.resize(Measurement::new(Size::new(w, 400.0), w), now);
                    }
                    carousel.advance(now);
                }
                black_box(carousel.index());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_navigation, bench_gestures, bench_schedule);
criterion_main!(benches);
