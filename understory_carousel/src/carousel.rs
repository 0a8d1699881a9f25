// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel widget core.
//!
//! ## Lifecycle
//!
//! 1) [`Carousel::new`] validates the configuration and takes the slides.
//! 2) [`Carousel::mount`] measures, lays out, publishes the first frame, and
//!    starts auto-advance. Attach the returned [`Subscriptions`].
//! 3) Feed [`GestureEvent`]s to [`Carousel::handle_gesture`], measurements to
//!    [`Carousel::resize`], and the clock to [`Carousel::advance`]. After each
//!    call apply [`Carousel::frame_style`].
//! 4) [`Carousel::update`] swaps configuration or slides and restarts the
//!    auto-advance interval.
//! 5) [`Carousel::unmount`] cancels both scheduled tasks; detach the returned
//!    [`Subscriptions`].

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use crate::config::CarouselConfig;
use crate::error::CarouselError;
use crate::gesture::{DragTracker, GestureEvent, Release};
use crate::layout::Layout;
use crate::navigation::Step;
use crate::schedule::{Scheduler, Task};
use crate::types::{
    CarouselListener, EventEffects, FrameStyle, Measurement, NoListener, SlideStyle, Subscriptions,
};

/// A headless carousel over slide handles `K`.
///
/// ## Usage
///
/// ```
/// use core::time::Duration;
/// use kurbo::{Point, Size};
/// use understory_carousel::{Carousel, CarouselConfig, GestureEvent, Measurement};
///
/// let config = CarouselConfig { auto_advance: None, ..Default::default() };
/// let mut carousel = Carousel::new(config, ["a", "b", "c"]).unwrap();
/// carousel.mount(Measurement::new(Size::new(400.0, 200.0), 1024.0), Duration::ZERO);
///
/// carousel.next();
/// assert_eq!(carousel.index(), 1);
/// assert_eq!(carousel.frame_style().offset, 400.0);
///
/// // Drag right by more than the threshold: one step back.
/// carousel.handle_gesture(GestureEvent::MouseDown(Point::new(100.0, 0.0)));
/// carousel.handle_gesture(GestureEvent::MouseMove(Point::new(180.0, 0.0)));
/// carousel.handle_gesture(GestureEvent::MouseUp);
/// assert_eq!(carousel.index(), 0);
/// ```
pub struct Carousel<K, L: CarouselListener = NoListener> {
    config: CarouselConfig,
    listener: L,
    slides: Vec<K>,
    measurement: Measurement,
    pending_measurement: Option<Measurement>,
    layout: Layout,
    index: usize,
    navigation_enabled: bool,
    drag: DragTracker,
    scheduler: Scheduler,
    frame: FrameStyle,
    attached: Subscriptions,
}

impl<K, L: CarouselListener> fmt::Debug for Carousel<K, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("index", &self.index)
            .field("slide_count", &self.slides.len())
            .field("layout", &self.layout)
            .field("navigation_enabled", &self.navigation_enabled)
            .field("drag", &self.drag)
            .field("frame", &self.frame)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl<K> Carousel<K, NoListener> {
    /// Create an unmounted carousel without a listener.
    pub fn new(
        config: CarouselConfig,
        slides: impl IntoIterator<Item = K>,
    ) -> Result<Self, CarouselError> {
        Self::with_listener(config, slides, NoListener)
    }
}

impl<K, L: CarouselListener> Carousel<K, L> {
    /// Create an unmounted carousel reporting to `listener`.
    pub fn with_listener(
        config: CarouselConfig,
        slides: impl IntoIterator<Item = K>,
        listener: L,
    ) -> Result<Self, CarouselError> {
        config.validate()?;
        let frame = FrameStyle {
            transition: config.transition,
            ..Default::default()
        };
        Ok(Self {
            scheduler: Scheduler::new(config.resize_debounce),
            config,
            listener,
            slides: slides.into_iter().collect(),
            measurement: Measurement::default(),
            pending_measurement: None,
            layout: Layout::default(),
            index: 0,
            navigation_enabled: false,
            drag: DragTracker::default(),
            frame,
            attached: Subscriptions::empty(),
        })
    }

    /// Measure, lay out, publish the first frame, and start auto-advance.
    ///
    /// Returns the host events to attach. Mounting again re-initializes.
    pub fn mount(&mut self, measurement: Measurement, now: Duration) -> Subscriptions {
        self.index = self.config.start_index;
        self.measurement = measurement;
        self.init(now);
        self.attached = self.required_subscriptions();
        tracing::debug!(
            index = self.index,
            slides = self.slides.len(),
            per_page = self.layout.per_page,
            "carousel mounted"
        );
        self.attached
    }

    /// Replace configuration and slides, re-measure, and restart auto-advance.
    ///
    /// A drag in progress is dropped. The current index is kept where still
    /// valid. Returns the host events that must be attached from now on; an
    /// unmounted carousel returns none and keeps the new state for
    /// [`mount`](Self::mount).
    pub fn update(
        &mut self,
        config: CarouselConfig,
        slides: impl IntoIterator<Item = K>,
        measurement: Measurement,
        now: Duration,
    ) -> Result<Subscriptions, CarouselError> {
        config.validate()?;
        self.scheduler.set_resize_debounce(config.resize_debounce);
        self.config = config;
        self.slides = slides.into_iter().collect();
        self.measurement = measurement;
        if !self.is_mounted() {
            return Ok(Subscriptions::empty());
        }
        self.drag.cancel();
        self.pending_measurement = None;
        self.init(now);
        self.attached = self.required_subscriptions();
        tracing::debug!(index = self.index, slides = self.slides.len(), "carousel updated");
        Ok(self.attached)
    }

    /// Cancel scheduled tasks and drop any drag.
    ///
    /// Returns the host events to detach.
    pub fn unmount(&mut self) -> Subscriptions {
        self.scheduler.cancel_all();
        self.drag.cancel();
        self.pending_measurement = None;
        tracing::debug!("carousel unmounted");
        core::mem::replace(&mut self.attached, Subscriptions::empty())
    }

    /// Record a new measurement; layout is recomputed once resizing settles.
    pub fn resize(&mut self, measurement: Measurement, now: Duration) {
        if !self.is_mounted() {
            return;
        }
        self.pending_measurement = Some(measurement);
        self.scheduler.trigger_resize(now);
    }

    /// Run every scheduled task due at `now`.
    ///
    /// A settled resize runs before auto-advance ticks. At most one tick
    /// fires per call however late `now` is, and a tick that arrives while a
    /// pointer is down is skipped.
    pub fn advance(&mut self, now: Duration) {
        while let Some(task) = self.scheduler.poll(now) {
            match task {
                Task::Resize => self.settle_resize(),
                Task::AutoAdvance if self.drag.is_dragging() => {
                    tracing::trace!("auto-advance skipped during drag");
                }
                Task::AutoAdvance => {
                    tracing::trace!("auto-advance tick");
                    self.next();
                }
            }
        }
    }

    /// When [`advance`](Self::advance) next has work to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Move back one page, wrapping when looping.
    pub fn prev(&mut self) {
        self.step(Step::Prev);
        tracing::debug!(index = self.index, "carousel prev");
        self.listener.on_prev(self.index);
    }

    /// Move forward one page, wrapping when looping.
    pub fn next(&mut self) {
        self.step(Step::Next);
        tracing::debug!(index = self.index, "carousel next");
        self.listener.on_next(self.index);
    }

    /// Jump to `index`, clamped into range.
    pub fn go_to(&mut self, index: isize) {
        self.step(Step::GoTo(index));
        tracing::debug!(requested = index, index = self.index, "carousel go_to");
        self.listener.on_go_to(self.index);
    }

    /// Interpret a pointer or touch event.
    ///
    /// Returns the propagation effects the host should apply. When dragging
    /// is disabled or the carousel is not mounted, the event is ignored and
    /// no effects are returned.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> EventEffects {
        if !self.config.draggable || !self.attached.contains(event.subscription()) {
            return EventEffects::empty();
        }
        let was_dragging = self.drag.is_dragging();
        match event {
            GestureEvent::TouchStart(p) | GestureEvent::MouseDown(p) => self.drag.press(p.x),
            GestureEvent::TouchMove(p) | GestureEvent::MouseMove(p) => {
                if let Some(delta) = self.drag.moved(p.x) {
                    self.frame.transition = self.config.transition.immediate();
                    self.frame.offset = self.layout.drag_offset(self.index, delta);
                    tracing::trace!(delta, offset = self.frame.offset, "drag preview");
                }
            }
            GestureEvent::TouchEnd | GestureEvent::MouseUp => self.finish_drag(None),
            GestureEvent::MouseLeave(p) => {
                if was_dragging {
                    self.finish_drag(Some(p.x));
                }
            }
        }
        if let Some(cursor) = event.cursor_after(was_dragging) {
            self.frame.cursor = cursor;
        }
        event.effects()
    }

    /// Current index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Largest index reachable under the current layout.
    pub fn last_index(&self) -> usize {
        self.layout.last_index()
    }

    /// Slide handles in order.
    pub fn slides(&self) -> &[K] {
        &self.slides
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Resolved pages per view.
    pub fn per_page(&self) -> usize {
        self.layout.per_page
    }

    /// Current layout snapshot.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Whether paging controls are meaningful.
    pub fn navigation_enabled(&self) -> bool {
        self.navigation_enabled
    }

    /// Style to apply to the frame.
    pub fn frame_style(&self) -> &FrameStyle {
        &self.frame
    }

    /// Style to apply to every slide wrapper.
    pub fn slide_style(&self) -> SlideStyle {
        SlideStyle {
            width_percent: self.layout.slide_width_percent(),
            float_left: true,
        }
    }

    /// True while a pointer is down.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// True between [`mount`](Self::mount) and [`unmount`](Self::unmount).
    pub fn is_mounted(&self) -> bool {
        self.attached.contains(Subscriptions::RESIZE)
    }

    /// Host events currently attached.
    pub fn subscriptions(&self) -> Subscriptions {
        self.attached
    }

    /// Active configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The listener.
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// The listener, mutably.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    fn required_subscriptions(&self) -> Subscriptions {
        if self.config.draggable {
            Subscriptions::RESIZE | Subscriptions::GESTURES
        } else {
            Subscriptions::RESIZE
        }
    }

    fn init(&mut self, now: Duration) {
        self.relayout();
        self.frame.transition = self.config.transition;
        self.frame.offset = self.layout.resting_offset(self.index);
        self.scheduler.restart_auto_advance(self.config.auto_advance, now);
    }

    fn settle_resize(&mut self) {
        if let Some(m) = self.pending_measurement.take() {
            self.measurement = m;
        }
        self.relayout();
        if self.drag.is_dragging() {
            // The release publishes the resting offset under the new layout.
            return;
        }
        self.frame.offset = self.layout.resting_offset(self.index);
    }

    fn relayout(&mut self) {
        let layout = Layout::resolve(&self.config, self.measurement, self.slides.len());
        if layout != self.layout {
            tracing::debug!(
                container = layout.container_width,
                per_page = layout.per_page,
                extent = layout.extent(),
                "carousel layout"
            );
        }
        self.layout = layout;
        self.frame.width = layout.total_extent();
        self.index = self.index.min(layout.last_index());
        let enabled = layout.navigation_enabled();
        if enabled != self.navigation_enabled {
            self.navigation_enabled = enabled;
            self.listener.on_navigation_changed(enabled);
        }
    }

    fn step(&mut self, step: Step) {
        self.index = step.apply(
            self.index,
            self.layout.last_index(),
            self.slides.len(),
            self.config.looping,
        );
        self.frame.offset = self.layout.resting_offset(self.index);
    }

    fn finish_drag(&mut self, end_at: Option<f64>) {
        self.frame.transition = self.config.transition;
        match self.drag.release(end_at, self.config.threshold) {
            Some(Release::Prev) => self.prev(),
            Some(Release::Next) => self.next(),
            Some(Release::SnapBack) | None => {
                self.frame.offset = self.layout.resting_offset(self.index);
            }
        }
    }
}
