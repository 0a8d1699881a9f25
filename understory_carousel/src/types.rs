// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing types: measurements, published styles, event flags, and listeners.
//!
//! ## Overview
//!
//! The carousel does not touch a view tree. The host feeds it a
//! [`Measurement`] and [`GestureEvent`](crate::gesture::GestureEvent)s, then
//! applies the published [`FrameStyle`] and [`SlideStyle`].
//! [`Subscriptions`] says which host events to attach or detach, and
//! [`EventEffects`] says how each handled event should propagate.
//! Navigation is reported through a [`CarouselListener`].

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Affine, Size, Vec2};

use crate::config::Transition;

/// Measured host geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Measurement {
    /// Bounding size of the visible container.
    pub container: Size,
    /// Width of the whole viewport, used for breakpoint selection.
    pub viewport_width: f64,
}

impl Measurement {
    /// Create a measurement.
    pub const fn new(container: Size, viewport_width: f64) -> Self {
        Self {
            container,
            viewport_width,
        }
    }
}

/// Pointer cursor shown over the frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    /// Host default; no cursor has been requested yet.
    #[default]
    Default,
    /// Open hand, after a mouse drag ends.
    Grab,
    /// Closed hand, while a mouse drag moves the frame.
    Grabbing,
}

/// Style the host applies to the frame element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameStyle {
    /// Frame width in pixels (all slides side by side).
    pub width: f64,
    /// Horizontal scroll offset in pixels; the frame is translated by `-offset`.
    pub offset: f64,
    /// Transition to use for this update.
    pub transition: Transition,
    /// Cursor over the frame.
    pub cursor: Cursor,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            width: 0.0,
            offset: 0.0,
            transition: Transition::default(),
            cursor: Cursor::Default,
        }
    }
}

impl FrameStyle {
    /// Translation to apply to the frame.
    pub fn translation(&self) -> Vec2 {
        Vec2::new(-self.offset, 0.0)
    }

    /// The translation as an affine transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translation())
    }
}

/// Style the host applies to every slide wrapper.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlideStyle {
    /// Share of the frame width, in percent.
    pub width_percent: f64,
    /// Slides float left so they line up horizontally.
    pub float_left: bool,
}

bitflags::bitflags! {
    /// Host events the carousel needs delivered.
    ///
    /// Returned from [`Carousel::mount`](crate::Carousel::mount) and
    /// [`Carousel::update`](crate::Carousel::update) (attach) and
    /// [`Carousel::unmount`](crate::Carousel::unmount) (detach).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Subscriptions: u8 {
        /// Window resize.
        const RESIZE      = 0b0000_0001;
        /// Touch start on the container.
        const TOUCH_START = 0b0000_0010;
        /// Touch move on the container.
        const TOUCH_MOVE  = 0b0000_0100;
        /// Touch end on the container.
        const TOUCH_END   = 0b0000_1000;
        /// Mouse button down on the container.
        const MOUSE_DOWN  = 0b0001_0000;
        /// Mouse move over the container.
        const MOUSE_MOVE  = 0b0010_0000;
        /// Mouse button up on the container.
        const MOUSE_UP    = 0b0100_0000;
        /// Mouse leaves the container.
        const MOUSE_LEAVE = 0b1000_0000;
        /// Every pointer and touch event.
        const GESTURES = Self::TOUCH_START.bits()
            | Self::TOUCH_MOVE.bits()
            | Self::TOUCH_END.bits()
            | Self::MOUSE_DOWN.bits()
            | Self::MOUSE_MOVE.bits()
            | Self::MOUSE_UP.bits()
            | Self::MOUSE_LEAVE.bits();
    }
}

bitflags::bitflags! {
    /// Propagation effects the host should apply to a handled event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventEffects: u8 {
        /// Do not propagate the event to ancestors.
        const STOP_PROPAGATION = 0b01;
        /// Suppress the host's default action (text selection, image drag).
        const PREVENT_DEFAULT  = 0b10;
    }
}

/// Receives navigation notifications.
///
/// Every method defaults to a no-op, so implementors only override what they
/// need. Index callbacks receive the index after the move; they fire even
/// when the index is unchanged (for example `next()` on the last page).
pub trait CarouselListener {
    /// A `prev()` step completed.
    fn on_prev(&mut self, index: usize) {
        let _ = index;
    }
    /// A `next()` step completed.
    fn on_next(&mut self, index: usize) {
        let _ = index;
    }
    /// A `go_to()` jump completed.
    fn on_go_to(&mut self, index: usize) {
        let _ = index;
    }
    /// The navigation-enabled flag changed.
    fn on_navigation_changed(&mut self, enabled: bool) {
        let _ = enabled;
    }
}

/// A listener that ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoListener;

impl CarouselListener for NoListener {}

type IndexHook = Box<dyn FnMut(usize)>;
type FlagHook = Box<dyn FnMut(bool)>;

/// A listener built from optional closures.
///
/// ```
/// use understory_carousel::{CarouselListener, Callbacks};
///
/// let mut cb = Callbacks::new().with_on_next(|i| assert_eq!(i, 1));
/// cb.on_next(1);
/// cb.on_prev(0); // unset hooks are ignored
/// ```
#[derive(Default)]
pub struct Callbacks {
    on_prev: Option<IndexHook>,
    on_next: Option<IndexHook>,
    on_go_to: Option<IndexHook>,
    on_navigation_changed: Option<FlagHook>,
}

impl Callbacks {
    /// No hooks set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `prev()` hook.
    pub fn with_on_prev(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_prev = Some(Box::new(f));
        self
    }

    /// Set the `next()` hook.
    pub fn with_on_next(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_next = Some(Box::new(f));
        self
    }

    /// Set the `go_to()` hook.
    pub fn with_on_go_to(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_go_to = Some(Box::new(f));
        self
    }

    /// Set the navigation-enabled hook.
    pub fn with_on_navigation_changed(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_navigation_changed = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_prev", &self.on_prev.is_some())
            .field("on_next", &self.on_next.is_some())
            .field("on_go_to", &self.on_go_to.is_some())
            .field(
                "on_navigation_changed",
                &self.on_navigation_changed.is_some(),
            )
            .finish()
    }
}

impl CarouselListener for Callbacks {
    fn on_prev(&mut self, index: usize) {
        if let Some(f) = self.on_prev.as_mut() {
            f(index);
        }
    }

    fn on_next(&mut self, index: usize) {
        if let Some(f) = self.on_next.as_mut() {
            f(index);
        }
    }

    fn on_go_to(&mut self, index: usize) {
        if let Some(f) = self.on_go_to.as_mut() {
            f(index);
        }
    }

    fn on_navigation_changed(&mut self, enabled: bool) {
        if let Some(f) = self.on_navigation_changed.as_mut() {
            f(enabled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn frame_transform_translates_left_by_offset() {
        let style = FrameStyle {
            offset: 250.0,
            ..Default::default()
        };
        assert_eq!(style.translation(), Vec2::new(-250.0, 0.0));
        assert_eq!(
            style.transform(),
            Affine::translate(Vec2::new(-250.0, 0.0))
        );
    }

    #[test]
    fn gesture_flags_cover_all_pointer_events() {
        assert_eq!(Subscriptions::GESTURES.bits().count_ones(), 7);
        assert!(!Subscriptions::GESTURES.contains(Subscriptions::RESIZE));
        assert_eq!(Subscriptions::all().bits(), 0xff);
    }

    #[test]
    fn callbacks_forward_to_set_hooks() {
        let seen: Rc<RefCell<Vec<usize>>> = Rc::default();
        let flags: Rc<RefCell<Vec<bool>>> = Rc::default();
        let (s, f) = (seen.clone(), flags.clone());
        let mut cb = Callbacks::new()
            .with_on_go_to(move |i| s.borrow_mut().push(i))
            .with_on_navigation_changed(move |b| f.borrow_mut().push(b));
        cb.on_go_to(3);
        cb.on_next(9);
        cb.on_navigation_changed(true);
        assert_eq!(*seen.borrow(), vec![3]);
        assert_eq!(*flags.borrow(), vec![true]);
    }
}
