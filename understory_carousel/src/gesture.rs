// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture interpreter: touch and mouse drags that page the carousel.
//!
//! ## States
//!
//! A gesture moves **Idle → Dragging → Idle**. A press (touch start or mouse
//! down) records the start position. Moves while dragging record the latest
//! position, and the carousel previews the frame at
//! `resting_offset + (start - end)`. A release (touch end, mouse up, or mouse
//! leave while dragging) classifies the movement `end - start`:
//!
//! - `movement > threshold` → [`Release::Prev`] (dragged right)
//! - `movement < -threshold` → [`Release::Next`] (dragged left)
//! - otherwise → [`Release::SnapBack`]
//!
//! A press and release with no move in between is a tap and always snaps back.
//!
//! ```
//! use understory_carousel::gesture::{DragTracker, Release};
//!
//! let mut drag = DragTracker::default();
//! drag.press(300.0);
//! assert_eq!(drag.moved(240.0), Some(60.0));
//! assert_eq!(drag.release(None, 20.0), Some(Release::Next));
//! assert!(!drag.is_dragging());
//! ```

use kurbo::Point;

use crate::types::{Cursor, EventEffects, Subscriptions};

/// A pointer or touch event delivered by the host.
///
/// Positions are page coordinates; only `x` is used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// First touch point went down.
    TouchStart(Point),
    /// First touch point moved.
    TouchMove(Point),
    /// Touch ended.
    TouchEnd,
    /// Mouse button pressed.
    MouseDown(Point),
    /// Mouse moved.
    MouseMove(Point),
    /// Mouse button released.
    MouseUp,
    /// Mouse left the container.
    MouseLeave(Point),
}

impl GestureEvent {
    /// The subscription this event is delivered through.
    pub fn subscription(&self) -> Subscriptions {
        match self {
            Self::TouchStart(_) => Subscriptions::TOUCH_START,
            Self::TouchMove(_) => Subscriptions::TOUCH_MOVE,
            Self::TouchEnd => Subscriptions::TOUCH_END,
            Self::MouseDown(_) => Subscriptions::MOUSE_DOWN,
            Self::MouseMove(_) => Subscriptions::MOUSE_MOVE,
            Self::MouseUp => Subscriptions::MOUSE_UP,
            Self::MouseLeave(_) => Subscriptions::MOUSE_LEAVE,
        }
    }

    /// Propagation effects the host applies once the event is handled.
    ///
    /// Mouse down also prevents default so the browser does not start a
    /// native image drag or text selection.
    pub fn effects(&self) -> EventEffects {
        match self {
            Self::TouchStart(_) | Self::TouchMove(_) | Self::TouchEnd | Self::MouseUp => {
                EventEffects::STOP_PROPAGATION
            }
            Self::MouseDown(_) => EventEffects::STOP_PROPAGATION | EventEffects::PREVENT_DEFAULT,
            Self::MouseMove(_) => EventEffects::PREVENT_DEFAULT,
            Self::MouseLeave(_) => EventEffects::empty(),
        }
    }

    /// Cursor to show after the event, for mouse events that change it.
    pub(crate) fn cursor_after(&self, dragging: bool) -> Option<Cursor> {
        match self {
            Self::MouseMove(_) if dragging => Some(Cursor::Grabbing),
            Self::MouseUp => Some(Cursor::Grab),
            Self::MouseLeave(_) if dragging => Some(Cursor::Grab),
            _ => None,
        }
    }
}

/// Decision taken when a drag is released.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Release {
    /// Commit one `prev()` step.
    Prev,
    /// Commit one `next()` step.
    Next,
    /// Return to the resting offset of the current index.
    SnapBack,
}

/// Classify a drag movement (`end - start`) against a threshold.
pub fn classify(movement: f64, threshold: f64) -> Release {
    if movement > threshold {
        Release::Prev
    } else if movement < -threshold {
        Release::Next
    } else {
        Release::SnapBack
    }
}

/// Drag record for the gesture in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum DragState {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer is down.
    Dragging {
        /// Page x at press.
        start: f64,
        /// Page x of the latest move, if any.
        end: Option<f64>,
    },
}

/// Tracks one drag at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    /// Current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// True while a pointer is down.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Begin a drag at `x`. A second press restarts the record.
    pub fn press(&mut self, x: f64) {
        self.state = DragState::Dragging {
            start: x,
            end: None,
        };
    }

    /// Record a move to `x`, returning the preview delta `start - x` while
    /// dragging.
    pub fn moved(&mut self, x: f64) -> Option<f64> {
        match &mut self.state {
            DragState::Dragging { start, end } => {
                *end = Some(x);
                Some(*start - x)
            }
            DragState::Idle => None,
        }
    }

    /// End the drag and clear the record.
    ///
    /// `end_at` overrides the last recorded position (mouse leave reports its
    /// own position). Returns `None` when no drag was in progress.
    pub fn release(&mut self, end_at: Option<f64>, threshold: f64) -> Option<Release> {
        let DragState::Dragging { start, end } = core::mem::take(&mut self.state) else {
            return None;
        };
        Some(match end_at.or(end) {
            Some(end) => classify(end - start, threshold),
            None => Release::SnapBack,
        })
    }

    /// Drop the drag without a decision.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
