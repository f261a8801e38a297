// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan tracking.
//!
//! ## Usage
//!
//! 1) Call [`DragState::begin`] on pointer down with the device position.
//! 2) On each pointer move, call [`DragState::drag_to`] and feed the returned
//!    delta to [`Viewport::pan`](crate::Viewport::pan).
//! 3) Call [`DragState::finish`] on pointer up.
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use annals_view::{DragState, Viewport};
//!
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let mut drag = DragState::default();
//!
//! drag.begin(Point::new(100.0, 100.0));
//! if let Some(delta) = drag.drag_to(Point::new(80.0, 110.0)) {
//!     view.pan(delta);
//! }
//! assert_eq!(drag.finish(Point::new(80.0, 110.0)), Some(Vec2::new(-20.0, 10.0)));
//! assert_eq!(view.translate(), Vec2::new(-20.0, 10.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer drag in device space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    origin: Option<Point>,
    last: Option<Point>,
}

impl DragState {
    /// Starts a drag at `pos`, discarding any drag in progress.
    pub fn begin(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Moves the drag to `pos`, returning the delta since the previous
    /// position.
    ///
    /// Returns `None` when no drag is active or the pointer did not move.
    pub fn drag_to(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        let delta = pos - last;
        (delta != Vec2::ZERO).then_some(delta)
    }

    /// Offset from the drag start to `pos`, if dragging.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.origin.map(|origin| pos - origin)
    }

    /// Ends the drag, returning the total offset from its start to `pos`.
    pub fn finish(&mut self, pos: Point) -> Option<Vec2> {
        let total = self.total_offset(pos);
        self.origin = None;
        self.last = None;
        total
    }

    /// Abandons the drag without reporting an offset.
    pub fn cancel(&mut self) {
        self.origin = None;
        self.last = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}
