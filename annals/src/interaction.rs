// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use annals_hit::HoverChange;
use annals_model::EventIndex;
use kurbo::{Point, Vec2};

/// Pointer and navigation input, in device coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interaction {
    /// The pointer moved. Drags the view while a button is held and updates
    /// the hovered event.
    PointerMove(Point),
    /// A button was pressed; starts a drag.
    PointerDown(Point),
    /// A button was released; ends the drag.
    PointerUp(Point),
    /// The pointer left the canvas; ends any drag and clears hover.
    PointerLeave,
    /// A wheel step at `pointer`. Negative `delta` zooms in.
    Wheel {
        /// Wheel delta; only the sign is used.
        delta: f64,
        /// Zoom anchor.
        pointer: Point,
    },
    /// Pan by a device-space delta, for example from scroll bars or keys.
    Pan(Vec2),
    /// Back to the home view.
    Reset,
}

/// What an [`Interaction`] changed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionOutcome {
    /// The model-to-device transform changed.
    pub view_changed: bool,
    /// The hovered event changed.
    pub hover: Option<HoverChange<EventIndex>>,
}

impl InteractionOutcome {
    /// Returns `true` if the renderer should draw a new frame.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.view_changed || self.hover.is_some()
    }
}
