// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals Hit: which event marker is under the pointer.
//!
//! - [`hit_test`] maps a device-space pointer into model space through the
//!   same [`ViewTransform`](annals_view::ViewTransform) the renderer draws
//!   with, then returns the nearest marker within [`HitParams::radius`].
//! - [`HoverState`] turns successive hit results into
//!   [`HoverChange`] transitions, so a renderer only redraws the year
//!   call-out when the hovered marker actually changes.
//!
//! Candidates are plain `(key, model position)` pairs; callers choose the key
//! type and decide which markers are eligible (for example only visible
//! kinds).
//!
//! ## Minimal example
//!
//! ```rust
//! use annals_hit::{HitParams, HoverChange, HoverState, hit_test};
//! use annals_view::ViewTransform;
//! use kurbo::Point;
//!
//! let markers = [(0_usize, Point::new(100.0, 380.0)), (1, Point::new(150.0, 200.0))];
//! let mut hover = HoverState::new();
//!
//! let pointer = Point::new(104.0, 377.0);
//! let hit = hit_test(markers, pointer, &ViewTransform::IDENTITY, &HitParams::default());
//! let change = hover.update(hit.map(|h| h.key));
//! assert_eq!(change, Some(HoverChange::Entered(0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod hover;
mod nearest;

pub use hover::{HoverChange, HoverState};
pub use nearest::{Hit, HitParams, hit_test};
