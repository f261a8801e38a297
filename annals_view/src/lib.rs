// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals View: pan and zoom over a timeline's model space.
//!
//! This crate is a small, headless viewport model. It focuses on:
//! - Viewport state: a uniform scale plus a device-space translation.
//! - Wheel zoom anchored at the pointer, and panning by device deltas.
//! - Coordinate conversion between model and device space through one
//!   [`ViewTransform`] snapshot.
//! - Fitting content into the view and computing the visible model rectangle
//!   for culling.
//! - Turning pointer drags into pan deltas ([`DragState`]).
//!
//! It does **not** know about events or layout. Callers wire pointer input
//! into [`Viewport::zoom`] and [`Viewport::pan`] and use
//! [`Viewport::transform`] for drawing and hit testing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use annals_view::Viewport;
//!
//! let mut view = Viewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let pointer = Point::new(400.0, 300.0);
//! let under_pointer = view.transform().to_model(pointer);
//!
//! // Wheel up zooms in, keeping the model point under the pointer fixed.
//! view.zoom(-120.0, pointer);
//! assert!(view.scale() > 1.0);
//! let after = view.transform().to_model(pointer);
//! assert!((after - under_pointer).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod drag;
mod params;
mod transform;
mod viewport;

pub use drag::DragState;
pub use params::{FitMode, ViewParams};
pub use transform::ViewTransform;
pub use viewport::Viewport;
