// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals Layout: deterministic placement of timeline events.
//!
//! This crate turns a validated [`Dataset`](annals_model::Dataset) into an
//! immutable [`Layout`]: every region gets a background color and every event
//! a model-space position.
//!
//! - [`ColorAssigner`] picks palette entries so that vertically adjacent
//!   regions, including the boundary between two segments, never share a
//!   color.
//! - [`place_band`] is the collision search: anchored kinds go on the band
//!   axis, free kinds are sampled above or below it while keeping their
//!   distance from the band edges, the axis and each other.
//! - [`compute_layout`] drives both over the whole dataset.
//!
//! Randomness is injected through [`RandomSource`]. [`compute_layout`] seeds a
//! [`XorShift64`] from [`LayoutParams::seed`] and derives one independent
//! stream per region, so a layout is a pure function of its inputs.
//!
//! ## Minimal example
//!
//! ```rust
//! use annals_layout::{LayoutParams, Palette, compute_layout};
//! use annals_model::{Dataset, Event, EventKind, Region, Segment};
//!
//! let dataset = Dataset::new(vec![Segment::new(
//!     -1046,
//!     -771,
//!     vec![
//!         Region::new("Zhou", vec![Event::new(-1046, "King Wu", EventKind::King)]),
//!         Region::new("Jin", vec![Event::new(-1033, "Fief of Tang", EventKind::Event)]),
//!     ],
//! )]);
//!
//! let params = LayoutParams { seed: 7, ..LayoutParams::default() };
//! let a = compute_layout(&dataset, &Palette::default(), &params).unwrap();
//! let b = compute_layout(&dataset, &Palette::default(), &params).unwrap();
//!
//! let regions = &a.segments()[0].regions;
//! assert_ne!(regions[0].color_index, regions[1].color_index);
//! assert!(a.events().zip(b.events()).all(|(p, q)| p.position() == q.position()));
//! ```
//!
//! ## Logging
//!
//! [`compute_layout`] emits one `debug` event per pass and a `trace` event per
//! degraded placement through [`tracing`]. No subscriber is installed here.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod color;
mod layout;
mod placement;
mod rng;

pub use color::{ColorAssigner, Palette};
pub use layout::{
    Layout, LayoutError, LayoutParams, PlacedEvent, RegionLayout, SegmentLayout, compute_layout,
};
pub use placement::{BandItem, Placement, PlacementParams, Side, place_band};
pub use rng::{RandomSource, XorShift64};
