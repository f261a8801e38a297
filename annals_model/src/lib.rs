// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals Model: the geometry model of a historical timeline.
//!
//! A timeline is an ordered list of [`Segment`]s. Each segment covers a
//! calendar interval and is split vertically into [`Region`]s (for example
//! contemporaneous states), and each region owns a set of dated [`Event`]s.
//!
//! This crate is pure data plus load-time validation:
//! - [`EventKind`] is the closed set of event categories, with the glyph and
//!   legend description used by renderers and the axis-anchoring policy used by
//!   the placement engine ([`EventKind::is_anchored`]).
//! - [`KindSet`] is a compact bitset of kinds, used as the visibility-toggle set.
//! - [`EventIndex`] addresses an event by integer `(segment, region, event)`
//!   position; nothing in the workspace builds string keys.
//! - [`Dataset::validate`] rejects degenerate segments, events outside their
//!   segment, and region heights that do not fill the segment stack.
//!
//! ## Minimal example
//!
//! ```rust
//! use annals_model::{Dataset, Event, EventKind, Region, Segment};
//!
//! let dataset = Dataset::new(vec![Segment::new(
//!     -2070,
//!     -1600,
//!     vec![Region::new(
//!         "Xia",
//!         vec![
//!             Event::new(-2070, "Yu", EventKind::Leader),
//!             Event::new(-2060, "Nine provinces", EventKind::Event),
//!         ],
//!     )],
//! )]);
//!
//! dataset.validate(700.0).unwrap();
//! assert_eq!(dataset.event_count(), 2);
//! ```
//!
//! Years are signed integers; negative years are BCE. A segment's interval may
//! run in either direction, and both of its ends are inclusive.
//!
//! With the `serde` feature (on by default) the types deserialize from the JSON
//! dataset schema: `{startYear, endYear, regions: [{label, height?, events:
//! [{year, text, type}]}]}`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dataset;
mod kind;
mod validate;

pub use dataset::{Dataset, Event, EventIndex, Region, Segment};
pub use kind::{EventKind, KindSet, KindSetIter};
pub use validate::{HEIGHT_TOLERANCE, ModelError, resolve_region_heights};
