// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals Scale: mapping calendar time and region stacking to model pixels.
//!
//! The timeline canvas is laid out in a fixed model space:
//! - Segments are columns placed left to right. A column's width is
//!   `|end_year - start_year| * pixels_per_year` and its origin is the prefix
//!   sum of the widths before it ([`SegmentColumns`]).
//! - Within a column, [`TimeScale`] maps a year linearly onto the column.
//! - Regions are horizontal bands stacked top to bottom below a fixed top
//!   margin reserved for segment captions ([`BandStack`]).
//!
//! Nothing here knows about the viewport: model space is what the pan/zoom
//! transform maps to device pixels.
//!
//! ## Minimal example
//!
//! ```rust
//! use annals_scale::{BandStack, TimeScale};
//!
//! let scale = TimeScale::new(-2070, -1600, 0.0, 5.0).unwrap();
//! assert_eq!(scale.width(), 2350.0);
//! assert_eq!(scale.year_to_x(-2070.0), 0.0);
//! assert!(scale.year_to_x(-2060.0) > scale.year_to_x(-2070.0));
//!
//! let stack = BandStack::new(30.0, &[350.0, 350.0]);
//! let band = stack.band(1).unwrap();
//! assert_eq!(band.top, 380.0);
//! assert_eq!(band.midline(), 555.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bands;
mod caption;
mod params;
mod time_scale;

pub use bands::{Band, BandStack};
pub use caption::{format_span, format_year};
pub use params::ScaleParams;
pub use time_scale::{DomainError, SegmentColumns, TimeScale};
