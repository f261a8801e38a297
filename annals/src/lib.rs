// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annals: a zoomable historical timeline engine.
//!
//! A timeline is a row of chronological segments, each split into parallel
//! regions holding dated events. This crate ties the workspace together into
//! one session type, [`Timeline`]:
//!
//! - `annals_model`: the dataset, event kinds and load-time validation.
//! - `annals_scale`: years to model X, regions to horizontal bands.
//! - `annals_layout`: region colors and collision-avoiding event placement,
//!   computed once per load.
//! - `annals_view`: pan and zoom.
//! - `annals_hit`: which event is under the pointer.
//!
//! The engine is headless. A host feeds it pointer input through
//! [`Timeline::on_interaction`] and draws each [`Frame`] with whatever
//! backend it likes.
//!
//! ## Minimal example
//!
//! ```rust
//! use annals::{Config, Interaction, Timeline};
//! use kurbo::{Point, Rect};
//!
//! let json = r#"[{
//!     "startYear": -2070, "endYear": -1600,
//!     "regions": [{ "label": "夏", "events": [
//!         { "year": -2070, "text": "禹", "type": "leader" },
//!         { "year": -2060, "text": "划天下为九州", "type": "event" }
//!     ]}]
//! }]"#;
//!
//! let view = Rect::new(0.0, 0.0, 1024.0, 768.0);
//! let mut timeline = Timeline::load_json(json, Config::default(), view).unwrap();
//!
//! // Hover the anchored leader marker on the band axis.
//! let yu = timeline.layout().events().next().unwrap().position();
//! let device = timeline.viewport().transform().to_device(yu);
//! let outcome = timeline.on_interaction(Interaction::PointerMove(device));
//! assert!(outcome.needs_redraw());
//!
//! let frame = timeline.frame();
//! assert_eq!(frame.hovered().unwrap().text, "禹");
//! ```
//!
//! ## Logging
//!
//! The engine logs through [`tracing`]: `info` on load and relayout, `warn`
//! when some events could only be placed with overlap, `debug` on hover
//! changes and `trace` on view changes. Installing a subscriber is up to the
//! host; see the `print_layout` example.

mod config;
mod error;
mod frame;
mod interaction;
mod timeline;

pub use config::Config;
pub use error::Error;
pub use frame::{EventScene, Frame, RegionScene, SegmentScene};
pub use interaction::{Interaction, InteractionOutcome};
pub use timeline::{LegendEntry, Timeline};

pub use annals_hit::{HitParams, HoverChange};
pub use annals_layout::{Layout, Palette, PlacedEvent, PlacementParams, Side};
pub use annals_model::{Dataset, Event, EventIndex, EventKind, KindSet, Region, Segment};
pub use annals_scale::{ScaleParams, format_span, format_year};
pub use annals_view::{ViewParams, ViewTransform};
