// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What a renderer draws.
//!
//! All geometry is in model space; draw it under [`Frame::transform`].
//! Frames borrow strings from the timeline's layout and are meant to be
//! consumed immediately.

use annals_model::{EventIndex, EventKind};
use annals_view::ViewTransform;
use kurbo::{Line, Point, Rect};
use peniko::Color;

/// One frame of the timeline.
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    /// Model-to-device transform for this frame.
    pub transform: ViewTransform,
    /// Model-space rectangle inside the view; everything outside was culled.
    pub visible: Rect,
    /// The whole canvas in model space.
    pub model_bounds: Rect,
    /// Segments intersecting the view, left to right.
    pub segments: Vec<SegmentScene<'a>>,
}

impl<'a> Frame<'a> {
    /// Every event in the frame.
    pub fn events(&self) -> impl Iterator<Item = &EventScene<'a>> + '_ {
        self.segments
            .iter()
            .flat_map(|s| &s.regions)
            .flat_map(|r| &r.events)
    }

    /// The hovered event, if it is in the frame.
    #[must_use]
    pub fn hovered(&self) -> Option<&EventScene<'a>> {
        self.events().find(|e| e.hovered)
    }
}

/// A segment column.
#[derive(Clone, Debug)]
pub struct SegmentScene<'a> {
    /// Segment position in the dataset.
    pub index: usize,
    /// Caption such as `"2070 BCE - 1600 BCE"`.
    pub caption: &'a str,
    /// Center of the caption in the top margin.
    pub caption_anchor: Point,
    /// Column rectangle, top margin included.
    pub column: Rect,
    /// Regions intersecting the view, top to bottom.
    pub regions: Vec<RegionScene<'a>>,
}

/// A region band.
#[derive(Clone, Debug)]
pub struct RegionScene<'a> {
    /// Region position within its segment.
    pub index: usize,
    /// Display label.
    pub label: &'a str,
    /// Background fill.
    pub background: Color,
    /// Background rectangle.
    pub band_rect: Rect,
    /// Axis line through the band midline.
    pub axis: Line,
    /// Visible events, in source order.
    pub events: Vec<EventScene<'a>>,
}

/// An event marker with its label.
#[derive(Clone, Debug)]
pub struct EventScene<'a> {
    /// Address of the source event.
    pub index: EventIndex,
    /// Event category.
    pub kind: EventKind,
    /// Marker position.
    pub position: Point,
    /// Marker glyph.
    pub glyph: &'static str,
    /// Label text.
    pub text: &'a str,
    /// Year, for the hover call-out.
    pub year: i32,
    /// Sits on the axis.
    pub anchored: bool,
    /// Sits above the axis; labels go on the far side.
    pub above_axis: bool,
    /// Placement broke a distance constraint.
    pub degraded: bool,
    /// Under the pointer.
    pub hovered: bool,
}
