// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass: one immutable [`Layout`] per dataset and configuration.

use alloc::string::String;
use alloc::vec::Vec;

use annals_model::{Dataset, EventIndex, EventKind, ModelError};
use annals_scale::{
    Band, BandStack, DomainError, ScaleParams, SegmentColumns, TimeScale, format_span,
};
use kurbo::{Line, Point, Rect};
use peniko::Color;

use crate::color::{ColorAssigner, Palette};
use crate::placement::{BandItem, PlacementParams, Side, place_band};
use crate::rng::XorShift64;

/// Stream id reserved for region coloring; placement streams pack
/// `(segment, region)` and never reach it.
const COLOR_STREAM: u64 = u64::MAX;

/// Everything [`compute_layout`] needs besides the dataset and palette.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutParams {
    /// Time and band geometry.
    pub scale: ScaleParams,
    /// Collision search tuning.
    pub placement: PlacementParams,
    /// Seed for coloring and placement.
    pub seed: u64,
}

/// Why a dataset could not be laid out.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The dataset failed validation.
    #[error(transparent)]
    Model(#[from] ModelError),
    /// The scale parameters or a segment span are degenerate.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// An event with its computed position.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedEvent {
    /// Address of the source event.
    pub index: EventIndex,
    /// Category of the source event.
    pub kind: EventKind,
    /// Year of the source event.
    pub year: i32,
    /// Label text of the source event.
    pub text: String,
    /// Model X, after same-year fan-out.
    pub x: f64,
    /// Model Y.
    pub y: f64,
    /// Side of the region axis.
    pub side: Side,
    /// `true` if the placement had to break a distance constraint.
    pub degraded: bool,
}

impl PlacedEvent {
    /// Model position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns `true` for events of a kind pinned to the axis.
    #[must_use]
    pub fn anchored(&self) -> bool {
        self.kind.is_anchored()
    }

    /// Returns `true` for events above the axis.
    #[must_use]
    pub fn above_axis(&self) -> bool {
        self.side == Side::Above
    }

    /// Display glyph of the event kind.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        self.kind.glyph()
    }
}

/// One laid-out region.
#[derive(Clone, Debug)]
pub struct RegionLayout {
    /// Display label.
    pub label: String,
    /// Palette index of the background.
    pub color_index: usize,
    /// Background color.
    pub color: Color,
    /// Vertical extent.
    pub band: Band,
    /// Background rectangle in model space.
    pub band_rect: Rect,
    /// Axis line through the band midline.
    pub axis: Line,
    /// Placed events, in source order.
    pub events: Vec<PlacedEvent>,
}

/// One laid-out segment column.
#[derive(Clone, Debug)]
pub struct SegmentLayout {
    /// Year mapping of the column.
    pub scale: TimeScale,
    /// Caption such as `"2070 BCE - 1600 BCE"`.
    pub caption: String,
    /// Center of the caption within the top margin.
    pub caption_anchor: Point,
    /// Regions, top to bottom.
    pub regions: Vec<RegionLayout>,
}

/// The result of a layout pass.
///
/// A layout never changes once computed. Pan, zoom, hover and visibility
/// toggles only change how it is viewed.
#[derive(Clone, Debug)]
pub struct Layout {
    segments: Vec<SegmentLayout>,
    columns: SegmentColumns,
    palette: Palette,
    model_bounds: Rect,
    degraded_count: usize,
    seed: u64,
}

impl Layout {
    /// Segment columns, left to right.
    #[must_use]
    pub fn segments(&self) -> &[SegmentLayout] {
        &self.segments
    }

    /// Column geometry shared by all segments.
    #[must_use]
    pub fn columns(&self) -> &SegmentColumns {
        &self.columns
    }

    /// Palette the region colors were drawn from.
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The whole canvas in model space, top margin included.
    #[must_use]
    pub fn model_bounds(&self) -> Rect {
        self.model_bounds
    }

    /// Number of degraded placements.
    #[must_use]
    pub fn degraded_count(&self) -> usize {
        self.degraded_count
    }

    /// Seed the layout was computed with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Looks up a placed event.
    #[must_use]
    pub fn event(&self, index: EventIndex) -> Option<&PlacedEvent> {
        self.segments
            .get(index.segment)?
            .regions
            .get(index.region)?
            .events
            .get(index.event)
    }

    /// Every placed event, in document order.
    pub fn events(&self) -> impl Iterator<Item = &PlacedEvent> + '_ {
        self.segments
            .iter()
            .flat_map(|s| &s.regions)
            .flat_map(|r| &r.events)
    }
}

/// Validates `dataset`, assigns region colors and places every event.
///
/// The same dataset, palette and parameters always produce the same layout.
///
/// ```
/// use annals_layout::{LayoutParams, Palette, compute_layout};
/// use annals_model::{Dataset, Event, EventKind, Region, Segment};
///
/// let dataset = Dataset::new(vec![Segment::new(
///     -2070,
///     -1600,
///     vec![Region::new(
///         "Xia",
///         vec![
///             Event::new(-2070, "Yu", EventKind::Leader),
///             Event::new(-2060, "Nine provinces", EventKind::Event),
///         ],
///     )],
/// )]);
///
/// let layout = compute_layout(&dataset, &Palette::default(), &LayoutParams::default()).unwrap();
/// let region = &layout.segments()[0].regions[0];
/// assert_eq!(region.events[0].y, region.band.midline());
/// assert!(!region.events[1].anchored());
/// ```
pub fn compute_layout(
    dataset: &Dataset,
    palette: &Palette,
    params: &LayoutParams,
) -> Result<Layout, LayoutError> {
    let scale_params = &params.scale;
    scale_params.validate()?;
    dataset.validate(scale_params.stack_height)?;
    let columns = SegmentColumns::new(&dataset.segments, scale_params.pixels_per_year)?;

    let mut colors = ColorAssigner::new(palette.len(), dataset.region_counts());
    let mut color_rng = XorShift64::for_stream(params.seed, COLOR_STREAM);
    let mut degraded_count = 0;

    let mut segments = Vec::with_capacity(dataset.segments.len());
    for ((s, segment), scale) in dataset.segments.iter().enumerate().zip(columns.scales()) {
        let bands = BandStack::for_segment(s, segment, scale_params)?;
        let mut regions = Vec::with_capacity(segment.regions.len());

        for ((r, region), &band) in segment.regions.iter().enumerate().zip(bands.bands()) {
            let color_index = colors.color(s, r, &mut color_rng);
            let items: Vec<BandItem> = region
                .events
                .iter()
                .map(|event| BandItem {
                    x: scale.year_to_x(f64::from(event.year)),
                    year: event.year,
                    anchored: event.kind.is_anchored(),
                })
                .collect();

            let mut rng = XorShift64::for_stream(params.seed, region_stream(s, r));
            let placements = place_band(band, &items, &params.placement, &mut rng);

            let events = region
                .events
                .iter()
                .zip(placements)
                .enumerate()
                .map(|(e, (event, placement))| {
                    if placement.degraded {
                        degraded_count += 1;
                        tracing::trace!(
                            segment = s,
                            region = r,
                            event = e,
                            conflicts = placement.conflicts,
                            "degraded placement"
                        );
                    }
                    PlacedEvent {
                        index: EventIndex::new(s, r, e),
                        kind: event.kind,
                        year: event.year,
                        text: event.text.clone(),
                        x: placement.x,
                        y: placement.y,
                        side: placement.side,
                        degraded: placement.degraded,
                    }
                })
                .collect();

            regions.push(RegionLayout {
                label: region.label.clone(),
                color_index,
                color: palette.get(color_index),
                band,
                band_rect: band.rect(scale.origin_x(), scale.width()),
                axis: band.axis(scale.origin_x(), scale.width()),
                events,
            });
        }

        segments.push(SegmentLayout {
            scale: *scale,
            caption: format_span(segment.start_year, segment.end_year),
            caption_anchor: Point::new(
                scale.origin_x() + scale.width() / 2.0,
                scale_params.top_margin / 2.0,
            ),
            regions,
        });
    }

    tracing::debug!(
        segments = segments.len(),
        regions = dataset.region_counts().iter().sum::<usize>(),
        events = dataset.event_count(),
        degraded = degraded_count,
        seed = params.seed,
        "computed layout"
    );

    Ok(Layout {
        segments,
        model_bounds: Rect::new(
            0.0,
            0.0,
            columns.total_width(),
            scale_params.canvas_height(),
        ),
        columns,
        palette: palette.clone(),
        degraded_count,
        seed: params.seed,
    })
}

fn region_stream(segment: usize, region: usize) -> u64 {
    ((segment as u64) << 32) ^ region as u64
}
