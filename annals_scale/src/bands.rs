// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use annals_model::{ModelError, Segment, resolve_region_heights};
use kurbo::{Line, Point, Rect};

use crate::params::ScaleParams;

/// Vertical extent of one region within its segment column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    /// Top edge in model pixels.
    pub top: f64,
    /// Band height in model pixels.
    pub height: f64,
}

impl Band {
    /// Bottom edge in model pixels.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// The horizontal axis of the band: `top + height / 2`.
    #[must_use]
    pub fn midline(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// The band as a rectangle spanning `[x0, x0 + width]`.
    #[must_use]
    pub fn rect(&self, x0: f64, width: f64) -> Rect {
        Rect::new(x0, self.top, x0 + width, self.bottom())
    }

    /// The axis line spanning `[x0, x0 + width]`.
    #[must_use]
    pub fn axis(&self, x0: f64, width: f64) -> Line {
        let y = self.midline();
        Line::new(Point::new(x0, y), Point::new(x0 + width, y))
    }

    /// Returns `true` if `y` lies within the band, top inclusive and bottom
    /// exclusive.
    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Regions of one segment stacked top to bottom below a top margin.
///
/// Band origins are the prefix sum of the preceding heights.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BandStack {
    bands: Vec<Band>,
}

impl BandStack {
    /// Stacks bands of the given heights starting at `top_margin`.
    #[must_use]
    pub fn new(top_margin: f64, heights: &[f64]) -> Self {
        let mut top = top_margin;
        let bands = heights
            .iter()
            .map(|&height| {
                let band = Band { top, height };
                top += height;
                band
            })
            .collect();
        Self { bands }
    }

    /// Stacks the regions of `segment`, resolving explicit and equal-share
    /// heights against `params.stack_height`.
    pub fn for_segment(
        segment_index: usize,
        segment: &Segment,
        params: &ScaleParams,
    ) -> Result<Self, ModelError> {
        let heights = resolve_region_heights(segment_index, segment, params.stack_height)?;
        Ok(Self::new(params.top_margin, &heights))
    }

    /// Band of region `index`.
    #[must_use]
    pub fn band(&self, index: usize) -> Option<Band> {
        self.bands.get(index).copied()
    }

    /// All bands, top to bottom.
    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Number of bands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// Returns `true` if the stack has no bands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Sum of all band heights.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.bands.iter().map(|b| b.height).sum()
    }

    /// Index of the band containing model `y`, if any.
    #[must_use]
    pub fn band_at_y(&self, y: f64) -> Option<usize> {
        let idx = self.bands.partition_point(|b| b.bottom() <= y);
        self.bands
            .get(idx)
            .filter(|b| b.contains_y(y))
            .map(|_| idx)
    }
}
