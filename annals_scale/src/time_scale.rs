// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use annals_model::Segment;

/// Years cannot be mapped onto model space.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A segment spans zero years.
    #[error("cannot map years onto a zero-year span ({start_year}..{end_year})")]
    ZeroSpan {
        /// Start year of the degenerate span.
        start_year: i32,
        /// End year of the degenerate span.
        end_year: i32,
    },
    /// `pixels_per_year` is not finite and positive.
    #[error("pixels per year must be finite and positive, got {0}")]
    PixelsPerYear(f64),
    /// `stack_height` is not finite and positive.
    #[error("stack height must be finite and positive, got {0}")]
    StackHeight(f64),
    /// `top_margin` is not finite and non-negative.
    #[error("top margin must be finite and non-negative, got {0}")]
    TopMargin(f64),
}

/// Linear mapping from calendar years onto one segment column.
///
/// `year_to_x(start_year) == origin_x` and
/// `year_to_x(end_year) == origin_x + width` hold exactly. For a reversed
/// segment (`start_year > end_year`) later years map further left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    start_year: i32,
    end_year: i32,
    origin_x: f64,
    width: f64,
}

impl TimeScale {
    /// Creates a scale for `[start_year, end_year]` starting at `origin_x`.
    ///
    /// The column is `|end_year - start_year| * pixels_per_year` wide.
    /// `pixels_per_year` must be finite and positive.
    pub fn new(
        start_year: i32,
        end_year: i32,
        origin_x: f64,
        pixels_per_year: f64,
    ) -> Result<Self, DomainError> {
        if !(pixels_per_year.is_finite() && pixels_per_year > 0.0) {
            return Err(DomainError::PixelsPerYear(pixels_per_year));
        }
        if start_year == end_year {
            return Err(DomainError::ZeroSpan {
                start_year,
                end_year,
            });
        }
        let span = f64::from(end_year.abs_diff(start_year));
        Ok(Self {
            start_year,
            end_year,
            origin_x,
            width: span * pixels_per_year,
        })
    }

    /// Creates the scale for `segment` starting at `origin_x`.
    pub fn for_segment(
        segment: &Segment,
        origin_x: f64,
        pixels_per_year: f64,
    ) -> Result<Self, DomainError> {
        Self::new(
            segment.start_year,
            segment.end_year,
            origin_x,
            pixels_per_year,
        )
    }

    /// Year at the left edge.
    #[must_use]
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Year at the right edge.
    #[must_use]
    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Left edge in model pixels.
    #[must_use]
    pub fn origin_x(&self) -> f64 {
        self.origin_x
    }

    /// Number of years covered, regardless of direction.
    #[must_use]
    pub fn span(&self) -> u32 {
        self.end_year.abs_diff(self.start_year)
    }

    /// Column width in model pixels.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Right edge in model pixels.
    #[must_use]
    pub fn end_x(&self) -> f64 {
        self.origin_x + self.width
    }

    /// Maps a (possibly fractional) year to model X.
    #[must_use]
    pub fn year_to_x(&self, year: f64) -> f64 {
        let start = f64::from(self.start_year);
        let denom = f64::from(self.end_year) - start;
        self.origin_x + ((year - start) / denom) * self.width
    }

    /// Maps a model X back to a fractional year. Inverse of [`Self::year_to_x`].
    #[must_use]
    pub fn x_to_year(&self, x: f64) -> f64 {
        let start = f64::from(self.start_year);
        let denom = f64::from(self.end_year) - start;
        start + ((x - self.origin_x) / self.width) * denom
    }

    /// Returns `true` if `x` lies within the column, left edge inclusive and
    /// right edge exclusive.
    #[must_use]
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.origin_x && x < self.end_x()
    }
}

/// The column of every segment, placed left to right without gaps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentColumns {
    scales: Vec<TimeScale>,
}

impl SegmentColumns {
    /// Lays out `segments` left to right. Column origins are the prefix sum of
    /// the preceding widths.
    pub fn new(segments: &[Segment], pixels_per_year: f64) -> Result<Self, DomainError> {
        let mut scales = Vec::with_capacity(segments.len());
        let mut origin = 0.0;
        for segment in segments {
            let scale = TimeScale::for_segment(segment, origin, pixels_per_year)?;
            origin = scale.end_x();
            scales.push(scale);
        }
        Ok(Self { scales })
    }

    /// Scale of segment `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TimeScale> {
        self.scales.get(index)
    }

    /// All scales, left to right.
    #[must_use]
    pub fn scales(&self) -> &[TimeScale] {
        &self.scales
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Returns `true` if there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Sum of all column widths.
    #[must_use]
    pub fn total_width(&self) -> f64 {
        self.scales.last().map_or(0.0, TimeScale::end_x)
    }

    /// Index of the column containing model `x`, if any.
    #[must_use]
    pub fn column_at_x(&self, x: f64) -> Option<usize> {
        let idx = self.scales.partition_point(|s| s.end_x() <= x);
        self.scales
            .get(idx)
            .filter(|s| s.contains_x(x))
            .map(|_| idx)
    }

    /// Fractional year under model `x`, with the column it falls in.
    #[must_use]
    pub fn year_at_x(&self, x: f64) -> Option<(usize, f64)> {
        let idx = self.column_at_x(x)?;
        Some((idx, self.scales[idx].x_to_year(x)))
    }
}
