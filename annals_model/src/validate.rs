// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load-time validation.
//!
//! Everything that can go wrong with a dataset is detected here, before any
//! layout pass runs. Layout, viewport, and hit testing then operate on
//! validated data and have no error paths of their own.

use alloc::vec::Vec;

use crate::dataset::{Dataset, Segment};

/// Relative tolerance used when comparing summed region heights with the
/// segment stack height.
pub const HEIGHT_TOLERANCE: f64 = 1e-6;

/// A dataset that cannot be laid out.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A segment spans zero years.
    #[error("segment {segment} has an empty time span ({start_year}..{end_year})")]
    InvalidSegment {
        /// Segment position.
        segment: usize,
        /// Start year of the segment.
        start_year: i32,
        /// End year of the segment.
        end_year: i32,
    },
    /// An event lies outside its segment's interval.
    #[error(
        "event {event} of region {region} in segment {segment} is dated {year}, outside {start_year}..={end_year}"
    )]
    InvalidEvent {
        /// Segment position.
        segment: usize,
        /// Region position.
        region: usize,
        /// Event position.
        event: usize,
        /// Year of the offending event.
        year: i32,
        /// Start year of the segment.
        start_year: i32,
        /// End year of the segment.
        end_year: i32,
    },
    /// Explicit region heights do not fit the segment stack.
    #[error(
        "region heights of segment {segment} sum to {explicit_total} but the stack is {stack_height}"
    )]
    InvalidRegionHeights {
        /// Segment position.
        segment: usize,
        /// Sum of the explicit heights, or the offending height itself when
        /// one is not finite and positive.
        explicit_total: f64,
        /// Height every segment stack must fill.
        stack_height: f64,
    },
}

pub(crate) fn validate_dataset(dataset: &Dataset, stack_height: f64) -> Result<(), ModelError> {
    for (s, segment) in dataset.segments.iter().enumerate() {
        if segment.start_year == segment.end_year {
            return Err(ModelError::InvalidSegment {
                segment: s,
                start_year: segment.start_year,
                end_year: segment.end_year,
            });
        }
        for (r, region) in segment.regions.iter().enumerate() {
            for (e, event) in region.events.iter().enumerate() {
                if !segment.contains_year(event.year) {
                    return Err(ModelError::InvalidEvent {
                        segment: s,
                        region: r,
                        event: e,
                        year: event.year,
                        start_year: segment.start_year,
                        end_year: segment.end_year,
                    });
                }
            }
        }
        resolve_region_heights(s, segment, stack_height)?;
    }
    Ok(())
}

/// Resolves the band height of every region of `segment`.
///
/// Regions without an explicit height share what the explicit ones leave of
/// `stack_height` equally. When every region is explicit the heights must sum
/// to `stack_height` (within [`HEIGHT_TOLERANCE`], relative); otherwise the
/// explicit heights must leave a positive remainder.
///
/// ```
/// use annals_model::{Region, Segment, resolve_region_heights};
///
/// let segment = Segment::new(
///     -781,
///     -478,
///     vec![
///         Region::new("Yan", vec![]).with_height(100.0),
///         Region::new("Chu", vec![]),
///         Region::new("Qi", vec![]),
///     ],
/// );
/// let heights = resolve_region_heights(0, &segment, 700.0).unwrap();
/// assert_eq!(heights, [100.0, 300.0, 300.0]);
/// ```
pub fn resolve_region_heights(
    segment_index: usize,
    segment: &Segment,
    stack_height: f64,
) -> Result<Vec<f64>, ModelError> {
    let mut explicit_total = 0.0;
    let mut implicit = 0_usize;
    for region in &segment.regions {
        match region.height {
            Some(h) if h.is_finite() && h > 0.0 => explicit_total += h,
            Some(h) => {
                return Err(ModelError::InvalidRegionHeights {
                    segment: segment_index,
                    explicit_total: h,
                    stack_height,
                });
            }
            None => implicit += 1,
        }
    }

    let tolerance = HEIGHT_TOLERANCE * stack_height.abs().max(1.0);
    let remainder = stack_height - explicit_total;
    let fits = if implicit == 0 {
        segment.regions.is_empty() || remainder.abs() <= tolerance
    } else {
        remainder > tolerance
    };
    if !fits {
        return Err(ModelError::InvalidRegionHeights {
            segment: segment_index,
            explicit_total,
            stack_height,
        });
    }

    let share = if implicit == 0 {
        0.0
    } else {
        remainder / implicit as f64
    };
    Ok(segment
        .regions
        .iter()
        .map(|region| region.height.unwrap_or(share))
        .collect())
}
