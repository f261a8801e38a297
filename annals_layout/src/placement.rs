// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision-avoiding vertical placement of event markers within a band.
//!
//! ## Policy
//!
//! - Anchored events sit exactly on the band midline and are never moved.
//! - Free events go above or below the axis (picked at random per event). They
//!   must stay `border` away from the band edges, at least
//!   `min_distance_axis` away from the midline, and at least
//!   `min_distance_events` (in Y) away from every free event placed before
//!   them anywhere in the band.
//! - Candidates are sampled uniformly from the chosen half of the band. The
//!   first conflict-free candidate wins; once the attempt budget runs out the
//!   candidate with the fewest conflicts is kept and the placement is flagged
//!   as degraded. Placement never fails.
//! - Events that share a year are fanned out horizontally around their common
//!   X before any vertical placement.
//!
//! Processing is greedy and follows input order: an event only avoids events
//! placed before it.

use alloc::vec::Vec;

use annals_scale::Band;
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::rng::RandomSource;

/// Tuning constants for [`place_band`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementParams {
    /// Minimum distance between a free event and the band's top and bottom
    /// edges.
    pub border: f64,
    /// Minimum distance between a free event and the band midline.
    pub min_distance_axis: f64,
    /// Minimum vertical distance between two free events of the same band.
    pub min_distance_events: f64,
    /// Candidate positions sampled per free event.
    pub max_attempts: u32,
    /// Horizontal spacing between events that share a year.
    pub fan_out_spacing: f64,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            border: 30.0,
            min_distance_axis: 40.0,
            min_distance_events: 40.0,
            max_attempts: 100,
            fan_out_spacing: 60.0,
        }
    }
}

/// Which side of the band axis an event was placed on.
///
/// Label drawing uses this to print the text and year call-out on the side
/// facing away from the axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the midline (smaller Y).
    Above,
    /// Below the midline (larger Y).
    Below,
    /// Exactly on the midline: anchored events, and free events forced into
    /// a band with no height.
    OnAxis,
}

/// One event to place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandItem {
    /// Base X from the time scale, before fan-out.
    pub x: f64,
    /// Year, used to detect time-coincident events.
    pub year: i32,
    /// Whether the event is pinned to the midline.
    pub anchored: bool,
}

/// Result of placing one [`BandItem`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// X after fan-out.
    pub x: f64,
    /// Placed Y.
    pub y: f64,
    /// Side of the axis.
    pub side: Side,
    /// Number of earlier free events closer than `min_distance_events`.
    pub conflicts: usize,
    /// `true` if some constraint could not be met.
    pub degraded: bool,
}

impl Placement {
    /// Returns `true` for placements above the axis.
    #[must_use]
    pub fn above_axis(&self) -> bool {
        self.side == Side::Above
    }
}

/// Places every item of one band. The result is in input order.
///
/// ```
/// use annals_layout::{BandItem, PlacementParams, Side, XorShift64, place_band};
/// use annals_scale::Band;
///
/// let band = Band { top: 30.0, height: 700.0 };
/// let items = [
///     BandItem { x: 0.0, year: -2070, anchored: true },
///     BandItem { x: 50.0, year: -2060, anchored: false },
/// ];
/// let placed = place_band(band, &items, &PlacementParams::default(), &mut XorShift64::new(1));
///
/// assert_eq!(placed[0].y, band.midline());
/// assert_eq!(placed[0].side, Side::OnAxis);
/// assert_ne!(placed[1].side, Side::OnAxis);
/// ```
pub fn place_band(
    band: Band,
    items: &[BandItem],
    params: &PlacementParams,
    rng: &mut impl RandomSource,
) -> Vec<Placement> {
    let fan = fan_out_offsets(items, params.fan_out_spacing);
    let mid = band.midline();
    let mut free_ys: Vec<f64> = Vec::new();

    items
        .iter()
        .zip(fan)
        .map(|(item, dx)| {
            let x = item.x + dx;
            if item.anchored {
                return Placement {
                    x,
                    y: mid,
                    side: Side::OnAxis,
                    conflicts: 0,
                    degraded: false,
                };
            }
            let (y, side, conflicts, forced) = place_free(band, &free_ys, params, rng);
            free_ys.push(y);
            Placement {
                x,
                y,
                side,
                conflicts,
                degraded: forced || conflicts > 0,
            }
        })
        .collect()
}

/// Horizontal offset of every item, spreading same-year items around their
/// shared X: `(index - (n - 1) / 2) * spacing`.
fn fan_out_offsets(items: &[BandItem], spacing: f64) -> Vec<f64> {
    let mut groups: HashMap<i32, SmallVec<[usize; 4]>> = HashMap::new();
    for (i, item) in items.iter().enumerate() {
        groups.entry(item.year).or_default().push(i);
    }

    let mut offsets = alloc::vec![0.0; items.len()];
    for members in groups.values().filter(|m| m.len() > 1) {
        let center = (members.len() - 1) as f64 / 2.0;
        for (rank, &i) in members.iter().enumerate() {
            offsets[i] = (rank as f64 - center) * spacing;
        }
    }
    offsets
}

/// Samples a Y for one free event. Returns `(y, side, conflicts, forced)`,
/// where `forced` means the band had no admissible half-range.
fn place_free(
    band: Band,
    placed: &[f64],
    params: &PlacementParams,
    rng: &mut impl RandomSource,
) -> (f64, Side, usize, bool) {
    let mid = band.midline();
    let top = band.top + params.border;
    let bottom = band.bottom() - params.border;
    let above = (top, mid - params.min_distance_axis);
    let below = (mid + params.min_distance_axis, bottom);

    let preferred = if rng.coin() { Side::Above } else { Side::Below };
    let range_of = |side| if side == Side::Above { above } else { below };
    let other = if preferred == Side::Above {
        Side::Below
    } else {
        Side::Above
    };

    let side = [preferred, other]
        .into_iter()
        .find(|&s| range_of(s).0 <= range_of(s).1);
    let Some(side) = side else {
        // Neither half fits. Hug the axis clearance on the preferred side as
        // closely as the border allows; with no room inside the border, go
        // halfway to the band edge. The side always matches the position.
        let room = if top < mid {
            mid - top
        } else {
            band.height / 4.0
        };
        let offset = params.min_distance_axis.min(room);
        if offset.is_nan() || offset <= 0.0 {
            return (mid, Side::OnAxis, count_conflicts(placed, mid, params), true);
        }
        let y = if preferred == Side::Above {
            mid - offset
        } else {
            mid + offset
        };
        return (y, preferred, count_conflicts(placed, y, params), true);
    };

    let (lo, hi) = range_of(side);
    let mut best: Option<(f64, usize)> = None;
    for _ in 0..params.max_attempts.max(1) {
        let y = lo + rng.next_f64() * (hi - lo);
        let conflicts = count_conflicts(placed, y, params);
        if best.is_none_or(|(_, fewest)| conflicts < fewest) {
            best = Some((y, conflicts));
        }
        if conflicts == 0 {
            break;
        }
    }
    let (y, conflicts) = best.unwrap_or((lo, 0));
    (y, side, conflicts, false)
}

fn count_conflicts(placed: &[f64], y: f64, params: &PlacementParams) -> usize {
    placed
        .iter()
        .filter(|&&other| (other - y).abs() < params.min_distance_events)
        .count()
}
