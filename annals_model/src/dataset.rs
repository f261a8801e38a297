// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::kind::EventKind;
use crate::validate::{self, ModelError};

/// A single dated fact on the timeline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Event {
    /// Calendar year; negative years are BCE.
    pub year: i32,
    /// Label text.
    pub text: String,
    /// Category, selecting glyph and anchoring policy.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: EventKind,
}

impl Event {
    /// Creates an event.
    #[must_use]
    pub fn new(year: i32, text: impl Into<String>, kind: EventKind) -> Self {
        Self {
            year,
            text: text.into(),
            kind,
        }
    }
}

/// A horizontal band of a segment, such as one contemporaneous state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Region {
    /// Display label.
    pub label: String,
    /// Explicit band height. `None` takes an equal share of what is left of
    /// the segment stack.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub height: Option<f64>,
    /// Events of this region, in no particular order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<Event>,
}

impl Region {
    /// Creates a region that takes an equal share of the segment stack.
    #[must_use]
    pub fn new(label: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            label: label.into(),
            height: None,
            events,
        }
    }

    /// Sets an explicit band height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }
}

/// A calendar interval rendered as one vertical slice of the timeline.
///
/// Both ends are inclusive. `start_year` may be larger than `end_year`; the
/// segment is then drawn with time running right to left.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Segment {
    /// Year at the left edge.
    pub start_year: i32,
    /// Year at the right edge.
    pub end_year: i32,
    /// Regions, stacked top to bottom.
    #[cfg_attr(feature = "serde", serde(default))]
    pub regions: Vec<Region>,
}

impl Segment {
    /// Creates a segment.
    #[must_use]
    pub fn new(start_year: i32, end_year: i32, regions: Vec<Region>) -> Self {
        Self {
            start_year,
            end_year,
            regions,
        }
    }

    /// Number of years spanned, `|end - start|`.
    #[must_use]
    pub fn span_years(&self) -> u32 {
        self.end_year.abs_diff(self.start_year)
    }

    /// Returns `true` if `year` lies within the segment, both ends inclusive.
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        let (lo, hi) = if self.start_year <= self.end_year {
            (self.start_year, self.end_year)
        } else {
            (self.end_year, self.start_year)
        };
        (lo..=hi).contains(&year)
    }
}

/// Integer address of an event in a [`Dataset`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventIndex {
    /// Segment position.
    pub segment: usize,
    /// Region position within the segment.
    pub region: usize,
    /// Event position within the region.
    pub event: usize,
}

impl EventIndex {
    /// Creates an index.
    #[must_use]
    pub const fn new(segment: usize, region: usize, event: usize) -> Self {
        Self {
            segment,
            region,
            event,
        }
    }
}

/// The full timeline: segments in left-to-right order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dataset {
    /// Segments, left to right.
    pub segments: Vec<Segment>,
}

impl Dataset {
    /// Creates a dataset.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Checks the dataset against a segment stack of `stack_height`.
    ///
    /// Returns the first problem in document order.
    pub fn validate(&self, stack_height: f64) -> Result<(), ModelError> {
        validate::validate_dataset(self, stack_height)
    }

    /// Looks up an event.
    #[must_use]
    pub fn event(&self, index: EventIndex) -> Option<&Event> {
        self.segments
            .get(index.segment)?
            .regions
            .get(index.region)?
            .events
            .get(index.event)
    }

    /// Iterates every event with its index, in document order.
    pub fn events(&self) -> impl Iterator<Item = (EventIndex, &Event)> + '_ {
        self.segments.iter().enumerate().flat_map(|(s, segment)| {
            segment.regions.iter().enumerate().flat_map(move |(r, region)| {
                region
                    .events
                    .iter()
                    .enumerate()
                    .map(move |(e, event)| (EventIndex::new(s, r, e), event))
            })
        })
    }

    /// Total number of events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.segments
            .iter()
            .flat_map(|s| &s.regions)
            .map(|r| r.events.len())
            .sum()
    }

    /// Number of regions in each segment, in order.
    #[must_use]
    pub fn region_counts(&self) -> Vec<usize> {
        self.segments.iter().map(|s| s.regions.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::{Dataset, Event, EventIndex, Region, Segment};
    use crate::EventKind;

    fn two_segments() -> Dataset {
        Dataset::new(vec![
            Segment::new(
                -3000,
                -2070,
                vec![Region::new(
                    "Antiquity",
                    vec![Event::new(-2900, "Yao", EventKind::Leader)],
                )],
            ),
            Segment::new(
                -781,
                -478,
                vec![
                    Region::new("Yan", vec![Event::new(-690, "Duke Zhuang", EventKind::Leader)]),
                    Region::new(
                        "Qi",
                        vec![
                            Event::new(-685, "Duke Huan", EventKind::Leader),
                            Event::new(-686, "Guan Zhong", EventKind::Politician),
                        ],
                    ),
                ],
            ),
        ])
    }

    #[test]
    fn contains_year_is_inclusive_in_both_directions() {
        let forward = Segment::new(-2070, -1600, Vec::new());
        assert!(forward.contains_year(-2070));
        assert!(forward.contains_year(-1600));
        assert!(!forward.contains_year(-1599));

        let reversed = Segment::new(-1600, -2070, Vec::new());
        assert!(reversed.contains_year(-2070));
        assert!(reversed.contains_year(-1600));
        assert!(!reversed.contains_year(-2071));
        assert_eq!(reversed.span_years(), 470);
    }

    #[test]
    fn events_iterate_in_document_order_with_indices() {
        let data = two_segments();
        let indices: Vec<_> = data.events().map(|(i, _)| i).collect();
        assert_eq!(
            indices,
            [
                EventIndex::new(0, 0, 0),
                EventIndex::new(1, 0, 0),
                EventIndex::new(1, 1, 0),
                EventIndex::new(1, 1, 1),
            ]
        );
        assert_eq!(data.event_count(), 4);
        assert_eq!(data.region_counts(), [1, 2]);
    }

    #[test]
    fn event_lookup_by_index() {
        let data = two_segments();
        let guan = data.event(EventIndex::new(1, 1, 1)).unwrap();
        assert_eq!(guan.text, "Guan Zhong");
        assert!(data.event(EventIndex::new(1, 2, 0)).is_none());
        assert!(data.event(EventIndex::new(5, 0, 0)).is_none());
    }
}
