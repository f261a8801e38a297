// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end checks of the layout pass.

use annals_layout::{
    ColorAssigner, LayoutParams, Palette, PlacementParams, Side, XorShift64, compute_layout,
};
use annals_model::{Dataset, Event, EventKind, Region, Segment};
use proptest::prelude::*;

fn xia() -> Dataset {
    Dataset::new(vec![Segment::new(
        -2070,
        -1600,
        vec![Region::new(
            "夏",
            vec![
                Event::new(-2070, "禹", EventKind::Leader),
                Event::new(-2060, "划天下为九州", EventKind::Event),
            ],
        )],
    )])
}

fn spring_and_autumn() -> Dataset {
    let states = ["周", "晋", "齐"];
    let regions = states
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let offset = i32::try_from(i).unwrap();
            Region::new(
                *name,
                vec![
                    Event::new(-770 + offset, "founding", EventKind::King),
                    Event::new(-700 + offset * 3, "reform", EventKind::Politician),
                    Event::new(-650, "alliance", EventKind::Event),
                    Event::new(-650, "battle", EventKind::Military),
                    Event::new(-600 - offset, "scholar", EventKind::Philosopher),
                    Event::new(-520, "chronicle", EventKind::Historian),
                ],
            )
        })
        .collect();
    Dataset::new(vec![
        Segment::new(-1046, -771, vec![Region::new("西周", vec![])]),
        Segment::new(-770, -476, regions),
    ])
}

#[test]
fn xia_scenario() {
    let params = LayoutParams::default();
    let layout = compute_layout(&xia(), &Palette::default(), &params).unwrap();
    let segment = &layout.segments()[0];
    let region = &segment.regions[0];

    let yu = &region.events[0];
    assert_eq!(yu.y, region.band.top + region.band.height / 2.0);
    assert_eq!(yu.side, Side::OnAxis);
    assert_eq!(yu.x, segment.scale.year_to_x(-2070.0));

    let provinces = &region.events[1];
    assert!(!provinces.anchored());
    assert!(provinces.x > segment.scale.year_to_x(-2070.0));
    assert!(region.band.contains_y(provinces.y));
    assert!(
        (provinces.y - region.band.midline()).abs() >= params.placement.min_distance_axis
    );
}

#[test]
fn placement_bounds_hold_across_seeds() {
    let dataset = spring_and_autumn();
    for seed in 0..40 {
        let params = LayoutParams {
            seed,
            ..LayoutParams::default()
        };
        let p = &params.placement;
        let layout = compute_layout(&dataset, &Palette::default(), &params).unwrap();
        for region in layout.segments().iter().flat_map(|s| &s.regions) {
            let band = region.band;
            for event in &region.events {
                if event.kind.is_anchored() {
                    assert_eq!(event.y, band.midline());
                    continue;
                }
                assert!(event.y >= band.top + p.border);
                assert!(event.y <= band.bottom() - p.border);
                assert!((event.y - band.midline()).abs() >= p.min_distance_axis);
            }
        }
    }
}

#[test]
fn non_degraded_free_events_keep_their_distance() {
    let params = LayoutParams {
        seed: 11,
        ..LayoutParams::default()
    };
    let layout = compute_layout(&spring_and_autumn(), &Palette::default(), &params).unwrap();
    for region in layout.segments().iter().flat_map(|s| &s.regions) {
        let free: Vec<_> = region.events.iter().filter(|e| !e.anchored()).collect();
        for (i, later) in free.iter().enumerate() {
            if later.degraded {
                continue;
            }
            for earlier in &free[..i] {
                assert!(
                    (later.y - earlier.y).abs() >= params.placement.min_distance_events,
                    "{} overlaps {}",
                    later.text,
                    earlier.text
                );
            }
        }
    }
}

#[test]
fn same_seed_is_idempotent() {
    let dataset = spring_and_autumn();
    let params = LayoutParams {
        seed: 2024,
        ..LayoutParams::default()
    };
    let a = compute_layout(&dataset, &Palette::default(), &params).unwrap();
    let b = compute_layout(&dataset, &Palette::default(), &params).unwrap();
    assert!(a.events().eq(b.events()));
    let colors = |l: &annals_layout::Layout| {
        l.segments()
            .iter()
            .flat_map(|s| s.regions.iter().map(|r| r.color_index))
            .collect::<Vec<_>>()
    };
    assert_eq!(colors(&a), colors(&b));
}

#[test]
fn same_year_free_events_get_distinct_x() {
    let layout = compute_layout(
        &spring_and_autumn(),
        &Palette::default(),
        &LayoutParams::default(),
    )
    .unwrap();
    let region = &layout.segments()[1].regions[0];
    let alliance = &region.events[2];
    let battle = &region.events[3];
    assert_eq!(alliance.year, battle.year);
    assert_ne!(alliance.x, battle.x);
    assert_eq!(
        (battle.x - alliance.x).abs(),
        PlacementParams::default().fan_out_spacing
    );
}

#[test]
fn adjacent_regions_never_share_a_color() {
    let counts = vec![3, 5, 1, 0, 4, 2];
    for seed in 0..1000 {
        for palette_len in [2, 3, 12] {
            let mut rng = XorShift64::new(seed);
            let mut colors = ColorAssigner::new(palette_len, counts.clone());
            let mut previous = None;
            for (s, &count) in counts.iter().enumerate() {
                for r in 0..count {
                    let c = colors.color(s, r, &mut rng);
                    assert!(c < palette_len);
                    assert_ne!(Some(c), previous, "seed {seed}: ({s}, {r}) repeats");
                    previous = Some(c);
                }
            }
        }
    }
}

#[test]
fn layout_colors_differ_across_segment_boundary() {
    let dataset = spring_and_autumn();
    for seed in 0..100 {
        let params = LayoutParams {
            seed,
            ..LayoutParams::default()
        };
        let layout = compute_layout(&dataset, &Palette::default(), &params).unwrap();
        let flat: Vec<_> = layout
            .segments()
            .iter()
            .flat_map(|s| s.regions.iter().map(|r| r.color_index))
            .collect();
        assert!(flat.windows(2).all(|w| w[0] != w[1]));
    }
}

proptest! {
    #[test]
    fn every_event_is_placed_inside_its_band(
        seed in any::<u64>(),
        years in proptest::collection::vec(0_i32..=100, 0..30),
    ) {
        let events = years
            .iter()
            .enumerate()
            .map(|(i, &year)| {
                let kind = if i % 5 == 0 { EventKind::Leader } else { EventKind::Event };
                Event::new(year, "e", kind)
            })
            .collect();
        let dataset = Dataset::new(vec![Segment::new(
            0,
            100,
            vec![Region::new("a", events), Region::new("b", vec![])],
        )]);
        let params = LayoutParams { seed, ..LayoutParams::default() };
        let layout = compute_layout(&dataset, &Palette::default(), &params).unwrap();
        let region = &layout.segments()[0].regions[0];
        prop_assert_eq!(region.events.len(), years.len());
        for event in &region.events {
            prop_assert!(region.band.contains_y(event.y));
        }
    }
}
