// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use annals_layout::{
    BandItem, LayoutParams, Palette, PlacementParams, XorShift64, compute_layout, place_band,
};
use annals_model::{Dataset, Event, EventKind, Region, Segment};
use annals_scale::Band;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn year_in(&mut self, start: i32, span: u32) -> i32 {
        start + (self.next_u32() % span) as i32
    }
}

fn band_items(n: usize, seed: u64) -> Vec<BandItem> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|i| {
            let year = rng.year_in(-2000, 500);
            BandItem {
                x: f64::from(year + 2000) * 5.0,
                year,
                anchored: i % 7 == 0,
            }
        })
        .collect()
}

fn synthetic_dataset(segments: usize, regions: usize, events: usize, seed: u64) -> Dataset {
    let mut rng = Lcg::new(seed);
    let segments = (0..segments)
        .map(|s| {
            let start = -3000 + (s as i32) * 300;
            let regions = (0..regions)
                .map(|r| {
                    let events = (0..events)
                        .map(|e| {
                            let kind = EventKind::ALL[(e + r) % EventKind::ALL.len()];
                            Event::new(rng.year_in(start, 300), "event", kind)
                        })
                        .collect();
                    Region::new(format!("region {r}"), events)
                })
                .collect();
            Segment::new(start, start + 300, regions)
        })
        .collect();
    Dataset::new(segments)
}

fn bench_place_band(c: &mut Criterion) {
    let mut group = c.benchmark_group("annals_place_band");
    let band = Band {
        top: 30.0,
        height: 700.0,
    };
    let params = PlacementParams::default();

    for &n in &[8_usize, 32, 128] {
        let items = band_items(n, 0xA11A_0000_0000_0001);
        group.bench_function(format!("place_band(n={n})"), |b| {
            b.iter_batched(
                || XorShift64::new(7),
                |mut rng| black_box(place_band(band, &items, &params, &mut rng)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_compute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("annals_compute_layout");
    group.sample_size(30);
    let palette = Palette::default();
    let params = LayoutParams::default();

    for &(segments, regions, events) in &[(5_usize, 1_usize, 12_usize), (20, 4, 20), (50, 6, 40)] {
        let dataset = synthetic_dataset(segments, regions, events, 0xA11A_0000_0000_0002);
        group.bench_function(
            format!("compute_layout(s={segments},r={regions},e={events})"),
            |b| b.iter(|| black_box(compute_layout(&dataset, &palette, &params))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_place_band, bench_compute_layout);
criterion_main!(benches);
