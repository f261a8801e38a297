// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use annals_hit::{HitParams, hit_test};
use annals_view::ViewTransform;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn markers(n: usize, seed: u64) -> Vec<(usize, Point)> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|i| (i, Point::new(rng.next_f64() * 20_000.0, 30.0 + rng.next_f64() * 700.0)))
        .collect()
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("annals_hit_test");
    let view = ViewTransform {
        scale: 0.75,
        translate: Vec2::new(-2_000.0, 10.0),
    };
    let params = HitParams::default();

    for &n in &[100_usize, 1_000, 10_000] {
        let candidates = markers(n, 0x417_0000_0000_0001);
        let pointers: Vec<Point> = candidates
            .iter()
            .step_by(n / 16)
            .map(|(_, p)| view.to_device(*p) + Vec2::new(3.0, -2.0))
            .collect();
        group.bench_function(format!("nearest(n={n})"), |b| {
            b.iter(|| {
                for &pointer in &pointers {
                    black_box(hit_test(
                        candidates.iter().copied(),
                        pointer,
                        &view,
                        &params,
                    ));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hit_test);
criterion_main!(benches);
