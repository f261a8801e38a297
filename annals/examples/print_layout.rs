// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out a timeline dataset and prints where every event landed.
//!
//! Usage: `cargo run -p annals --example print_layout -- [dataset.json] [seed]`
//!
//! Without arguments the bundled test fixture is used. Set `RUST_LOG=debug`
//! (or `trace`) to see the engine's logging.

use std::process::ExitCode;

use annals::{Config, Side, Timeline, format_year};
use kurbo::Rect;
use tracing_subscriber::EnvFilter;

const FIXTURE: &str = include_str!("../tests/data/timeline.json");

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let json = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) => {
                tracing::error!(%path, %err, "cannot read dataset");
                return ExitCode::FAILURE;
            }
        },
        None => FIXTURE.to_owned(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);

    let config = Config {
        seed,
        ..Config::default()
    };
    let timeline = match Timeline::load_json(&json, config, Rect::new(0.0, 0.0, 1280.0, 800.0)) {
        Ok(timeline) => timeline,
        Err(err) => {
            tracing::error!(%err, "cannot lay out dataset");
            return ExitCode::FAILURE;
        }
    };

    let layout = timeline.layout();
    for segment in layout.segments() {
        println!("== {} ==", segment.caption);
        for region in &segment.regions {
            println!(
                "  [{}] band {:.1}..{:.1}, color #{}",
                region.label,
                region.band.top,
                region.band.bottom(),
                region.color_index
            );
            for event in &region.events {
                let side = match event.side {
                    Side::Above => "above",
                    Side::Below => "below",
                    Side::OnAxis => "axis",
                };
                println!(
                    "    {} {:>9} ({:8.1}, {:6.1}) {:5}{} {}",
                    event.glyph(),
                    format_year(event.year),
                    event.x,
                    event.y,
                    side,
                    if event.degraded { " !" } else { "" },
                    event.text
                );
            }
        }
    }
    println!(
        "{} events, {} degraded, canvas {:.0}x{:.0}",
        layout.events().count(),
        layout.degraded_count(),
        layout.model_bounds().width(),
        layout.model_bounds().height()
    );
    ExitCode::SUCCESS
}
