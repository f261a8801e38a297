// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use annals_hit::HitParams;
use annals_layout::{LayoutParams, PlacementParams};
use annals_scale::ScaleParams;
use annals_view::ViewParams;
use serde::{Deserialize, Serialize};

use crate::Error;

/// All tunables of a [`Timeline`](crate::Timeline).
///
/// Every field has a default, so a partial JSON document only overrides what
/// it names:
///
/// ```
/// use annals::Config;
///
/// let config = Config::from_json(r#"{ "seed": 42, "placement": { "border": 20 } }"#).unwrap();
/// assert_eq!(config.seed, 42);
/// assert_eq!(config.placement.border, 20.0);
/// assert_eq!(config.placement.max_attempts, 100);
/// assert_eq!(config.scale.pixels_per_year, 5.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Time and band geometry.
    pub scale: ScaleParams,
    /// Collision search tuning.
    pub placement: PlacementParams,
    /// Zoom behavior.
    pub view: ViewParams,
    /// Pointer hit tolerance.
    pub hit: HitParams,
    /// Seed for region colors and event placement.
    pub seed: u64,
}

impl Config {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// The subset of the configuration that affects layout.
    #[must_use]
    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            scale: self.scale,
            placement: self.placement,
            seed: self.seed,
        }
    }
}
