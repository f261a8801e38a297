// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-marker hit testing.

use annals_view::ViewTransform;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Tolerances for [`hit_test`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HitParams {
    /// Maximum distance, in model units, between the pointer and a marker.
    pub radius: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self { radius: 15.0 }
    }
}

/// The marker under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit<K> {
    /// Key of the hit candidate.
    pub key: K,
    /// Model-space distance from the pointer.
    pub distance: f64,
}

/// Finds the candidate closest to a device-space pointer.
///
/// The pointer is mapped into model space with `transform`, then compared
/// against each candidate's model position. The closest candidate within
/// `params.radius` wins; on a tie the one seen first is kept. Returns `None`
/// when nothing is in range.
///
/// ```
/// use annals_hit::{HitParams, hit_test};
/// use annals_view::ViewTransform;
/// use kurbo::{Point, Vec2};
///
/// let markers = [("yu", Point::new(0.0, 380.0)), ("qi", Point::new(50.0, 300.0))];
/// let view = ViewTransform { scale: 2.0, translate: Vec2::new(10.0, 0.0) };
///
/// let pointer = view.to_device(Point::new(48.0, 302.0));
/// let hit = hit_test(markers, pointer, &view, &HitParams::default()).unwrap();
/// assert_eq!(hit.key, "qi");
///
/// let far = view.to_device(Point::new(500.0, 0.0));
/// assert!(hit_test(markers, far, &view, &HitParams::default()).is_none());
/// ```
pub fn hit_test<K, I>(
    candidates: I,
    pointer: Point,
    transform: &ViewTransform,
    params: &HitParams,
) -> Option<Hit<K>>
where
    I: IntoIterator<Item = (K, Point)>,
{
    let model = transform.to_model(pointer);
    let limit_sq = params.radius * params.radius;
    let mut best: Option<(K, f64)> = None;
    for (key, pos) in candidates {
        let d_sq = (pos - model).hypot2();
        if d_sq > limit_sq {
            continue;
        }
        if best.as_ref().is_none_or(|(_, b)| d_sq < *b) {
            best = Some((key, d_sq));
        }
    }
    best.map(|(key, d_sq)| Hit {
        key,
        distance: d_sq.sqrt(),
    })
}
