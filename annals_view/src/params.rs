// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Zoom behavior of a [`Viewport`](crate::Viewport).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewParams {
    /// Scale multiplier applied per wheel step.
    pub zoom_factor: f64,
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            zoom_factor: 1.1,
            min_scale: 0.05,
            max_scale: 20.0,
        }
    }
}

/// How fitted content is positioned inside the view.
///
/// Consulted by [`Viewport::fit_rect`](crate::Viewport::fit_rect).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum FitMode {
    /// Center the fitted content within the view rect.
    Center,
    /// Align the top-left corner of the content with the view origin.
    ///
    /// This is how a timeline opens: earliest segment at the left edge,
    /// captions at the top.
    #[default]
    AlignMin,
}
