// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::DomainError;

/// Fixed model-space dimensions of the timeline canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScaleParams {
    /// Horizontal pixels per calendar year.
    pub pixels_per_year: f64,
    /// Height every segment's region stack fills.
    pub stack_height: f64,
    /// Space above the first band, reserved for segment captions.
    pub top_margin: f64,
}

impl ScaleParams {
    /// Checks that the parameters describe a non-degenerate canvas.
    ///
    /// ```
    /// use annals_scale::{DomainError, ScaleParams};
    ///
    /// assert!(ScaleParams::default().validate().is_ok());
    /// let flat = ScaleParams { stack_height: 0.0, ..ScaleParams::default() };
    /// assert_eq!(flat.validate(), Err(DomainError::StackHeight(0.0)));
    /// ```
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(self.pixels_per_year.is_finite() && self.pixels_per_year > 0.0) {
            return Err(DomainError::PixelsPerYear(self.pixels_per_year));
        }
        if !(self.stack_height.is_finite() && self.stack_height > 0.0) {
            return Err(DomainError::StackHeight(self.stack_height));
        }
        if !(self.top_margin.is_finite() && self.top_margin >= 0.0) {
            return Err(DomainError::TopMargin(self.top_margin));
        }
        Ok(())
    }

    /// Total model height: top margin plus the region stack.
    #[must_use]
    pub fn canvas_height(&self) -> f64 {
        self.top_margin + self.stack_height
    }
}

impl Default for ScaleParams {
    fn default() -> Self {
        Self {
            pixels_per_year: 5.0,
            stack_height: 700.0,
            top_margin: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScaleParams;
    use crate::DomainError;

    #[test]
    fn degenerate_parameters_are_rejected() {
        let base = ScaleParams::default();
        let cases = [
            (
                ScaleParams {
                    pixels_per_year: -5.0,
                    ..base
                },
                DomainError::PixelsPerYear(-5.0),
            ),
            (
                ScaleParams {
                    stack_height: -700.0,
                    ..base
                },
                DomainError::StackHeight(-700.0),
            ),
            (
                ScaleParams {
                    top_margin: -1.0,
                    ..base
                },
                DomainError::TopMargin(-1.0),
            ),
        ];
        for (params, expected) in cases {
            assert_eq!(params.validate(), Err(expected));
        }
    }

    #[test]
    fn nan_parameters_are_rejected() {
        let base = ScaleParams::default();
        for params in [
            ScaleParams {
                pixels_per_year: f64::NAN,
                ..base
            },
            ScaleParams {
                stack_height: f64::NAN,
                ..base
            },
            ScaleParams {
                top_margin: f64::INFINITY,
                ..base
            },
        ] {
            assert!(params.validate().is_err(), "{params:?} should be rejected");
        }
    }

    #[test]
    fn zero_top_margin_is_allowed() {
        let params = ScaleParams {
            top_margin: 0.0,
            ..ScaleParams::default()
        };
        assert_eq!(params.validate(), Ok(()));
    }
}
