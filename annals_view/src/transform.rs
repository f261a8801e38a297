// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

/// A snapshot of the model-to-device mapping.
///
/// `device = model * scale + translate`. Readers take one snapshot per frame
/// or per pointer event so that scale and translation are always consistent
/// with each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform zoom; always positive.
    pub scale: f64,
    /// Device-space offset of the model origin.
    pub translate: Vec2,
}

impl ViewTransform {
    /// The identity mapping.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Maps a model point to device space.
    #[must_use]
    pub fn to_device(&self, model: Point) -> Point {
        (model.to_vec2() * self.scale + self.translate).to_point()
    }

    /// Maps a device point to model space.
    #[must_use]
    pub fn to_model(&self, device: Point) -> Point {
        ((device.to_vec2() - self.translate) / self.scale).to_point()
    }

    /// Maps a model rectangle to device space.
    #[must_use]
    pub fn to_device_rect(&self, model: Rect) -> Rect {
        Rect::from_points(
            self.to_device(model.origin()),
            self.to_device(Point::new(model.x1, model.y1)),
        )
    }

    /// Maps a device rectangle to model space.
    #[must_use]
    pub fn to_model_rect(&self, device: Rect) -> Rect {
        Rect::from_points(
            self.to_model(device.origin()),
            self.to_model(Point::new(device.x1, device.y1)),
        )
    }

    /// The mapping as an affine, for renderers that push a transform.
    #[must_use]
    pub fn affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Converts a device-space length into model units.
    #[must_use]
    pub fn model_length(&self, device: f64) -> f64 {
        device / self.scale
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
