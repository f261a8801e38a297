// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::params::{FitMode, ViewParams};
use crate::transform::ViewTransform;

/// Pan and zoom state over the timeline's model space.
///
/// `Viewport` tracks the device rectangle the timeline is drawn into and a
/// uniform scale plus translation mapping model coordinates into it. Every
/// mutator reports whether the mapping changed so callers know when to
/// redraw.
///
/// The scale is always kept within `[min_scale, max_scale]`, so it can never
/// reach zero or go negative.
#[derive(Clone, Debug)]
pub struct Viewport {
    view_rect: Rect,
    model_bounds: Option<Rect>,
    scale: f64,
    translate: Vec2,
    min_scale: f64,
    max_scale: f64,
    zoom_factor: f64,
    fit_mode: FitMode,
}

impl Viewport {
    /// Creates a viewport over `view_rect` with [`ViewParams::default`].
    ///
    /// The initial mapping puts the model origin at the view origin at scale
    /// `1.0`.
    #[must_use]
    pub fn new(view_rect: Rect) -> Self {
        Self::with_params(view_rect, &ViewParams::default())
    }

    /// Creates a viewport over `view_rect` with the given zoom behavior.
    #[must_use]
    pub fn with_params(view_rect: Rect, params: &ViewParams) -> Self {
        let mut vp = Self {
            view_rect,
            model_bounds: None,
            scale: 1.0,
            translate: view_rect.origin().to_vec2(),
            min_scale: 1.0,
            max_scale: 1.0,
            zoom_factor: 1.0,
            fit_mode: FitMode::default(),
        };
        vp.apply_params(params);
        vp
    }

    /// Replaces the zoom behavior, clamping the current scale into the new
    /// limits.
    ///
    /// A `zoom_factor` below one is inverted so that wheel direction stays
    /// consistent; a non-positive one disables wheel zoom.
    pub fn apply_params(&mut self, params: &ViewParams) -> bool {
        let factor = params.zoom_factor;
        self.zoom_factor = if factor >= 1.0 {
            factor
        } else if factor > 0.0 {
            1.0 / factor
        } else {
            1.0
        };
        self.set_scale_limits(params.min_scale, params.max_scale)
    }

    /// The device rectangle the timeline is drawn into.
    #[must_use]
    pub fn view_rect(&self) -> Rect {
        self.view_rect
    }

    /// Sets the device rectangle.
    ///
    /// The model-to-device mapping is left alone: what was drawn at a device
    /// position stays there, and more or less of the model becomes visible.
    pub fn set_view_rect(&mut self, rect: Rect) -> bool {
        if self.view_rect == rect {
            return false;
        }
        self.view_rect = rect;
        true
    }

    /// Model-space extent used by [`Self::fit_model`].
    #[must_use]
    pub fn model_bounds(&self) -> Option<Rect> {
        self.model_bounds
    }

    /// Sets the model-space extent.
    pub fn set_model_bounds(&mut self, bounds: Option<Rect>) {
        self.model_bounds = bounds;
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current device-space offset of the model origin.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    /// Current `(min_scale, max_scale)`.
    #[must_use]
    pub fn scale_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Multiplier applied per wheel step; at least one.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Sets the scale limits.
    ///
    /// The range is normalized so that `min <= max`, and the minimum is kept
    /// positive. The current scale is clamped into the new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) -> bool {
        let (lo, hi) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = lo.max(f64::MIN_POSITIVE);
        self.max_scale = hi.max(self.min_scale);
        self.set_scale(self.scale)
    }

    /// Sets how [`Self::fit_rect`] positions content.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Sets the scale, keeping the translation.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.scale = clamped;
        true
    }

    /// Applies one wheel step at device point `pointer`.
    ///
    /// Negative `delta` (wheel up) zooms in by the zoom factor, positive
    /// `delta` zooms out. Only the sign matters. The model point under the
    /// pointer stays under the pointer unless the scale hits a limit.
    pub fn zoom(&mut self, delta: f64, pointer: Point) -> bool {
        if delta == 0.0 || delta.is_nan() {
            return false;
        }
        let factor = if delta < 0.0 {
            self.zoom_factor
        } else {
            1.0 / self.zoom_factor
        };
        self.zoom_about(pointer, factor)
    }

    /// Multiplies the scale by `factor` around device point `anchor`.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) -> bool {
        if factor <= 0.0 || factor.is_nan() {
            return false;
        }
        let old = self.scale;
        let new = (old * factor).clamp(self.min_scale, self.max_scale);
        if (new - old).abs() < f64::EPSILON {
            return false;
        }
        let model = self.transform().to_model(anchor);
        self.scale = new;
        self.translate = anchor.to_vec2() - model.to_vec2() * new;
        true
    }

    /// Moves the view by a device-space delta.
    pub fn pan(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        self.translate += delta;
        true
    }

    /// Fits `rect` into the view, preserving aspect ratio and respecting the
    /// scale limits.
    ///
    /// Empty rectangles and an empty view are ignored.
    pub fn fit_rect(&mut self, rect: Rect) -> bool {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return false;
        }
        let view = self.view_rect.size();
        if view.width <= 0.0 || view.height <= 0.0 {
            return false;
        }

        let sx = view.width / rect.width();
        let sy = view.height / rect.height();
        let scale = sx.min(sy).clamp(self.min_scale, self.max_scale);
        let (view_anchor, content_anchor) = match self.fit_mode {
            FitMode::Center => (self.view_rect.center(), rect.center()),
            FitMode::AlignMin => (self.view_rect.origin(), rect.origin()),
        };
        let translate = view_anchor.to_vec2() - content_anchor.to_vec2() * scale;
        self.replace(scale, translate)
    }

    /// Fits the model bounds into the view. No-op without bounds.
    pub fn fit_model(&mut self) -> bool {
        match self.model_bounds {
            Some(bounds) => self.fit_rect(bounds),
            None => false,
        }
    }

    /// Moves the view so that model point `model` sits at the view center.
    pub fn center_on(&mut self, model: Point) -> bool {
        let current = self.transform().to_device(model);
        self.pan(self.view_rect.center() - current)
    }

    /// Returns to the home view: scale `1.0` (clamped) with the model origin
    /// at the view origin.
    pub fn reset(&mut self) -> bool {
        let scale = 1.0_f64.clamp(self.min_scale, self.max_scale);
        self.replace(scale, self.view_rect.origin().to_vec2())
    }

    /// A consistent snapshot of scale and translation.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale,
            translate: self.translate,
        }
    }

    /// The part of model space currently inside the view rect.
    #[must_use]
    pub fn visible_model_rect(&self) -> Rect {
        self.transform().to_model_rect(self.view_rect)
    }

    fn replace(&mut self, scale: f64, translate: Vec2) -> bool {
        let changed = self.scale != scale || self.translate != translate;
        self.scale = scale;
        self.translate = translate;
        changed
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::Viewport;
    use crate::{FitMode, ViewParams};

    const VIEW: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn wheel_up_zooms_in_around_the_pointer() {
        let mut vp = Viewport::new(VIEW);
        vp.pan(Vec2::new(-120.0, 15.0));
        let pointer = Point::new(300.0, 200.0);
        let before = vp.transform().to_model(pointer);

        assert!(vp.zoom(-3.0, pointer));
        assert!((vp.scale() - 1.1).abs() < 1e-12);
        assert!(close(vp.transform().to_model(pointer), before));

        assert!(vp.zoom(1.0, pointer));
        assert!((vp.scale() - 1.0).abs() < 1e-12);
        assert!(close(vp.transform().to_model(pointer), before));
    }

    #[test]
    fn zero_wheel_delta_is_ignored() {
        let mut vp = Viewport::new(VIEW);
        assert!(!vp.zoom(0.0, Point::new(10.0, 10.0)));
        assert_eq!(vp.scale(), 1.0);
    }

    #[test]
    fn scale_stays_within_limits() {
        let mut vp = Viewport::new(VIEW);
        let pointer = Point::new(400.0, 300.0);
        for _ in 0..200 {
            vp.zoom(-1.0, pointer);
        }
        assert_eq!(vp.scale(), 20.0);
        for _ in 0..400 {
            vp.zoom(1.0, pointer);
        }
        assert_eq!(vp.scale(), 0.05);
        assert!(!vp.zoom(1.0, pointer));
    }

    #[test]
    fn reversed_limits_are_normalized() {
        let mut vp = Viewport::new(VIEW);
        vp.set_scale_limits(4.0, 2.0);
        assert_eq!(vp.scale_limits(), (2.0, 4.0));
        assert_eq!(vp.scale(), 2.0);

        vp.set_scale_limits(-1.0, 0.0);
        assert!(vp.scale() > 0.0);
    }

    #[test]
    fn pan_adds_to_translation() {
        let mut vp = Viewport::new(VIEW);
        assert!(vp.pan(Vec2::new(5.0, -7.0)));
        assert!(vp.pan(Vec2::new(1.0, 1.0)));
        assert_eq!(vp.translate(), Vec2::new(6.0, -6.0));
        assert!(!vp.pan(Vec2::ZERO));
    }

    #[test]
    fn fit_align_min_puts_content_origin_at_view_origin() {
        let mut vp = Viewport::new(VIEW);
        let content = Rect::new(0.0, 0.0, 1600.0, 730.0);
        vp.set_model_bounds(Some(content));
        assert!(vp.fit_model());
        assert!((vp.scale() - 0.5).abs() < 1e-12);
        assert!(close(vp.transform().to_device(content.origin()), Point::ORIGIN));
        let visible = vp.visible_model_rect();
        assert!(visible.contains(Point::new(1599.0, 729.0)));
    }

    #[test]
    fn fit_center_centers_content() {
        let mut vp = Viewport::new(VIEW);
        vp.set_fit_mode(FitMode::Center);
        let content = Rect::new(-50.0, -25.0, 50.0, 25.0);
        vp.fit_rect(content);
        assert!(close(vp.transform().to_device(content.center()), VIEW.center()));
    }

    #[test]
    fn resize_keeps_the_mapping() {
        let mut vp = Viewport::new(VIEW);
        vp.zoom(-1.0, Point::new(100.0, 100.0));
        let before = vp.transform();
        assert!(vp.set_view_rect(Rect::new(0.0, 0.0, 1024.0, 768.0)));
        assert_eq!(vp.transform(), before);
        assert!(!vp.set_view_rect(Rect::new(0.0, 0.0, 1024.0, 768.0)));
    }

    #[test]
    fn reset_returns_home() {
        let mut vp = Viewport::with_params(
            VIEW,
            &ViewParams {
                zoom_factor: 1.5,
                ..ViewParams::default()
            },
        );
        vp.zoom(-1.0, Point::new(200.0, 200.0));
        vp.pan(Vec2::new(30.0, 30.0));
        assert!(vp.reset());
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.translate(), Vec2::ZERO);
        assert!(!vp.reset());
    }

    #[test]
    fn center_on_moves_point_to_view_center() {
        let mut vp = Viewport::new(VIEW);
        vp.center_on(Point::new(1000.0, 400.0));
        assert!(close(vp.transform().to_device(Point::new(1000.0, 400.0)), VIEW.center()));
    }

    #[test]
    fn small_zoom_factor_is_inverted() {
        let vp = Viewport::with_params(
            VIEW,
            &ViewParams {
                zoom_factor: 0.5,
                ..ViewParams::default()
            },
        );
        assert_eq!(vp.zoom_factor(), 2.0);
    }
}
