// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use annals_hit::{HitParams, HoverChange, HoverState, hit_test};
use annals_layout::{Layout, Palette, PlacedEvent, compute_layout};
use annals_model::{Dataset, EventIndex, EventKind, KindSet};
use annals_view::{DragState, Viewport};
use kurbo::{Point, Rect};

use crate::frame::{EventScene, Frame, RegionScene, SegmentScene};
use crate::{Config, Error, Interaction, InteractionOutcome};

/// One row of the kind legend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    /// The kind.
    pub kind: EventKind,
    /// Marker glyph.
    pub glyph: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Whether events of this kind are currently shown.
    pub visible: bool,
}

/// An interactive timeline session.
///
/// The lifecycle is explicit:
/// - [`Timeline::load`] validates the dataset, assigns colors, places every
///   event and puts the viewport at its home position.
/// - [`Timeline::relayout`] recomputes everything for a new [`Config`].
/// - [`Timeline::on_resize`] and [`Timeline::on_interaction`] only touch the
///   viewport and hover state.
/// - Visibility toggles only filter what [`Timeline::frame`] emits.
///
/// Hover always agrees with [`Timeline::event_at`] at the last known pointer
/// position: it is recomputed whenever the view, the layout or the visible
/// kinds change.
///
/// The layout is shared as an [`Arc`], so it can be handed to other readers
/// without copying and never changes under them.
#[derive(Clone, Debug)]
pub struct Timeline {
    config: Config,
    palette: Palette,
    dataset: Dataset,
    layout: Arc<Layout>,
    viewport: Viewport,
    drag: DragState,
    hover: HoverState<EventIndex>,
    pointer: Option<Point>,
    visible: KindSet,
}

impl Timeline {
    /// Lays out `dataset` and opens a session drawn into `view_rect`.
    pub fn load(dataset: Dataset, config: Config, view_rect: Rect) -> Result<Self, Error> {
        Self::load_with_palette(dataset, config, Palette::default(), view_rect)
    }

    /// Like [`Timeline::load`], with region colors drawn from `palette`.
    pub fn load_with_palette(
        dataset: Dataset,
        config: Config,
        palette: Palette,
        view_rect: Rect,
    ) -> Result<Self, Error> {
        let layout = Self::compute(&dataset, &palette, &config)?;
        let mut viewport = Viewport::with_params(view_rect, &config.view);
        viewport.set_model_bounds(Some(layout.model_bounds()));
        viewport.reset();
        tracing::info!(
            segments = dataset.segments.len(),
            events = dataset.event_count(),
            seed = config.seed,
            "loaded timeline"
        );
        Ok(Self {
            config,
            palette,
            dataset,
            layout,
            viewport,
            drag: DragState::default(),
            hover: HoverState::new(),
            pointer: None,
            visible: KindSet::ALL,
        })
    }

    /// Parses a JSON dataset and loads it.
    pub fn load_json(json: &str, config: Config, view_rect: Rect) -> Result<Self, Error> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::load(dataset, config, view_rect)
    }

    /// Recomputes colors and placement under `config`.
    ///
    /// On error the session is left unchanged. The current pan and zoom are
    /// kept, clamped to the new limits; hover is recomputed under the pointer.
    pub fn relayout(&mut self, config: Config) -> Result<(), Error> {
        let layout = Self::compute(&self.dataset, &self.palette, &config)?;
        self.viewport.apply_params(&config.view);
        self.viewport.set_model_bounds(Some(layout.model_bounds()));
        self.layout = layout;
        self.config = config;
        self.hover.clear();
        self.refresh_hover();
        tracing::info!(seed = config.seed, "relaid out timeline");
        Ok(())
    }

    /// Replaces the region palette and recomputes the layout.
    pub fn set_palette(&mut self, palette: Palette) -> Result<(), Error> {
        let layout = Self::compute(&self.dataset, &palette, &self.config)?;
        self.layout = layout;
        self.palette = palette;
        self.hover.clear();
        self.refresh_hover();
        Ok(())
    }

    /// The host canvas changed size. Placement is untouched.
    pub fn on_resize(&mut self, view_rect: Rect) -> InteractionOutcome {
        let mut outcome = InteractionOutcome {
            view_changed: self.viewport.set_view_rect(view_rect),
            hover: None,
        };
        if outcome.view_changed {
            tracing::trace!(?view_rect, "resized view");
            outcome.hover = self.refresh_hover();
        }
        outcome
    }

    /// Applies one input event to the viewport and hover state.
    pub fn on_interaction(&mut self, interaction: Interaction) -> InteractionOutcome {
        let mut outcome = InteractionOutcome::default();
        match interaction {
            Interaction::PointerMove(pos) => {
                if let Some(delta) = self.drag.drag_to(pos) {
                    outcome.view_changed = self.viewport.pan(delta);
                }
                outcome.hover = self.update_hover(pos);
            }
            Interaction::PointerDown(pos) => {
                self.pointer = Some(pos);
                self.drag.begin(pos);
            }
            Interaction::PointerUp(pos) => {
                self.pointer = Some(pos);
                self.drag.finish(pos);
            }
            Interaction::PointerLeave => {
                self.pointer = None;
                self.drag.cancel();
                outcome.hover = self.hover.clear();
            }
            Interaction::Wheel { delta, pointer } => {
                self.pointer = Some(pointer);
                outcome.view_changed = self.viewport.zoom(delta, pointer);
                if outcome.view_changed {
                    outcome.hover = self.update_hover(pointer);
                }
            }
            Interaction::Pan(delta) => {
                outcome.view_changed = self.viewport.pan(delta);
                if outcome.view_changed {
                    outcome.hover = self.refresh_hover();
                }
            }
            Interaction::Reset => {
                outcome.view_changed = self.viewport.reset();
                if outcome.view_changed {
                    outcome.hover = self.refresh_hover();
                }
            }
        }
        if outcome.view_changed {
            tracing::trace!(
                scale = self.viewport.scale(),
                tx = self.viewport.translate().x,
                ty = self.viewport.translate().y,
                "view changed"
            );
        }
        if let Some(change) = outcome.hover {
            tracing::debug!(?change, "hover changed");
        }
        outcome
    }

    /// Shows or hides events of `kind`. Returns `true` if that changed
    /// anything.
    pub fn set_kind_visible(&mut self, kind: EventKind, visible: bool) -> bool {
        if self.visible.contains(kind) == visible {
            return false;
        }
        self.visible.set(kind, visible);
        self.refresh_hover();
        true
    }

    /// Flips the visibility of `kind`, returning the new state.
    pub fn toggle_kind(&mut self, kind: EventKind) -> bool {
        let visible = self.visible.toggle(kind);
        self.refresh_hover();
        visible
    }

    /// Kinds currently shown.
    #[must_use]
    pub fn visible_kinds(&self) -> KindSet {
        self.visible
    }

    /// Every kind with its glyph, description and visibility, in legend order.
    pub fn legend(&self) -> impl Iterator<Item = LegendEntry> + '_ {
        EventKind::ALL.into_iter().map(|kind| LegendEntry {
            kind,
            glyph: kind.glyph(),
            description: kind.description(),
            visible: self.visible.contains(kind),
        })
    }

    /// The current layout.
    #[must_use]
    pub fn layout(&self) -> Arc<Layout> {
        Arc::clone(&self.layout)
    }

    /// The loaded dataset.
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The hovered event, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<EventIndex> {
        self.hover.current()
    }

    /// The placed hovered event, if any.
    #[must_use]
    pub fn hovered_event(&self) -> Option<&PlacedEvent> {
        self.layout.event(self.hover.current()?)
    }

    /// Segment and fractional year under a device-space point.
    #[must_use]
    pub fn year_at(&self, device: Point) -> Option<(usize, f64)> {
        let model = self.viewport.transform().to_model(device);
        self.layout.columns().year_at_x(model.x)
    }

    /// The visible event nearest to a device-space point, within the hit
    /// radius.
    #[must_use]
    pub fn event_at(&self, device: Point) -> Option<EventIndex> {
        self.hit(device, &self.config.hit)
    }

    /// Builds the render frame for the current view.
    ///
    /// Segments and regions outside the view are culled, and only visible
    /// kinds are emitted.
    #[must_use]
    pub fn frame(&self) -> Frame<'_> {
        let transform = self.viewport.transform();
        let visible = self.viewport.visible_model_rect();
        let bounds = self.layout.model_bounds();
        let hovered = self.hover.current();

        let segments = self
            .layout
            .segments()
            .iter()
            .enumerate()
            .filter_map(|(s, segment)| {
                let column = Rect::new(
                    segment.scale.origin_x(),
                    bounds.y0,
                    segment.scale.end_x(),
                    bounds.y1,
                );
                if !overlaps(column, visible) {
                    return None;
                }
                let regions = segment
                    .regions
                    .iter()
                    .enumerate()
                    .filter(|(_, region)| overlaps(region.band_rect, visible))
                    .map(|(r, region)| RegionScene {
                        index: r,
                        label: &region.label,
                        background: region.color,
                        band_rect: region.band_rect,
                        axis: region.axis,
                        events: region
                            .events
                            .iter()
                            .filter(|e| self.visible.contains(e.kind))
                            .map(|e| EventScene {
                                index: e.index,
                                kind: e.kind,
                                position: e.position(),
                                glyph: e.glyph(),
                                text: &e.text,
                                year: e.year,
                                anchored: e.anchored(),
                                above_axis: e.above_axis(),
                                degraded: e.degraded,
                                hovered: hovered == Some(e.index),
                            })
                            .collect(),
                    })
                    .collect();
                Some(SegmentScene {
                    index: s,
                    caption: &segment.caption,
                    caption_anchor: segment.caption_anchor,
                    column,
                    regions,
                })
            })
            .collect();

        Frame {
            transform,
            visible,
            model_bounds: bounds,
            segments,
        }
    }

    fn compute(
        dataset: &Dataset,
        palette: &Palette,
        config: &Config,
    ) -> Result<Arc<Layout>, Error> {
        let layout = compute_layout(dataset, palette, &config.layout_params())?;
        if layout.degraded_count() > 0 {
            tracing::warn!(
                degraded = layout.degraded_count(),
                "some events could not be placed without overlap"
            );
        }
        Ok(Arc::new(layout))
    }

    fn hit(&self, device: Point, params: &HitParams) -> Option<EventIndex> {
        let candidates = self
            .layout
            .events()
            .filter(|e| self.visible.contains(e.kind))
            .map(|e| (e.index, e.position()));
        hit_test(candidates, device, &self.viewport.transform(), params).map(|h| h.key)
    }

    fn update_hover(&mut self, device: Point) -> Option<HoverChange<EventIndex>> {
        self.pointer = Some(device);
        let hit = self.hit(device, &self.config.hit);
        self.hover.update(hit)
    }

    /// Re-hits the last pointer position against the current view and layout.
    fn refresh_hover(&mut self) -> Option<HoverChange<EventIndex>> {
        match self.pointer {
            Some(pos) => self.update_hover(pos),
            None => self.hover.clear(),
        }
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}
