// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region background colors.

use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;

use crate::rng::RandomSource;

/// A non-empty list of region background colors.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Creates a palette, or `None` if `colors` is empty.
    #[must_use]
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// A palette with a single color. Adjacent regions then share it.
    #[must_use]
    pub fn single(color: Color) -> Self {
        Self {
            colors: vec![color],
        }
    }

    /// Number of colors; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Color at `index`, wrapping around the palette.
    #[must_use]
    pub fn get(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    /// All colors.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    /// Twelve pale tints at 30% opacity.
    fn default() -> Self {
        const ALPHA: u8 = 77;
        Self {
            colors: vec![
                Color::from_rgba8(255, 228, 181, ALPHA),
                Color::from_rgba8(176, 224, 230, ALPHA),
                Color::from_rgba8(221, 160, 221, ALPHA),
                Color::from_rgba8(144, 238, 144, ALPHA),
                Color::from_rgba8(255, 182, 193, ALPHA),
                Color::from_rgba8(255, 218, 185, ALPHA),
                Color::from_rgba8(230, 230, 250, ALPHA),
                Color::from_rgba8(175, 238, 238, ALPHA),
                Color::from_rgba8(255, 240, 245, ALPHA),
                Color::from_rgba8(240, 248, 255, ALPHA),
                Color::from_rgba8(245, 222, 179, ALPHA),
                Color::from_rgba8(188, 210, 238, ALPHA),
            ],
        }
    }
}

/// Assigns palette indices to regions so that neighbors differ.
///
/// Regions are visited in render order: top to bottom within a segment, then
/// on to the next segment. Each region gets a color chosen uniformly among the
/// palette entries other than the one of the region rendered just before it
/// (the region above, or the last region of the previous non-empty segment).
///
/// Assignments are cached per `(segment, region)`, so repeated queries return
/// the same index. Queries may come in any order; uncached predecessors are
/// assigned first so the constraint always holds.
///
/// ```
/// use annals_layout::{ColorAssigner, XorShift64};
///
/// let mut rng = XorShift64::new(1);
/// let mut colors = ColorAssigner::new(12, vec![1, 4]);
/// let last_of_first = colors.color(0, 0, &mut rng);
/// let first_of_second = colors.color(1, 0, &mut rng);
/// assert_ne!(last_of_first, first_of_second);
/// assert_eq!(colors.color(1, 0, &mut rng), first_of_second);
/// ```
#[derive(Clone, Debug)]
pub struct ColorAssigner {
    palette_len: usize,
    region_counts: Vec<usize>,
    assigned: HashMap<(usize, usize), usize>,
}

impl ColorAssigner {
    /// Creates an assigner over a palette of `palette_len` colors for segments
    /// with the given region counts.
    ///
    /// A `palette_len` of zero is treated as one.
    #[must_use]
    pub fn new(palette_len: usize, region_counts: Vec<usize>) -> Self {
        Self {
            palette_len: palette_len.max(1),
            region_counts,
            assigned: HashMap::new(),
        }
    }

    /// Palette index of region `region` in segment `segment`.
    pub fn color(&mut self, segment: usize, region: usize, rng: &mut impl RandomSource) -> usize {
        let key = (segment, region);
        if let Some(&index) = self.assigned.get(&key) {
            return index;
        }

        let mut pending = Vec::new();
        let mut cursor = Some(key);
        while let Some(k) = cursor {
            if self.assigned.contains_key(&k) {
                break;
            }
            pending.push(k);
            cursor = self.previous(k);
        }

        let mut index = 0;
        for k in pending.into_iter().rev() {
            let prev = self
                .previous(k)
                .and_then(|p| self.assigned.get(&p).copied());
            index = self.pick(prev, rng);
            self.assigned.insert(k, index);
        }
        index
    }

    /// Cached palette index, if the region has been assigned.
    #[must_use]
    pub fn assigned(&self, segment: usize, region: usize) -> Option<usize> {
        self.assigned.get(&(segment, region)).copied()
    }

    /// Forgets every assignment.
    pub fn clear(&mut self) {
        self.assigned.clear();
    }

    /// The region rendered immediately before `key`.
    fn previous(&self, (segment, region): (usize, usize)) -> Option<(usize, usize)> {
        if region > 0 {
            return Some((segment, region - 1));
        }
        let earlier = &self.region_counts[..segment.min(self.region_counts.len())];
        earlier
            .iter()
            .enumerate()
            .rev()
            .find(|(_, count)| **count > 0)
            .map(|(s, count)| (s, count - 1))
    }

    fn pick(&self, prev: Option<usize>, rng: &mut impl RandomSource) -> usize {
        match prev {
            // A single color cannot avoid repeating itself.
            _ if self.palette_len == 1 => 0,
            Some(prev) if prev < self.palette_len => {
                let index = rng.below(self.palette_len - 1);
                if index >= prev { index + 1 } else { index }
            }
            _ => rng.below(self.palette_len),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use peniko::Color;

    use super::{ColorAssigner, Palette};
    use crate::XorShift64;

    #[test]
    fn neighbors_differ_within_a_segment() {
        let mut rng = XorShift64::new(5);
        let mut colors = ColorAssigner::new(3, vec![6]);
        for r in 1..6 {
            let above = colors.color(0, r - 1, &mut rng);
            let this = colors.color(0, r, &mut rng);
            assert_ne!(above, this, "regions {} and {r} share a color", r - 1);
        }
    }

    #[test]
    fn out_of_order_queries_still_respect_neighbors() {
        let mut rng = XorShift64::new(9);
        let mut colors = ColorAssigner::new(2, vec![2, 3]);
        // Ask for the bottom region first; everything above gets filled in.
        let bottom = colors.color(1, 2, &mut rng);
        assert!(colors.assigned(0, 0).is_some());
        assert_ne!(colors.assigned(1, 1), Some(bottom));
        assert_ne!(colors.assigned(0, 1), colors.assigned(1, 0));
    }

    #[test]
    fn empty_segments_are_skipped_at_boundaries() {
        let mut rng = XorShift64::new(13);
        let mut colors = ColorAssigner::new(2, vec![1, 0, 1]);
        let a = colors.color(0, 0, &mut rng);
        let b = colors.color(2, 0, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn single_color_palette_waives_exclusion() {
        let mut rng = XorShift64::new(1);
        let mut colors = ColorAssigner::new(1, vec![3]);
        for r in 0..3 {
            assert_eq!(colors.color(0, r, &mut rng), 0);
        }
    }

    #[test]
    fn clear_forgets_assignments() {
        let mut rng = XorShift64::new(1);
        let mut colors = ColorAssigner::new(4, vec![2]);
        colors.color(0, 1, &mut rng);
        colors.clear();
        assert_eq!(colors.assigned(0, 0), None);
    }

    #[test]
    fn palette_wraps_and_rejects_empty() {
        assert!(Palette::new(vec![]).is_none());
        let palette = Palette::default();
        assert_eq!(palette.len(), 12);
        let red = Color::from_rgba8(255, 0, 0, 255);
        let single = Palette::single(red);
        assert_eq!(single.len(), 1);
        assert_eq!(single.get(5).components, red.components);
    }
}
