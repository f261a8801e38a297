// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event kinds and kind sets.

use core::fmt;

/// The category of a timeline event.
///
/// The kind selects the glyph a renderer draws for the event and whether the
/// event is pinned to its region's axis ([`EventKind::is_anchored`]).
///
/// With the `serde` feature, kinds deserialize from their camel-case names
/// (`"leader"`, `"longEvent"`, `"majorDev"`, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum EventKind {
    /// Tribal chief, duke, marquis, khan, or leader of an uprising.
    Leader,
    /// King or emperor.
    King,
    /// Writer, poet, novelist, scholar, dramatist, or translator.
    Literati,
    /// Scientist or engineer.
    Scientist,
    /// Statesman or chancellor.
    Politician,
    /// Historian.
    Historian,
    /// Thinker or philosopher.
    Philosopher,
    /// Reformer or revolutionary.
    Revolutionary,
    /// Military strategist.
    Military,
    /// General, commander, or famous battle.
    General,
    /// Classicist or Buddhist/Taoist theorist.
    Monk,
    /// Calligrapher, painter, or musician.
    Artist,
    /// Capital city.
    Capital,
    /// Important historical event.
    Event,
    /// Event lasting more than one year.
    LongEvent,
    /// Development of something during the period.
    Development,
    /// Major development.
    MajorDev,
    /// Emergence of a people or thing.
    Ethnic,
    /// Emergence followed by development.
    EthnicDev,
    /// Educator, diplomat, or sociologist.
    Educator,
    /// Any other notable figure.
    Other,
}

impl EventKind {
    /// Every kind, in legend order.
    pub const ALL: [Self; 21] = [
        Self::Leader,
        Self::King,
        Self::Literati,
        Self::Scientist,
        Self::Politician,
        Self::Historian,
        Self::Philosopher,
        Self::Revolutionary,
        Self::Military,
        Self::General,
        Self::Monk,
        Self::Artist,
        Self::Capital,
        Self::Event,
        Self::LongEvent,
        Self::Development,
        Self::MajorDev,
        Self::Ethnic,
        Self::EthnicDev,
        Self::Educator,
        Self::Other,
    ];

    /// Returns `true` for kinds drawn exactly on the region axis.
    ///
    /// Anchored events never take part in collision placement.
    #[must_use]
    pub const fn is_anchored(self) -> bool {
        matches!(self, Self::Leader | Self::King)
    }

    /// Display glyph for the legend and the event marker.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Leader => "👑",
            Self::King => "⭐️",
            Self::Literati => "📚",
            Self::Scientist => "🔬",
            Self::Politician => "⚖️",
            Self::Historian => "📜",
            Self::Philosopher => "🤔",
            Self::Revolutionary => "✊",
            Self::Military => "⚔️",
            Self::General => "🎯",
            Self::Monk => "🙏",
            Self::Artist => "🎨",
            Self::Capital => "🏛️",
            Self::Event => "⭕️",
            Self::LongEvent => "➖",
            Self::Development => "⬆️",
            Self::MajorDev => "⬆️⬆️",
            Self::Ethnic => "⬜️",
            Self::EthnicDev => "⬜️⬆️",
            Self::Educator => "🎓",
            Self::Other => "📌",
        }
    }

    /// Human-readable legend description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Leader => "部落首领、公、侯、部落大汗、起义军首领",
            Self::King => "国王、皇帝",
            Self::Literati => "文学家、诗人、词人、小说家、著名学者、戏剧作家、翻译家",
            Self::Scientist => "科技类名人",
            Self::Politician => "政治家、著名宰臣、名相、名臣、重臣",
            Self::Historian => "史学家",
            Self::Philosopher => "思想家、哲学家",
            Self::Revolutionary => "改革家、革命家",
            Self::Military => "军事家、战略家",
            Self::General => "军事将领、统帅及著名战役",
            Self::Monk => "经师、佛教或道教理论家、经学家",
            Self::Artist => "书法家、画家、音乐家",
            Self::Capital => "国都",
            Self::Event => "重要历史事件",
            Self::LongEvent => "持续1年以上的事件",
            Self::Development => "某事物发展",
            Self::MajorDev => "重大发展",
            Self::Ethnic => "民族出现",
            Self::EthnicDev => "民族发展",
            Self::Educator => "教育家、外交家、社会学家",
            Self::Other => "其他历史名人",
        }
    }

    /// The camel-case name used in the dataset schema.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Leader => "leader",
            Self::King => "king",
            Self::Literati => "literati",
            Self::Scientist => "scientist",
            Self::Politician => "politician",
            Self::Historian => "historian",
            Self::Philosopher => "philosopher",
            Self::Revolutionary => "revolutionary",
            Self::Military => "military",
            Self::General => "general",
            Self::Monk => "monk",
            Self::Artist => "artist",
            Self::Capital => "capital",
            Self::Event => "event",
            Self::LongEvent => "longEvent",
            Self::Development => "development",
            Self::MajorDev => "majorDev",
            Self::Ethnic => "ethnic",
            Self::EthnicDev => "ethnicDev",
            Self::Educator => "educator",
            Self::Other => "other",
        }
    }

    const fn bit(self) -> u32 {
        1_u32 << (self as u8)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A compact set of [`EventKind`]s.
///
/// Used as the visibility-toggle set: a renderer only emits events whose kind
/// is in the set. Toggling visibility never changes placement.
///
/// ```
/// use annals_model::{EventKind, KindSet};
///
/// let mut visible = KindSet::all();
/// visible.remove(EventKind::Capital);
/// assert!(!visible.contains(EventKind::Capital));
/// assert!(visible.contains(EventKind::Leader));
///
/// let rulers = KindSet::from_kinds([EventKind::Leader, EventKind::King]);
/// assert_eq!(rulers.len(), 2);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u32);

impl KindSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set of all kinds.
    pub const ALL: Self = Self((1_u32 << EventKind::ALL.len()) - 1);

    /// Creates an empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing every kind.
    #[must_use]
    pub const fn all() -> Self {
        Self::ALL
    }

    /// Creates a set from an iterator of kinds.
    #[must_use]
    pub fn from_kinds(kinds: impl IntoIterator<Item = EventKind>) -> Self {
        let mut set = Self::EMPTY;
        for kind in kinds {
            set.insert(kind);
        }
        set
    }

    /// Returns `true` if the set contains no kinds.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of kinds in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains `kind`.
    #[must_use]
    pub const fn contains(self, kind: EventKind) -> bool {
        (self.0 & kind.bit()) != 0
    }

    /// Inserts a kind. Returns `true` if it was not already present.
    pub fn insert(&mut self, kind: EventKind) -> bool {
        let was_absent = !self.contains(kind);
        self.0 |= kind.bit();
        was_absent
    }

    /// Removes a kind. Returns `true` if it was present.
    pub fn remove(&mut self, kind: EventKind) -> bool {
        let was_present = self.contains(kind);
        self.0 &= !kind.bit();
        was_present
    }

    /// Flips membership of `kind` and returns the new membership.
    pub fn toggle(&mut self, kind: EventKind) -> bool {
        self.0 ^= kind.bit();
        self.contains(kind)
    }

    /// Sets membership of `kind`.
    pub fn set(&mut self, kind: EventKind, present: bool) {
        if present {
            self.insert(kind);
        } else {
            self.remove(kind);
        }
    }

    /// Iterates the kinds in the set, in legend order.
    #[must_use]
    pub const fn iter(self) -> KindSetIter {
        KindSetIter { bits: self.0 }
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<EventKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = EventKind>>(iter: I) -> Self {
        Self::from_kinds(iter)
    }
}

impl IntoIterator for KindSet {
    type Item = EventKind;
    type IntoIter = KindSetIter;

    fn into_iter(self) -> KindSetIter {
        self.iter()
    }
}

/// Iterator over the kinds of a [`KindSet`].
#[derive(Clone, Debug)]
pub struct KindSetIter {
    bits: u32,
}

impl Iterator for KindSetIter {
    type Item = EventKind;

    fn next(&mut self) -> Option<EventKind> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        EventKind::ALL.get(index).copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{EventKind, KindSet};

    #[test]
    fn only_rulers_are_anchored() {
        let anchored: KindSet = EventKind::ALL
            .into_iter()
            .filter(|k| k.is_anchored())
            .collect();
        assert_eq!(
            anchored,
            KindSet::from_kinds([EventKind::Leader, EventKind::King])
        );
    }

    #[test]
    fn all_contains_every_kind() {
        let all = KindSet::all();
        assert_eq!(all.len(), EventKind::ALL.len());
        for kind in EventKind::ALL {
            assert!(all.contains(kind), "{kind} missing from KindSet::ALL");
        }
    }

    #[test]
    fn toggle_flips_and_reports_membership() {
        let mut set = KindSet::empty();
        assert!(set.toggle(EventKind::Monk));
        assert!(set.contains(EventKind::Monk));
        assert!(!set.toggle(EventKind::Monk));
        assert!(set.is_empty());
    }

    #[test]
    fn insert_and_remove_report_changes() {
        let mut set = KindSet::empty();
        assert!(set.insert(EventKind::Capital));
        assert!(!set.insert(EventKind::Capital));
        assert!(set.remove(EventKind::Capital));
        assert!(!set.remove(EventKind::Capital));
    }

    #[test]
    fn iter_follows_legend_order() {
        let set = KindSet::from_kinds([EventKind::Other, EventKind::Leader, EventKind::Event]);
        let kinds: Vec<_> = set.iter().collect();
        assert_eq!(
            kinds,
            [EventKind::Leader, EventKind::Event, EventKind::Other]
        );
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in EventKind::ALL.iter().enumerate() {
            for b in &EventKind::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
