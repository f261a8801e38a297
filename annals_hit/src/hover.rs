// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: turn successive hit results into transitions.

/// A change of the hovered marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverChange<K> {
    /// The pointer moved onto `K` from empty space.
    Entered(K),
    /// The pointer left `K` for empty space.
    Left(K),
    /// The pointer moved directly from one marker to another.
    Moved {
        /// Previously hovered marker.
        from: K,
        /// Newly hovered marker.
        to: K,
    },
}

impl<K: Copy> HoverChange<K> {
    /// The marker hovered after this change, if any.
    #[must_use]
    pub fn current(&self) -> Option<K> {
        match *self {
            Self::Entered(k) | Self::Moved { to: k, .. } => Some(k),
            Self::Left(_) => None,
        }
    }
}

/// Remembers the hovered marker between pointer events.
///
/// ```
/// use annals_hit::{HoverChange, HoverState};
///
/// let mut hover = HoverState::new();
/// assert_eq!(hover.update(Some(3)), Some(HoverChange::Entered(3)));
/// assert_eq!(hover.update(Some(3)), None);
/// assert_eq!(hover.update(Some(4)), Some(HoverChange::Moved { from: 3, to: 4 }));
/// assert_eq!(hover.update(None), Some(HoverChange::Left(4)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K: Copy + PartialEq> HoverState<K> {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Currently hovered marker.
    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Records the latest hit result, returning the transition if the hovered
    /// marker changed.
    pub fn update(&mut self, hit: Option<K>) -> Option<HoverChange<K>> {
        let change = match (self.current, hit) {
            (None, Some(k)) => Some(HoverChange::Entered(k)),
            (Some(k), None) => Some(HoverChange::Left(k)),
            (Some(from), Some(to)) if from != to => Some(HoverChange::Moved { from, to }),
            _ => None,
        };
        self.current = hit;
        change
    }

    /// Clears the hovered marker, for example when the pointer leaves the
    /// canvas or the layout is replaced.
    pub fn clear(&mut self) -> Option<HoverChange<K>> {
        self.update(None)
    }
}

#[cfg(test)]
mod tests {
    use super::{HoverChange, HoverState};

    #[test]
    fn clear_reports_leave_once() {
        let mut hover = HoverState::new();
        hover.update(Some('a'));
        assert_eq!(hover.clear(), Some(HoverChange::Left('a')));
        assert_eq!(hover.clear(), None);
        assert_eq!(hover.current(), None);
    }

    #[test]
    fn change_reports_new_target() {
        assert_eq!(HoverChange::Entered(1).current(), Some(1));
        assert_eq!(HoverChange::Moved { from: 1, to: 2 }.current(), Some(2));
        assert_eq!(HoverChange::Left(1).current(), None);
    }
}
