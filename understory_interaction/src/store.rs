// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction store: hover and selection state machines plus their live overrides.
//!
//! ## Transition rules
//!
//! - Hover and selection transitions are no-ops while no root is configured.
//! - Re-matching the current object sets `repeat` and leaves `current`/`last` alone.
//! - Any other value shifts `current` into `last`.
//! - A selection transition to `None` is ignored unless empty selection is allowed.
//! - [`InteractionStore::reset_selected`] always clears the selection.
//!
//! Every transition returns the [`Changes`] it made, so a caller can run
//! derived effects for exactly the fields that moved.
//!
//! ```
//! use understory_interaction::store::InteractionStore;
//! use understory_interaction::types::Changes;
//!
//! let mut store: InteractionStore<u32> = InteractionStore::default();
//! store.set_root(Some(0));
//! assert_eq!(store.set_hovered(Some(7)), Changes::HOVERED_CURRENT);
//! assert_eq!(store.set_hovered(Some(7)), Changes::HOVERED_REPEAT);
//! assert_eq!(store.hovered().current, Some(7));
//! ```

use core::fmt::Debug;

use crate::filter::Filter;
use crate::types::{Changes, InteractionSnapshot, InteractionState};

/// Configuration read on every event.
///
/// Starts from [`InteractionProps`] and may be replaced at runtime through the
/// store's setters (or the matching methods on
/// [`Interaction`](crate::provider::Interaction)).
#[derive(Clone, Debug)]
pub struct InteractionOverrides<K> {
    /// Scope of hit-testing; `None` disables all transitions.
    pub root: Option<K>,
    /// Candidate → eligible target mapping.
    pub filter: Filter<K>,
    /// Whether a click on empty space clears the selection.
    pub allow_empty_selection: bool,
}

impl<K: Copy + 'static> Default for InteractionOverrides<K> {
    fn default() -> Self {
        Self {
            root: None,
            filter: Filter::meshes(),
            allow_empty_selection: false,
        }
    }
}

/// Provider configuration.
///
/// Any field left at its default takes the default override value: no root,
/// mesh-only filter, and sticky selection.
pub type InteractionProps<K> = InteractionOverrides<K>;

/// Hover and selection state owned by one provider.
#[derive(Clone, Debug)]
pub struct InteractionStore<K> {
    hovered: InteractionState<K>,
    selected: InteractionState<K>,
    overrides: InteractionOverrides<K>,
}

impl<K: Copy + 'static> Default for InteractionStore<K> {
    fn default() -> Self {
        Self::new(InteractionOverrides::default())
    }
}

impl<K> InteractionStore<K> {
    /// Create an empty store with the given configuration.
    pub fn new(overrides: InteractionOverrides<K>) -> Self {
        Self {
            hovered: InteractionState::new(),
            selected: InteractionState::new(),
            overrides,
        }
    }

    /// Current configuration.
    pub fn overrides(&self) -> &InteractionOverrides<K> {
        &self.overrides
    }

    /// Replace the hit-testing root. `None` disables transitions.
    pub fn set_root(&mut self, root: Option<K>) {
        self.overrides.root = root;
    }

    /// Replace the candidate filter.
    pub fn set_filter(&mut self, filter: Filter<K>) {
        self.overrides.filter = filter;
    }

    /// Allow or forbid clearing the selection by clicking empty space.
    pub fn set_allow_empty_selection(&mut self, allow: bool) {
        self.overrides.allow_empty_selection = allow;
    }
}

impl<K: Copy + Eq + Debug> InteractionStore<K> {
    /// Hover history.
    pub fn hovered(&self) -> InteractionState<K> {
        self.hovered
    }

    /// Selection history.
    pub fn selected(&self) -> InteractionState<K> {
        self.selected
    }

    /// Both histories.
    pub fn snapshot(&self) -> InteractionSnapshot<K> {
        InteractionSnapshot {
            hovered: self.hovered,
            selected: self.selected,
        }
    }

    /// Apply a hover transition to `next` (which may be `None`, hovering away).
    pub fn set_hovered(&mut self, next: Option<K>) -> Changes {
        if self.overrides.root.is_none() {
            return Changes::empty();
        }
        let before = self.hovered;
        if next == self.hovered.current {
            self.hovered.confirm();
        } else {
            self.hovered.shift(next);
        }
        tracing::trace!(?next, repeat = self.hovered.repeat, "hover transition");
        Changes::hovered(&before, &self.hovered)
    }

    /// Apply a selection transition to `next`.
    ///
    /// `None` is ignored unless empty selection is allowed.
    pub fn set_selected(&mut self, next: Option<K>) -> Changes {
        if self.overrides.root.is_none() {
            return Changes::empty();
        }
        let before = self.selected;
        if next == self.selected.current {
            self.selected.confirm();
        } else if next.is_none() && !self.overrides.allow_empty_selection {
            tracing::trace!("empty selection ignored");
            return Changes::empty();
        } else {
            self.selected.shift(next);
        }
        tracing::trace!(?next, repeat = self.selected.repeat, "selection transition");
        Changes::selected(&before, &self.selected)
    }

    /// Clear the selection, regardless of root or the empty-selection policy.
    pub fn reset_selected(&mut self) -> Changes {
        let before = self.selected;
        self.selected.shift(None);
        tracing::trace!(last = ?self.selected.last, "selection reset");
        Changes::selected(&before, &self.selected)
    }
}
