// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: interaction states, change sets, pointer events, and candidates.
//!
//! ## Overview
//!
//! These types describe what the interaction store holds and what flows into it.
//! They are referenced by the [`store`](crate::store), the [`resolve`](crate::resolve)
//! pipeline and the [`provider`](crate::provider).

use kurbo::Point;

/// History of one interaction kind (hover or selection).
///
/// A transition either confirms a repeat (`current` unchanged, `repeat = true`,
/// `last` untouched) or changes identity (`last` takes the previous `current`,
/// `current` takes the new value, `repeat = false`).
///
/// `last` survives transitions that clear `current`, so consumers can tell what
/// was just unhovered or deselected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct InteractionState<K> {
    /// Object matched by the most recent relevant event, if any.
    pub current: Option<K>,
    /// Object that was `current` before the most recent identity change.
    pub last: Option<K>,
    /// The most recent event matched the object already in `current`.
    pub repeat: bool,
}

impl<K> InteractionState<K> {
    /// The empty state: nothing current, nothing last, no repeat.
    pub const fn new() -> Self {
        Self {
            current: None,
            last: None,
            repeat: false,
        }
    }
}

impl<K> Default for InteractionState<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq> InteractionState<K> {
    /// Mark the current object as re-matched.
    pub(crate) fn confirm(&mut self) {
        self.repeat = true;
    }

    /// Move `current` into `last` and make `next` current.
    pub(crate) fn shift(&mut self, next: Option<K>) {
        self.last = self.current;
        self.current = next;
        self.repeat = false;
    }
}

/// Read-only view of both interaction states owned by a provider.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InteractionSnapshot<K> {
    /// Driven by pointer moves.
    pub hovered: InteractionState<K>,
    /// Driven by clicks and [`Interaction::reset_selected`](crate::provider::Interaction::reset_selected).
    pub selected: InteractionState<K>,
}

impl<K> Default for InteractionSnapshot<K> {
    fn default() -> Self {
        Self {
            hovered: InteractionState::new(),
            selected: InteractionState::new(),
        }
    }
}

bitflags::bitflags! {
    /// Fields that a transition actually changed.
    ///
    /// Returned by the [store](crate::store::InteractionStore) transitions and
    /// handed to subscribers, so derived effects can react only to the fields
    /// they read.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// `hovered.current` changed identity.
        const HOVERED_CURRENT  = 0b0000_0001;
        /// `hovered.last` changed.
        const HOVERED_LAST     = 0b0000_0010;
        /// `hovered.repeat` flipped.
        const HOVERED_REPEAT   = 0b0000_0100;
        /// `selected.current` changed identity.
        const SELECTED_CURRENT = 0b0000_1000;
        /// `selected.last` changed.
        const SELECTED_LAST    = 0b0001_0000;
        /// `selected.repeat` flipped.
        const SELECTED_REPEAT  = 0b0010_0000;
        /// Any hover field.
        const HOVERED = Self::HOVERED_CURRENT.bits()
            | Self::HOVERED_LAST.bits()
            | Self::HOVERED_REPEAT.bits();
        /// Any selection field.
        const SELECTED = Self::SELECTED_CURRENT.bits()
            | Self::SELECTED_LAST.bits()
            | Self::SELECTED_REPEAT.bits();
    }
}

impl Changes {
    /// Diff two hover states.
    pub(crate) fn hovered<K: Eq>(
        before: &InteractionState<K>,
        after: &InteractionState<K>,
    ) -> Self {
        Self::diff(
            before,
            after,
            [Self::HOVERED_CURRENT, Self::HOVERED_LAST, Self::HOVERED_REPEAT],
        )
    }

    /// Diff two selection states.
    pub(crate) fn selected<K: Eq>(
        before: &InteractionState<K>,
        after: &InteractionState<K>,
    ) -> Self {
        Self::diff(
            before,
            after,
            [
                Self::SELECTED_CURRENT,
                Self::SELECTED_LAST,
                Self::SELECTED_REPEAT,
            ],
        )
    }

    fn diff<K: Eq>(
        before: &InteractionState<K>,
        after: &InteractionState<K>,
        [current, last, repeat]: [Self; 3],
    ) -> Self {
        let mut out = Self::empty();
        out.set(current, before.current != after.current);
        out.set(last, before.last != after.last);
        out.set(repeat, before.repeat != after.repeat);
        out
    }
}

bitflags::bitflags! {
    /// Renderable kind tags reported by the scene for each candidate.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u8 {
        /// Triangle mesh; the only kind the default filter accepts.
        const MESH   = 0b0000_0001;
        /// Line or line segments.
        const LINE   = 0b0000_0010;
        /// Point cloud.
        const POINTS = 0b0000_0100;
        /// Camera-facing sprite.
        const SPRITE = 0b0000_1000;
    }
}

impl Default for ObjectFlags {
    fn default() -> Self {
        Self::MESH
    }
}

/// One object hit by a ray, as reported by a [`Scene`](crate::scene::Scene).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate<K> {
    /// The intersected object.
    pub object: K,
    /// Distance from the ray origin; candidates arrive nearest-first.
    pub distance: f64,
    /// Renderable kind of `object`.
    pub flags: ObjectFlags,
}

/// Kinds of pointer events the provider listens to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Pointer moved (drives hover).
    Move,
    /// Primary click (drives selection).
    Click,
}

/// A pointer event in client (viewport pixel) space.
///
/// Y grows downward, origin at the top-left corner of the viewport.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,
    /// Where it happened, in pixels.
    pub position: Point,
}

impl PointerEvent {
    /// A pointer move to `position`.
    pub const fn moved(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position,
        }
    }

    /// A click at `position`.
    pub const fn click(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Click,
            position,
        }
    }
}

/// Cursor style written by the hover feedback effect.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorIcon {
    /// Default arrow.
    #[default]
    Default,
    /// Hand pointer shown while something is hovered.
    Pointer,
}
