// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Provider and consumer surface.
//!
//! ## Overview
//!
//! [`InteractionProvider::mount`] looks up the scene in the ambient [`Scope`],
//! creates an [`InteractionStore`], and attaches move and click listeners to a
//! [`Window`]. Each event is resolved against the scene and fed into the store;
//! derived effects then run from the returned [`Changes`]:
//!
//! - a selection identity change clears the hover state;
//! - any hover change rewrites the window cursor ([`CursorIcon::Pointer`] while
//!   something is hovered, [`CursorIcon::Default`] otherwise);
//! - subscribers whose mask intersects the changes are notified once.
//!
//! Descendants obtain the shared [`Interaction`] handle through
//! [`use_interaction`]. Dropping the provider (or calling
//! [`InteractionProvider::unmount`]) detaches both listeners.

use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt::Debug;

use kurbo::Point;
use slotmap::{SlotMap, new_key_type};

use crate::context::Scope;
use crate::error::InteractionError;
use crate::filter::Filter;
use crate::resolve::resolve_with;
use crate::scene::{Picker, Scene};
use crate::store::{InteractionProps, InteractionStore};
use crate::types::{
    Changes, CursorIcon, InteractionSnapshot, InteractionState, PointerEvent, PointerEventKind,
};
use crate::window::{ListenerId, Window};

new_key_type! {
    /// Handle returned by [`Interaction::subscribe`].
    pub struct SubscriptionId;
}

type Callback<K> = Rc<dyn Fn(&InteractionSnapshot<K>, Changes)>;

struct Subscriber<K> {
    mask: Changes,
    callback: Callback<K>,
}

struct Shared<K> {
    store: RefCell<InteractionStore<K>>,
    picker: Rc<dyn Picker<K>>,
    window: Weak<Window>,
    subscribers: RefCell<SlotMap<SubscriptionId, Subscriber<K>>>,
}

fn cursor_for<K>(hovered: &InteractionState<K>) -> CursorIcon {
    if hovered.current.is_some() {
        CursorIcon::Pointer
    } else {
        CursorIcon::Default
    }
}

impl<K: Copy + Eq + Debug> Shared<K> {
    fn handle(&self, window: &Window, event: &PointerEvent) {
        let (root, filter) = {
            let store = self.store.borrow();
            (store.overrides().root, store.overrides().filter.clone())
        };
        if root.is_none() {
            tracing::trace!(kind = ?event.kind, "no root configured, event ignored");
            return;
        }
        let matched = resolve_with(
            &*self.picker,
            event.position,
            window.viewport_size(),
            root,
            &filter,
        );
        let changes = {
            let mut store = self.store.borrow_mut();
            match event.kind {
                PointerEventKind::Move => store.set_hovered(matched),
                PointerEventKind::Click => store.set_selected(matched),
            }
        };
        self.settle(Some(window), changes);
    }

    /// Run derived effects for `changes`, then notify subscribers once.
    fn settle(&self, window: Option<&Window>, mut changes: Changes) {
        if changes.contains(Changes::SELECTED_CURRENT) {
            changes |= self.store.borrow_mut().set_hovered(None);
        }
        if changes.intersects(Changes::HOVERED)
            && let Some(window) = window
        {
            window.set_cursor(cursor_for(&self.store.borrow().hovered()));
        }
        self.notify(changes);
    }

    fn notify(&self, changes: Changes) {
        if changes.is_empty() {
            return;
        }
        let snapshot = self.store.borrow().snapshot();
        // Collect first so callbacks may subscribe, unsubscribe, or mutate.
        let targets: Vec<Callback<K>> = self
            .subscribers
            .borrow()
            .values()
            .filter(|s| s.mask.intersects(changes))
            .map(|s| s.callback.clone())
            .collect();
        for callback in targets {
            callback(&snapshot, changes);
        }
    }
}

/// Shared handle to a provider's interaction state.
///
/// Cloning is cheap; all clones observe and drive the same store.
pub struct Interaction<K> {
    shared: Rc<Shared<K>>,
}

impl<K> Clone for Interaction<K> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<K: Copy + Eq + Debug> Debug for Interaction<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Interaction")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + Debug> Interaction<K> {
    /// Snapshot of both states.
    pub fn state(&self) -> InteractionSnapshot<K> {
        self.shared.store.borrow().snapshot()
    }

    /// Hover history.
    pub fn hovered(&self) -> InteractionState<K> {
        self.shared.store.borrow().hovered()
    }

    /// Selection history.
    pub fn selected(&self) -> InteractionState<K> {
        self.shared.store.borrow().selected()
    }

    /// Clear the selection regardless of the empty-selection policy.
    pub fn reset_selected(&self) {
        let changes = self.shared.store.borrow_mut().reset_selected();
        let window = self.shared.window.upgrade();
        self.shared.settle(window.as_deref(), changes);
    }

    /// Current hit-testing root.
    pub fn root(&self) -> Option<K> {
        self.shared.store.borrow().overrides().root
    }

    /// Replace the hit-testing root; `None` disables hit-testing.
    pub fn set_root(&self, root: Option<K>) {
        self.shared.store.borrow_mut().set_root(root);
    }

    /// Replace the candidate filter.
    pub fn set_filter(&self, filter: Filter<K>) {
        self.shared.store.borrow_mut().set_filter(filter);
    }

    /// Whether clicking empty space clears the selection.
    pub fn allow_empty_selection(&self) -> bool {
        self.shared.store.borrow().overrides().allow_empty_selection
    }

    /// Allow or forbid clearing the selection by clicking empty space.
    pub fn set_allow_empty_selection(&self, allow: bool) {
        self.shared
            .store
            .borrow_mut()
            .set_allow_empty_selection(allow);
    }

    /// Resolve the object under `position` without touching any state.
    ///
    /// Returns `None` once the window is gone.
    pub fn pick(&self, position: Point) -> Option<K> {
        let window = self.shared.window.upgrade()?;
        let (root, filter) = {
            let store = self.shared.store.borrow();
            (store.overrides().root, store.overrides().filter.clone())
        };
        resolve_with(
            &*self.shared.picker,
            position,
            window.viewport_size(),
            root,
            &filter,
        )
    }

    /// Call `callback` after every event whose changes intersect `mask`.
    pub fn subscribe(
        &self,
        mask: Changes,
        callback: impl Fn(&InteractionSnapshot<K>, Changes) + 'static,
    ) -> SubscriptionId {
        self.shared.subscribers.borrow_mut().insert(Subscriber {
            mask,
            callback: Rc::new(callback),
        })
    }

    /// Remove a subscription. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.subscribers.borrow_mut().remove(id).is_some()
    }
}

/// Owner of one interaction store and its window listeners.
pub struct InteractionProvider<K> {
    interaction: Interaction<K>,
    window: Rc<Window>,
    listeners: [ListenerId; 2],
    scope: Scope,
}

impl<K: Copy + Eq + Debug> Debug for InteractionProvider<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InteractionProvider")
            .field("interaction", &self.interaction)
            .field("window", &self.window)
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq + Debug + 'static> InteractionProvider<K> {
    /// Mount a provider below `scope`, listening to `window`.
    ///
    /// Fails with [`InteractionError::MissingScene`] when no scene of type `S`
    /// is provided in `scope`.
    pub fn mount<S: Scene<K> + 'static>(
        scope: &Scope,
        window: &Rc<Window>,
        props: InteractionProps<K>,
    ) -> Result<Self, InteractionError> {
        let scene = scope
            .get::<S>()
            .ok_or(InteractionError::MissingScene)?;
        let initial = InteractionStore::new(props);
        window.set_cursor(cursor_for(&initial.hovered()));

        let shared = Rc::new(Shared {
            store: RefCell::new(initial),
            picker: scene,
            window: Rc::downgrade(window),
            subscribers: RefCell::new(SlotMap::with_key()),
        });
        let listeners = [PointerEventKind::Move, PointerEventKind::Click].map(|kind| {
            let shared = shared.clone();
            window.add_listener(kind, move |w, e| shared.handle(w, e))
        });
        tracing::debug!("interaction provider mounted");

        let interaction = Interaction { shared };
        Ok(Self {
            scope: scope.provide(interaction.clone()),
            interaction,
            window: window.clone(),
            listeners,
        })
    }

    /// Scope for descendants; carries the [`Interaction`] handle.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The provider's interaction handle.
    pub fn interaction(&self) -> &Interaction<K> {
        &self.interaction
    }

    /// Detach from the window. Equivalent to dropping the provider.
    pub fn unmount(self) {}
}

impl<K> Drop for InteractionProvider<K> {
    fn drop(&mut self) {
        for id in self.listeners {
            self.window.remove_listener(id);
        }
        tracing::debug!("interaction provider unmounted");
    }
}

/// Consumer-side overrides applied by [`use_interaction`].
///
/// Supplied values take precedence over the provider's configuration.
/// `root: Some(None)` explicitly disables hit-testing.
pub struct UseInteraction<K> {
    /// Replacement root, if any.
    pub root: Option<Option<K>>,
    /// Replacement filter, if any.
    pub filter: Option<Filter<K>>,
}

impl<K> Default for UseInteraction<K> {
    fn default() -> Self {
        Self {
            root: None,
            filter: None,
        }
    }
}

impl<K: Debug> Debug for UseInteraction<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UseInteraction")
            .field("root", &self.root)
            .field("filter", &self.filter)
            .finish()
    }
}

/// Access the nearest provider's [`Interaction`] from `scope`.
///
/// Fails with [`InteractionError::MissingProvider`] outside a provider.
pub fn use_interaction<K: Copy + Eq + Debug + 'static>(
    scope: &Scope,
    props: UseInteraction<K>,
) -> Result<Interaction<K>, InteractionError> {
    let interaction = scope
        .get::<Interaction<K>>()
        .ok_or(InteractionError::MissingProvider)?;
    if let Some(root) = props.root {
        interaction.set_root(root);
    }
    if let Some(filter) = props.filter {
        interaction.set_filter(filter);
    }
    Ok((*interaction).clone())
}
