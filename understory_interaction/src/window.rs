// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host window: viewport size, cursor style, and pointer listeners.
//!
//! ## Overview
//!
//! [`Window`] stands in for the platform window the provider listens to.
//! Toolkit glue forwards platform pointer input into [`Window::dispatch`]
//! (or the [`pointer_move`](Window::pointer_move)/[`click`](Window::click)
//! shorthands) and keeps the viewport size current with [`Window::resize`].
//! The size is read at event time, never cached by listeners.
//!
//! Listeners run synchronously, in registration order, on the calling thread.
//!
//! ```
//! use std::rc::Rc;
//! use std::cell::Cell;
//! use kurbo::{Point, Size};
//! use understory_interaction::types::PointerEventKind;
//! use understory_interaction::window::Window;
//!
//! let window = Window::new(Size::new(640.0, 480.0));
//! let clicks = Rc::new(Cell::new(0));
//! let seen = clicks.clone();
//! let id = window.add_listener(PointerEventKind::Click, move |_, _| seen.set(seen.get() + 1));
//!
//! window.click(Point::new(10.0, 10.0));
//! window.pointer_move(Point::new(12.0, 10.0));
//! assert_eq!(clicks.get(), 1);
//!
//! window.remove_listener(id);
//! window.click(Point::new(10.0, 10.0));
//! assert_eq!(clicks.get(), 1);
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use kurbo::{Point, Size};
use slotmap::{SlotMap, new_key_type};

use crate::types::{CursorIcon, PointerEvent, PointerEventKind};

new_key_type! {
    /// Handle returned by [`Window::add_listener`].
    pub struct ListenerId;
}

type Listener = Rc<dyn Fn(&Window, &PointerEvent)>;

struct Registration {
    kind: PointerEventKind,
    callback: Listener,
}

/// In-process host window.
pub struct Window {
    viewport: Cell<Size>,
    cursor: Cell<CursorIcon>,
    listeners: RefCell<SlotMap<ListenerId, Registration>>,
}

impl core::fmt::Debug for Window {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Window")
            .field("viewport", &self.viewport.get())
            .field("cursor", &self.cursor.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl Window {
    /// Create a window with the given viewport size in pixels.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport: Cell::new(viewport),
            cursor: Cell::new(CursorIcon::Default),
            listeners: RefCell::new(SlotMap::with_key()),
        }
    }

    /// Current viewport size in pixels.
    pub fn viewport_size(&self) -> Size {
        self.viewport.get()
    }

    /// Update the viewport size; takes effect for the next event.
    pub fn resize(&self, viewport: Size) {
        self.viewport.set(viewport);
    }

    /// Current cursor style.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor.get()
    }

    /// Set the cursor style.
    pub fn set_cursor(&self, cursor: CursorIcon) {
        self.cursor.set(cursor);
    }

    /// Register `callback` for events of `kind`.
    pub fn add_listener(
        &self,
        kind: PointerEventKind,
        callback: impl Fn(&Self, &PointerEvent) + 'static,
    ) -> ListenerId {
        self.listeners.borrow_mut().insert(Registration {
            kind,
            callback: Rc::new(callback),
        })
    }

    /// Unregister a listener. Returns `false` if `id` was not registered.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id).is_some()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Deliver `event` to every listener registered for its kind.
    pub fn dispatch(&self, event: PointerEvent) {
        // Snapshot first so listeners may add or remove listeners.
        let targets: Vec<Listener> = self
            .listeners
            .borrow()
            .values()
            .filter(|r| r.kind == event.kind)
            .map(|r| r.callback.clone())
            .collect();
        for callback in targets {
            callback(self, &event);
        }
    }

    /// Deliver a pointer move to `position`.
    pub fn pointer_move(&self, position: Point) {
        self.dispatch(PointerEvent::moved(position));
    }

    /// Deliver a click at `position`.
    pub fn click(&self, position: Point) {
        self.dispatch(PointerEvent::click(position));
    }
}
