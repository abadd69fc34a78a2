// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ambient context: values provided by ancestors, looked up by type.
//!
//! A [`Scope`] is an immutable, parent-linked chain. [`Scope::provide`] returns
//! a child scope carrying one more value; [`Scope::get`] walks from the child
//! toward the root and returns the nearest value of the requested type.
//!
//! The scene collaborator is provided into a scope by the application, and
//! [`InteractionProvider`](crate::provider::InteractionProvider) provides its
//! [`Interaction`](crate::provider::Interaction) handle to its descendants.
//!
//! ```
//! use understory_interaction::context::Scope;
//!
//! let root = Scope::new();
//! let a = root.provide(1_u32);
//! let b = a.provide("label").provide(2_u32);
//! assert_eq!(b.get::<u32>().as_deref(), Some(&2));
//! assert_eq!(b.get::<&str>().as_deref(), Some(&"label"));
//! assert_eq!(a.get::<u32>().as_deref(), Some(&1));
//! assert!(root.get::<u32>().is_none());
//! ```

use alloc::rc::Rc;
use core::any::Any;

struct Frame {
    parent: Scope,
    value: Rc<dyn Any>,
}

/// A node in the ambient context chain.
#[derive(Clone, Default)]
pub struct Scope {
    frame: Option<Rc<Frame>>,
}

impl core::fmt::Debug for Scope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scope")
            .field("depth", &self.depth())
            .finish()
    }
}

impl Scope {
    /// An empty root scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a child scope that additionally provides `value`.
    pub fn provide<T: 'static>(&self, value: T) -> Self {
        self.provide_rc(Rc::new(value))
    }

    /// Like [`Scope::provide`], sharing an existing allocation.
    pub fn provide_rc<T: 'static>(&self, value: Rc<T>) -> Self {
        Self {
            frame: Some(Rc::new(Frame {
                parent: self.clone(),
                value,
            })),
        }
    }

    /// Nearest provided value of type `T`, if any.
    pub fn get<T: 'static>(&self) -> Option<Rc<T>> {
        let mut cur = self.frame.as_ref();
        while let Some(frame) = cur {
            if let Ok(v) = frame.value.clone().downcast::<T>() {
                return Some(v);
            }
            cur = frame.parent.frame.as_ref();
        }
        None
    }

    /// Number of values provided along this chain.
    pub fn depth(&self) -> usize {
        let mut n = 0;
        let mut cur = self.frame.as_ref();
        while let Some(frame) = cur {
            n += 1;
            cur = frame.parent.frame.as_ref();
        }
        n
    }
}
