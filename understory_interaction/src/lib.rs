// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Interaction: pointer-driven hover and selection state for ray-picked scene objects.
//!
//! ## Overview
//!
//! This crate turns pointer moves and clicks over a viewport into two small state machines,
//! `hovered` and `selected`, each recording the current object, the previous one, and whether the
//! latest event re-matched the same object.
//! It does not render, cast rays, or own a scene graph.
//! Instead, plug in a [`Scene`](crate::scene::Scene) that supplies a camera and answers ray
//! intersections for your scene graph.
//!
//! ## Pipeline
//!
//! 1) Normalize: the event's pixel position is mapped to device coordinates using the
//!    [`Window`](crate::window::Window) size at event time ([`to_ndc`](crate::resolve::to_ndc)).
//! 2) Intersect: the scene casts a ray from its active camera against the configured root and all
//!    its descendants, nearest-first.
//! 3) Filter: a [`Filter`](crate::filter::Filter) maps candidates to eligible targets; the first
//!    one wins. The default keeps mesh-like objects only.
//! 4) Transition: moves drive [`InteractionStore::set_hovered`](crate::store::InteractionStore::set_hovered),
//!    clicks drive [`InteractionStore::set_selected`](crate::store::InteractionStore::set_selected).
//! 5) Effects: a selection identity change clears the hover; any hover change updates the cursor;
//!    subscribers hear about the [`Changes`](crate::types::Changes) once per event.
//!
//! With no root configured, events are ignored and no ray is cast.
//!
//! ## Selection policy
//!
//! Selection is sticky: clicking empty space keeps the current selection unless
//! `allow_empty_selection` is set. [`Interaction::reset_selected`](crate::provider::Interaction::reset_selected)
//! always clears it.
//!
//! ## Minimal usage
//!
//! ```
//! use std::rc::Rc;
//! use kurbo::{Point, Rect, Size};
//! use understory_interaction::context::Scope;
//! use understory_interaction::provider::{InteractionProvider, UseInteraction, use_interaction};
//! use understory_interaction::scene::Scene;
//! use understory_interaction::store::InteractionProps;
//! use understory_interaction::types::{Candidate, CursorIcon, ObjectFlags};
//! use understory_interaction::window::Window;
//!
//! // One mesh covering the left half of the screen, under root 0.
//! struct Halves;
//! impl Scene<u32> for Halves {
//!     type Camera = ();
//!     fn camera(&self) -> Self::Camera {}
//!     fn intersect(&self, ndc: Point, _: &Self::Camera, roots: &[u32], _: bool) -> Vec<Candidate<u32>> {
//!         let left = Rect::new(-1.0, -1.0, 0.0, 1.0);
//!         if roots.contains(&0) && left.contains(ndc) {
//!             vec![Candidate { object: 1, distance: 1.0, flags: ObjectFlags::MESH }]
//!         } else {
//!             Vec::new()
//!         }
//!     }
//! }
//!
//! let window = Rc::new(Window::new(Size::new(800.0, 600.0)));
//! let scope = Scope::new().provide(Halves);
//! let provider = InteractionProvider::mount::<Halves>(
//!     &scope,
//!     &window,
//!     InteractionProps { root: Some(0), ..Default::default() },
//! )
//! .unwrap();
//! let interaction = use_interaction::<u32>(provider.scope(), UseInteraction::default()).unwrap();
//!
//! window.pointer_move(Point::new(100.0, 300.0));
//! assert_eq!(interaction.hovered().current, Some(1));
//! assert_eq!(window.cursor(), CursorIcon::Pointer);
//!
//! // Selecting dismisses the hover.
//! window.click(Point::new(100.0, 300.0));
//! assert_eq!(interaction.selected().current, Some(1));
//! assert_eq!(interaction.hovered().current, None);
//! assert_eq!(interaction.hovered().last, Some(1));
//!
//! // Clicking empty space keeps the selection.
//! window.click(Point::new(700.0, 300.0));
//! assert_eq!(interaction.selected().current, Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod context;
pub mod error;
pub mod filter;
pub mod provider;
pub mod resolve;
pub mod scene;
pub mod store;
pub mod types;
pub mod window;

#[cfg(test)]
mod test_scene;
