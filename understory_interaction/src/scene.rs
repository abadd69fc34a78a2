// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene collaborator: active camera and ray intersection.
//!
//! This crate does not do geometry. A [`Scene`] implementation wraps whatever
//! scene graph and ray caster the application already has.

use alloc::vec::Vec;

use crate::filter::Filter;
use crate::types::Candidate;
use kurbo::Point;

/// Camera and ray-intersection provider for objects keyed by `K`.
///
/// ## Contract
///
/// - [`Scene::camera`] returns the camera active at call time; it is read on every event.
/// - [`Scene::intersect`] casts a ray from `camera` through `ndc`
///   (`x` in `[-1, 1]` left to right, `y` in `[-1, 1]` bottom to top) against
///   `roots`, and against all of their descendants when `recursive` is set.
///   Results are nearest-first; ties follow the implementation's traversal order.
pub trait Scene<K> {
    /// Camera handle type.
    type Camera;

    /// Returns the active camera.
    fn camera(&self) -> Self::Camera;

    /// Returns the objects hit by a ray through `ndc`, nearest-first.
    fn intersect(
        &self,
        ndc: Point,
        camera: &Self::Camera,
        roots: &[K],
        recursive: bool,
    ) -> Vec<Candidate<K>>;
}

/// Object-safe view of a [`Scene`] used by the provider, which must not be
/// generic over the scene's camera type.
pub(crate) trait Picker<K> {
    fn pick(&self, ndc: Point, root: K, filter: &Filter<K>) -> Option<K>;
}

impl<K: Copy, S: Scene<K>> Picker<K> for S {
    fn pick(&self, ndc: Point, root: K, filter: &Filter<K>) -> Option<K> {
        let camera = self.camera();
        let candidates = self.intersect(ndc, &camera, &[root], true);
        filter.apply(&candidates).into_iter().next()
    }
}
