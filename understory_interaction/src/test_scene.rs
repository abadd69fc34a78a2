// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flat test scene: objects are NDC rectangles at fixed distances.

use alloc::vec::Vec;
use core::cell::Cell;

use kurbo::{Point, Rect, Size};

use crate::scene::Scene;
use crate::types::{Candidate, ObjectFlags};

pub(crate) const VIEWPORT: Size = Size::new(800.0, 600.0);

/// Root of the fixture; has no geometry of its own.
pub(crate) const ROOT: u32 = 0;
/// Mesh left of center.
pub(crate) const LEFT: u32 = 1;
/// Mesh right of center.
pub(crate) const RIGHT: u32 = 2;
/// Line in front of `LEFT`.
pub(crate) const LEFT_LINE: u32 = 3;
/// Mesh over `RIGHT`, outside the `ROOT` subtree.
pub(crate) const DETACHED: u32 = 4;

/// Pixel position over `LEFT`.
pub(crate) const AT_LEFT: Point = Point::new(VIEWPORT.width / 4.0, VIEWPORT.height / 2.0);
/// Pixel position over `RIGHT`.
pub(crate) const AT_RIGHT: Point = Point::new(VIEWPORT.width * 3.0 / 4.0, VIEWPORT.height / 2.0);
/// Pixel position over nothing.
pub(crate) const AT_EMPTY: Point = Point::ZERO;

struct Object {
    id: u32,
    parent: Option<u32>,
    bounds: Rect,
    distance: f64,
    flags: ObjectFlags,
}

pub(crate) struct FlatScene {
    objects: Vec<Object>,
    intersections: Cell<usize>,
}

impl FlatScene {
    pub(crate) fn new() -> Self {
        Self {
            objects: Vec::new(),
            intersections: Cell::new(0),
        }
    }

    pub(crate) fn add(
        &mut self,
        id: u32,
        parent: Option<u32>,
        bounds: Rect,
        distance: f64,
        flags: ObjectFlags,
    ) {
        self.objects.push(Object {
            id,
            parent,
            bounds,
            distance,
            flags,
        });
    }

    /// Two meshes under a shared root, a line in front of the left one, and a
    /// detached mesh behind the right one.
    pub(crate) fn fixture() -> Self {
        let mut scene = Self::new();
        scene.add(ROOT, None, Rect::ZERO, 0.0, ObjectFlags::MESH);
        scene.add(
            LEFT,
            Some(ROOT),
            Rect::new(-0.75, -0.25, -0.25, 0.25),
            5.0,
            ObjectFlags::MESH,
        );
        scene.add(
            RIGHT,
            Some(ROOT),
            Rect::new(0.25, -0.25, 0.75, 0.25),
            5.0,
            ObjectFlags::MESH,
        );
        scene.add(
            LEFT_LINE,
            Some(ROOT),
            Rect::new(-0.75, -0.25, -0.25, 0.25),
            1.0,
            ObjectFlags::LINE,
        );
        scene.add(
            DETACHED,
            None,
            Rect::new(0.25, -0.25, 0.75, 0.25),
            9.0,
            ObjectFlags::MESH,
        );
        scene
    }

    /// Number of ray casts performed so far.
    pub(crate) fn intersections(&self) -> usize {
        self.intersections.get()
    }

    fn parent_of(&self, id: u32) -> Option<u32> {
        self.objects.iter().find(|o| o.id == id).and_then(|o| o.parent)
    }

    fn is_within(&self, id: u32, root: u32, recursive: bool) -> bool {
        if id == root {
            return true;
        }
        if !recursive {
            return false;
        }
        let mut cur = self.parent_of(id);
        while let Some(p) = cur {
            if p == root {
                return true;
            }
            cur = self.parent_of(p);
        }
        false
    }
}

impl Scene<u32> for FlatScene {
    type Camera = ();

    fn camera(&self) -> Self::Camera {}

    fn intersect(
        &self,
        ndc: Point,
        _camera: &Self::Camera,
        roots: &[u32],
        recursive: bool,
    ) -> Vec<Candidate<u32>> {
        self.intersections.set(self.intersections.get() + 1);
        let mut hits: Vec<Candidate<u32>> = self
            .objects
            .iter()
            .filter(|o| o.bounds.contains(ndc))
            .filter(|o| roots.iter().any(|&r| self.is_within(o.id, r, recursive)))
            .map(|o| Candidate {
                object: o.id,
                distance: o.distance,
                flags: o.flags,
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}
