// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover and selection over ray-cast spheres.
//!
//! A tiny scene of spheres in front of a perspective camera stands in for a real
//! scene graph. The interaction provider listens to a window; the demo feeds it
//! pointer moves and clicks and prints the resulting states.
//!
//! Run:
//! - `cargo run -p understory_demos --example interaction_spheres`

use std::rc::Rc;

use glam::DVec3;
use kurbo::{Point, Size};
use understory_interaction::context::Scope;
use understory_interaction::provider::{InteractionProvider, UseInteraction, use_interaction};
use understory_interaction::scene::Scene;
use understory_interaction::store::InteractionProps;
use understory_interaction::types::{Candidate, Changes, CursorIcon, ObjectFlags};
use understory_interaction::window::Window;

/// Pinhole camera at the origin looking down -Z.
#[derive(Copy, Clone, Debug)]
struct Camera {
    tan_half_fov: f64,
    aspect: f64,
}

impl Camera {
    fn ray(&self, ndc: Point) -> DVec3 {
        DVec3::new(
            ndc.x * self.tan_half_fov * self.aspect,
            ndc.y * self.tan_half_fov,
            -1.0,
        )
        .normalize()
    }

    fn project(&self, p: DVec3, viewport: Size) -> Point {
        let ndc_x = p.x / -p.z / (self.tan_half_fov * self.aspect);
        let ndc_y = p.y / -p.z / self.tan_half_fov;
        Point::new(
            (ndc_x + 1.0) / 2.0 * viewport.width,
            (1.0 - ndc_y) / 2.0 * viewport.height,
        )
    }
}

struct Sphere {
    id: u32,
    parent: Option<u32>,
    center: DVec3,
    radius: f64,
    flags: ObjectFlags,
}

struct Spheres {
    camera: Camera,
    objects: Vec<Sphere>,
}

impl Spheres {
    fn under(&self, id: u32, root: u32) -> bool {
        let mut cur = Some(id);
        while let Some(c) = cur {
            if c == root {
                return true;
            }
            cur = self.objects.iter().find(|o| o.id == c).and_then(|o| o.parent);
        }
        false
    }
}

impl Scene<u32> for Spheres {
    type Camera = Camera;

    fn camera(&self) -> Camera {
        self.camera
    }

    fn intersect(
        &self,
        ndc: Point,
        camera: &Camera,
        roots: &[u32],
        recursive: bool,
    ) -> Vec<Candidate<u32>> {
        let dir = camera.ray(ndc);
        let mut hits: Vec<Candidate<u32>> = self
            .objects
            .iter()
            .filter(|o| {
                roots
                    .iter()
                    .any(|&r| o.id == r || (recursive && self.under(o.id, r)))
            })
            .filter_map(|o| {
                let along = dir.dot(o.center);
                let miss_sq = o.center.length_squared() - along * along;
                let r_sq = o.radius * o.radius;
                if o.radius <= 0.0 || miss_sq > r_sq {
                    return None;
                }
                let distance = along - (r_sq - miss_sq).sqrt();
                (distance > 0.0).then_some(Candidate {
                    object: o.id,
                    distance,
                    flags: o.flags,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

fn main() {
    let viewport = Size::new(800.0, 600.0);
    let camera = Camera {
        tan_half_fov: 1.0,
        aspect: viewport.width / viewport.height,
    };
    let left = DVec3::new(-3.0, 0.0, -5.0);
    let right = DVec3::new(3.0, 0.0, -5.0);
    let scene = Spheres {
        camera,
        objects: vec![
            Sphere {
                id: 0,
                parent: None,
                center: DVec3::new(0.0, 0.0, -5.0),
                radius: 0.0,
                flags: ObjectFlags::MESH,
            },
            Sphere {
                id: 1,
                parent: Some(0),
                center: left,
                radius: 0.8,
                flags: ObjectFlags::MESH,
            },
            Sphere {
                id: 2,
                parent: Some(0),
                center: right,
                radius: 0.8,
                flags: ObjectFlags::MESH,
            },
            // A sprite on the sight line to the right sphere; ignored by the default filter.
            Sphere {
                id: 3,
                parent: Some(0),
                center: DVec3::new(1.8, 0.0, -3.0),
                radius: 0.2,
                flags: ObjectFlags::SPRITE,
            },
        ],
    };

    let window = Rc::new(Window::new(viewport));
    let scope = Scope::new().provide(scene);
    let provider = InteractionProvider::mount::<Spheres>(
        &scope,
        &window,
        InteractionProps {
            root: Some(0),
            ..Default::default()
        },
    )
    .expect("scene is provided");
    let interaction = use_interaction::<u32>(provider.scope(), UseInteraction::default())
        .expect("inside the provider");

    interaction.subscribe(Changes::SELECTED_CURRENT, |snap, _| {
        println!(
            "  selection changed: {:?} -> {:?}",
            snap.selected.last, snap.selected.current
        );
    });

    let at_left = camera.project(left, viewport);
    let at_right = camera.project(right, viewport);

    println!("== Hover left ({at_left:?}) ==");
    window.pointer_move(at_left);
    println!("  {:?} cursor={:?}", interaction.hovered(), window.cursor());
    assert_eq!(interaction.hovered().current, Some(1));
    assert_eq!(window.cursor(), CursorIcon::Pointer);

    println!("== Hover right ({at_right:?}) ==");
    window.pointer_move(at_right);
    println!("  {:?}", interaction.hovered());
    assert_eq!(interaction.hovered().current, Some(2));
    assert_eq!(interaction.hovered().last, Some(1));

    println!("== Click right ==");
    window.click(at_right);
    println!(
        "  selected={:?} hovered={:?}",
        interaction.selected(),
        interaction.hovered()
    );
    assert_eq!(interaction.selected().current, Some(2));
    assert_eq!(interaction.hovered().current, None);
    assert_eq!(window.cursor(), CursorIcon::Default);

    println!("== Click empty space ==");
    window.click(Point::ZERO);
    println!("  selected={:?}", interaction.selected());
    assert_eq!(interaction.selected().current, Some(2));

    provider.unmount();
    assert_eq!(window.listener_count(), 0);
}
