// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime overrides: consumer-supplied root and filter, empty selection, reset.
//!
//! Objects here are screen-aligned rectangles in device coordinates, enough to
//! show how overrides change what the provider resolves.
//!
//! Run:
//! - `cargo run -p understory_demos --example interaction_overrides`

use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use understory_interaction::context::Scope;
use understory_interaction::filter::Filter;
use understory_interaction::provider::{InteractionProvider, UseInteraction, use_interaction};
use understory_interaction::scene::Scene;
use understory_interaction::store::InteractionProps;
use understory_interaction::types::{Candidate, ObjectFlags};
use understory_interaction::window::Window;

/// `(id, parent, ndc bounds, distance, flags)`
struct Panels(Vec<(u32, Option<u32>, Rect, f64, ObjectFlags)>);

impl Scene<u32> for Panels {
    type Camera = ();

    fn camera(&self) -> Self::Camera {}

    fn intersect(
        &self,
        ndc: Point,
        _camera: &Self::Camera,
        roots: &[u32],
        _recursive: bool,
    ) -> Vec<Candidate<u32>> {
        let mut hits: Vec<_> = self
            .0
            .iter()
            .filter(|(id, parent, ..)| {
                roots.contains(id) || parent.is_some_and(|p| roots.contains(&p))
            })
            .filter(|(_, _, bounds, ..)| bounds.contains(ndc))
            .map(|&(object, _, _, distance, flags)| Candidate {
                object,
                distance,
                flags,
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

fn main() {
    let left = Rect::new(-1.0, -1.0, 0.0, 1.0);
    let right = Rect::new(0.0, -1.0, 1.0, 1.0);
    let scene = Panels(vec![
        (10, None, Rect::ZERO, 0.0, ObjectFlags::MESH),
        (11, Some(10), left, 2.0, ObjectFlags::MESH),
        (12, Some(10), right, 2.0, ObjectFlags::MESH),
        (13, Some(10), right, 1.0, ObjectFlags::LINE),
        (20, None, Rect::ZERO, 0.0, ObjectFlags::MESH),
        (21, Some(20), left, 3.0, ObjectFlags::MESH),
    ]);
    let at_left = Point::new(200.0, 300.0);
    let at_right = Point::new(600.0, 300.0);

    let window = Rc::new(Window::new(Size::new(800.0, 600.0)));
    let scope = Scope::new().provide(scene);
    let provider = InteractionProvider::mount::<Panels>(
        &scope,
        &window,
        InteractionProps {
            root: Some(10),
            allow_empty_selection: true,
            ..Default::default()
        },
    )
    .unwrap();

    println!("== Default filter skips the line ==");
    let interaction = use_interaction::<u32>(provider.scope(), UseInteraction::default()).unwrap();
    window.pointer_move(at_right);
    println!("  {:?}", interaction.hovered());
    assert_eq!(interaction.hovered().current, Some(12));

    println!("== Consumer accepts lines too ==");
    let _ = use_interaction::<u32>(
        provider.scope(),
        UseInteraction {
            filter: Some(Filter::flags(ObjectFlags::MESH | ObjectFlags::LINE)),
            ..Default::default()
        },
    )
    .unwrap();
    window.pointer_move(at_right);
    println!("  {:?}", interaction.hovered());
    assert_eq!(interaction.hovered().current, Some(13));

    println!("== Consumer rescopes to the second subtree ==");
    let _ = use_interaction::<u32>(
        provider.scope(),
        UseInteraction {
            root: Some(Some(20)),
            ..Default::default()
        },
    )
    .unwrap();
    window.click(at_left);
    println!("  {:?}", interaction.selected());
    assert_eq!(interaction.selected().current, Some(21));

    println!("== Empty click clears (allowed) ==");
    window.click(at_right);
    println!("  {:?}", interaction.selected());
    assert_eq!(interaction.selected().current, None);
    assert_eq!(interaction.selected().last, Some(21));

    println!("== Sticky again, then reset ==");
    interaction.set_allow_empty_selection(false);
    window.click(at_left);
    window.click(at_right);
    assert_eq!(interaction.selected().current, Some(21));
    interaction.reset_selected();
    println!("  {:?}", interaction.selected());
    assert_eq!(interaction.selected().current, None);
    assert_eq!(interaction.selected().last, Some(21));

    println!("== Pick probes without changing state ==");
    println!("  pick(left) = {:?}", interaction.pick(at_left));
    assert_eq!(interaction.pick(at_left), Some(21));
    assert_eq!(interaction.selected().current, None);
}
