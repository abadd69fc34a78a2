// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_interaction::context::Scope;
use understory_interaction::provider::InteractionProvider;
use understory_interaction::scene::Scene;
use understory_interaction::store::{InteractionProps, InteractionStore};
use understory_interaction::types::{Candidate, ObjectFlags};
use understory_interaction::window::Window;

const VIEWPORT: Size = Size::new(1920.0, 1080.0);

/// `n`×`n` mesh cells tiling device space, each fronted by a line cell.
struct Grid {
    n: usize,
}

impl Scene<u32> for Grid {
    type Camera = ();

    fn camera(&self) -> Self::Camera {}

    fn intersect(
        &self,
        ndc: Point,
        _camera: &Self::Camera,
        roots: &[u32],
        _recursive: bool,
    ) -> Vec<Candidate<u32>> {
        if !roots.contains(&0) {
            return Vec::new();
        }
        let cell = |v: f64| (((v + 1.0) / 2.0 * self.n as f64) as usize).min(self.n - 1);
        let id = (cell(ndc.y) * self.n + cell(ndc.x)) as u32 * 2 + 1;
        vec![
            Candidate {
                object: id + 1,
                distance: 1.0,
                flags: ObjectFlags::LINE,
            },
            Candidate {
                object: id,
                distance: 2.0,
                flags: ObjectFlags::MESH,
            },
        ]
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        ((x >> 11) as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_points(count: usize) -> Vec<Point> {
    let mut rng = Rng(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * VIEWPORT.width, rng.next_f64() * VIEWPORT.height))
        .collect()
}

fn rooted() -> InteractionProps<u32> {
    InteractionProps {
        root: Some(0),
        ..Default::default()
    }
}

fn bench_window_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_dispatch");
    let points = gen_points(1024);
    group.throughput(Throughput::Elements(points.len() as u64));
    for &n in &[4usize, 64] {
        let window = Rc::new(Window::new(VIEWPORT));
        let scope = Scope::new().provide(Grid { n });
        let provider = InteractionProvider::mount::<Grid>(&scope, &window, rooted()).unwrap();
        group.bench_function(format!("pointer_move_grid{}", n), |b| {
            b.iter(|| {
                for &p in &points {
                    window.pointer_move(p);
                }
                black_box(provider.interaction().hovered());
            })
        });
        group.bench_function(format!("click_grid{}", n), |b| {
            b.iter(|| {
                for &p in &points {
                    window.click(p);
                }
                black_box(provider.interaction().selected());
            })
        });
    }
    group.finish();
}

fn bench_store_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("store");
    let targets: Vec<Option<u32>> = (0..1024u32)
        .map(|i| if i % 5 == 0 { None } else { Some(i / 3) })
        .collect();
    group.throughput(Throughput::Elements(targets.len() as u64));
    group.bench_function("hover_and_select", |b| {
        let mut store = InteractionStore::new(rooted());
        b.iter(|| {
            for &t in &targets {
                black_box(store.set_hovered(t));
                black_box(store.set_selected(t));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_window_dispatch, bench_store_transitions);
criterion_main!(benches);
