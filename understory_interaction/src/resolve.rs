// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit resolution: pixel position → device coordinates → ray cast → filter → best match.
//!
//! ## Overview
//!
//! Resolution is pure given its inputs. It is skipped entirely (no ray cast)
//! when no root is configured, and yields `None` when the viewport is
//! degenerate or the filter leaves nothing.
//!
//! ## Device coordinates
//!
//! Pixel `x` in `[0, width]` maps to `[-1, 1]`; pixel `y` in `[0, height]`
//! maps to `[1, -1]`, since screen Y grows downward and device Y grows upward.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_interaction::resolve::to_ndc;
//!
//! let viewport = Size::new(800.0, 600.0);
//! assert_eq!(to_ndc(Point::new(400.0, 300.0), viewport), Some(Point::ZERO));
//! assert_eq!(to_ndc(Point::ZERO, viewport), Some(Point::new(-1.0, 1.0)));
//! assert_eq!(to_ndc(Point::ZERO, Size::ZERO), None);
//! ```

use kurbo::{Point, Size};

use crate::filter::Filter;
use crate::scene::{Picker, Scene};

/// Map a client pixel position to normalized device coordinates.
///
/// Returns `None` when `viewport` has a non-positive or non-finite dimension.
pub fn to_ndc(position: Point, viewport: Size) -> Option<Point> {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(viewport.width) || !usable(viewport.height) {
        return None;
    }
    Some(Point::new(
        (position.x / viewport.width) * 2.0 - 1.0,
        -(position.y / viewport.height) * 2.0 + 1.0,
    ))
}

/// Resolve the object under `position`, scoped to `root`.
///
/// The first element of the filtered candidate list wins, so the filter's
/// output order is the authoritative priority order.
pub fn resolve<K: Copy, S: Scene<K>>(
    scene: &S,
    position: Point,
    viewport: Size,
    root: Option<K>,
    filter: &Filter<K>,
) -> Option<K> {
    resolve_with(scene, position, viewport, root, filter)
}

pub(crate) fn resolve_with<K: Copy>(
    picker: &dyn Picker<K>,
    position: Point,
    viewport: Size,
    root: Option<K>,
    filter: &Filter<K>,
) -> Option<K> {
    let root = root?;
    let Some(ndc) = to_ndc(position, viewport) else {
        tracing::trace!(?viewport, "degenerate viewport, resolved to no match");
        return None;
    };
    picker.pick(ndc, root, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_scene::*;
    use crate::types::{Candidate, ObjectFlags};

    #[test]
    fn ndc_corners_and_center() {
        let v = Size::new(200.0, 100.0);
        assert_eq!(to_ndc(Point::new(0.0, 0.0), v), Some(Point::new(-1.0, 1.0)));
        assert_eq!(
            to_ndc(Point::new(200.0, 100.0), v),
            Some(Point::new(1.0, -1.0))
        );
        assert_eq!(to_ndc(Point::new(100.0, 50.0), v), Some(Point::ZERO));
        assert_eq!(
            to_ndc(Point::new(50.0, 75.0), v),
            Some(Point::new(-0.5, -0.5))
        );
    }

    #[test]
    fn ndc_rejects_degenerate_viewports() {
        let p = Point::new(1.0, 1.0);
        assert_eq!(to_ndc(p, Size::new(0.0, 100.0)), None);
        assert_eq!(to_ndc(p, Size::new(100.0, -1.0)), None);
        assert_eq!(to_ndc(p, Size::new(f64::NAN, 100.0)), None);
        assert_eq!(to_ndc(p, Size::new(100.0, f64::INFINITY)), None);
    }

    #[test]
    fn default_filter_skips_nearer_non_mesh() {
        let scene = FlatScene::fixture();
        let hit = resolve(&scene, AT_LEFT, VIEWPORT, Some(ROOT), &Filter::meshes());
        assert_eq!(hit, Some(LEFT));
    }

    #[test]
    fn nearest_eligible_wins() {
        let scene = FlatScene::fixture();
        let any = Filter::flags(ObjectFlags::all());
        assert_eq!(
            resolve(&scene, AT_LEFT, VIEWPORT, Some(ROOT), &any),
            Some(LEFT_LINE)
        );
    }

    #[test]
    fn filter_order_is_authoritative() {
        let scene = FlatScene::fixture();
        let farthest = Filter::new(|hits: &[Candidate<u32>]| {
            hits.iter().rev().map(|c| c.object).collect()
        });
        assert_eq!(
            resolve(&scene, AT_LEFT, VIEWPORT, Some(ROOT), &farthest),
            Some(LEFT)
        );
    }

    #[test]
    fn empty_space_and_empty_filter_yield_none() {
        let scene = FlatScene::fixture();
        let meshes = Filter::meshes();
        assert_eq!(
            resolve(&scene, AT_EMPTY, VIEWPORT, Some(ROOT), &meshes),
            None
        );
        let nothing = Filter::objects(|_: &u32| false);
        assert_eq!(
            resolve(&scene, AT_RIGHT, VIEWPORT, Some(ROOT), &nothing),
            None
        );
    }

    #[test]
    fn root_scopes_the_search() {
        let scene = FlatScene::fixture();
        let meshes = Filter::meshes();
        assert_eq!(
            resolve(&scene, AT_RIGHT, VIEWPORT, Some(ROOT), &meshes),
            Some(RIGHT)
        );
        assert_eq!(
            resolve(&scene, AT_RIGHT, VIEWPORT, Some(DETACHED), &meshes),
            Some(DETACHED)
        );
        assert_eq!(
            resolve(&scene, AT_LEFT, VIEWPORT, Some(DETACHED), &meshes),
            None
        );
    }

    #[test]
    fn no_root_skips_ray_cast() {
        let scene = FlatScene::fixture();
        assert_eq!(
            resolve(&scene, AT_LEFT, VIEWPORT, None, &Filter::meshes()),
            None
        );
        assert_eq!(scene.intersections(), 0);
        let _ = resolve(&scene, AT_LEFT, Size::ZERO, Some(ROOT), &Filter::meshes());
        assert_eq!(scene.intersections(), 0);
    }
}
