// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate filters.
//!
//! A [`Filter`] maps the nearest-first candidate list reported by a
//! [`Scene`](crate::scene::Scene) to the eligible targets, in priority order.
//! The first eligible target wins, so a filter that reorders candidates also
//! decides which object counts as nearest.

use alloc::rc::Rc;
use alloc::vec::Vec;

use crate::types::{Candidate, ObjectFlags};

type FilterFn<K> = dyn Fn(&[Candidate<K>]) -> Vec<K>;

/// Shared, clonable candidate filter.
pub struct Filter<K> {
    f: Rc<FilterFn<K>>,
}

impl<K: Copy + 'static> Filter<K> {
    /// Wrap an arbitrary candidate → target mapping.
    pub fn new(f: impl Fn(&[Candidate<K>]) -> Vec<K> + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    /// Keep candidates whose flags intersect `flags`, preserving order.
    pub fn flags(flags: ObjectFlags) -> Self {
        Self::new(move |candidates| {
            candidates
                .iter()
                .filter(|c| c.flags.intersects(flags))
                .map(|c| c.object)
                .collect()
        })
    }

    /// Keep mesh-like candidates only. This is the default.
    pub fn meshes() -> Self {
        Self::flags(ObjectFlags::MESH)
    }

    /// Keep candidates whose object satisfies `pred`, preserving order.
    pub fn objects(pred: impl Fn(&K) -> bool + 'static) -> Self {
        Self::new(move |candidates| {
            candidates
                .iter()
                .filter(|c| pred(&c.object))
                .map(|c| c.object)
                .collect()
        })
    }
}

impl<K> Filter<K> {
    /// Run the filter over `candidates`.
    pub fn apply(&self, candidates: &[Candidate<K>]) -> Vec<K> {
        (self.f)(candidates)
    }
}

impl<K> Clone for Filter<K> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

impl<K: Copy + 'static> Default for Filter<K> {
    fn default() -> Self {
        Self::meshes()
    }
}

impl<K> core::fmt::Debug for Filter<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn candidate(object: u32, distance: f64, flags: ObjectFlags) -> Candidate<u32> {
        Candidate {
            object,
            distance,
            flags,
        }
    }

    #[test]
    fn meshes_keep_order_and_drop_other_kinds() {
        let hits = [
            candidate(1, 0.5, ObjectFlags::LINE),
            candidate(2, 1.0, ObjectFlags::MESH),
            candidate(3, 2.0, ObjectFlags::SPRITE),
            candidate(4, 3.0, ObjectFlags::MESH | ObjectFlags::POINTS),
        ];
        assert_eq!(Filter::meshes().apply(&hits), vec![2, 4]);
        assert_eq!(Filter::default().apply(&hits), vec![2, 4]);
    }

    #[test]
    fn flags_accept_any_requested_kind() {
        let hits = [
            candidate(1, 0.5, ObjectFlags::LINE),
            candidate(2, 1.0, ObjectFlags::MESH),
            candidate(3, 2.0, ObjectFlags::SPRITE),
        ];
        let f = Filter::flags(ObjectFlags::LINE | ObjectFlags::SPRITE);
        assert_eq!(f.apply(&hits), vec![1, 3]);
    }

    #[test]
    fn custom_filter_may_reorder() {
        let hits = [
            candidate(1, 0.5, ObjectFlags::MESH),
            candidate(2, 1.0, ObjectFlags::MESH),
        ];
        let farthest_first =
            Filter::new(|hits: &[Candidate<u32>]| hits.iter().rev().map(|c| c.object).collect());
        assert_eq!(farthest_first.apply(&hits), vec![2, 1]);
    }

    #[test]
    fn objects_predicate_and_empty_input() {
        let only_two = Filter::objects(|k: &u32| *k == 2);
        assert!(only_two.apply(&[]).is_empty());
        let hits = [
            candidate(1, 0.5, ObjectFlags::MESH),
            candidate(2, 1.0, ObjectFlags::LINE),
        ];
        assert_eq!(only_two.apply(&hits), vec![2]);
    }
}
