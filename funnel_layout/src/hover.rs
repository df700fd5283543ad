// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer queries over a laid-out [`Funnel`].
//!
//! Bands never overlap, so a point hits at most one band plus, with a
//! tolerance, its neighbors across a shared edge. Results are ranked by
//! [`HitScore`](funnel_hit::HitScore) distance, ties keeping dataset order.

use funnel_hit::{HitParams, HitScore, PreciseHitTest};
use kurbo::Point;
use smallvec::SmallVec;

use crate::{Funnel, FunnelElement};

/// Narrow-phase hit result for a single key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyHit<K> {
    /// The key that was hit (for funnels, the row index).
    pub key: K,
    /// Score from the precise hit test.
    pub score: HitScore,
}

/// Hits for one query; funnels rarely produce more than a couple.
pub type HitList<K> = SmallVec<[KeyHit<K>; 4]>;

/// Run precise hit tests for a collection of keyed shapes.
///
/// The caller supplies `(key, shape)` pairs whose shapes implement
/// [`PreciseHitTest`] in the same coordinate space as `point`.
pub fn precise_hits_for_point<K, S, I>(
    candidates: I,
    point: Point,
    params: &HitParams,
) -> HitList<K>
where
    S: PreciseHitTest,
    I: IntoIterator<Item = (K, S)>,
{
    let mut hits = HitList::new();
    for (key, shape) in candidates {
        if let Some(score) = shape.hit_test_local(point, params) {
            hits.push(KeyHit { key, score });
        }
    }
    hits
}

impl Funnel {
    /// Row indices of the visible bands hit by `point`, nearest first.
    pub fn hits_at(&self, point: Point, params: &HitParams) -> HitList<usize> {
        let mut hits = precise_hits_for_point(
            self.visible().map(|e| (e.index, e.trapezium)),
            point,
            params,
        );
        hits.sort_by(|a, b| a.score.cmp_distance(&b.score));
        hits
    }

    /// The nearest visible band hit by `point`.
    pub fn element_at(&self, point: Point, params: &HitParams) -> Option<&FunnelElement> {
        let nearest = self.hits_at(point, params).into_iter().next()?;
        self.get(nearest.key)
    }

    /// Row indices of the visible bands whose horizontal span contains `x`.
    ///
    /// This backs "label" hover modes, where only the pointer's x matters.
    pub fn label_hits(&self, x: f64) -> SmallVec<[usize; 4]> {
        self.visible()
            .filter(|e| e.trapezium.in_label_range(x))
            .map(|e| e.index)
            .collect()
    }
}
