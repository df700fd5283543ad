// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-level hit testing for funnel chart shapes.
//!
//! This crate provides small, reusable primitives for narrow-phase hit
//! testing of closed polygons in local 2D coordinates, built on top of
//! [`kurbo`]. It knows nothing about charts, datasets or layout; the
//! `funnel_shape` crate builds its trapezium element on top of it.
//!
//! # Key types
//!
//! - [`HitParams`] – per-query fill and stroke tolerances.
//! - [`HitScore`] – a small scoring record `{ distance, kind }` used for
//!   ranking candidates. Lower distance is preferred; [`HitKind`] tells fill
//!   hits from outline hits.
//! - [`PreciseHitTest`] – a trait implemented by shapes that can answer
//!   “does this local-space point hit me?” queries.
//!
//! The [`polygon`] module holds the free functions the shapes are made of:
//! ray-casting containment, shoelace area and centroid, and the distance
//! from a point to a polygon outline.
//!
//! ```
//! use funnel_hit::{HitParams, hit_test_polygon};
//! use kurbo::Point;
//!
//! let quad = [
//!     Point::new(0.0, 10.0),
//!     Point::new(2.0, 0.0),
//!     Point::new(8.0, 0.0),
//!     Point::new(10.0, 10.0),
//! ];
//! assert!(hit_test_polygon(&quad, Point::new(5.0, 5.0), &HitParams::default()).is_some());
//! assert!(hit_test_polygon(&quad, Point::new(0.5, 1.0), &HitParams::default()).is_none());
//! ```

#![no_std]

use core::cmp::Ordering;

use kurbo::{Point, Rect};

/// Polygon containment, area and centroid helpers.
pub mod polygon;

/// Kind of hit produced by a precise test.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HitKind {
    /// Hit the interior/fill of a shape.
    Fill,
    /// Hit near the outline of a shape, within the stroke tolerance.
    Stroke,
}

/// Parameters controlling precise hit tests.
#[derive(Clone, Copy, Debug)]
pub struct HitParams {
    /// Tolerance in local units for hits against filled regions.
    ///
    /// Points outside the polygon but within this distance of its outline
    /// still count as fill hits, which helps with thin funnel bands.
    pub fill_tolerance: f64,
    /// Tolerance in local units for hits against the outline.
    ///
    /// Only consulted when the fill test (including its tolerance) misses.
    pub stroke_tolerance: f64,
}

impl Default for HitParams {
    fn default() -> Self {
        Self {
            fill_tolerance: 0.0,
            stroke_tolerance: 0.0,
        }
    }
}

/// Score returned from a precise hit.
///
/// Lower distance is considered a better (closer) hit for tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitScore {
    /// Geometric distance in local coordinate space.
    pub distance: f64,
    /// Classification of what was hit.
    pub kind: HitKind,
}

impl HitScore {
    /// Convenience constructor for a filled hit at distance 0.
    pub const fn filled() -> Self {
        Self {
            distance: 0.0,
            kind: HitKind::Fill,
        }
    }

    /// Compare two scores by distance, nearer first.
    ///
    /// NaN distances compare equal, so a stable sort keeps their order.
    pub fn cmp_distance(&self, other: &Self) -> Ordering {
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Trait for precise 2D hit testing in local coordinates.
///
/// Implementors are free to use any strategy, but should treat the
/// tolerances in [`HitParams`] as inclusive radii when appropriate.
pub trait PreciseHitTest {
    /// Perform a precise hit test against `pt` in the shape's local
    /// coordinate space.
    ///
    /// Returns `Some(HitScore)` when the point is considered a hit.
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore>;
}

/// Precise hit test for a closed polygon given by its vertices.
///
/// The polygon is implicitly closed (the last vertex connects back to the
/// first). Containment uses [`polygon::contains`]; points outside are scored
/// by their distance to the outline and accepted when that distance is
/// within `fill_tolerance` (a fill hit) or `stroke_tolerance` (a stroke hit).
pub fn hit_test_polygon(vertices: &[Point], pt: Point, params: &HitParams) -> Option<HitScore> {
    let slack = params.fill_tolerance.max(params.stroke_tolerance).max(0.0);
    let bounds = polygon::bounding_box(vertices)?;
    let inflated = if slack > 0.0 {
        bounds.inflate(slack, slack)
    } else {
        bounds
    };
    if !contains_inclusive(&inflated, pt) {
        return None;
    }

    if polygon::contains(vertices, pt) {
        return Some(HitScore::filled());
    }
    if slack <= 0.0 {
        return None;
    }

    let distance = polygon::distance_to_outline(vertices, pt);
    if distance <= params.fill_tolerance {
        Some(HitScore {
            distance,
            kind: HitKind::Fill,
        })
    } else if distance <= params.stroke_tolerance {
        Some(HitScore {
            distance,
            kind: HitKind::Stroke,
        })
    } else {
        None
    }
}

/// `Rect::contains` excludes the far edges; tolerant culling must keep them.
fn contains_inclusive(rect: &Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [Point; 4] {
        [
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]
    }

    #[test]
    fn polygon_hit_inside() {
        let score = hit_test_polygon(&square(), Point::new(5.0, 5.0), &HitParams::default())
            .expect("expected hit");
        assert_eq!(score.kind, HitKind::Fill);
        assert_eq!(score.distance, 0.0);
    }

    #[test]
    fn polygon_miss_outside_without_tolerance() {
        let pt = Point::new(11.0, 5.0);
        assert!(hit_test_polygon(&square(), pt, &HitParams::default()).is_none());
    }

    #[test]
    fn polygon_hit_with_fill_tolerance() {
        let params = HitParams {
            fill_tolerance: 1.0,
            ..HitParams::default()
        };
        let score = hit_test_polygon(&square(), Point::new(10.5, 5.0), &params)
            .expect("expected tolerant hit");
        assert_eq!(score.kind, HitKind::Fill);
        assert!((score.distance - 0.5).abs() < 1e-12, "distance to right edge");
    }

    #[test]
    fn polygon_hit_with_stroke_tolerance_only() {
        let params = HitParams {
            stroke_tolerance: 2.0,
            ..HitParams::default()
        };
        let score = hit_test_polygon(&square(), Point::new(5.0, 11.5), &params)
            .expect("expected stroke hit");
        assert_eq!(score.kind, HitKind::Stroke);
        assert!(hit_test_polygon(&square(), Point::new(5.0, 13.0), &params).is_none());
    }

    #[test]
    fn empty_polygon_never_hits() {
        assert!(hit_test_polygon(&[], Point::ZERO, &HitParams::default()).is_none());
    }

    #[test]
    fn scores_order_by_distance() {
        let near = HitScore::filled();
        let far = HitScore {
            distance: 3.0,
            kind: HitKind::Stroke,
        };
        assert_eq!(near.cmp_distance(&far), Ordering::Less);
        assert_eq!(far.cmp_distance(&near), Ordering::Greater);
    }
}
