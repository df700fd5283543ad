// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free functions over closed polygons given as vertex slices.
//!
//! Vertices may wind either way; the last vertex connects back to the first.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// Ray-casting point-in-polygon test.
///
/// Casts a horizontal ray from `pt` and counts edge crossings. Points exactly
/// on an edge are classified deterministically (left and top edges tend to be
/// inside, right and bottom edges outside), which is enough for pointer
/// picking. Polygons with fewer than three vertices contain nothing.
pub fn contains(vertices: &[Point], pt: Point) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = vertices[i];
        let pj = vertices[j];
        // The division is safe: the first clause implies `pi.y != pj.y`.
        if (pi.y > pt.y) != (pj.y > pt.y)
            && pt.x < (pj.x - pi.x) * (pt.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Twice the signed area (shoelace sum). Positive for counter-clockwise
/// winding in a y-up frame, which is clockwise on a y-down screen.
fn shoelace_sum(vertices: &[Point]) -> f64 {
    let n = vertices.len();
    let mut sum = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        sum += a.x * b.y - b.x * a.y;
    }
    sum
}

/// Unsigned polygon area via the shoelace formula.
pub fn area(vertices: &[Point]) -> f64 {
    (shoelace_sum(vertices) * 0.5).abs()
}

/// Area centroid via the shoelace formula.
///
/// Returns `None` for degenerate (zero-area) polygons, where the centroid is
/// undefined.
pub fn centroid(vertices: &[Point]) -> Option<Point> {
    let twice_area = shoelace_sum(vertices);
    if twice_area.abs() <= f64::EPSILON {
        return None;
    }
    let n = vertices.len();
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let cross = a.x * b.y - b.x * a.y;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    let f = 3.0 * twice_area;
    Some(Point::new(cx / f, cy / f))
}

/// Smallest axis-aligned rectangle containing every vertex.
///
/// Returns `None` for an empty slice.
pub fn bounding_box(vertices: &[Point]) -> Option<Rect> {
    let (first, rest) = vertices.split_first()?;
    let mut bounds = Rect::from_points(*first, *first);
    for p in rest {
        bounds = bounds.union_pt(*p);
    }
    Some(bounds)
}

/// Shortest distance from `pt` to any edge of the polygon outline.
///
/// Returns `f64::INFINITY` for an empty slice.
pub fn distance_to_outline(vertices: &[Point], pt: Point) -> f64 {
    let n = vertices.len();
    let mut best = f64::INFINITY;
    for i in 0..n {
        let d = distance_to_segment(vertices[i], vertices[(i + 1) % n], pt);
        best = best.min(d);
    }
    best
}

fn distance_to_segment(p0: Point, p1: Point, pt: Point) -> f64 {
    let vx = p1.x - p0.x;
    let vy = p1.y - p0.y;
    let wx = pt.x - p0.x;
    let wy = pt.y - p0.y;
    let len2 = vx * vx + vy * vy;
    let t = if len2 > 0.0 {
        (wx * vx + wy * vy) / len2
    } else {
        0.0
    };
    let t = t.clamp(0.0, 1.0);
    let dx = pt.x - (p0.x + t * vx);
    let dy = pt.y - (p0.y + t * vy);
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn triangle_trapezoid_area_matches_formula() {
        // Upper width 0, bottom width 10, height 5: (0 + 10) / 2 * 5.
        let corners = [
            Point::new(-5.0, 5.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
        ];
        assert!((area(&corners) - 25.0).abs() < EPS);
    }

    #[test]
    fn area_ignores_winding() {
        let cw = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
            Point::new(0.0, 3.0),
        ];
        let mut ccw = cw;
        ccw.reverse();
        assert!((area(&cw) - 12.0).abs() < EPS);
        assert!((area(&ccw) - 12.0).abs() < EPS);
    }

    #[test]
    fn centroid_of_rectangle_is_its_center() {
        let rect = [
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(20.0, 10.0),
        ];
        let c = centroid(&rect).expect("non-degenerate");
        assert!((c.x - 10.0).abs() < EPS);
        assert!((c.y - 5.0).abs() < EPS);

        let mut reversed = rect;
        reversed.reverse();
        let c2 = centroid(&reversed).expect("non-degenerate");
        assert!((c2.x - c.x).abs() < EPS && (c2.y - c.y).abs() < EPS);
    }

    #[test]
    fn centroid_of_trapezoid_sits_toward_wide_base() {
        // Narrow top, wide bottom: the centroid lies below mid-height.
        let corners = [
            Point::new(0.0, 10.0),
            Point::new(4.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let c = centroid(&corners).expect("non-degenerate");
        assert!((c.x - 5.0).abs() < EPS);
        assert!(c.y > 5.0, "centroid y = {}", c.y);
    }

    #[test]
    fn degenerate_polygon_has_no_centroid() {
        let collapsed = [
            Point::new(3.0, 10.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 10.0),
        ];
        assert_eq!(area(&collapsed), 0.0);
        assert!(centroid(&collapsed).is_none());
        assert!(!contains(&collapsed, Point::new(3.0, 5.0)));
    }

    #[test]
    fn ray_casting_inside_and_outside() {
        let corners = [
            Point::new(0.0, 10.0),
            Point::new(4.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        assert!(contains(&corners, Point::new(5.0, 5.0)));
        assert!(contains(&corners, Point::new(1.0, 9.0)));
        // Inside the bounding box but left of the slanted edge.
        assert!(!contains(&corners, Point::new(1.0, 1.0)));
        assert!(!contains(&corners, Point::new(100.0, 5.0)));
        assert!(!contains(&corners, Point::new(5.0, -1.0)));
    }

    #[test]
    fn boundary_classification_is_deterministic() {
        let corners = [
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        let on_edge = Point::new(10.0, 5.0);
        let first = contains(&corners, on_edge);
        for _ in 0..8 {
            assert_eq!(contains(&corners, on_edge), first);
        }
    }

    #[test]
    fn too_few_vertices_contain_nothing() {
        assert!(!contains(&[], Point::ZERO));
        assert!(!contains(
            &[Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
            Point::new(0.5, 0.5)
        ));
    }

    #[test]
    fn outline_distance_and_bounds() {
        let corners = [
            Point::new(0.0, 10.0),
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        assert!((distance_to_outline(&corners, Point::new(5.0, 12.0)) - 2.0).abs() < EPS);
        assert!((distance_to_outline(&corners, Point::new(5.0, 5.0)) - 5.0).abs() < EPS);
        assert_eq!(
            bounding_box(&corners),
            Some(Rect::new(0.0, 0.0, 10.0, 10.0))
        );
        assert!(bounding_box(&[]).is_none());
        assert_eq!(distance_to_outline(&[], Point::ZERO), f64::INFINITY);
    }
}
