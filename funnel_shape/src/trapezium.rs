// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The trapezium element.

use funnel_hit::{HitParams, HitScore, PreciseHitTest, hit_test_polygon, polygon};
use kurbo::{BezPath, Point, Rect};

use crate::{BorderSide, DrawContext};

/// Horizontal anchoring of a trapezium's two parallel edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrapeziumKind {
    /// Both edges centered on the same `x`.
    Isosceles {
        /// Shared horizontal center.
        x: f64,
    },
    /// Top edge centered on `x1`, base edge centered on `x2`.
    Scalene {
        /// Center of the top edge.
        x1: f64,
        /// Center of the base edge.
        x2: f64,
    },
}

/// One horizontal edge of a trapezium.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Vertical position.
    pub y: f64,
    /// Left end.
    pub left_x: f64,
    /// Right end.
    pub right_x: f64,
}

impl Edge {
    /// Horizontal extent of the edge.
    pub fn width(&self) -> f64 {
        self.right_x - self.left_x
    }
}

/// A funnel band: a quadrilateral with horizontal top and base edges.
///
/// Coordinates are y-down device units, so `y <= base`. Widths are expected to
/// be non-negative; the layout engine clamps them before building elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezium {
    /// Horizontal anchoring.
    pub kind: TrapeziumKind,
    /// Top edge y.
    pub y: f64,
    /// Base (bottom) edge y.
    pub base: f64,
    /// Width of the top edge.
    pub upper_width: f64,
    /// Width of the base edge.
    pub bottom_width: f64,
    /// Border stroke width; corners are inset by half of it.
    pub border_width: f64,
    /// Side left open when stroking.
    pub border_skipped: BorderSide,
}

impl Trapezium {
    /// Creates an isosceles trapezium centered on `x`.
    pub const fn isosceles(x: f64, y: f64, base: f64, upper_width: f64, bottom_width: f64) -> Self {
        Self {
            kind: TrapeziumKind::Isosceles { x },
            y,
            base,
            upper_width,
            bottom_width,
            border_width: 0.0,
            border_skipped: BorderSide::Bottom,
        }
    }

    /// Creates a scalene trapezium with its top edge centered on `x1` and its
    /// base edge centered on `x2`.
    pub const fn scalene(
        x1: f64,
        x2: f64,
        y: f64,
        base: f64,
        upper_width: f64,
        bottom_width: f64,
    ) -> Self {
        Self {
            kind: TrapeziumKind::Scalene { x1, x2 },
            y,
            base,
            upper_width,
            bottom_width,
            border_width: 0.0,
            border_skipped: BorderSide::Bottom,
        }
    }

    /// Returns a copy with the given border width and skipped side.
    #[must_use]
    pub const fn with_border(mut self, width: f64, skipped: BorderSide) -> Self {
        self.border_width = width;
        self.border_skipped = skipped;
        self
    }

    /// Returns `true` for scalene (left/right flush) trapezia.
    pub const fn is_scalene(&self) -> bool {
        matches!(self.kind, TrapeziumKind::Scalene { .. })
    }

    /// Reference x: the shared center, or the top-edge center for scalene shapes.
    pub const fn x(&self) -> f64 {
        match self.kind {
            TrapeziumKind::Isosceles { x } => x,
            TrapeziumKind::Scalene { x1, .. } => x1,
        }
    }

    const fn centers(&self) -> (f64, f64) {
        match self.kind {
            TrapeziumKind::Isosceles { x } => (x, x),
            TrapeziumKind::Scalene { x1, x2 } => (x1, x2),
        }
    }

    /// The four corners: bottom-left, top-left, top-right, bottom-right.
    ///
    /// ```text
    /// | 1 2 |
    /// | 0 3 |
    /// ```
    ///
    /// Corners are pulled inward by half the border width so that the stroke
    /// stays inside the band.
    pub fn corners(&self) -> [Point; 4] {
        let (top_x, base_x) = self.centers();
        let half_stroke = (self.border_width / 2.0).max(0.0);
        let up = self.upper_width / 2.0;
        let bot = self.bottom_width / 2.0;
        let top = self.y + half_stroke;
        [
            Point::new(base_x - bot + half_stroke, self.base),
            Point::new(top_x - up + half_stroke, top),
            Point::new(top_x + up - half_stroke, top),
            Point::new(base_x + bot - half_stroke, self.base),
        ]
    }

    /// The top edge, after border inset.
    pub fn top_edge(&self) -> Edge {
        let [_, tl, tr, _] = self.corners();
        Edge {
            y: tl.y,
            left_x: tl.x,
            right_x: tr.x,
        }
    }

    /// The base edge, after border inset.
    pub fn base_edge(&self) -> Edge {
        let [bl, _, _, br] = self.corners();
        Edge {
            y: bl.y,
            left_x: bl.x,
            right_x: br.x,
        }
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.base - self.y
    }

    /// Ray-casting point-in-polygon test over the corners.
    pub fn contains(&self, pt: Point) -> bool {
        polygon::contains(&self.corners(), pt)
    }

    /// Whether `mouse_x` falls inside the horizontal span of the band.
    ///
    /// Scalene shapes use the span between the outer ends of their two
    /// edges; isosceles shapes use the wider edge centered on `x`. Bounds are
    /// inclusive.
    pub fn in_label_range(&self, mouse_x: f64) -> bool {
        match self.kind {
            TrapeziumKind::Scalene { x1, x2 } => {
                let (up, bot) = (self.upper_width / 2.0, self.bottom_width / 2.0);
                if x1 > x2 {
                    mouse_x >= x2 - bot && mouse_x <= x1 + up
                } else {
                    mouse_x <= x2 + bot && mouse_x >= x1 - up
                }
            }
            TrapeziumKind::Isosceles { x } => {
                let half = self.upper_width.max(self.bottom_width) / 2.0;
                mouse_x >= x - half && mouse_x <= x + half
            }
        }
    }

    /// Anchor for tooltips: the reference x at mid-height.
    pub fn tooltip_position(&self) -> Point {
        Point::new(self.x(), self.base - (self.base - self.y) / 2.0)
    }

    /// Shoelace area of the corner polygon.
    pub fn area(&self) -> f64 {
        polygon::area(&self.corners())
    }

    /// Shoelace centroid of the corner polygon.
    ///
    /// Collapsed (zero-area) bands fall back to [`tooltip_position`](Self::tooltip_position).
    pub fn center(&self) -> Point {
        polygon::centroid(&self.corners()).unwrap_or_else(|| self.tooltip_position())
    }

    /// Axis-aligned bounds of the corner polygon.
    pub fn bounding_box(&self) -> Rect {
        let [bl, tl, tr, br] = self.corners();
        Rect::from_points(bl, tr).union_pt(tl).union_pt(br)
    }

    /// The outline as a closed path, starting at the bottom-left corner.
    pub fn to_path(&self) -> BezPath {
        let [bl, tl, tr, br] = self.corners();
        let mut path = BezPath::new();
        path.move_to(bl);
        path.line_to(tl);
        path.line_to(tr);
        path.line_to(br);
        path.close_path();
        path
    }

    /// Draws the band into `ctx`.
    ///
    /// The outline starts at the corner opening [`border_skipped`](Self::border_skipped)
    /// and is left unclosed, so a stroke never covers that side. The stroke
    /// only runs for a positive border width.
    pub fn draw<C: DrawContext + ?Sized>(&self, ctx: &mut C, fill: &C::Color, stroke: &C::Color) {
        let corners = self.corners();
        let start = self.border_skipped.start_corner();
        let corner_at = |i: usize| corners[(start + i) % 4];

        ctx.begin_path();
        ctx.set_fill_style(fill);
        ctx.set_stroke_style(stroke);
        ctx.set_line_width(self.border_width);

        ctx.move_to(corner_at(0));
        for i in 1..4 {
            ctx.line_to(corner_at(i));
        }

        ctx.fill();
        if self.border_width > 0.0 {
            ctx.stroke();
        }
    }
}

impl PreciseHitTest for Trapezium {
    fn hit_test_local(&self, pt: Point, params: &HitParams) -> Option<HitScore> {
        hit_test_polygon(&self.corners(), pt, params)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use funnel_hit::HitKind;
    use kurbo::PathEl;

    use super::*;

    const EPS: f64 = 1e-9;

    #[derive(Debug, PartialEq)]
    enum Op {
        Begin,
        Fill(String),
        Stroke(String),
        LineWidth(f64),
        MoveTo(Point),
        LineTo(Point),
        DoFill,
        DoStroke,
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl DrawContext for Recorder {
        type Color = str;

        fn begin_path(&mut self) {
            self.0.push(Op::Begin);
        }
        fn set_fill_style(&mut self, color: &str) {
            self.0.push(Op::Fill(color.to_string()));
        }
        fn set_stroke_style(&mut self, color: &str) {
            self.0.push(Op::Stroke(color.to_string()));
        }
        fn set_line_width(&mut self, width: f64) {
            self.0.push(Op::LineWidth(width));
        }
        fn move_to(&mut self, p: Point) {
            self.0.push(Op::MoveTo(p));
        }
        fn line_to(&mut self, p: Point) {
            self.0.push(Op::LineTo(p));
        }
        fn fill(&mut self) {
            self.0.push(Op::DoFill);
        }
        fn stroke(&mut self) {
            self.0.push(Op::DoStroke);
        }
    }

    #[test]
    fn isosceles_corners_are_symmetric() {
        let t = Trapezium::isosceles(50.0, 10.0, 30.0, 40.0, 20.0);
        assert_eq!(
            t.corners(),
            [
                Point::new(40.0, 30.0),
                Point::new(30.0, 10.0),
                Point::new(70.0, 10.0),
                Point::new(60.0, 30.0),
            ]
        );
        assert_eq!(t.top_edge().width(), 40.0);
        assert_eq!(t.base_edge().width(), 20.0);
        assert_eq!(t.height(), 20.0);
    }

    #[test]
    fn scalene_corners_use_two_anchors() {
        // Left-flush: both edges start at x = 0.
        let t = Trapezium::scalene(20.0, 10.0, 0.0, 10.0, 40.0, 20.0);
        let [bl, tl, tr, br] = t.corners();
        assert_eq!(bl.x, 0.0);
        assert_eq!(tl.x, 0.0);
        assert_eq!(tr.x, 40.0);
        assert_eq!(br.x, 20.0);
        assert_eq!(t.x(), 20.0);
        assert!(t.is_scalene());
    }

    #[test]
    fn border_insets_corners_by_half_stroke() {
        let t = Trapezium::isosceles(50.0, 0.0, 10.0, 20.0, 20.0)
            .with_border(4.0, BorderSide::Bottom);
        let [bl, tl, tr, br] = t.corners();
        assert_eq!(bl, Point::new(42.0, 10.0));
        assert_eq!(tl, Point::new(42.0, 2.0));
        assert_eq!(tr, Point::new(58.0, 2.0));
        assert_eq!(br, Point::new(58.0, 10.0));
    }

    #[test]
    fn area_of_triangle_band() {
        let t = Trapezium::isosceles(0.0, 0.0, 5.0, 0.0, 10.0);
        assert!((t.area() - 25.0).abs() < EPS);
        let t = Trapezium::isosceles(0.0, 0.0, 5.0, 10.0, 0.0);
        assert!((t.area() - 25.0).abs() < EPS);
    }

    #[test]
    fn hit_inside_and_far_outside() {
        let t = Trapezium::isosceles(50.0, 0.0, 20.0, 80.0, 40.0);
        assert!(t.contains(Point::new(50.0, 10.0)));
        assert!(!t.contains(Point::new(500.0, 10.0)));
        assert!(!t.contains(Point::new(50.0, 25.0)));
        // Inside the bounding box, outside the tapered right edge.
        assert!(!t.contains(Point::new(88.0, 19.0)));

        let score = t
            .hit_test_local(Point::new(50.0, 10.0), &HitParams::default())
            .expect("expected hit");
        assert_eq!(score.kind, HitKind::Fill);
        assert!(
            t.hit_test_local(Point::new(500.0, 10.0), &HitParams::default())
                .is_none()
        );
    }

    #[test]
    fn collapsed_band_is_never_hit_and_centers_on_anchor() {
        let t = Trapezium::isosceles(50.0, 0.0, 20.0, 0.0, 0.0);
        assert_eq!(t.area(), 0.0);
        assert!(!t.contains(Point::new(50.0, 10.0)));
        assert_eq!(t.center(), Point::new(50.0, 10.0));
    }

    #[test]
    fn center_of_rectangular_band() {
        let t = Trapezium::isosceles(50.0, 0.0, 20.0, 40.0, 40.0);
        let c = t.center();
        assert!((c.x - 50.0).abs() < EPS);
        assert!((c.y - 10.0).abs() < EPS);
        assert_eq!(t.tooltip_position(), Point::new(50.0, 10.0));
    }

    #[test]
    fn label_range_isosceles_uses_wider_edge() {
        let t = Trapezium::isosceles(50.0, 0.0, 20.0, 20.0, 60.0);
        assert!(t.in_label_range(20.0));
        assert!(t.in_label_range(80.0));
        assert!(!t.in_label_range(81.0));
    }

    #[test]
    fn label_range_scalene_both_orientations() {
        // Right-flush: x1 < x2 when the top edge is wider.
        let right = Trapezium::scalene(60.0, 80.0, 0.0, 10.0, 80.0, 40.0);
        assert!(right.in_label_range(20.0));
        assert!(right.in_label_range(100.0));
        assert!(!right.in_label_range(19.0));

        // Left-flush: x1 > x2 when the top edge is wider.
        let left = Trapezium::scalene(40.0, 20.0, 0.0, 10.0, 80.0, 40.0);
        assert!(left.in_label_range(0.0));
        assert!(left.in_label_range(80.0));
        assert!(!left.in_label_range(81.0));
    }

    #[test]
    fn bounds_and_path_follow_corners() {
        let t = Trapezium::isosceles(50.0, 10.0, 30.0, 40.0, 20.0);
        assert_eq!(t.bounding_box(), Rect::new(30.0, 10.0, 70.0, 30.0));
        let els: Vec<PathEl> = t.to_path().elements().to_vec();
        assert_eq!(els.len(), 5);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(40.0, 30.0)));
        assert_eq!(els[4], PathEl::ClosePath);
    }

    #[test]
    fn draw_starts_at_skipped_side_and_strokes_only_with_border() {
        let t = Trapezium::isosceles(50.0, 10.0, 30.0, 40.0, 20.0);
        let mut rec = Recorder::default();
        t.draw(&mut rec, "red", "blue");
        assert_eq!(
            rec.0,
            [
                Op::Begin,
                Op::Fill("red".into()),
                Op::Stroke("blue".into()),
                Op::LineWidth(0.0),
                Op::MoveTo(Point::new(40.0, 30.0)),
                Op::LineTo(Point::new(30.0, 10.0)),
                Op::LineTo(Point::new(70.0, 10.0)),
                Op::LineTo(Point::new(60.0, 30.0)),
                Op::DoFill,
            ]
        );

        let bordered = t.with_border(2.0, BorderSide::Top);
        let mut rec = Recorder::default();
        bordered.draw(&mut rec, "red", "blue");
        let corners = bordered.corners();
        assert_eq!(rec.0[4], Op::MoveTo(corners[2]));
        assert_eq!(rec.0[7], Op::LineTo(corners[1]));
        assert_eq!(rec.0.last(), Some(&Op::DoStroke));
    }
}
