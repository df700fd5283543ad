// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Minimal immediate-mode 2D sink a trapezium can draw into.
///
/// This mirrors the small subset of a canvas-style API the funnel needs.
/// Hosts wrap their own context (an HTML canvas, a `vello` scene builder, a
/// test recorder) and choose the color type they accept.
pub trait DrawContext {
    /// Color representation accepted by the fill and stroke setters.
    type Color: ?Sized;

    /// Starts a new path, discarding any current one.
    fn begin_path(&mut self);
    /// Sets the paint used by the next [`fill`](Self::fill).
    fn set_fill_style(&mut self, color: &Self::Color);
    /// Sets the paint used by the next [`stroke`](Self::stroke).
    fn set_stroke_style(&mut self, color: &Self::Color);
    /// Sets the stroke width in device units.
    fn set_line_width(&mut self, width: f64);
    /// Starts a new subpath at `p`.
    fn move_to(&mut self, p: Point);
    /// Adds a straight segment to `p`.
    fn line_to(&mut self, p: Point);
    /// Fills the current path.
    fn fill(&mut self);
    /// Strokes the current path.
    fn stroke(&mut self);
}
