// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funnel Shape: the trapezium element drawn for each funnel row.
//!
//! A [`Trapezium`] is a quadrilateral with a horizontal top edge and a
//! horizontal base edge. Two anchorings are supported through
//! [`TrapeziumKind`]:
//!
//! - **Isosceles**: both edges are centered on one `x`.
//! - **Scalene**: the top edge is centered on `x1` and the base edge on `x2`,
//!   which lets a funnel sit flush against the left or right side of its
//!   container.
//!
//! The element derives its four corners (bottom-left, top-left, top-right,
//! bottom-right) on demand and builds everything else on top of them:
//!
//! - pointer hit tests via ray casting ([`Trapezium::contains`], and the
//!   [`PreciseHitTest`](funnel_hit::PreciseHitTest) implementation),
//! - the label-range test used by "label" hover modes,
//! - shoelace area and centroid, and the tooltip anchor,
//! - drawing through any [`DrawContext`], or conversion to a
//!   [`kurbo::BezPath`].
//!
//! ```
//! use funnel_shape::Trapezium;
//! use kurbo::Point;
//!
//! // Upper width 0, bottom width 10, five units tall.
//! let t = Trapezium::isosceles(50.0, 0.0, 5.0, 0.0, 10.0);
//! assert!((t.area() - 25.0).abs() < 1e-9);
//! assert!(t.contains(Point::new(50.0, 4.0)));
//! assert!(!t.contains(Point::new(0.0, 4.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod draw;
mod error;
mod side;
mod trapezium;

pub use draw::DrawContext;
pub use error::ParseOptionError;
pub use side::BorderSide;
pub use trapezium::{Edge, Trapezium, TrapeziumKind};
