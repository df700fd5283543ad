// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Funnel Layout: turns a list of values into funnel chart bands.
//!
//! Each [`Row`] of a [`Dataset`] becomes one horizontal band whose width
//! encodes its value. [`FunnelLayout`] computes the bands for a drawable area
//! and returns a [`Funnel`] of [`FunnelElement`]s, each carrying a
//! [`Trapezium`](funnel_shape::Trapezium) plus its resolved colors and label.
//!
//! A pass runs in four steps:
//!
//! 1. **Sort** ([`FunnelLayout::sort`]): [`SortOrder::Asc`] and
//!    [`SortOrder::Desc`] reorder the rows by value. The data-driven orders
//!    keep input order.
//! 2. **Scale**: the largest visible value maps to the bottom width (the full
//!    available width unless capped); every other width scales with it.
//! 3. **Row height**: the available height, minus the gaps, is split evenly
//!    across visible rows. Hidden rows take no height.
//! 4. **Geometry**: adjacent visible bands share an edge. In ascending
//!    orders a band's top edge is the previous visible row's width (or the
//!    configured top width for the first band); in descending orders its
//!    base edge is the next visible row's width. [`Alignment`] centers the
//!    bands or pins them flush to one side.
//!
//! Hidden rows keep their element, collapsed to zero width at their own
//! index, so indices stay stable while a host animates visibility changes.
//!
//! Laid-out funnels answer pointer queries ([`Funnel::hits_at`],
//! [`Funnel::element_at`], [`Funnel::label_hits`]), draw into any
//! [`DrawContext`](funnel_shape::DrawContext), and produce
//! [`LegendItem`]s and [`Tooltip`]s.
//!
//! ## Minimal example
//!
//! ```rust
//! use funnel_layout::{Dataset, FunnelLayout, FunnelOptions, Row};
//! use kurbo::{Point, Rect};
//!
//! let mut data: Dataset = [
//!     Row::new(300.0).with_label("Visits"),
//!     Row::new(50.0).with_label("Purchases"),
//!     Row::new(100.0).with_label("Carts"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let engine = FunnelLayout::new(FunnelOptions::default().with_gap(4.0));
//! engine.sort(&mut data);
//! let funnel = engine.layout(&data, Rect::new(0.0, 0.0, 300.0, 300.0));
//!
//! // Ascending: the narrowest band is on top.
//! assert_eq!(funnel.get(0).unwrap().label.as_deref(), Some("Purchases"));
//! assert_eq!(funnel.get(2).unwrap().trapezium.bottom_width, 300.0);
//!
//! let hovered = funnel.element_at(Point::new(150.0, 250.0), &Default::default());
//! assert_eq!(hovered.map(|e| e.index), Some(2));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dataset;
mod hover;
mod layout;
mod legend;
mod options;

pub use dataset::{Dataset, Row};
pub use funnel_hit::HitParams;
pub use hover::{HitList, KeyHit, precise_hits_for_point};
pub use layout::{Funnel, FunnelElement, FunnelLayout};
pub use legend::{LegendItem, Tooltip, legend_items, tooltip_label};
pub use options::{Alignment, DEFAULT_COLOR, FunnelOptions, SortOrder, Taper};
