// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The funnel layout engine.

use alloc::string::String;
use alloc::vec::Vec;

use funnel_shape::{DrawContext, Trapezium};
use kurbo::Rect;

use crate::{Alignment, Dataset, FunnelOptions, Row, Taper};

/// A laid-out row: its trapezium plus everything needed to draw and
/// describe it.
#[derive(Clone, Debug, PartialEq)]
pub struct FunnelElement {
    /// Position of the row in the dataset.
    pub index: usize,
    /// Rank among visible rows, `None` when hidden.
    pub view_index: Option<usize>,
    /// The row's value.
    pub value: f64,
    /// Whether the row is hidden. Hidden rows have zero-width bands.
    pub hidden: bool,
    /// Band geometry.
    pub trapezium: Trapezium,
    /// Resolved fill color.
    pub fill: String,
    /// Resolved border color.
    pub stroke: String,
    /// The row's label.
    pub label: Option<String>,
}

impl FunnelElement {
    /// Draws the band with its resolved colors.
    pub fn draw<C: DrawContext<Color = str> + ?Sized>(&self, ctx: &mut C) {
        self.trapezium.draw(ctx, &self.fill, &self.stroke);
    }
}

/// Result of one layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Funnel {
    elements: Vec<FunnelElement>,
    area: Rect,
    row_height: f64,
    width_ratio: f64,
    visible_count: usize,
}

impl Funnel {
    /// One element per dataset row, in dataset order.
    pub fn elements(&self) -> &[FunnelElement] {
        &self.elements
    }

    /// Element for the row at `index`.
    pub fn get(&self, index: usize) -> Option<&FunnelElement> {
        self.elements.get(index)
    }

    /// Number of elements, hidden ones included.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the funnel has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements of rows that are not hidden.
    pub fn visible(&self) -> impl Iterator<Item = &FunnelElement> + '_ {
        self.elements.iter().filter(|e| !e.hidden)
    }

    /// The area bands were laid out in (the drawable area inset by the border).
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Height of every visible band.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Band width per unit of value.
    pub fn width_ratio(&self) -> f64 {
        self.width_ratio
    }

    /// Number of visible rows.
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Draws every visible band in dataset order.
    pub fn draw<C: DrawContext<Color = str> + ?Sized>(&self, ctx: &mut C) {
        for element in self.visible() {
            element.draw(ctx);
        }
    }
}

/// Computes funnel geometry for a [`Dataset`].
///
/// The engine holds only its options; every pass recomputes everything from
/// the dataset and area it is given, so identical inputs give identical
/// output.
#[derive(Clone, Debug, Default)]
pub struct FunnelLayout {
    options: FunnelOptions,
}

impl FunnelLayout {
    /// Creates an engine with the given options.
    pub fn new(options: FunnelOptions) -> Self {
        Self { options }
    }

    /// The engine's options.
    pub fn options(&self) -> &FunnelOptions {
        &self.options
    }

    /// Applies the configured sort to `dataset`.
    ///
    /// Run this when the data changes, before [`layout`](Self::layout).
    /// Data-driven and unsorted orders leave the dataset as is.
    pub fn sort(&self, dataset: &mut Dataset) {
        dataset.sort_by_value(self.options.sort);
    }

    /// Lays out `dataset` inside `area`.
    pub fn layout(&self, dataset: &Dataset, area: Rect) -> Funnel {
        self.pass(dataset, area, false)
    }

    /// Lays out `dataset` with every band collapsed to zero width.
    ///
    /// Positions match [`layout`](Self::layout), which makes this the start
    /// state for hosts that animate bands growing in.
    pub fn layout_collapsed(&self, dataset: &Dataset, area: Rect) -> Funnel {
        self.pass(dataset, area, true)
    }

    fn pass(&self, dataset: &Dataset, area: Rect, collapsed: bool) -> Funnel {
        debug_assert!(area.is_finite(), "funnel area must be finite; got {area:?}");
        let opts = &self.options;
        let rows = dataset.rows();

        let border = non_negative(opts.border_width);
        let inner = area.inset(-border);
        let available_width = non_negative(inner.width());
        let available_height = non_negative(inner.height());

        let top_width = non_negative(opts.top_width).min(available_width);
        let bottom_width = match opts.bottom_width {
            Some(w) if w > 0.0 => w.min(available_width),
            _ => available_width,
        };

        let mut visible_count = 0_usize;
        let mut max_value = 0.0_f64;
        for row in rows.iter().filter(|r| r.is_visible()) {
            visible_count += 1;
            if row.value > max_value {
                max_value = row.value;
            }
        }
        let width_ratio = if max_value > 0.0 && max_value.is_finite() {
            bottom_width / max_value
        } else {
            0.0
        };

        let gap = non_negative(opts.gap);
        let row_height = if visible_count == 0 {
            0.0
        } else {
            #[allow(
                clippy::cast_precision_loss,
                reason = "Row counts are far below 2^52"
            )]
            let count = visible_count as f64;
            non_negative((available_height - (count - 1.0) * gap) / count)
        };
        let step = row_height + gap;

        tracing::debug!(
            rows = rows.len(),
            visible_count,
            row_height,
            width_ratio,
            collapsed,
            "funnel layout pass"
        );

        let mut next_rank = 0_usize;
        let mut elements = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let view_index = row.is_visible().then(|| {
                let rank = next_rank;
                next_rank += 1;
                rank
            });

            // Hidden rows keep their dataset position so toggling does not
            // shuffle the remaining bands' indices.
            #[allow(
                clippy::cast_precision_loss,
                reason = "Row counts are far below 2^52"
            )]
            let rank = view_index.unwrap_or(index) as f64;
            let top = inner.y0 + rank * step;
            let base = (top + row_height).min(inner.y1);
            let y = top.min(base);

            let scaled = |r: &Row| r.value * width_ratio;
            let (upper, bottom) = match opts.sort.taper() {
                Taper::FromPrevious => (
                    previous_visible(rows, index).map_or(top_width, scaled),
                    scaled(row),
                ),
                Taper::FromNext => (
                    scaled(row),
                    next_visible(rows, index).map_or(top_width, scaled),
                ),
            };
            let upper = non_negative(upper);
            let bottom = non_negative(bottom);

            let trapezium = match opts.alignment {
                Alignment::Center => {
                    Trapezium::isosceles(inner.center().x, y, base, upper, bottom)
                }
                Alignment::Left => Trapezium::scalene(
                    inner.x0 + upper / 2.0,
                    inner.x0 + bottom / 2.0,
                    y,
                    base,
                    upper,
                    bottom,
                ),
                Alignment::Right => Trapezium::scalene(
                    inner.x1 - upper / 2.0,
                    inner.x1 - bottom / 2.0,
                    y,
                    base,
                    upper,
                    bottom,
                ),
            }
            .with_border(border, opts.border_skipped);

            let trapezium = if collapsed || row.hidden {
                Trapezium {
                    upper_width: 0.0,
                    bottom_width: 0.0,
                    ..trapezium
                }
            } else {
                trapezium
            };

            let fill = row
                .background_color
                .clone()
                .unwrap_or_else(|| opts.default_color.clone());
            let stroke = row.border_color.clone().unwrap_or_else(|| fill.clone());

            elements.push(FunnelElement {
                index,
                view_index,
                value: row.value,
                hidden: row.hidden,
                trapezium,
                fill,
                stroke,
                label: row.label.clone(),
            });
        }

        Funnel {
            elements,
            area: inner,
            row_height,
            width_ratio,
            visible_count,
        }
    }
}

fn previous_visible(rows: &[Row], index: usize) -> Option<&Row> {
    rows[..index].iter().rev().find(|r| r.is_visible())
}

fn next_visible(rows: &[Row], index: usize) -> Option<&Row> {
    rows[index + 1..].iter().find(|r| r.is_visible())
}

/// Clamps negatives and NaN to zero.
fn non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}
