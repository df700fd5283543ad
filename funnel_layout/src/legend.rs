// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend entries and tooltip text.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use crate::{Dataset, FunnelElement, FunnelOptions};

/// One legend entry per dataset row.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The row's label, empty when it has none.
    pub text: String,
    /// Swatch fill.
    pub fill_style: String,
    /// Swatch outline.
    pub stroke_style: String,
    /// Swatch outline width.
    pub line_width: f64,
    /// Drawn struck through: the row is hidden or its value is NaN.
    pub hidden: bool,
    /// Row index the entry toggles.
    pub index: usize,
}

impl LegendItem {
    /// Flips the visibility of the entry's row, returning the new hidden state.
    pub fn toggle(&self, dataset: &mut Dataset) -> Option<bool> {
        dataset.toggle_hidden(self.index)
    }
}

/// Builds legend entries for every row, resolving colors the same way the
/// layout does.
pub fn legend_items(dataset: &Dataset, options: &FunnelOptions) -> Vec<LegendItem> {
    dataset
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let fill_style = row
                .background_color
                .clone()
                .unwrap_or_else(|| options.default_color.clone());
            let stroke_style = row
                .border_color
                .clone()
                .unwrap_or_else(|| fill_style.clone());
            LegendItem {
                text: row.label.clone().unwrap_or_default(),
                fill_style,
                stroke_style,
                line_width: options.border_width,
                hidden: row.hidden || row.value.is_nan(),
                index,
            }
        })
        .collect()
}

/// Tooltip content for one band.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Title line; funnels leave it empty.
    pub title: String,
    /// `"{label}: {value}"`, or just the value for unlabeled rows.
    pub label: String,
    /// Where the tooltip points.
    pub anchor: Point,
}

/// Formats the tooltip body for a row.
pub fn tooltip_label(label: Option<&str>, value: f64) -> String {
    match label {
        Some(label) => format!("{label}: {value}"),
        None => format!("{value}"),
    }
}

impl FunnelElement {
    /// Tooltip for this band, anchored at mid-height on its reference x.
    pub fn tooltip(&self) -> Tooltip {
        Tooltip {
            title: String::new(),
            label: tooltip_label(self.label.as_deref(), self.value),
            anchor: self.trapezium.tooltip_position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::Rect;

    use super::*;
    use crate::{FunnelLayout, Row};

    fn dataset() -> Dataset {
        vec![
            Row::new(300.0)
                .with_label("A")
                .with_background_color("#FF6384"),
            Row::new(f64::NAN).with_label("B"),
            Row::new(100.0)
                .with_background_color("#FFCE56")
                .with_border_color("#000"),
        ]
        .into()
    }

    #[test]
    fn legend_resolves_colors_and_hidden_state() {
        let options = FunnelOptions::default().with_default_color("gray");
        let items = legend_items(&dataset(), &options);
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].text, "A");
        assert_eq!(items[0].fill_style, "#FF6384");
        assert_eq!(items[0].stroke_style, "#FF6384");
        assert!(!items[0].hidden);

        assert_eq!(items[1].fill_style, "gray");
        assert!(items[1].hidden, "NaN rows are shown as hidden");

        assert_eq!(items[2].text, "");
        assert_eq!(items[2].stroke_style, "#000");
        assert_eq!(items[2].index, 2);
    }

    #[test]
    fn toggling_an_item_hides_and_restores_its_row() {
        let mut ds = dataset();
        let options = FunnelOptions::default();
        let item = legend_items(&ds, &options).remove(0);
        assert_eq!(item.toggle(&mut ds), Some(true));
        assert!(legend_items(&ds, &options)[0].hidden);
        assert_eq!(item.toggle(&mut ds), Some(false));
        assert!(!legend_items(&ds, &options)[0].hidden);
    }

    #[test]
    fn tooltip_text() {
        assert_eq!(tooltip_label(Some("A"), 300.0), "A: 300");
        assert_eq!(tooltip_label(Some("B"), 12.5), "B: 12.5");
        assert_eq!(tooltip_label(None, 7.0), "7");
    }

    #[test]
    fn element_tooltip_anchors_mid_band() {
        let ds = Dataset::from_iter([Row::new(10.0).with_label("Leads")]);
        let funnel = FunnelLayout::default().layout(&ds, Rect::new(0.0, 0.0, 100.0, 40.0));
        let tip = funnel.get(0).expect("row 0").tooltip();
        assert_eq!(tip.title, "");
        assert_eq!(tip.label, "Leads: 10");
        assert_eq!(tip.anchor, Point::new(50.0, 20.0));
    }
}
