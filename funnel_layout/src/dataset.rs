// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row records and the dataset they form.

use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::SortOrder;

/// One data point of the funnel.
///
/// Label and colors travel with the value, so reordering rows never has to
/// keep several parallel arrays in step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    /// Value encoded by the band width.
    pub value: f64,
    /// Hidden rows take no height and draw as collapsed bands.
    pub hidden: bool,
    /// Category label shown in legends and tooltips.
    pub label: Option<String>,
    /// Fill color.
    pub background_color: Option<String>,
    /// Border color; falls back to the fill color.
    pub border_color: Option<String>,
}

impl Row {
    /// Creates a visible, unlabeled row.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the border color.
    #[must_use]
    pub fn with_border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    /// Sets the hidden flag.
    #[must_use]
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Returns `true` unless the row is hidden.
    pub const fn is_visible(&self) -> bool {
        !self.hidden
    }
}

/// An ordered list of [`Row`]s.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates visible, unlabeled rows from plain values.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        values.into_iter().map(Row::new).collect()
    }

    /// Appends a row.
    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// All rows in dataset order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`.
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of rows, hidden ones included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows that are not hidden.
    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_visible()).count()
    }

    /// Sets the hidden flag of the row at `index`.
    ///
    /// Returns `false` if there is no such row.
    pub fn set_hidden(&mut self, index: usize, hidden: bool) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.hidden = hidden;
                true
            }
            None => false,
        }
    }

    /// Flips the hidden flag of the row at `index` and returns the new state.
    pub fn toggle_hidden(&mut self, index: usize) -> Option<bool> {
        let row = self.rows.get_mut(index)?;
        row.hidden = !row.hidden;
        tracing::trace!(index, hidden = row.hidden, "toggled funnel row");
        Some(row.hidden)
    }

    /// Reorders rows by value for [`SortOrder::Asc`] and [`SortOrder::Desc`].
    ///
    /// The sort is stable and treats incomparable values (NaN) as equal to
    /// anything, so equal values keep their input order. Other orders leave
    /// the dataset untouched. Sorting an already sorted dataset is a no-op.
    pub fn sort_by_value(&mut self, order: SortOrder) {
        if !order.reorders() {
            return;
        }
        let descending = order == SortOrder::Desc;
        self.rows.sort_by(|a, b| {
            let ord = a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal);
            if descending { ord.reverse() } else { ord }
        });
        tracing::trace!(?order, rows = self.rows.len(), "sorted funnel rows");
    }
}

impl FromIterator<Row> for Dataset {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}
