// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout configuration.

use alloc::string::String;
use core::str::FromStr;

use funnel_shape::{BorderSide, ParseOptionError};

/// Color used for rows that carry no background color.
pub const DEFAULT_COLOR: &str = "rgba(0,0,0,0.1)";

/// How rows are ordered and which way the funnel tapers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SortOrder {
    /// Sort rows by ascending value; each band's top edge is the previous
    /// visible band's value.
    #[default]
    Asc,
    /// Sort rows by descending value; each band's base edge is the next
    /// visible band's value.
    Desc,
    /// Keep input order, taper like [`Asc`](Self::Asc).
    DataAsc,
    /// Keep input order, taper like [`Desc`](Self::Desc).
    DataDesc,
    /// Keep input order, taper like [`Asc`](Self::Asc).
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    Unsorted,
}

/// Which neighbor supplies the width of a band's second edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Taper {
    /// Top edge from the nearest preceding visible row.
    FromPrevious,
    /// Base edge from the nearest following visible row.
    FromNext,
}

impl SortOrder {
    /// Whether the dataset is reordered by value.
    pub const fn reorders(self) -> bool {
        matches!(self, Self::Asc | Self::Desc)
    }

    /// Width rule applied during layout.
    pub const fn taper(self) -> Taper {
        match self {
            Self::Desc | Self::DataDesc => Taper::FromNext,
            Self::Asc | Self::DataAsc | Self::Unsorted => Taper::FromPrevious,
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            "data-asc" => Ok(Self::DataAsc),
            "data-desc" => Ok(Self::DataDesc),
            "none" | "" => Ok(Self::Unsorted),
            other => Err(ParseOptionError::new("sort", other)),
        }
    }
}

/// Horizontal placement of the funnel inside the drawable area.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    /// Bands centered on the midline (isosceles). `"auto"` maps here.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "auto"))]
    Center,
    /// Bands flush against the left edge (scalene).
    ///
    /// The edge is that of the layout area after the border inset, so a
    /// nonzero border width moves bands `border_width` in from the container.
    Left,
    /// Bands flush against the right edge (scalene).
    ///
    /// As with [`Left`](Self::Left), the edge is that of the inset area.
    Right,
}

impl FromStr for Alignment {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" | "center" => Ok(Self::Center),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(ParseOptionError::new("keep", other)),
        }
    }
}

/// Options for [`FunnelLayout`](crate::FunnelLayout).
///
/// Defaults match a plain funnel: ascending sort, no gap, a pointed top,
/// a base as wide as the drawable area, centered, without borders.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FunnelOptions {
    /// Row ordering and taper direction.
    pub sort: SortOrder,
    /// Vertical space between bands.
    pub gap: f64,
    /// Width of the outermost free edge (the funnel's tip).
    pub top_width: f64,
    /// Width of the band with the largest visible value. `None` (or a
    /// non-positive value) uses the full available width.
    pub bottom_width: Option<f64>,
    /// Horizontal placement.
    #[cfg_attr(feature = "serde", serde(rename = "keep"))]
    pub alignment: Alignment,
    /// Border stroke width. The drawable area is inset by it on every side.
    pub border_width: f64,
    /// Side left open when stroking borders.
    pub border_skipped: BorderSide,
    /// Fill used for rows without a background color.
    pub default_color: String,
}

impl Default for FunnelOptions {
    fn default() -> Self {
        Self {
            sort: SortOrder::default(),
            gap: 0.0,
            top_width: 0.0,
            bottom_width: None,
            alignment: Alignment::default(),
            border_width: 0.0,
            border_skipped: BorderSide::default(),
            default_color: String::from(DEFAULT_COLOR),
        }
    }
}

impl FunnelOptions {
    /// Sets the sort order.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the gap between bands.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the tip width.
    #[must_use]
    pub fn with_top_width(mut self, width: f64) -> Self {
        self.top_width = width;
        self
    }

    /// Caps the width of the widest band.
    #[must_use]
    pub fn with_bottom_width(mut self, width: f64) -> Self {
        self.bottom_width = Some(width);
        self
    }

    /// Sets the horizontal placement.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the border width and the side left open.
    #[must_use]
    pub fn with_border(mut self, width: f64, skipped: BorderSide) -> Self {
        self.border_width = width;
        self.border_skipped = skipped;
        self
    }

    /// Sets the fallback fill color.
    #[must_use]
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }
}
