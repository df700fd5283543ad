// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::str::FromStr;

use crate::ParseOptionError;

/// Side of a trapezium whose border is left open when drawing.
///
/// The outline is drawn starting at the corner that opens this side, so the
/// closing segment (the one a stroke never draws) is exactly this side.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BorderSide {
    /// The base edge.
    #[default]
    Bottom,
    /// The left slanted edge.
    Left,
    /// The top edge.
    Top,
    /// The right slanted edge.
    Right,
}

impl BorderSide {
    /// Index of the corner the outline starts from.
    pub const fn start_corner(self) -> usize {
        match self {
            Self::Bottom => 0,
            Self::Left => 1,
            Self::Top => 2,
            Self::Right => 3,
        }
    }
}

impl FromStr for BorderSide {
    type Err = ParseOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            other => Err(ParseOptionError::new("borderSkipped", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_side() {
        assert_eq!("bottom".parse(), Ok(BorderSide::Bottom));
        assert_eq!("left".parse(), Ok(BorderSide::Left));
        assert_eq!("top".parse(), Ok(BorderSide::Top));
        assert_eq!("right".parse(), Ok(BorderSide::Right));
    }

    #[test]
    fn rejects_unknown_side() {
        let err = "middle".parse::<BorderSide>().unwrap_err();
        assert_eq!(err.option(), "borderSkipped");
        assert_eq!(err.value(), "middle");
    }

    #[test]
    fn start_corners_follow_outline_order() {
        assert_eq!(BorderSide::default().start_corner(), 0);
        assert_eq!(BorderSide::Right.start_corner(), 3);
    }
}
