use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PathCommand, Point};
use crate::error::LayoutError;

/// Connector drawn between two consecutive points of a lane
///
/// The numeric ids (1 to 4) are the ones accepted on the command line and in
/// `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CurveStyle {
    /// Plain line segment
    Straight = 1,
    /// One quadratic curve bending around an L-shaped corner
    Quadratic = 2,
    /// Cubic curve with control points at 70%/30% of the row distance
    Cubic = 3,
    /// Cubic curve with control points on the opposite rows
    #[default]
    SCurve = 4,
}

/// Builds the command that reaches `to` from `from`
pub(crate) type Connector = fn(Point, Point) -> PathCommand;

impl CurveStyle {
    pub const ALL: [CurveStyle; 4] = [
        CurveStyle::Straight,
        CurveStyle::Quadratic,
        CurveStyle::Cubic,
        CurveStyle::SCurve,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub(crate) fn connector(self) -> Connector {
        match self {
            CurveStyle::Straight => straight,
            CurveStyle::Quadratic => quadratic,
            CurveStyle::Cubic => cubic,
            CurveStyle::SCurve => s_curve,
        }
    }
}

impl TryFrom<u8> for CurveStyle {
    type Error = LayoutError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        CurveStyle::ALL
            .into_iter()
            .find(|style| style.id() == id)
            .ok_or_else(|| {
                LayoutError::invalid_config(format!(
                    "curve style must be between 1 and 4, got {id}"
                ))
            })
    }
}

impl From<CurveStyle> for u8 {
    fn from(style: CurveStyle) -> u8 {
        style.id()
    }
}

impl fmt::Display for CurveStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveStyle::Straight => "straight",
            CurveStyle::Quadratic => "quadratic",
            CurveStyle::Cubic => "cubic",
            CurveStyle::SCurve => "s-curve",
        };
        write!(f, "{name} ({})", self.id())
    }
}

fn straight(_from: Point, to: Point) -> PathCommand {
    PathCommand::LineTo(to)
}

fn quadratic(from: Point, to: Point) -> PathCommand {
    let ctrl = Point::new(from.x.max(to.x), from.y.min(to.y));
    PathCommand::QuadTo { ctrl, to }
}

fn cubic(from: Point, to: Point) -> PathCommand {
    let dy = to.y - from.y;
    PathCommand::CubicTo {
        ctrl1: Point::new(from.x, from.y + 0.7 * dy),
        ctrl2: Point::new(to.x, from.y + 0.3 * dy),
        to,
    }
}

fn s_curve(from: Point, to: Point) -> PathCommand {
    PathCommand::CubicTo {
        ctrl1: Point::new(from.x, to.y),
        ctrl2: Point::new(to.x, from.y),
        to,
    }
}
