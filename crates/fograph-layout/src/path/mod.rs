//! Path rendering: grid coordinates to drawing commands.

mod style;

pub use style::CurveStyle;

use style::Connector;

/// Position on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawing primitive of a lane path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
    CubicTo { ctrl1: Point, ctrl2: Point, to: Point },
}

impl PathCommand {
    /// Where the pen rests after this command
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p,
            PathCommand::QuadTo { to, .. } | PathCommand::CubicTo { to, .. } => to,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, PathCommand::MoveTo(_))
    }
}

/// Scales lane columns and rows into surface units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    pub lane_spacing: f64,
    pub row_height: f64,
}

impl Grid {
    pub fn new(lane_spacing: f64, row_height: f64) -> Self {
        Self {
            lane_spacing,
            row_height,
        }
    }

    pub fn point(&self, column: usize, row: usize) -> Point {
        Point::new(
            column as f64 * self.lane_spacing,
            row as f64 * self.row_height,
        )
    }
}

/// Appends connectors to lane paths using one fixed [`CurveStyle`]
#[derive(Debug, Clone, Copy)]
pub struct PathRenderer {
    grid: Grid,
    style: CurveStyle,
    connector: Connector,
}

impl PathRenderer {
    pub fn new(grid: Grid, style: CurveStyle) -> Self {
        Self {
            grid,
            style,
            connector: style.connector(),
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn style(&self) -> CurveStyle {
        self.style
    }

    /// Begin a path at `(column, row)`
    pub fn start(&self, path: &mut Vec<PathCommand>, column: usize, row: usize) {
        path.push(PathCommand::MoveTo(self.grid.point(column, row)));
    }

    /// Connect `from` to `to`, both `(column, row)`
    ///
    /// Equal columns always give a vertical line, whatever the style.
    pub fn extend(&self, path: &mut Vec<PathCommand>, from: (usize, usize), to: (usize, usize)) {
        let start = self.grid.point(from.0, from.1);
        let end = self.grid.point(to.0, to.1);
        let command = if from.0 == to.0 {
            PathCommand::LineTo(end)
        } else {
            (self.connector)(start, end)
        };
        path.push(command);
    }
}
