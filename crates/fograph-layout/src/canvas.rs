//! Boundary between the layout and whatever serializes it.

use crate::core::entry::EntryId;
use crate::core::lane::LaneId;
use crate::palette::{ColorIndex, Rgb};
use crate::path::{PathCommand, Point};

/// Commit circle position, in grid units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitMark {
    pub entry: EntryId,
    pub column: usize,
    pub row: usize,
    pub color: ColorIndex,
}

/// Full path of a closed lane
#[derive(Debug, Clone, PartialEq)]
pub struct LanePath {
    pub lane: LaneId,
    pub color: ColorIndex,
    pub commands: Vec<PathCommand>,
}

impl LanePath {
    /// Number of connectors (every command except the initial move)
    pub fn segment_count(&self) -> usize {
        self.commands.iter().filter(|c| !c.is_move()).count()
    }
}

/// One recorded drawing operation, in emission order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Commit(CommitMark),
    /// Label text for a row; labels always sit in the label column
    Label { row: usize, text: String },
    Path(LanePath),
}

/// Final image bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub width: f64,
    pub height: f64,
    /// Offset applied to the graph and label groups
    pub margins: (f64, f64),
    /// Left edge of the label column, relative to the graph origin
    pub label_x: f64,
}

/// Receiver of a finished layout
///
/// Points are relative to the graph origin; applying the margins is up to
/// the implementation (see [`Extents::margins`]).
pub trait Canvas {
    fn commit(&mut self, mark: &CommitMark, center: Point, color: Rgb);

    fn label(&mut self, row: usize, y: f64, text: &str);

    fn path(&mut self, path: &LanePath, color: Rgb);

    fn finish(&mut self, extents: &Extents);
}
