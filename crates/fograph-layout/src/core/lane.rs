use crate::canvas::LanePath;
use crate::core::entry::EntryId;
use crate::palette::ColorIndex;
use crate::path::{PathCommand, PathRenderer};

/// Stable handle of a lane, assigned in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LaneId(pub usize);

/// One vertical track of history between a split/root and a merge/end
#[derive(Debug, Clone)]
pub struct Lane {
    pub id: LaneId,
    /// Column the lane occupies on the next drawn row
    pub column: usize,
    /// Column of the last committed point
    pub prior_column: usize,
    /// Row of the last committed point
    pub prior_row: usize,
    /// Entry the lane is advancing toward
    pub target: EntryId,
    pub color: ColorIndex,
    /// False until the lane has a first point on the canvas
    pub drawing: bool,
    path: Vec<PathCommand>,
}

impl Lane {
    /// Lane for a root entry; it anchors when the root is drawn
    pub fn root(id: LaneId, column: usize, target: EntryId, color: ColorIndex) -> Self {
        Self {
            id,
            column,
            prior_column: column,
            prior_row: 0,
            target,
            color,
            drawing: false,
            path: Vec::new(),
        }
    }

    /// Lane leaving an already drawn point `(column, row)`
    pub fn branch(
        id: LaneId,
        origin: (usize, usize),
        target: EntryId,
        color: ColorIndex,
        renderer: &PathRenderer,
    ) -> Self {
        let (column, row) = origin;
        let mut path = Vec::new();
        renderer.start(&mut path, column, row);
        Self {
            id,
            column,
            prior_column: column,
            prior_row: row,
            target,
            color,
            drawing: true,
            path,
        }
    }

    /// Commit the first point of a root lane at its current column
    pub fn anchor(&mut self, row: usize, renderer: &PathRenderer) {
        if self.drawing {
            return;
        }
        renderer.start(&mut self.path, self.column, row);
        self.prior_column = self.column;
        self.prior_row = row;
        self.drawing = true;
    }

    /// Draw the connector from the last committed point to `(column, row)`
    ///
    /// Returns false when nothing was drawn: the lane has no anchor yet, or
    /// its last point is already on `row`.
    pub fn advance(&mut self, row: usize, renderer: &PathRenderer) -> bool {
        if !self.drawing || self.prior_row >= row {
            return false;
        }
        renderer.extend(
            &mut self.path,
            (self.prior_column, self.prior_row),
            (self.column, row),
        );
        self.prior_column = self.column;
        self.prior_row = row;
        true
    }

    pub fn path(&self) -> &[PathCommand] {
        &self.path
    }

    /// Close the lane, handing its accumulated path over
    pub fn end(&mut self) -> LanePath {
        LanePath {
            lane: self.id,
            color: self.color,
            commands: std::mem::take(&mut self.path),
        }
    }
}
