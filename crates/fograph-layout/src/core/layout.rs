use crate::canvas::{Canvas, DrawCall, Extents, LanePath};
use crate::core::entry::EntryId;
use crate::core::lane::LaneId;
use crate::options::LayoutOptions;
use crate::palette::{ColorIndex, Palette};

/// Position of one active lane once a row has been repacked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneState {
    pub lane: LaneId,
    pub column: usize,
    pub target: EntryId,
    pub color: ColorIndex,
}

/// What happened on one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    pub row: usize,
    /// Entry drawn on this row
    pub entry: EntryId,
    pub canonical: LaneId,
    /// Column of the commit mark
    pub column: usize,
    /// Lanes absorbed into the canonical lane on this row
    pub merged: Vec<LaneId>,
    /// Lanes created by a split on this row
    pub spawned: Vec<LaneId>,
    /// Active lanes after repacking, left to right
    pub active: Vec<LaneState>,
}

/// Completed layout: every draw call plus what is needed to size the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub calls: Vec<DrawCall>,
    pub rows: Vec<RowSnapshot>,
    pub max_column: usize,
    pub max_label_len: usize,
    pub lanes_created: usize,
    pub(crate) palette: Palette,
    pub(crate) options: LayoutOptions,
}

impl Layout {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Closed lane paths in the order they were closed
    pub fn paths(&self) -> impl Iterator<Item = &LanePath> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Path(path) => Some(path),
            _ => None,
        })
    }

    pub fn extents(&self) -> Extents {
        let options = &self.options;
        let (margin_x, margin_y) = options.margins;
        let graph_width = self.max_column as f64 * options.lane_spacing + options.label_gap;
        let label_width = self.max_label_len as f64 * options.glyph_width;

        Extents {
            width: margin_x + graph_width + label_width + margin_x,
            height: self.row_count() as f64 * options.row_height + 2.0 * margin_y,
            margins: options.margins,
            label_x: graph_width,
        }
    }

    /// Issue every draw call on `canvas`, then size it
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let grid = self.options.grid();
        for call in &self.calls {
            match call {
                DrawCall::Commit(mark) => {
                    let center = grid.point(mark.column, mark.row);
                    canvas.commit(mark, center, self.palette.color(mark.color));
                }
                DrawCall::Label { row, text } => {
                    canvas.label(*row, grid.point(0, *row).y, text);
                }
                DrawCall::Path(path) => canvas.path(path, self.palette.color(path.color)),
            }
        }
        canvas.finish(&self.extents());
    }
}
