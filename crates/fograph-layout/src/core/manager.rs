use std::collections::HashSet;

use tracing::{debug, trace, warn};

use crate::canvas::{CommitMark, DrawCall};
use crate::core::entry::{EntryGraph, EntryId};
use crate::core::lane::{Lane, LaneId};
use crate::core::layout::{LaneState, Layout, RowSnapshot};
use crate::core::packing::repack_columns;
use crate::error::{LayoutError, LayoutResult};
use crate::options::LayoutOptions;
use crate::palette::Palette;
use crate::path::PathRenderer;

/// Runs the branch-lane layout over an [`EntryGraph`]
///
/// Rows are produced one entry at a time. On every row the lane whose target
/// is ready and earliest is drawn, every other lane advances one segment,
/// lanes converging on the drawn entry merge into it, and its children either
/// continue the lane or split it. Columns are repacked after each row.
///
/// # Examples
///
/// ```rust
/// use fograph_layout::{EntryGraph, LaneSetManager, LayoutOptions};
///
/// let mut graph = EntryGraph::new();
/// let a = graph.add_entry("a", 1, "initial import").unwrap();
/// let b = graph.add_entry("b", 2, "fix build").unwrap();
/// graph.link(a, b).unwrap();
///
/// let options = LayoutOptions { palette_seed: Some(1), ..Default::default() };
/// let manager = LaneSetManager::new(options).unwrap();
/// let layout = manager.run(&graph, &graph.roots()).unwrap();
/// assert_eq!(layout.row_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LaneSetManager {
    options: LayoutOptions,
    renderer: PathRenderer,
    seed: u64,
}

impl LaneSetManager {
    /// Validate `options` and prepare a manager
    ///
    /// The palette seed is fixed here: either `options.palette_seed` or a
    /// random one, so repeated runs of one manager colour lanes identically.
    pub fn new(options: LayoutOptions) -> LayoutResult<Self> {
        options.validate()?;
        let seed = options.palette_seed.unwrap_or_else(rand::random);
        let renderer = PathRenderer::new(options.grid(), options.curve_style);
        Ok(Self {
            options,
            renderer,
            seed,
        })
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Lay out everything reachable from `roots`
    ///
    /// Either the whole history is laid out or an error is returned; no
    /// partial layout escapes.
    pub fn run(&self, graph: &EntryGraph, roots: &[EntryId]) -> LayoutResult<Layout> {
        Run::new(self, graph, roots)?.execute()
    }
}

struct Run<'a> {
    graph: &'a EntryGraph,
    renderer: PathRenderer,
    options: &'a LayoutOptions,
    palette: Palette,
    lanes: Vec<Lane>,
    active: Vec<LaneId>,
    drawn: Vec<bool>,
    /// Parents reachable from the roots that are not drawn yet
    pending_parents: Vec<usize>,
    calls: Vec<DrawCall>,
    rows: Vec<RowSnapshot>,
    max_column: usize,
    max_label_len: usize,
}

impl<'a> Run<'a> {
    fn new(
        manager: &'a LaneSetManager,
        graph: &'a EntryGraph,
        roots: &[EntryId],
    ) -> LayoutResult<Self> {
        let mut run = Self {
            graph,
            renderer: manager.renderer,
            options: &manager.options,
            palette: Palette::new(manager.options.palette_size, manager.seed),
            lanes: Vec::new(),
            active: Vec::new(),
            drawn: vec![false; graph.len()],
            pending_parents: vec![0; graph.len()],
            calls: Vec::new(),
            rows: Vec::new(),
            max_column: 0,
            max_label_len: 0,
        };

        let mut seen = HashSet::new();
        for &root in roots {
            let entry = graph.entry(root)?;
            if !seen.insert(root) {
                warn!(entry = %entry.id, "dropping duplicate root");
                continue;
            }
            let column = run.active.len();
            let color = run.palette.allocate();
            let lane = run.spawn(|id| Lane::root(id, column, root, color));
            run.active.push(lane);
        }

        let root_targets: Vec<EntryId> =
            run.active.iter().map(|&id| run.lanes[id.0].target).collect();
        let reachable = reachable_from(graph, &root_targets);
        for (id, entry) in graph.iter() {
            if reachable[id.0] {
                for child in &entry.children {
                    run.pending_parents[child.0] += 1;
                }
            }
        }

        debug!(
            roots = run.active.len(),
            reachable = reachable.iter().filter(|r| **r).count(),
            "starting lane layout"
        );
        Ok(run)
    }

    fn execute(mut self) -> LayoutResult<Layout> {
        let mut row = 0;
        while !self.active.is_empty() {
            row += 1;
            self.step(row)?;
        }

        Ok(Layout {
            calls: self.calls,
            rows: self.rows,
            max_column: self.max_column,
            max_label_len: self.max_label_len,
            lanes_created: self.lanes.len(),
            palette: self.palette,
            options: self.options.clone(),
        })
    }

    fn spawn(&mut self, build: impl FnOnce(LaneId) -> Lane) -> LaneId {
        let id = LaneId(self.lanes.len());
        self.lanes.push(build(id));
        id
    }

    fn lane(&self, id: LaneId) -> &Lane {
        &self.lanes[id.0]
    }

    fn lane_mut(&mut self, id: LaneId) -> &mut Lane {
        &mut self.lanes[id.0]
    }

    fn is_ready(&self, entry: EntryId) -> bool {
        self.pending_parents[entry.0] == 0
    }

    /// Earliest ready target; ties go to the leftmost lane
    fn select_canonical(&self) -> LayoutResult<LaneId> {
        self.active
            .iter()
            .copied()
            .filter(|&id| self.is_ready(self.lane(id).target))
            .min_by_key(|&id| self.graph[self.lane(id).target].timestamp)
            .ok_or_else(|| {
                let mut pending: Vec<String> = Vec::new();
                for &id in &self.active {
                    let entry = &self.graph[self.lane(id).target].id;
                    if !pending.contains(entry) {
                        pending.push(entry.clone());
                    }
                }
                LayoutError::Stalled { pending }
            })
    }

    fn step(&mut self, row: usize) -> LayoutResult<()> {
        let canonical = self.select_canonical()?;
        let entry_id = self.lane(canonical).target;
        let graph = self.graph;
        let entry = &graph[entry_id];
        if self.drawn[entry_id.0] {
            return Err(LayoutError::Revisited { id: entry.id.clone() });
        }

        let renderer = self.renderer;
        self.lane_mut(canonical).anchor(row, &renderer);
        let column = self.lane(canonical).column;
        let color = self.lane(canonical).color;
        debug!(row, entry = %entry.id, column, "drawing entry");

        self.calls.push(DrawCall::Commit(CommitMark {
            entry: entry_id,
            column,
            row,
            color,
        }));
        self.calls.push(DrawCall::Label {
            row,
            text: entry.text.clone(),
        });
        self.max_label_len = self.max_label_len.max(entry.text.chars().count());

        // Every lane contributes one segment; lanes converging here end on the commit.
        let merging: Vec<LaneId> = self
            .active
            .iter()
            .copied()
            .filter(|&id| self.lane(id).target == entry_id)
            .collect();
        let active = self.active.clone();
        for id in active {
            let lane = &mut self.lanes[id.0];
            if lane.target == entry_id {
                lane.column = column;
            }
            if lane.advance(row, &renderer) {
                trace!(row, lane = id.0, column = lane.column, "segment");
            }
            if lane.drawing {
                self.max_column = self.max_column.max(lane.column);
            }
        }
        let merged: Vec<LaneId> = merging.iter().copied().filter(|&id| id != canonical).collect();
        if !merged.is_empty() {
            debug!(row, entry = %entry.id, lanes = merged.len() + 1, "merging lanes");
        }

        self.drawn[entry_id.0] = true;
        for child in &entry.children {
            self.pending_parents[child.0] = self.pending_parents[child.0].saturating_sub(1);
        }

        let mut closed = merged.clone();
        let mut spawned = Vec::new();
        let continuation = match entry.children.as_slice() {
            [] => {
                closed.push(canonical);
                Vec::new()
            }
            [child] => {
                self.lane_mut(canonical).target = *child;
                vec![canonical]
            }
            children => {
                debug!(row, entry = %entry.id, children = children.len(), "splitting lane");
                closed.push(canonical);
                for (idx, &child) in children.iter().enumerate() {
                    let lane_color = if idx == 0 { color } else { self.palette.allocate() };
                    let id = self.spawn(|id| {
                        Lane::branch(id, (column, row), child, lane_color, &renderer)
                    });
                    spawned.push(id);
                }
                spawned.clone()
            }
        };

        for &id in &closed {
            let path = self.lane_mut(id).end();
            self.calls.push(DrawCall::Path(path));
        }

        let mut next = Vec::with_capacity(self.active.len() + continuation.len());
        let mut continuation = Some(continuation);
        for &id in &self.active {
            if merging.contains(&id) {
                if let Some(lanes) = continuation.take() {
                    next.extend(lanes);
                }
            } else {
                next.push(id);
            }
        }

        let mut columns: Vec<usize> = next.iter().map(|&id| self.lane(id).column).collect();
        repack_columns(&mut columns, self.options.repack);
        for (&id, column) in next.iter().zip(columns) {
            self.lane_mut(id).column = column;
        }

        self.rows.push(RowSnapshot {
            row,
            entry: entry_id,
            canonical,
            column,
            merged,
            spawned,
            active: next
                .iter()
                .map(|&id| {
                    let lane = self.lane(id);
                    LaneState {
                        lane: id,
                        column: lane.column,
                        target: lane.target,
                        color: lane.color,
                    }
                })
                .collect(),
        });
        self.active = next;
        Ok(())
    }
}

/// Entries reachable from `roots` through child links
fn reachable_from(graph: &EntryGraph, roots: &[EntryId]) -> Vec<bool> {
    let mut reachable = vec![false; graph.len()];
    let mut stack: Vec<EntryId> = roots.to_vec();
    while let Some(id) = stack.pop() {
        if reachable[id.0] {
            continue;
        }
        reachable[id.0] = true;
        stack.extend(graph[id].children.iter().copied().filter(|c| !reachable[c.0]));
    }
    reachable
}
