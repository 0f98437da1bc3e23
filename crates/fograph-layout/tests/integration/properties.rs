//! Invariants checked over generated histories

use std::collections::{HashMap, HashSet};

use fograph_layout::{DrawCall, LaneSetManager, Layout, LayoutOptions, PathCommand, RepackMode};
use pretty_assertions::assert_eq;

use crate::{random_graph, seeded};

const SEEDS: [u64; 6] = [1, 2, 3, 17, 99, 2024];

fn layouts(repack: RepackMode) -> Vec<(fograph_layout::EntryGraph, Layout)> {
    SEEDS
        .iter()
        .map(|&seed| {
            let graph = random_graph(seed, 60);
            let manager = LaneSetManager::new(LayoutOptions {
                repack,
                ..seeded(seed)
            })
            .unwrap();
            let layout = manager.run(&graph, &graph.roots()).unwrap();
            (graph, layout)
        })
        .collect()
}

#[test_log::test]
fn test_columns_unique_on_every_row() {
    for repack in [RepackMode::Compact, RepackMode::Monotonic] {
        for (_, layout) in layouts(repack) {
            for row in &layout.rows {
                let columns: HashSet<_> = row.active.iter().map(|s| s.column).collect();
                assert_eq!(columns.len(), row.active.len(), "row {} ({repack:?})", row.row);
            }
        }
    }
}

#[test]
fn test_each_entry_drawn_exactly_once() {
    for (graph, layout) in layouts(RepackMode::Compact) {
        assert_eq!(layout.row_count(), graph.len());
        let drawn: HashSet<_> = layout.rows.iter().map(|r| r.entry).collect();
        assert_eq!(drawn.len(), graph.len());
    }
}

#[test]
fn test_rows_respect_parent_order() {
    for (graph, layout) in layouts(RepackMode::Compact) {
        let row_of: HashMap<_, _> = layout.rows.iter().map(|r| (r.entry, r.row)).collect();
        for (id, entry) in graph.iter() {
            for parent in &entry.parents {
                assert!(row_of[parent] < row_of[&id]);
            }
        }
    }
}

#[test]
fn test_merges_close_all_but_one_lane() {
    for (graph, layout) in layouts(RepackMode::Compact) {
        for row in &layout.rows {
            let parents = graph[row.entry].parents.len();
            assert_eq!(row.merged.len(), parents.saturating_sub(1));

            let end = layout.options().grid().point(row.column, row.row);
            for lane in &row.merged {
                let path = layout.paths().find(|p| p.lane == *lane).unwrap();
                assert_eq!(path.commands.last().unwrap().end_point(), end);
            }
        }
    }
}

#[test]
fn test_splits_spawn_one_lane_per_child() {
    for (graph, layout) in layouts(RepackMode::Compact) {
        let commit_color: HashMap<_, _> = layout
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Commit(mark) => Some((mark.entry, mark.color)),
                _ => None,
            })
            .collect();

        for row in &layout.rows {
            let children = &graph[row.entry].children;
            if children.len() < 2 {
                assert!(row.spawned.is_empty());
                continue;
            }
            assert_eq!(row.spawned.len(), children.len());
            for (lane, child) in row.spawned.iter().zip(children) {
                let state = row.active.iter().find(|s| s.lane == *lane).unwrap();
                assert_eq!(state.target, *child);
            }
            let first = row.active.iter().find(|s| s.lane == row.spawned[0]).unwrap();
            assert_eq!(first.color, commit_color[&row.entry]);
        }
    }
}

#[test]
fn test_vertical_segments_stay_straight() {
    for (_, layout) in layouts(RepackMode::Compact) {
        for path in layout.paths() {
            for pair in path.commands.windows(2) {
                let (from, to) = (pair[0].end_point(), pair[1].end_point());
                if from.x == to.x {
                    assert!(matches!(pair[1], PathCommand::LineTo(_)));
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_draw_calls() {
    let graph = random_graph(5, 80);
    let first = LaneSetManager::new(seeded(11)).unwrap();
    let second = LaneSetManager::new(seeded(11)).unwrap();

    let a = first.run(&graph, &graph.roots()).unwrap();
    let b = second.run(&graph, &graph.roots()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_unseeded_manager_is_stable_across_runs() {
    let graph = random_graph(8, 30);
    let manager = LaneSetManager::new(LayoutOptions::default()).unwrap();

    let a = manager.run(&graph, &graph.roots()).unwrap();
    let b = manager.run(&graph, &graph.roots()).unwrap();
    assert_eq!(a.calls, b.calls);
    assert_eq!(a.palette(), b.palette());
}

#[test]
fn test_palette_wraps_after_its_size() {
    let graph = random_graph(3, 60);
    let options = LayoutOptions {
        palette_size: 2,
        ..seeded(4)
    };
    let layout = LaneSetManager::new(options)
        .unwrap()
        .run(&graph, &graph.roots())
        .unwrap();
    assert!(layout.paths().all(|p| p.color.0 < 2));
}
