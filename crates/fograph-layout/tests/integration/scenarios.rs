use fograph_layout::{
    CurveStyle, DrawCall, LaneId, LaneSetManager, LayoutError, LayoutOptions, PathCommand, Point,
    RepackMode,
};
use pretty_assertions::assert_eq;

use crate::{build_graph, manager_with, seeded, RecordingCanvas};

/// Linear history stays in one column on one lane
#[test_log::test]
fn test_linear_history() {
    let (graph, ids) = build_graph(&[("A", 1, &[]), ("B", 2, &["A"]), ("C", 3, &["B"])]);
    let layout = manager_with(RepackMode::Compact)
        .run(&graph, &graph.roots())
        .unwrap();

    assert_eq!(layout.row_count(), 3);
    assert_eq!(layout.lanes_created, 1);
    assert_eq!(layout.max_column, 0);

    let drawn: Vec<_> = layout.rows.iter().map(|r| (r.entry, r.column)).collect();
    assert_eq!(drawn, vec![(ids[0], 0), (ids[1], 0), (ids[2], 0)]);

    let paths: Vec<_> = layout.paths().collect();
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].segment_count(), 2);
    assert!(layout.rows.last().unwrap().active.is_empty());
}

/// A splits into B and C, which merge again at D
#[test_log::test]
fn test_branch_and_merge() {
    let (graph, ids) = build_graph(&[
        ("A", 1, &[]),
        ("B", 2, &["A"]),
        ("C", 3, &["A"]),
        ("D", 4, &["B", "C"]),
    ]);
    let layout = manager_with(RepackMode::Compact)
        .run(&graph, &graph.roots())
        .unwrap();

    assert_eq!(layout.row_count(), 4);

    let split = &layout.rows[0];
    assert_eq!(split.spawned, vec![LaneId(1), LaneId(2)]);
    let after_split: Vec<_> = split.active.iter().map(|s| (s.lane, s.column, s.target)).collect();
    assert_eq!(
        after_split,
        vec![(LaneId(1), 0, ids[1]), (LaneId(2), 1, ids[2])]
    );

    let entering = &layout.rows[2];
    assert_eq!(entering.active.len(), 2);
    assert!(entering.active.iter().all(|s| s.target == ids[3]));

    let merge = &layout.rows[3];
    assert_eq!(merge.entry, ids[3]);
    assert_eq!(merge.canonical, LaneId(1));
    assert_eq!(merge.merged, vec![LaneId(2)]);
    assert_eq!(merge.column, 0);
    assert!(merge.active.is_empty());

    // Both lanes end on D's commit mark.
    let end = Point::new(0.0, 100.0);
    let closed: Vec<_> = layout.paths().filter(|p| p.lane != LaneId(0)).collect();
    assert_eq!(closed.len(), 2);
    for path in closed {
        assert_eq!(path.commands.last().unwrap().end_point(), end);
    }
}

/// Two roots that never meet keep separate lanes
#[test_log::test]
fn test_independent_roots() {
    let (graph, ids) = build_graph(&[
        ("A", 1, &[]),
        ("B", 2, &[]),
        ("A2", 3, &["A"]),
        ("B2", 4, &["B"]),
    ]);
    let layout = manager_with(RepackMode::Compact)
        .run(&graph, &[ids[0], ids[1]])
        .unwrap();

    assert_eq!(layout.row_count(), 4);
    assert_eq!(layout.lanes_created, 2);

    for row in &layout.rows[..2] {
        let columns: Vec<_> = row.active.iter().map(|s| s.column).collect();
        assert_eq!(columns, vec![0, 1]);
    }
    assert_eq!(layout.rows[1].column, 1);

    // A's chain ends first; B's lane closes on its own later.
    let closed: Vec<_> = layout.paths().map(|p| p.lane).collect();
    assert_eq!(closed, vec![LaneId(0), LaneId(1)]);
    assert_eq!(layout.rows[2].active.len(), 1);
    assert!(layout.rows[3].active.is_empty());
}

#[test]
fn test_root_lane_anchors_in_its_own_column() {
    let (graph, ids) = build_graph(&[("A", 1, &[]), ("B", 2, &[]), ("B2", 3, &["B"])]);
    let layout = LaneSetManager::new(seeded(7))
        .unwrap()
        .run(&graph, &[ids[0], ids[1]])
        .unwrap();

    // A closes on row 1; B keeps column 1 instead of sliding into the gap.
    assert_eq!(layout.rows[1].column, 1);
    assert_eq!(layout.rows[2].column, 1);
    let b_lane = layout.paths().find(|p| p.lane == LaneId(1)).unwrap();
    assert_eq!(
        b_lane.commands,
        vec![
            PathCommand::MoveTo(Point::new(30.0, 50.0)),
            PathCommand::LineTo(Point::new(30.0, 75.0)),
        ]
    );
}

#[test]
fn test_compact_repack_reclaims_closed_columns() {
    let (graph, ids) = build_graph(&[("A", 1, &[]), ("B", 2, &[]), ("B2", 3, &["B"])]);
    let layout = manager_with(RepackMode::Compact)
        .run(&graph, &[ids[0], ids[1]])
        .unwrap();

    assert_eq!(layout.rows[1].column, 0);
    let b_lane = layout.paths().find(|p| p.lane == LaneId(1)).unwrap();
    assert_eq!(
        b_lane.commands,
        vec![
            PathCommand::MoveTo(Point::new(0.0, 50.0)),
            PathCommand::LineTo(Point::new(0.0, 75.0)),
        ]
    );
}

/// Lanes right of a closed lane stay put unless compaction is asked for
#[test_log::test]
fn test_unrelated_lanes_do_not_shift_by_default() {
    let (graph, ids) = build_graph(&[
        ("A", 1, &[]),
        ("B", 2, &[]),
        ("C", 3, &[]),
        ("B2", 4, &["B"]),
        ("C2", 5, &["C"]),
    ]);
    let roots = [ids[0], ids[1], ids[2]];
    let layout = LaneSetManager::new(seeded(7))
        .unwrap()
        .run(&graph, &roots)
        .unwrap();

    let active: Vec<_> = layout.rows[0].active.iter().map(|s| (s.lane, s.column)).collect();
    assert_eq!(active, vec![(LaneId(1), 1), (LaneId(2), 2)]);

    let drawn: Vec<_> = layout.rows.iter().map(|r| (r.entry, r.column)).collect();
    assert_eq!(
        drawn,
        vec![(ids[0], 0), (ids[1], 1), (ids[2], 2), (ids[3], 1), (ids[4], 2)]
    );
    let active: Vec<_> = layout.rows[3].active.iter().map(|s| (s.lane, s.column)).collect();
    assert_eq!(active, vec![(LaneId(2), 2)]);

    // The C lane is one straight vertical line.
    let c_lane = layout.paths().find(|p| p.lane == LaneId(2)).unwrap();
    assert!(c_lane.commands.iter().all(|c| c.end_point().x == 60.0));

    let compact = manager_with(RepackMode::Compact).run(&graph, &roots).unwrap();
    let active: Vec<_> = compact.rows[3].active.iter().map(|s| (s.lane, s.column)).collect();
    assert_eq!(active, vec![(LaneId(2), 0)]);
}

#[test]
fn test_merge_uses_configured_curve() {
    let (graph, _) = build_graph(&[
        ("A", 1, &[]),
        ("B", 2, &["A"]),
        ("C", 3, &["A"]),
        ("D", 4, &["B", "C"]),
    ]);
    let options = LayoutOptions {
        curve_style: CurveStyle::Straight,
        ..seeded(1)
    };
    let layout = LaneSetManager::new(options)
        .unwrap()
        .run(&graph, &graph.roots())
        .unwrap();

    let side = layout.paths().find(|p| p.lane == LaneId(2)).unwrap();
    assert_eq!(
        side.commands,
        vec![
            PathCommand::MoveTo(Point::new(0.0, 25.0)),
            PathCommand::LineTo(Point::new(30.0, 50.0)),
            PathCommand::LineTo(Point::new(30.0, 75.0)),
            PathCommand::LineTo(Point::new(0.0, 100.0)),
        ]
    );
}

#[test]
fn test_replay_draws_every_call_then_finishes() {
    let (graph, _) = build_graph(&[
        ("A", 1, &[]),
        ("B", 2, &["A"]),
        ("C", 3, &["A"]),
        ("D", 4, &["B", "C"]),
    ]);
    let layout = manager_with(RepackMode::Compact)
        .run(&graph, &graph.roots())
        .unwrap();

    let mut canvas = RecordingCanvas::default();
    layout.replay(&mut canvas);

    assert_eq!(canvas.commits.len(), 4);
    assert_eq!(canvas.labels.len(), 4);
    assert_eq!(canvas.paths.len(), 3);
    assert_eq!(canvas.finished, 1);
    assert_eq!(canvas.labels[3], (4, 100.0, "D message".to_string()));

    let (mark, center, color) = canvas.commits[3];
    assert_eq!(center, Point::new(0.0, 100.0));
    assert_eq!(color, layout.palette().color(mark.color));

    // Margins 50/50, one extra column, "A message" is nine glyphs wide.
    let extents = canvas.extents.unwrap();
    assert_eq!(extents.label_x, 30.0 + 20.0);
    assert_eq!(extents.width, 50.0 + 50.0 + 9.0 * 7.5 + 50.0);
    assert_eq!(extents.height, 4.0 * 25.0 + 100.0);
}

#[test]
fn test_split_colors() {
    let (graph, _) = build_graph(&[
        ("A", 1, &[]),
        ("B", 2, &["A"]),
        ("C", 3, &["A"]),
        ("E", 4, &["A"]),
    ]);
    let layout = manager_with(RepackMode::Compact)
        .run(&graph, &graph.roots())
        .unwrap();

    let root_color = match &layout.calls[0] {
        DrawCall::Commit(mark) => mark.color,
        other => panic!("expected a commit first, got {other:?}"),
    };
    let colors: Vec<_> = layout.rows[0].active.iter().map(|s| s.color.0).collect();
    assert_eq!(root_color.0, 0);
    assert_eq!(colors, vec![0, 1, 2]);
}

#[test]
fn test_empty_input_is_not_an_error() {
    let (graph, _) = build_graph(&[]);
    let layout = manager_with(RepackMode::Compact).run(&graph, &[]).unwrap();

    let mut canvas = RecordingCanvas::default();
    layout.replay(&mut canvas);
    assert!(canvas.commits.is_empty());
    assert_eq!(canvas.finished, 1);
    assert_eq!(canvas.extents.unwrap().height, 100.0);
}

#[test]
fn test_invalid_options_rejected_before_layout() {
    let options = LayoutOptions {
        lane_spacing: 0.0,
        ..Default::default()
    };
    let err = LaneSetManager::new(options).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidConfig { .. }));
    assert!(err.to_string().contains("lane_spacing"));

    let options = LayoutOptions {
        margins: (10.0, -1.0),
        ..Default::default()
    };
    assert!(LaneSetManager::new(options).is_err());
}

#[test]
fn test_cycle_fails_loudly() {
    let (mut graph, ids) = build_graph(&[("A", 1, &[]), ("B", 2, &["A"]), ("C", 3, &["B"])]);
    graph.link(ids[2], ids[1]).unwrap();

    let err = manager_with(RepackMode::Compact)
        .run(&graph, &[ids[0]])
        .unwrap_err();
    assert!(matches!(err, LayoutError::Stalled { .. }));
}
