//! # Fograph Layout
//!
//! Branch-lane layout for commit history graphs. Given a DAG of history
//! entries it assigns every entry a row and a column, tracks the lanes that
//! carry history between splits and merges, and produces curved lane paths
//! ready for any drawing surface.
//!
//! ## Features
//!
//! - **Lane Tracking**: Lanes follow one line of descent, merge when they converge
//!   on an entry and split when an entry has several children
//! - **Column Packing**: Columns are repacked after every row so no two lanes overlap
//! - **Curve Styles**: Straight, quadratic, cubic and S-curve connectors between rows
//! - **Palette**: Evenly spaced lane colours with a seedable starting hue
//! - **Canvas Boundary**: A finished [`Layout`] replays onto anything implementing [`Canvas`]
//!
//! ## Quick Start
//!
//! ```rust
//! use fograph_layout::{CurveStyle, EntryGraph, LaneSetManager, LayoutOptions};
//!
//! # fn example() -> Result<(), fograph_layout::LayoutError> {
//! let mut graph = EntryGraph::new();
//! let root = graph.add_entry("1f3a", 1_700_000_000, "initial import")?;
//! let fix = graph.add_entry("9c0d", 1_700_000_100, "fix build")?;
//! let docs = graph.add_entry("77be", 1_700_000_200, "write docs")?;
//! graph.link(root, fix)?;
//! graph.link(root, docs)?;
//!
//! let options = LayoutOptions {
//!     curve_style: CurveStyle::Cubic,
//!     palette_seed: Some(42),
//!     ..Default::default()
//! };
//! let layout = LaneSetManager::new(options)?.run(&graph, &graph.roots())?;
//! assert_eq!(layout.row_count(), 3);
//! assert_eq!(layout.max_column, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod canvas;
pub mod core;
pub mod error;
pub mod options;
pub mod palette;
pub mod path;

// Re-export the most commonly used types
pub use error::{LayoutError, LayoutResult};

// Graph model and the layout loop
pub use crate::core::{
    repack_columns, EntryGraph, EntryId, HistoryEntry, Lane, LaneId, LaneSetManager, LaneState,
    Layout, RowSnapshot,
};

// Drawing
pub use canvas::{Canvas, CommitMark, DrawCall, Extents, LanePath};
pub use palette::{ColorIndex, Palette, Rgb};
pub use path::{CurveStyle, Grid, PathCommand, PathRenderer, Point};

pub use options::{LayoutOptions, RepackMode};
