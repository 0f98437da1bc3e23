pub mod entry;
pub mod lane;
pub mod layout;
pub mod manager;
pub mod packing;

// Re-export commonly used types
pub use entry::{EntryGraph, EntryId, HistoryEntry};
pub use lane::{Lane, LaneId};
pub use layout::{LaneState, Layout, RowSnapshot};
pub use manager::LaneSetManager;
pub use packing::repack_columns;
