//! History sources: captured `git log` text and live repositories.
//!
//! Both feed entries oldest first into a [`GraphBuilder`], which links each
//! entry to the parents it has already seen. Parents outside the window are
//! dropped and their children become roots.

mod captured;
mod repository;

pub use captured::{parse_log, parse_log_with};
pub use repository::read_repository;

use chrono::DateTime;
use log::debug;

use fograph_layout::{EntryGraph, EntryId};

use crate::constants::LABEL_DATE_FORMAT;
use crate::error::Result;

/// A history ready for layout
#[derive(Debug, Clone, Default)]
pub struct History {
    pub graph: EntryGraph,
    /// Entries with no known parent, in arrival order
    pub roots: Vec<EntryId>,
}

impl History {
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }
}

/// Incrementally builds a [`History`] from entries listed parents-first
#[derive(Debug, Default)]
pub struct GraphBuilder {
    history: History,
    show_dates: bool,
}

impl GraphBuilder {
    pub fn new(show_dates: bool) -> Self {
        Self {
            history: History::default(),
            show_dates,
        }
    }

    /// Add one entry; parents that were never added are ignored
    pub fn add<'p>(
        &mut self,
        id: &str,
        timestamp: i64,
        summary: &str,
        parents: impl IntoIterator<Item = &'p str>,
    ) -> Result<EntryId> {
        let label = format_label(timestamp, summary, self.show_dates);
        let graph = &mut self.history.graph;
        let entry = graph.add_entry(id, timestamp, label)?;

        let mut linked = 0;
        for parent_id in parents {
            match graph.find(parent_id) {
                Some(parent) => {
                    graph.link(parent, entry)?;
                    linked += 1;
                }
                None => debug!(
                    "Couldn't find parent {} for entry {}; ignoring parent",
                    parent_id, id
                ),
            }
        }

        if linked == 0 {
            debug!("Found root entry: {}", id);
            self.history.roots.push(entry);
        }
        Ok(entry)
    }

    pub fn finish(self) -> History {
        self.history
    }
}

/// Row label: the summary, optionally prefixed with the UTC date
pub fn format_label(timestamp: i64, summary: &str, show_dates: bool) -> String {
    if !show_dates {
        return summary.to_string();
    }
    match DateTime::from_timestamp(timestamp, 0) {
        Some(date) => format!("{} {}", date.format(LABEL_DATE_FORMAT), summary),
        None => summary.to_string(),
    }
}
