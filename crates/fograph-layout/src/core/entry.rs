use std::collections::HashMap;
use std::fmt;

use crate::error::{LayoutError, LayoutResult};

/// Dense index of a [`HistoryEntry`] inside its [`EntryGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One node of the history DAG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Unique identity (a commit hash for git histories)
    pub id: String,
    /// Ordering key; only compared, never interpreted
    pub timestamp: i64,
    /// Label drawn next to the entry, already formatted by the caller
    pub text: String,
    /// Parents in declaration order
    pub parents: Vec<EntryId>,
    /// Children in the order they were linked
    pub children: Vec<EntryId>,
}

impl HistoryEntry {
    /// An entry without parents is a root
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// Arena owning every [`HistoryEntry`] of one history, keyed by identity
#[derive(Debug, Clone, Default)]
pub struct EntryGraph {
    entries: Vec<HistoryEntry>,
    index: HashMap<String, EntryId>,
}

impl EntryGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry with no links yet
    pub fn add_entry(
        &mut self,
        id: impl Into<String>,
        timestamp: i64,
        text: impl Into<String>,
    ) -> LayoutResult<EntryId> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(LayoutError::DuplicateEntry { id });
        }

        let entry_id = EntryId(self.entries.len());
        self.index.insert(id.clone(), entry_id);
        self.entries.push(HistoryEntry {
            id,
            timestamp,
            text: text.into(),
            parents: Vec::new(),
            children: Vec::new(),
        });
        Ok(entry_id)
    }

    /// Record `parent` as a parent of `child` (and `child` as a child of `parent`)
    pub fn link(&mut self, parent: EntryId, child: EntryId) -> LayoutResult<()> {
        self.check(parent)?;
        self.check(child)?;
        self.entries[child.0].parents.push(parent);
        self.entries[parent.0].children.push(child);
        Ok(())
    }

    /// Look up an entry by index
    pub fn get(&self, id: EntryId) -> Option<&HistoryEntry> {
        self.entries.get(id.0)
    }

    /// Look up an entry index by identity
    pub fn find(&self, id: &str) -> Option<EntryId> {
        self.index.get(id).copied()
    }

    /// Entries without parents, in insertion order
    pub fn roots(&self) -> Vec<EntryId> {
        self.iter()
            .filter(|(_, entry)| entry.is_root())
            .map(|(id, _)| id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(EntryId, &HistoryEntry)` in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &HistoryEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| (EntryId(idx), entry))
    }

    pub(crate) fn entry(&self, id: EntryId) -> LayoutResult<&HistoryEntry> {
        self.entries
            .get(id.0)
            .ok_or(LayoutError::UnknownEntry { index: id.0 })
    }

    fn check(&self, id: EntryId) -> LayoutResult<()> {
        self.entry(id).map(|_| ())
    }
}

impl std::ops::Index<EntryId> for EntryGraph {
    type Output = HistoryEntry;

    fn index(&self, id: EntryId) -> &HistoryEntry {
        &self.entries[id.0]
    }
}
