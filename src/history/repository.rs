use git2::{Repository, Sort};
use log::{debug, info};
use std::path::Path;

use crate::config::HistoryConfig;
use crate::error::Result;

use super::{GraphBuilder, History};

/// Read the commit history of the repository at `path`
///
/// Walks `HEAD`, or every local branch when `all_refs` is set, newest first,
/// keeps at most `max_count` commits and builds the graph oldest first.
pub fn read_repository(path: &Path, config: &HistoryConfig) -> Result<History> {
    let repo = Repository::open(path)?;
    info!("Reading history from {}", path.display());

    let mut revwalk = repo.revwalk()?;
    if config.all_refs {
        revwalk.push_glob("refs/heads")?;
    } else {
        revwalk.push_head()?;
    }
    // Children before parents, ties broken by time (newest first)
    revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

    let limit = config.max_count.unwrap_or(usize::MAX);
    let mut oids = Vec::new();
    for oid in revwalk.take(limit) {
        oids.push(oid?);
    }
    debug!("Walked {} commits", oids.len());

    let mut builder = GraphBuilder::new(config.show_dates);
    for oid in oids.into_iter().rev() {
        let commit = repo.find_commit(oid)?;
        let id = oid.to_string();
        let parents: Vec<String> = commit.parent_ids().map(|p| p.to_string()).collect();
        builder.add(
            &id,
            commit.author().when().seconds(),
            commit.summary().unwrap_or(""),
            parents.iter().map(String::as_str),
        )?;
    }
    Ok(builder.finish())
}
