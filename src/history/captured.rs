use log::debug;

use crate::config::HistoryConfig;
use crate::error::{FographError, Result};

use super::{GraphBuilder, History};

/// Parse a captured `git log --format=%H:%at:%P:%s --date-order --reverse`
///
/// One entry per line, oldest first. The message is everything after the
/// third colon. Blank lines are skipped.
pub fn parse_log(text: &str) -> Result<History> {
    parse_log_with(text, &HistoryConfig::default())
}

/// [`parse_log`] honouring `max_count` (newest lines kept) and `show_dates`
pub fn parse_log_with(text: &str, config: &HistoryConfig) -> Result<History> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty())
        .collect();
    let skip = config
        .max_count
        .map_or(0, |max| lines.len().saturating_sub(max));
    if skip > 0 {
        debug!("Keeping the newest {} of {} log lines", lines.len() - skip, lines.len());
    }

    let mut builder = GraphBuilder::new(config.show_dates);
    for &(number, line) in &lines[skip..] {
        let mut fields = line.splitn(4, ':');
        let (Some(id), Some(time), Some(parents), Some(message)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(FographError::log_parse(
                number,
                "expected 'id:timestamp:parents:message'",
            ));
        };

        let id = id.trim();
        if id.is_empty() {
            return Err(FographError::log_parse(number, "empty commit id"));
        }
        let timestamp: i64 = time.trim().parse().map_err(|_| {
            FographError::log_parse(number, format!("invalid timestamp '{}'", time))
        })?;

        builder.add(id, timestamp, message, parents.split_whitespace())?;
    }
    Ok(builder.finish())
}
