use crate::emoji::EmojiCategorizer;
use crate::error::{Error, Result};
use crate::model::{GroupRecord, StatsTable};
use crate::progress::ProgressReporter;
use glob::{MatchOptions, Pattern};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of scanning one export directory.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub table: StatsTable,
    /// Group names of files that could not be read or parsed.
    pub skipped: Vec<String>,
}

/// Scan `input_dir` for `*.json` exports and build one record per readable
/// file. See [`aggregate_directory`].
pub fn aggregate(
    input_dir: &Path,
    categorizer: &EmojiCategorizer,
    reporter: &dyn ProgressReporter,
) -> Result<StatsTable> {
    aggregate_directory(input_dir, categorizer, reporter).map(|agg| agg.table)
}

/// Non-recursive scan of `input_dir`. A file that fails to read or parse is
/// reported and skipped; only a missing directory fails the whole scan.
/// Records come back sorted by group name.
pub fn aggregate_directory(
    input_dir: &Path,
    categorizer: &EmojiCategorizer,
    reporter: &dyn ProgressReporter,
) -> Result<Aggregation> {
    if !input_dir.is_dir() {
        return Err(Error::InvalidInput(format!(
            "Input path {} is not a directory",
            input_dir.display()
        )));
    }

    reporter.on_aggregate_start(input_dir);
    let start = Instant::now();

    let pattern = format!(
        "{}/*.json",
        Pattern::escape(&input_dir.to_string_lossy())
    );
    debug!("Globbing {}", pattern);

    let mut aggregation = Aggregation::default();

    // Hidden files such as `.cache.json` are not exports.
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    for entry in glob::glob_with(&pattern, options)? {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                let group_name = group_name_for(err.path());
                warn!("Skipping {}: {}", group_name, err);
                reporter.on_file_skipped(&group_name, &err.to_string());
                aggregation.skipped.push(group_name);
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }

        let group_name = group_name_for(&path);
        match load_group(&path, &group_name, categorizer) {
            Ok(record) => {
                debug!(
                    "{}: {} messages, {} replies, {} reactions",
                    record.group_name,
                    record.message_count,
                    record.reply_count,
                    record.emoji_total()
                );
                reporter.on_file_parsed(&record.group_name, record.message_count);
                aggregation.table.push(record);
            }
            Err(err) => {
                warn!("Skipping {}: {}", group_name, err);
                reporter.on_file_skipped(&group_name, &err.to_string());
                aggregation.skipped.push(group_name);
            }
        }
    }

    aggregation
        .table
        .sort_by(|a, b| a.group_name.cmp(&b.group_name));

    let duration = start.elapsed();
    info!(
        "Aggregated {} groups ({} skipped) in {:.2}s",
        aggregation.table.len(),
        aggregation.skipped.len(),
        duration.as_secs_f64()
    );
    reporter.on_aggregate_complete(
        aggregation.table.len(),
        aggregation.skipped.len(),
        duration.as_secs_f64(),
    );

    Ok(aggregation)
}

fn group_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn load_group(path: &Path, group_name: &str, categorizer: &EmojiCategorizer) -> Result<GroupRecord> {
    let contents = fs::read_to_string(path)?;
    let data: Value = serde_json::from_str(&contents)?;
    parse_group(group_name, &data, categorizer)
}

/// Build a record from an already parsed export document.
///
/// `replyTo` only counts when it is a JSON object. Reactions without an
/// integer `count` count once; reactions without a string `emoji` go to
/// `other`.
pub fn parse_group(
    group_name: &str,
    data: &Value,
    categorizer: &EmojiCategorizer,
) -> Result<GroupRecord> {
    let root = data.as_object().ok_or_else(|| {
        Error::InvalidInput("expected a JSON object at the top level".to_string())
    })?;

    let messages: &[Value] = root
        .get("messages")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    let reply_count = messages
        .iter()
        .filter(|m| m.get("replyTo").is_some_and(Value::is_object))
        .count() as u64;

    let mut emoji_totals: BTreeMap<String, u64> = categorizer
        .all_categories()
        .into_iter()
        .map(|name| (name.to_string(), 0))
        .collect();

    for message in messages {
        let Some(reactions) = message.get("reactions").and_then(Value::as_array) else {
            continue;
        };
        for reaction in reactions.iter().filter(|r| r.is_object()) {
            let emoji = reaction.get("emoji").and_then(Value::as_str).unwrap_or_default();
            // Negative, fractional or non-numeric counts count once, like a missing one.
            let count = reaction.get("count").and_then(Value::as_u64).unwrap_or(1);
            let category = categorizer.categorize(emoji);
            let total = emoji_totals.entry(category.to_string()).or_default();
            *total = total.saturating_add(count);
        }
    }

    Ok(GroupRecord {
        group_name: group_name.to_string(),
        message_count: messages.len() as u64,
        reply_count,
        emoji_totals,
    })
}
