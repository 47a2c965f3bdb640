use std::collections::BTreeMap;

/// Aggregated statistics for one group, built from a single export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRecord {
    pub group_name: String,
    pub message_count: u64,
    pub reply_count: u64,
    /// Reaction counts per category. Holds an entry for every configured
    /// category plus `other`, zero when nothing matched.
    pub emoji_totals: BTreeMap<String, u64>,
}

impl GroupRecord {
    pub fn category_count(&self, category: &str) -> u64 {
        self.emoji_totals.get(category).copied().unwrap_or(0)
    }

    pub fn emoji_total(&self) -> u64 {
        self.emoji_totals
            .values()
            .fold(0u64, |acc, count| acc.saturating_add(*count))
    }

    /// Replies + emoji reactions + messages, the height of the stacked total bar.
    pub fn grand_total(&self) -> u64 {
        self.reply_count
            .saturating_add(self.emoji_total())
            .saturating_add(self.message_count)
    }
}

/// One record per successfully parsed file, sorted by group name.
pub type StatsTable = Vec<GroupRecord>;
