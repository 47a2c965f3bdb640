//! Renderer-agnostic chart layouts.
//!
//! Each builder turns a [`StatsTable`] into a [`ChartLayout`]: bar segments in
//! data coordinates, text annotations, tick labels and legend entries. Group
//! `i` is centred on `x = i`.

pub mod combined;
pub mod emojis;
pub mod messages;
pub mod totals;

use crate::emoji::{EmojiCategorizer, OTHER};
use crate::model::{GroupRecord, StatsTable};
use std::collections::HashMap;

/// Vertical gap between the top of a bar and its annotation.
pub const ANNOTATION_OFFSET: f64 = 5.0;
/// Default bar width, in group units.
pub const DEFAULT_BAR_WIDTH: f64 = 0.8;

pub const SERIES_MESSAGES: &str = "messages";
pub const SERIES_REPLIES: &str = "replies";
pub const SERIES_EMOJIS: &str = "emoji_and_messages";

#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    /// Color/legend key.
    pub series: String,
    /// Centre of the bar.
    pub x: f64,
    pub width: f64,
    pub bottom: f64,
    pub height: f64,
}

impl BarSegment {
    pub fn top(&self) -> f64 {
        self.bottom + self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub x: f64,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub series: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Stable identifier, used as the output file stem.
    pub name: String,
    pub title: String,
    pub y_label: String,
    pub size: (u32, u32),
    pub bars: Vec<BarSegment>,
    pub annotations: Vec<Annotation>,
    pub ticks: Vec<TickLabel>,
    pub legend: Vec<LegendEntry>,
    /// Explicit y-axis upper limit; `None` lets the renderer autoscale.
    pub y_max: Option<f64>,
}

impl ChartLayout {
    fn new(name: &str, title: &str, size: (u32, u32)) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            y_label: "Count".to_string(),
            size,
            bars: Vec::new(),
            annotations: Vec::new(),
            ticks: Vec::new(),
            legend: Vec::new(),
            y_max: None,
        }
    }

    /// Bars of one group: every segment whose centre falls within half a
    /// group unit of `group_index`.
    pub fn bars_for_group(&self, group_index: usize) -> Vec<&BarSegment> {
        let centre = group_index as f64;
        self.bars
            .iter()
            .filter(|bar| (bar.x - centre).abs() < 0.5)
            .collect()
    }
}

/// Read-only inputs shared by every layout builder.
pub struct LayoutContext<'a> {
    pub categorizer: &'a EmojiCategorizer,
    pub participants: &'a HashMap<String, u32>,
}

impl<'a> LayoutContext<'a> {
    pub fn new(categorizer: &'a EmojiCategorizer, participants: &'a HashMap<String, u32>) -> Self {
        Self {
            categorizer,
            participants,
        }
    }

    fn tick_labels(&self, table: &StatsTable) -> Vec<TickLabel> {
        table
            .iter()
            .enumerate()
            .map(|(i, record)| TickLabel {
                x: i as f64,
                lines: tick_label_lines(&record.group_name, self.participants),
            })
            .collect()
    }

    fn category_legend(&self) -> Vec<LegendEntry> {
        self.categorizer
            .all_categories()
            .into_iter()
            .map(|category| LegendEntry {
                series: category.to_string(),
                label: category_label(category),
            })
            .collect()
    }
}

/// Build all four layouts in presentation order.
pub fn build_all(table: &StatsTable, ctx: &LayoutContext) -> Vec<ChartLayout> {
    vec![
        messages::build(table, ctx),
        emojis::build(table, ctx),
        combined::build(table, ctx),
        totals::build(table, ctx),
    ]
}

/// Reverse `name` if it contains Hebrew characters, so right-to-left text
/// reads correctly in a left-to-right renderer.
pub fn fix_rtl(name: &str) -> String {
    if name.chars().any(|c| ('\u{0590}'..='\u{05FF}').contains(&c)) {
        name.chars().rev().collect()
    } else {
        name.to_string()
    }
}

pub fn tick_label_lines(group_name: &str, participants: &HashMap<String, u32>) -> Vec<String> {
    let members = participants
        .get(group_name)
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    vec![fix_rtl(group_name), format!("({} members)", members)]
}

/// Legend label for a category: capitalized, with `other` spelled out.
pub fn category_label(category: &str) -> String {
    if category == OTHER {
        return "Other Emojis".to_string();
    }
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// Messages bar with the Replies bar drawn over it, and the reply-share
/// annotation above.
fn push_messages_overlay(layout: &mut ChartLayout, record: &GroupRecord, x: f64, width: f64) {
    layout.bars.push(BarSegment {
        series: SERIES_MESSAGES.to_string(),
        x,
        width,
        bottom: 0.0,
        height: record.message_count as f64,
    });
    layout.bars.push(BarSegment {
        series: SERIES_REPLIES.to_string(),
        x,
        width,
        bottom: 0.0,
        height: record.reply_count as f64,
    });
    layout.annotations.push(Annotation {
        x,
        y: record.message_count as f64 + ANNOTATION_OFFSET,
        text: format_percent(percent(record.reply_count, record.message_count)),
    });
}

/// One segment per category, stacked in category order, with the total above.
fn push_emoji_stack(
    layout: &mut ChartLayout,
    record: &GroupRecord,
    categories: &[&str],
    x: f64,
    width: f64,
) {
    let mut bottom = 0.0;
    let mut total = 0u64;
    for category in categories {
        let count = record.category_count(category);
        layout.bars.push(BarSegment {
            series: category.to_string(),
            x,
            width,
            bottom,
            height: count as f64,
        });
        bottom += count as f64;
        total = total.saturating_add(count);
    }
    layout.annotations.push(Annotation {
        x,
        y: total as f64 + ANNOTATION_OFFSET,
        text: total.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_rtl_reverses_hebrew() {
        assert_eq!(fix_rtl("שלום"), "םולש");
        assert_eq!(fix_rtl("abc שלום"), "םולש cba");
    }

    #[test]
    fn test_fix_rtl_leaves_latin_unchanged() {
        assert_eq!(fix_rtl("Group A"), "Group A");
        assert_eq!(fix_rtl(""), "");
    }

    #[test]
    fn test_tick_label_lines_with_and_without_members() {
        let mut participants = HashMap::new();
        participants.insert("Group A".to_string(), 42);

        assert_eq!(
            tick_label_lines("Group A", &participants),
            vec!["Group A".to_string(), "(42 members)".to_string()]
        );
        assert_eq!(
            tick_label_lines("Group B", &participants),
            vec!["Group B".to_string(), "(? members)".to_string()]
        );
    }

    #[test]
    fn test_category_label() {
        assert_eq!(category_label("happy"), "Happy");
        assert_eq!(category_label(OTHER), "Other Emojis");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn test_percent_guards_zero() {
        assert_eq!(percent(3, 0), 0.0);
        assert_eq!(format_percent(percent(0, 0)), "0%");
        assert_eq!(format_percent(percent(1, 4)), "25%");
    }
}
