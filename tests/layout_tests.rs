use std::collections::{BTreeMap, HashMap};

use group_stats_grapher::config::EmojiCategory;
use group_stats_grapher::layout::{
    self, combined, emojis, messages, totals, ChartLayout, LayoutContext,
};
use group_stats_grapher::{EmojiCategorizer, GroupRecord, StatsTable};

fn categorizer() -> EmojiCategorizer {
    EmojiCategorizer::new(vec![
        EmojiCategory::new("happy", &["😀"]),
        EmojiCategory::new("sad", &["😢"]),
    ])
}

fn record(name: &str, messages: u64, replies: u64, totals: &[(&str, u64)]) -> GroupRecord {
    let mut emoji_totals: BTreeMap<String, u64> = ["happy", "sad", "other"]
        .iter()
        .map(|c| (c.to_string(), 0))
        .collect();
    for (category, count) in totals {
        emoji_totals.insert(category.to_string(), *count);
    }
    GroupRecord {
        group_name: name.to_string(),
        message_count: messages,
        reply_count: replies,
        emoji_totals,
    }
}

fn annotation_texts(layout: &ChartLayout) -> Vec<&str> {
    layout.annotations.iter().map(|a| a.text.as_str()).collect()
}

fn with_context<T>(f: impl FnOnce(&LayoutContext) -> T) -> T {
    let categorizer = categorizer();
    let participants: HashMap<String, u32> = [("Group A".to_string(), 12)].into_iter().collect();
    let ctx = LayoutContext::new(&categorizer, &participants);
    f(&ctx)
}

#[test]
fn test_messages_layout_overlays_replies() {
    let table: StatsTable = vec![record("Group A", 40, 10, &[]), record("Group B", 7, 0, &[])];
    let layout = with_context(|ctx| messages::build(&table, ctx));

    assert_eq!(layout.bars.len(), 4);
    let group_a = layout.bars_for_group(0);
    assert_eq!(group_a[0].series, "messages");
    assert_eq!(group_a[0].height, 40.0);
    assert_eq!(group_a[1].series, "replies");
    assert_eq!(group_a[1].height, 10.0);
    assert!(group_a.iter().all(|b| b.bottom == 0.0 && b.x == 0.0));

    assert_eq!(annotation_texts(&layout), vec!["25%", "0%"]);
    assert_eq!(layout.annotations[0].y, 45.0);
    assert_eq!(layout.y_max, None);
}

#[test]
fn test_messages_layout_zero_messages_is_zero_percent() {
    let table: StatsTable = vec![record("Empty", 0, 0, &[])];
    let layout = with_context(|ctx| messages::build(&table, ctx));

    assert_eq!(annotation_texts(&layout), vec!["0%"]);
    assert!(layout.bars.iter().all(|b| b.height == 0.0));
}

#[test]
fn test_emoji_layout_stacks_in_category_order() {
    let table: StatsTable = vec![record("Group A", 5, 1, &[("happy", 3), ("other", 2)])];
    let layout = with_context(|ctx| emojis::build(&table, ctx));

    let series: Vec<&str> = layout.bars.iter().map(|b| b.series.as_str()).collect();
    assert_eq!(series, vec!["happy", "sad", "other"]);

    let bottoms: Vec<f64> = layout.bars.iter().map(|b| b.bottom).collect();
    let heights: Vec<f64> = layout.bars.iter().map(|b| b.height).collect();
    assert_eq!(bottoms, vec![0.0, 3.0, 3.0]);
    assert_eq!(heights, vec![3.0, 0.0, 2.0]);

    assert_eq!(annotation_texts(&layout), vec!["5"]);
    let labels: Vec<&str> = layout.legend.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Happy", "Sad", "Other Emojis"]);
}

#[test]
fn test_combined_layout_offsets_pairs() {
    let table: StatsTable = vec![
        record("Group A", 10, 5, &[("sad", 4)]),
        record("Group B", 0, 0, &[]),
    ];
    let layout = with_context(|ctx| combined::build(&table, ctx));

    let group_b = layout.bars_for_group(1);
    assert_eq!(group_b.len(), 5);

    let left: Vec<_> = layout
        .bars
        .iter()
        .filter(|b| b.series == "messages" || b.series == "replies")
        .collect();
    assert!(left
        .iter()
        .all(|b| b.width == combined::LEFT_WIDTH));
    assert_eq!(left[0].x, -combined::LEFT_WIDTH);
    assert_eq!(left[2].x, 1.0 - combined::LEFT_WIDTH);

    let right: Vec<_> = layout
        .bars
        .iter()
        .filter(|b| b.width == combined::RIGHT_WIDTH)
        .collect();
    assert_eq!(right.len(), 6);
    assert_eq!(right[0].x, combined::RIGHT_WIDTH);

    assert_eq!(annotation_texts(&layout), vec!["50%", "4", "0%", "0"]);
    assert_eq!(layout.legend.len(), 5);
}

#[test]
fn test_totals_layout_stacks_bottom_up() {
    let table: StatsTable = vec![record("Group A", 6, 2, &[("happy", 1), ("sad", 1)])];
    let layout = with_context(|ctx| totals::build(&table, ctx));

    let series: Vec<&str> = layout.bars.iter().map(|b| b.series.as_str()).collect();
    assert_eq!(series, vec!["replies", "emoji_and_messages", "messages"]);
    let bottoms: Vec<f64> = layout.bars.iter().map(|b| b.bottom).collect();
    assert_eq!(bottoms, vec![0.0, 2.0, 4.0]);
    assert_eq!(layout.bars[2].top(), 10.0);

    assert_eq!(annotation_texts(&layout), vec!["20% replies\n20% emojis"]);
}

#[test]
fn test_totals_layout_y_limit_from_largest_total() {
    let table: StatsTable = vec![
        record("Ten", 10, 0, &[]),
        record("TwentyFive", 20, 3, &[("happy", 2)]),
        record("Zero", 0, 0, &[]),
    ];
    let layout = with_context(|ctx| totals::build(&table, ctx));

    let y_max = layout.y_max.unwrap();
    assert!((y_max - 28.75).abs() < 1e-9);
    assert_eq!(layout.annotations[2].text, "0% replies\n0% emojis");
}

#[test]
fn test_tick_labels_reverse_hebrew_and_show_members() {
    let table: StatsTable = vec![record("Group A", 1, 0, &[]), record("קבוצה", 1, 0, &[])];
    let layout = with_context(|ctx| messages::build(&table, ctx));

    assert_eq!(layout.ticks.len(), 2);
    assert_eq!(layout.ticks[0].lines, vec!["Group A", "(12 members)"]);
    assert_eq!(layout.ticks[1].lines, vec!["הצובק", "(? members)"]);
    assert_eq!(layout.ticks[1].x, 1.0);
}

#[test]
fn test_build_all_order() {
    let table: StatsTable = vec![record("Group A", 3, 1, &[])];
    let layouts = with_context(|ctx| layout::build_all(&table, ctx));

    let names: Vec<&str> = layouts.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec![messages::NAME, emojis::NAME, combined::NAME, totals::NAME]
    );
}

#[test]
fn test_empty_table_builds_empty_layouts() {
    let table: StatsTable = Vec::new();
    let layouts = with_context(|ctx| layout::build_all(&table, ctx));

    assert!(layouts.iter().all(|l| l.bars.is_empty() && l.ticks.is_empty()));
    assert_eq!(layouts[3].y_max, Some(0.0));
}

#[test]
fn test_duplicate_category_names_chart_once() {
    let categorizer = EmojiCategorizer::new(vec![
        EmojiCategory::new("happy", &["😀"]),
        EmojiCategory::new("happy", &["😃"]),
    ]);
    let data = serde_json::json!({
        "messages": [
            { "reactions": [ { "emoji": "😀", "count": 2 }, { "emoji": "😃", "count": 3 } ] }
        ]
    });
    let record =
        group_stats_grapher::scanner::parse_group("Group A", &data, &categorizer).unwrap();
    let table: StatsTable = vec![record];
    let participants = HashMap::new();
    let ctx = LayoutContext::new(&categorizer, &participants);

    let emoji_chart = emojis::build(&table, &ctx);
    assert_eq!(emoji_chart.bars.len(), 2);
    assert_eq!(emoji_chart.legend.len(), 2);
    assert_eq!(annotation_texts(&emoji_chart), vec!["5"]);

    let totals_chart = totals::build(&table, &ctx);
    let emoji_bar = totals_chart
        .bars
        .iter()
        .find(|b| b.series == "emoji_and_messages")
        .unwrap();
    assert_eq!(emoji_bar.height, 5.0);
}
