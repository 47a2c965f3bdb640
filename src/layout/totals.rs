use super::{
    format_percent, percent, Annotation, BarSegment, ChartLayout, LayoutContext, LegendEntry,
    ANNOTATION_OFFSET, SERIES_EMOJIS, SERIES_MESSAGES, SERIES_REPLIES,
};
use crate::model::StatsTable;

pub const NAME: &str = "totals_stacked";
pub const BAR_WIDTH: f64 = 0.5;
/// Headroom above the tallest stack, leaving room for the two-line annotation.
pub const Y_HEADROOM: f64 = 1.15;

/// True stack, bottom-up: Replies, all emoji reactions, Messages.
pub fn build(table: &StatsTable, ctx: &LayoutContext) -> ChartLayout {
    let mut layout = ChartLayout::new(
        NAME,
        "Replies, Emojis & Messages (bottom-up stacked)",
        (1400, 600),
    );

    let mut max_total = 0u64;
    for (i, record) in table.iter().enumerate() {
        let x = i as f64;
        let replies = record.reply_count;
        let emojis = record.emoji_total();
        let messages = record.message_count;
        let total = record.grand_total();
        max_total = max_total.max(total);

        let mut bottom = 0.0;
        for (series, value) in [
            (SERIES_REPLIES, replies),
            (SERIES_EMOJIS, emojis),
            (SERIES_MESSAGES, messages),
        ] {
            layout.bars.push(BarSegment {
                series: series.to_string(),
                x,
                width: BAR_WIDTH,
                bottom,
                height: value as f64,
            });
            bottom += value as f64;
        }

        layout.annotations.push(Annotation {
            x,
            y: total as f64 + ANNOTATION_OFFSET,
            text: format!(
                "{} replies\n{} emojis",
                format_percent(percent(replies, total)),
                format_percent(percent(emojis, total))
            ),
        });
    }

    layout.y_max = Some(max_total as f64 * Y_HEADROOM);
    layout.ticks = ctx.tick_labels(table);
    layout.legend = vec![
        LegendEntry {
            series: SERIES_REPLIES.to_string(),
            label: "Replies".to_string(),
        },
        LegendEntry {
            series: SERIES_EMOJIS.to_string(),
            label: "Emojis".to_string(),
        },
        LegendEntry {
            series: SERIES_MESSAGES.to_string(),
            label: "Messages".to_string(),
        },
    ];
    layout
}
