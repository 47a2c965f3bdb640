use super::{
    push_emoji_stack, push_messages_overlay, ChartLayout, LayoutContext, LegendEntry,
    SERIES_MESSAGES, SERIES_REPLIES,
};
use crate::model::StatsTable;

pub const NAME: &str = "combined";

/// Width of the messages/replies pair, also its offset left of the group centre.
pub const LEFT_WIDTH: f64 = 0.35;
/// Width of the emoji stack, also its offset right of the group centre.
pub const RIGHT_WIDTH: f64 = 0.25;

pub fn build(table: &StatsTable, ctx: &LayoutContext) -> ChartLayout {
    let mut layout = ChartLayout::new(
        NAME,
        "Messages, Replies, and Emoji Reactions per Group",
        (1600, 800),
    );
    let categories = ctx.categorizer.all_categories();

    for (i, record) in table.iter().enumerate() {
        let centre = i as f64;
        push_messages_overlay(&mut layout, record, centre - LEFT_WIDTH, LEFT_WIDTH);
        push_emoji_stack(&mut layout, record, &categories, centre + RIGHT_WIDTH, RIGHT_WIDTH);
    }

    layout.ticks = ctx.tick_labels(table);
    layout.legend = vec![
        LegendEntry {
            series: SERIES_MESSAGES.to_string(),
            label: "Messages".to_string(),
        },
        LegendEntry {
            series: SERIES_REPLIES.to_string(),
            label: "Replies".to_string(),
        },
    ];
    layout.legend.extend(ctx.category_legend());
    layout
}
