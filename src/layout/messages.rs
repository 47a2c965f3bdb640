use super::{
    push_messages_overlay, ChartLayout, LayoutContext, LegendEntry, DEFAULT_BAR_WIDTH,
    SERIES_MESSAGES, SERIES_REPLIES,
};
use crate::model::StatsTable;

pub const NAME: &str = "messages_replies";

/// Messages per group with Replies overlaid at the same x.
pub fn build(table: &StatsTable, ctx: &LayoutContext) -> ChartLayout {
    let mut layout = ChartLayout::new(NAME, "Messages and Replies per Group", (1400, 600));

    for (i, record) in table.iter().enumerate() {
        push_messages_overlay(&mut layout, record, i as f64, DEFAULT_BAR_WIDTH);
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
    layout
}
