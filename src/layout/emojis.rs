use super::{push_emoji_stack, ChartLayout, LayoutContext, DEFAULT_BAR_WIDTH};
use crate::model::StatsTable;

pub const NAME: &str = "emojis_by_category";

/// Reactions per group, stacked by category in declaration order.
pub fn build(table: &StatsTable, ctx: &LayoutContext) -> ChartLayout {
    let mut layout = ChartLayout::new(NAME, "Emoji Reactions per Group", (1400, 600));
    let categories = ctx.categorizer.all_categories();

    for (i, record) in table.iter().enumerate() {
        push_emoji_stack(&mut layout, record, &categories, i as f64, DEFAULT_BAR_WIDTH);
    }

    layout.ticks = ctx.tick_labels(table);
    layout.legend = ctx.category_legend();
    layout
}
