use crate::config::EmojiCategory;

/// Catch-all category for emojis no configured category lists.
pub const OTHER: &str = "other";

/// Maps emojis to sentiment categories. Lookup walks the categories in
/// declaration order, so the first category listing an emoji wins.
#[derive(Debug, Clone)]
pub struct EmojiCategorizer {
    categories: Vec<EmojiCategory>,
}

impl EmojiCategorizer {
    /// Categories sharing a name are merged into the first one declared,
    /// so every name appears once and keeps its first position.
    pub fn new(categories: Vec<EmojiCategory>) -> Self {
        let mut merged: Vec<EmojiCategory> = Vec::with_capacity(categories.len());
        for category in categories {
            match merged.iter_mut().find(|c| c.name == category.name) {
                Some(existing) => existing.emojis.extend(category.emojis),
                None => merged.push(category),
            }
        }
        Self { categories: merged }
    }

    pub fn categorize(&self, emoji: &str) -> &str {
        self.categories
            .iter()
            .find(|category| category.emojis.iter().any(|e| e == emoji))
            .map(|category| category.name.as_str())
            .unwrap_or(OTHER)
    }

    /// Configured category names, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Configured category names followed by [`OTHER`].
    pub fn all_categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.categories().filter(|n| *n != OTHER).collect();
        names.push(OTHER);
        names
    }
}
