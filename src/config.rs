use config::{Config, ConfigError, File as ConfigFile};
use serde::Deserialize;
use std::collections::HashMap;

/// A named sentiment bucket and the emojis that fall into it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EmojiCategory {
    pub name: String,
    pub emojis: Vec<String>,
}

impl EmojiCategory {
    pub fn new(name: &str, emojis: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            emojis: emojis.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Categories in declaration order. Order decides both the tie-break when
    /// an emoji is listed twice and the stacking order of chart segments.
    #[serde(default = "default_emoji_categories")]
    pub emoji_categories: Vec<EmojiCategory>,
    #[serde(default = "default_colors")]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub group_participants: HashMap<String, u32>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            emoji_categories: default_emoji_categories(),
            colors: default_colors(),
            group_participants: HashMap::new(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load `Config.toml` from the working directory if present. Any field the
/// file leaves out keeps its built-in default.
pub fn load_configuration() -> Result<AppConfig, ConfigError> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name("Config").required(false))
        .build()?;
    builder.try_deserialize::<AppConfig>()
}

fn default_emoji_categories() -> Vec<EmojiCategory> {
    vec![
        EmojiCategory::new("happy", &["😀", "😃", "😄", "😁", "😊", "🙂", "😎", "🥳"]),
        EmojiCategory::new("love", &["❤️", "❤", "😍", "🥰", "😘", "💕", "💖", "💙"]),
        EmojiCategory::new("funny", &["😂", "🤣", "😆", "😹", "😜"]),
        EmojiCategory::new("approval", &["👍", "👏", "🙌", "💪", "🔥", "💯", "✅"]),
        EmojiCategory::new("surprised", &["😮", "😯", "😲", "😱", "🤯", "😳"]),
        EmojiCategory::new("sad", &["😢", "😭", "😞", "😔", "💔", "🥺"]),
        EmojiCategory::new("angry", &["😡", "😠", "🤬", "👎", "😤"]),
    ]
}

fn default_colors() -> HashMap<String, String> {
    [
        ("messages", "#1f77b4"),
        ("replies", "#ff7f0e"),
        ("emoji_and_messages", "#2ca02c"),
        ("happy", "#ffd92f"),
        ("love", "#e7298a"),
        ("funny", "#66c2a5"),
        ("approval", "#8da0cb"),
        ("surprised", "#a6d854"),
        ("sad", "#4575b4"),
        ("angry", "#d73027"),
        ("other", "#b3b3b3"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_output_dir() -> String {
    "charts".to_string()
}
