pub mod config;
pub mod emoji;
pub mod engine;
pub mod error;
pub mod layout;
pub mod model;
pub mod progress;
pub mod render;
pub mod scanner;

pub use config::AppConfig;
pub use emoji::EmojiCategorizer;
pub use engine::{ReportEngine, ReportResult};
pub use error::Error;
pub use model::{GroupRecord, StatsTable};
pub use progress::{ProgressReporter, SilentReporter};
pub use render::{ColorMap, Renderer, SvgRenderer};
