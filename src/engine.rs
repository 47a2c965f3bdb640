use crate::config::AppConfig;
use crate::emoji::EmojiCategorizer;
use crate::error::Result;
use crate::layout::{self, ChartLayout, LayoutContext};
use crate::progress::ProgressReporter;
use crate::render::{ColorMap, Renderer};
use crate::scanner;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub struct ReportEngine {
    config: AppConfig,
    categorizer: EmojiCategorizer,
    colors: ColorMap,
}

#[derive(Debug)]
pub struct ReportResult {
    pub aggregate_duration: Duration,
    pub layout_duration: Duration,
    pub render_duration: Duration,
    pub groups: usize,
    pub skipped_files: usize,
    pub charts: Vec<PathBuf>,
}

impl ReportEngine {
    pub fn new(config: AppConfig) -> Self {
        let categorizer = EmojiCategorizer::new(config.emoji_categories.clone());
        let colors = ColorMap::from_config(&config.colors);
        Self {
            config,
            categorizer,
            colors,
        }
    }

    pub fn categorizer(&self) -> &EmojiCategorizer {
        &self.categorizer
    }

    /// Aggregate `input_dir` and build every layout without rendering.
    pub fn layouts(
        &self,
        input_dir: &Path,
        reporter: &dyn ProgressReporter,
    ) -> Result<Vec<ChartLayout>> {
        let table = scanner::aggregate(input_dir, &self.categorizer, reporter)?;
        let ctx = LayoutContext::new(&self.categorizer, &self.config.group_participants);
        Ok(layout::build_all(&table, &ctx))
    }

    /// Run the full pipeline:
    /// 1. Aggregate every `*.json` export into a stats table
    /// 2. Build the four chart layouts
    /// 3. Hand each layout to the renderer
    pub fn run(
        &self,
        input_dir: &Path,
        reporter: &dyn ProgressReporter,
        renderer: &dyn Renderer,
    ) -> Result<ReportResult> {
        // Phase 1: Aggregate
        info!("Aggregating exports in {}...", input_dir.display());
        let aggregate_start = Instant::now();
        let aggregation = scanner::aggregate_directory(input_dir, &self.categorizer, reporter)?;
        let aggregate_duration = aggregate_start.elapsed();

        // Phase 2: Layout
        let layout_start = Instant::now();
        let ctx = LayoutContext::new(&self.categorizer, &self.config.group_participants);
        let layouts = layout::build_all(&aggregation.table, &ctx);
        let layout_duration = layout_start.elapsed();
        debug!(
            "Built {} layouts in {:.3}s",
            layouts.len(),
            layout_duration.as_secs_f64()
        );

        // Phase 3: Render
        info!("Rendering charts...");
        let render_start = Instant::now();
        let mut charts = Vec::with_capacity(layouts.len());
        for chart in &layouts {
            let path = renderer.render(chart, &self.colors)?;
            reporter.on_render_complete(&chart.name, &path);
            charts.push(path);
        }
        let render_duration = render_start.elapsed();

        Ok(ReportResult {
            aggregate_duration,
            layout_duration,
            render_duration,
            groups: aggregation.table.len(),
            skipped_files: aggregation.skipped.len(),
            charts,
        })
    }
}
