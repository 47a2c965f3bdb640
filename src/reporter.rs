use colored::*;
use group_stats_grapher::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress reporter: a spinner while exports are parsed, then one
/// status line per phase.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }

    fn finish_bar(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_aggregate_start(&self, input_dir: &Path) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(format!("Reading exports in {}...", input_dir.display()));
        pb.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(old) = guard.replace(pb) {
                old.finish_and_clear();
            }
        }
    }

    fn on_file_parsed(&self, group_name: &str, message_count: u64) {
        self.with_bar(|pb| pb.set_message(format!("{}: {} messages", group_name, message_count)));
    }

    fn on_file_skipped(&self, group_name: &str, error: &str) {
        let line = format!("  {} Skipping {}: {}", "✗".red(), group_name, error);
        self.with_bar(|pb| pb.println(&line));
    }

    fn on_aggregate_complete(&self, groups: usize, skipped: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  {} Aggregation complete: {} groups, {} skipped in {:.2}s",
            "✓".green(),
            groups,
            skipped,
            duration_secs
        );
    }

    fn on_render_complete(&self, chart_name: &str, path: &Path) {
        eprintln!(
            "  {} {} chart written to {}",
            "✓".green(),
            chart_name,
            path.display()
        );
    }
}
