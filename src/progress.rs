use std::path::Path;

/// Trait for reporting pipeline progress.
///
/// CLI implements with indicatif/colored output, tests record the calls.
/// All methods have default no-op implementations.
pub trait ProgressReporter {
    fn on_aggregate_start(&self, _input_dir: &Path) {}
    fn on_file_parsed(&self, _group_name: &str, _message_count: u64) {}
    fn on_file_skipped(&self, _group_name: &str, _error: &str) {}
    fn on_aggregate_complete(&self, _groups: usize, _skipped: usize, _duration_secs: f64) {}
    fn on_render_complete(&self, _chart_name: &str, _path: &Path) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
