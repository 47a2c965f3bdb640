mod cli;
mod logging;
mod reporter;

use std::process;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use colored::*;
use dotenv::dotenv;
use group_stats_grapher::{ReportEngine, SvgRenderer};
use reporter::CliReporter;
use std::path::Path;
use tracing::{debug, error, info};

fn main() {
    dotenv().ok();

    let args = Cli::parse();
    let Some(input_dir) = args.input_dir() else {
        eprintln!("{}", cli::USAGE);
        process::exit(1);
    };

    let guard = logging::init_logger();

    if let Err(err) = run_report(input_dir) {
        error!("Error: {:#}", err);
        drop(guard);
        process::exit(1);
    }
}

fn run_report(input_dir: &Path) -> anyhow::Result<()> {
    let config = group_stats_grapher::config::load_configuration()
        .context("Error loading configuration")?;
    debug!("config: {:?}", config);

    let renderer = SvgRenderer::new(&config.output_dir);
    let engine = ReportEngine::new(config);
    let reporter = CliReporter::new();
    let result = engine
        .run(input_dir, &reporter, &renderer)
        .with_context(|| format!("Error producing charts for {}", input_dir.display()))?;

    info!(
        "Aggregate: {}, Layout: {}, Render: {}",
        format!("{:.2}s", result.aggregate_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.layout_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.render_duration.as_secs_f64()).green(),
    );
    info!(
        "{} groups charted, {} files skipped, {} charts written",
        format!("{}", result.groups).cyan(),
        format!("{}", result.skipped_files).red(),
        format!("{}", result.charts.len()).cyan(),
    );

    Ok(())
}
