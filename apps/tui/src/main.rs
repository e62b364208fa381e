mod app;
mod cli;
mod config;
mod data;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use config::AppConfig;
use heatmap_core::{ChartOptions, HeatmapChart};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    config::load_dotenv();
    init_tracing(std::env::var_os("DEBUG").is_some());
    let config = AppConfig::from_env();
    tracing::debug!(?config, "configuration loaded");

    let dataset = match data::load_dataset(&config.source).await {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(source = %config.source, error = %e, "failed to load temperature data");
            return Err(e.into());
        }
    };
    if !dataset.is_year_ordered() {
        tracing::warn!("dataset is not sorted by year; the year axis uses the first and last entries");
    }

    let options = ChartOptions {
        legend_mode: config.legend_mode,
        ..ChartOptions::default()
    };
    let chart = HeatmapChart::build(&dataset, &options)?;

    if args.wants_summary() || !is_terminal() {
        return event::run_headless(&dataset, &chart, &config.source.to_string(), args.json);
    }

    let mut terminal = terminal::setup_terminal()?;
    let mut app = App::new(chart);
    let result = event::run(&mut terminal, &mut app);
    terminal::cleanup_terminal_state(true, true);

    result
}

/// `RUST_LOG` wins; otherwise `debug` when `DEBUG` is set and `warn` if not.
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
