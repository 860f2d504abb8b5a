mod app;
mod config;
mod engine;
mod icons;
mod toolbar;

use anyhow::{Context, Result};
use app::{App, run_app};
use config::{load_config, serialize_config};
use iced::Size;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "conf/calc.toml";

struct Args {
    config: PathBuf,
    threshold_cells: Option<f32>,
    log_level: String,
    dump_config: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = pico_args::Arguments::from_env();
    let parsed = Args {
        dump_config: args.contains("--dump-config"),
        config: args
            .opt_value_from_str("--config")?
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        threshold_cells: args.opt_value_from_str("--threshold-cells")?,
        log_level: args
            .opt_value_from_str("--log-level")?
            .unwrap_or_else(|| "info".to_string()),
    };
    let rest = args.finish();
    if !rest.is_empty() {
        anyhow::bail!("Unexpected arguments: {rest:?}");
    }
    Ok(parsed)
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = parse_args()?;
    init_tracing(&args.log_level);

    let mut config = load_config(&args.config);
    if let Some(cells) = args.threshold_cells {
        config.threshold_cells = cells;
    }
    if args.dump_config {
        print!("{}", serialize_config(&config)?);
        return Ok(());
    }

    info!(
        path = %args.config.display(),
        threshold = config.layout_policy().width_threshold(),
        "Starting calculator"
    );
    let window = Size::new(config.window_width, config.window_height);
    let app = App::bootstrap(&config).context("Failed to build toolbars")?;
    run_app(app, window)?;
    Ok(())
}
