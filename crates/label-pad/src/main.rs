mod app;
mod command;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use label_pad_config::EditorConfig;

use crate::app::{App, OutputFormat};

/// Edit a text label from the terminal with full undo/redo.
#[derive(Parser, Debug)]
#[command(name = "label-pad", version, about)]
struct Cli {
    /// File of commands to run. Reads stdin when omitted.
    script: Option<PathBuf>,

    /// Config file to use instead of `label-pad.json` next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print each state as a JSON object.
    #[arg(long)]
    json: bool,

    /// Log filter (e.g. "debug", "label_pad_mod_history=trace"). Overrides RUST_LOG.
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match &cli.log_level {
        Some(level) => tracing_subscriber::EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter {level:?}"))?,
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting label-pad");

    let config_path = cli.config.unwrap_or_else(EditorConfig::config_path);
    let config = EditorConfig::load_or_create(&config_path);
    tracing::debug!("Using config {}", config_path.display());

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut app = App::new(&config, format)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    match cli.script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            app.run(BufReader::new(file), &mut out, &mut err)?;
        }
        None => app.run(io::stdin().lock(), &mut out, &mut err)?,
    }

    Ok(())
}
