//! keytone - play the computer keyboard like a piano
//!
//! Run with: cargo run -- [--config keytone.toml] [--log-file keytone.log]

mod app;
mod ui;

use std::{fs, path::PathBuf, sync::Arc};

use clap::Parser;
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use keytone::{synth::WaveformBank, EngineConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "keytone", version, about = "Polyphonic additive piano for the terminal")]
struct Cli {
    /// TOML file with engine settings; missing keys use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the frame (device buffer) size in samples
    #[arg(long)]
    frame_size: Option<usize>,

    /// Override the note length in seconds
    #[arg(long)]
    duration: Option<f32>,

    /// Write logs here (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // The TUI owns the terminal, so logs only go to a file
    if let Some(path) = &cli.log_file {
        let file = fs::File::create(path)
            .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let config = load_config(&cli)?;
    tracing::info!(?config, "starting keytone");

    let bank = Arc::new(WaveformBank::build(&config).wrap_err("failed to render note waveforms")?);
    let engine = app::start(bank, &config)?;

    let mut terminal = ratatui::init();
    let res = ui::run(&mut terminal, engine, &config);
    ratatui::restore();
    res
}

fn load_config(cli: &Cli) -> EyreResult<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            toml::from_str(&text).wrap_err_with(|| format!("failed to parse {}", path.display()))?
        }
        None => EngineConfig::default(),
    };

    if let Some(frame_size) = cli.frame_size {
        config.frame_size = frame_size;
    }
    if let Some(duration) = cli.duration {
        config.note_duration = duration;
    }

    config.validate().wrap_err("invalid engine configuration")?;
    Ok(config)
}
