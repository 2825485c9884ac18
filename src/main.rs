use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use slink::game::GameConfig;
use slink::modes::InteractiveMode;

#[derive(Parser)]
#[command(name = "slink")]
#[command(version, about = "Terminal Snake with smooth animation")]
struct Cli {
    /// Grid width in cells, wall ring included
    #[arg(long, default_value = "22")]
    width: usize,

    /// Grid height in cells, wall ring included
    #[arg(long, default_value = "22")]
    height: usize,

    /// Milliseconds a segment takes to cross one cell
    #[arg(long, default_value = "62")]
    transit_ms: u32,

    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal itself is the game screen)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        let config = ConfigBuilder::new().set_time_format_rfc3339().build();
        WriteLogger::init(LevelFilter::Debug, config, file)
            .context("Failed to initialize logger")?;
    }

    let config = GameConfig {
        grid_width: cli.width,
        grid_height: cli.height,
        transit_ms: cli.transit_ms,
        seed: cli.seed,
        ..GameConfig::default()
    };

    let mut mode = InteractiveMode::new(config)?;
    mode.run().await?;

    Ok(())
}
