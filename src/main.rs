/*
 * Lumina
 *
 * Opens the ocean viewer. Configuration comes from an optional JSON file,
 * with individual fields overridable on the command line.
 */

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lumina::{InteractionMode, SimulationConfig};

#[derive(Debug, Parser)]
#[command(name = "lumina", about = "Interactive generative ocean", version)]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of fish
    #[arg(long)]
    fish: Option<usize>,
    /// Pointer interaction mode
    #[arg(long, value_enum)]
    mode: Option<InteractionMode>,
    /// Base cruising speed
    #[arg(long)]
    speed: Option<f32>,
    /// RNG seed for a repeatable run
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => SimulationConfig::default(),
        };

        if let Some(fish) = self.fish {
            config.fish_count = fish;
        }
        if let Some(mode) = self.mode {
            config.interaction_mode = mode;
        }
        if let Some(speed) = self.speed {
            config.base_speed = speed;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate().context("invalid command line override")?;
        Ok(config)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    info!(?config, "starting lumina");

    lumina::app::run(config);
    Ok(())
}
