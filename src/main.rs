use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use randwalk::server::WalkServer;
use randwalk::WalkConfig;

/// Serve a growing random walk as a PNG line drawing.
#[derive(Parser, Debug)]
#[command(name = "randwalk", version, about)]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long)]
    bind: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Pixels per walk unit
    #[arg(long)]
    step_length: Option<u32>,

    /// Number of axes the walk moves along
    #[arg(long)]
    dimensions: Option<usize>,

    /// Fixed seed for a reproducible walk
    #[arg(long)]
    seed: Option<u64>,

    /// Largest `count` accepted by a single request
    #[arg(long)]
    max_steps: Option<u64>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<WalkConfig> {
        let mut cfg = match &self.config {
            Some(path) => WalkConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => WalkConfig::default(),
        };
        if let Some(bind) = self.bind {
            cfg.bind = bind;
        }
        if let Some(w) = self.width {
            cfg.viewport.width = w;
        }
        if let Some(h) = self.height {
            cfg.viewport.height = h;
        }
        if let Some(s) = self.step_length {
            cfg.step_length = s;
        }
        if let Some(d) = self.dimensions {
            cfg.dimensions = d;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(m) = self.max_steps {
            cfg.max_steps_per_request = m;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config()?;
    info!(
        "walk: {} axes, {}x{} px, {} px per step",
        config.dimensions, config.viewport.width, config.viewport.height, config.step_length
    );

    let server = WalkServer::bind(&config)?;
    server.run()?;
    Ok(())
}
