use std::{env, fs::File};

use anyhow::{Context, Result};
use boundary_core::VizConfig;

mod app;
mod sink;
mod state;
mod surface;
mod ticker;
mod ui;

const DEFAULT_LOG_PATH: &str = "boundary-viz.log";

fn main() -> Result<()> {
    init_logging()?;

    let args = app::args::parse(env::args().skip(1)).map_err(anyhow::Error::msg)?;

    let mut config = match &args.config {
        Some(path) => VizConfig::load(path)?,
        None => VizConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(n) = args.n {
        config.n = n;
    }

    let weights = args
        .weights
        .as_ref()
        .map(|path| {
            std::fs::read_to_string(path)
                .with_context(|| format!("cannot read weights '{}'", path.display()))
        })
        .transpose()?;

    log::info!("starting with seed {} and {} points", config.seed, config.n);
    app::run::run(config, weights)
}

/// The terminal belongs to the UI, so log records go to a file.
fn init_logging() -> Result<()> {
    let path = env::var("BOUNDARY_VIZ_LOG").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let file = File::create(&path).with_context(|| format!("cannot create log file '{path}'"))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
