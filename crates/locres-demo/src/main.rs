//! Main entry point for the locres demo.
//!
//! Usage: `locres-demo [CONFIG]`. Without an argument the file named by
//! `LOCRES_CONFIG` is used, or the bundled `locres.toml` when that is unset.

use anyhow::Context;
use locres_common::logging::init_logging;
use locres_demo::{load_config, DemoApp};
use std::path::PathBuf;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let config = load_config(std::env::args_os().nth(1).map(PathBuf::from))
        .context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    info!("Starting locres demo");

    let app = DemoApp::new(config);
    if let Err(e) = app.load_resources() {
        error!("Failed to load locale resources: {}", e);
        return Err(e).context("Failed to load locale resources");
    }

    for line in app.run()? {
        println!("{line}");
    }

    Ok(())
}
