//! file: main.rs
//! author: Jacob Xie
//! date: 2025/12/21 10:07:12 Sunday
//! brief: walk viewer entry

mod app;
mod logging;
mod settings;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::settings::Settings;

fn main() -> Result<()> {
    logging::init();

    let settings = Settings::parse();
    settings.validate().context("invalid viewer settings")?;
    info!(?settings, "starting viewer");

    app::run(settings);
    Ok(())
}
