#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Ramble **
//! A small walk through a small world, one verb at a time.

use ramble_engine::{RAMBLE_VERSION, load_world, run_repl};

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: ramble v{RAMBLE_VERSION}, loading world...");
    let mut world = load_world().context("while loading RambleWorld")?;
    info!("RambleWorld loaded successfully.");

    run_repl(&mut world)?;
    info!("Goodbye.");
    Ok(())
}
