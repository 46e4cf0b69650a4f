//! Loader utilities for building a `RambleWorld` from serialized data.
//!
//! World content is authored as TOML, deserialized into a [`WorldDef`],
//! validated as a whole, and then turned into runtime types.

pub mod locations;
pub mod quests;

use crate::data_paths::world_path;
use crate::loader::locations::build_locations;
use crate::loader::quests::build_quests;
use crate::world::RambleWorld;

use anyhow::{Context, Result, bail};
use log::info;
use ramble_data::WorldDef;
use std::fs;
use std::path::Path;

/// Load the `RambleWorld` from the configured world file.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_world() -> Result<RambleWorld> {
    let path = world_path();
    load_world_from(&path).with_context(|| format!("while loading world from '{}'", path.display()))
}

/// Load a `RambleWorld` from a specific TOML file.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_world_from(path: &Path) -> Result<RambleWorld> {
    let def = load_world_def(path)?;
    build_world_from_def(&def)
}

/// Read and parse a `WorldDef` from a TOML file.
///
/// # Errors
/// - if the file can't be read or parsed
pub fn load_world_def(path: &Path) -> Result<WorldDef> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading world data from '{}'", path.display()))?;
    let def = parse_world_def(&text).with_context(|| format!("parsing '{}'", path.display()))?;
    info!("world definition loaded from '{}'", path.display());
    Ok(def)
}

/// Parse a `WorldDef` from TOML text.
///
/// # Errors
/// - on malformed TOML or a shape that doesn't match `WorldDef`
pub fn parse_world_def(text: &str) -> Result<WorldDef> {
    Ok(toml::from_str(text)?)
}

/// Validate a `WorldDef` and build the runtime world from it.
///
/// # Errors
/// - if validation finds any problem (all are reported together)
pub fn build_world_from_def(def: &WorldDef) -> Result<RambleWorld> {
    validate_worlddef(def)?;

    let mut world = RambleWorld::new_empty(&def.game.start_room, &def.game.container_item);
    world.title.clone_from(&def.game.title);
    world.intro.clone_from(&def.game.intro);
    world.locations = build_locations(&def.rooms);
    world.quests = build_quests(&def.quests);
    info!("{} locations added to RambleWorld", world.locations.len());
    info!("{} quests added to RambleWorld", world.quests.len());
    info!("player added to RambleWorld at '{}'", world.player.location);
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = ramble_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}
