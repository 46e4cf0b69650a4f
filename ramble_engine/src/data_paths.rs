use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::info;

/// Environment variable naming a world file to load instead of the default.
pub const WORLD_ENV: &str = "RAMBLE_WORLD";

/// Cached path to the directory containing the engine's runtime data files.
static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(detect_data_root);

/// Construct a data path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// The world file to load: `$RAMBLE_WORLD` if set, else `world.toml` in the data root.
pub fn world_path() -> PathBuf {
    resolve_world_path(env::var_os(WORLD_ENV))
}

fn resolve_world_path(from_env: Option<OsString>) -> PathBuf {
    match from_env {
        Some(path) if !path.is_empty() => {
            info!("world file taken from ${WORLD_ENV}");
            PathBuf::from(path)
        },
        _ => data_path("world.toml"),
    }
}

/// Resolve the most likely location of the runtime data directory.
fn detect_data_root() -> PathBuf {
    let mut candidates = Vec::new();

    // Common layouts: workspace root and flattened `data/`.
    candidates.push(PathBuf::from("ramble_engine/data"));
    candidates.push(PathBuf::from("data"));

    if let Ok(exe_path) = env::current_exe()
        && let Some(dir) = exe_path.parent()
    {
        candidates.push(dir.join("ramble_engine/data"));
        candidates.push(dir.join("data"));

        if let Some(parent) = dir.parent() {
            candidates.push(parent.join("ramble_engine/data"));
            candidates.push(parent.join("data"));
        }
    }

    candidates
        .into_iter()
        .find(|candidate| candidate.is_dir())
        .unwrap_or_else(|| PathBuf::from("ramble_engine/data"))
}
