//! Location of the durable client state.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use libros_file::{FileStore, STATE_FILE};

/// Get the state file path, creating its directory.
fn state_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "libros").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join(STATE_FILE))
}

/// Open the state file store.
pub fn open_store() -> Result<FileStore> {
    Ok(FileStore::new(state_path()?))
}
