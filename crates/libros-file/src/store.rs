//! JSON state file holding the refresh token and the client configuration.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use libros_core::error::{Error, StorageError};
use libros_core::traits::{ConfigStore, TokenStore};
use libros_core::{ClientConfig, RefreshToken, Result};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Default file name inside the data directory.
pub const STATE_FILE: &str = "state.json";

/// On-disk layout of the state file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    config: Option<ClientConfig>,
    /// RFC 3339 time of the last write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<String>,
}

fn io_error(path: &Path, err: std::io::Error) -> Error {
    StorageError::Io {
        path: path.display().to_string(),
        message: err.to_string(),
    }
    .into()
}

fn serialization_error(err: serde_json::Error) -> Error {
    StorageError::Serialization {
        message: err.to_string(),
    }
    .into()
}

/// Durable client state in a single JSON file.
///
/// Writes take an exclusive lock on a sibling `.lock` file so that two
/// processes updating the state do not interleave, and the file is
/// restricted to its owner on Unix.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl FileStore {
    /// Use the state file at `path`. Nothing is created until the first write.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_guard: Mutex::new(()),
        }
    }

    /// Use `STATE_FILE` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn read(&self) -> Result<StoredState> {
        if !self.path.exists() {
            return Ok(StoredState::default());
        }
        let json = fs::read_to_string(&self.path).map_err(|e| io_error(&self.path, e))?;
        if json.trim().is_empty() {
            return Ok(StoredState::default());
        }
        serde_json::from_str(&json).map_err(serialization_error)
    }

    /// Read, apply `change`, write back, all under the write lock.
    async fn update<F>(&self, change: F) -> Result<()>
    where
        F: FnOnce(&mut StoredState),
    {
        let _guard = self.write_guard.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
            }
        }

        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| io_error(&lock_path, e))?;
        lock_file
            .lock_exclusive()
            .map_err(|e| io_error(&lock_path, e))?;

        let mut state = self.read()?;
        change(&mut state);
        state.updated_at = Some(Utc::now().to_rfc3339());
        let json = serde_json::to_string_pretty(&state).map_err(serialization_error)?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| io_error(&self.path, e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| io_error(&self.path, e))?;
        file.sync_data().map_err(|e| io_error(&self.path, e))?;

        #[cfg(unix)]
        {
            let mut perms = file
                .metadata()
                .map_err(|e| io_error(&self.path, e))?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(|e| io_error(&self.path, e))?;
        }

        lock_file.unlock().map_err(|e| io_error(&lock_path, e))?;
        debug!(path = %self.path.display(), "State file written");
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_refresh_token(&self) -> Result<Option<RefreshToken>> {
        Ok(self.read()?.refresh_token.map(RefreshToken::new))
    }

    #[instrument(skip(self, token), fields(path = %self.path.display()))]
    async fn save_refresh_token(&self, token: &RefreshToken) -> Result<()> {
        let token = token.as_str().to_string();
        self.update(|state| state.refresh_token = Some(token)).await
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn remove_refresh_token(&self) -> Result<()> {
        if self.read()?.refresh_token.is_none() {
            return Ok(());
        }
        self.update(|state| state.refresh_token = None).await
    }
}

#[async_trait]
impl ConfigStore for FileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load_config(&self) -> Result<Option<ClientConfig>> {
        Ok(self.read()?.config)
    }

    #[instrument(skip(self, config), fields(path = %self.path.display()))]
    async fn save_config(&self, config: &ClientConfig) -> Result<()> {
        let config = config.clone();
        self.update(|state| state.config = Some(config)).await
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn reset_config(&self) -> Result<()> {
        self.update(|state| state.config = None).await
    }
}
