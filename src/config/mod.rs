//! Persisted session configuration.
//!
//! The storage decision (which backend, which scope) is explicit and made
//! per session; this module records it between runs so the next session can
//! rebind the same way.

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::errors::{Result, TrackerError};
use crate::storage::{DocumentApi, Session};
use crate::utils::{app_data_dir, config_file_in, ensure_dir};

const TMP_SUFFIX: &str = "tmp";

/// Which backend a session binds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageChoice {
    #[default]
    Local,
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub backend: StorageChoice,
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: StorageChoice::Local,
            scope: "personal".into(),
            data_dir: None,
        }
    }
}

impl Config {
    /// Builds the session this configuration describes.
    ///
    /// A remote configuration needs its transport injected by the caller;
    /// asking for a remote session without one is an error, never a silent
    /// switch to local storage.
    pub fn open_session(&self, api: Option<Box<dyn DocumentApi>>) -> Result<Session> {
        match self.backend {
            StorageChoice::Local => match &self.data_dir {
                Some(root) => Session::local_with_root(&self.scope, root.clone()),
                None => Session::local(&self.scope),
            },
            StorageChoice::Remote => {
                let api = api.ok_or_else(|| {
                    TrackerError::InvalidInput(
                        "remote backend configured but no document api supplied".into(),
                    )
                })?;
                Ok(Session::remote(&self.scope, api))
            }
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    /// Reads the stored configuration, or the defaults when none has been
    /// saved yet.
    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
