use std::env::{self, VarError};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;

pub const STORE_VAR: &str = "SCOREKEEPER_STORE";
pub const DATA_DIR_VAR: &str = "SCOREKEEPER_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = ".scorekeeper";

/// Which key-value backend holds saved games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreKind {
    /// One JSON file per key under the data directory
    #[default]
    File,
    /// Process memory; nothing survives the process
    Memory,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreKind::File),
            "memory" => Ok(StoreKind::Memory),
            other => Err(AppError::config(format!(
                "{STORE_VAR} must be 'file' or 'memory', got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub kind: StoreKind,
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Read storage settings from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            kind: store_kind()?,
            data_dir: data_dir(),
        })
    }
}

fn store_kind() -> Result<StoreKind, AppError> {
    match env::var(STORE_VAR) {
        Ok(value) => value.parse(),
        Err(VarError::NotPresent) => Ok(StoreKind::default()),
        Err(e) => Err(e.into()),
    }
}

fn data_dir() -> PathBuf {
    env::var(DATA_DIR_VAR)
        .ok()
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
