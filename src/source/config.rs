use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BoardError;

pub const CONFIG_FILE: &str = "taskboard.json";
pub const DEFAULT_DATA_FILE: &str = "dados.json";

/// Settings read from `taskboard.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Data file, relative to the config file's directory.
    pub data_path: Option<PathBuf>,
    /// Recency window used when `--days` is not given.
    pub default_days: Option<u32>,
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl BoardConfig {
    /// Pick the data source: explicit flag first, then the config file,
    /// then `dados.json` in the current directory.
    pub fn resolve_data_path(&self, flag: Option<&str>) -> PathBuf {
        if let Some(path) = flag {
            return PathBuf::from(path);
        }
        match (&self.data_path, &self.base_dir) {
            (Some(path), _) if path.is_absolute() => path.clone(),
            (Some(path), Some(base)) => base.join(path),
            (Some(path), None) => path.clone(),
            (None, _) => PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// Find `taskboard.json` by walking up from the current directory.
pub fn find_config() -> Option<PathBuf> {
    let mut dir = env::current_dir().ok()?;
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

pub fn read_config(path: &Path) -> Result<BoardConfig, BoardError> {
    let content = fs::read_to_string(path)
        .map_err(|e| BoardError::config(format!("Cannot read {}: {e}", path.display())))?;
    let mut config: BoardConfig = serde_json::from_str(&content)
        .map_err(|e| BoardError::config(format!("Invalid config {}: {e}", path.display())))?;
    config.base_dir = path.parent().map(Path::to_path_buf);
    Ok(config)
}

/// Load the explicit config file, or the discovered one, or defaults.
pub fn load_config(explicit: Option<&str>) -> Result<BoardConfig, BoardError> {
    match explicit {
        Some(path) => read_config(Path::new(path)),
        None => match find_config() {
            Some(path) => read_config(&path),
            None => Ok(BoardConfig::default()),
        },
    }
}
