use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
    storage_layout::StorageLayout,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Picks the config file: explicit path, `./config.toml`, then the per-user
/// config directory. Implicit candidates are used only when they exist.
pub fn resolve_config_path(path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = path {
        return Some(path.to_path_buf());
    }

    let mut candidates = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Ok(layout) = StorageLayout::resolve() {
        candidates.push(layout.config_file());
    }

    candidates.into_iter().find(|candidate| candidate.exists())
}

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::default();

    let Some(config_path) = resolve_config_path(path) else {
        return Ok(config);
    };

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}
