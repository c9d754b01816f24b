use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError, storage_layout::StorageLayout};

/// Installs a file-backed subscriber; the terminal belongs to the TUI.
///
/// The returned guard flushes buffered lines on drop and must outlive the shell.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let log_file = resolve_log_file(config)?;
    let (dir, file_name) = split_log_path(&log_file)?;

    fs::create_dir_all(&dir).map_err(|source| AppError::StorageDirCreate {
        path: dir.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

fn resolve_log_file(config: &LogConfig) -> Result<PathBuf, AppError> {
    match &config.file {
        Some(file) => Ok(file.clone()),
        None => Ok(StorageLayout::resolve()?.log_file()),
    }
}

fn split_log_path(path: &Path) -> Result<(PathBuf, PathBuf), AppError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| AppError::StoragePathResolution {
            details: format!("log path {} has no file name", path.display()),
        })?;
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok((dir, PathBuf::from(file_name)))
}
