use std::path::PathBuf;

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "folio-contact";
const LOG_FILE_NAME: &str = "folio-contact.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let config_base = dirs::config_dir().ok_or_else(|| AppError::StoragePathResolution {
            details: "unable to resolve per-user config directory".into(),
        })?;
        let data_base = dirs::data_local_dir().ok_or_else(|| AppError::StoragePathResolution {
            details: "unable to resolve per-user data directory".into(),
        })?;

        Ok(Self {
            config_dir: config_base.join(APP_DIR_NAME),
            log_dir: data_base.join(APP_DIR_NAME).join("logs"),
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }
}
