use anyhow::Result;

use crate::infra::config::AppConfig;

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Hands a link target (URL or `mailto:`) to the operating system.
pub trait ExternalOpener {
    fn open(&self, target: &str) -> Result<()>;
}

pub trait ClipboardAdapter {
    fn copy_text(&mut self, text: &str) -> Result<()>;
}
