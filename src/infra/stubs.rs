use std::cell::RefCell;

use anyhow::Result;

use crate::infra::{
    config::AppConfig,
    contracts::{ClipboardAdapter, ConfigAdapter, ExternalOpener},
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Records targets instead of launching anything.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: RefCell<Vec<String>>,
    pub fail: bool,
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, target: &str) -> Result<()> {
        if self.fail {
            anyhow::bail!("no handler for {target}");
        }
        self.opened.borrow_mut().push(target.to_owned());
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StubClipboard {
    pub last_copied: Option<String>,
}

impl ClipboardAdapter for StubClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        self.last_copied = Some(text.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn recording_opener_keeps_targets_in_order() {
        let opener = RecordingOpener::default();
        opener.open("mailto:a@b.c").expect("open");
        opener.open("https://github.com").expect("open");

        assert_eq!(
            *opener.opened.borrow(),
            vec!["mailto:a@b.c".to_owned(), "https://github.com".to_owned()]
        );
    }
}
