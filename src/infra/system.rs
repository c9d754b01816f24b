use anyhow::{Context, Result};

use crate::infra::contracts::{ClipboardAdapter, ExternalOpener};

#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        open::that_detached(target).with_context(|| format!("failed to open {target}"))
    }
}

/// Clipboard handle created lazily; headless sessions have none.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardAdapter for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().context("clipboard is unavailable")?);
        }

        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_owned())
                .context("failed to write to clipboard"),
            None => anyhow::bail!("clipboard is unavailable"),
        }
    }
}
