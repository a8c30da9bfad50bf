use anyhow::{Context, Result};

use crate::core::interfaces::adapters::BrowserLauncher;

pub struct SystemBrowserLauncher;

impl SystemBrowserLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl BrowserLauncher for SystemBrowserLauncher {
    fn open_url(&self, url: &str) -> Result<()> {
        if url.trim().is_empty() {
            anyhow::bail!("Book has no website link");
        }

        log::info!("[BROWSER] Opening book page");
        log::debug!("[BROWSER] URL: {}", url);

        open::that(url).with_context(|| format!("Unable to open {}", url))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_url_rejects_blank_link_without_launching() {
        let launcher = SystemBrowserLauncher::new();

        assert!(launcher.open_url("   ").is_err());
    }
}
