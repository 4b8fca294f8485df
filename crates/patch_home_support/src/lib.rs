// crates/patch_home_support/src/lib.rs

use anyhow::{Context, Result};

use patch_marker::MARKER_NOT_FOUND_MESSAGE;
use text_patcher::PatchOutcome;

mod config;

pub use config::AppConfig;

/// Adds the "Impact pledge" entry to the home page's support channels.
///
/// # Errors
///
/// Fails with [`MARKER_NOT_FOUND_MESSAGE`] if the page no longer ends its
/// `supportChannels` array the expected way, or with the underlying I/O error
/// if the page can't be read or written. The page is never partially written.
pub fn patch_home_support(config: &AppConfig) -> Result<PatchOutcome> {
    let patch = config.patch_config();
    log::debug!("patching {}", patch.path.display());

    match text_patcher::run(&patch) {
        Ok(outcome) => Ok(outcome),
        Err(err) if err.is_precondition() => {
            Err(anyhow::Error::new(err).context(MARKER_NOT_FOUND_MESSAGE))
        }
        Err(err) => {
            Err(err).with_context(|| format!("Failed to patch {}", patch.path.display()))
        }
    }
}
