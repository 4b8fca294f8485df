// crates/patch_home_support/src/config.rs

use std::path::{Path, PathBuf};

use patch_marker::{IMPACT_PLEDGE_ENTRY, SUPPORT_CHANNELS_TAIL, TARGET_FILE};
use text_patcher::PatchConfig;

/// Runtime configuration composed from the CLI. The patch itself is fixed;
/// only where it is applied from and how loudly it logs can vary.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory `TARGET_FILE` is resolved against. The binary uses the
    /// current working directory.
    pub project_root: PathBuf,
    pub verbose: bool,
}

impl AppConfig {
    pub fn new<P: AsRef<Path>>(project_root: P, verbose: bool) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            verbose,
        }
    }

    pub fn target_file(&self) -> PathBuf {
        self.project_root.join(TARGET_FILE)
    }

    /// The impact pledge patch against this project's page source.
    pub fn patch_config(&self) -> PatchConfig {
        PatchConfig::new(self.target_file(), SUPPORT_CHANNELS_TAIL, IMPACT_PLEDGE_ENTRY)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(".", false)
    }
}
