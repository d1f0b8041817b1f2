//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod parse;

use std::path::{Path, PathBuf};

use bizcard_core::BizcardConfig;
use tracing::debug;

/// Location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    BizcardConfig::default_path(&dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")))
}

/// Load configuration from an explicit path, which must exist, or from the
/// default location.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<BizcardConfig> {
    match config_path {
        Some(path) => Ok(BizcardConfig::from_file(Path::new(path))?),
        None => load_config_or_default(&default_config_path()),
    }
}

/// Load configuration from `path`, or defaults when there is no file yet.
pub fn load_config_or_default(path: &Path) -> anyhow::Result<BizcardConfig> {
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(BizcardConfig::from_file(path)?)
    } else {
        Ok(BizcardConfig::default())
    }
}
