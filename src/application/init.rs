//! Initialize meta config use case

use crate::domain::MetaSnapshot;
use crate::error::{MetaheadError, Result};
use crate::infrastructure::config;
use std::fs;
use std::path::{Path, PathBuf};

/// Write a starter config file at the specified path.
///
/// Returns the path of the created file. Refuses to overwrite an existing
/// config unless `force` is set.
pub fn init(path: &Path, force: bool) -> Result<PathBuf> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let config_path = path.join(config::SNAPSHOT_FILENAME);

    if config_path.exists() && !force {
        return Err(MetaheadError::Config(format!(
            "{} already exists. Pass --force to overwrite it.",
            config_path.display()
        )));
    }

    config::save_to_path(&MetaSnapshot::starter(), &config_path)?;

    Ok(config_path)
}
