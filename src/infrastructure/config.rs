//! Meta config file management

use crate::domain::MetaSnapshot;
use crate::error::{MetaheadError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename looked up in the working directory
pub const SNAPSHOT_FILENAME: &str = "metahead.toml";

/// Environment variable naming an explicit config path
pub const SNAPSHOT_ENV_VAR: &str = "METAHEAD_CONFIG";

/// Load a snapshot from a TOML file at the given path.
pub fn load_from_path(path: &Path) -> Result<MetaSnapshot> {
    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MetaheadError::ConfigNotFound(path.to_path_buf())
        } else {
            MetaheadError::Io(e)
        }
    })?;

    toml::from_str(&contents)
        .map_err(|e| MetaheadError::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Save a snapshot as TOML at the given path.
pub fn save_to_path(snapshot: &MetaSnapshot, path: &Path) -> Result<()> {
    let contents = toml::to_string_pretty(snapshot)
        .map_err(|e| MetaheadError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, contents)?;

    Ok(())
}

/// Resolve which config file to read, if any.
///
/// An explicit path wins. Otherwise the METAHEAD_CONFIG environment variable
/// is consulted; it is an error for the variable to point at a missing file.
/// Finally `metahead.toml` in the working directory is used when present.
/// `None` means no config source exists, which is a valid state.
pub fn resolve_path(explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        return Ok(Some(path));
    }

    if let Ok(env_path) = std::env::var(SNAPSHOT_ENV_VAR) {
        let path = PathBuf::from(env_path);
        if !path.is_file() {
            return Err(MetaheadError::Config(format!(
                "{} is set to '{}' but no such file exists. \
                Run 'metahead init' there or unset {}.",
                SNAPSHOT_ENV_VAR,
                path.display(),
                SNAPSHOT_ENV_VAR
            )));
        }
        return Ok(Some(path));
    }

    let default = PathBuf::from(SNAPSHOT_FILENAME);
    if default.is_file() {
        return Ok(Some(default));
    }

    Ok(None)
}

/// Load the resolved snapshot, falling back to an empty one.
///
/// The absence of any config source yields empty containers, never an error.
pub fn load_optional(explicit: Option<PathBuf>) -> Result<MetaSnapshot> {
    match resolve_path(explicit)? {
        Some(path) => load_from_path(&path),
        None => Ok(MetaSnapshot::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SNAPSHOT_FILENAME);
        let snapshot = MetaSnapshot::starter();

        save_to_path(&snapshot, &path).unwrap();
        let loaded = load_from_path(&path).unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_load_missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");

        let result = load_from_path(&path);

        match result.unwrap_err() {
            MetaheadError::ConfigNotFound(reported) => assert_eq!(reported, path),
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SNAPSHOT_FILENAME);
        fs::write(&path, "tags = \"not a table\"").unwrap();

        let result = load_from_path(&path);

        match result.unwrap_err() {
            MetaheadError::Config(msg) => assert!(msg.contains("Failed to parse")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let explicit = PathBuf::from("/somewhere/meta.toml");
        let resolved = resolve_path(Some(explicit.clone())).unwrap();
        assert_eq!(resolved, Some(explicit));
    }

    #[test]
    fn test_load_optional_with_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(SNAPSHOT_FILENAME);
        save_to_path(&MetaSnapshot::starter(), &path).unwrap();

        let loaded = load_optional(Some(path)).unwrap();

        assert!(loaded.tags.contains_key("description"));
    }
}
