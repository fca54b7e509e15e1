//! Error types for metahead

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the metahead application
#[derive(Debug, Error)]
pub enum MetaheadError {
    #[error("Meta config not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid tag argument: '{0}'")]
    InvalidTagSpec(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MetaheadError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MetaheadError::ConfigNotFound(_) => 2,
            MetaheadError::InvalidTagSpec(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MetaheadError::ConfigNotFound(path) => {
                format!(
                    "Meta config not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'metahead init' to create a starter metahead.toml\n\
                    • Pass the config location with --config <FILE>\n\
                    • Set the METAHEAD_CONFIG environment variable to your config path",
                    path.display()
                )
            }
            MetaheadError::InvalidTagSpec(spec) => {
                format!(
                    "Invalid tag argument: '{}'\n\n\
                    Tags are given as NAME=CONTENT pairs.\n\n\
                    Examples:\n\
                    metahead render --tag description='a site'\n\
                    metahead render --tag author=someone --keyword rust",
                    spec
                )
            }
            MetaheadError::Config(msg) => msg.clone(),
            _ => self.to_string(),
        }
    }
}

/// Result type using MetaheadError
pub type Result<T> = std::result::Result<T, MetaheadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_suggestions() {
        let err = MetaheadError::ConfigNotFound(PathBuf::from("/tmp/metahead.toml"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("metahead init"));
        assert!(msg.contains("METAHEAD_CONFIG"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_tag_spec_examples() {
        let err = MetaheadError::InvalidTagSpec("description".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("NAME=CONTENT"));
        assert!(msg.contains("Examples"));
        assert!(msg.contains("metahead render --tag"));
    }

    #[test]
    fn test_config_message_passes_through() {
        let err = MetaheadError::Config("METAHEAD_CONFIG points nowhere".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "METAHEAD_CONFIG points nowhere");
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = MetaheadError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "IO error: denied");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            MetaheadError::ConfigNotFound(PathBuf::from("x")).exit_code(),
            2
        );
        assert_eq!(MetaheadError::InvalidTagSpec("x".to_string()).exit_code(), 3);
        assert_eq!(MetaheadError::Config("x".to_string()).exit_code(), 1);
    }
}
