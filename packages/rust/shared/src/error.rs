//! Error types for the a1docs tooling.
//!
//! Library crates use [`A1DocsError`] via `thiserror`.
//! App crates (inject-info, docs-conf) wrap this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all a1docs operations.
#[derive(Debug, thiserror::Error)]
pub enum A1DocsError {
    /// Documentation configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// A YAML source could not be parsed.
    #[error("YAML error in {path:?}: {message}")]
    Yaml { path: PathBuf, message: String },

    /// Rendering YAML, TOML or JSON output failed.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, A1DocsError>;

impl A1DocsError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a YAML parse error for the file at `path`.
    pub fn yaml(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Yaml {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = A1DocsError::config("bad intersphinx url");
        assert_eq!(err.to_string(), "config error: bad intersphinx url");

        let err = A1DocsError::yaml("oas-info.yaml", "did not find expected key");
        assert!(err.to_string().contains("oas-info.yaml"));
        assert!(err.to_string().contains("did not find expected key"));
    }

    #[test]
    fn not_found_detection() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(A1DocsError::io("/nope", missing).is_not_found());

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        assert!(!A1DocsError::io("/nope", denied).is_not_found());
        assert!(!A1DocsError::Serialize("x".into()).is_not_found());
    }
}
