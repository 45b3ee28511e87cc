use crate::config::schema::{PatchOptions, ValidationError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read patch options from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse patch options TOML{}: {source}", describe(path))]
    Toml {
        path: Option<PathBuf>,
        source: toml_edit::de::Error,
    },
    #[error("invalid patch options{}: {source}", describe(path))]
    Validation {
        path: Option<PathBuf>,
        source: ValidationError,
    },
}

fn describe(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" ({})", path.display()),
        None => String::new(),
    }
}

impl ConfigError {
    fn with_path(self, path: &Path) -> Self {
        let path = path.to_path_buf();
        match self {
            ConfigError::Toml { path: None, source } => ConfigError::Toml {
                path: Some(path),
                source,
            },
            ConfigError::Validation { path: None, source } => ConfigError::Validation {
                path: Some(path),
                source,
            },
            other => other,
        }
    }
}

pub fn load_from_str(input: &str) -> Result<PatchOptions, ConfigError> {
    let options: PatchOptions = toml_edit::de::from_str(input)
        .map_err(|source| ConfigError::Toml { path: None, source })?;
    options
        .validate()
        .map_err(|source| ConfigError::Validation { path: None, source })?;
    Ok(options)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<PatchOptions, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = load_from_str(&contents).map_err(|error| error.with_path(path))?;
    debug!(path = %path.display(), name = %options.meta.name, "loaded patch options");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str_reads_report_table() {
        let options = load_from_str(
            r#"
[meta]
name = "nightly"

[report]
record_skipped = true
limit = 100
"#,
        )
        .unwrap();
        assert_eq!(options.meta.name, "nightly");
        assert!(options.report.record_skipped);
        assert_eq!(options.report.limit, Some(100));
    }

    #[test]
    fn test_empty_input_uses_defaults() {
        assert_eq!(load_from_str("").unwrap(), PatchOptions::default());
    }

    #[test]
    fn test_malformed_toml_has_no_path() {
        let error = load_from_str("[report\nrecord_skipped = true").unwrap_err();
        assert!(matches!(error, ConfigError::Toml { path: None, .. }));
    }

    #[test]
    fn test_with_path_fills_missing_path() {
        let error = load_from_str("[report]\nrecord_skipped = true\nlimit = 0")
            .unwrap_err()
            .with_path(Path::new("options.toml"));
        match &error {
            ConfigError::Validation { path, .. } => {
                assert_eq!(path.as_deref(), Some(Path::new("options.toml")));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(error.to_string().starts_with("invalid patch options (options.toml): "));
    }
}
