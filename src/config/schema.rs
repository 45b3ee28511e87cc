use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Engine options read from a TOML file.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct PatchOptions {
    #[serde(default)]
    pub meta: Metadata,
    #[serde(default)]
    pub report: ReportOptions,
}

impl PatchOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        if self.report.limit == Some(0) {
            issues.push(ValidationIssue::ZeroLimit);
        }
        if self.report.limit.is_some() && !self.report.record_skipped {
            issues.push(ValidationIssue::InvalidCombo {
                message: "report.limit requires report.record_skipped".to_string(),
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Keep a `Skipped` entry for every action that turned into a no-op.
    #[serde(default)]
    pub record_skipped: bool,
    /// Upper bound on kept entries. Skips past it are still counted.
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.issues.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("report.limit must be greater than zero")]
    ZeroLimit,
    #[error("invalid patch options: {message}")]
    InvalidCombo { message: String },
}
