//! Optional diagnostic channel for patch application.
//!
//! Application never fails. A report only observes what happened: how many
//! actions took effect and, when recording is enabled, which ones degraded to
//! a no-op and why.

use crate::config::PatchOptions;
use crate::patch::action::Action;
use std::fmt;
use tracing::{debug, trace};

/// Why an action had no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    ClassNotFound {
        class: String,
    },
    MemberNotFound {
        class: String,
        member: String,
    },
    EnumNotFound {
        enumeration: String,
    },
    ItemNotFound {
        enumeration: String,
        item: String,
    },
    /// The payload variant does not fit the field.
    PayloadMismatch {
        field: String,
        found: &'static str,
    },
    UnknownField {
        field: String,
    },
    /// A Change action without a field or payload.
    MissingChange,
    /// The template member has no shape this representation can hold.
    UnsupportedMember {
        member: String,
    },
    /// The action kind has no meaning at the level it reached.
    NotApplicable,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::ClassNotFound { class } => write!(f, "class '{class}' not found"),
            SkipReason::MemberNotFound { class, member } => {
                write!(f, "member '{class}.{member}' not found")
            }
            SkipReason::EnumNotFound { enumeration } => {
                write!(f, "enum '{enumeration}' not found")
            }
            SkipReason::ItemNotFound { enumeration, item } => {
                write!(f, "enum item '{enumeration}.{item}' not found")
            }
            SkipReason::PayloadMismatch { field, found } => {
                write!(f, "field '{field}' does not accept a {found} payload")
            }
            SkipReason::UnknownField { field } => write!(f, "unknown field '{field}'"),
            SkipReason::MissingChange => write!(f, "change action without field or payload"),
            SkipReason::UnsupportedMember { member } => {
                write!(f, "member '{member}' has no supported shape")
            }
            SkipReason::NotApplicable => write!(f, "action does not apply at this level"),
        }
    }
}

/// A skipped action, rendered at the time it was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub action: String,
    pub reason: SkipReason,
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.action, self.reason)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatchReport {
    record: bool,
    limit: Option<usize>,
    applied: usize,
    skipped_count: usize,
    skipped: Vec<Skipped>,
}

impl PatchReport {
    /// Counts only; no skip entries are kept.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Keeps an entry for every skipped action.
    pub fn recording() -> Self {
        Self {
            record: true,
            ..Self::default()
        }
    }

    pub fn from_options(options: &PatchOptions) -> Self {
        Self {
            record: options.report.record_skipped,
            limit: options.report.limit,
            ..Self::default()
        }
    }

    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Number of skipped actions, including ones past the recording limit.
    pub fn skipped_count(&self) -> usize {
        self.skipped_count
    }

    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    pub fn is_clean(&self) -> bool {
        self.skipped_count == 0
    }

    pub(crate) fn applied_action(&mut self, action: &Action<'_>) {
        trace!(action = %action, "applied patch action");
        self.applied += 1;
    }

    pub(crate) fn skip(&mut self, action: &Action<'_>, reason: SkipReason) {
        debug!(action = %action, reason = %reason, "skipped patch action");
        self.skipped_count += 1;
        if !self.record {
            return;
        }
        if self.limit.is_some_and(|limit| self.skipped.len() >= limit) {
            return;
        }
        self.skipped.push(Skipped {
            action: action.to_string(),
            reason,
        });
    }
}

impl fmt::Display for PatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} applied, {} skipped",
            self.applied, self.skipped_count
        )
    }
}
