use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Discriminant carried by every member descriptor.
///
/// Function and Callback expose the same read contract, so the kind is the
/// only reliable way to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Property,
    Function,
    Event,
    Callback,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Property => "Property",
            MemberKind::Function => "Function",
            MemberKind::Event => "Event",
            MemberKind::Callback => "Callback",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown member kind '{0}'")]
pub struct ParseKindError(pub String);

impl FromStr for MemberKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Property" => Ok(MemberKind::Property),
            "Function" => Ok(MemberKind::Function),
            "Event" => Ok(MemberKind::Event),
            "Callback" => Ok(MemberKind::Callback),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}
