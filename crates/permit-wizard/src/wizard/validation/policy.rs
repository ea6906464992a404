use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How findings are graded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Findings are warnings and never hold the user back.
    #[default]
    Advisory,
    /// Findings are errors and keep the user on the current step.
    Strict,
}

impl ValidationMode {
    pub const fn severity(self) -> Severity {
        match self {
            Self::Advisory => Severity::Warning,
            Self::Strict => Severity::Error,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Advisory => "advisory",
            Self::Strict => "strict",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("validation mode must be 'advisory' or 'strict', got '{0}'")]
pub struct ValidationModeError(pub String);

impl FromStr for ValidationMode {
    type Err = ValidationModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "advisory" | "warn" => Ok(Self::Advisory),
            "strict" => Ok(Self::Strict),
            other => Err(ValidationModeError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Missing,
    Malformed,
}

/// One finding against one field, keyed by the field's wire name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: &'static str,
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: &'static str,
}

impl FieldIssue {
    pub fn blocks(&self) -> bool {
        self.severity == Severity::Error
    }
}
