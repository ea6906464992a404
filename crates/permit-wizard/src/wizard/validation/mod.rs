//! Field format predicates and the per-step completeness rules built on them.
//!
//! Findings are advisory unless the session runs in [`ValidationMode::Strict`].

mod format;
mod policy;
mod rules;

pub use format::{is_katakana, is_valid_phone, is_valid_postal_code, is_valid_url};
pub use policy::{FieldIssue, IssueKind, Severity, ValidationMode, ValidationModeError};
pub use rules::{validate_record, validate_step, StepIssues};
