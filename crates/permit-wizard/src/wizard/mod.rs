//! Permit application questionnaire: the record, its step cursor, field
//! validators, career lists, address lookups and the confirmation/export
//! boundary.

pub mod address;
pub mod career;
pub mod confirmation;
pub mod domain;
pub mod export;
pub mod fields;
pub mod patch;
pub mod router;
pub(crate) mod sample;
pub mod session;
pub mod steps;
pub mod validation;

#[cfg(test)]
mod tests;

pub use address::{AddressCandidate, AddressResolver, LookupError, LookupTicket};
pub use career::{CareerEntry, CareerField, CareerHistory, MAX_CAREER_ENTRIES};
pub use confirmation::{ConfirmationView, GenerationPayload, ManagerSection};
pub use domain::{
    Address, ApplicantKind, BirthDate, CorporationType, Era, FormRecord, OfficeRecord,
    PersonRecord, Prefecture, PREFECTURES,
};
pub use export::{
    download_file_name, generate_document, DocumentGenerator, GeneratedDocument, GenerationError,
    HttpDocumentGenerator, RenderedDocument, FALLBACK_FAILURE_MESSAGE,
};
pub use fields::{
    AddressField, AddressRole, CareerRole, DateField, NameField, OfficeNameField, Role,
};
pub use patch::FieldPatch;
pub use router::wizard_router;
pub use sample::sample_record;
pub use session::{ExportTicket, SessionError, WizardSession};
pub use steps::{StepProgress, StepSequencer, StepStatus, WizardStep};
pub use validation::{FieldIssue, Severity, ValidationMode};
