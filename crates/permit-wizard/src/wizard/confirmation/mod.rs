//! Confirmation summary and the generator payload derived from a finished record.

mod payload;
mod summary;
mod views;

pub use payload::GenerationPayload;
pub use summary::{
    assemble, corporation_type_label, era_label, format_address, format_career_entry,
    format_date, full_name, APPLICATION_DATE_NOTE, HANDLED_GOODS, NOT_ENTERED, SAME_AS_ADDRESS,
    SAME_AS_APPLICANT, WEBSITE_NOT_USED, WEBSITE_USED,
};
pub use views::{
    AddressSection, ApplicantSection, ConfirmationView, CorporationSummary, FixedItem,
    ManagerSection, ManagerSummary, OfficeSection, SubmissionSection, WebsiteSection,
};
