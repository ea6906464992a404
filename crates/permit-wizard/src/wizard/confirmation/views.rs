use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorporationSummary {
    pub type_label: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicantSection {
    pub kind_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corporation: Option<CorporationSummary>,
    pub name_kanji: String,
    pub name_kana: String,
    pub birth_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressSection {
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfficeSection {
    pub name_kanji: String,
    pub name_kana: String,
    pub location: String,
    pub handled_goods: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagerSummary {
    pub name_kanji: String,
    pub name_kana: String,
    pub birth_date: String,
    pub address: String,
    pub career: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ManagerSection {
    SameAsApplicant { label: &'static str },
    Distinct(ManagerSummary),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebsiteSection {
    pub in_use: bool,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionSection {
    pub application_date: &'static str,
    pub submit_to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedItem {
    pub label: &'static str,
    pub value: String,
}

/// Read-only summary shown on the last step before export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationView {
    pub applicant: ApplicantSection,
    pub address: AddressSection,
    pub career: Vec<String>,
    pub office: OfficeSection,
    pub manager: ManagerSection,
    pub website: WebsiteSection,
    pub submission: SubmissionSection,
    pub fixed_items: Vec<FixedItem>,
}
