use serde::{Deserialize, Serialize};

use super::career::CareerHistory;
use super::domain::{ApplicantKind, CorporationType, Era, FormRecord, Prefecture};
use super::fields::{
    address_key, birth_era_key, birth_key, name_key, office_name_key, AddressField, AddressRole,
    CareerRole, DateField, NameField, OfficeNameField, Role,
};

/// A single-field edit to a [`FormRecord`].
///
/// Every variant names its target statically; no field key is assembled at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", rename_all = "snake_case")]
pub enum FieldPatch {
    ApplicantKind {
        value: ApplicantKind,
    },
    CorporationType {
        value: CorporationType,
    },
    CorporationName {
        value: String,
    },
    Name {
        role: Role,
        name: NameField,
        value: String,
    },
    BirthEra {
        role: Role,
        value: Era,
    },
    BirthDate {
        role: Role,
        part: DateField,
        value: String,
    },
    Address {
        role: AddressRole,
        part: AddressField,
        value: String,
    },
    OfficeName {
        name: OfficeNameField,
        value: String,
    },
    OfficeSameAsAddress {
        value: bool,
    },
    ManagerSameAsApplicant {
        value: bool,
    },
    RepresentativeType {
        value: String,
    },
    HasWebsite {
        value: bool,
    },
    WebsiteUrl {
        value: String,
    },
    SubmissionPrefecture {
        value: Prefecture,
    },
    CareerHistory {
        role: CareerRole,
        value: CareerHistory,
    },
}

impl FieldPatch {
    pub fn name(role: Role, name: NameField, value: impl Into<String>) -> Self {
        Self::Name {
            role,
            name,
            value: value.into(),
        }
    }

    pub fn birth_date(role: Role, part: DateField, value: impl Into<String>) -> Self {
        Self::BirthDate {
            role,
            part,
            value: value.into(),
        }
    }

    pub fn address(role: AddressRole, part: AddressField, value: impl Into<String>) -> Self {
        Self::Address {
            role,
            part,
            value: value.into(),
        }
    }

    /// Wire name of the field this edit replaces.
    pub fn key(&self) -> &'static str {
        match self {
            Self::ApplicantKind { .. } => "applicantType",
            Self::CorporationType { .. } => "corporationType",
            Self::CorporationName { .. } => "corporationName",
            Self::Name { role, name, .. } => name_key(*role, *name),
            Self::BirthEra { role, .. } => birth_era_key(*role),
            Self::BirthDate { role, part, .. } => birth_key(*role, *part),
            Self::Address { role, part, .. } => address_key(*role, *part),
            Self::OfficeName { name, .. } => office_name_key(*name),
            Self::OfficeSameAsAddress { .. } => "officeSameAsAddress",
            Self::ManagerSameAsApplicant { .. } => "managerSameAsApplicant",
            Self::RepresentativeType { .. } => "representativeType",
            Self::HasWebsite { .. } => "hasWebsite",
            Self::WebsiteUrl { .. } => "websiteUrl",
            Self::SubmissionPrefecture { .. } => "submissionPrefecture",
            Self::CareerHistory { role, .. } => role.key(),
        }
    }
}

impl FormRecord {
    /// Returns a copy of the record with exactly the patched field replaced.
    ///
    /// The value is accepted as-is; format checks live in `validation`.
    pub fn patch(&self, patch: FieldPatch) -> FormRecord {
        let mut next = self.clone();
        next.apply(patch);
        next
    }

    fn apply(&mut self, patch: FieldPatch) {
        match patch {
            FieldPatch::ApplicantKind { value } => self.applicant_kind = value,
            FieldPatch::CorporationType { value } => self.corporation_type = value,
            FieldPatch::CorporationName { value } => self.corporation_name = value,
            FieldPatch::Name { role, name, value } => {
                let person = self.person_mut(role);
                match name {
                    NameField::LastKanji => person.last_name_kanji = value,
                    NameField::FirstKanji => person.first_name_kanji = value,
                    NameField::LastKana => person.last_name_kana = value,
                    NameField::FirstKana => person.first_name_kana = value,
                }
            }
            FieldPatch::BirthEra { role, value } => self.person_mut(role).birth_date.era = value,
            FieldPatch::BirthDate { role, part, value } => {
                let birth_date = &mut self.person_mut(role).birth_date;
                match part {
                    DateField::Year => birth_date.year = value,
                    DateField::Month => birth_date.month = value,
                    DateField::Day => birth_date.day = value,
                }
            }
            FieldPatch::Address { role, part, value } => {
                let address = self.address_mut(role);
                match part {
                    AddressField::PostalCode => address.postal_code = value,
                    AddressField::Prefecture => address.prefecture = Prefecture::from(value),
                    AddressField::City => address.city = value,
                    AddressField::Street => address.street = value,
                    AddressField::Phone => address.phone = value,
                }
            }
            FieldPatch::OfficeName { name, value } => match name {
                OfficeNameField::Kanji => self.office.name_kanji = value,
                OfficeNameField::Kana => self.office.name_kana = value,
            },
            FieldPatch::OfficeSameAsAddress { value } => self.office_same_as_address = value,
            FieldPatch::ManagerSameAsApplicant { value } => self.manager_same_as_applicant = value,
            FieldPatch::RepresentativeType { value } => self.representative_type = value,
            FieldPatch::HasWebsite { value } => self.has_website = value,
            FieldPatch::WebsiteUrl { value } => self.website_url = value,
            FieldPatch::SubmissionPrefecture { value } => self.submission_prefecture = value,
            FieldPatch::CareerHistory { role, value } => *self.career_mut(role) = value,
        }
    }
}
