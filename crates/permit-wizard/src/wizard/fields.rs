use serde::{Deserialize, Serialize};

/// Person groups that share the identity/birth date/address shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Applicant,
    Manager,
    Representative,
}

/// Owners of an independent address sub-record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressRole {
    Applicant,
    Office,
    Manager,
    Representative,
}

impl AddressRole {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Applicant,
            Self::Office,
            Self::Manager,
            Self::Representative,
        ]
    }
}

/// Roles that carry a career history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerRole {
    Applicant,
    Manager,
}

impl CareerRole {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Applicant => "careerHistory",
            Self::Manager => "managerCareerHistory",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameField {
    LastKanji,
    FirstKanji,
    LastKana,
    FirstKana,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    Year,
    Month,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressField {
    PostalCode,
    Prefecture,
    City,
    Street,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficeNameField {
    Kanji,
    Kana,
}

/// Wire names used by the document generator for each name field.
pub const fn name_key(role: Role, field: NameField) -> &'static str {
    match (role, field) {
        (Role::Applicant, NameField::LastKanji) => "lastNameKanji",
        (Role::Applicant, NameField::FirstKanji) => "firstNameKanji",
        (Role::Applicant, NameField::LastKana) => "lastNameKana",
        (Role::Applicant, NameField::FirstKana) => "firstNameKana",
        (Role::Manager, NameField::LastKanji) => "managerLastNameKanji",
        (Role::Manager, NameField::FirstKanji) => "managerFirstNameKanji",
        (Role::Manager, NameField::LastKana) => "managerLastNameKana",
        (Role::Manager, NameField::FirstKana) => "managerFirstNameKana",
        (Role::Representative, NameField::LastKanji) => "representativeLastNameKanji",
        (Role::Representative, NameField::FirstKanji) => "representativeFirstNameKanji",
        (Role::Representative, NameField::LastKana) => "representativeLastNameKana",
        (Role::Representative, NameField::FirstKana) => "representativeFirstNameKana",
    }
}

pub const fn birth_era_key(role: Role) -> &'static str {
    match role {
        Role::Applicant => "birthEra",
        Role::Manager => "managerBirthEra",
        Role::Representative => "representativeBirthEra",
    }
}

pub const fn birth_key(role: Role, field: DateField) -> &'static str {
    match (role, field) {
        (Role::Applicant, DateField::Year) => "birthYear",
        (Role::Applicant, DateField::Month) => "birthMonth",
        (Role::Applicant, DateField::Day) => "birthDay",
        (Role::Manager, DateField::Year) => "managerBirthYear",
        (Role::Manager, DateField::Month) => "managerBirthMonth",
        (Role::Manager, DateField::Day) => "managerBirthDay",
        (Role::Representative, DateField::Year) => "representativeBirthYear",
        (Role::Representative, DateField::Month) => "representativeBirthMonth",
        (Role::Representative, DateField::Day) => "representativeBirthDay",
    }
}

pub const fn address_key(role: AddressRole, field: AddressField) -> &'static str {
    match (role, field) {
        (AddressRole::Applicant, AddressField::PostalCode) => "postalCode",
        (AddressRole::Applicant, AddressField::Prefecture) => "prefecture",
        (AddressRole::Applicant, AddressField::City) => "city",
        (AddressRole::Applicant, AddressField::Street) => "street",
        (AddressRole::Applicant, AddressField::Phone) => "phone",
        (AddressRole::Office, AddressField::PostalCode) => "officePostalCode",
        (AddressRole::Office, AddressField::Prefecture) => "officePrefecture",
        (AddressRole::Office, AddressField::City) => "officeCity",
        (AddressRole::Office, AddressField::Street) => "officeStreet",
        (AddressRole::Office, AddressField::Phone) => "officePhone",
        (AddressRole::Manager, AddressField::PostalCode) => "managerPostalCode",
        (AddressRole::Manager, AddressField::Prefecture) => "managerPrefecture",
        (AddressRole::Manager, AddressField::City) => "managerCity",
        (AddressRole::Manager, AddressField::Street) => "managerStreet",
        (AddressRole::Manager, AddressField::Phone) => "managerPhone",
        (AddressRole::Representative, AddressField::PostalCode) => "representativePostalCode",
        (AddressRole::Representative, AddressField::Prefecture) => "representativePrefecture",
        (AddressRole::Representative, AddressField::City) => "representativeCity",
        (AddressRole::Representative, AddressField::Street) => "representativeStreet",
        (AddressRole::Representative, AddressField::Phone) => "representativePhone",
    }
}

pub const fn office_name_key(field: OfficeNameField) -> &'static str {
    match field {
        OfficeNameField::Kanji => "officeNameKanji",
        OfficeNameField::Kana => "officeNameKana",
    }
}
