use serde::Serialize;

use super::format::{is_katakana, is_valid_phone, is_valid_postal_code, is_valid_url};
use super::policy::{FieldIssue, IssueKind, ValidationMode};
use crate::wizard::domain::{FormRecord, PersonRecord};
use crate::wizard::fields::{
    address_key, birth_key, name_key, office_name_key, AddressField, AddressRole, DateField,
    NameField, OfficeNameField, Role,
};
use crate::wizard::steps::WizardStep;

const MISSING: &str = "必須項目です";
const NOT_KATAKANA: &str = "全角カタカナで入力してください";
const BAD_PHONE: &str = "電話番号の形式が正しくありません";
const BAD_POSTAL_CODE: &str = "郵便番号の形式が正しくありません";
const BAD_URL: &str = "URLの形式が正しくありません";

/// Findings for one step of the questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct StepIssues {
    pub step: WizardStep,
    pub issues: Vec<FieldIssue>,
}

struct Findings {
    mode: ValidationMode,
    issues: Vec<FieldIssue>,
}

impl Findings {
    fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            issues: Vec::new(),
        }
    }

    fn push(&mut self, field: &'static str, kind: IssueKind, message: &'static str) {
        self.issues.push(FieldIssue {
            field,
            kind,
            severity: self.mode.severity(),
            message,
        });
    }

    /// Records a missing-value finding and reports whether the value was present.
    fn required(&mut self, field: &'static str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.push(field, IssueKind::Missing, MISSING);
            false
        } else {
            true
        }
    }

    fn check(
        &mut self,
        field: &'static str,
        value: &str,
        predicate: fn(&str) -> bool,
        message: &'static str,
    ) {
        if !predicate(value) {
            self.push(field, IssueKind::Malformed, message);
        }
    }

    fn person(&mut self, role: Role, person: &PersonRecord) {
        self.required(name_key(role, NameField::LastKanji), &person.last_name_kanji);
        self.required(name_key(role, NameField::FirstKanji), &person.first_name_kanji);

        for (field, value) in [
            (NameField::LastKana, &person.last_name_kana),
            (NameField::FirstKana, &person.first_name_kana),
        ] {
            let key = name_key(role, field);
            if self.required(key, value) {
                self.check(key, value, is_katakana, NOT_KATAKANA);
            }
        }

        let birth_date = &person.birth_date;
        self.required(birth_key(role, DateField::Year), &birth_date.year);
        self.required(birth_key(role, DateField::Month), &birth_date.month);
        self.required(birth_key(role, DateField::Day), &birth_date.day);
    }

    fn address(&mut self, role: AddressRole, record: &FormRecord) {
        let address = record.address(role);

        if !address.postal_code.is_empty() {
            self.check(
                address_key(role, AddressField::PostalCode),
                &address.postal_code,
                is_valid_postal_code,
                BAD_POSTAL_CODE,
            );
        }
        self.required(
            address_key(role, AddressField::Prefecture),
            address.prefecture.as_str(),
        );
        self.required(address_key(role, AddressField::City), &address.city);
        self.required(address_key(role, AddressField::Street), &address.street);

        let phone_key = address_key(role, AddressField::Phone);
        if self.required(phone_key, &address.phone) {
            self.check(phone_key, &address.phone, is_valid_phone, BAD_PHONE);
        }
    }
}

/// Grades the fields the given step collects.
///
/// Sub-records hidden behind a same-as flag are skipped entirely.
pub fn validate_step(record: &FormRecord, step: WizardStep, mode: ValidationMode) -> Vec<FieldIssue> {
    let mut findings = Findings::new(mode);

    match step {
        WizardStep::Applicant => {
            if record.is_corporation() {
                findings.required("corporationType", record.corporation_type.code());
                findings.required("corporationName", &record.corporation_name);
            }
            findings.person(Role::Applicant, &record.applicant);
        }
        WizardStep::Address => findings.address(AddressRole::Applicant, record),
        WizardStep::Career | WizardStep::Confirm => {}
        WizardStep::Office => {
            findings.required(office_name_key(OfficeNameField::Kanji), &record.office.name_kanji);
            let kana_key = office_name_key(OfficeNameField::Kana);
            if findings.required(kana_key, &record.office.name_kana) {
                findings.check(kana_key, &record.office.name_kana, is_katakana, NOT_KATAKANA);
            }
            if !record.office_same_as_address {
                findings.address(AddressRole::Office, record);
            }
        }
        WizardStep::Manager => {
            if !record.manager_same_as_applicant {
                findings.person(Role::Manager, &record.manager);
                findings.address(AddressRole::Manager, record);
            }
        }
        WizardStep::Website => {
            if record.has_website && findings.required("websiteUrl", &record.website_url) {
                findings.check("websiteUrl", &record.website_url, is_valid_url, BAD_URL);
            }
        }
        WizardStep::Submission => {
            findings.required(
                "submissionPrefecture",
                record.submission_prefecture.as_str(),
            );
        }
    }

    findings.issues
}

/// Findings for every step that has any, in step order.
pub fn validate_record(record: &FormRecord, mode: ValidationMode) -> Vec<StepIssues> {
    WizardStep::ordered()
        .into_iter()
        .map(|step| StepIssues {
            step,
            issues: validate_step(record, step, mode),
        })
        .filter(|entry| !entry.issues.is_empty())
        .collect()
}
