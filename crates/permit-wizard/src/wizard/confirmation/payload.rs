use serde::{Deserialize, Serialize};

use crate::wizard::career::CareerHistory;
use crate::wizard::domain::{
    Address, ApplicantKind, BirthDate, CorporationType, Era, FormRecord, OfficeRecord,
    PersonRecord, Prefecture,
};

/// Flat field map sent to the document generator.
///
/// Field names follow the generator's camelCase contract; every field is
/// optional on input and falls back to the session defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationPayload {
    pub applicant_type: ApplicantKind,
    pub corporation_type: CorporationType,
    pub corporation_name: String,
    pub last_name_kanji: String,
    pub first_name_kanji: String,
    pub last_name_kana: String,
    pub first_name_kana: String,
    pub birth_era: Era,
    pub birth_year: String,
    pub birth_month: String,
    pub birth_day: String,
    pub postal_code: String,
    pub prefecture: Prefecture,
    pub city: String,
    pub street: String,
    pub phone: String,

    pub office_same_as_address: bool,
    pub office_name_kanji: String,
    pub office_name_kana: String,
    pub office_postal_code: String,
    pub office_prefecture: Prefecture,
    pub office_city: String,
    pub office_street: String,
    pub office_phone: String,

    pub manager_same_as_applicant: bool,
    pub manager_last_name_kanji: String,
    pub manager_first_name_kanji: String,
    pub manager_last_name_kana: String,
    pub manager_first_name_kana: String,
    pub manager_birth_era: Era,
    pub manager_birth_year: String,
    pub manager_birth_month: String,
    pub manager_birth_day: String,
    pub manager_postal_code: String,
    pub manager_prefecture: Prefecture,
    pub manager_city: String,
    pub manager_street: String,
    pub manager_phone: String,

    pub representative_type: String,
    pub representative_last_name_kanji: String,
    pub representative_first_name_kanji: String,
    pub representative_last_name_kana: String,
    pub representative_first_name_kana: String,
    pub representative_birth_era: Era,
    pub representative_birth_year: String,
    pub representative_birth_month: String,
    pub representative_birth_day: String,
    pub representative_postal_code: String,
    pub representative_prefecture: Prefecture,
    pub representative_city: String,
    pub representative_street: String,
    pub representative_phone: String,

    pub has_website: bool,
    pub website_url: String,
    pub submission_prefecture: Prefecture,
    pub career_history: CareerHistory,
    pub manager_career_history: CareerHistory,
}

impl Default for GenerationPayload {
    fn default() -> Self {
        Self::from(&FormRecord::default())
    }
}

impl From<&FormRecord> for GenerationPayload {
    fn from(record: &FormRecord) -> Self {
        let applicant = &record.applicant;
        let office = &record.office;
        let manager = &record.manager;
        let representative = &record.representative;

        Self {
            applicant_type: record.applicant_kind,
            corporation_type: record.corporation_type.clone(),
            corporation_name: record.corporation_name.clone(),
            last_name_kanji: applicant.last_name_kanji.clone(),
            first_name_kanji: applicant.first_name_kanji.clone(),
            last_name_kana: applicant.last_name_kana.clone(),
            first_name_kana: applicant.first_name_kana.clone(),
            birth_era: applicant.birth_date.era.clone(),
            birth_year: applicant.birth_date.year.clone(),
            birth_month: applicant.birth_date.month.clone(),
            birth_day: applicant.birth_date.day.clone(),
            postal_code: applicant.address.postal_code.clone(),
            prefecture: applicant.address.prefecture.clone(),
            city: applicant.address.city.clone(),
            street: applicant.address.street.clone(),
            phone: applicant.address.phone.clone(),

            office_same_as_address: record.office_same_as_address,
            office_name_kanji: office.name_kanji.clone(),
            office_name_kana: office.name_kana.clone(),
            office_postal_code: office.address.postal_code.clone(),
            office_prefecture: office.address.prefecture.clone(),
            office_city: office.address.city.clone(),
            office_street: office.address.street.clone(),
            office_phone: office.address.phone.clone(),

            manager_same_as_applicant: record.manager_same_as_applicant,
            manager_last_name_kanji: manager.last_name_kanji.clone(),
            manager_first_name_kanji: manager.first_name_kanji.clone(),
            manager_last_name_kana: manager.last_name_kana.clone(),
            manager_first_name_kana: manager.first_name_kana.clone(),
            manager_birth_era: manager.birth_date.era.clone(),
            manager_birth_year: manager.birth_date.year.clone(),
            manager_birth_month: manager.birth_date.month.clone(),
            manager_birth_day: manager.birth_date.day.clone(),
            manager_postal_code: manager.address.postal_code.clone(),
            manager_prefecture: manager.address.prefecture.clone(),
            manager_city: manager.address.city.clone(),
            manager_street: manager.address.street.clone(),
            manager_phone: manager.address.phone.clone(),

            representative_type: record.representative_type.clone(),
            representative_last_name_kanji: representative.last_name_kanji.clone(),
            representative_first_name_kanji: representative.first_name_kanji.clone(),
            representative_last_name_kana: representative.last_name_kana.clone(),
            representative_first_name_kana: representative.first_name_kana.clone(),
            representative_birth_era: representative.birth_date.era.clone(),
            representative_birth_year: representative.birth_date.year.clone(),
            representative_birth_month: representative.birth_date.month.clone(),
            representative_birth_day: representative.birth_date.day.clone(),
            representative_postal_code: representative.address.postal_code.clone(),
            representative_prefecture: representative.address.prefecture.clone(),
            representative_city: representative.address.city.clone(),
            representative_street: representative.address.street.clone(),
            representative_phone: representative.address.phone.clone(),

            has_website: record.has_website,
            website_url: record.website_url.clone(),
            submission_prefecture: record.submission_prefecture.clone(),
            career_history: record.career_history.clone(),
            manager_career_history: record.manager_career_history.clone(),
        }
    }
}

impl From<GenerationPayload> for FormRecord {
    fn from(payload: GenerationPayload) -> Self {
        FormRecord {
            applicant_kind: payload.applicant_type,
            corporation_type: payload.corporation_type,
            corporation_name: payload.corporation_name,
            applicant: PersonRecord {
                last_name_kanji: payload.last_name_kanji,
                first_name_kanji: payload.first_name_kanji,
                last_name_kana: payload.last_name_kana,
                first_name_kana: payload.first_name_kana,
                birth_date: BirthDate {
                    era: payload.birth_era,
                    year: payload.birth_year,
                    month: payload.birth_month,
                    day: payload.birth_day,
                },
                address: Address {
                    postal_code: payload.postal_code,
                    prefecture: payload.prefecture,
                    city: payload.city,
                    street: payload.street,
                    phone: payload.phone,
                },
            },
            office_same_as_address: payload.office_same_as_address,
            office: OfficeRecord {
                name_kanji: payload.office_name_kanji,
                name_kana: payload.office_name_kana,
                address: Address {
                    postal_code: payload.office_postal_code,
                    prefecture: payload.office_prefecture,
                    city: payload.office_city,
                    street: payload.office_street,
                    phone: payload.office_phone,
                },
            },
            manager_same_as_applicant: payload.manager_same_as_applicant,
            manager: PersonRecord {
                last_name_kanji: payload.manager_last_name_kanji,
                first_name_kanji: payload.manager_first_name_kanji,
                last_name_kana: payload.manager_last_name_kana,
                first_name_kana: payload.manager_first_name_kana,
                birth_date: BirthDate {
                    era: payload.manager_birth_era,
                    year: payload.manager_birth_year,
                    month: payload.manager_birth_month,
                    day: payload.manager_birth_day,
                },
                address: Address {
                    postal_code: payload.manager_postal_code,
                    prefecture: payload.manager_prefecture,
                    city: payload.manager_city,
                    street: payload.manager_street,
                    phone: payload.manager_phone,
                },
            },
            representative_type: payload.representative_type,
            representative: PersonRecord {
                last_name_kanji: payload.representative_last_name_kanji,
                first_name_kanji: payload.representative_first_name_kanji,
                last_name_kana: payload.representative_last_name_kana,
                first_name_kana: payload.representative_first_name_kana,
                birth_date: BirthDate {
                    era: payload.representative_birth_era,
                    year: payload.representative_birth_year,
                    month: payload.representative_birth_month,
                    day: payload.representative_birth_day,
                },
                address: Address {
                    postal_code: payload.representative_postal_code,
                    prefecture: payload.representative_prefecture,
                    city: payload.representative_city,
                    street: payload.representative_street,
                    phone: payload.representative_phone,
                },
            },
            has_website: payload.has_website,
            website_url: payload.website_url,
            submission_prefecture: payload.submission_prefecture,
            career_history: payload.career_history,
            manager_career_history: payload.manager_career_history,
        }
    }
}
