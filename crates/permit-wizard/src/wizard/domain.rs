use serde::{Deserialize, Serialize};

use super::career::CareerHistory;
use super::fields::{AddressRole, CareerRole, Role};

/// The 47 prefecture names offered by the address and submission selectors.
pub const PREFECTURES: [&str; 47] = [
    "北海道", "青森県", "岩手県", "宮城県", "秋田県", "山形県", "福島県",
    "茨城県", "栃木県", "群馬県", "埼玉県", "千葉県", "東京都", "神奈川県",
    "新潟県", "富山県", "石川県", "福井県", "山梨県", "長野県", "岐阜県",
    "静岡県", "愛知県", "三重県", "滋賀県", "京都府", "大阪府", "兵庫県",
    "奈良県", "和歌山県", "鳥取県", "島根県", "岡山県", "広島県", "山口県",
    "徳島県", "香川県", "愛媛県", "高知県", "福岡県", "佐賀県", "長崎県",
    "熊本県", "大分県", "宮崎県", "鹿児島県", "沖縄県",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantKind {
    #[default]
    Individual,
    Corporation,
}

impl ApplicantKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Individual => "個人",
            Self::Corporation => "法人",
        }
    }
}

/// Calendar epoch prefixed to a birth year.
///
/// Codes outside the closed set are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Era {
    #[default]
    Seireki,
    Showa,
    Heisei,
    Reiwa,
    Other(String),
}

impl Era {
    pub fn from_code(code: &str) -> Self {
        match code {
            "seireki" => Self::Seireki,
            "showa" => Self::Showa,
            "heisei" => Self::Heisei,
            "reiwa" => Self::Reiwa,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Seireki => "seireki",
            Self::Showa => "showa",
            Self::Heisei => "heisei",
            Self::Reiwa => "reiwa",
            Self::Other(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Seireki => "西暦",
            Self::Showa => "昭和",
            Self::Heisei => "平成",
            Self::Reiwa => "令和",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for Era {
    fn from(value: String) -> Self {
        Self::from_code(&value)
    }
}

impl From<Era> for String {
    fn from(value: Era) -> Self {
        value.code().to_string()
    }
}

/// Legal form of a corporate applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CorporationType {
    KabushikiKaisha,
    YugenKaisha,
    GomeiKaisha,
    GoshiKaisha,
    OtherCorporation,
    /// Empty or unrecognised code, passed through verbatim.
    #[default]
    Unlisted,
    Custom(String),
}

impl CorporationType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "kabushiki" => Self::KabushikiKaisha,
            "yugen" => Self::YugenKaisha,
            "gomei" => Self::GomeiKaisha,
            "goshi" => Self::GoshiKaisha,
            "other" => Self::OtherCorporation,
            "" => Self::Unlisted,
            custom => Self::Custom(custom.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::KabushikiKaisha => "kabushiki",
            Self::YugenKaisha => "yugen",
            Self::GomeiKaisha => "gomei",
            Self::GoshiKaisha => "goshi",
            Self::OtherCorporation => "other",
            Self::Unlisted => "",
            Self::Custom(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::KabushikiKaisha => "株式会社",
            Self::YugenKaisha => "有限会社",
            Self::GomeiKaisha => "合名会社",
            Self::GoshiKaisha => "合資会社",
            Self::OtherCorporation => "その他法人",
            Self::Unlisted => "",
            Self::Custom(code) => code,
        }
    }
}

impl From<String> for CorporationType {
    fn from(value: String) -> Self {
        Self::from_code(&value)
    }
}

impl From<CorporationType> for String {
    fn from(value: CorporationType) -> Self {
        value.code().to_string()
    }
}

/// Prefecture name as entered or auto-filled.
///
/// Values outside [`PREFECTURES`] are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prefecture(String);

impl Prefecture {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Prefecture {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Prefecture {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthDate {
    pub era: Era,
    pub year: String,
    pub month: String,
    pub day: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub postal_code: String,
    pub prefecture: Prefecture,
    pub city: String,
    pub street: String,
    pub phone: String,
}

/// Identity, birth date and address shared by applicant, manager and representative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub last_name_kanji: String,
    pub first_name_kanji: String,
    pub last_name_kana: String,
    pub first_name_kana: String,
    pub birth_date: BirthDate,
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeRecord {
    pub name_kanji: String,
    pub name_kana: String,
    pub address: Address,
}

/// Every fact collected by the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    pub applicant_kind: ApplicantKind,
    pub corporation_type: CorporationType,
    pub corporation_name: String,
    pub applicant: PersonRecord,
    pub office_same_as_address: bool,
    pub office: OfficeRecord,
    pub manager_same_as_applicant: bool,
    pub manager: PersonRecord,
    pub representative_type: String,
    pub representative: PersonRecord,
    pub has_website: bool,
    pub website_url: String,
    pub submission_prefecture: Prefecture,
    pub career_history: CareerHistory,
    pub manager_career_history: CareerHistory,
}

impl Default for FormRecord {
    fn default() -> Self {
        Self {
            applicant_kind: ApplicantKind::Individual,
            corporation_type: CorporationType::Unlisted,
            corporation_name: String::new(),
            applicant: PersonRecord::default(),
            office_same_as_address: true,
            office: OfficeRecord::default(),
            manager_same_as_applicant: true,
            manager: PersonRecord::default(),
            representative_type: String::new(),
            representative: PersonRecord::default(),
            has_website: false,
            website_url: String::new(),
            submission_prefecture: Prefecture::default(),
            career_history: CareerHistory::default(),
            manager_career_history: CareerHistory::default(),
        }
    }
}

impl FormRecord {
    pub fn person(&self, role: Role) -> &PersonRecord {
        match role {
            Role::Applicant => &self.applicant,
            Role::Manager => &self.manager,
            Role::Representative => &self.representative,
        }
    }

    pub(crate) fn person_mut(&mut self, role: Role) -> &mut PersonRecord {
        match role {
            Role::Applicant => &mut self.applicant,
            Role::Manager => &mut self.manager,
            Role::Representative => &mut self.representative,
        }
    }

    pub fn address(&self, role: AddressRole) -> &Address {
        match role {
            AddressRole::Applicant => &self.applicant.address,
            AddressRole::Office => &self.office.address,
            AddressRole::Manager => &self.manager.address,
            AddressRole::Representative => &self.representative.address,
        }
    }

    pub(crate) fn address_mut(&mut self, role: AddressRole) -> &mut Address {
        match role {
            AddressRole::Applicant => &mut self.applicant.address,
            AddressRole::Office => &mut self.office.address,
            AddressRole::Manager => &mut self.manager.address,
            AddressRole::Representative => &mut self.representative.address,
        }
    }

    pub fn career(&self, role: CareerRole) -> &CareerHistory {
        match role {
            CareerRole::Applicant => &self.career_history,
            CareerRole::Manager => &self.manager_career_history,
        }
    }

    pub(crate) fn career_mut(&mut self, role: CareerRole) -> &mut CareerHistory {
        match role {
            CareerRole::Applicant => &mut self.career_history,
            CareerRole::Manager => &mut self.manager_career_history,
        }
    }

    pub fn is_corporation(&self) -> bool {
        self.applicant_kind == ApplicantKind::Corporation
    }
}
