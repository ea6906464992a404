use super::views::{
    AddressSection, ApplicantSection, ConfirmationView, CorporationSummary, FixedItem,
    ManagerSection, ManagerSummary, OfficeSection, SubmissionSection, WebsiteSection,
};
use crate::wizard::career::{CareerEntry, CareerHistory};
use crate::wizard::domain::{CorporationType, Era, FormRecord, PersonRecord};
use crate::wizard::fields::{AddressRole, Role};

pub const NOT_ENTERED: &str = "未入力";
pub const SAME_AS_ADDRESS: &str = "住所と同じ";
pub const SAME_AS_APPLICANT: &str = "申請者と同じ";
pub const WEBSITE_NOT_USED: &str = "用いない";
pub const WEBSITE_USED: &str = "用いる";
pub const APPLICATION_DATE_NOTE: &str = "（提出時に記入）";
pub const HANDLED_GOODS: &str = "衣類、皮革・ゴム製品類";

fn or_not_entered(value: &str) -> String {
    if value.is_empty() {
        NOT_ENTERED.to_string()
    } else {
        value.to_string()
    }
}

fn first_present<'a>(own: &'a str, fallback: &'a str) -> &'a str {
    if own.is_empty() {
        fallback
    } else {
        own
    }
}

/// Display label for an era code; unknown codes come back unchanged.
pub fn era_label(code: &str) -> String {
    Era::from_code(code).label().to_string()
}

/// Display label for a corporation-type code; unknown codes come back unchanged.
pub fn corporation_type_label(code: &str) -> String {
    CorporationType::from_code(code).label().to_string()
}

/// `{era}{year}年{month}月{day}日`, or the not-entered sentinel when any part is blank.
///
/// No calendar check is made.
pub fn format_date(record: &FormRecord, role: Role) -> String {
    let birth_date = &record.person(role).birth_date;
    if birth_date.year.is_empty() || birth_date.month.is_empty() || birth_date.day.is_empty() {
        return NOT_ENTERED.to_string();
    }
    format!(
        "{}{}年{}月{}日",
        birth_date.era.label(),
        birth_date.year,
        birth_date.month,
        birth_date.day
    )
}

/// Prefecture, city and street concatenated, each falling back to the
/// applicant's own value when the role leaves it blank.
pub fn format_address(record: &FormRecord, role: AddressRole) -> String {
    let own = record.address(role);
    let home = &record.applicant.address;
    format!(
        "{}{}{}",
        first_present(own.prefecture.as_str(), home.prefecture.as_str()),
        first_present(&own.city, &home.city),
        first_present(&own.street, &home.street),
    )
}

pub fn full_name(last: &str, first: &str) -> String {
    match (last.is_empty(), first.is_empty()) {
        (false, false) => format!("{last} {first}"),
        (false, true) => last.to_string(),
        (true, false) => first.to_string(),
        (true, true) => NOT_ENTERED.to_string(),
    }
}

pub fn format_career_entry(entry: &CareerEntry) -> String {
    if !entry.year.is_empty() && !entry.month.is_empty() {
        format!("{}年{}月 {}", entry.year, entry.month, entry.content)
    } else {
        entry.content.clone()
    }
}

fn career_lines(history: &CareerHistory) -> Vec<String> {
    history.entries().iter().map(format_career_entry).collect()
}

fn kanji_name(person: &PersonRecord) -> String {
    full_name(&person.last_name_kanji, &person.first_name_kanji)
}

fn kana_name(person: &PersonRecord) -> String {
    full_name(&person.last_name_kana, &person.first_name_kana)
}

fn applicant_section(record: &FormRecord) -> ApplicantSection {
    let corporation = record.is_corporation().then(|| CorporationSummary {
        type_label: record.corporation_type.label().to_string(),
        name: or_not_entered(&record.corporation_name),
    });

    ApplicantSection {
        kind_label: record.applicant_kind.label(),
        corporation,
        name_kanji: kanji_name(&record.applicant),
        name_kana: kana_name(&record.applicant),
        birth_date: format_date(record, Role::Applicant),
    }
}

fn office_section(record: &FormRecord) -> OfficeSection {
    let location = if record.office_same_as_address {
        SAME_AS_ADDRESS.to_string()
    } else {
        format_address(record, AddressRole::Office)
    };

    OfficeSection {
        name_kanji: or_not_entered(&record.office.name_kanji),
        name_kana: or_not_entered(&record.office.name_kana),
        location,
        handled_goods: HANDLED_GOODS,
    }
}

fn manager_section(record: &FormRecord) -> ManagerSection {
    if record.manager_same_as_applicant {
        return ManagerSection::SameAsApplicant {
            label: SAME_AS_APPLICANT,
        };
    }

    ManagerSection::Distinct(ManagerSummary {
        name_kanji: kanji_name(&record.manager),
        name_kana: kana_name(&record.manager),
        birth_date: format_date(record, Role::Manager),
        address: format_address(record, AddressRole::Manager),
        career: career_lines(&record.manager_career_history),
    })
}

fn website_section(record: &FormRecord) -> WebsiteSection {
    let summary = if record.has_website {
        format!("{WEBSITE_USED}: {}", or_not_entered(&record.website_url))
    } else {
        WEBSITE_NOT_USED.to_string()
    };

    WebsiteSection {
        in_use: record.has_website,
        summary,
    }
}

fn fixed_items(record: &FormRecord) -> Vec<FixedItem> {
    let category = if record.is_corporation() {
        record.corporation_type.label().to_string()
    } else {
        record.applicant_kind.label().to_string()
    };

    vec![
        FixedItem {
            label: "許可の種類",
            value: "古物商（古物市場主は二重線で消去）".to_string(),
        },
        FixedItem {
            label: "法人等の種別",
            value: category,
        },
        FixedItem {
            label: "行商",
            value: "しない".to_string(),
        },
        FixedItem {
            label: "営業所形態",
            value: "営業所あり".to_string(),
        },
    ]
}

/// Derives the confirmation summary. The record is only read.
pub fn assemble(record: &FormRecord) -> ConfirmationView {
    ConfirmationView {
        applicant: applicant_section(record),
        address: AddressSection {
            address: format_address(record, AddressRole::Applicant),
            phone: or_not_entered(&record.applicant.address.phone),
        },
        career: career_lines(&record.career_history),
        office: office_section(record),
        manager: manager_section(record),
        website: website_section(record),
        submission: SubmissionSection {
            application_date: APPLICATION_DATE_NOTE,
            submit_to: format!(
                "{}公安委員会",
                or_not_entered(record.submission_prefecture.as_str())
            ),
        },
        fixed_items: fixed_items(record),
    }
}

impl FormRecord {
    pub fn confirmation(&self) -> ConfirmationView {
        assemble(self)
    }
}
