use super::career::{CareerEntry, CareerHistory};
use super::domain::{
    Address, ApplicantKind, BirthDate, CorporationType, Era, FormRecord, OfficeRecord,
    PersonRecord, Prefecture,
};

fn person(
    name_kanji: (&str, &str),
    name_kana: (&str, &str),
    birth: (&str, &str, &str),
    address: Address,
) -> PersonRecord {
    PersonRecord {
        last_name_kanji: name_kanji.0.to_string(),
        first_name_kanji: name_kanji.1.to_string(),
        last_name_kana: name_kana.0.to_string(),
        first_name_kana: name_kana.1.to_string(),
        birth_date: BirthDate {
            era: Era::Seireki,
            year: birth.0.to_string(),
            month: birth.1.to_string(),
            day: birth.2.to_string(),
        },
        address,
    }
}

fn osaka_address(postal_code: &str, city: &str, street: &str, phone: &str) -> Address {
    Address {
        postal_code: postal_code.to_string(),
        prefecture: Prefecture::from("大阪府"),
        city: city.to_string(),
        street: street.to_string(),
        phone: phone.to_string(),
    }
}

fn career(entries: [(&str, &str, &str); 6]) -> CareerHistory {
    CareerHistory::from_entries(
        entries
            .into_iter()
            .map(|(year, month, content)| CareerEntry::new(year, month, content)),
    )
}

/// Fully populated individual application used for demos and local testing.
pub fn sample_record() -> FormRecord {
    FormRecord {
        applicant_kind: ApplicantKind::Individual,
        corporation_type: CorporationType::Unlisted,
        corporation_name: String::new(),
        applicant: person(
            ("山田", "太郎"),
            ("ヤマダ", "タロウ"),
            ("1980", "03", "15"),
            osaka_address("545-0053", "大阪市阿倍野区松崎町", "2-3-37-412", "090-4906-9060"),
        ),
        office_same_as_address: false,
        office: OfficeRecord {
            name_kanji: "山田商店".to_string(),
            name_kana: "ヤマダショウテン".to_string(),
            address: osaka_address("530-0001", "大阪市北区梅田", "1-2-3", "06-1234-5678"),
        },
        manager_same_as_applicant: false,
        manager: person(
            ("鈴木", "花子"),
            ("スズキ", "ハナコ"),
            ("1990", "07", "25"),
            osaka_address("550-0002", "大阪市西区江戸堀", "4-5-6", "080-9876-5432"),
        ),
        representative_type: "1".to_string(),
        representative: person(
            ("田中", "一郎"),
            ("タナカ", "イチロウ"),
            ("1965", "11", "03"),
            osaka_address("542-0081", "大阪市中央区南船場", "7-8-9", "06-5555-1234"),
        ),
        has_website: true,
        website_url: "https://www.example-shop.co.jp".to_string(),
        submission_prefecture: Prefecture::from("大阪府"),
        career_history: career([
            ("2015", "4", "○○大学 入学"),
            ("2019", "3", "同大学 卒業"),
            ("2019", "4", "株式会社○○商事 入社"),
            ("2021", "9", "同社 退職"),
            ("2021", "10", "△△株式会社 入社"),
            ("2023", "3", "同社 退職"),
        ]),
        manager_career_history: career([
            ("2010", "4", "□□専門学校 入学"),
            ("2012", "3", "同校 卒業"),
            ("2012", "4", "株式会社××商店 入社"),
            ("2016", "6", "同社 退職"),
            ("2016", "7", "◇◇株式会社 入社"),
            ("2020", "12", "同社 退職"),
        ]),
    }
}
