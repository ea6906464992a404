//! End-to-end questionnaire runs through the public session facade.

use permit_wizard::wizard::{
    AddressCandidate, AddressField, AddressRole, CareerField, CareerRole, ConfirmationView,
    DateField, Era, FieldPatch, ManagerSection, NameField, Prefecture, Role, ValidationMode,
    WizardSession, WizardStep,
};

fn view_after_walking(session: &mut WizardSession) -> ConfirmationView {
    while session.current_step() != WizardStep::Confirm {
        session.next().expect("step advances");
    }
    session.confirmation()
}

#[test]
fn default_record_reaches_confirmation_with_sentinels() {
    let mut session = WizardSession::default();
    let mut visited = vec![session.current_step()];
    for _ in 0..7 {
        visited.push(session.next().expect("advisory mode"));
    }
    assert_eq!(visited, WizardStep::ordered().to_vec());

    let view = session.confirmation();
    assert_eq!(view.applicant.kind_label, "個人");
    assert_eq!(view.office.location, "住所と同じ");
    assert!(matches!(
        view.manager,
        ManagerSection::SameAsApplicant { label: "申請者と同じ" }
    ));
    assert_eq!(view.website.summary, "用いない");
}

#[test]
fn filled_in_session_produces_a_complete_summary() {
    let mut session = WizardSession::new(ValidationMode::Strict);

    for (name, value) in [
        (NameField::LastKanji, "佐藤"),
        (NameField::FirstKanji, "健"),
        (NameField::LastKana, "サトウ"),
        (NameField::FirstKana, "ケン"),
    ] {
        session.edit(FieldPatch::name(Role::Applicant, name, value));
    }
    session.edit(FieldPatch::BirthEra {
        role: Role::Applicant,
        value: Era::Showa,
    });
    for (part, value) in [
        (DateField::Year, "60"),
        (DateField::Month, "1"),
        (DateField::Day, "9"),
    ] {
        session.edit(FieldPatch::birth_date(Role::Applicant, part, value));
    }
    assert_eq!(session.next().expect("applicant complete"), WizardStep::Address);

    let ticket = session
        .edit_postal_code(AddressRole::Applicant, "060-0001")
        .expect("seven digits");
    assert!(session.complete_lookup(
        &ticket,
        Ok(vec![AddressCandidate::new("北海道", "札幌市中央区", "北一条西")])
    ));
    session.edit(FieldPatch::address(AddressRole::Applicant, AddressField::Street, "1-1"));
    session.edit(FieldPatch::address(
        AddressRole::Applicant,
        AddressField::Phone,
        "011-123-4567",
    ));
    assert_eq!(session.next().expect("address complete"), WizardStep::Career);

    session.append_career(CareerRole::Applicant);
    session.update_career(CareerRole::Applicant, 0, CareerField::Year, "2001");
    session.update_career(CareerRole::Applicant, 0, CareerField::Month, "4");
    session.update_career(CareerRole::Applicant, 0, CareerField::Content, "札幌商会 入社");
    session.next().expect("career has no requirements");

    session.edit(FieldPatch::OfficeName {
        name: permit_wizard::wizard::OfficeNameField::Kanji,
        value: "佐藤リサイクル".to_string(),
    });
    session.edit(FieldPatch::OfficeName {
        name: permit_wizard::wizard::OfficeNameField::Kana,
        value: "サトウリサイクル".to_string(),
    });
    session.next().expect("office complete");
    session.next().expect("manager same as applicant");
    session.next().expect("no website");

    assert_eq!(session.current_step(), WizardStep::Submission);
    assert_eq!(
        session.record().submission_prefecture,
        Prefecture::from("北海道")
    );

    let view = view_after_walking(&mut session);
    assert_eq!(view.applicant.name_kanji, "佐藤 健");
    assert_eq!(view.applicant.birth_date, "昭和60年1月9日");
    assert_eq!(view.address.address, "北海道札幌市中央区北一条西1-1");
    assert_eq!(view.career, vec!["2001年4月 札幌商会 入社".to_string()]);
    assert_eq!(view.office.name_kana, "サトウリサイクル");
    assert_eq!(view.submission.submit_to, "北海道公安委員会");
    assert!(session.progress().steps.iter().all(|entry| {
        entry.step == WizardStep::Confirm
            || entry.status == permit_wizard::wizard::StepStatus::Completed
    }));
}

#[test]
fn going_back_keeps_entered_values() {
    let mut session = WizardSession::default();
    session.edit(FieldPatch::name(Role::Applicant, NameField::LastKanji, "山田"));
    session.next().expect("advance");
    session.next().expect("advance");
    assert_eq!(session.back(), WizardStep::Address);
    assert_eq!(session.back(), WizardStep::Applicant);
    assert_eq!(session.back(), WizardStep::Applicant);
    assert_eq!(session.record().applicant.last_name_kanji, "山田");
}
