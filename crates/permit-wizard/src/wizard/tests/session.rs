use std::sync::atomic::Ordering;

use super::common::*;

use crate::wizard::address::AddressCandidate;
use crate::wizard::career::{CareerField, MAX_CAREER_ENTRIES};
use crate::wizard::domain::Prefecture;
use crate::wizard::export::FALLBACK_FAILURE_MESSAGE;
use crate::wizard::fields::{AddressField, AddressRole, CareerRole, NameField, Role};
use crate::wizard::patch::FieldPatch;
use crate::wizard::session::{SessionError, WizardSession};
use crate::wizard::steps::{StepSequencer, StepStatus, WizardStep};
use crate::wizard::validation::ValidationMode;

#[test]
fn sequencer_clamps_at_both_ends() {
    let mut steps = StepSequencer::new();
    assert_eq!(steps.retreat(), WizardStep::Applicant);
    assert_eq!(steps.index(), 0);
    assert!(steps.is_first());

    for _ in 0..7 {
        steps.advance();
    }
    assert_eq!(steps.index(), 7);
    assert_eq!(steps.advance(), WizardStep::Confirm);
    assert_eq!(steps.index(), 7);
    assert!(steps.is_last());

    assert_eq!(steps.jump_to(42), WizardStep::Confirm);
    assert_eq!(steps.jump_to(2), WizardStep::Career);
}

#[test]
fn progress_marks_completed_active_and_pending() {
    let mut steps = StepSequencer::new();
    steps.jump_to(2);
    let progress = steps.progress();

    let statuses: Vec<StepStatus> = progress.steps.iter().map(|entry| entry.status).collect();
    assert_eq!(statuses[0], StepStatus::Completed);
    assert_eq!(statuses[1], StepStatus::Completed);
    assert_eq!(statuses[2], StepStatus::Active);
    assert!(statuses[3..].iter().all(|status| *status == StepStatus::Pending));
    assert_eq!(progress.steps[2].title, "職歴");
    assert_eq!(progress.steps[2].number, 3);
    assert!((progress.completion_ratio - 3.0 / 8.0).abs() < f32::EPSILON);
}

#[test]
fn advisory_session_walks_every_step_with_a_blank_record() {
    let mut session = WizardSession::default();
    for _ in 0..7 {
        session.next().expect("advisory mode never blocks");
    }
    assert_eq!(session.current_step(), WizardStep::Confirm);
    assert_eq!(session.next().expect("stays put"), WizardStep::Confirm);
}

#[test]
fn strict_session_refuses_to_leave_incomplete_step() {
    let mut session = WizardSession::new(ValidationMode::Strict);
    let err = session.next().expect_err("blank applicant blocks");
    match err {
        SessionError::Blocked { step, issues } => {
            assert_eq!(step, WizardStep::Applicant);
            assert!(!issues.is_empty());
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(session.current_step(), WizardStep::Applicant);

    let mut complete = WizardSession::with_record(individual_record(), ValidationMode::Strict);
    for _ in 0..7 {
        complete.next().expect("complete record passes");
    }
    assert_eq!(complete.current_step(), WizardStep::Confirm);
}

#[test]
fn submission_prefecture_defaults_from_address() {
    let mut session = WizardSession::with_record(blank_applicant_record(), ValidationMode::Advisory);
    session.jump_to(WizardStep::Submission.index());
    assert_eq!(session.record().submission_prefecture.as_str(), "大阪府");

    let mut record = blank_applicant_record();
    record.submission_prefecture = Prefecture::from("京都府");
    let mut session = WizardSession::with_record(record, ValidationMode::Advisory);
    session.jump_to(WizardStep::Submission.index());
    assert_eq!(session.record().submission_prefecture.as_str(), "京都府");
}

#[test]
fn returning_to_submission_defaults_prefecture() {
    let mut session = WizardSession::default();
    session.jump_to(WizardStep::Confirm.index());
    session.edit(FieldPatch::address(
        AddressRole::Applicant,
        AddressField::Prefecture,
        "大阪府",
    ));

    assert_eq!(session.back(), WizardStep::Submission);
    assert_eq!(session.record().submission_prefecture.as_str(), "大阪府");
}

#[test]
fn edits_replace_the_record() {
    let mut session = WizardSession::default();
    let before = session.record().clone();
    let ticket = session.edit(FieldPatch::name(Role::Manager, NameField::FirstKana, "ハナコ"));

    assert!(ticket.is_none());
    assert_eq!(session.record().manager.first_name_kana, "ハナコ");
    assert!(before.manager.first_name_kana.is_empty());
}

#[tokio::test]
async fn postal_lookup_fills_prefecture_and_city() {
    let resolver = MapResolver::with_osaka();
    let mut session = WizardSession::default();

    assert!(
        session
            .lookup_postal_code(AddressRole::Applicant, "545-0053", &resolver)
            .await
    );
    let address = &session.record().applicant.address;
    assert_eq!(address.postal_code, "545-0053");
    assert_eq!(address.prefecture.as_str(), "大阪府");
    assert_eq!(address.city, "大阪市阿倍野区松崎町");
}

#[tokio::test]
async fn postal_lookup_misses_are_silent() {
    let resolver = MapResolver::with_osaka();
    let mut session = WizardSession::default();
    session.edit(FieldPatch::address(AddressRole::Office, AddressField::City, "手入力市"));

    assert!(
        !session
            .lookup_postal_code(AddressRole::Office, "999-9999", &resolver)
            .await
    );
    assert_eq!(session.record().office.address.city, "手入力市");

    assert!(
        !session
            .lookup_postal_code(AddressRole::Office, "545-00", &resolver)
            .await
    );
    assert_eq!(resolver.calls.load(Ordering::Relaxed), 1);
}

#[test]
fn only_the_latest_lookup_is_applied() {
    let mut session = WizardSession::default();
    let first = session
        .edit_postal_code(AddressRole::Manager, "545-0053")
        .expect("complete code");
    let second = session
        .edit_postal_code(AddressRole::Manager, "5300001")
        .expect("complete code");
    let office = session
        .edit_postal_code(AddressRole::Office, "5450053")
        .expect("complete code");

    let abeno = vec![AddressCandidate::new("大阪府", "大阪市阿倍野区", "松崎町")];
    let umeda = vec![AddressCandidate::new("大阪府", "大阪市北区", "梅田")];

    assert!(session.complete_lookup(&second, Ok(umeda)));
    assert!(!session.complete_lookup(&first, Ok(abeno.clone())));
    assert_eq!(session.record().manager.address.city, "大阪市北区梅田");

    assert!(session.complete_lookup(&office, Ok(abeno)));
    assert_eq!(session.record().office.address.city, "大阪市阿倍野区松崎町");
}

#[test]
fn sample_shortcut_opens_confirmation_and_drops_pending_lookups() {
    let mut session = WizardSession::default();
    let pending = session
        .edit_postal_code(AddressRole::Applicant, "530-0001")
        .expect("complete code");

    assert_eq!(session.load_sample(), WizardStep::Confirm);
    assert_eq!(session.record(), &individual_record());

    let candidates = vec![AddressCandidate::new("大阪府", "大阪市北区", "梅田")];
    assert!(!session.complete_lookup(&pending, Ok(candidates)));
    assert_eq!(session.record().applicant.address.city, "大阪市阿倍野区松崎町");
}

#[test]
fn career_edits_respect_capacity_and_bounds() {
    let mut session = WizardSession::default();
    for _ in 0..(MAX_CAREER_ENTRIES + 2) {
        session.append_career(CareerRole::Manager);
    }
    assert_eq!(session.record().manager_career_history.len(), MAX_CAREER_ENTRIES);
    assert!(session.record().career_history.is_empty());

    session.update_career(CareerRole::Manager, 1, CareerField::Content, "入社");
    session.update_career(CareerRole::Manager, 9, CareerField::Content, "ignored");
    session.remove_career(CareerRole::Manager, 0);
    session.remove_career(CareerRole::Manager, 40);

    let history = &session.record().manager_career_history;
    assert_eq!(history.len(), MAX_CAREER_ENTRIES - 1);
    assert_eq!(history.entries()[0].content, "入社");
}

#[tokio::test]
async fn export_is_limited_to_confirmation_step() {
    let generator = ScriptedGenerator::succeeding();
    let mut session = WizardSession::default();

    let err = session
        .export_with(&generator)
        .await
        .expect_err("not on confirmation");
    assert!(matches!(err, SessionError::NotOnConfirmation));
    assert!(generator.received.lock().expect("log").is_empty());
}

#[tokio::test]
async fn successful_export_names_the_document() {
    let generator = ScriptedGenerator::succeeding();
    let mut session = WizardSession::default();
    session.load_sample();

    let document = session.export_with(&generator).await.expect("export succeeds");
    assert_eq!(document.file_name, "古物商許可申請書一式_山田太郎.pdf");
    assert_eq!(document.media_type, mime::APPLICATION_PDF);
    assert!(document.bytes.starts_with(b"%PDF"));
    assert!(!session.is_exporting());
    assert!(session.export_error().is_none());

    let received = generator.received.lock().expect("log");
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].last_name_kanji, "山田");
}

#[tokio::test]
async fn failed_export_keeps_message_until_dismissed() {
    let generator = ScriptedGenerator::failing(500, "テンプレートPDFが見つかりません");
    let mut session = WizardSession::default();
    session.load_sample();
    let before = session.record().clone();

    let err = session.export_with(&generator).await.expect_err("export fails");
    assert!(matches!(err, SessionError::Generation(_)));
    assert!(!session.is_exporting());
    assert_eq!(session.export_error(), Some("テンプレートPDFが見つかりません"));
    assert_eq!(session.record(), &before);

    session.dismiss_error();
    assert!(session.export_error().is_none());
}

#[test]
fn in_flight_export_blocks_a_second_attempt() {
    let mut session = WizardSession::default();
    session.load_sample();

    let ticket = session.begin_export().expect("first export starts");
    assert!(session.is_exporting());
    assert!(matches!(
        session.begin_export(),
        Err(SessionError::ExportInFlight)
    ));

    let outcome = session.finish_export(
        ticket,
        Err(crate::wizard::export::GenerationError::Transport(
            "connection reset".to_string(),
        )),
    );
    assert!(outcome.is_err());
    assert!(!session.is_exporting());
    assert_eq!(session.export_error(), Some(FALLBACK_FAILURE_MESSAGE));
    assert!(session.begin_export().is_ok());
}
