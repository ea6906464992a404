use crate::infra::{load_record, StaticAddressDirectory};
use clap::Args;
use permit_wizard::config::AppConfig;
use permit_wizard::error::AppError;
use permit_wizard::wizard::confirmation::NOT_ENTERED;
use permit_wizard::wizard::{
    AddressField, AddressRole, CareerField, CareerRole, ConfirmationView, DateField, Era,
    FieldPatch, HttpDocumentGenerator, ManagerSection, NameField, OfficeNameField, Role,
    StepStatus, ValidationMode, WizardSession, WizardStep,
};
use std::fmt;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ConfirmArgs {
    /// Flat record JSON (generator field names). Defaults to the sample record.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Print the summary as JSON instead of text.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ExportArgs {
    /// Flat record JSON (generator field names). Defaults to the sample record.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Where to write the document. Defaults to the suggested download name.
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Grade step findings as blocking errors.
    #[arg(long)]
    pub(crate) strict: bool,
}

pub(crate) async fn run_confirm(args: ConfirmArgs) -> Result<(), AppError> {
    let record = load_record(args.input.as_deref()).await?;
    let view = record.confirmation();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", ConfirmationText(&view));
    }
    Ok(())
}

pub(crate) async fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let record = load_record(args.input.as_deref()).await?;
    let generator = HttpDocumentGenerator::new(&config.generator)?;

    let mut session = WizardSession::with_record(record, config.wizard.validation_mode);
    session.jump_to(WizardStep::Confirm.index());
    let document = session.export_with(&generator).await?;

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(&document.file_name));
    tokio::fs::write(&output, &document.bytes).await?;

    println!(
        "Wrote {} ({} bytes, {}) at {}",
        output.display(),
        document.bytes.len(),
        document.media_type,
        document.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let mode = if args.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Advisory
    };
    let directory = StaticAddressDirectory::default();
    let mut session = WizardSession::new(mode);

    println!("Permit wizard demo ({} validation)", mode.label());

    let issues = session.issues_for_current_step();
    let blocking = issues.iter().filter(|issue| issue.blocks()).count();
    println!(
        "- empty {} step: {} finding(s), {} blocking",
        session.current_step().title(),
        issues.len(),
        blocking
    );

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
    advance(&mut session)?;

    let filled = session
        .lookup_postal_code(AddressRole::Applicant, "060-0001", &directory)
        .await;
    println!(
        "- postal lookup 060-0001 {}: {}{}",
        if filled { "filled" } else { "missed" },
        session.record().applicant.address.prefecture.as_str(),
        session.record().applicant.address.city
    );
    session.edit(FieldPatch::address(AddressRole::Applicant, AddressField::Street, "1-1"));
    session.edit(FieldPatch::address(
        AddressRole::Applicant,
        AddressField::Phone,
        "011-123-4567",
    ));
    advance(&mut session)?;

    session.append_career(CareerRole::Applicant);
    session.update_career(CareerRole::Applicant, 0, CareerField::Year, "2001");
    session.update_career(CareerRole::Applicant, 0, CareerField::Month, "4");
    session.update_career(CareerRole::Applicant, 0, CareerField::Content, "札幌商会 入社");
    advance(&mut session)?;

    session.edit(FieldPatch::OfficeName {
        name: OfficeNameField::Kanji,
        value: "佐藤リサイクル".to_string(),
    });
    session.edit(FieldPatch::OfficeName {
        name: OfficeNameField::Kana,
        value: "サトウリサイクル".to_string(),
    });
    while session.current_step() != WizardStep::Confirm {
        advance(&mut session)?;
    }

    println!();
    print!("{}", ConfirmationText(&session.confirmation()));
    Ok(())
}

fn advance(session: &mut WizardSession) -> Result<(), AppError> {
    let from = session.current_step();
    let to = session.next()?;
    let progress = session.progress();
    let completed = progress
        .steps
        .iter()
        .filter(|entry| entry.status == StepStatus::Completed)
        .count();
    println!(
        "- {} -> {} ({}/{} complete, {:.0}%)",
        from.title(),
        to.title(),
        completed,
        WizardStep::COUNT,
        progress.completion_ratio * 100.0
    );
    Ok(())
}

fn lines_or_sentinel(lines: &[String]) -> Vec<&str> {
    if lines.is_empty() {
        vec![NOT_ENTERED]
    } else {
        lines.iter().map(String::as_str).collect()
    }
}

/// Plain-text rendering of the confirmation summary.
pub(crate) struct ConfirmationText<'a>(pub(crate) &'a ConfirmationView);

impl fmt::Display for ConfirmationText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "【申請者情報】")?;
        writeln!(f, "  区分: {}", view.applicant.kind_label)?;
        if let Some(corporation) = &view.applicant.corporation {
            writeln!(f, "  法人種別: {}", corporation.type_label)?;
            writeln!(f, "  法人名: {}", corporation.name)?;
        }
        writeln!(f, "  氏名: {}", view.applicant.name_kanji)?;
        writeln!(f, "  フリガナ: {}", view.applicant.name_kana)?;
        writeln!(f, "  生年月日: {}", view.applicant.birth_date)?;

        writeln!(f, "【住所】")?;
        writeln!(f, "  住所: {}", view.address.address)?;
        writeln!(f, "  電話: {}", view.address.phone)?;

        writeln!(f, "【職歴】")?;
        for line in lines_or_sentinel(&view.career) {
            writeln!(f, "  {line}")?;
        }

        writeln!(f, "【営業所】")?;
        writeln!(f, "  名称: {}", view.office.name_kanji)?;
        writeln!(f, "  フリガナ: {}", view.office.name_kana)?;
        writeln!(f, "  所在地: {}", view.office.location)?;
        writeln!(f, "  取扱品目: {}", view.office.handled_goods)?;

        writeln!(f, "【管理者】")?;
        match &view.manager {
            ManagerSection::SameAsApplicant { label } => writeln!(f, "  {label}")?,
            ManagerSection::Distinct(manager) => {
                writeln!(f, "  氏名: {}", manager.name_kanji)?;
                writeln!(f, "  フリガナ: {}", manager.name_kana)?;
                writeln!(f, "  生年月日: {}", manager.birth_date)?;
                writeln!(f, "  住所: {}", manager.address)?;
                writeln!(f, "  職歴:")?;
                for line in lines_or_sentinel(&manager.career) {
                    writeln!(f, "    {line}")?;
                }
            }
        }

        writeln!(f, "【ホームページ】")?;
        writeln!(f, "  {}", view.website.summary)?;

        writeln!(f, "【申請情報】")?;
        writeln!(f, "  申請日: {}", view.submission.application_date)?;
        writeln!(f, "  提出先: {}", view.submission.submit_to)?;

        writeln!(f, "【固定項目】")?;
        for item in &view.fixed_items {
            writeln!(f, "  {}: {}", item.label, item.value)?;
        }
        Ok(())
    }
}
