use std::collections::HashMap;

use tracing::{debug, info, warn};

use super::address::{
    apply_first_candidate, lookup_key, AddressCandidate, AddressResolver, LookupError,
    LookupTicket,
};
use super::career::CareerField;
use super::confirmation::{ConfirmationView, GenerationPayload};
use super::domain::FormRecord;
use super::export::{generate_document, DocumentGenerator, GeneratedDocument, GenerationError};
use super::fields::{AddressField, AddressRole, CareerRole};
use super::patch::FieldPatch;
use super::sample::sample_record;
use super::steps::{StepProgress, StepSequencer, WizardStep};
use super::validation::{validate_step, FieldIssue, ValidationMode};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("step '{}' has {} blocking issue(s)", .step.id(), .issues.len())]
    Blocked {
        step: WizardStep,
        issues: Vec<FieldIssue>,
    },
    #[error("export is only available on the confirmation step")]
    NotOnConfirmation,
    #[error("an export is already in progress")]
    ExportInFlight,
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Handle for one export attempt; a newer attempt makes older handles stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTicket {
    attempt: u64,
}

#[derive(Debug, Clone, Default)]
struct ExportState {
    in_flight: bool,
    attempt: u64,
    last_error: Option<String>,
}

/// Owns the one live record for a questionnaire run and the cursor over its steps.
#[derive(Debug, Clone, Default)]
pub struct WizardSession {
    record: FormRecord,
    steps: StepSequencer,
    mode: ValidationMode,
    lookup_generations: HashMap<AddressRole, u64>,
    export: ExportState,
}

impl WizardSession {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_record(record: FormRecord, mode: ValidationMode) -> Self {
        Self {
            record,
            mode,
            ..Self::default()
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn current_step(&self) -> WizardStep {
        self.steps.current()
    }

    pub fn step_index(&self) -> usize {
        self.steps.index()
    }

    pub fn progress(&self) -> StepProgress {
        self.steps.progress()
    }

    /// Replaces one field. Postal-code edits hand back a ticket when the
    /// value is complete enough to look up.
    pub fn edit(&mut self, patch: FieldPatch) -> Option<LookupTicket> {
        let postal_edit = match &patch {
            FieldPatch::Address {
                role,
                part: AddressField::PostalCode,
                value,
            } => Some((*role, value.clone())),
            _ => None,
        };

        self.record = self.record.patch(patch);

        let (role, value) = postal_edit?;
        let generation = self.bump_lookup_generation(role);
        lookup_key(&value).map(|postal_code| LookupTicket {
            role,
            postal_code,
            generation,
        })
    }

    pub fn edit_postal_code(
        &mut self,
        role: AddressRole,
        value: impl Into<String>,
    ) -> Option<LookupTicket> {
        self.edit(FieldPatch::address(role, AddressField::PostalCode, value))
    }

    fn bump_lookup_generation(&mut self, role: AddressRole) -> u64 {
        let generation = self.lookup_generations.entry(role).or_default();
        *generation += 1;
        *generation
    }

    fn is_current(&self, ticket: &LookupTicket) -> bool {
        self.lookup_generations.get(&ticket.role).copied() == Some(ticket.generation)
    }

    /// Applies a lookup result if it answers the latest postal-code edit for its role.
    ///
    /// Returns whether the record changed. Misses and stale answers leave it untouched.
    pub fn complete_lookup(
        &mut self,
        ticket: &LookupTicket,
        outcome: Result<Vec<AddressCandidate>, LookupError>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(role = ?ticket.role, generation = ticket.generation, "stale address lookup dropped");
            return false;
        }

        let candidates = match outcome {
            Ok(candidates) => candidates,
            Err(err) => {
                debug!(role = ?ticket.role, error = %err, "address lookup missed");
                return false;
            }
        };

        match apply_first_candidate(&self.record, ticket.role, &candidates) {
            Some(next) => {
                self.record = next;
                true
            }
            None => {
                debug!(role = ?ticket.role, postal_code = %ticket.postal_code, "address lookup returned no candidates");
                false
            }
        }
    }

    /// Edits a postal code and, when it is complete, resolves it right away.
    pub async fn lookup_postal_code<R>(
        &mut self,
        role: AddressRole,
        value: impl Into<String>,
        resolver: &R,
    ) -> bool
    where
        R: AddressResolver + ?Sized,
    {
        let Some(ticket) = self.edit_postal_code(role, value) else {
            return false;
        };
        let outcome = resolver.resolve(&ticket.postal_code).await;
        self.complete_lookup(&ticket, outcome)
    }

    pub fn append_career(&mut self, role: CareerRole) {
        let value = self.record.career(role).appended();
        self.edit(FieldPatch::CareerHistory { role, value });
    }

    pub fn remove_career(&mut self, role: CareerRole, index: usize) {
        let value = self.record.career(role).removed(index);
        self.edit(FieldPatch::CareerHistory { role, value });
    }

    pub fn update_career(
        &mut self,
        role: CareerRole,
        index: usize,
        field: CareerField,
        value: impl Into<String>,
    ) {
        let value = self.record.career(role).with_field(index, field, value);
        self.edit(FieldPatch::CareerHistory { role, value });
    }

    pub fn issues_for_current_step(&self) -> Vec<FieldIssue> {
        validate_step(&self.record, self.current_step(), self.mode)
    }

    /// Moves forward one step. Only strict mode can refuse.
    pub fn next(&mut self) -> Result<WizardStep, SessionError> {
        let step = self.current_step();
        let issues = self.issues_for_current_step();
        if issues.iter().any(FieldIssue::blocks) {
            debug!(step = step.id(), count = issues.len(), "step change blocked");
            return Err(SessionError::Blocked { step, issues });
        }

        let next = self.steps.advance();
        self.on_enter(next);
        Ok(next)
    }

    pub fn back(&mut self) -> WizardStep {
        let step = self.steps.retreat();
        self.on_enter(step);
        step
    }

    /// Jumps to `index`, clamped to the last step.
    pub fn jump_to(&mut self, index: usize) -> WizardStep {
        let step = self.steps.jump_to(index);
        self.on_enter(step);
        step
    }

    fn on_enter(&mut self, step: WizardStep) {
        if step != WizardStep::Submission || !self.record.submission_prefecture.is_empty() {
            return;
        }
        let home = self.record.applicant.address.prefecture.clone();
        if !home.is_empty() {
            debug!(prefecture = home.as_str(), "submission prefecture defaulted from address");
            self.record = self
                .record
                .patch(FieldPatch::SubmissionPrefecture { value: home });
        }
    }

    /// Replaces the record with the demo sample and opens the confirmation step.
    ///
    /// Lookups still in flight are invalidated.
    pub fn load_sample(&mut self) -> WizardStep {
        self.record = sample_record();
        for role in AddressRole::ordered() {
            self.bump_lookup_generation(role);
        }
        info!("sample record loaded");
        self.steps.jump_to_step(WizardStep::Confirm)
    }

    pub fn confirmation(&self) -> ConfirmationView {
        self.record.confirmation()
    }

    pub fn payload(&self) -> GenerationPayload {
        GenerationPayload::from(&self.record)
    }

    pub fn is_exporting(&self) -> bool {
        self.export.in_flight
    }

    pub fn export_error(&self) -> Option<&str> {
        self.export.last_error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.export.last_error = None;
    }

    /// Marks an export as started. Refused off the confirmation step or while
    /// another export is outstanding.
    pub fn begin_export(&mut self) -> Result<ExportTicket, SessionError> {
        if self.current_step() != WizardStep::Confirm {
            return Err(SessionError::NotOnConfirmation);
        }
        if self.export.in_flight {
            return Err(SessionError::ExportInFlight);
        }

        self.export.in_flight = true;
        self.export.attempt += 1;
        self.export.last_error = None;
        Ok(ExportTicket {
            attempt: self.export.attempt,
        })
    }

    /// Records the outcome of an export and re-enables the action.
    pub fn finish_export(
        &mut self,
        ticket: ExportTicket,
        outcome: Result<GeneratedDocument, GenerationError>,
    ) -> Result<GeneratedDocument, GenerationError> {
        if ticket.attempt == self.export.attempt {
            self.export.in_flight = false;
            if let Err(err) = &outcome {
                warn!(error = %err, "document export failed");
                self.export.last_error = Some(err.user_message().to_string());
            }
        } else {
            debug!(attempt = ticket.attempt, "outdated export result");
        }
        outcome
    }

    pub async fn export_with<G>(&mut self, generator: &G) -> Result<GeneratedDocument, SessionError>
    where
        G: DocumentGenerator + ?Sized,
    {
        let ticket = self.begin_export()?;
        let outcome = generate_document(generator, &self.record).await;
        Ok(self.finish_export(ticket, outcome)?)
    }
}
