use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Applicant,
    Address,
    Career,
    Office,
    Manager,
    Website,
    Submission,
    Confirm,
}

impl WizardStep {
    pub const COUNT: usize = 8;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Applicant,
            Self::Address,
            Self::Career,
            Self::Office,
            Self::Manager,
            Self::Website,
            Self::Submission,
            Self::Confirm,
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Applicant => "applicant",
            Self::Address => "address",
            Self::Career => "career",
            Self::Office => "office",
            Self::Manager => "manager",
            Self::Website => "website",
            Self::Submission => "submission",
            Self::Confirm => "confirm",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Applicant => "申請者情報",
            Self::Address => "住所",
            Self::Career => "職歴",
            Self::Office => "営業所",
            Self::Manager => "管理者",
            Self::Website => "ホームページ",
            Self::Submission => "申請情報",
            Self::Confirm => "確認",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepProgressEntry {
    pub step: WizardStep,
    pub number: usize,
    pub title: &'static str,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepProgress {
    pub steps: Vec<StepProgressEntry>,
    pub completion_ratio: f32,
}

/// Linear cursor over [`WizardStep::ordered`].
///
/// Moves are clamped to the first and last step; nothing here inspects the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSequencer {
    index: usize,
}

impl StepSequencer {
    const LAST: usize = WizardStep::COUNT - 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> WizardStep {
        WizardStep::ordered()[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == Self::LAST
    }

    pub fn advance(&mut self) -> WizardStep {
        self.index = (self.index + 1).min(Self::LAST);
        self.current()
    }

    pub fn retreat(&mut self) -> WizardStep {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Moves straight to `index`, clamping anything past the last step.
    pub fn jump_to(&mut self, index: usize) -> WizardStep {
        if index > Self::LAST {
            debug!(index, "step jump clamped to last step");
        }
        self.index = index.min(Self::LAST);
        self.current()
    }

    pub fn jump_to_step(&mut self, step: WizardStep) -> WizardStep {
        self.jump_to(step.index())
    }

    pub fn progress(&self) -> StepProgress {
        let steps = WizardStep::ordered()
            .into_iter()
            .map(|step| {
                let status = match step.index() {
                    position if position < self.index => StepStatus::Completed,
                    position if position == self.index => StepStatus::Active,
                    _ => StepStatus::Pending,
                };
                StepProgressEntry {
                    step,
                    number: step.index() + 1,
                    title: step.title(),
                    status,
                }
            })
            .collect();

        StepProgress {
            steps,
            completion_ratio: (self.index + 1) as f32 / WizardStep::COUNT as f32,
        }
    }
}
