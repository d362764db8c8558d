//! Per-step outcomes and the summary of a launch.

use std::path::PathBuf;
use std::time::Duration;

use crate::requirements::RuntimeInfo;

/// The discrete actions of a launch, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    RuntimeCheck,
    PipUpgrade,
    Install,
    Generate,
}

impl Step {
    /// Short label for summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::RuntimeCheck => "Python check",
            Self::PipUpgrade => "pip upgrade",
            Self::Install => "Dependencies",
            Self::Generate => "Presentation",
        }
    }
}

/// How a step ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Ran and exited 0.
    Succeeded,
    /// Ran and failed, but the launch carried on.
    Ignored,
    /// Dry run: would have run.
    Planned,
}

/// Result of one step that did not abort the launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    pub status: StepStatus,
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

impl StepOutcome {
    /// A step that exited 0.
    pub fn succeeded(step: Step, duration: Duration) -> Self {
        Self {
            step,
            status: StepStatus::Succeeded,
            exit_code: Some(0),
            duration,
        }
    }

    /// A failed step whose failure is tolerated.
    pub fn ignored(step: Step, exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            step,
            status: StepStatus::Ignored,
            exit_code,
            duration,
        }
    }

    /// A step skipped by a dry run.
    pub fn planned(step: Step) -> Self {
        Self {
            step,
            status: StepStatus::Planned,
            exit_code: None,
            duration: Duration::ZERO,
        }
    }
}

/// Summary of a launch that reached the end without a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    /// The interpreter everything ran under.
    pub runtime: RuntimeInfo,

    /// Where the generator was expected to write the presentation.
    pub output_path: PathBuf,

    /// Outcome of every step, in order.
    pub steps: Vec<StepOutcome>,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Wall time of the whole launch.
    pub total_duration: Duration,
}

impl LaunchReport {
    /// Outcome of a specific step, if it was reached.
    pub fn step(&self, step: Step) -> Option<&StepOutcome> {
        self.steps.iter().find(|o| o.step == step)
    }

    /// Steps whose failure was tolerated.
    pub fn ignored_steps(&self) -> Vec<Step> {
        self.steps
            .iter()
            .filter(|o| o.status == StepStatus::Ignored)
            .map(|o| o.step)
            .collect()
    }
}
