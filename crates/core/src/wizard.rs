// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Step gating for the editing wizard.
//!
//! Whether a step may be left is computed, not stored. It's a pure function
//! of the current session state and the validation mode.

use crate::error::CoreError;
use crate::state::SessionState;
use serde::{Deserialize, Serialize};
use shotlog_domain::{
    ValidationMode, validate_participants, validate_session_config, validate_summary,
    validate_targets,
};
use tracing::debug;

/// The steps of the editing wizard, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WizardStep {
    SessionConfig,
    Participants,
    Targets,
    Engagements,
    Summary,
}

impl WizardStep {
    /// Every step, first to last.
    pub const ALL: [Self; 5] = [
        Self::SessionConfig,
        Self::Participants,
        Self::Targets,
        Self::Engagements,
        Self::Summary,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SessionConfig => "session config",
            Self::Participants => "participants",
            Self::Targets => "targets",
            Self::Engagements => "engagements",
            Self::Summary => "summary",
        }
    }

    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::SessionConfig => Some(Self::Participants),
            Self::Participants => Some(Self::Targets),
            Self::Targets => Some(Self::Engagements),
            Self::Engagements => Some(Self::Summary),
            Self::Summary => None,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::SessionConfig => None,
            Self::Participants => Some(Self::SessionConfig),
            Self::Targets => Some(Self::Participants),
            Self::Engagements => Some(Self::Targets),
            Self::Summary => Some(Self::Engagements),
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tracks the current wizard step and enforces the step gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard {
    current: WizardStep,
    mode: ValidationMode,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(ValidationMode::Standard)
    }
}

impl Wizard {
    /// Creates a wizard positioned on the first step.
    #[must_use]
    pub const fn new(mode: ValidationMode) -> Self {
        Self {
            current: WizardStep::SessionConfig,
            mode,
        }
    }

    #[must_use]
    pub const fn current(&self) -> WizardStep {
        self.current
    }

    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Returns whether `step`'s data is complete enough to leave it.
    ///
    /// The engagements step has no gate of its own; its consistency is
    /// checked on the summary step.
    #[must_use]
    pub fn is_step_valid(&self, step: WizardStep, state: &SessionState) -> bool {
        match step {
            WizardStep::SessionConfig => validate_session_config(state.session()),
            WizardStep::Participants => validate_participants(state.participants()),
            WizardStep::Targets => validate_targets(state.targets(), self.mode),
            WizardStep::Engagements => true,
            WizardStep::Summary => self.can_submit(state),
        }
    }

    /// Returns whether the wizard may move forward from the current step.
    #[must_use]
    pub fn can_advance(&self, state: &SessionState) -> bool {
        self.current.next().is_some() && self.is_step_valid(self.current, state)
    }

    /// Returns whether the whole session passes every gate.
    #[must_use]
    pub fn can_submit(&self, state: &SessionState) -> bool {
        validate_summary(
            state.session(),
            state.participants(),
            state.targets(),
            self.mode,
        )
    }

    /// Moves to the next step.
    ///
    /// # Errors
    ///
    /// Returns an error if the current step is incomplete or is the last step.
    pub fn advance(&mut self, state: &SessionState) -> Result<WizardStep, CoreError> {
        let Some(next) = self.current.next() else {
            return Err(CoreError::AtLastStep);
        };
        if !self.is_step_valid(self.current, state) {
            debug!(step = %self.current, "Step incomplete, navigation blocked");
            return Err(CoreError::StepBlocked { step: self.current });
        }
        self.current = next;
        Ok(next)
    }

    /// Moves to the previous step. Going back is never gated.
    ///
    /// # Errors
    ///
    /// Returns an error if the current step is the first step.
    pub fn back(&mut self) -> Result<WizardStep, CoreError> {
        let previous: WizardStep = self.current.previous().ok_or(CoreError::AtFirstStep)?;
        self.current = previous;
        Ok(previous)
    }

    /// Returns to the first step.
    pub fn restart(&mut self) {
        self.current = WizardStep::SessionConfig;
    }
}
