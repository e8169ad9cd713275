// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::wizard::WizardStep;

/// Errors that can occur while navigating the editing wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// The current step's data is incomplete, so navigation forward is disabled.
    StepBlocked {
        /// The step that blocked navigation.
        step: WizardStep,
    },
    /// There is no step before the current one.
    AtFirstStep,
    /// There is no step after the current one.
    AtLastStep,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepBlocked { step } => {
                write!(f, "Cannot continue: the {step} step is incomplete")
            }
            Self::AtFirstStep => write!(f, "Already at the first step"),
            Self::AtLastStep => write!(f, "Already at the last step"),
        }
    }
}

impl std::error::Error for CoreError {}
