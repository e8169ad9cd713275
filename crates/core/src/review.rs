// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::SessionState;
use serde::{Deserialize, Serialize};
use shotlog_domain::{
    Accuracy, SessionTotals, Target, TargetId, UserTotals, accuracy, reported_hits,
    session_totals, total_shots, user_totals, validate_form_messages,
};

/// Per-target figures shown on the summary step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSummary {
    pub target_id: TargetId,
    pub distance: f64,
    pub shots: u32,
    /// The combined figure when one was entered, otherwise the summed hits.
    pub hits: u32,
    pub accuracy: Accuracy,
}

impl TargetSummary {
    fn from_target(target: &Target) -> Self {
        let shots: u32 = total_shots(target);
        let hits: u32 = reported_hits(target);
        Self {
            target_id: target.id(),
            distance: target.distance,
            shots,
            hits,
            accuracy: accuracy(shots, hits),
        }
    }
}

/// Everything the summary step displays, recomputed from a state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReview {
    pub totals: SessionTotals,
    pub users: Vec<UserTotals>,
    pub targets: Vec<TargetSummary>,
    /// Validation messages in display order; empty when submittable.
    pub issues: Vec<String>,
}

impl SessionReview {
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            totals: session_totals(state.participants(), state.targets()),
            users: user_totals(state.participants(), state.targets()),
            targets: state
                .targets()
                .iter()
                .map(TargetSummary::from_target)
                .collect(),
            issues: validate_form_messages(state.session(), state.participants(), state.targets()),
        }
    }

    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.issues.is_empty()
    }
}

impl std::fmt::Display for SessionReview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} participant(s), {} target(s), {} shot(s), {} hit(s), accuracy {}",
            self.totals.participants,
            self.totals.targets,
            self.totals.shots,
            self.totals.hits,
            self.totals.accuracy
        )?;
        for user in &self.users {
            writeln!(
                f,
                "  {}: {}/{} ({})",
                user.name, user.hits, user.shots, user.accuracy
            )?;
        }
        for target in &self.targets {
            writeln!(
                f,
                "  target {} @ {}m: {}/{} ({})",
                target.target_id, target.distance, target.hits, target.shots, target.accuracy
            )?;
        }
        for issue in &self.issues {
            writeln!(f, "  ! {issue}")?;
        }
        Ok(())
    }
}
