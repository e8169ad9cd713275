// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod metrics;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use metrics::{
    Accuracy, SessionTotals, UserTotals, accuracy, distribute_hits, reported_hits,
    saturating_total, session_totals, total_hits, total_shots, user_totals,
};
pub use types::{
    Assignment, AssignmentId, DEFAULT_TARGET_DISTANCE, DayPeriod, Duty, Engagement, Equipment,
    EquipmentId, Participant, Position, Roster, RosterMember, SessionData, SessionId, SquadId,
    Target, TargetId, TeamId, UserId, Weapon, WeaponId, WindDirection, WindStrength,
};
pub use validation::{
    EntityRef, ValidationIssue, ValidationMode, validate_engagements, validate_form,
    validate_form_messages, validate_participants, validate_roster_member, validate_session_config,
    validate_summary, validate_targets,
};
