// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session validation rules.
//!
//! Validation is stateless: every predicate and report is recomputed from
//! the current entity graph. Problems are reported as [`ValidationIssue`]
//! values rather than returned as errors; they gate navigation and
//! submission but are never raised.

use crate::error::DomainError;
use crate::metrics::total_shots;
use crate::types::{Duty, Participant, RosterMember, SessionData, Target, TargetId, UserId};
use serde::{Deserialize, Serialize};

/// How strictly targets are checked when gating the targets step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationMode {
    /// At least one target must exist.
    #[default]
    Standard,
    /// At least one target must exist and every distance must be positive.
    Strict,
}

/// The entity a validation issue points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityRef {
    /// The session metadata.
    Session,
    /// A participant.
    Participant(UserId),
    /// A target.
    Target(TargetId),
    /// One participant's engagement on one target.
    Engagement {
        target_id: TargetId,
        user_id: UserId,
    },
}

/// A single problem found by [`validate_form`].
///
/// Each variant names the offending entity so a consumer can highlight the
/// field; `Display` renders the human-readable message. Indexes are 1-based,
/// matching what the user sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationIssue {
    MissingAssignment,
    MissingDayPeriod,
    MissingTimeToFirstShot,
    MissingEffort,
    NoParticipants,
    MissingWeapon {
        index: usize,
        user_id: UserId,
        name: String,
    },
    MissingEquipment {
        index: usize,
        user_id: UserId,
        name: String,
    },
    NoTargets,
    InvalidDistance {
        index: usize,
        target_id: TargetId,
        distance: f64,
    },
    MissingShots {
        target_index: usize,
        target_id: TargetId,
        user_id: UserId,
        name: String,
    },
    HitsExceedShots {
        target_index: usize,
        target_id: TargetId,
        user_id: UserId,
        name: String,
        shots: u32,
        hits: u32,
    },
    CombinedHitsExceedShots {
        target_index: usize,
        target_id: TargetId,
        combined_hits: u32,
        shots: u32,
    },
}

impl ValidationIssue {
    /// Returns the entity this issue concerns.
    #[must_use]
    pub fn entity(&self) -> EntityRef {
        match self {
            Self::MissingAssignment
            | Self::MissingDayPeriod
            | Self::MissingTimeToFirstShot
            | Self::MissingEffort
            | Self::NoParticipants
            | Self::NoTargets => EntityRef::Session,
            Self::MissingWeapon { user_id, .. } | Self::MissingEquipment { user_id, .. } => {
                EntityRef::Participant(user_id.clone())
            }
            Self::InvalidDistance { target_id, .. }
            | Self::CombinedHitsExceedShots { target_id, .. } => EntityRef::Target(*target_id),
            Self::MissingShots {
                target_id, user_id, ..
            }
            | Self::HitsExceedShots {
                target_id, user_id, ..
            } => EntityRef::Engagement {
                target_id: *target_id,
                user_id: user_id.clone(),
            },
        }
    }

    /// Returns the name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingAssignment => "assignment_id",
            Self::MissingDayPeriod => "day_period",
            Self::MissingTimeToFirstShot => "time_to_first_shot",
            Self::MissingEffort => "effort",
            Self::NoParticipants => "participants",
            Self::MissingWeapon { .. } => "weapon_id",
            Self::MissingEquipment { .. } => "equipment_id",
            Self::NoTargets => "targets",
            Self::InvalidDistance { .. } => "distance",
            Self::MissingShots { .. } => "shots_fired",
            Self::HitsExceedShots { .. } => "target_hits",
            Self::CombinedHitsExceedShots { .. } => "combined_hits",
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAssignment => write!(f, "Assignment is required"),
            Self::MissingDayPeriod => write!(f, "Day period is required"),
            Self::MissingTimeToFirstShot => write!(f, "Time to first shot is required"),
            Self::MissingEffort => write!(f, "Effort must be specified"),
            Self::NoParticipants => write!(f, "At least one participant is required"),
            Self::MissingWeapon { index, name, .. } => {
                write!(f, "Participant {index} ({name}): weapon is required for Sniper")
            }
            Self::MissingEquipment { index, name, .. } => {
                write!(
                    f,
                    "Participant {index} ({name}): equipment is required for Spotter"
                )
            }
            Self::NoTargets => write!(f, "At least one target is required"),
            Self::InvalidDistance { index, .. } => {
                write!(f, "Target {index}: distance must be greater than 0")
            }
            Self::MissingShots {
                target_index, name, ..
            } => write!(f, "Target {target_index}: shots fired is required for {name}"),
            Self::HitsExceedShots {
                target_index,
                name,
                shots,
                hits,
                ..
            } => write!(
                f,
                "Target {target_index}: hits ({hits}) cannot exceed shots fired ({shots}) for {name}"
            ),
            Self::CombinedHitsExceedShots {
                target_index,
                combined_hits,
                shots,
                ..
            } => write!(
                f,
                "Target {target_index}: combined hits ({combined_hits}) cannot exceed shots fired ({shots})"
            ),
        }
    }
}

fn has_positive_distance(target: &Target) -> bool {
    target.distance.is_finite() && target.distance > 0.0
}

/// Session config step: assignment, day period, time to first shot and
/// effort are all present.
#[must_use]
pub const fn validate_session_config(session: &SessionData) -> bool {
    session.assignment_id.is_some()
        && session.day_period.is_some()
        && session.time_to_first_shot.is_some()
        && session.effort.is_some()
}

/// Participants step: at least one participant and every participant has
/// the reference their duty requires.
#[must_use]
pub fn validate_participants(participants: &[Participant]) -> bool {
    !participants.is_empty() && participants.iter().all(has_required_reference)
}

fn has_required_reference(participant: &Participant) -> bool {
    match participant.duty() {
        Duty::Sniper => participant.weapon_id().is_some(),
        Duty::Spotter => participant.equipment_id().is_some(),
    }
}

/// Targets step: at least one target; in strict mode every distance must
/// also be positive.
#[must_use]
pub fn validate_targets(targets: &[Target], mode: ValidationMode) -> bool {
    if targets.is_empty() {
        return false;
    }
    match mode {
        ValidationMode::Standard => true,
        ValidationMode::Strict => targets.iter().all(has_positive_distance),
    }
}

/// Engagement consistency: every sniper has shots recorded on every target
/// and recorded hits never exceed shots.
///
/// This does not gate the engagements step; it feeds the summary check.
#[must_use]
pub fn validate_engagements(participants: &[Participant], targets: &[Target]) -> bool {
    let mut issues: Vec<ValidationIssue> = Vec::new();
    collect_engagement_issues(participants, targets, &mut issues);
    issues.is_empty()
}

/// Summary step: every earlier gate passes and engagements are consistent.
#[must_use]
pub fn validate_summary(
    session: &SessionData,
    participants: &[Participant],
    targets: &[Target],
    mode: ValidationMode,
) -> bool {
    validate_session_config(session)
        && validate_participants(participants)
        && validate_targets(targets, mode)
        && validate_engagements(participants, targets)
}

/// Runs every rule and returns the problems found, in display order.
///
/// An empty result means the session may be submitted.
#[must_use]
pub fn validate_form(
    session: &SessionData,
    participants: &[Participant],
    targets: &[Target],
) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = Vec::new();

    if session.assignment_id.is_none() {
        issues.push(ValidationIssue::MissingAssignment);
    }
    if session.day_period.is_none() {
        issues.push(ValidationIssue::MissingDayPeriod);
    }
    if session.time_to_first_shot.is_none() {
        issues.push(ValidationIssue::MissingTimeToFirstShot);
    }
    if session.effort.is_none() {
        issues.push(ValidationIssue::MissingEffort);
    }

    if participants.is_empty() {
        issues.push(ValidationIssue::NoParticipants);
    }
    for (i, participant) in participants.iter().enumerate() {
        if has_required_reference(participant) {
            continue;
        }
        let user_id: UserId = participant.user_id().clone();
        let name: String = participant.name().to_string();
        issues.push(match participant.duty() {
            Duty::Sniper => ValidationIssue::MissingWeapon {
                index: i + 1,
                user_id,
                name,
            },
            Duty::Spotter => ValidationIssue::MissingEquipment {
                index: i + 1,
                user_id,
                name,
            },
        });
    }

    if targets.is_empty() {
        issues.push(ValidationIssue::NoTargets);
    }
    for (i, target) in targets.iter().enumerate() {
        if !has_positive_distance(target) {
            issues.push(ValidationIssue::InvalidDistance {
                index: i + 1,
                target_id: target.id(),
                distance: target.distance,
            });
        }
    }

    collect_engagement_issues(participants, targets, &mut issues);

    issues
}

/// Renders [`validate_form`] as the messages shown on the review step.
#[must_use]
pub fn validate_form_messages(
    session: &SessionData,
    participants: &[Participant],
    targets: &[Target],
) -> Vec<String> {
    validate_form(session, participants, targets)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn collect_engagement_issues(
    participants: &[Participant],
    targets: &[Target],
    issues: &mut Vec<ValidationIssue>,
) {
    for (t, target) in targets.iter().enumerate() {
        let snipers = participants.iter().filter(|p| p.duty() == Duty::Sniper);
        for participant in snipers {
            let engagement = target.engagement(participant.user_id());
            let shots: Option<u32> = engagement.and_then(|e| e.shots_fired);
            let hits: Option<u32> = engagement.and_then(|e| e.target_hits);

            match (shots, hits) {
                (None, _) => issues.push(ValidationIssue::MissingShots {
                    target_index: t + 1,
                    target_id: target.id(),
                    user_id: participant.user_id().clone(),
                    name: participant.name().to_string(),
                }),
                (Some(shots), Some(hits)) if hits > shots => {
                    issues.push(ValidationIssue::HitsExceedShots {
                        target_index: t + 1,
                        target_id: target.id(),
                        user_id: participant.user_id().clone(),
                        name: participant.name().to_string(),
                        shots,
                        hits,
                    });
                }
                _ => {}
            }
        }

        let shots: u32 = total_shots(target);
        if let Some(combined_hits) = target.combined_hits.filter(|hits| *hits > shots) {
            issues.push(ValidationIssue::CombinedHitsExceedShots {
                target_index: t + 1,
                target_id: target.id(),
                combined_hits,
                shots,
            });
        }
    }
}

/// Validates a roster record before it is stored.
///
/// # Errors
///
/// Returns an error if the member id or name is empty.
pub fn validate_roster_member(member: &RosterMember) -> Result<(), DomainError> {
    if member.id.value().trim().is_empty() {
        return Err(DomainError::EmptyIdentifier { kind: "user" });
    }
    if member.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(())
}
