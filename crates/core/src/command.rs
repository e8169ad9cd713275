// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use shotlog_domain::{
    AssignmentId, DayPeriod, Duty, EquipmentId, Position, SquadId, TargetId, TeamId, UserId,
    WeaponId, WindDirection, WindStrength,
};

/// A single-field change to a participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticipantUpdate {
    /// Changing duty category clears the reference the new duty does not use.
    Duty(Duty),
    Position(Position),
    Weapon(Option<WeaponId>),
    Equipment(Option<EquipmentId>),
}

/// A single-field change to a target. Engagements are never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TargetUpdate {
    Distance(f64),
    WindStrength(Option<WindStrength>),
    WindDirection(Option<WindDirection>),
    MistakeCode(Option<String>),
    FirstShotHit(Option<bool>),
    CombinedHits(Option<u32>),
}

/// A single-field change to one engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementUpdate {
    ShotsFired(Option<u32>),
    TargetHits(Option<u32>),
}

/// A single-field change to the session metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionUpdate {
    Assignment(Option<AssignmentId>),
    DayPeriod(Option<DayPeriod>),
    TimeToFirstShot(Option<u32>),
    Note(Option<String>),
    Squad(Option<SquadId>),
    Team(Option<TeamId>),
    Effort(Option<bool>),
}

/// A command represents an edit to the session as data only.
///
/// Commands are the only way to change a session. Every command is total:
/// unknown ids and forbidden edits (such as removing the initiating user)
/// are silent no-ops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Add one roster member as a participant.
    AddParticipant {
        /// The roster member to add.
        member_id: UserId,
    },
    /// Add several roster members in one pass.
    AddParticipantsBulk {
        /// The roster members to add, in order.
        member_ids: Vec<UserId>,
    },
    /// Add every roster member of a squad.
    AddSquad {
        /// The squad to add.
        squad_id: SquadId,
    },
    /// Remove a participant and their engagements.
    RemoveParticipant {
        /// The participant to remove.
        user_id: UserId,
    },
    /// Apply one or more field updates to a participant, in order.
    UpdateParticipant {
        /// The participant to update.
        user_id: UserId,
        /// The updates to apply.
        updates: Vec<ParticipantUpdate>,
    },
    /// Append a target at the default distance.
    AddTarget,
    /// Remove a target and its engagements.
    RemoveTarget {
        /// The target to remove.
        target_id: TargetId,
    },
    /// Update one field of a target.
    UpdateTarget {
        /// The target to update.
        target_id: TargetId,
        /// The update to apply.
        update: TargetUpdate,
    },
    /// Update one field of a participant's engagement on a target.
    UpdateEngagement {
        /// The target the engagement belongs to.
        target_id: TargetId,
        /// The participant the engagement belongs to.
        user_id: UserId,
        /// The update to apply.
        update: EngagementUpdate,
    },
    /// Update one field of the session metadata.
    UpdateSession {
        /// The update to apply.
        update: SessionUpdate,
    },
    /// Record a combined hit total for a target and split it across its
    /// engagements by share of shots fired.
    DistributeHits {
        /// The target to distribute hits on.
        target_id: TargetId,
        /// The combined hit total.
        combined_hits: u32,
    },
    /// Discard everything and start over with only the initiating user.
    Reset,
}

impl Command {
    /// Returns the command name used in the edit journal.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddParticipant { .. } => "AddParticipant",
            Self::AddParticipantsBulk { .. } => "AddParticipantsBulk",
            Self::AddSquad { .. } => "AddSquad",
            Self::RemoveParticipant { .. } => "RemoveParticipant",
            Self::UpdateParticipant { .. } => "UpdateParticipant",
            Self::AddTarget => "AddTarget",
            Self::RemoveTarget { .. } => "RemoveTarget",
            Self::UpdateTarget { .. } => "UpdateTarget",
            Self::UpdateEngagement { .. } => "UpdateEngagement",
            Self::UpdateSession { .. } => "UpdateSession",
            Self::DistributeHits { .. } => "DistributeHits",
            Self::Reset => "Reset",
        }
    }

    /// Returns a short human-readable description for the edit journal.
    #[must_use]
    pub fn describe(&self) -> Option<String> {
        match self {
            Self::AddParticipant { member_id } => Some(format!("Added participant {member_id}")),
            Self::AddParticipantsBulk { member_ids } => {
                Some(format!("Added {} participants", member_ids.len()))
            }
            Self::AddSquad { squad_id } => Some(format!("Added squad {squad_id}")),
            Self::RemoveParticipant { user_id } => {
                Some(format!("Removed participant {user_id}"))
            }
            Self::UpdateParticipant { user_id, updates } => Some(format!(
                "Updated {} field(s) of participant {user_id}",
                updates.len()
            )),
            Self::RemoveTarget { target_id } => Some(format!("Removed target {target_id}")),
            Self::UpdateTarget { target_id, .. } => Some(format!("Updated target {target_id}")),
            Self::UpdateEngagement {
                target_id, user_id, ..
            } => Some(format!(
                "Updated engagement of {user_id} on target {target_id}"
            )),
            Self::DistributeHits {
                target_id,
                combined_hits,
            } => Some(format!(
                "Distributed {combined_hits} hits on target {target_id}"
            )),
            Self::AddTarget | Self::UpdateSession { .. } | Self::Reset => None,
        }
    }
}
