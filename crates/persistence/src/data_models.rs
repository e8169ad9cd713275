// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The submission payload and the records the store returns.
//!
//! Field names follow the wire shape the session service expects, which
//! mixes `snake_case` and `camelCase`.

use serde::{Deserialize, Serialize};
use shotlog_domain::{
    Assignment, AssignmentId, DayPeriod, Duty, Equipment, EquipmentId, Position, RosterMember,
    SessionId, TeamId, UserId, Weapon, WeaponId, WindDirection, WindStrength, saturating_total,
};

/// A complete training session, flattened for submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    #[serde(rename = "sessionData")]
    pub session_data: SessionDataPayload,
    pub participants: Vec<ParticipantPayload>,
    pub targets: Vec<TargetPayload>,
    #[serde(rename = "currentUser")]
    pub current_user: Option<CurrentUserPayload>,
}

impl SessionPayload {
    /// Sum of shots fired across every engagement.
    #[must_use]
    pub fn total_shots(&self) -> u32 {
        saturating_total(
            self.targets
                .iter()
                .flat_map(|t| &t.engagements)
                .map(|e| e.shots_fired),
        )
    }

    /// Sum of each target's reported hit total.
    #[must_use]
    pub fn total_hits(&self) -> u32 {
        saturating_total(self.targets.iter().map(|t| t.total_hits))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDataPayload {
    pub training_session_id: Option<SessionId>,
    pub assignment_id: Option<AssignmentId>,
    pub team_id: Option<TeamId>,
    #[serde(rename = "dayPeriod")]
    pub day_period: Option<DayPeriod>,
    #[serde(rename = "timeToFirstShot")]
    pub time_to_first_shot: Option<u32>,
    pub note: Option<String>,
    /// Unset effort is submitted as `false`.
    pub effort: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantPayload {
    pub user_id: UserId,
    pub user_duty: Duty,
    pub weapon_id: Option<WeaponId>,
    pub equipment_id: Option<EquipmentId>,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPayload {
    pub distance: f64,
    #[serde(
        rename = "windStrength",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wind_strength: Option<WindStrength>,
    #[serde(
        rename = "windDirection",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub wind_direction: Option<WindDirection>,
    /// The combined figure when one was entered, otherwise the summed hits.
    #[serde(rename = "totalHits")]
    pub total_hits: u32,
    #[serde(rename = "mistakeCode", default, skip_serializing_if = "Option::is_none")]
    pub mistake_code: Option<String>,
    pub first_shot_hit: Option<bool>,
    pub engagements: Vec<EngagementPayload>,
}

/// Cleared inputs are submitted as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementPayload {
    pub user_id: UserId,
    pub shots_fired: u32,
    pub target_hits: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUserPayload {
    pub id: UserId,
}

/// A session as previously stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSession {
    pub session_id: SessionId,
    pub payload: SessionPayload,
    pub submitted_at: String,
    pub updated_at: Option<String>,
}

/// One row of the stored-session listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub assignment_id: Option<AssignmentId>,
    pub day_period: Option<DayPeriod>,
    pub created_by: Option<UserId>,
    pub participant_count: u32,
    pub target_count: u32,
    pub total_shots: u32,
    pub total_hits: u32,
    pub submitted_at: String,
    pub updated_at: Option<String>,
}

/// Catalogs and roster loaded in one pass, as read from a seed file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSeed {
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    #[serde(default)]
    pub members: Vec<RosterMember>,
}
