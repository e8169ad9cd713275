// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Distance, in metres, given to a newly added target.
pub const DEFAULT_TARGET_DISTANCE: f64 = 100.0;

/// Generates an opaque, string-backed identifier type.
///
/// Identifiers are issued by external collaborators (roster, catalogs,
/// assignment lists, the session store) and are never interpreted locally.
macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name {
            value: String,
        }

        impl $name {
            /// Creates a new identifier.
            #[must_use]
            pub fn new(value: &str) -> Self {
                Self {
                    value: value.to_string(),
                }
            }

            /// Returns the identifier value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.value
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value)
            }
        }
    };
}

opaque_id!(
    /// Identifies a person on the team roster (and therefore a participant).
    UserId
);
opaque_id!(
    /// Identifies a weapon in the weapon catalog.
    WeaponId
);
opaque_id!(
    /// Identifies an item in the equipment catalog.
    EquipmentId
);
opaque_id!(
    /// Identifies the training assignment a session is performed under.
    AssignmentId
);
opaque_id!(
    /// Identifies a squad within a team.
    SquadId
);
opaque_id!(
    /// Identifies a team.
    TeamId
);
opaque_id!(
    /// Identifies a persisted training session.
    SessionId
);

/// Locally generated target identity, stable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(u64);

impl TargetId {
    /// Creates a target identifier from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant's role for the session.
///
/// The duty selects which reference is required: a weapon for snipers,
/// equipment for spotters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Duty {
    /// Fires at targets; requires a weapon.
    #[default]
    Sniper,
    /// Observes and corrects; requires equipment.
    Spotter,
}

impl Duty {
    /// Converts this duty to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sniper => "Sniper",
            Self::Spotter => "Spotter",
        }
    }
}

impl FromStr for Duty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sniper" => Ok(Self::Sniper),
            "Spotter" => Ok(Self::Spotter),
            _ => Err(DomainError::InvalidDuty(s.to_string())),
        }
    }
}

impl std::fmt::Display for Duty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The body position a participant shoots or observes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Position {
    #[default]
    Lying,
    Standing,
    Sitting,
    Operational,
}

impl Position {
    /// Converts this position to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lying => "Lying",
            Self::Standing => "Standing",
            Self::Sitting => "Sitting",
            Self::Operational => "Operational",
        }
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Lying" => Ok(Self::Lying),
            "Standing" => Ok(Self::Standing),
            "Sitting" => Ok(Self::Sitting),
            "Operational" => Ok(Self::Operational),
            _ => Err(DomainError::InvalidPosition(s.to_string())),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a session took place by day or by night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Day,
    Night,
}

impl DayPeriod {
    /// Converts this day period to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }
}

impl FromStr for DayPeriod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            _ => Err(DomainError::InvalidDayPeriod(s.to_string())),
        }
    }
}

impl std::fmt::Display for DayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wind direction in whole degrees, 0 through 360 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct WindDirection(u16);

impl WindDirection {
    /// Creates a validated wind direction.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::WindDirectionOutOfRange` if `degrees` exceeds 360.
    pub fn new(degrees: u16) -> Result<Self, DomainError> {
        if degrees > 360 {
            return Err(DomainError::WindDirectionOutOfRange(degrees));
        }
        Ok(Self(degrees))
    }

    /// Returns the direction in degrees.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for WindDirection {
    type Error = DomainError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WindDirection> for u16 {
    fn from(value: WindDirection) -> Self {
        value.0
    }
}

/// Wind strength, a finite non-negative number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct WindStrength(f64);

impl WindStrength {
    /// Creates a validated wind strength.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidWindStrength` for negative or non-finite values.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidWindStrength(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw strength value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for WindStrength {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WindStrength> for f64 {
    fn from(value: WindStrength) -> Self {
        value.0
    }
}

/// Session-level metadata captured on the first wizard step.
///
/// Every field is optional while editing; the validation engine decides
/// which ones must be present before the session can be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionData {
    /// The training assignment this session belongs to.
    pub assignment_id: Option<AssignmentId>,
    /// Day or night.
    pub day_period: Option<DayPeriod>,
    /// Seconds until the first shot was fired.
    pub time_to_first_shot: Option<u32>,
    /// Free-text note.
    pub note: Option<String>,
    /// The squad the session was run for.
    pub squad_id: Option<SquadId>,
    /// The team the session was run for.
    pub team_id: Option<TeamId>,
    /// Whether the session counted as an effort session. `None` until chosen.
    pub effort: Option<bool>,
}

/// A person taking part in the session.
///
/// The display name is captured from the roster when the participant is
/// added and never changes afterwards. Changing duty goes through
/// [`Participant::set_duty`] so the irrelevant reference is always cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    user_id: UserId,
    name: String,
    duty: Duty,
    position: Position,
    weapon_id: Option<WeaponId>,
    equipment_id: Option<EquipmentId>,
}

impl Participant {
    /// Creates a participant with explicit values.
    ///
    /// Used when hydrating a previously saved session.
    #[must_use]
    pub const fn new(
        user_id: UserId,
        name: String,
        duty: Duty,
        position: Position,
        weapon_id: Option<WeaponId>,
        equipment_id: Option<EquipmentId>,
    ) -> Self {
        Self {
            user_id,
            name,
            duty,
            position,
            weapon_id,
            equipment_id,
        }
    }

    /// Creates a participant from a roster record using that person's defaults.
    ///
    /// Only the reference matching the default duty is carried over.
    #[must_use]
    pub fn from_member(member: &RosterMember) -> Self {
        let duty: Duty = member.default_duty.unwrap_or_default();
        let (weapon_id, equipment_id) = match duty {
            Duty::Sniper => (member.default_weapon_id.clone(), None),
            Duty::Spotter => (None, member.default_equipment_id.clone()),
        };
        Self {
            user_id: member.id.clone(),
            name: member.name.clone(),
            duty,
            position: Position::default(),
            weapon_id,
            equipment_id,
        }
    }

    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn duty(&self) -> Duty {
        self.duty
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn weapon_id(&self) -> Option<&WeaponId> {
        self.weapon_id.as_ref()
    }

    #[must_use]
    pub const fn equipment_id(&self) -> Option<&EquipmentId> {
        self.equipment_id.as_ref()
    }

    /// Changes the participant's duty.
    ///
    /// When the duty category changes, the reference that is no longer
    /// relevant is cleared in the same step.
    pub fn set_duty(&mut self, duty: Duty) {
        if self.duty == duty {
            return;
        }
        self.duty = duty;
        match duty {
            Duty::Sniper => self.equipment_id = None,
            Duty::Spotter => self.weapon_id = None,
        }
    }

    pub const fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_weapon(&mut self, weapon_id: Option<WeaponId>) {
        self.weapon_id = weapon_id;
    }

    pub fn set_equipment(&mut self, equipment_id: Option<EquipmentId>) {
        self.equipment_id = equipment_id;
    }
}

/// One participant's shots against one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    /// The participant this record belongs to.
    pub user_id: UserId,
    /// Shots fired. `None` when the input was cleared.
    pub shots_fired: Option<u32>,
    /// Hits on target. `None` when the input was cleared.
    pub target_hits: Option<u32>,
}

impl Engagement {
    /// Creates a zero-valued engagement for a participant.
    #[must_use]
    pub const fn zeroed(user_id: UserId) -> Self {
        Self {
            user_id,
            shots_fired: Some(0),
            target_hits: Some(0),
        }
    }
}

/// One engagement point in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    id: TargetId,
    /// Distance to the target in metres.
    pub distance: f64,
    pub wind_strength: Option<WindStrength>,
    pub wind_direction: Option<WindDirection>,
    /// Free-text mistake classification.
    pub mistake_code: Option<String>,
    /// Whether the first shot hit. `None` when not recorded.
    pub first_shot_hit: Option<bool>,
    /// Combined hit total entered manually instead of per participant.
    pub combined_hits: Option<u32>,
    /// One engagement per participant, in participant order.
    pub engagements: Vec<Engagement>,
}

impl Target {
    /// Creates a target at the default distance with no engagements.
    #[must_use]
    pub const fn new(id: TargetId) -> Self {
        Self {
            id,
            distance: DEFAULT_TARGET_DISTANCE,
            wind_strength: None,
            wind_direction: None,
            mistake_code: None,
            first_shot_hit: None,
            combined_hits: None,
            engagements: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> TargetId {
        self.id
    }

    /// Finds the engagement recorded for a participant.
    #[must_use]
    pub fn engagement(&self, user_id: &UserId) -> Option<&Engagement> {
        self.engagements.iter().find(|e| &e.user_id == user_id)
    }

    /// Finds the engagement recorded for a participant, mutably.
    pub fn engagement_mut(&mut self, user_id: &UserId) -> Option<&mut Engagement> {
        self.engagements.iter_mut().find(|e| &e.user_id == user_id)
    }
}

/// A person on the team roster, as supplied by the roster collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterMember {
    pub id: UserId,
    pub name: String,
    pub squad_id: Option<SquadId>,
    pub team_id: Option<TeamId>,
    pub default_duty: Option<Duty>,
    pub default_weapon_id: Option<WeaponId>,
    pub default_equipment_id: Option<EquipmentId>,
}

impl RosterMember {
    /// Creates a roster member with no squad, team or defaults.
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: UserId::new(id),
            name: name.to_string(),
            squad_id: None,
            team_id: None,
            default_duty: None,
            default_weapon_id: None,
            default_equipment_id: None,
        }
    }
}

/// An entry in the weapon catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: WeaponId,
    pub weapon_type: String,
    pub serial_number: String,
}

/// An entry in the equipment catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub equipment_type: String,
    pub serial_number: String,
}

/// A training assignment sessions are performed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub name: String,
}

/// The read-only roster a session draws its participants from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    members: Vec<RosterMember>,
}

impl Roster {
    #[must_use]
    pub const fn new(members: Vec<RosterMember>) -> Self {
        Self { members }
    }

    #[must_use]
    pub fn members(&self) -> &[RosterMember] {
        &self.members
    }

    /// Looks up a member by id.
    #[must_use]
    pub fn find(&self, user_id: &UserId) -> Option<&RosterMember> {
        self.members.iter().find(|m| &m.id == user_id)
    }

    /// Returns the ids of every member of a squad, in roster order.
    #[must_use]
    pub fn squad_member_ids(&self, squad_id: &SquadId) -> Vec<UserId> {
        self.members
            .iter()
            .filter(|m| m.squad_id.as_ref() == Some(squad_id))
            .map(|m| m.id.clone())
            .collect()
    }
}
