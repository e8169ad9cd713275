// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster and training session queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use shotlog_domain::{
    Assignment, AssignmentId, DayPeriod, Duty, Equipment, EquipmentId, Roster, RosterMember,
    SessionId, SquadId, TeamId, UserId, Weapon, WeaponId,
};
use tracing::debug;

use crate::data_models::{SavedSession, SessionPayload, SessionSummary};
use crate::diesel_schema::{assignments, equipment, roster_members, training_sessions, weapons};
use crate::error::PersistenceError;
use crate::mutations::parse_session_id;

#[derive(Queryable, Selectable)]
#[diesel(table_name = roster_members)]
struct RosterMemberRow {
    user_id: String,
    name: String,
    squad_id: Option<String>,
    team_id: Option<String>,
    default_duty: Option<String>,
    default_weapon_id: Option<String>,
    default_equipment_id: Option<String>,
}

impl TryFrom<RosterMemberRow> for RosterMember {
    type Error = PersistenceError;

    fn try_from(row: RosterMemberRow) -> Result<Self, Self::Error> {
        let default_duty: Option<Duty> = row
            .default_duty
            .as_deref()
            .map(str::parse::<Duty>)
            .transpose()?;
        Ok(Self {
            id: UserId::new(&row.user_id),
            name: row.name,
            squad_id: row.squad_id.as_deref().map(SquadId::new),
            team_id: row.team_id.as_deref().map(TeamId::new),
            default_duty,
            default_weapon_id: row.default_weapon_id.as_deref().map(WeaponId::new),
            default_equipment_id: row.default_equipment_id.as_deref().map(EquipmentId::new),
        })
    }
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = training_sessions)]
struct SessionRow {
    session_id: i64,
    assignment_id: Option<String>,
    day_period: Option<String>,
    created_by: Option<String>,
    participant_count: i32,
    target_count: i32,
    total_shots: i32,
    total_hits: i32,
    submitted_at: String,
    updated_at: Option<String>,
}

fn non_negative(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

impl TryFrom<SessionRow> for SessionSummary {
    type Error = PersistenceError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let day_period: Option<DayPeriod> = row
            .day_period
            .as_deref()
            .map(str::parse::<DayPeriod>)
            .transpose()?;
        Ok(Self {
            session_id: SessionId::new(&row.session_id.to_string()),
            assignment_id: row.assignment_id.as_deref().map(AssignmentId::new),
            day_period,
            created_by: row.created_by.as_deref().map(UserId::new),
            participant_count: non_negative(row.participant_count),
            target_count: non_negative(row.target_count),
            total_shots: non_negative(row.total_shots),
            total_hits: non_negative(row.total_hits),
            submitted_at: row.submitted_at,
            updated_at: row.updated_at,
        })
    }
}

/// Loads the roster in the order members were first stored.
///
/// # Errors
///
/// Returns an error if the query fails or a stored duty is not recognised.
pub fn load_roster(conn: &mut SqliteConnection) -> Result<Roster, PersistenceError> {
    let rows: Vec<RosterMemberRow> = roster_members::table
        .order(roster_members::member_id.asc())
        .select(RosterMemberRow::as_select())
        .load(conn)?;

    let members: Vec<RosterMember> = rows
        .into_iter()
        .map(RosterMember::try_from)
        .collect::<Result<_, _>>()?;

    debug!(count = members.len(), "Loaded roster");
    Ok(Roster::new(members))
}

/// Loads the weapon catalog ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn load_weapons(conn: &mut SqliteConnection) -> Result<Vec<Weapon>, PersistenceError> {
    let rows: Vec<(String, String, String)> = weapons::table
        .order(weapons::weapon_id.asc())
        .select((
            weapons::weapon_id,
            weapons::weapon_type,
            weapons::serial_number,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, weapon_type, serial_number)| Weapon {
            id: WeaponId::new(&id),
            weapon_type,
            serial_number,
        })
        .collect())
}

/// Loads the equipment catalog ordered by id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn load_equipment(conn: &mut SqliteConnection) -> Result<Vec<Equipment>, PersistenceError> {
    let rows: Vec<(String, String, String)> = equipment::table
        .order(equipment::equipment_id.asc())
        .select((
            equipment::equipment_id,
            equipment::equipment_type,
            equipment::serial_number,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, equipment_type, serial_number)| Equipment {
            id: EquipmentId::new(&id),
            equipment_type,
            serial_number,
        })
        .collect())
}

/// Loads the training assignment list ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn load_assignments(conn: &mut SqliteConnection) -> Result<Vec<Assignment>, PersistenceError> {
    let rows: Vec<(String, String)> = assignments::table
        .order(assignments::name.asc())
        .select((assignments::assignment_id, assignments::name))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| Assignment {
            id: AssignmentId::new(&id),
            name,
        })
        .collect())
}

/// Loads a stored training session.
///
/// # Errors
///
/// Returns `SessionNotFound` if no session has this id, or an error if the
/// stored payload cannot be read.
pub fn load_session(
    conn: &mut SqliteConnection,
    session_id: &SessionId,
) -> Result<SavedSession, PersistenceError> {
    let row_id: i64 = parse_session_id(session_id)?;

    let row: Option<(String, String, Option<String>)> = training_sessions::table
        .filter(training_sessions::session_id.eq(row_id))
        .select((
            training_sessions::payload_json,
            training_sessions::submitted_at,
            training_sessions::updated_at,
        ))
        .first(conn)
        .optional()?;

    let Some((payload_json, submitted_at, updated_at)) = row else {
        return Err(PersistenceError::SessionNotFound(session_id.to_string()));
    };

    let payload: SessionPayload = serde_json::from_str(&payload_json)?;
    Ok(SavedSession {
        session_id: session_id.clone(),
        payload,
        submitted_at,
        updated_at,
    })
}

/// Lists every stored training session, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_sessions(conn: &mut SqliteConnection) -> Result<Vec<SessionSummary>, PersistenceError> {
    let rows: Vec<SessionRow> = training_sessions::table
        .order(training_sessions::session_id.asc())
        .select(SessionRow::as_select())
        .load(conn)?;

    rows.into_iter().map(SessionSummary::try_from).collect()
}
