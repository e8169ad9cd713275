// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster and training session mutations.

use diesel::prelude::*;
use diesel::SqliteConnection;
use shotlog_domain::{
    Assignment, AssignmentId, DayPeriod, Duty, Equipment, EquipmentId, RosterMember, SessionId,
    SquadId, TeamId, Weapon, WeaponId, validate_roster_member,
};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::{debug, info};

use crate::backend::get_last_insert_rowid;
use crate::data_models::{RosterSeed, SessionPayload};
use crate::diesel_schema::{assignments, equipment, roster_members, training_sessions, weapons};
use crate::error::PersistenceError;

fn now_rfc3339() -> Result<String, PersistenceError> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}

fn count_as_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn total_as_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Parses a session id issued by this store.
///
/// # Errors
///
/// Returns `SessionNotFound` if the id is not one this store could have issued.
pub fn parse_session_id(session_id: &SessionId) -> Result<i64, PersistenceError> {
    session_id
        .value()
        .parse::<i64>()
        .map_err(|_| PersistenceError::SessionNotFound(session_id.to_string()))
}

/// Inserts or replaces a weapon catalog entry.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn upsert_weapon(conn: &mut SqliteConnection, weapon: &Weapon) -> Result<(), PersistenceError> {
    diesel::insert_into(weapons::table)
        .values((
            weapons::weapon_id.eq(weapon.id.value()),
            weapons::weapon_type.eq(&weapon.weapon_type),
            weapons::serial_number.eq(&weapon.serial_number),
        ))
        .on_conflict(weapons::weapon_id)
        .do_update()
        .set((
            weapons::weapon_type.eq(&weapon.weapon_type),
            weapons::serial_number.eq(&weapon.serial_number),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts or replaces an equipment catalog entry.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn upsert_equipment(
    conn: &mut SqliteConnection,
    item: &Equipment,
) -> Result<(), PersistenceError> {
    diesel::insert_into(equipment::table)
        .values((
            equipment::equipment_id.eq(item.id.value()),
            equipment::equipment_type.eq(&item.equipment_type),
            equipment::serial_number.eq(&item.serial_number),
        ))
        .on_conflict(equipment::equipment_id)
        .do_update()
        .set((
            equipment::equipment_type.eq(&item.equipment_type),
            equipment::serial_number.eq(&item.serial_number),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts or replaces a training assignment.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn upsert_assignment(
    conn: &mut SqliteConnection,
    assignment: &Assignment,
) -> Result<(), PersistenceError> {
    diesel::insert_into(assignments::table)
        .values((
            assignments::assignment_id.eq(assignment.id.value()),
            assignments::name.eq(&assignment.name),
        ))
        .on_conflict(assignments::assignment_id)
        .do_update()
        .set(assignments::name.eq(&assignment.name))
        .execute(conn)?;
    Ok(())
}

/// Inserts a roster member, or updates the existing record with the same
/// user id. Existing members keep their roster position.
///
/// # Errors
///
/// Returns an error if the member fails validation, references an unknown
/// weapon or equipment entry, or the database write fails.
pub fn upsert_roster_member(
    conn: &mut SqliteConnection,
    member: &RosterMember,
) -> Result<(), PersistenceError> {
    validate_roster_member(member)?;

    let squad_id: Option<&str> = member.squad_id.as_ref().map(SquadId::value);
    let team_id: Option<&str> = member.team_id.as_ref().map(TeamId::value);
    let default_duty: Option<&str> = member.default_duty.as_ref().map(Duty::as_str);
    let default_weapon_id: Option<&str> = member.default_weapon_id.as_ref().map(WeaponId::value);
    let default_equipment_id: Option<&str> =
        member.default_equipment_id.as_ref().map(EquipmentId::value);

    diesel::insert_into(roster_members::table)
        .values((
            roster_members::user_id.eq(member.id.value()),
            roster_members::name.eq(&member.name),
            roster_members::squad_id.eq(squad_id),
            roster_members::team_id.eq(team_id),
            roster_members::default_duty.eq(default_duty),
            roster_members::default_weapon_id.eq(default_weapon_id),
            roster_members::default_equipment_id.eq(default_equipment_id),
        ))
        .on_conflict(roster_members::user_id)
        .do_update()
        .set((
            roster_members::name.eq(&member.name),
            roster_members::squad_id.eq(squad_id),
            roster_members::team_id.eq(team_id),
            roster_members::default_duty.eq(default_duty),
            roster_members::default_weapon_id.eq(default_weapon_id),
            roster_members::default_equipment_id.eq(default_equipment_id),
        ))
        .execute(conn)?;

    debug!(user_id = %member.id, "Roster member stored");
    Ok(())
}

/// Loads catalogs and roster members in a single transaction.
///
/// Catalogs are written first so member defaults can reference them.
///
/// # Errors
///
/// Returns an error if any record is rejected; nothing is written in that case.
pub fn seed_roster(conn: &mut SqliteConnection, seed: &RosterSeed) -> Result<(), PersistenceError> {
    conn.transaction::<(), PersistenceError, _>(|conn| {
        for weapon in &seed.weapons {
            upsert_weapon(conn, weapon)?;
        }
        for item in &seed.equipment {
            upsert_equipment(conn, item)?;
        }
        for assignment in &seed.assignments {
            upsert_assignment(conn, assignment)?;
        }
        for member in &seed.members {
            upsert_roster_member(conn, member)?;
        }
        Ok(())
    })?;

    info!(
        weapons = seed.weapons.len(),
        equipment = seed.equipment.len(),
        assignments = seed.assignments.len(),
        members = seed.members.len(),
        "Roster seeded"
    );
    Ok(())
}

/// Stores a new training session and returns its id.
///
/// # Errors
///
/// Returns an error if the payload cannot be serialized or the write fails.
pub fn create_session(
    conn: &mut SqliteConnection,
    payload: &SessionPayload,
) -> Result<SessionId, PersistenceError> {
    let payload_json: String = serde_json::to_string(payload)?;
    let submitted_at: String = now_rfc3339()?;
    let data = &payload.session_data;

    diesel::insert_into(training_sessions::table)
        .values((
            training_sessions::assignment_id
                .eq(data.assignment_id.as_ref().map(AssignmentId::value)),
            training_sessions::team_id.eq(data.team_id.as_ref().map(TeamId::value)),
            training_sessions::day_period.eq(data.day_period.as_ref().map(DayPeriod::as_str)),
            training_sessions::created_by
                .eq(payload.current_user.as_ref().map(|u| u.id.value())),
            training_sessions::participant_count.eq(count_as_i32(payload.participants.len())),
            training_sessions::target_count.eq(count_as_i32(payload.targets.len())),
            training_sessions::total_shots.eq(total_as_i32(payload.total_shots())),
            training_sessions::total_hits.eq(total_as_i32(payload.total_hits())),
            training_sessions::payload_json.eq(&payload_json),
            training_sessions::submitted_at.eq(&submitted_at),
        ))
        .execute(conn)?;

    let row_id: i64 = get_last_insert_rowid(conn)?;
    let session_id: SessionId = SessionId::new(&row_id.to_string());

    info!(session_id = %session_id, "Training session created");
    Ok(session_id)
}

/// Replaces the contents of an existing training session.
///
/// # Errors
///
/// Returns `SessionNotFound` if no session has this id, or an error if the
/// write fails.
pub fn update_session(
    conn: &mut SqliteConnection,
    session_id: &SessionId,
    payload: &SessionPayload,
) -> Result<(), PersistenceError> {
    let row_id: i64 = parse_session_id(session_id)?;
    let payload_json: String = serde_json::to_string(payload)?;
    let updated_at: String = now_rfc3339()?;
    let data = &payload.session_data;

    let rows: usize = diesel::update(training_sessions::table)
        .filter(training_sessions::session_id.eq(row_id))
        .set((
            training_sessions::assignment_id
                .eq(data.assignment_id.as_ref().map(AssignmentId::value)),
            training_sessions::team_id.eq(data.team_id.as_ref().map(TeamId::value)),
            training_sessions::day_period.eq(data.day_period.as_ref().map(DayPeriod::as_str)),
            training_sessions::participant_count.eq(count_as_i32(payload.participants.len())),
            training_sessions::target_count.eq(count_as_i32(payload.targets.len())),
            training_sessions::total_shots.eq(total_as_i32(payload.total_shots())),
            training_sessions::total_hits.eq(total_as_i32(payload.total_hits())),
            training_sessions::payload_json.eq(&payload_json),
            training_sessions::updated_at.eq(Some(updated_at.as_str())),
        ))
        .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::SessionNotFound(session_id.to_string()));
    }

    info!(session_id = %session_id, "Training session updated");
    Ok(())
}
