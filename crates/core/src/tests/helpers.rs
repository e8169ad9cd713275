// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, EngagementUpdate, SessionState, SessionUpdate, apply};
use shotlog_audit::Actor;
use shotlog_domain::{
    AssignmentId, DayPeriod, Duty, EquipmentId, Roster, RosterMember, SquadId, TargetId, UserId,
    WeaponId,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("u1"), String::from("user"))
}

/// Alice: sniper with a default weapon, squad s1. Opens the editor.
pub fn create_initiator() -> RosterMember {
    let mut member: RosterMember = RosterMember::new("u1", "Alice");
    member.squad_id = Some(SquadId::new("s1"));
    member.default_duty = Some(Duty::Sniper);
    member.default_weapon_id = Some(WeaponId::new("w1"));
    member
}

/// Roster of Alice (s1), Bob (spotter, s1) and Carol (no defaults, s2).
pub fn create_test_roster() -> Roster {
    let mut bob: RosterMember = RosterMember::new("u2", "Bob");
    bob.squad_id = Some(SquadId::new("s1"));
    bob.default_duty = Some(Duty::Spotter);
    bob.default_equipment_id = Some(EquipmentId::new("e1"));

    let mut carol: RosterMember = RosterMember::new("u3", "Carol");
    carol.squad_id = Some(SquadId::new("s2"));

    Roster::new(vec![create_initiator(), bob, carol])
}

pub fn create_test_state() -> SessionState {
    SessionState::new(create_initiator(), create_test_roster())
}

/// Applies each command in order, keeping only the resulting state.
pub fn apply_all(state: &SessionState, commands: Vec<Command>) -> SessionState {
    commands.into_iter().fold(state.clone(), |current, command| {
        apply(&current, command, create_test_actor()).new_state
    })
}

pub fn user(id: &str) -> UserId {
    UserId::new(id)
}

pub fn complete_session_commands() -> Vec<Command> {
    vec![
        Command::UpdateSession {
            update: SessionUpdate::Assignment(Some(AssignmentId::new("a1"))),
        },
        Command::UpdateSession {
            update: SessionUpdate::DayPeriod(Some(DayPeriod::Day)),
        },
        Command::UpdateSession {
            update: SessionUpdate::TimeToFirstShot(Some(12)),
        },
        Command::UpdateSession {
            update: SessionUpdate::Effort(Some(true)),
        },
    ]
}

/// A submittable session: complete config, Alice alone, one target with 5
/// shots and 3 hits.
pub fn create_submittable_state() -> SessionState {
    let mut commands: Vec<Command> = complete_session_commands();
    commands.push(Command::AddTarget);
    commands.push(Command::UpdateEngagement {
        target_id: TargetId::new(1),
        user_id: user("u1"),
        update: EngagementUpdate::ShotsFired(Some(5)),
    });
    commands.push(Command::UpdateEngagement {
        target_id: TargetId::new(1),
        user_id: user("u1"),
        update: EngagementUpdate::TargetHits(Some(3)),
    });
    apply_all(&create_test_state(), commands)
}
