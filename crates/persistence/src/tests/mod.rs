// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod payload_tests;
mod roster_tests;
mod session_tests;

use crate::{
    CurrentUserPayload, EngagementPayload, ParticipantPayload, RosterSeed, SessionDataPayload,
    SessionPayload, TargetPayload,
};
use shotlog_domain::{
    Assignment, AssignmentId, DayPeriod, Duty, Equipment, EquipmentId, Position, RosterMember,
    SquadId, UserId, Weapon, WeaponId,
};

pub fn create_test_seed() -> RosterSeed {
    let mut alice: RosterMember = RosterMember::new("u1", "Alice");
    alice.squad_id = Some(SquadId::new("s1"));
    alice.default_duty = Some(Duty::Sniper);
    alice.default_weapon_id = Some(WeaponId::new("w1"));

    let mut bob: RosterMember = RosterMember::new("u2", "Bob");
    bob.squad_id = Some(SquadId::new("s1"));
    bob.default_duty = Some(Duty::Spotter);
    bob.default_equipment_id = Some(EquipmentId::new("e1"));

    RosterSeed {
        weapons: vec![Weapon {
            id: WeaponId::new("w1"),
            weapon_type: String::from("Bolt action"),
            serial_number: String::from("SN-001"),
        }],
        equipment: vec![Equipment {
            id: EquipmentId::new("e1"),
            equipment_type: String::from("Spotting scope"),
            serial_number: String::from("SC-100"),
        }],
        assignments: vec![Assignment {
            id: AssignmentId::new("a1"),
            name: String::from("Qualification"),
        }],
        members: vec![alice, bob],
    }
}

/// One sniper, one target at 100 m, 5 shots and 3 hits.
pub fn create_test_payload() -> SessionPayload {
    SessionPayload {
        session_data: SessionDataPayload {
            training_session_id: None,
            assignment_id: Some(AssignmentId::new("a1")),
            team_id: None,
            day_period: Some(DayPeriod::Day),
            time_to_first_shot: Some(12),
            note: None,
            effort: true,
        },
        participants: vec![ParticipantPayload {
            user_id: UserId::new("u1"),
            user_duty: Duty::Sniper,
            weapon_id: Some(WeaponId::new("w1")),
            equipment_id: None,
            position: Position::Lying,
        }],
        targets: vec![TargetPayload {
            distance: 100.0,
            wind_strength: None,
            wind_direction: None,
            total_hits: 3,
            mistake_code: None,
            first_shot_hit: Some(true),
            engagements: vec![EngagementPayload {
                user_id: UserId::new("u1"),
                shots_fired: 5,
                target_hits: 3,
            }],
        }],
        current_user: Some(CurrentUserPayload {
            id: UserId::new("u1"),
        }),
    }
}
