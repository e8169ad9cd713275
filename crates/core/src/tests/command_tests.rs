// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, EngagementUpdate, ParticipantUpdate, SessionUpdate};
use shotlog_domain::{DayPeriod, Duty, TargetId, UserId, WeaponId};

#[test]
fn test_commands_read_from_script_json() {
    let commands: Vec<Command> = serde_json::from_str(
        r#"[
            "AddTarget",
            { "UpdateSession": { "update": { "DayPeriod": "night" } } },
            { "UpdateEngagement": {
                "target_id": 1, "user_id": "u1", "update": { "ShotsFired": 4 } } },
            { "UpdateParticipant": {
                "user_id": "u2", "updates": [{ "Duty": "Sniper" }, { "Weapon": "w1" }] } }
        ]"#,
    )
    .unwrap();

    assert_eq!(
        commands,
        vec![
            Command::AddTarget,
            Command::UpdateSession {
                update: SessionUpdate::DayPeriod(Some(DayPeriod::Night)),
            },
            Command::UpdateEngagement {
                target_id: TargetId::new(1),
                user_id: UserId::new("u1"),
                update: EngagementUpdate::ShotsFired(Some(4)),
            },
            Command::UpdateParticipant {
                user_id: UserId::new("u2"),
                updates: vec![
                    ParticipantUpdate::Duty(Duty::Sniper),
                    ParticipantUpdate::Weapon(Some(WeaponId::new("w1"))),
                ],
            },
        ]
    );
}

#[test]
fn test_null_clears_engagement_input() {
    let command: Command = serde_json::from_str(
        r#"{ "UpdateEngagement": {
            "target_id": 2, "user_id": "u1", "update": { "TargetHits": null } } }"#,
    )
    .unwrap();

    assert_eq!(
        command,
        Command::UpdateEngagement {
            target_id: TargetId::new(2),
            user_id: UserId::new("u1"),
            update: EngagementUpdate::TargetHits(None),
        }
    );
}

#[test]
fn test_journal_names_and_descriptions() {
    let command: Command = Command::DistributeHits {
        target_id: TargetId::new(3),
        combined_hits: 7,
    };

    assert_eq!(command.name(), "DistributeHits");
    assert_eq!(
        command.describe(),
        Some(String::from("Distributed 7 hits on target 3"))
    );
    assert_eq!(Command::Reset.describe(), None);
}
