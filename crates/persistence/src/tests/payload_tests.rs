// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SessionPayload;
use crate::tests::create_test_payload;
use serde_json::{Value, json};
use shotlog_domain::{WindDirection, WindStrength};

#[test]
fn test_payload_serializes_to_the_service_shape() {
    let value: Value = serde_json::to_value(create_test_payload()).unwrap();

    assert_eq!(
        value,
        json!({
            "sessionData": {
                "training_session_id": null,
                "assignment_id": "a1",
                "team_id": null,
                "dayPeriod": "day",
                "timeToFirstShot": 12,
                "note": null,
                "effort": true
            },
            "participants": [{
                "user_id": "u1",
                "user_duty": "Sniper",
                "weapon_id": "w1",
                "equipment_id": null,
                "position": "Lying"
            }],
            "targets": [{
                "distance": 100.0,
                "totalHits": 3,
                "first_shot_hit": true,
                "engagements": [{
                    "user_id": "u1",
                    "shots_fired": 5,
                    "target_hits": 3
                }]
            }],
            "currentUser": { "id": "u1" }
        })
    );
}

#[test]
fn test_optional_target_fields_are_emitted_when_set() {
    let mut payload: SessionPayload = create_test_payload();
    payload.targets[0].wind_strength = Some(WindStrength::new(3.5).unwrap());
    payload.targets[0].wind_direction = Some(WindDirection::new(90).unwrap());
    payload.targets[0].mistake_code = Some(String::from("M2"));

    let value: Value = serde_json::to_value(&payload).unwrap();

    assert_eq!(value["targets"][0]["windStrength"], json!(3.5));
    assert_eq!(value["targets"][0]["windDirection"], json!(90));
    assert_eq!(value["targets"][0]["mistakeCode"], json!("M2"));
}

#[test]
fn test_payload_rejects_out_of_range_wind_direction() {
    let mut value: Value = serde_json::to_value(create_test_payload()).unwrap();
    value["targets"][0]["windDirection"] = json!(400);

    let result: Result<SessionPayload, serde_json::Error> = serde_json::from_value(value);

    assert!(result.is_err());
}

#[test]
fn test_payload_totals() {
    let payload: SessionPayload = create_test_payload();

    assert_eq!(payload.total_shots(), 5);
    assert_eq!(payload.total_hits(), 3);
}

#[test]
fn test_payload_totals_saturate() {
    let mut payload: SessionPayload = create_test_payload();
    let mut second = payload.targets[0].clone();
    second.engagements[0].shots_fired = u32::MAX;
    second.total_hits = u32::MAX;
    payload.targets.push(second);

    assert_eq!(payload.total_shots(), u32::MAX);
    assert_eq!(payload.total_hits(), u32::MAX);
}
