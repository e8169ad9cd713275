// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_payload;
use crate::{PersistenceError, SavedSession, SessionPayload, SessionSummary, SqlitePersistence};
use shotlog_domain::{AssignmentId, DayPeriod, SessionId, UserId};

#[test]
fn test_created_session_can_be_loaded() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let payload: SessionPayload = create_test_payload();

    let session_id: SessionId = persistence.create_session(&payload).unwrap();
    let saved: SavedSession = persistence.load_session(&session_id).unwrap();

    assert_eq!(saved.session_id, session_id);
    assert_eq!(saved.payload, payload);
    assert!(!saved.submitted_at.is_empty());
    assert_eq!(saved.updated_at, None);
}

#[test]
fn test_session_ids_are_distinct() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    let first: SessionId = persistence.create_session(&create_test_payload()).unwrap();
    let second: SessionId = persistence.create_session(&create_test_payload()).unwrap();

    assert_ne!(first, second);
}

#[test]
fn test_update_replaces_payload_and_sets_updated_at() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let session_id: SessionId = persistence.create_session(&create_test_payload()).unwrap();

    let mut payload: SessionPayload = create_test_payload();
    payload.session_data.training_session_id = Some(session_id.clone());
    payload.session_data.day_period = Some(DayPeriod::Night);
    payload.targets[0].engagements[0].shots_fired = 8;
    persistence.update_session(&session_id, &payload).unwrap();

    let saved: SavedSession = persistence.load_session(&session_id).unwrap();
    assert_eq!(saved.payload, payload);
    assert!(saved.updated_at.is_some());

    let summaries: Vec<SessionSummary> = persistence.list_sessions().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].day_period, Some(DayPeriod::Night));
    assert_eq!(summaries[0].total_shots, 8);
}

#[test]
fn test_update_of_unknown_session_fails() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    let result: Result<(), PersistenceError> =
        persistence.update_session(&SessionId::new("42"), &create_test_payload());

    assert_eq!(
        result,
        Err(PersistenceError::SessionNotFound(String::from("42")))
    );
}

#[test]
fn test_load_with_foreign_id_is_not_found() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    let result: Result<SavedSession, PersistenceError> =
        persistence.load_session(&SessionId::new("not-a-number"));

    assert!(matches!(result, Err(PersistenceError::SessionNotFound(_))));
}

#[test]
fn test_list_sessions_summarises_each_row() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let session_id: SessionId = persistence.create_session(&create_test_payload()).unwrap();

    let summaries: Vec<SessionSummary> = persistence.list_sessions().unwrap();

    assert_eq!(summaries.len(), 1);
    let summary: &SessionSummary = &summaries[0];
    assert_eq!(summary.session_id, session_id);
    assert_eq!(summary.assignment_id, Some(AssignmentId::new("a1")));
    assert_eq!(summary.created_by, Some(UserId::new("u1")));
    assert_eq!(summary.participant_count, 1);
    assert_eq!(summary.target_count, 1);
    assert_eq!(summary.total_shots, 5);
    assert_eq!(summary.total_hits, 3);
}
