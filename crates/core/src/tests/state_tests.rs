// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    apply_all, create_initiator, create_submittable_state, create_test_actor, create_test_roster,
    create_test_state, user,
};
use crate::{Command, SessionReview, SessionState, TargetUpdate, apply};
use shotlog_domain::{
    Accuracy, Duty, Engagement, Participant, Position, SessionData, SessionId, Target, TargetId,
};

#[test]
fn test_hydrate_inserts_missing_initiator_and_reconciles() {
    let bob: Participant = Participant::new(
        user("u2"),
        String::from("Bob"),
        Duty::Spotter,
        Position::Standing,
        None,
        None,
    );
    let mut target: Target = Target::new(TargetId::new(4));
    target.engagements = vec![Engagement {
        user_id: user("u2"),
        shots_fired: Some(2),
        target_hits: Some(1),
    }];

    let state: SessionState = SessionState::hydrate(
        SessionId::new("sess-1"),
        SessionData::default(),
        vec![bob],
        vec![target],
        create_initiator(),
        create_test_roster(),
    );

    assert_eq!(state.session_id(), Some(&SessionId::new("sess-1")));
    assert_eq!(state.participants()[0].user_id(), &user("u1"));
    assert_eq!(state.participants()[1].user_id(), &user("u2"));
    let engagements = &state.targets()[0].engagements;
    assert_eq!(engagements[0], Engagement::zeroed(user("u1")));
    assert_eq!(engagements[1].shots_fired, Some(2));
}

#[test]
fn test_hydrate_continues_target_ids_after_the_highest() {
    let state: SessionState = SessionState::hydrate(
        SessionId::new("sess-1"),
        SessionData::default(),
        Vec::new(),
        vec![Target::new(TargetId::new(7)), Target::new(TargetId::new(3))],
        create_initiator(),
        create_test_roster(),
    );

    let state: SessionState = apply_all(&state, vec![Command::AddTarget]);

    assert_eq!(state.targets()[2].id(), TargetId::new(8));
}

#[test]
fn test_edit_after_submission_clears_submitted_flag() {
    let mut state: SessionState = create_test_state();
    state.mark_submitted(SessionId::new("sess-9"));
    assert!(state.is_submitted());

    let noop = apply(
        &state,
        Command::RemoveParticipant {
            user_id: user("u1"),
        },
        create_test_actor(),
    );
    assert!(noop.new_state.is_submitted());

    let edited = apply(&state, Command::AddTarget, create_test_actor());
    assert!(!edited.new_state.is_submitted());
    assert_eq!(edited.new_state.session_id(), Some(&SessionId::new("sess-9")));
}

#[test]
fn test_review_of_submittable_session() {
    let review: SessionReview = SessionReview::from_state(&create_submittable_state());

    assert!(review.is_submittable());
    assert_eq!(review.totals.participants, 1);
    assert_eq!(review.totals.targets, 1);
    assert_eq!(review.totals.shots, 5);
    assert_eq!(review.totals.hits, 3);
    assert_eq!(review.totals.accuracy, Accuracy::Percent(60));
    assert_eq!(review.users[0].name, "Alice");
    assert_eq!(review.targets[0].accuracy, Accuracy::Percent(60));
}

#[test]
fn test_review_prefers_combined_hits_for_target_summary() {
    let state: SessionState = apply_all(
        &create_submittable_state(),
        vec![Command::UpdateTarget {
            target_id: TargetId::new(1),
            update: TargetUpdate::CombinedHits(Some(4)),
        }],
    );

    let review: SessionReview = SessionReview::from_state(&state);

    assert_eq!(review.targets[0].hits, 4);
    assert_eq!(review.totals.hits, 3);
}

#[test]
fn test_review_of_empty_session_lists_issues() {
    let review: SessionReview = SessionReview::from_state(&create_test_state());

    assert!(!review.is_submittable());
    assert_eq!(review.totals.accuracy, Accuracy::NoData);
    assert!(
        review
            .issues
            .contains(&String::from("At least one target is required"))
    );
    assert!(review.to_string().contains("accuracy N/A"));
}
