// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between the editing state and the submission payload.

use shotlog::SessionState;
use shotlog_domain::{
    Engagement, Participant, Roster, RosterMember, SessionData, Target, TargetId, UserId,
    reported_hits, total_hits,
};
use shotlog_persistence::{
    CurrentUserPayload, EngagementPayload, ParticipantPayload, SavedSession, SessionDataPayload,
    SessionPayload, TargetPayload,
};

/// Flattens the editing state into the payload sent to the session store.
///
/// Unset effort is sent as `false` and cleared shot or hit inputs as `0`.
/// A target's `totalHits` is its combined figure when one was entered,
/// otherwise the sum of its engagement hits.
#[must_use]
pub fn build_payload(state: &SessionState, current_user: Option<&UserId>) -> SessionPayload {
    let session: &SessionData = state.session();

    SessionPayload {
        session_data: SessionDataPayload {
            training_session_id: state.session_id().cloned(),
            assignment_id: session.assignment_id.clone(),
            team_id: session.team_id.clone(),
            day_period: session.day_period,
            time_to_first_shot: session.time_to_first_shot,
            note: session.note.clone(),
            effort: session.effort.unwrap_or(false),
        },
        participants: state.participants().iter().map(participant_payload).collect(),
        targets: state.targets().iter().map(target_payload).collect(),
        current_user: current_user.map(|id| CurrentUserPayload { id: id.clone() }),
    }
}

fn participant_payload(participant: &Participant) -> ParticipantPayload {
    ParticipantPayload {
        user_id: participant.user_id().clone(),
        user_duty: participant.duty(),
        weapon_id: participant.weapon_id().cloned(),
        equipment_id: participant.equipment_id().cloned(),
        position: participant.position(),
    }
}

fn target_payload(target: &Target) -> TargetPayload {
    TargetPayload {
        distance: target.distance,
        wind_strength: target.wind_strength,
        wind_direction: target.wind_direction,
        total_hits: reported_hits(target),
        mistake_code: target.mistake_code.clone(),
        first_shot_hit: target.first_shot_hit,
        engagements: target
            .engagements
            .iter()
            .map(|e| EngagementPayload {
                user_id: e.user_id.clone(),
                shots_fired: e.shots_fired.unwrap_or(0),
                target_hits: e.target_hits.unwrap_or(0),
            })
            .collect(),
    }
}

/// Rebuilds an editing state from a stored session.
///
/// Participant names come from the roster; a participant no longer on the
/// roster is shown by user id. Targets are numbered from 1 in stored order.
/// A stored `totalHits` that differs from the summed engagement hits is
/// restored as the target's combined figure.
#[must_use]
pub fn hydrate_state(
    saved: &SavedSession,
    initiator: RosterMember,
    roster: Roster,
) -> SessionState {
    let payload: &SessionPayload = &saved.payload;
    let data: &SessionDataPayload = &payload.session_data;

    let session: SessionData = SessionData {
        assignment_id: data.assignment_id.clone(),
        day_period: data.day_period,
        time_to_first_shot: data.time_to_first_shot,
        note: data.note.clone(),
        squad_id: None,
        team_id: data.team_id.clone(),
        effort: Some(data.effort),
    };

    let participants: Vec<Participant> = payload
        .participants
        .iter()
        .map(|p| {
            let name: String = roster
                .find(&p.user_id)
                .map_or_else(|| p.user_id.to_string(), |m| m.name.clone());
            Participant::new(
                p.user_id.clone(),
                name,
                p.user_duty,
                p.position,
                p.weapon_id.clone(),
                p.equipment_id.clone(),
            )
        })
        .collect();

    let targets: Vec<Target> = payload
        .targets
        .iter()
        .zip(1_u64..)
        .map(|(stored, id)| restore_target(stored, TargetId::new(id)))
        .collect();

    SessionState::hydrate(
        saved.session_id.clone(),
        session,
        participants,
        targets,
        initiator,
        roster,
    )
}

fn restore_target(stored: &TargetPayload, id: TargetId) -> Target {
    let mut target: Target = Target::new(id);
    target.distance = stored.distance;
    target.wind_strength = stored.wind_strength;
    target.wind_direction = stored.wind_direction;
    target.mistake_code = stored.mistake_code.clone();
    target.first_shot_hit = stored.first_shot_hit;
    target.engagements = stored
        .engagements
        .iter()
        .map(|e| Engagement {
            user_id: e.user_id.clone(),
            shots_fired: Some(e.shots_fired),
            target_hits: Some(e.target_hits),
        })
        .collect();
    if stored.total_hits != total_hits(&target) {
        target.combined_hits = Some(stored.total_hits);
    }
    target
}
