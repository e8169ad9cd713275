// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, EngagementUpdate, ParticipantUpdate, SessionUpdate, TargetUpdate};
use crate::consistency::{reconcile_engagements, release_stale_combined_hits};
use crate::state::{SessionState, TransitionResult};
use shotlog_audit::{Action, Actor, EditEvent, StateSnapshot};
use shotlog_domain::{Engagement, Participant, Target, TargetId, UserId, distribute_hits};
use tracing::debug;

/// Applies a command to the current state, producing a new state and a
/// journal entry.
///
/// Application happens in explicit phases:
/// 1. the primary mutation of participants, targets or session metadata
/// 2. [`reconcile_engagements`], which restores one engagement per
///    (participant, target) pair in participant order
/// 3. [`release_stale_combined_hits`], which drops combined hit figures
///    whose target's shot or hit totals changed, unless this command
///    distributed them
///
/// This function is total. Commands that refer to unknown ids, or that try
/// to remove the initiating user, leave the state unchanged and produce a
/// journal entry with `changed == false`.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this edit
#[must_use]
pub fn apply(state: &SessionState, command: Command, actor: Actor) -> TransitionResult {
    let before: StateSnapshot = state.to_snapshot();
    let action: Action = Action::new(command.name().to_string(), command.describe());
    let distributes: bool = matches!(command, Command::DistributeHits { .. });

    let mut new_state: SessionState = if matches!(command, Command::Reset) {
        state.reset()
    } else {
        let mut new_state: SessionState = state.clone();
        mutate(&mut new_state, command);
        new_state
    };

    reconcile_engagements(&new_state.participants, &mut new_state.targets);
    if !distributes {
        release_stale_combined_hits(&state.targets, &mut new_state.targets);
    }

    let changed: bool = new_state != *state;
    if changed {
        new_state.mark_edited();
    } else {
        debug!(action = %action.name, "Edit left the session unchanged");
    }

    let after: StateSnapshot = new_state.to_snapshot();
    let edit_event: EditEvent = EditEvent::new(actor, action, before, after, changed);

    TransitionResult {
        new_state,
        edit_event,
    }
}

/// The primary mutation phase.
fn mutate(state: &mut SessionState, command: Command) {
    match command {
        Command::AddParticipant { member_id } => {
            add_participants(state, std::slice::from_ref(&member_id));
        }
        Command::AddParticipantsBulk { member_ids } => {
            add_participants(state, &member_ids);
        }
        Command::AddSquad { squad_id } => {
            let member_ids: Vec<UserId> = state.roster().squad_member_ids(&squad_id);
            debug!(squad = %squad_id, members = member_ids.len(), "Adding squad");
            add_participants(state, &member_ids);
        }
        Command::RemoveParticipant { user_id } => {
            if &user_id == state.initiating_user_id() {
                debug!(user = %user_id, "Refusing to remove the initiating user");
                return;
            }
            state.participants.retain(|p| p.user_id() != &user_id);
        }
        Command::UpdateParticipant { user_id, updates } => {
            let Some(participant) = state
                .participants
                .iter_mut()
                .find(|p| p.user_id() == &user_id)
            else {
                debug!(user = %user_id, "Participant not found, ignoring update");
                return;
            };
            for update in updates {
                apply_participant_update(participant, update);
            }
        }
        Command::AddTarget => {
            let target_id: TargetId = state.next_target_id;
            state.next_target_id = target_id.next();
            state.targets.push(Target::new(target_id));
        }
        Command::RemoveTarget { target_id } => {
            state.targets.retain(|t| t.id() != target_id);
        }
        Command::UpdateTarget { target_id, update } => {
            if let Some(target) = find_target(state, target_id) {
                apply_target_update(target, update);
            }
        }
        Command::UpdateEngagement {
            target_id,
            user_id,
            update,
        } => {
            let Some(target) = find_target(state, target_id) else {
                return;
            };
            if target.engagement(&user_id).is_none() {
                debug!(target = %target_id, user = %user_id, "Synthesizing missing engagement");
                target.engagements.push(Engagement::zeroed(user_id.clone()));
            }
            if let Some(engagement) = target.engagement_mut(&user_id) {
                match update {
                    EngagementUpdate::ShotsFired(value) => engagement.shots_fired = value,
                    EngagementUpdate::TargetHits(value) => engagement.target_hits = value,
                }
            }
        }
        Command::UpdateSession { update } => apply_session_update(state, update),
        Command::DistributeHits {
            target_id,
            combined_hits,
        } => {
            let Some(target) = find_target(state, target_id) else {
                return;
            };
            target.combined_hits = Some(combined_hits);
            for (user_id, hits) in distribute_hits(target, combined_hits) {
                if let Some(engagement) = target.engagement_mut(&user_id) {
                    engagement.target_hits = Some(hits);
                }
            }
        }
        Command::Reset => {}
    }
}

/// Appends every listed roster member that is not already a participant.
///
/// Unknown ids and duplicates (including duplicates within `member_ids`)
/// are skipped. Engagements for the new participants are created by the
/// consistency pass, once, after all of them are appended.
fn add_participants(state: &mut SessionState, member_ids: &[UserId]) {
    for member_id in member_ids {
        if state.participant(member_id).is_some() {
            continue;
        }
        let Some(member) = state.roster().find(member_id) else {
            debug!(user = %member_id, "Member not on roster, skipping");
            continue;
        };
        let participant: Participant = Participant::from_member(member);
        state.participants.push(participant);
    }
}

fn find_target(state: &mut SessionState, target_id: TargetId) -> Option<&mut Target> {
    state.targets.iter_mut().find(|t| t.id() == target_id)
}

fn apply_participant_update(participant: &mut Participant, update: ParticipantUpdate) {
    match update {
        ParticipantUpdate::Duty(duty) => participant.set_duty(duty),
        ParticipantUpdate::Position(position) => participant.set_position(position),
        ParticipantUpdate::Weapon(weapon_id) => participant.set_weapon(weapon_id),
        ParticipantUpdate::Equipment(equipment_id) => participant.set_equipment(equipment_id),
    }
}

fn apply_target_update(target: &mut Target, update: TargetUpdate) {
    match update {
        TargetUpdate::Distance(distance) => target.distance = distance,
        TargetUpdate::WindStrength(strength) => target.wind_strength = strength,
        TargetUpdate::WindDirection(direction) => target.wind_direction = direction,
        TargetUpdate::MistakeCode(code) => target.mistake_code = code,
        TargetUpdate::FirstShotHit(hit) => target.first_shot_hit = hit,
        TargetUpdate::CombinedHits(hits) => target.combined_hits = hits,
    }
}

fn apply_session_update(state: &mut SessionState, update: SessionUpdate) {
    let session = &mut state.session;
    match update {
        SessionUpdate::Assignment(value) => session.assignment_id = value,
        SessionUpdate::DayPeriod(value) => session.day_period = value,
        SessionUpdate::TimeToFirstShot(value) => session.time_to_first_shot = value,
        SessionUpdate::Note(value) => session.note = value,
        SessionUpdate::Squad(value) => session.squad_id = value,
        SessionUpdate::Team(value) => session.team_id = value,
        SessionUpdate::Effort(value) => session.effort = value,
    }
}
