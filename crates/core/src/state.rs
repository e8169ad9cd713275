// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::consistency::reconcile_engagements;
use shotlog_audit::{EditEvent, StateSnapshot};
use shotlog_domain::{
    Participant, Roster, RosterMember, SessionData, SessionId, Target, TargetId, UserId,
    saturating_total, total_hits, total_shots,
};

/// The complete editing state of one training session.
///
/// A `SessionState` is owned by a single editor for the lifetime of the
/// editing session. Participants and targets are only changed through
/// [`crate::apply`]; the initiating user is inserted at construction and is
/// always present.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// The persisted session this state edits, if it has been saved.
    session_id: Option<SessionId>,
    /// The roster record of the user who opened the editor.
    initiator: RosterMember,
    /// Roster members that may be added as participants.
    roster: Roster,
    /// Session-level metadata.
    pub(crate) session: SessionData,
    /// Participants, in the order they were added.
    pub(crate) participants: Vec<Participant>,
    /// Targets, in the order they were added.
    pub(crate) targets: Vec<Target>,
    /// The identity the next added target receives.
    pub(crate) next_target_id: TargetId,
    /// Whether the current contents have been submitted successfully.
    submitted: bool,
}

impl SessionState {
    /// Creates a fresh session with the initiating user as its only participant.
    ///
    /// # Arguments
    ///
    /// * `initiator` - The roster record of the user opening the editor
    /// * `roster` - The roster other participants are drawn from
    #[must_use]
    pub fn new(initiator: RosterMember, roster: Roster) -> Self {
        let participant: Participant = Participant::from_member(&initiator);
        Self {
            session_id: None,
            initiator,
            roster,
            session: SessionData::default(),
            participants: vec![participant],
            targets: Vec::new(),
            next_target_id: TargetId::new(1),
            submitted: false,
        }
    }

    /// Rebuilds the editing state of a previously saved session.
    ///
    /// The initiating user is inserted first if the saved session did not
    /// include them, and engagements are reconciled against the participant
    /// list so every (participant, target) pair has exactly one record.
    #[must_use]
    pub fn hydrate(
        session_id: SessionId,
        session: SessionData,
        participants: Vec<Participant>,
        targets: Vec<Target>,
        initiator: RosterMember,
        roster: Roster,
    ) -> Self {
        let mut participants: Vec<Participant> = participants;
        if !participants.iter().any(|p| p.user_id() == &initiator.id) {
            participants.insert(0, Participant::from_member(&initiator));
        }

        let mut targets: Vec<Target> = targets;
        reconcile_engagements(&participants, &mut targets);

        let next_target_id: TargetId = targets
            .iter()
            .map(Target::id)
            .max()
            .map_or(TargetId::new(1), TargetId::next);

        Self {
            session_id: Some(session_id),
            initiator,
            roster,
            session,
            participants,
            targets,
            next_target_id,
            submitted: false,
        }
    }

    /// Returns a fresh state for the same initiating user and roster.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::new(self.initiator.clone(), self.roster.clone())
    }

    #[must_use]
    pub const fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    #[must_use]
    pub const fn initiator(&self) -> &RosterMember {
        &self.initiator
    }

    /// Returns the id of the user who may never be removed.
    #[must_use]
    pub const fn initiating_user_id(&self) -> &UserId {
        &self.initiator.id
    }

    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub const fn session(&self) -> &SessionData {
        &self.session
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Looks up a participant by user id.
    #[must_use]
    pub fn participant(&self, user_id: &UserId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.user_id() == user_id)
    }

    /// Looks up a target by id.
    #[must_use]
    pub fn target(&self, target_id: TargetId) -> Option<&Target> {
        self.targets.iter().find(|t| t.id() == target_id)
    }

    /// Returns whether the current contents were submitted successfully.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Records a successful submission.
    ///
    /// Later submissions of this state update the same persisted session.
    pub fn mark_submitted(&mut self, session_id: SessionId) {
        self.session_id = Some(session_id);
        self.submitted = true;
    }

    /// Clears the submitted flag after a post-submission edit.
    pub(crate) fn mark_edited(&mut self) {
        self.submitted = false;
    }

    /// Converts the state to a snapshot for the edit journal.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let shots: u32 = saturating_total(self.targets.iter().map(total_shots));
        let hits: u32 = saturating_total(self.targets.iter().map(total_hits));
        StateSnapshot::new(format!(
            "participants={},targets={},shots={shots},hits={hits}",
            self.participants.len(),
            self.targets.len(),
        ))
    }
}

/// The result of applying a command.
///
/// Transitions are atomic: the new state is produced from a copy of the old
/// one, so the caller either adopts it completely or not at all.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: SessionState,
    /// The journal entry recording this transition.
    pub edit_event: EditEvent,
}
