// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The session editor.
//!
//! A [`SessionEditor`] owns everything one editing session needs: the
//! session state, the wizard position, the edit journal, the submitter and
//! the cancellation scope for its external calls. Edits are synchronous;
//! only loading and submitting suspend.

use shotlog::{Command, CoreError, SessionReview, SessionState, Wizard, WizardStep, apply};
use shotlog_audit::{Actor, EditJournal};
use shotlog_domain::{
    Assignment, Equipment, Roster, RosterMember, SessionId, UserId, ValidationMode, Weapon,
    validate_form_messages,
};
use shotlog_persistence::{PersistenceError, RosterSource, SavedSession, SessionStore};
use tracing::{debug, info};

use crate::cancel::{CancelHandle, CancelScope};
use crate::error::{EditorError, SubmitError};
use crate::notify::Notifier;
use crate::payload::hydrate_state;
use crate::submit::{SubmitConfig, SubmitOutcome, Submitter};

/// Where the user should be after the last operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Navigation {
    /// Keep showing the editor.
    #[default]
    Stay,
    /// The session was saved; leave the editor.
    LeaveEditor,
}

/// Catalog records offered for selection while editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogs {
    pub weapons: Vec<Weapon>,
    pub equipment: Vec<Equipment>,
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorConfig {
    pub mode: ValidationMode,
    pub submit: SubmitConfig,
}

pub struct SessionEditor {
    actor: Actor,
    state: SessionState,
    wizard: Wizard,
    journal: EditJournal,
    catalogs: Catalogs,
    submitter: Submitter,
    scope: CancelScope,
    navigation: Navigation,
}

impl SessionEditor {
    /// Creates an editor for a new session started by `initiator`.
    #[must_use]
    pub fn new(initiator: RosterMember, roster: Roster, config: EditorConfig) -> Self {
        let actor: Actor = Actor::new(initiator.id.to_string(), String::from("user"));
        Self {
            actor,
            state: SessionState::new(initiator, roster),
            wizard: Wizard::new(config.mode),
            journal: EditJournal::new(),
            catalogs: Catalogs::default(),
            submitter: Submitter::new(config.submit),
            scope: CancelScope::new(),
            navigation: Navigation::Stay,
        }
    }

    /// Loads the roster and catalogs, then creates an editor for a new
    /// session started by `user_id`.
    ///
    /// The four reads are independent and run concurrently.
    ///
    /// # Errors
    ///
    /// Returns an error if a read fails, the user is not on the roster, or
    /// the load is cancelled.
    pub async fn open<R>(
        source: &R,
        user_id: &UserId,
        config: EditorConfig,
    ) -> Result<Self, EditorError>
    where
        R: RosterSource + Sync,
    {
        let scope: CancelScope = CancelScope::new();
        let (roster, catalogs) = load_roster_and_catalogs(source, &scope).await?;
        let initiator: RosterMember = roster
            .find(user_id)
            .cloned()
            .ok_or_else(|| EditorError::UnknownUser(user_id.clone()))?;

        info!(user = %user_id, members = roster.members().len(), "Opening session editor");
        let mut editor: Self = Self::new(initiator, roster, config);
        editor.catalogs = catalogs;
        editor.scope = scope;
        Ok(editor)
    }

    /// Loads a stored session and creates an editor for it.
    ///
    /// Submitting from this editor updates the stored session.
    ///
    /// # Errors
    ///
    /// Returns an error if a read fails, the user is not on the roster, or
    /// the load is cancelled.
    pub async fn open_saved<R, S>(
        source: &R,
        store: &S,
        session_id: &SessionId,
        user_id: &UserId,
        config: EditorConfig,
    ) -> Result<Self, EditorError>
    where
        R: RosterSource + Sync,
        S: SessionStore + Sync,
    {
        let mut editor: Self = Self::open(source, user_id, config).await?;
        let saved: SavedSession = editor
            .scope
            .run(store.load_session(session_id))
            .await
            .map_err(|_| EditorError::Cancelled)??;

        editor.state = hydrate_state(
            &saved,
            editor.state.initiator().clone(),
            editor.state.roster().clone(),
        );
        info!(session_id = %session_id, "Loaded stored session for editing");
        Ok(editor)
    }

    #[must_use]
    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub const fn journal(&self) -> &EditJournal {
        &self.journal
    }

    #[must_use]
    pub const fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    #[must_use]
    pub const fn current_step(&self) -> WizardStep {
        self.wizard.current()
    }

    #[must_use]
    pub const fn navigation(&self) -> Navigation {
        self.navigation
    }

    #[must_use]
    pub const fn submitter(&self) -> &Submitter {
        &self.submitter
    }

    /// Applies one edit. Returns whether it changed the session.
    pub fn dispatch(&mut self, command: Command) -> bool {
        let result = apply(&self.state, command, self.actor.clone());
        let changed: bool = result.edit_event.changed;
        self.journal.record(result.edit_event);
        self.state = result.new_state;
        if changed {
            self.navigation = Navigation::Stay;
        }
        changed
    }

    /// Moves to the next wizard step.
    ///
    /// # Errors
    ///
    /// Returns an error if the current step is incomplete or is the last step.
    pub fn advance(&mut self) -> Result<WizardStep, CoreError> {
        self.wizard.advance(&self.state)
    }

    /// Moves to the previous wizard step.
    ///
    /// # Errors
    ///
    /// Returns an error on the first step.
    pub fn back(&mut self) -> Result<WizardStep, CoreError> {
        self.wizard.back()
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.wizard.can_advance(&self.state)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.wizard.can_submit(&self.state)
    }

    /// Returns `true` if any edit since the last successful submit changed
    /// the session.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.journal.has_unsaved_changes()
    }

    /// The validation messages shown on the summary step.
    #[must_use]
    pub fn validation_messages(&self) -> Vec<String> {
        validate_form_messages(
            self.state.session(),
            self.state.participants(),
            self.state.targets(),
        )
    }

    #[must_use]
    pub fn review(&self) -> SessionReview {
        SessionReview::from_state(&self.state)
    }

    /// Discards the session and starts a new one on the first step.
    pub fn start_new(&mut self) {
        self.dispatch(Command::Reset);
        self.wizard.restart();
        self.journal.mark_saved();
        self.navigation = Navigation::Stay;
    }

    /// Validates and saves the session.
    ///
    /// On success the session id is kept so later submits update the same
    /// stored session, unsaved changes are cleared, and navigation moves to
    /// [`Navigation::LeaveEditor`]. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the store rejects the session.
    pub async fn submit<S, N>(
        &mut self,
        store: &S,
        notifier: &N,
    ) -> Result<SubmitOutcome, SubmitError>
    where
        S: SessionStore + Sync,
        N: Notifier + Sync,
    {
        let outcome: SubmitOutcome = self
            .submitter
            .submit(&self.state, &self.actor, store, notifier, &self.scope)
            .await?;

        if let Some(session_id) = outcome.saved_id() {
            self.state.mark_submitted(session_id.clone());
            self.journal.mark_saved();
            self.navigation = Navigation::LeaveEditor;
        } else {
            debug!(?outcome, "Submit produced no save");
        }
        Ok(outcome)
    }

    /// Returns a handle that cancels this editor's external calls.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        self.scope.handle()
    }

    /// Cancels every running external call. Later calls fail immediately.
    pub fn teardown(&self) {
        self.scope.cancel();
    }
}

impl Drop for SessionEditor {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}

async fn load_roster_and_catalogs<R>(
    source: &R,
    scope: &CancelScope,
) -> Result<(Roster, Catalogs), EditorError>
where
    R: RosterSource + Sync,
{
    let loaded: Result<(Roster, Vec<Weapon>, Vec<Equipment>, Vec<Assignment>), PersistenceError> =
        scope
            .run(async {
                futures::try_join!(
                    source.roster(),
                    source.weapons(),
                    source.equipment(),
                    source.assignments()
                )
            })
            .await
            .map_err(|_| EditorError::Cancelled)?;

    let (roster, weapons, equipment, assignments) = loaded?;
    debug!(
        weapons = weapons.len(),
        equipment = equipment.len(),
        assignments = assignments.len(),
        "Catalogs loaded"
    );
    Ok((
        roster,
        Catalogs {
            weapons,
            equipment,
            assignments,
        },
    ))
}
