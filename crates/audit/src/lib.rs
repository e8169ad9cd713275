// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

/// Represents the person editing a session.
///
/// The actor is the initiating user of the editor; every edit recorded in
/// the journal is attributed to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "user", "script").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the edit that was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the edit (e.g., "`AddTarget`", "`RemoveParticipant`").
    pub name: String,
    /// Optional additional details about the edit.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the edit
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact summary of session state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable record of one edit applied to a session.
///
/// Edit events capture:
/// - Who made the edit (actor)
/// - What edit was made (action)
/// - Whether the edit changed anything (changed)
/// - The state before and after the edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    /// The actor who made this edit.
    pub actor: Actor,
    /// The edit that was applied.
    pub action: Action,
    /// The state before the edit.
    pub before: StateSnapshot,
    /// The state after the edit.
    pub after: StateSnapshot,
    /// Whether the edit modified the session. No-op edits are still recorded.
    pub changed: bool,
}

impl EditEvent {
    /// Creates a new `EditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who made the edit
    /// * `action` - The edit that was applied
    /// * `before` - The state before the edit
    /// * `after` - The state after the edit
    /// * `changed` - Whether the edit modified the session
    #[must_use]
    pub const fn new(
        actor: Actor,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
        changed: bool,
    ) -> Self {
        Self {
            actor,
            action,
            before,
            after,
            changed,
        }
    }
}

/// Ordered log of the edits made in one editing session.
///
/// The journal also remembers where the last successful save happened so
/// the editor can warn about unsaved changes before navigating away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditJournal {
    events: Vec<EditEvent>,
    saved_at: usize,
}

impl EditJournal {
    /// Creates an empty journal.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            events: Vec::new(),
            saved_at: 0,
        }
    }

    /// Appends an edit.
    pub fn record(&mut self, event: EditEvent) {
        self.events.push(event);
    }

    /// Returns every recorded edit, oldest first.
    #[must_use]
    pub fn events(&self) -> &[EditEvent] {
        &self.events
    }

    /// Returns the number of recorded edits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Marks everything recorded so far as saved.
    pub fn mark_saved(&mut self) {
        self.saved_at = self.events.len();
    }

    /// Returns `true` if any edit since the last save changed the session.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.events[self.saved_at..].iter().any(|e| e.changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_event(name: &str, changed: bool) -> EditEvent {
        EditEvent::new(
            Actor::new(String::from("user-123"), String::from("user")),
            Action::new(String::from(name), None),
            StateSnapshot::new(String::from("before-state")),
            StateSnapshot::new(String::from("after-state")),
            changed,
        )
    }

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("user-123"), String::from("user"));

        assert_eq!(actor.id, "user-123");
        assert_eq!(actor.actor_type, "user");
    }

    #[test]
    fn test_action_creation_with_details() {
        let action: Action = Action::new(
            String::from("AddTarget"),
            Some(String::from("Added target 1")),
        );

        assert_eq!(action.name, "AddTarget");
        assert_eq!(action.details, Some(String::from("Added target 1")));
    }

    #[test]
    fn test_edit_event_creation_requires_all_fields() {
        let event: EditEvent = create_event("AddTarget", true);

        assert_eq!(event.actor.id, "user-123");
        assert_eq!(event.action.name, "AddTarget");
        assert_eq!(event.before.data, "before-state");
        assert_eq!(event.after.data, "after-state");
        assert!(event.changed);
    }

    #[test]
    fn test_empty_journal_has_no_unsaved_changes() {
        let journal: EditJournal = EditJournal::new();

        assert!(journal.is_empty());
        assert!(!journal.has_unsaved_changes());
    }

    #[test]
    fn test_noop_edits_do_not_count_as_unsaved() {
        let mut journal: EditJournal = EditJournal::new();
        journal.record(create_event("RemoveParticipant", false));

        assert_eq!(journal.len(), 1);
        assert!(!journal.has_unsaved_changes());
    }

    #[test]
    fn test_mark_saved_clears_unsaved_changes() {
        let mut journal: EditJournal = EditJournal::new();
        journal.record(create_event("AddTarget", true));
        assert!(journal.has_unsaved_changes());

        journal.mark_saved();
        assert!(!journal.has_unsaved_changes());

        journal.record(create_event("UpdateTarget", true));
        assert!(journal.has_unsaved_changes());
        assert_eq!(journal.events().len(), 2);
    }
}
