// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Mutex;
use std::time::Duration;

use shotlog::{Command, EngagementUpdate, SessionState, SessionUpdate, apply};
use shotlog_audit::Actor;
use shotlog_domain::{
    Assignment, AssignmentId, DayPeriod, Duty, Equipment, EquipmentId, Roster, RosterMember,
    SessionId, TargetId, UserId, Weapon, WeaponId,
};
use shotlog_persistence::{
    PersistenceError, RosterSource, SavedSession, SessionPayload, SessionStore,
};

use crate::{Notification, Notifier};

/// Session store double that records every call.
#[derive(Default)]
pub struct MockStore {
    created: Mutex<Vec<SessionPayload>>,
    updated: Mutex<Vec<(SessionId, SessionPayload)>>,
    failure: Option<PersistenceError>,
    delay: Duration,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: PersistenceError) -> Self {
        Self {
            failure: Some(err),
            ..Self::default()
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn created(&self) -> Vec<SessionPayload> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<(SessionId, SessionPayload)> {
        self.updated.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.created.lock().unwrap().len() + self.updated.lock().unwrap().len()
    }

    async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl SessionStore for MockStore {
    async fn create_session(
        &self,
        payload: &SessionPayload,
    ) -> Result<SessionId, PersistenceError> {
        self.pause().await;
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        let mut created = self.created.lock().unwrap();
        created.push(payload.clone());
        Ok(SessionId::new(&format!("session-{}", created.len())))
    }

    async fn update_session(
        &self,
        session_id: &SessionId,
        payload: &SessionPayload,
    ) -> Result<(), PersistenceError> {
        self.pause().await;
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.updated
            .lock()
            .unwrap()
            .push((session_id.clone(), payload.clone()));
        Ok(())
    }

    async fn load_session(&self, session_id: &SessionId) -> Result<SavedSession, PersistenceError> {
        let index: usize = session_id
            .value()
            .strip_prefix("session-")
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or_else(|| PersistenceError::SessionNotFound(session_id.to_string()))?;
        let payload: SessionPayload = self
            .created
            .lock()
            .unwrap()
            .get(index.saturating_sub(1))
            .cloned()
            .ok_or_else(|| PersistenceError::SessionNotFound(session_id.to_string()))?;
        Ok(SavedSession {
            session_id: session_id.clone(),
            payload,
            submitted_at: String::from("2026-01-01T00:00:00Z"),
            updated_at: None,
        })
    }
}

/// Roster source double serving fixed records.
pub struct MockRoster {
    pub roster: Roster,
    pub failure: Option<PersistenceError>,
}

impl MockRoster {
    pub fn new() -> Self {
        Self {
            roster: create_test_roster(),
            failure: None,
        }
    }

    fn check(&self) -> Result<(), PersistenceError> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

impl RosterSource for MockRoster {
    async fn roster(&self) -> Result<Roster, PersistenceError> {
        self.check()?;
        Ok(self.roster.clone())
    }

    async fn weapons(&self) -> Result<Vec<Weapon>, PersistenceError> {
        self.check()?;
        Ok(vec![Weapon {
            id: WeaponId::new("w1"),
            weapon_type: String::from("Bolt action"),
            serial_number: String::from("SN-001"),
        }])
    }

    async fn equipment(&self) -> Result<Vec<Equipment>, PersistenceError> {
        self.check()?;
        Ok(vec![Equipment {
            id: EquipmentId::new("e1"),
            equipment_type: String::from("Spotting scope"),
            serial_number: String::from("SC-100"),
        }])
    }

    async fn assignments(&self) -> Result<Vec<Assignment>, PersistenceError> {
        self.check()?;
        Ok(vec![Assignment {
            id: AssignmentId::new("a1"),
            name: String::from("Qualification"),
        }])
    }
}

/// Notifier double that keeps every notification.
#[derive(Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap().push(notification);
    }
}

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("u1"), String::from("user"))
}

pub fn create_initiator() -> RosterMember {
    let mut alice: RosterMember = RosterMember::new("u1", "Alice");
    alice.default_duty = Some(Duty::Sniper);
    alice.default_weapon_id = Some(WeaponId::new("w1"));
    alice
}

pub fn create_test_roster() -> Roster {
    let mut bob: RosterMember = RosterMember::new("u2", "Bob");
    bob.default_duty = Some(Duty::Spotter);
    bob.default_equipment_id = Some(EquipmentId::new("e1"));
    Roster::new(vec![create_initiator(), bob])
}

pub fn user(id: &str) -> UserId {
    UserId::new(id)
}

/// Commands that make a fresh session submittable: complete config, one
/// target, 5 shots and 3 hits for the initiating user.
pub fn submittable_commands() -> Vec<Command> {
    vec![
        Command::UpdateSession {
            update: SessionUpdate::Assignment(Some(AssignmentId::new("a1"))),
        },
        Command::UpdateSession {
            update: SessionUpdate::DayPeriod(Some(DayPeriod::Day)),
        },
        Command::UpdateSession {
            update: SessionUpdate::TimeToFirstShot(Some(12)),
        },
        Command::UpdateSession {
            update: SessionUpdate::Effort(Some(true)),
        },
        Command::AddTarget,
        Command::UpdateEngagement {
            target_id: TargetId::new(1),
            user_id: user("u1"),
            update: EngagementUpdate::ShotsFired(Some(5)),
        },
        Command::UpdateEngagement {
            target_id: TargetId::new(1),
            user_id: user("u1"),
            update: EngagementUpdate::TargetHits(Some(3)),
        },
    ]
}

pub fn apply_all(state: &SessionState, commands: Vec<Command>) -> SessionState {
    commands.into_iter().fold(state.clone(), |current, command| {
        apply(&current, command, create_test_actor()).new_state
    })
}

pub fn create_submittable_state() -> SessionState {
    apply_all(
        &SessionState::new(create_initiator(), create_test_roster()),
        submittable_commands(),
    )
}
