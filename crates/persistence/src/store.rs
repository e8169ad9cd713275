// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The collaborator interfaces the session editor talks to.
//!
//! The editor never touches a database directly. It submits payloads to a
//! [`SessionStore`] and reads catalogs from a [`RosterSource`]; both are
//! async so a remote service can stand behind them. [`SqlitePersistence`]
//! implements both when wrapped in a `tokio::sync::Mutex`.

use std::future::Future;

use shotlog_domain::{Assignment, Equipment, Roster, SessionId, Weapon};
use tokio::sync::Mutex;

use crate::SqlitePersistence;
use crate::data_models::{SavedSession, SessionPayload};
use crate::error::PersistenceError;

/// Stores submitted training sessions.
pub trait SessionStore {
    /// Stores a new session and returns the id it was assigned.
    fn create_session(
        &self,
        payload: &SessionPayload,
    ) -> impl Future<Output = Result<SessionId, PersistenceError>> + Send;

    /// Replaces the contents of an existing session.
    fn update_session(
        &self,
        session_id: &SessionId,
        payload: &SessionPayload,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;

    /// Loads a previously stored session.
    fn load_session(
        &self,
        session_id: &SessionId,
    ) -> impl Future<Output = Result<SavedSession, PersistenceError>> + Send;
}

/// Supplies the read-side records the editor offers for selection.
pub trait RosterSource {
    fn roster(&self) -> impl Future<Output = Result<Roster, PersistenceError>> + Send;

    fn weapons(&self) -> impl Future<Output = Result<Vec<Weapon>, PersistenceError>> + Send;

    fn equipment(&self) -> impl Future<Output = Result<Vec<Equipment>, PersistenceError>> + Send;

    fn assignments(&self)
    -> impl Future<Output = Result<Vec<Assignment>, PersistenceError>> + Send;
}

impl SessionStore for Mutex<SqlitePersistence> {
    async fn create_session(
        &self,
        payload: &SessionPayload,
    ) -> Result<SessionId, PersistenceError> {
        self.lock().await.create_session(payload)
    }

    async fn update_session(
        &self,
        session_id: &SessionId,
        payload: &SessionPayload,
    ) -> Result<(), PersistenceError> {
        self.lock().await.update_session(session_id, payload)
    }

    async fn load_session(
        &self,
        session_id: &SessionId,
    ) -> Result<SavedSession, PersistenceError> {
        self.lock().await.load_session(session_id)
    }
}

impl RosterSource for Mutex<SqlitePersistence> {
    async fn roster(&self) -> Result<Roster, PersistenceError> {
        self.lock().await.roster()
    }

    async fn weapons(&self) -> Result<Vec<Weapon>, PersistenceError> {
        self.lock().await.weapons()
    }

    async fn equipment(&self) -> Result<Vec<Equipment>, PersistenceError> {
        self.lock().await.equipment()
    }

    async fn assignments(&self) -> Result<Vec<Assignment>, PersistenceError> {
        self.lock().await.assignments()
    }
}
