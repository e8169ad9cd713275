// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for Shotlog.
//!
//! This crate defines the submission payload, the collaborator traits the
//! session editor depends on, and a reference store built on Diesel and
//! `SQLite`.
//!
//! ## Storage Model
//!
//! - Roster members and the weapon, equipment and assignment catalogs are
//!   stored as plain rows. Member defaults reference the catalogs and are
//!   checked by foreign keys.
//! - Each training session is one row holding the submitted payload as JSON
//!   alongside summary columns used for listing.
//!
//! ## Testing
//!
//! Tests run against shared-cache in-memory databases. Every call to
//! [`SqlitePersistence::new_in_memory`] gets its own database.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use shotlog_domain::{Assignment, Equipment, Roster, RosterMember, SessionId, Weapon};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod store;

#[cfg(test)]
mod tests;

pub use data_models::{
    CurrentUserPayload, EngagementPayload, ParticipantPayload, RosterSeed, SavedSession,
    SessionDataPayload, SessionPayload, SessionSummary, TargetPayload,
};
pub use error::PersistenceError;
pub use store::{RosterSource, SessionStore};

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` store for rosters and training sessions.
pub struct SqlitePersistence {
    conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates a store backed by a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:shotlog_mem_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a store backed by a database file, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::initialize_database(path_str)?;
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Roster & Catalogs
    // ========================================================================

    /// Loads catalogs and members in one transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any record is rejected; nothing is stored then.
    pub fn seed_roster(&mut self, seed: &RosterSeed) -> Result<(), PersistenceError> {
        mutations::seed_roster(&mut self.conn, seed)
    }

    /// Inserts or updates one roster member.
    ///
    /// # Errors
    ///
    /// Returns an error if the member is invalid or references an unknown
    /// catalog entry.
    pub fn upsert_roster_member(&mut self, member: &RosterMember) -> Result<(), PersistenceError> {
        mutations::upsert_roster_member(&mut self.conn, member)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn roster(&mut self) -> Result<Roster, PersistenceError> {
        queries::load_roster(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn weapons(&mut self) -> Result<Vec<Weapon>, PersistenceError> {
        queries::load_weapons(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn equipment(&mut self) -> Result<Vec<Equipment>, PersistenceError> {
        queries::load_equipment(&mut self.conn)
    }

    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn assignments(&mut self) -> Result<Vec<Assignment>, PersistenceError> {
        queries::load_assignments(&mut self.conn)
    }

    // ========================================================================
    // Training Sessions
    // ========================================================================

    /// Stores a new session and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn create_session(
        &mut self,
        payload: &SessionPayload,
    ) -> Result<SessionId, PersistenceError> {
        mutations::create_session(&mut self.conn, payload)
    }

    /// Replaces the contents of an existing session.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` if the id is unknown.
    pub fn update_session(
        &mut self,
        session_id: &SessionId,
        payload: &SessionPayload,
    ) -> Result<(), PersistenceError> {
        mutations::update_session(&mut self.conn, session_id, payload)
    }

    /// Loads a stored session.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` if the id is unknown.
    pub fn load_session(
        &mut self,
        session_id: &SessionId,
    ) -> Result<SavedSession, PersistenceError> {
        queries::load_session(&mut self.conn, session_id)
    }

    /// Lists every stored session, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_sessions(&mut self) -> Result<Vec<SessionSummary>, PersistenceError> {
        queries::list_sessions(&mut self.conn)
    }
}
