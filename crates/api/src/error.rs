// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the editor boundary.

use shotlog_domain::{UserId, ValidationIssue};
use shotlog_persistence::PersistenceError;
use thiserror::Error;

/// Why a submission did not reach the store, or failed there.
#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    /// The session failed validation; the store was not called.
    #[error("Session cannot be submitted: {} validation issue(s)", .issues.len())]
    Invalid { issues: Vec<ValidationIssue> },

    /// The store rejected the session or could not be reached.
    #[error("Failed to save session: {0}")]
    Store(#[from] PersistenceError),
}

/// Errors raised while opening an editor.
#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    /// The user opening the editor is not on the roster.
    #[error("User {0} is not on the roster")]
    UnknownUser(UserId),

    /// Loading from a collaborator failed.
    #[error("Failed to load session data: {0}")]
    Store(#[from] PersistenceError),

    /// The editor was torn down while loading.
    #[error("Loading was cancelled")]
    Cancelled,
}
