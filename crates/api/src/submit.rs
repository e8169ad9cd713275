// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submission of a finished session to the session store.
//!
//! A [`Submitter`] is shared by reference between every caller that can
//! trigger a save. Requests that arrive while a save is in flight, or within
//! the debounce window of the previous request that reached the store, are
//! ignored rather than queued, so a double click produces exactly one store
//! call. A request rejected by validation does not start the window.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use shotlog::SessionState;
use shotlog_audit::Actor;
use shotlog_domain::{SessionId, UserId, ValidationIssue, validate_form};
use shotlog_persistence::{PersistenceError, SessionPayload, SessionStore};
use tracing::{debug, error, info, warn};

use crate::cancel::{CancelScope, Cancelled};
use crate::error::SubmitError;
use crate::notify::{Notification, Notifier};
use crate::payload::build_payload;

/// Default minimum interval between submit requests that reach the store.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitConfig {
    /// Requests closer than this to the previous store call are ignored.
    pub debounce: Duration,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Why a submit request was dropped without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    InFlight,
    Debounced,
}

/// The result of a submit request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new session was stored under this id.
    Created(SessionId),
    /// The existing session with this id was updated.
    Updated(SessionId),
    /// The request was dropped; nothing was sent.
    Ignored(IgnoreReason),
    /// The store call was cancelled before it completed.
    Cancelled,
}

impl SubmitOutcome {
    /// Returns the stored session id if the store accepted the session.
    #[must_use]
    pub const fn saved_id(&self) -> Option<&SessionId> {
        match self {
            Self::Created(id) | Self::Updated(id) => Some(id),
            Self::Ignored(_) | Self::Cancelled => None,
        }
    }
}

#[derive(Debug, Default)]
struct GuardState {
    in_flight: bool,
    last_accepted: Option<Instant>,
}

/// Clears the in-flight flag when the request finishes, however it finishes.
struct InFlightGuard<'a> {
    state: &'a Mutex<GuardState>,
}

impl InFlightGuard<'_> {
    /// Starts the debounce window once the request is headed for the store.
    fn accept(&self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last_accepted = Some(Instant::now());
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .in_flight = false;
    }
}

/// Validates and saves sessions, coalescing overlapping requests.
#[derive(Debug, Default)]
pub struct Submitter {
    config: SubmitConfig,
    guard: Mutex<GuardState>,
}

impl Submitter {
    #[must_use]
    pub fn new(config: SubmitConfig) -> Self {
        Self {
            config,
            guard: Mutex::new(GuardState::default()),
        }
    }

    #[must_use]
    pub const fn config(&self) -> SubmitConfig {
        self.config
    }

    /// Returns `true` while a request is between acceptance and completion.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .in_flight
    }

    fn try_begin(&self) -> Result<InFlightGuard<'_>, IgnoreReason> {
        let now: Instant = Instant::now();
        let mut state = self.guard.lock().unwrap_or_else(PoisonError::into_inner);

        if state.in_flight {
            return Err(IgnoreReason::InFlight);
        }
        let debounced: bool = state
            .last_accepted
            .is_some_and(|previous| now.duration_since(previous) < self.config.debounce);
        if debounced {
            return Err(IgnoreReason::Debounced);
        }

        state.in_flight = true;
        Ok(InFlightGuard { state: &self.guard })
    }

    /// Validates `state` and sends it to `store`.
    ///
    /// Sessions that already carry a session id are updated; all others are
    /// created. The outcome is also reported through `notifier`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] without calling the store if the
    /// session has validation issues, or [`SubmitError::Store`] if the store
    /// call fails. `state` is never modified.
    pub async fn submit<S, N>(
        &self,
        state: &SessionState,
        actor: &Actor,
        store: &S,
        notifier: &N,
        scope: &CancelScope,
    ) -> Result<SubmitOutcome, SubmitError>
    where
        S: SessionStore + Sync,
        N: Notifier + Sync,
    {
        let guard: InFlightGuard<'_> = match self.try_begin() {
            Ok(guard) => guard,
            Err(reason) => {
                debug!(actor = %actor.id, ?reason, "Submit request ignored");
                return Ok(SubmitOutcome::Ignored(reason));
            }
        };

        let issues: Vec<ValidationIssue> =
            validate_form(state.session(), state.participants(), state.targets());
        if let Some(first) = issues.first() {
            warn!(actor = %actor.id, count = issues.len(), "Submit blocked by validation");
            notifier.notify(Notification::Failure(format!(
                "Please fix the session before submitting: {first}"
            )));
            return Err(SubmitError::Invalid { issues });
        }

        guard.accept();
        let current_user: UserId = UserId::new(&actor.id);
        let payload: SessionPayload = build_payload(state, Some(&current_user));

        let result: Result<Result<SubmitOutcome, PersistenceError>, Cancelled> =
            match state.session_id() {
                Some(session_id) => {
                    scope
                        .run(async {
                            store.update_session(session_id, &payload).await?;
                            Ok::<_, PersistenceError>(SubmitOutcome::Updated(session_id.clone()))
                        })
                        .await
                }
                None => {
                    scope
                        .run(async {
                            let session_id: SessionId = store.create_session(&payload).await?;
                            Ok::<_, PersistenceError>(SubmitOutcome::Created(session_id))
                        })
                        .await
                }
            };

        match result {
            Ok(Ok(outcome)) => {
                info!(actor = %actor.id, ?outcome, "Session saved");
                let message: &str = match &outcome {
                    SubmitOutcome::Updated(_) => "Session updated",
                    _ => "Session saved",
                };
                notifier.notify(Notification::Success(message.to_string()));
                Ok(outcome)
            }
            Ok(Err(err)) => {
                error!(actor = %actor.id, error = %err, "Session save failed");
                notifier.notify(Notification::Failure(format!(
                    "Failed to save session: {err}"
                )));
                Err(SubmitError::Store(err))
            }
            Err(Cancelled) => {
                info!(actor = %actor.id, "Submit cancelled");
                Ok(SubmitOutcome::Cancelled)
            }
        }
    }
}
