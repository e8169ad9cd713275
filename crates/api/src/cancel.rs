// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cancellation of in-progress external calls.
//!
//! Every call the editor makes to a collaborator runs inside a
//! [`CancelScope`]. Cancelling the scope aborts all of them at their next
//! suspension point and makes later calls fail immediately, so a torn-down
//! editor never applies a late result.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable, Aborted};
use tracing::debug;

/// Returned when a call was cancelled before it completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

impl std::fmt::Display for Cancelled {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operation was cancelled")
    }
}

impl std::error::Error for Cancelled {}

#[derive(Debug, Default)]
struct ScopeInner {
    cancelled: AtomicBool,
    next_id: AtomicU64,
    running: Mutex<HashMap<u64, AbortHandle>>,
}

impl ScopeInner {
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        let mut running = self.running.lock().unwrap_or_else(PoisonError::into_inner);
        debug!(count = running.len(), "Cancelling running calls");
        for (_, handle) in running.drain() {
            handle.abort();
        }
    }
}

/// Removes a call's abort handle when the call ends or is dropped mid-await.
struct Registration<'a> {
    inner: &'a ScopeInner,
    id: u64,
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.inner
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.id);
    }
}

/// Owns the abort handles of every call started through it.
#[derive(Debug, Clone, Default)]
pub struct CancelScope {
    inner: Arc<ScopeInner>,
}

/// Cancels a [`CancelScope`] from elsewhere, such as a teardown path.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    inner: Arc<ScopeInner>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.inner.cancel();
    }
}

impl CancelScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn handle(&self) -> CancelHandle {
        CancelHandle {
            inner: Arc::clone(&self.inner),
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Number of calls currently registered with this scope.
    #[must_use]
    pub fn running(&self) -> usize {
        self.inner
            .running
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Aborts every running call and refuses new ones.
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    /// Runs `future` to completion unless the scope is cancelled first.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the scope was cancelled before or while the
    /// future ran.
    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, Cancelled> {
        let (handle, registration) = AbortHandle::new_pair();
        let id: u64 = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        {
            let mut running = self
                .inner
                .running
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if self.is_cancelled() {
                return Err(Cancelled);
            }
            running.insert(id, handle);
        }
        let _registered: Registration<'_> = Registration {
            inner: &self.inner,
            id,
        };

        Abortable::new(future, registration)
            .await
            .map_err(|Aborted| Cancelled)
    }
}
