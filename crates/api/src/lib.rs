// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Editor boundary for Shotlog.
//!
//! This crate ties the pure editing engine to its collaborators: it loads
//! rosters and stored sessions, turns the editing state into the submission
//! payload, and guards submission against duplicate requests.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod cancel;
mod editor;
mod error;
mod notify;
mod payload;
mod submit;

#[cfg(test)]
mod tests;

pub use cancel::{CancelHandle, CancelScope, Cancelled};
pub use editor::{Catalogs, EditorConfig, Navigation, SessionEditor};
pub use error::{EditorError, SubmitError};
pub use notify::{Notification, Notifier, TracingNotifier};
pub use payload::{build_payload, hydrate_state};
pub use submit::{DEFAULT_DEBOUNCE, IgnoreReason, SubmitConfig, SubmitOutcome, Submitter};
