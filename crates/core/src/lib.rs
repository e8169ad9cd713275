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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod consistency;
mod error;
mod review;
mod state;
mod wizard;

#[cfg(test)]
mod tests;

pub use apply::apply;
pub use command::{Command, EngagementUpdate, ParticipantUpdate, SessionUpdate, TargetUpdate};
pub use consistency::{reconcile_engagements, release_stale_combined_hits};
pub use error::CoreError;
pub use review::{SessionReview, TargetSummary};
pub use state::{SessionState, TransitionResult};
pub use wizard::{Wizard, WizardStep};
