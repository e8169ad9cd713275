// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tracing::{error, info};

/// A user-facing message about the outcome of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Failure(String),
}

impl Notification {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }
}

/// Surfaces notifications to the user.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log. Used when there is no interactive UI.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification {
            Notification::Success(message) => info!(%message, "Notification"),
            Notification::Failure(message) => error!(%message, "Notification"),
        }
    }
}
