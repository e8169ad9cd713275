// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The work behind each subcommand.

use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use shotlog::{Command, CoreError, SessionReview, WizardStep};
use shotlog_api::{
    EditorConfig, EditorError, SessionEditor, SubmitError, SubmitOutcome, TracingNotifier,
    hydrate_state,
};
use shotlog_domain::{AssignmentId, DayPeriod, Roster, RosterMember, SessionId, UserId};
use shotlog_persistence::{
    PersistenceError, RosterSeed, RosterSource, SavedSession, SessionStore, SessionSummary,
    SqlitePersistence,
};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Store(#[from] PersistenceError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error(transparent)]
    Wizard(#[from] CoreError),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    /// The script left the session short of the summary step.
    #[error("Session is incomplete at the {step} step: {}", .messages.join("; "))]
    Incomplete {
        step: WizardStep,
        messages: Vec<String>,
    },

    #[error("Nobody on the roster can open session {0}")]
    NoInitiator(SessionId),
}

/// A scripted editing session.
///
/// `commands` are replayed in order against a new session, or against the
/// stored session named by `session_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordScript {
    pub user_id: UserId,
    #[serde(default)]
    pub session_id: Option<SessionId>,
    pub commands: Vec<Command>,
}

#[derive(Debug)]
pub struct RecordReport {
    pub review: SessionReview,
    pub outcome: SubmitOutcome,
}

impl RecordReport {
    #[must_use]
    pub fn outcome_line(&self) -> String {
        match &self.outcome {
            SubmitOutcome::Created(id) => format!("Created session {id}"),
            SubmitOutcome::Updated(id) => format!("Updated session {id}"),
            SubmitOutcome::Ignored(reason) => format!("Submit ignored ({reason:?})"),
            SubmitOutcome::Cancelled => String::from("Submit cancelled"),
        }
    }
}

/// Reads and parses a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse as `T`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text: String = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// # Errors
///
/// Returns an error if any record is rejected; nothing is stored then.
pub async fn seed_roster(
    persistence: &Mutex<SqlitePersistence>,
    seed: &RosterSeed,
) -> Result<(), CliError> {
    persistence.lock().await.seed_roster(seed)?;
    info!(
        members = seed.members.len(),
        weapons = seed.weapons.len(),
        equipment = seed.equipment.len(),
        assignments = seed.assignments.len(),
        "Roster seeded"
    );
    Ok(())
}

/// Replays `script`, walks the wizard as far as it allows, and submits.
///
/// # Errors
///
/// Returns [`CliError::Incomplete`] with the validation messages if the
/// session cannot reach a submittable summary.
pub async fn record(
    persistence: &Mutex<SqlitePersistence>,
    script: RecordScript,
    config: EditorConfig,
) -> Result<RecordReport, CliError> {
    let mut editor: SessionEditor = match &script.session_id {
        Some(session_id) => {
            SessionEditor::open_saved(persistence, persistence, session_id, &script.user_id, config)
                .await?
        }
        None => SessionEditor::open(persistence, &script.user_id, config).await?,
    };

    let total: usize = script.commands.len();
    let changed: usize = script
        .commands
        .into_iter()
        .map(|command| editor.dispatch(command))
        .filter(|changed| *changed)
        .count();
    info!(total, changed, "Replayed scripted edits");

    while editor.can_advance() {
        editor.advance()?;
    }
    if editor.current_step() != WizardStep::Summary || !editor.can_submit() {
        warn!(step = %editor.current_step(), "Scripted session is incomplete");
        return Err(CliError::Incomplete {
            step: editor.current_step(),
            messages: editor.validation_messages(),
        });
    }

    let outcome: SubmitOutcome = editor.submit(persistence, &TracingNotifier).await?;
    Ok(RecordReport {
        review: editor.review(),
        outcome,
    })
}

/// Builds the review of a stored session.
///
/// The session is opened as the user who submitted it, falling back to its
/// first participant.
///
/// # Errors
///
/// Returns an error if the session or roster cannot be loaded, or nobody
/// on the roster took part in the session.
pub async fn show(
    persistence: &Mutex<SqlitePersistence>,
    session_id: &SessionId,
) -> Result<SessionReview, CliError> {
    let saved: SavedSession = persistence.load_session(session_id).await?;
    let roster: Roster = persistence.roster().await?;

    let initiator: RosterMember = saved
        .payload
        .current_user
        .as_ref()
        .map(|user| user.id.clone())
        .into_iter()
        .chain(saved.payload.participants.iter().map(|p| p.user_id.clone()))
        .find_map(|user_id| roster.find(&user_id).cloned())
        .ok_or_else(|| CliError::NoInitiator(session_id.clone()))?;

    let state = hydrate_state(&saved, initiator, roster);
    Ok(SessionReview::from_state(&state))
}

/// One line of the `list` output.
#[must_use]
pub fn format_summary(summary: &SessionSummary) -> String {
    let assignment: &str = summary
        .assignment_id
        .as_ref()
        .map_or("-", AssignmentId::value);
    let period: &str = summary.day_period.as_ref().map_or("-", DayPeriod::as_str);
    format!(
        "{}  {}  {}  participants={} targets={} shots={} hits={}  {}",
        summary.session_id,
        assignment,
        period,
        summary.participant_count,
        summary.target_count,
        summary.total_shots,
        summary.total_hits,
        summary.updated_at.as_deref().unwrap_or(&summary.submitted_at),
    )
}
