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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use shotlog_api::{EditorConfig, SubmitConfig};
use shotlog_domain::{SessionId, ValidationMode};
use shotlog_persistence::{RosterSeed, SqlitePersistence};
use tokio::sync::Mutex;
use tracing::info;

use crate::commands::{RecordReport, RecordScript, format_summary, read_json};

/// Shotlog - record and review shooting-team training sessions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Roster file to load before running the command.
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Minimum interval between accepted submit requests, in milliseconds.
    #[arg(long, default_value_t = 300)]
    debounce_ms: u64,

    /// Require a positive distance on every target before leaving the targets step.
    #[arg(long)]
    strict: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Load weapons, equipment, assignments and roster members from a JSON file.
    SeedRoster { file: PathBuf },
    /// Replay a scripted editing session and submit it.
    Record { script: PathBuf },
    /// List stored sessions.
    List,
    /// Print the review of a stored session.
    Show { session_id: String },
}

impl Args {
    const fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            mode: if self.strict {
                ValidationMode::Strict
            } else {
                ValidationMode::Standard
            },
            submit: SubmitConfig {
                debounce: Duration::from_millis(self.debounce_ms),
            },
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path.display());
        SqlitePersistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqlitePersistence::new_in_memory()?
    };
    let persistence: Mutex<SqlitePersistence> = Mutex::new(persistence);

    if let Some(seed_path) = &args.seed {
        let seed: RosterSeed = read_json(seed_path)?;
        commands::seed_roster(&persistence, &seed).await?;
    }

    match &args.command {
        CliCommand::SeedRoster { file } => {
            let seed: RosterSeed = read_json(file)?;
            commands::seed_roster(&persistence, &seed).await?;
        }
        CliCommand::Record { script } => {
            let script: RecordScript = read_json(script)?;
            let report: RecordReport =
                commands::record(&persistence, script, args.editor_config()).await?;
            println!("{}", report.review);
            println!("{}", report.outcome_line());
        }
        CliCommand::List => {
            for summary in persistence.lock().await.list_sessions()? {
                println!("{}", format_summary(&summary));
            }
        }
        CliCommand::Show { session_id } => {
            let review = commands::show(&persistence, &SessionId::new(session_id)).await?;
            println!("{review}");
        }
    }

    Ok(())
}
