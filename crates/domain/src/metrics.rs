// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Derived metrics over a session's participants and targets.
//!
//! Metrics are **computed**, not stored. Every function here is a pure
//! function of the current entity graph and is recomputed on each read.
//! Unset shot or hit values count as zero.

use crate::types::{Participant, Target, UserId};
use serde::{Deserialize, Serialize};

/// Hit percentage, or the explicit absence of data.
///
/// `NoData` is produced when no shots were fired. It renders as `N/A`,
/// never as `0%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accuracy {
    /// No shots were fired, so accuracy is undefined.
    NoData,
    /// Hits divided by shots, as a whole percentage.
    Percent(u32),
}

impl Accuracy {
    /// Returns the percentage, if there is one.
    #[must_use]
    pub const fn percent(self) -> Option<u32> {
        match self {
            Self::NoData => None,
            Self::Percent(value) => Some(value),
        }
    }
}

impl std::fmt::Display for Accuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoData => write!(f, "N/A"),
            Self::Percent(value) => write!(f, "{value}%"),
        }
    }
}

/// Divides `numerator` by `denominator`, rounding half up.
///
/// The caller guarantees `denominator > 0`.
const fn div_round_half_up(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Computes accuracy as `hits / shots * 100`, rounded to the nearest integer.
///
/// # Examples
///
/// ```
/// use shotlog_domain::{Accuracy, accuracy};
///
/// assert_eq!(accuracy(0, 0), Accuracy::NoData);
/// assert_eq!(accuracy(7, 2), Accuracy::Percent(29));
/// ```
#[must_use]
pub fn accuracy(shots: u32, hits: u32) -> Accuracy {
    if shots == 0 {
        return Accuracy::NoData;
    }
    let percent: u64 = div_round_half_up(u64::from(hits) * 100, u64::from(shots));
    Accuracy::Percent(u32::try_from(percent).unwrap_or(u32::MAX))
}

/// Adds counts, saturating at `u32::MAX`.
#[must_use]
pub fn saturating_total<I: IntoIterator<Item = u32>>(values: I) -> u32 {
    values.into_iter().fold(0, u32::saturating_add)
}

/// Sum of shots fired across a target's engagements.
#[must_use]
pub fn total_shots(target: &Target) -> u32 {
    saturating_total(target.engagements.iter().map(|e| e.shots_fired.unwrap_or(0)))
}

/// Sum of hits across a target's engagements.
#[must_use]
pub fn total_hits(target: &Target) -> u32 {
    saturating_total(target.engagements.iter().map(|e| e.target_hits.unwrap_or(0)))
}

/// The hit total reported for a target.
///
/// A manually entered combined figure takes precedence over the summed
/// per-participant hits.
#[must_use]
pub fn reported_hits(target: &Target) -> u32 {
    target.combined_hits.unwrap_or_else(|| total_hits(target))
}

/// Session-wide aggregates shown on the review step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTotals {
    pub participants: usize,
    pub targets: usize,
    pub shots: u32,
    pub hits: u32,
    /// Overall accuracy: shots and hits summed across targets, then ratioed.
    pub accuracy: Accuracy,
}

/// Computes the session-wide aggregates.
#[must_use]
pub fn session_totals(participants: &[Participant], targets: &[Target]) -> SessionTotals {
    let shots: u32 = saturating_total(targets.iter().map(total_shots));
    let hits: u32 = saturating_total(targets.iter().map(total_hits));
    SessionTotals {
        participants: participants.len(),
        targets: targets.len(),
        shots,
        hits,
        accuracy: accuracy(shots, hits),
    }
}

/// One participant's totals across every target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTotals {
    pub user_id: UserId,
    pub name: String,
    pub shots: u32,
    pub hits: u32,
    pub accuracy: Accuracy,
}

/// Computes per-participant totals, in participant order.
#[must_use]
pub fn user_totals(participants: &[Participant], targets: &[Target]) -> Vec<UserTotals> {
    participants
        .iter()
        .map(|participant| {
            let (shots, hits) = targets
                .iter()
                .filter_map(|t| t.engagement(participant.user_id()))
                .fold((0_u32, 0_u32), |(shots, hits), e| {
                    (
                        shots.saturating_add(e.shots_fired.unwrap_or(0)),
                        hits.saturating_add(e.target_hits.unwrap_or(0)),
                    )
                });
            UserTotals {
                user_id: participant.user_id().clone(),
                name: participant.name().to_string(),
                shots,
                hits,
                accuracy: accuracy(shots, hits),
            }
        })
        .collect()
}

/// Splits a combined hit total across a target's engagements.
///
/// Each engagement receives `combined_hits * its_shots / target_shots`,
/// rounded half up independently and capped at its own shots fired. Because
/// rounding is per participant, the distributed sum can drift from the
/// combined figure when three or more participants share the target.
///
/// Returns one `(user, hits)` pair per engagement, in engagement order. When
/// the target has no shots every participant receives zero.
#[must_use]
pub fn distribute_hits(target: &Target, combined_hits: u32) -> Vec<(UserId, u32)> {
    let target_shots: u64 = u64::from(total_shots(target));

    target
        .engagements
        .iter()
        .map(|engagement| {
            let shots: u32 = engagement.shots_fired.unwrap_or(0);
            if target_shots == 0 || shots == 0 {
                return (engagement.user_id.clone(), 0);
            }
            let share: u64 =
                div_round_half_up(u64::from(combined_hits) * u64::from(shots), target_shots);
            let hits: u32 = u32::try_from(share).unwrap_or(u32::MAX).min(shots);
            (engagement.user_id.clone(), hits)
        })
        .collect()
}
