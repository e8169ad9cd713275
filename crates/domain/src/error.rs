// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or parsing domain values.
///
/// Mutations on a session are total and never produce these. They arise at
/// the boundaries where raw input (stored rows, script files, command-line
/// values) is turned into domain types.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The duty string is not a known duty.
    InvalidDuty(String),
    /// The position string is not a known shooting position.
    InvalidPosition(String),
    /// The day period string is not `day` or `night`.
    InvalidDayPeriod(String),
    /// Wind direction must be within 0-360 degrees.
    WindDirectionOutOfRange(u16),
    /// Wind strength must be a finite, non-negative number.
    InvalidWindStrength(f64),
    /// A roster member's display name is empty.
    InvalidName(String),
    /// An identifier was empty.
    EmptyIdentifier {
        /// The kind of identifier (e.g. "user", "weapon").
        kind: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDuty(value) => {
                write!(f, "Invalid duty '{value}': expected Sniper or Spotter")
            }
            Self::InvalidPosition(value) => write!(
                f,
                "Invalid position '{value}': expected Lying, Standing, Sitting or Operational"
            ),
            Self::InvalidDayPeriod(value) => {
                write!(f, "Invalid day period '{value}': expected day or night")
            }
            Self::WindDirectionOutOfRange(degrees) => {
                write!(
                    f,
                    "Wind direction {degrees} is out of range: must be between 0 and 360"
                )
            }
            Self::InvalidWindStrength(value) => {
                write!(f, "Invalid wind strength {value}: must be 0 or greater")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::EmptyIdentifier { kind } => write!(f, "The {kind} identifier cannot be empty"),
        }
    }
}

impl std::error::Error for DomainError {}
