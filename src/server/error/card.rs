//! Errors for caller-supplied card input.

use thiserror::Error;

/// Rejected card lookup or search input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CardError {
    /// The card id was not a positive integer.
    #[error("Invalid card ID: {0:?}")]
    InvalidCardId(String),
    /// The skill level was not an integer.
    #[error("Invalid skill level: {0:?}")]
    InvalidSkillLevel(String),
    /// The skill level was outside 1..=5.
    #[error("Skill level {0} is out of range, expected 1 to 5")]
    SkillLevelOutOfRange(i32),
    /// The release year filter was not an integer.
    #[error("Invalid release year: {0:?}")]
    InvalidYear(String),
}
