//! Validation of caller-supplied path and query values.
//!
//! Input is rejected here, before any query is issued, so that malformed input is
//! reported distinctly from "not found".

use crate::server::error::card::CardError;

/// Lowest and highest skill level a card can have.
pub const SKILL_LEVELS: std::ops::RangeInclusive<i32> = 1..=5;

/// Parse a card id from a path segment.
///
/// # Returns
/// - `Ok(i32)` - The card id
/// - `Err(CardError::InvalidCardId)` - The input is not an integer
pub fn parse_card_id(raw: &str) -> Result<i32, CardError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| CardError::InvalidCardId(raw.to_string()))
}

/// Parse a skill level, which must fall within [`SKILL_LEVELS`].
///
/// # Returns
/// - `Ok(i32)` - The skill level
/// - `Err(CardError::InvalidSkillLevel)` - The input is not an integer
/// - `Err(CardError::SkillLevelOutOfRange)` - The level is outside 1..=5
pub fn parse_skill_level(raw: &str) -> Result<i32, CardError> {
    let level = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| CardError::InvalidSkillLevel(raw.to_string()))?;

    if !SKILL_LEVELS.contains(&level) {
        return Err(CardError::SkillLevelOutOfRange(level));
    }

    Ok(level)
}

pub fn parse_year(raw: &str) -> Result<i32, CardError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| CardError::InvalidYear(raw.to_string()))
}
