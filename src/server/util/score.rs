//! Score-up value of a card.

use crate::server::model::card::{CardView, SkillDetailView};

/// Expected score gain of a skill level: `floor(value * rate / 100)`.
///
/// Missing `value` or `rate` count as zero.
pub fn skill_score(detail: &SkillDetailView) -> i64 {
    let value = i64::from(detail.value.unwrap_or(0));
    let rate = i64::from(detail.rate.unwrap_or(0));

    (value * rate).div_euclid(100)
}

/// Score-up value of `card` at `level`, or 0 when the card has no row for that level.
pub fn score_up_value(card: &CardView, level: i32) -> i64 {
    card.skill_detail(level).map(skill_score).unwrap_or(0)
}
