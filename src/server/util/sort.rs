//! Ordering of score-up results.

use std::cmp::Reverse;

use crate::server::{
    model::{card::CardView, search::ScoreUpSort},
    util::score::score_up_value,
};

/// Sort `cards` in place by `order`, highest/newest first.
///
/// The sort is stable, so cards with equal keys keep their incoming order. `level`
/// selects the skill level used by [`ScoreUpSort::Score`]. Under [`ScoreUpSort::Date`]
/// cards without a release year go last.
pub fn sort_score_up_cards(cards: &mut [CardView], order: ScoreUpSort, level: i32) {
    match order {
        ScoreUpSort::Score => cards.sort_by_key(|card| Reverse(score_up_value(card, level))),
        ScoreUpSort::Id => cards.sort_by_key(|card| Reverse(card.id)),
        ScoreUpSort::Date => cards.sort_by_key(|card| Reverse(release_date_key(card))),
    }
}

// `None` orders below every `Some`, so undated cards land last once reversed.
fn release_date_key(card: &CardView) -> Option<(i32, i32, i32)> {
    card.year.map(|year| {
        (
            year,
            card.month.unwrap_or(1) - 1,
            card.day.unwrap_or(1),
        )
    })
}
