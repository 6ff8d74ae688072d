//! Merging of regular cards and normalized group cards into one list.

use std::cmp::Reverse;

use crate::server::model::card::CardView;

/// Pages larger than this interleave group cards instead of sorting by id.
pub const INTERLEAVE_THRESHOLD: u64 = 100;

/// Upper bound on group cards fetched alongside a page.
pub const MAX_GROUP_CARDS: u64 = 1000;

/// Number of group cards to fetch for a page of `limit` regular cards.
pub fn group_card_limit(limit: u64) -> u64 {
    if limit > MAX_GROUP_CARDS {
        MAX_GROUP_CARDS
    } else {
        limit / 5
    }
}

/// Combine regular and group cards into a single list of at most `limit` entries.
///
/// Both inputs are expected in descending id order. When `limit` exceeds
/// [`INTERLEAVE_THRESHOLD`] and there are group cards, one group card is placed after
/// every `regular.len() / groups.len()` regular cards (after every regular card when that
/// ratio is 0) and leftover group cards are appended. Otherwise the two lists are merged
/// by descending id.
pub fn assemble_card_list(
    regular: Vec<CardView>,
    groups: Vec<CardView>,
    limit: u64,
) -> Vec<CardView> {
    let mut cards = if limit > INTERLEAVE_THRESHOLD && !groups.is_empty() {
        interleave(regular, groups)
    } else {
        let mut cards = regular;
        cards.extend(groups);
        cards.sort_by_key(|card| Reverse(card.id));
        cards
    };

    cards.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    cards
}

fn interleave(regular: Vec<CardView>, groups: Vec<CardView>) -> Vec<CardView> {
    let ratio = (regular.len() / groups.len()).max(1);
    let mut cards = Vec::with_capacity(regular.len() + groups.len());
    let mut groups = groups.into_iter();

    for (index, card) in regular.into_iter().enumerate() {
        cards.push(card);

        if (index + 1) % ratio == 0 {
            if let Some(group) = groups.next() {
                cards.push(group);
            }
        }
    }

    cards.extend(groups);
    cards
}
