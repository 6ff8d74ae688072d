//! Composite records assembled by the page loaders.

use serde::Serialize;

use crate::server::model::{card::CardView, character::Character, search::ScoreUpSearchParams};

/// Cards shown on one page of the card list.
pub const CARDS_PAGE_SIZE: u64 = 50;

/// Number of recent cards on the overview.
pub const RECENT_CARDS: u64 = 8;

/// Number of cards sharing a rarity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RarityCount {
    pub rarity: String,
    pub count: i64,
}

/// Number of cards of one roster character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CharacterCount {
    pub id: i32,
    pub name: String,
    pub count: i64,
}

/// One page of the card list with the overall count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardsPage {
    pub cards: Vec<CardView>,
    pub total_cards: u64,
    pub current_page: u64,
}

/// Landing page summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub total_cards: u64,
    pub rarity_stats: Vec<RarityCount>,
    pub character_stats: Vec<CharacterCount>,
    pub recent_cards: Vec<CardView>,
}

/// Score-up results together with the values offered by the filter form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreUpPage {
    pub cards: Vec<CardView>,
    pub years: Vec<i32>,
    pub skill_types: Vec<String>,
    pub characters: Vec<Character>,
    pub search_params: ScoreUpSearchParams,
}
