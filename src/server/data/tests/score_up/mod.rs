mod search;

use super::*;

use crate::server::{
    data::score_up::{fold_score_up_rows, ScoreUpFilter, ScoreUpRepository},
    model::search::ScoreUpSearchParams,
};

/// Insert a card with stats, skills and release info plus the given skill levels.
pub(super) async fn insert_score_up_card(
    test: &TestContext,
    card: entity::card::Model,
    attribute: i32,
    year: Option<i32>,
    event: Option<&str>,
    levels: &[i32],
) -> Result<(), TestError> {
    let id = card.id;
    test.card().insert_card(card).await?;
    test.card()
        .insert_card_stats(factory::mock_card_stats(id, attribute))
        .await?;
    test.card()
        .insert_card_skills(factory::mock_card_skills(id, factory::MOCK_SKILL_TYPE))
        .await?;
    test.card()
        .insert_release_info(factory::mock_release_info(id, year, event))
        .await?;
    for &level in levels {
        test.card()
            .insert_skill_detail(factory::mock_skill_detail(id, level))
            .await?;
    }

    Ok(())
}

pub(super) fn ids(cards: &[crate::server::model::card::CardView]) -> Vec<i32> {
    cards.iter().map(|c| c.id).collect()
}
