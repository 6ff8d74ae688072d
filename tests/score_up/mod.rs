//! Score-up page loaded end to end from query-string pairs.

use i7card::server::{
    error::card::CardError, model::search::ScoreUpSearchParams,
    service::score_up::ScoreUpService,
};
use i7card_test_utils::prelude::*;

async fn insert_card(
    test: &TestContext,
    id: i32,
    name: &str,
    event: Option<&str>,
    value: i32,
) -> Result<(), TestError> {
    let mut card = factory::mock_card(id);
    card.name = name.to_string();
    test.card().insert_card(card).await?;
    test.card()
        .insert_card_stats(factory::mock_card_stats(id, 1))
        .await?;
    test.card()
        .insert_card_skills(factory::mock_card_skills(id, factory::MOCK_SKILL_TYPE))
        .await?;
    test.card()
        .insert_release_info(factory::mock_release_info(id, Some(2023), event))
        .await?;
    for level in 1..=5 {
        let mut detail = factory::mock_skill_detail(id, level);
        detail.value = Some(value * level);
        detail.rate = Some(50);
        test.card().insert_skill_detail(detail).await?;
    }

    Ok(())
}

/// Expect characters, event bonus and score ordering to apply together
#[tokio::test]
async fn filters_and_sorts_from_query() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    insert_card(&test, 1, "和泉一織", Some("Spring Festival"), 100).await?;
    insert_card(&test, 2, "九条天", Some("Spring Festival"), 300).await?;
    insert_card(&test, 3, "九条天", None, 900).await?;
    insert_card(&test, 4, "七瀬陸", Some("Spring Festival"), 500).await?;
    insert_card(&test, 5, "和泉一織", Some(""), 700).await?;

    let params = ScoreUpSearchParams::from_query_pairs([
        ("character", "1"),
        ("character", "9"),
        ("eventBonus", "true"),
        ("skillLevel", "4"),
        ("sort", "score"),
    ])
    .unwrap();

    let page = ScoreUpService::new(&test.db).load_page(params).await;

    let ids: Vec<i32> = page.cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![2, 1]);
    assert!(page.cards.iter().all(|c| c.skill_details.len() == 5));
    assert_eq!(page.years, vec![2023]);
    assert_eq!(page.search_params.character_ids, Some(vec![1, 9]));

    Ok(())
}

/// Expect malformed levels rejected before anything is loaded
#[test]
fn rejects_malformed_level() {
    let result = ScoreUpSearchParams::from_query_pairs([("skillLevel", "ten")]);

    assert_eq!(result, Err(CardError::InvalidSkillLevel("ten".to_string())));
}
