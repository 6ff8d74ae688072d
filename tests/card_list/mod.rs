//! Card list and overview loaded end to end against an in-memory database.

use i7card::server::{
    model::card::GROUP_RARITY,
    service::{card::CardService, stats::StatsService},
};
use i7card_test_utils::prelude::*;

/// Expect the first page to mix group cards into the id ordering and report the total
#[tokio::test]
async fn first_page_mixes_group_cards() -> Result<(), TestError> {
    let mut builder = TestBuilder::new().with_card_tables();
    for id in 1..=60 {
        builder = builder.with_mock_card(id);
    }
    for id in [58, 30, 5] {
        builder = builder.with_mock_group_card(id + 1000);
    }
    let test = builder.build().await?;

    let page = CardService::new(&test.db).load_cards_page(1).await;

    assert_eq!(page.total_cards, 63);
    assert_eq!(page.current_page, 1);
    assert_eq!(page.cards.len(), 50);

    // Group ids are above every regular id, so all three lead the page
    let leading: Vec<&str> = page.cards[..3].iter().map(|c| c.rarity.as_str()).collect();
    assert_eq!(leading, vec![GROUP_RARITY; 3]);
    assert_eq!(page.cards[3].id, 60);

    let mut previous = i32::MAX;
    for card in &page.cards {
        assert!(card.id < previous);
        previous = card.id;
    }

    Ok(())
}

/// Expect the overview to serialize with every section populated
#[tokio::test]
async fn overview_serializes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_card_tables()
        .with_mock_card(1)
        .with_mock_card(2)
        .with_mock_group_card(1)
        .build()
        .await?;

    let overview = StatsService::new(&test.db).load_overview().await;
    let json = serde_json::to_value(&overview).unwrap();

    assert_eq!(json["total_cards"], 3);
    assert_eq!(json["rarity_stats"][0]["rarity"], "SSR");
    assert_eq!(json["character_stats"][0]["name"], "和泉一織");
    assert_eq!(json["recent_cards"].as_array().map(Vec::len), Some(3));

    Ok(())
}
