//! Tests for CardRepository search and exact-match lookups.

use super::*;

async fn insert_named_card(
    test: &TestContext,
    id: i32,
    cardname: &str,
    name: &str,
    rarity: &str,
) -> Result<(), TestError> {
    let mut card = factory::mock_card(id);
    card.cardname = cardname.to_string();
    card.name = name.to_string();
    card.rarity = rarity.to_string();
    test.card().insert_card(card).await?;

    Ok(())
}

/// Expect case-insensitive substring matches on cardname, name or groupname
#[tokio::test]
async fn search_matches_any_text_column() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    insert_named_card(&test, 1, "Winter Parade", "七瀬陸", "SSR").await?;
    insert_named_card(&test, 2, "Summer Live", "九条天", "SR").await?;
    let mut grouped = factory::mock_card(3);
    grouped.cardname = "Plain".to_string();
    grouped.groupname = Some("TRIGGER".to_string());
    test.card().insert_card(grouped).await?;

    let repo = CardRepository::new(&test.db);

    let by_cardname = repo.search("winter", 100).await?;
    assert_eq!(by_cardname.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1]);

    let by_name = repo.search("九条", 100).await?;
    assert_eq!(by_name.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);

    let by_groupname = repo.search("trigger", 100).await?;
    assert_eq!(by_groupname.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3]);

    Ok(())
}

/// Expect search results capped at the limit, newest first
#[tokio::test]
async fn search_respects_limit() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    for id in 1..=5 {
        test.card().insert_mock_card(id).await?;
    }

    let repo = CardRepository::new(&test.db);
    let rows = repo.search("test card", 3).await?;

    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![5, 4, 3]);

    Ok(())
}

/// Expect exact rarity and character matches only
#[tokio::test]
async fn filters_by_rarity_and_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    insert_named_card(&test, 1, "A", "百", "UR").await?;
    insert_named_card(&test, 2, "B", "千", "UR").await?;
    insert_named_card(&test, 3, "C", "百", "SR").await?;

    let repo = CardRepository::new(&test.db);

    let ur = repo.get_by_rarity("UR").await?;
    assert_eq!(ur.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);

    let momo = repo.get_by_character("百").await?;
    assert_eq!(momo.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 1]);

    let none = repo.get_by_rarity("U").await?;
    assert!(none.is_empty());

    Ok(())
}

/// Expect attribute lookups to match card_stats.attribute
#[tokio::test]
async fn filters_by_attribute() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    for (id, attribute) in [(1, 1), (2, 2), (3, 2)] {
        test.card().insert_mock_card(id).await?;
        test.card()
            .insert_card_stats(factory::mock_card_stats(id, attribute))
            .await?;
    }
    test.card().insert_mock_card(4).await?;

    let repo = CardRepository::new(&test.db);
    let beat = repo.get_by_attribute(2).await?;

    assert_eq!(beat.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2]);

    Ok(())
}
