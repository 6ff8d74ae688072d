//! Tests for CardRepository::get_page.

use super::*;

/// Expect cards newest id first, windowed by limit and offset
#[tokio::test]
async fn returns_window_in_descending_id_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_card_tables()
        .with_mock_card(1)
        .with_mock_card(2)
        .with_mock_card(3)
        .with_mock_card(4)
        .build()
        .await?;

    let repo = CardRepository::new(&test.db);

    let first = repo.get_page(2, 0).await?;
    let ids: Vec<i32> = first.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![4, 3]);

    let second = repo.get_page(2, 2).await?;
    let ids: Vec<i32> = second.iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![2, 1]);

    Ok(())
}

/// Expect a card with no sub-records to come back with every joined field empty
#[tokio::test]
async fn leaves_missing_sub_records_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    test.card().insert_mock_card(1).await?;

    let repo = CardRepository::new(&test.db);
    let rows = repo.get_page(50, 0).await?;

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.cardname, "Test Card 1");
    assert_eq!(row.attribute, None);
    assert_eq!(row.shout_max, None);
    assert_eq!(row.ap_skill_type, None);
    assert_eq!(row.year, None);
    assert_eq!(row.broach_req, None);

    Ok(())
}

/// Expect joined stats and skills on a fully populated card
#[tokio::test]
async fn joins_stats_and_skills() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_card_tables()
        .with_mock_card(1)
        .build()
        .await?;

    let repo = CardRepository::new(&test.db);
    let rows = repo.get_page(50, 0).await?;

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.attribute, Some(1));
    assert_eq!(row.shout_max, Some(4800));
    assert_eq!(row.ap_skill_type.as_deref(), Some(factory::MOCK_SKILL_TYPE));
    assert_eq!(row.year, Some(2020));

    Ok(())
}

/// Expect Err when the card tables don't exist
#[tokio::test]
async fn fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let repo = CardRepository::new(&test.db);
    let result = repo.get_page(50, 0).await;

    assert!(result.is_err());

    Ok(())
}
