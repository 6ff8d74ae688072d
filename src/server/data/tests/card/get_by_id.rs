//! Tests for CardRepository::get_by_id and CardRepository::get_skill_details.

use super::*;

/// Expect the card joined with release and broach info
#[tokio::test]
async fn returns_card_with_all_sub_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_card_tables()
        .with_mock_card(5)
        .build()
        .await?;

    let repo = CardRepository::new(&test.db);
    let row = repo.get_by_id(5).await?;

    assert!(row.is_some());
    let row = row.unwrap();
    assert_eq!(row.id, 5);
    assert_eq!(row.card_id, 1005);
    assert_eq!(row.year, Some(2020));
    assert_eq!(row.month, Some(4));
    assert_eq!(row.event, None);
    assert_eq!(row.broach_shout, Some(300));
    assert_eq!(row.broach_req, Some(2));

    Ok(())
}

/// Expect None for an id with no card
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_card_tables()
        .with_mock_card(1)
        .build()
        .await?;

    let repo = CardRepository::new(&test.db);
    let row = repo.get_by_id(2).await?;

    assert!(row.is_none());

    Ok(())
}

/// Expect skill levels in ascending order regardless of insertion order
#[tokio::test]
async fn returns_skill_details_ascending() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    test.card().insert_mock_card(1).await?;
    for level in [3, 1, 5, 2, 4] {
        test.card()
            .insert_skill_detail(factory::mock_skill_detail(1, level))
            .await?;
    }

    let repo = CardRepository::new(&test.db);
    let details = repo.get_skill_details(1).await?;

    let levels: Vec<i32> = details.iter().map(|d| d.skill_level).collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5]);

    Ok(())
}

/// Expect no skill levels for a card without any
#[tokio::test]
async fn returns_empty_skill_details() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    test.card().insert_mock_card(1).await?;

    let repo = CardRepository::new(&test.db);
    let details = repo.get_skill_details(1).await?;

    assert!(details.is_empty());

    Ok(())
}
