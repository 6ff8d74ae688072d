//! Tests for CardRepository counts and distinct-value queries.

use super::*;

/// Expect counts per rarity
#[tokio::test]
async fn counts_rarities() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    for (id, rarity) in [(1, "SSR"), (2, "SSR"), (3, "UR"), (4, "SSR")] {
        let mut card = factory::mock_card(id);
        card.rarity = rarity.to_string();
        test.card().insert_card(card).await?;
    }

    let repo = CardRepository::new(&test.db);
    let mut counts = repo.rarity_counts().await?;
    counts.sort();

    assert_eq!(
        counts,
        vec![("SSR".to_string(), 3), ("UR".to_string(), 1)]
    );
    assert_eq!(repo.count().await?, 4);

    Ok(())
}

/// Expect counts only for the requested names
#[tokio::test]
async fn counts_requested_characters() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    for (id, name) in [(1, "百"), (2, "百"), (3, "千"), (4, "Someone Else")] {
        let mut card = factory::mock_card(id);
        card.name = name.to_string();
        test.card().insert_card(card).await?;
    }

    let repo = CardRepository::new(&test.db);
    let mut counts = repo.character_counts(&["百", "千", "九条天"]).await?;
    counts.sort();

    assert_eq!(
        counts,
        vec![("千".to_string(), 1), ("百".to_string(), 2)]
    );

    Ok(())
}

/// Expect distinct years newest first, skipping cards without a year
#[tokio::test]
async fn lists_distinct_years() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    for (id, year) in [(1, Some(2019)), (2, Some(2021)), (3, Some(2019)), (4, None)] {
        test.card().insert_mock_card(id).await?;
        test.card()
            .insert_release_info(factory::mock_release_info(id, year, None))
            .await?;
    }

    let repo = CardRepository::new(&test.db);
    let years = repo.distinct_years().await?;

    assert_eq!(years, vec![2021, 2019]);

    Ok(())
}

/// Expect distinct skill types in ascending order
#[tokio::test]
async fn lists_distinct_skill_types() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    for (id, skill_type) in [(1, "b-type"), (2, "a-type"), (3, "b-type")] {
        test.card().insert_mock_card(id).await?;
        test.card()
            .insert_card_skills(factory::mock_card_skills(id, skill_type))
            .await?;
    }

    let repo = CardRepository::new(&test.db);
    let types = repo.distinct_skill_types().await?;

    assert_eq!(types, vec!["a-type".to_string(), "b-type".to_string()]);

    Ok(())
}
