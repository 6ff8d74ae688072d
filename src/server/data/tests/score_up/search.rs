//! Tests for ScoreUpRepository::search together with fold_score_up_rows.

use super::*;

async fn search(
    test: &TestContext,
    params: &ScoreUpSearchParams,
) -> Result<Vec<crate::server::model::card::CardView>, TestError> {
    let repo = ScoreUpRepository::new(&test.db);
    let rows = repo.search(ScoreUpFilter::from_params(params)).await?;

    Ok(fold_score_up_rows(rows))
}

fn named(id: i32, name: &str, cardname: &str) -> entity::card::Model {
    let mut card = factory::mock_card(id);
    card.name = name.to_string();
    card.cardname = cardname.to_string();
    card
}

/// Expect one view per card with its skill levels folded back in ascending order
#[tokio::test]
async fn folds_skill_levels_per_card() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    insert_score_up_card(&test, factory::mock_card(1), 1, Some(2020), None, &[2, 1, 3]).await?;
    insert_score_up_card(&test, factory::mock_card(2), 1, Some(2020), None, &[5, 4, 3, 2, 1])
        .await?;
    insert_score_up_card(&test, factory::mock_card(3), 1, Some(2020), None, &[]).await?;

    let cards = search(&test, &ScoreUpSearchParams::default()).await?;

    assert_eq!(ids(&cards), vec![3, 2, 1]);

    let levels = |index: usize| -> Vec<i32> {
        cards[index]
            .skill_details
            .iter()
            .map(|d| d.skill_level)
            .collect()
    };
    assert_eq!(levels(0), Vec::<i32>::new());
    assert_eq!(levels(1), vec![1, 2, 3, 4, 5]);
    assert_eq!(levels(2), vec![1, 2, 3]);

    let level_two = cards[1].skill_detail(2).unwrap();
    assert_eq!(level_two.value, Some(200));
    assert_eq!(level_two.rate, Some(30));
    assert_eq!(cards[1].attribute, Some(1));
    assert_eq!(cards[1].year, Some(2020));

    Ok(())
}

/// Expect a name to match either the character name or the cardname, ignoring case
#[tokio::test]
async fn matches_name_or_cardname() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    insert_score_up_card(&test, named(1, "Riku", "Stage"), 1, None, None, &[1]).await?;
    insert_score_up_card(&test, named(2, "Tenn", "riku's gift"), 1, None, None, &[1]).await?;
    insert_score_up_card(&test, named(3, "Gaku", "Stage"), 1, None, None, &[1]).await?;

    let params = ScoreUpSearchParams {
        name: Some("RIKU".to_string()),
        ..Default::default()
    };
    let cards = search(&test, &params).await?;

    assert_eq!(ids(&cards), vec![2, 1]);

    Ok(())
}

/// Expect character ids to match exact names only
#[tokio::test]
async fn matches_character_names_exactly() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    insert_score_up_card(&test, named(1, "和泉一織", "A"), 1, None, None, &[1]).await?;
    insert_score_up_card(&test, named(2, "九条天", "B"), 1, None, None, &[1]).await?;
    insert_score_up_card(&test, named(3, "九条天と七瀬陸", "C"), 1, None, None, &[1]).await?;
    insert_score_up_card(&test, named(4, "七瀬陸", "D"), 1, None, None, &[1]).await?;

    let params = ScoreUpSearchParams {
        character_ids: Some(vec![1, 9]),
        ..Default::default()
    };
    let cards = search(&test, &params).await?;

    assert_eq!(ids(&cards), vec![2, 1]);

    Ok(())
}

/// Expect only unknown character ids to leave the result unfiltered
#[tokio::test]
async fn ignores_unknown_character_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    insert_score_up_card(&test, named(1, "和泉一織", "A"), 1, None, None, &[1]).await?;
    insert_score_up_card(&test, named(2, "Someone", "B"), 1, None, None, &[1]).await?;

    let params = ScoreUpSearchParams {
        character_ids: Some(vec![0, 99]),
        ..Default::default()
    };
    let cards = search(&test, &params).await?;

    assert_eq!(ids(&cards), vec![2, 1]);

    Ok(())
}

/// Expect the event filter to exclude null and empty events
#[tokio::test]
async fn event_bonus_requires_non_empty_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    insert_score_up_card(&test, factory::mock_card(1), 1, Some(2022), None, &[1]).await?;
    insert_score_up_card(&test, factory::mock_card(2), 1, Some(2022), Some(""), &[1]).await?;
    insert_score_up_card(
        &test,
        factory::mock_card(3),
        1,
        Some(2022),
        Some("Spring Festival"),
        &[1],
    )
    .await?;

    let params = ScoreUpSearchParams {
        event_bonus: Some(true),
        ..Default::default()
    };
    let cards = search(&test, &params).await?;

    assert_eq!(ids(&cards), vec![3]);
    assert_eq!(cards[0].event.as_deref(), Some("Spring Festival"));

    Ok(())
}

/// Expect year, skill type, costume and rarity criteria to combine with AND
#[tokio::test]
async fn combines_criteria_with_and() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;

    let mut festival = named(1, "百", "Festival Night");
    festival.rarity = "UR".to_string();
    insert_score_up_card(&test, festival, 2, Some(2021), None, &[1, 2]).await?;

    let mut other_year = named(2, "百", "Festival Day");
    other_year.rarity = "UR".to_string();
    insert_score_up_card(&test, other_year, 2, Some(2020), None, &[1, 2]).await?;

    let mut other_rarity = named(3, "百", "Festival Eve");
    other_rarity.rarity = "SR".to_string();
    insert_score_up_card(&test, other_rarity, 2, Some(2021), None, &[1, 2]).await?;

    let params = ScoreUpSearchParams {
        costume_name: Some("festival".to_string()),
        rarity: Some(vec!["UR".to_string()]),
        year: Some(2021),
        skill_type: Some(vec![factory::MOCK_SKILL_TYPE.to_string()]),
        ..Default::default()
    };
    let cards = search(&test, &params).await?;

    assert_eq!(ids(&cards), vec![1]);
    assert_eq!(cards[0].skill_details.len(), 2);

    let params = ScoreUpSearchParams {
        skill_type: Some(vec!["unknown".to_string()]),
        ..Default::default()
    };
    assert!(search(&test, &params).await?.is_empty());

    Ok(())
}

/// Expect skill level and activation type to leave rows untouched
#[tokio::test]
async fn skill_level_does_not_filter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    insert_score_up_card(&test, factory::mock_card(1), 1, None, None, &[1, 2, 3, 4, 5]).await?;
    insert_score_up_card(&test, factory::mock_card(2), 1, None, None, &[1]).await?;

    let params = ScoreUpSearchParams {
        skill_level: Some(5),
        skill_activation_type: Some("perfect".to_string()),
        ..Default::default()
    };
    let cards = search(&test, &params).await?;

    assert_eq!(ids(&cards), vec![2, 1]);
    assert_eq!(cards[1].skill_details.len(), 5);

    Ok(())
}

/// Expect identical output from repeated searches
#[tokio::test]
async fn repeated_search_is_identical() -> Result<(), TestError> {
    let test = TestBuilder::new().with_card_tables().build().await?;
    for id in 1..=4 {
        insert_score_up_card(&test, factory::mock_card(id), id % 3 + 1, Some(2020), None, &[1, 2])
            .await?;
    }

    let params = ScoreUpSearchParams {
        attribute: Some(vec![1, 2]),
        ..Default::default()
    };
    let first = search(&test, &params).await?;
    let second = search(&test, &params).await?;

    assert!(!first.is_empty());
    assert_eq!(first, second);

    Ok(())
}

/// Expect Err when the card tables don't exist
#[tokio::test]
async fn fails_without_tables() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let repo = ScoreUpRepository::new(&test.db);
    let result = repo.search(Vec::new()).await;

    assert!(result.is_err());

    Ok(())
}
