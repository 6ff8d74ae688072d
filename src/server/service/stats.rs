use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::card::CardRepository,
    model::{
        character::{Character, CHARACTERS},
        page::{CharacterCount, Overview, RarityCount, RECENT_CARDS},
    },
    service::{card::CardService, degrade},
};

/// Service for aggregate statistics and filter option lists.
pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    /// Creates a new instance of StatsService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Card counts per rarity, most common first; equal counts order by rarity.
    pub async fn get_rarity_stats(&self) -> Vec<RarityCount> {
        let card_repo = CardRepository::new(self.db);

        let mut stats: Vec<RarityCount> =
            degrade("fetch rarity stats", card_repo.rarity_counts().await)
                .into_iter()
                .map(|(rarity, count)| RarityCount { rarity, count })
                .collect();

        stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.rarity.cmp(&b.rarity)));
        stats
    }

    /// Card counts for roster characters with at least one card, in roster order.
    pub async fn get_character_stats(&self) -> Vec<CharacterCount> {
        let card_repo = CardRepository::new(self.db);
        let names: Vec<&str> = CHARACTERS.iter().map(|c| c.name).collect();

        let counts: HashMap<String, i64> = degrade(
            "fetch character stats",
            card_repo.character_counts(&names).await,
        )
        .into_iter()
        .collect();

        CHARACTERS
            .iter()
            .filter_map(|character| {
                counts
                    .get(character.name)
                    .filter(|&&count| count > 0)
                    .map(|&count| CharacterCount {
                        id: character.id,
                        name: character.name.to_string(),
                        count,
                    })
            })
            .collect()
    }

    /// Distinct release years, newest first.
    pub async fn get_distinct_years(&self) -> Vec<i32> {
        let card_repo = CardRepository::new(self.db);

        degrade("fetch distinct years", card_repo.distinct_years().await)
    }

    /// Distinct skill types in ascending order.
    pub async fn get_distinct_skill_types(&self) -> Vec<String> {
        let card_repo = CardRepository::new(self.db);

        degrade(
            "fetch distinct skill types",
            card_repo.distinct_skill_types().await,
        )
    }

    /// The fixed character roster.
    pub fn get_characters(&self) -> Vec<Character> {
        CHARACTERS.to_vec()
    }

    /// Loads the landing page summary.
    ///
    /// Total count, rarity stats, character stats and the most recent cards are fetched
    /// concurrently; each degrades independently.
    pub async fn load_overview(&self) -> Overview {
        let card_service = CardService::new(self.db);

        let (total_cards, rarity_stats, character_stats, recent_cards) = tokio::join!(
            card_service.get_total_card_count(),
            self.get_rarity_stats(),
            self.get_character_stats(),
            card_service.get_cards(RECENT_CARDS, 0)
        );

        Overview {
            total_cards,
            rarity_stats,
            character_stats,
            recent_cards,
        }
    }
}
