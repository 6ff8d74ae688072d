use sea_orm::DatabaseConnection;

use crate::server::{
    data::{card::CardRepository, group_card::GroupCardRepository},
    error::card::CardError,
    model::{
        card::{Attribute, CardView, SkillDetailView, GROUP_RARITY},
        page::{CardsPage, CARDS_PAGE_SIZE},
        search::GroupCardSearchParams,
    },
    service::degrade,
    util::{
        assemble::{assemble_card_list, group_card_limit},
        params::parse_card_id,
    },
};

/// Maximum number of quick-search results.
pub const SEARCH_LIMIT: u64 = 100;

/// Service for card listings, lookups and counts.
pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    /// Creates a new instance of CardService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a window of regular cards merged with the most recent group cards.
    ///
    /// Regular cards and group cards are fetched concurrently; the group slice always
    /// starts at offset 0 and holds at most `limit / 5` entries (1000 for limits over
    /// 1000). See [`assemble_card_list`] for how the two are merged.
    ///
    /// # Returns
    /// - `Vec<CardView>` - At most `limit` cards, empty if either query failed
    pub async fn get_cards(&self, limit: u64, offset: u64) -> Vec<CardView> {
        let card_repo = CardRepository::new(self.db);
        let group_repo = GroupCardRepository::new(self.db);

        let (regular, groups) = degrade(
            "fetch cards",
            tokio::try_join!(
                card_repo.get_page(limit, offset),
                group_repo.get_latest(group_card_limit(limit))
            ),
        );

        assemble_card_list(
            regular.into_iter().map(CardView::from).collect(),
            groups.into_iter().map(CardView::from).collect(),
            limit,
        )
    }

    /// Retrieves a single card with every sub-record and its skill levels.
    ///
    /// # Returns
    /// - `Some(CardView)` - Card found
    /// - `None` - No card with that id, or the query failed
    pub async fn get_card_by_id(&self, id: i32) -> Option<CardView> {
        let card_repo = CardRepository::new(self.db);

        let (row, details) = degrade(
            "fetch card",
            tokio::try_join!(card_repo.get_by_id(id), card_repo.get_skill_details(id)),
        );

        row.map(|row| CardView::from(row).with_skill_details(details))
    }

    /// Parses `raw_id` and retrieves the card.
    ///
    /// # Returns
    /// - `Ok(Some(CardView))` - Card found
    /// - `Ok(None)` - No card with that id, or the query failed
    /// - `Err(CardError::InvalidCardId)` - `raw_id` is not an integer; nothing was queried
    pub async fn get_card(&self, raw_id: &str) -> Result<Option<CardView>, CardError> {
        let id = parse_card_id(raw_id)?;

        Ok(self.get_card_by_id(id).await)
    }

    pub async fn get_skill_details(&self, card_id: i32) -> Vec<SkillDetailView> {
        let card_repo = CardRepository::new(self.db);

        degrade(
            "fetch skill details",
            card_repo.get_skill_details(card_id).await,
        )
        .into_iter()
        .map(SkillDetailView::from)
        .collect()
    }

    /// Quick search over cardname, character name and group name.
    ///
    /// A blank query returns no cards without touching the store.
    pub async fn search_cards(&self, query: &str) -> Vec<CardView> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let card_repo = CardRepository::new(self.db);

        degrade("search cards", card_repo.search(query, SEARCH_LIMIT).await)
            .into_iter()
            .map(CardView::from)
            .collect()
    }

    /// Cards of one rarity, newest first. [`GROUP_RARITY`] lists the group cards.
    pub async fn get_cards_by_rarity(&self, rarity: &str) -> Vec<CardView> {
        if rarity == GROUP_RARITY {
            return self
                .search_group_cards(&GroupCardSearchParams::default())
                .await;
        }

        let card_repo = CardRepository::new(self.db);

        degrade(
            "fetch cards by rarity",
            card_repo.get_by_rarity(rarity).await,
        )
        .into_iter()
        .map(CardView::from)
        .collect()
    }

    pub async fn get_cards_by_character(&self, name: &str) -> Vec<CardView> {
        let card_repo = CardRepository::new(self.db);

        degrade(
            "fetch cards by character",
            card_repo.get_by_character(name).await,
        )
        .into_iter()
        .map(CardView::from)
        .collect()
    }

    pub async fn get_cards_by_attribute(&self, attribute: Attribute) -> Vec<CardView> {
        let card_repo = CardRepository::new(self.db);

        degrade(
            "fetch cards by attribute",
            card_repo.get_by_attribute(attribute.id()).await,
        )
        .into_iter()
        .map(CardView::from)
        .collect()
    }

    /// Group cards matching `params`, normalized into card views.
    pub async fn search_group_cards(&self, params: &GroupCardSearchParams) -> Vec<CardView> {
        let group_repo = GroupCardRepository::new(self.db);

        degrade("search group cards", group_repo.search(params).await)
            .into_iter()
            .map(CardView::from)
            .collect()
    }

    /// Number of regular cards plus group cards, 0 if either count failed.
    pub async fn get_total_card_count(&self) -> u64 {
        let card_repo = CardRepository::new(self.db);
        let group_repo = GroupCardRepository::new(self.db);

        let (cards, groups) = degrade(
            "count cards",
            tokio::try_join!(card_repo.count(), group_repo.count()),
        );

        cards + groups
    }

    /// Loads one page of the card list together with the total count.
    ///
    /// Pages are 1-based; anything below 1 is treated as the first page. Pages past the
    /// end hold only the group cards, which always start at offset 0.
    pub async fn load_cards_page(&self, page: u64) -> CardsPage {
        let page = page.max(1);
        // Store offsets are signed 64-bit
        let offset = (page - 1)
            .saturating_mul(CARDS_PAGE_SIZE)
            .min(i64::MAX as u64);

        let (cards, total_cards) = tokio::join!(
            self.get_cards(CARDS_PAGE_SIZE, offset),
            self.get_total_card_count()
        );

        CardsPage {
            cards,
            total_cards,
            current_page: page,
        }
    }
}
