use sea_orm::DatabaseConnection;

use crate::server::{
    data::score_up::{fold_score_up_rows, ScoreUpFilter, ScoreUpRepository},
    model::{card::CardView, page::ScoreUpPage, search::ScoreUpSearchParams},
    service::{degrade, stats::StatsService},
    util::sort::sort_score_up_cards,
};

/// Service behind the score-up search page.
pub struct ScoreUpService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoreUpService<'a> {
    /// Creates a new instance of ScoreUpService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches cards matching every provided criterion.
    ///
    /// Each card carries all of its skill levels in ascending order. Results are ordered
    /// by card id, newest first; `params.sort` is not applied here.
    ///
    /// # Returns
    /// - `Vec<CardView>` - Matching cards, empty if the query failed
    pub async fn search(&self, params: &ScoreUpSearchParams) -> Vec<CardView> {
        let repo = ScoreUpRepository::new(self.db);
        let filters = ScoreUpFilter::from_params(params);

        tracing::debug!(filters = filters.len(), "Running score-up search");

        let rows = degrade("search score-up cards", repo.search(filters).await);

        fold_score_up_rows(rows)
    }

    /// Loads the score-up page: sorted results plus the filter form's option lists.
    ///
    /// Results are sorted by `params.sort` at `params.score_level()`. The search, years and
    /// skill types are fetched concurrently.
    pub async fn load_page(&self, params: ScoreUpSearchParams) -> ScoreUpPage {
        let stats_service = StatsService::new(self.db);

        let (mut cards, years, skill_types) = tokio::join!(
            self.search(&params),
            stats_service.get_distinct_years(),
            stats_service.get_distinct_skill_types()
        );

        sort_score_up_cards(&mut cards, params.sort, params.score_level());

        ScoreUpPage {
            cards,
            years,
            skill_types,
            characters: stats_service.get_characters(),
            search_params: params,
        }
    }
}
