//! The score-up search query.
//!
//! Cards are joined with their sub-records and with `skill_details`, which fans the result
//! out to one row per skill level. [`fold_score_up_rows`] turns those rows back into one
//! [`CardView`] per card.

use indexmap::IndexMap;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QueryResult, QuerySelect, RelationTrait,
};

use crate::server::{
    data::{
        card::{CardRepository, CardRow},
        contains_ci,
    },
    model::{
        card::{CardView, SkillDetailView},
        character::character_names,
        search::ScoreUpSearchParams,
    },
};

/// One independent constraint of the score-up search.
///
/// Filters combine with AND, so the order they are applied in does not affect the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScoreUpFilter {
    /// Substring of the character name or the cardname.
    NameOrCardname(String),
    /// Exact character names.
    CharacterNames(Vec<&'static str>),
    /// Substring of the cardname.
    Costume(String),
    Rarity(Vec<String>),
    Attribute(Vec<i32>),
    Year(i32),
    SkillType(Vec<String>),
    /// Release event is non-null and non-empty.
    EventBonus,
}

impl ScoreUpFilter {
    /// Translate search criteria into filters, skipping absent and empty criteria.
    ///
    /// Character ids outside the roster are dropped; if none remain, no character filter
    /// is produced. `skill_level` and `skill_activation_type` never produce a filter.
    pub fn from_params(params: &ScoreUpSearchParams) -> Vec<Self> {
        let mut filters = Vec::new();

        if let Some(name) = non_blank(&params.name) {
            filters.push(ScoreUpFilter::NameOrCardname(name.to_string()));
        }
        if let Some(ids) = &params.character_ids {
            let names = character_names(ids);
            if !names.is_empty() {
                filters.push(ScoreUpFilter::CharacterNames(names));
            }
        }
        if let Some(costume) = non_blank(&params.costume_name) {
            filters.push(ScoreUpFilter::Costume(costume.to_string()));
        }
        if let Some(rarity) = params.rarity.as_ref().filter(|r| !r.is_empty()) {
            filters.push(ScoreUpFilter::Rarity(rarity.clone()));
        }
        if let Some(attribute) = params.attribute.as_ref().filter(|a| !a.is_empty()) {
            filters.push(ScoreUpFilter::Attribute(attribute.clone()));
        }
        if let Some(year) = params.year {
            filters.push(ScoreUpFilter::Year(year));
        }
        if let Some(skill_type) = params.skill_type.as_ref().filter(|s| !s.is_empty()) {
            filters.push(ScoreUpFilter::SkillType(skill_type.clone()));
        }
        if params.event_bonus == Some(true) {
            filters.push(ScoreUpFilter::EventBonus);
        }

        filters
    }

    fn into_condition(self) -> Condition {
        match self {
            ScoreUpFilter::NameOrCardname(name) => Condition::any()
                .add(contains_ci(entity::card::Column::Name, &name))
                .add(contains_ci(entity::card::Column::Cardname, &name)),
            ScoreUpFilter::CharacterNames(names) => {
                Condition::all().add(entity::card::Column::Name.is_in(names))
            }
            ScoreUpFilter::Costume(costume) => {
                contains_ci(entity::card::Column::Cardname, &costume)
            }
            ScoreUpFilter::Rarity(rarity) => {
                Condition::all().add(entity::card::Column::Rarity.is_in(rarity))
            }
            ScoreUpFilter::Attribute(attribute) => {
                Condition::all().add(entity::card_stats::Column::Attribute.is_in(attribute))
            }
            ScoreUpFilter::Year(year) => {
                Condition::all().add(entity::release_info::Column::Year.eq(year))
            }
            ScoreUpFilter::SkillType(skill_type) => {
                Condition::all().add(entity::card_skills::Column::ApSkillType.is_in(skill_type))
            }
            ScoreUpFilter::EventBonus => Condition::all()
                .add(entity::release_info::Column::Event.is_not_null())
                .add(entity::release_info::Column::Event.ne("")),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A [`CardRow`] paired with at most one of its skill levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreUpRow {
    pub card: CardRow,
    /// `None` when the card has no skill levels at all.
    pub skill_detail: Option<SkillDetailView>,
}

impl FromQueryResult for ScoreUpRow {
    fn from_query_result(res: &QueryResult, pre: &str) -> Result<Self, DbErr> {
        let card = CardRow::from_query_result(res, pre)?;
        let skill_level: Option<i32> = res.try_get(pre, "skill_level")?;

        let skill_detail = match skill_level {
            Some(skill_level) => Some(SkillDetailView {
                skill_level,
                count: res.try_get(pre, "skill_count")?,
                per: res.try_get(pre, "skill_per")?,
                value: res.try_get(pre, "skill_value")?,
                rate: res.try_get(pre, "skill_rate")?,
            }),
            None => None,
        };

        Ok(Self { card, skill_detail })
    }
}

pub struct ScoreUpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoreUpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch joined rows matching every filter.
    ///
    /// Rows are ordered by card id descending, then skill level ascending.
    pub async fn search(&self, filters: Vec<ScoreUpFilter>) -> Result<Vec<ScoreUpRow>, DbErr> {
        let condition = filters
            .into_iter()
            .fold(Condition::all(), |condition, filter| {
                condition.add(filter.into_condition())
            });

        CardRepository::joined_select()
            .join(JoinType::LeftJoin, entity::card::Relation::SkillDetail.def())
            .column_as(entity::skill_detail::Column::SkillLevel, "skill_level")
            .column_as(entity::skill_detail::Column::Count, "skill_count")
            .column_as(entity::skill_detail::Column::Per, "skill_per")
            .column_as(entity::skill_detail::Column::Value, "skill_value")
            .column_as(entity::skill_detail::Column::Rate, "skill_rate")
            .filter(condition)
            .order_by_desc(entity::card::Column::Id)
            .order_by_asc(entity::skill_detail::Column::SkillLevel)
            .into_model::<ScoreUpRow>()
            .all(self.db)
            .await
    }
}

/// Fold fanned-out rows into one view per card.
///
/// Cards keep the order in which they first appear and each card's skill levels keep row
/// order. Repeated rows for the same card contribute only their skill level.
pub fn fold_score_up_rows(rows: Vec<ScoreUpRow>) -> Vec<CardView> {
    let mut cards: IndexMap<i32, CardView> = IndexMap::new();

    for ScoreUpRow { card, skill_detail } in rows {
        let view = cards
            .entry(card.id)
            .or_insert_with(|| CardView::from(card));

        if let Some(detail) = skill_detail {
            view.skill_details.push(detail);
        }
    }

    cards.into_values().collect()
}
