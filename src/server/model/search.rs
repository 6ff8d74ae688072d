//! Search criteria records.

use serde::Serialize;

use crate::server::{
    error::card::CardError,
    util::params::{parse_skill_level, parse_year},
};

/// Skill level used for score ordering when the request doesn't name one.
pub const DEFAULT_SCORE_LEVEL: i32 = 5;

/// Ordering applied to score-up results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreUpSort {
    /// Score-up value at the selected skill level, highest first.
    #[default]
    Score,
    /// Card id, newest first.
    Id,
    /// Release date, newest first.
    Date,
}

impl ScoreUpSort {
    /// Parse a `sort` query value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "score" => Some(ScoreUpSort::Score),
            "id" => Some(ScoreUpSort::Id),
            "date" => Some(ScoreUpSort::Date),
            _ => None,
        }
    }
}

/// Filter criteria for the score-up search.
///
/// Every field is optional; an absent field places no constraint on the result. Present
/// fields combine with AND.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpSearchParams {
    /// Substring of the character name or the cardname.
    pub name: Option<String>,
    pub rarity: Option<Vec<String>>,
    pub attribute: Option<Vec<i32>>,
    /// Selects the score column for ordering; never filters rows.
    pub skill_level: Option<i32>,
    pub year: Option<i32>,
    /// Ids from the fixed character roster, matched by exact name.
    pub character_ids: Option<Vec<i32>>,
    /// Substring of the cardname.
    pub costume_name: Option<String>,
    /// Carried for display only; never filters rows.
    pub skill_activation_type: Option<String>,
    pub skill_type: Option<Vec<String>>,
    /// When `Some(true)`, only cards released with a non-empty event.
    pub event_bonus: Option<bool>,
    pub sort: ScoreUpSort,
}

impl ScoreUpSearchParams {
    /// Build criteria from decoded query-string pairs.
    ///
    /// Empty values count as absent. Repeatable keys (`rarity`, `attribute`, `character`,
    /// `skillType`) accumulate, and numeric list entries that fail to parse are dropped.
    /// `eventBonus` is only set by the literal `"true"`. Unknown keys and unknown `sort`
    /// values are ignored.
    ///
    /// # Returns
    /// - `Ok(ScoreUpSearchParams)` - Parsed criteria
    /// - `Err(CardError::InvalidSkillLevel)` - `skillLevel` is not an integer
    /// - `Err(CardError::SkillLevelOutOfRange)` - `skillLevel` is outside 1..=5
    /// - `Err(CardError::InvalidYear)` - `year` is not an integer
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Result<Self, CardError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();
        let mut rarity = Vec::new();
        let mut attribute = Vec::new();
        let mut character_ids = Vec::new();
        let mut skill_type = Vec::new();

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                "name" => params.name = Some(value.to_string()),
                "rarity" => rarity.push(value.to_string()),
                "attribute" => attribute.extend(value.parse::<i32>().ok()),
                "skillLevel" => params.skill_level = Some(parse_skill_level(value)?),
                "year" => params.year = Some(parse_year(value)?),
                "character" => character_ids.extend(value.parse::<i32>().ok()),
                "costume" => params.costume_name = Some(value.to_string()),
                "activationType" => params.skill_activation_type = Some(value.to_string()),
                "skillType" => skill_type.push(value.to_string()),
                "eventBonus" => params.event_bonus = (value == "true").then_some(true),
                "sort" => {
                    if let Some(sort) = ScoreUpSort::parse(value) {
                        params.sort = sort;
                    }
                }
                _ => {}
            }
        }

        params.rarity = non_empty(rarity);
        params.attribute = non_empty(attribute);
        params.character_ids = non_empty(character_ids);
        params.skill_type = non_empty(skill_type);

        Ok(params)
    }

    /// Skill level used for score ordering.
    pub fn score_level(&self) -> i32 {
        self.skill_level.unwrap_or(DEFAULT_SCORE_LEVEL)
    }
}

fn non_empty<T>(values: Vec<T>) -> Option<Vec<T>> {
    (!values.is_empty()).then_some(values)
}

/// Filter criteria for group cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GroupCardSearchParams {
    /// Substring of the group name, cardname or member text.
    pub name: Option<String>,
    /// Substring of the member text.
    pub member: Option<String>,
    pub attribute: Option<i32>,
}
