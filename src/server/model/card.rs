//! The flattened card view consumed by every listing, detail and search operation.
//!
//! Regular cards are built from a `cards` row plus whatever 1:1 sub-records exist, while
//! group cards are normalized into the same shape with the [`GROUP_RARITY`] sentinel.
//! Absent source values stay `None` rather than defaulting to zero.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::server::model::db::{GroupCardModel, SkillDetailModel};

/// Rarity assigned to every normalized group card.
pub const GROUP_RARITY: &str = "GROUP";

/// Acquisition type shown for group cards.
pub const GROUP_GET_TYPE: &str = "グループ";

/// Card attribute stored in `card_stats.attribute`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Attribute {
    Shout,
    Beat,
    Melody,
}

impl Attribute {
    pub fn id(self) -> i32 {
        match self {
            Attribute::Shout => 1,
            Attribute::Beat => 2,
            Attribute::Melody => 3,
        }
    }
}

/// One skill level attached to a [`CardView`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkillDetailView {
    pub skill_level: i32,
    pub count: Option<i32>,
    pub per: Option<i32>,
    pub value: Option<i32>,
    pub rate: Option<i32>,
}

impl From<SkillDetailModel> for SkillDetailView {
    fn from(detail: SkillDetailModel) -> Self {
        Self {
            skill_level: detail.skill_level,
            count: detail.count,
            per: detail.per,
            value: detail.value,
            rate: detail.rate,
        }
    }
}

/// A card, or a group card, flattened into a single record.
///
/// `id`, `cardname` and `rarity` are always present. Everything sourced from an optional
/// sub-record is `None` when that record is missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: i32,
    pub card_id: Option<i32>,
    pub cardname: String,
    pub name: String,
    pub name_other: Option<String>,
    pub groupname: Option<String>,
    pub rarity: String,
    pub get_type: Option<String>,
    pub story: Option<String>,
    pub awakening_item: Option<i32>,
    pub is_group_card: bool,

    // card_stats
    pub attribute: Option<i32>,
    pub shout_min: Option<i32>,
    pub shout_max: Option<i32>,
    pub beat_min: Option<i32>,
    pub beat_max: Option<i32>,
    pub melody_min: Option<i32>,
    pub melody_max: Option<i32>,

    // card_skills
    pub ap_skill_type: Option<String>,
    pub ap_skill_req: Option<i32>,
    pub ap_skill_name: Option<String>,
    pub ct_skill: Option<i32>,
    pub comment: Option<String>,
    pub sp_time: Option<i32>,
    pub sp_value: Option<i32>,

    // release_info
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
    pub event: Option<String>,
    pub createtime: Option<NaiveDateTime>,
    pub updatetime: Option<NaiveDateTime>,

    // broach_info
    pub broach_shout: Option<i32>,
    pub broach_beat: Option<i32>,
    pub broach_melody: Option<i32>,
    pub broach_req: Option<i32>,
    pub broach_type: Option<String>,

    /// Skill levels in ascending order. Always empty for group cards.
    pub skill_details: Vec<SkillDetailView>,
}

impl CardView {
    /// Attach skill levels, replacing any already present.
    pub fn with_skill_details<I>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = SkillDetailModel>,
    {
        self.skill_details = details.into_iter().map(SkillDetailView::from).collect();
        self
    }

    /// The skill detail row for `level`, if the card has one.
    pub fn skill_detail(&self, level: i32) -> Option<&SkillDetailView> {
        self.skill_details.iter().find(|d| d.skill_level == level)
    }
}

impl From<GroupCardModel> for CardView {
    fn from(group: GroupCardModel) -> Self {
        Self {
            id: group.id,
            card_id: group.card_id,
            cardname: group.cardname.unwrap_or_default(),
            name: group.group_name.unwrap_or_default(),
            name_other: group.members,
            groupname: group.group_type,
            rarity: GROUP_RARITY.to_string(),
            get_type: Some(GROUP_GET_TYPE.to_string()),
            is_group_card: true,
            attribute: group.attribute,
            shout_max: group.shout_value,
            beat_max: group.beat_value,
            melody_max: group.melody_value,
            broach_type: group.broach_type,
            ..Default::default()
        }
    }
}
