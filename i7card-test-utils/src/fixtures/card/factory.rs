//! Factory functions for generating mock card database models.
//!
//! Pure functions returning in-memory models with standard test values. They don't
//! touch the database and can be used directly in unit tests, or handed to the
//! insertion helpers in [`data`](super::data).

use crate::model::{
    BroachInfoModel, CardModel, CardSkillsModel, CardStatsModel, GroupCardModel,
    ReleaseInfoModel, SkillDetailModel,
};

/// Character name used by [`mock_card`].
pub const MOCK_CHARACTER_NAME: &str = "和泉一織";

/// Skill type used by [`mock_card_skills`] when building full mock cards.
pub const MOCK_SKILL_TYPE: &str = "スコアアップ";

/// Create a mock card with standard test values.
///
/// The cardname embeds the id (`"Test Card {id}"`) so substring searches can target a
/// single card.
pub fn mock_card(id: i32) -> CardModel {
    CardModel {
        id,
        card_id: id + 1000,
        cardname: format!("Test Card {}", id),
        name: MOCK_CHARACTER_NAME.to_string(),
        name_other: None,
        groupname: Some("IDOLiSH7".to_string()),
        rarity: "SSR".to_string(),
        get_type: Some("ガチャ".to_string()),
        story: None,
        awakening_item: None,
    }
}

/// Create mock stats for a card with the given attribute (1 = Shout, 2 = Beat, 3 = Melody).
pub fn mock_card_stats(id: i32, attribute: i32) -> CardStatsModel {
    CardStatsModel {
        id,
        attribute: Some(attribute),
        shout_min: Some(1200),
        shout_max: Some(4800),
        beat_min: Some(1100),
        beat_max: Some(4400),
        melody_min: Some(1000),
        melody_max: Some(4000),
    }
}

pub fn mock_card_skills(id: i32, skill_type: &str) -> CardSkillsModel {
    CardSkillsModel {
        id,
        ap_skill_type: Some(skill_type.to_string()),
        ap_skill_req: Some(1),
        ap_skill_name: Some(format!("Test Skill {}", id)),
        ct_skill: Some(0),
        comment: None,
        sp_time: Some(9),
        sp_value: Some(0),
    }
}

/// Create a mock skill level row.
///
/// Values scale with the level: `value = 100 * level`, `rate = 20 + 5 * level`.
/// The `id` is left at 0 since inserts let the database assign it.
pub fn mock_skill_detail(card_id: i32, skill_level: i32) -> SkillDetailModel {
    SkillDetailModel {
        id: 0,
        card_id,
        skill_level,
        count: Some(20),
        per: Some(1),
        value: Some(100 * skill_level),
        rate: Some(20 + 5 * skill_level),
    }
}

pub fn mock_release_info(id: i32, year: Option<i32>, event: Option<&str>) -> ReleaseInfoModel {
    ReleaseInfoModel {
        id,
        year,
        month: year.map(|_| 4),
        day: year.map(|_| 1),
        event: event.map(str::to_string),
        createtime: None,
        updatetime: None,
        listview: None,
    }
}

pub fn mock_broach_info(id: i32) -> BroachInfoModel {
    BroachInfoModel {
        id,
        broach_shout: Some(300),
        broach_beat: Some(300),
        broach_melody: Some(300),
        broach_req: Some(2),
    }
}

/// Create a mock group card with aggregate values and a member list.
pub fn mock_group_card(id: i32) -> GroupCardModel {
    GroupCardModel {
        id,
        card_id: Some(id + 5000),
        cardname: Some(format!("Test Group Card {}", id)),
        group_name: Some("IDOLiSH7".to_string()),
        members: Some("和泉一織、七瀬陸".to_string()),
        shout_value: Some(9000),
        beat_value: Some(8000),
        melody_value: Some(7000),
        attribute: Some(1),
        idol_type: None,
        group_type: Some("ユニット".to_string()),
        auto_score: None,
        song_score: None,
        score_limit: None,
        broach_type: None,
    }
}
