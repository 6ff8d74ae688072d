//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main i7card crate so fixtures and tests
//! read the same way.

pub type CardModel = entity::card::Model;
pub type CardStatsModel = entity::card_stats::Model;
pub type CardSkillsModel = entity::card_skills::Model;
pub type SkillDetailModel = entity::skill_detail::Model;
pub type ReleaseInfoModel = entity::release_info::Model;
pub type BroachInfoModel = entity::broach_info::Model;
pub type GroupCardModel = entity::group_card::Model;
