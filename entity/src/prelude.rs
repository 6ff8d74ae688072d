pub use super::broach_info::Entity as BroachInfo;
pub use super::card::Entity as Card;
pub use super::card_skills::Entity as CardSkills;
pub use super::card_stats::Entity as CardStats;
pub use super::group_card::Entity as GroupCard;
pub use super::release_info::Entity as ReleaseInfo;
pub use super::skill_detail::Entity as SkillDetail;
