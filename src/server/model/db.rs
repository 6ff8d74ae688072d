//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// One skill level row of a card.
pub type SkillDetailModel = entity::skill_detail::Model;
/// A composite team card from `group_cards`.
pub type GroupCardModel = entity::group_card::Model;
