//! SeaORM entities for the `i7card` schema.

pub mod prelude;

pub mod broach_info;
pub mod card;
pub mod card_skills;
pub mod card_stats;
pub mod group_card;
pub mod release_info;
pub mod skill_detail;
