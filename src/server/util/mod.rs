//! Pure helpers used by the services.
//!
//! - `assemble` - Merges regular and group cards into one list
//! - `params` - Parses caller-supplied ids and levels
//! - `score` - Score-up value of a card at a skill level
//! - `sort` - Orders score-up results

pub mod assemble;
pub mod params;
pub mod score;
pub mod sort;
