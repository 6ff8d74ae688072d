//! Test fixture modules for database record creation.
//!
//! - `card` - Cards, their 1:1 sub-records, skill levels and group cards

pub mod card;
