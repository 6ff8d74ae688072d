//! Domain models shared across the data, service and utility layers.
//!
//! - `card` - The flattened card view and its skill levels
//! - `character` - The fixed character roster
//! - `db` - Aliases for generated entity models
//! - `page` - Composite records returned by page loaders
//! - `search` - Search criteria and sort orders

pub mod card;
pub mod character;
pub mod db;
pub mod page;
pub mod search;
