mod aggregates;
mod get_by_id;
mod get_page;
mod lookups;

use super::*;

use crate::server::data::card::CardRepository;
