//! Server-side core of the i7card card database.
//!
//! This module contains the read-only data layer behind the card browser: card listings
//! merged with group cards, single-card lookups, aggregate statistics and the score-up
//! search. Page rendering and routing live outside this crate; they call the services
//! here with plain parameters and receive plain records back.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
