//! Error types for the i7card server library.
//!
//! Domain-specific errors live in submodules and are aggregated into [`Error`] with
//! `thiserror`'s `#[from]` conversions so that `?` works across layers. Store failures
//! surface as [`Error::DbErr`] at the repository boundary; the service layer logs them
//! and degrades to empty results instead of propagating them to callers.

pub mod card;
pub mod config;

use thiserror::Error;

use crate::server::error::{card::CardError, config::ConfigError};

/// Main error type for the i7card server library.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Card input errors (malformed ids, skill levels)
/// - Database errors (connection, query, migration failures)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Invalid card-related input supplied by a caller.
    #[error(transparent)]
    CardError(#[from] CardError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
