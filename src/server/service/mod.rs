//! Service layer.
//!
//! Services compose repository calls into the operations page loaders need. Store
//! failures never cross this boundary: they are logged with `tracing` and replaced by an
//! empty list, `None` or zero. Only malformed caller input is reported as an error.

pub mod card;
pub mod score_up;
pub mod stats;

#[cfg(test)]
mod tests;

use sea_orm::DbErr;

/// Unwrap a store result, logging the failure and falling back to `T::default()`.
pub(crate) fn degrade<T: Default>(operation: &str, result: Result<T, DbErr>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!(operation, error = %e, "Card store query failed");
            T::default()
        }
    }
}
