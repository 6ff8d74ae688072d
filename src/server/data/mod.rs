//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries over the card schema and return `Result<_, DbErr>`.
//! They never log or swallow errors; the service layer decides how failures degrade.
//!
//! - `card` - Cards joined with their 1:1 sub-records, skill levels and aggregates
//! - `group_card` - Composite team cards
//! - `score_up` - The filtered card/skill-level join behind the score-up search

pub mod card;
pub mod group_card;
pub mod score_up;

#[cfg(test)]
mod tests;

use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, Condition, ExprTrait,
};

/// Case-insensitive substring match of `column` against `term`.
pub(crate) fn contains_ci<C: ColumnTrait>(column: C, term: &str) -> Condition {
    Condition::all().add(
        Expr::expr(Func::lower(Expr::col(column.as_column_ref())))
            .like(format!("%{}%", term.to_lowercase())),
    )
}
