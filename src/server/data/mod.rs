//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Errors are returned as plain `DbErr`; services translate them into `AppError`.

pub mod booking;
pub mod salon;
pub mod service;
pub mod stylist;
pub mod user;


use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ColumnTrait, Condition,
};

/// Builds a condition matching rows where `column` contains `needle`, ignoring case.
///
/// Both sides are lowercased so the match behaves the same on SQLite and Postgres.
pub(crate) fn contains_ignore_case<C>(column: C, needle: &str) -> Condition
where
    C: ColumnTrait,
{
    let pattern = format!("%{}%", needle.to_lowercase());
    Condition::all().add(Expr::expr(Func::lower(Expr::col(column))).like(pattern))
}
