//! Persistence repositories, one per table group.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so callers can
//! pass a connection or a transaction. Week-scoped tables share one generic
//! repository ([`week_scoped::WeeklyRepository`]); team, roster, and schedule
//! persistence have their own shapes.

use sea_orm::DbErr;

pub mod league;
pub mod player;
pub mod schedule;
pub mod standing;
pub mod stats;
pub mod team;
pub mod week_scoped;

pub(crate) const BATCH_SIZE: usize = 100;

/// Whether the store rejected an on-conflict upsert because the expected
/// unique constraint does not exist.
///
/// Constraint provisioning can drift from what the code expects; upserts
/// treat this condition as a signal to fall back to delete-then-insert.
/// Matches the Postgres and SQLite wordings.
pub(crate) fn missing_conflict_target(err: &DbErr) -> bool {
    let message = err.to_string();

    message.contains("no unique or exclusion constraint")
        || message.contains("ON CONFLICT clause does not match")
}
