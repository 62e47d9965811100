//! Companion-app payload ingestion.
//!
//! The import pipeline is three stateless stages: [`payload`] normalizes the
//! body shape (named list key or bare array), [`record`] validates and
//! coerces each record into typed optional fields, and [`transform`] maps
//! validated records into entity rows with foreign keys injected. Week/season
//! addressing lives in [`week`].

pub mod de;
pub mod payload;
pub mod record;
pub mod transform;
pub mod week;
