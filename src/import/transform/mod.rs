//! Record-to-row transformers.
//!
//! Each transformer is a pure function from validated records to entity
//! active models, injecting the league foreign key and, for weekly imports,
//! the URL-derived week/season partition. No transformer touches the
//! database; team-UUID resolution takes a prefetched map.

pub mod roster;
pub mod schedule;
pub mod standings;
pub mod stats;
pub mod team;
