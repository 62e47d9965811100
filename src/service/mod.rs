//! Business logic between controllers and repositories.

pub mod import;
pub mod league;
