//! HTTP handlers, grouped by API surface.

pub mod dashboard;
pub mod import;
pub mod league;
