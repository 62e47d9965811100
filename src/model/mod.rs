//! Shared server model types: API envelopes, application state, DTOs, and
//! session accessors.

pub mod api;
pub mod app;
pub mod league;
pub mod session;
