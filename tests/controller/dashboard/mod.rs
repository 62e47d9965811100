//! Tests for public dashboard read endpoints.
//!
//! The write side of each read is covered alongside the import endpoints;
//! these suites cover the read-only paths and their error mapping.

mod get_schedule;
mod get_stats;

use super::*;
