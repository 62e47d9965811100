//! Tests for league management endpoints.

mod create_league;
mod delete_league;
mod get_leagues;

use super::*;
