//! Tests for companion-app import endpoints.

mod leagueroster;
mod leagueteams;
mod standings;
mod week;

use super::*;
