//! Tests for HTTP controller endpoints.
//!
//! These suites call the handlers directly with `State`, `Path`, and `Json`
//! extractors, verifying request handling, the response envelope, and error
//! mapping for the import, league, and dashboard surfaces.

mod dashboard;
mod import;
mod league;

use gridiron_test_utils::prelude::*;

use crate::util::{body_json, TestSetupExt};
