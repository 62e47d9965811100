//! Gridiron server core modules.
//!
//! Gridiron ingests Madden NFL franchise exports posted by the official
//! companion app and normalizes them into a relational schema served back to
//! a league dashboard. This crate contains the HTTP surface (axum), the
//! import pipeline (payload normalization, validation, transformation), and
//! the persistence layer (SeaORM repositories over the `entity` crate).

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod import;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
