//! # Autopilot Parking
//!
//! Decides, for a given civil instant in Chicago, which parking restrictions
//! are in force at a location and composes them into a single verdict.
//!
//! ## Architecture
//!
//! - [`models`]: civil clock, enforcement windows and meter schedule parsing
//! - [`services`]: the pure rule evaluators (meter, winter ban, permit zone,
//!   street cleaning) and the parkability composer
//! - [`api`]: feed record types and location DTOs
//! - [`db`]: in-memory location catalog behind the repository trait
//! - [`config`]: TOML and environment configuration for the server
//! - [`http`]: Axum REST API (feature `http-server`)
//!
//! Every evaluator takes the instant as an argument. Callers capture it once
//! from a [`models::Clock`] so a batch of locations sees the same "now".

// RepositoryError carries an ErrorContext
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
