//! Cerina - a terminal chat client
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod cli;
pub mod error;
pub mod logging;
pub mod markdown;
pub mod models;
pub mod startup;
pub mod storage;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
