//! Hollow - a terminal client for an anonymous confession space
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod models;
pub mod store;
pub mod traits;
pub mod ui;
pub mod widgets;
