//! # Subscription flow
//!
//! Collects card values, exchanges them for a provider token and registers a
//! subscription with that token. The raw card number only ever travels to the
//! payment provider.

pub mod api;
pub mod config;
pub mod consts;
pub mod errors;
pub mod front;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
