//! # API Module
//!
//! Business logic of the subscription screen.
//!
//! ## Modules
//!
//! - [`submission`] - Card tokenization and subscription request pipeline

pub mod submission;
