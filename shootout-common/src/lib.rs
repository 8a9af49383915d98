//! # Pedal Shootout Common Library
//!
//! Shared code for the Pedal Shootout catalog service:
//! - Catalog database schema, row models and queries
//! - Product views (product + type detail + jacks)
//! - Configuration loading
//! - Common error type

pub mod config;
pub mod db;
pub mod error;
pub mod views;

pub use error::{Error, Result};
pub use views::{format_msrp, ProductView};
