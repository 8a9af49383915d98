//! Catalog database: schema, row models and queries
//!
//! The service only reads. Ingestion happens elsewhere; `init` exists so a
//! fresh database file gets a valid (empty) schema on first start.

pub mod details;
pub mod init;
pub mod jacks;
pub mod manufacturers;
pub mod products;

pub use details::*;
pub use init::*;
pub use jacks::*;
pub use manufacturers::*;
pub use products::*;
