//! HTTP API handlers for shootout-api

pub mod catalog;
pub mod health;
pub mod params;
pub mod planner;

pub use catalog::catalog_routes;
pub use health::health_routes;
pub use planner::planner_routes;
