//! Catalog queries and planning calculators
//!
//! Services take a `&SqlitePool` and return plain serializable results. A
//! missing root entity is `Ok(None)`; the HTTP layer turns that into 404.

pub mod board_planner;
pub mod catalog;
pub mod midi_planner;
pub mod power_budget;

/// Round half away from zero, as used in planner summaries
pub(crate) fn round_to_int(value: f64) -> i64 {
    value.round() as i64
}
