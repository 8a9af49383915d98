//! Manufacturer database operations

use crate::Result;
use sqlx::{FromRow, SqlitePool};

/// Manufacturer record
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Manufacturer {
    pub id: i64,
    /// Unique brand name
    pub name: String,
    pub country: Option<String>,
    /// Founding year as recorded (free text, e.g. "1973" or "c. 1990")
    pub founded: Option<String>,
    /// e.g. "Active", "Defunct"
    pub status: Option<String>,
    pub specialty: Option<String>,
    pub website: Option<String>,
}

const MANUFACTURER_SELECT: &str =
    "SELECT id, name, country, founded, status, specialty, website FROM manufacturers";

/// Load a manufacturer by id
pub async fn find_manufacturer(pool: &SqlitePool, id: i64) -> Result<Option<Manufacturer>> {
    let manufacturer =
        sqlx::query_as::<_, Manufacturer>(&format!("{MANUFACTURER_SELECT} WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(manufacturer)
}

/// Load every manufacturer, ordered by id
pub async fn find_all_manufacturers(pool: &SqlitePool) -> Result<Vec<Manufacturer>> {
    let manufacturers =
        sqlx::query_as::<_, Manufacturer>(&format!("{MANUFACTURER_SELECT} ORDER BY id"))
            .fetch_all(pool)
            .await?;

    Ok(manufacturers)
}

/// Load manufacturers whose name contains `search` (case-insensitive)
///
/// SQLite's `lower()` only folds ASCII, so matching happens here on the
/// full Unicode lowercase of both sides.
pub async fn search_manufacturers_by_name(
    pool: &SqlitePool,
    search: &str,
) -> Result<Vec<Manufacturer>> {
    let needle = search.to_lowercase();
    let manufacturers = find_all_manufacturers(pool)
        .await?
        .into_iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .collect();

    Ok(manufacturers)
}
