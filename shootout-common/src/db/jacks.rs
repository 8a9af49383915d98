//! Jack (physical connector) database operations
//!
//! All queries return jacks in ascending id order. Planners rely on this
//! when they take the first matching jack of a category.

use crate::Result;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// Jack category for a pedal's DC power inlet
pub const POWER_INPUT_CATEGORY: &str = "Power Input";

/// Prefix shared by every MIDI jack category ("MIDI In", "MIDI Out", ...)
pub const MIDI_CATEGORY_PREFIX: &str = "MIDI";

pub const DIRECTION_INPUT: &str = "Input";
pub const DIRECTION_OUTPUT: &str = "Output";

/// A physical connector on a product
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Jack {
    pub id: i64,
    #[serde(skip_serializing)]
    pub product_id: i64,
    /// e.g. "Audio", "MIDI In", "Power Input", "Expression"
    pub category: String,
    /// "Input" or "Output"
    pub direction: String,
    pub jack_name: Option<String>,
    pub position: Option<String>,
    pub connector_type: String,
    pub impedance_ohms: Option<i64>,
    /// Free text, e.g. "9V DC" or "9V/12V/18V"
    pub voltage: Option<String>,
    pub current_ma: Option<i64>,
    pub polarity: Option<String>,
    pub function: Option<String>,
    pub power_over_connector: Option<bool>,
    pub is_isolated: Option<bool>,
    pub is_buffered: Option<bool>,
    pub buffer_switchable: Option<bool>,
    pub has_ground_lift: Option<bool>,
    pub has_phase_invert: Option<bool>,
    /// Jack on the same product this one routes to when nothing is plugged in
    pub normalled_to_jack_id: Option<i64>,
    pub normalling_type: Option<String>,
    pub group_id: Option<String>,
}

impl Jack {
    pub fn is_midi(&self) -> bool {
        self.category.starts_with(MIDI_CATEGORY_PREFIX)
    }

    pub fn is_midi_input(&self) -> bool {
        self.is_midi() && self.direction == DIRECTION_INPUT
    }

    pub fn is_midi_output(&self) -> bool {
        self.is_midi() && self.direction == DIRECTION_OUTPUT
    }
}

/// Load all jacks of a product
pub async fn find_jacks_by_product(pool: &SqlitePool, product_id: i64) -> Result<Vec<Jack>> {
    let jacks = sqlx::query_as::<_, Jack>("SELECT * FROM jacks WHERE product_id = ? ORDER BY id")
        .bind(product_id)
        .fetch_all(pool)
        .await?;

    Ok(jacks)
}

/// Load the jacks of a product with an exact category
pub async fn find_jacks_by_product_and_category(
    pool: &SqlitePool,
    product_id: i64,
    category: &str,
) -> Result<Vec<Jack>> {
    let jacks = sqlx::query_as::<_, Jack>(
        "SELECT * FROM jacks WHERE product_id = ? AND category = ? ORDER BY id",
    )
    .bind(product_id)
    .bind(category)
    .fetch_all(pool)
    .await?;

    Ok(jacks)
}

/// First "Power Input" jack of a product, in store order
pub async fn find_power_input_jack(pool: &SqlitePool, product_id: i64) -> Result<Option<Jack>> {
    let jacks = find_jacks_by_product_and_category(pool, product_id, POWER_INPUT_CATEGORY).await?;
    Ok(jacks.into_iter().next())
}
