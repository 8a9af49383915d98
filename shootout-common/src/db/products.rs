//! Product database operations
//!
//! Every physical product has exactly one row in `products`, whatever its
//! type. Type-specific attributes live in the detail tables (see `details`).

use crate::{Error, Result};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// Fixed product type enumeration (mirrors the `product_types` table)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductKind {
    Pedal,
    PowerSupply,
    Pedalboard,
    MidiController,
    Utility,
    Plug,
}

impl ProductKind {
    pub const ALL: [ProductKind; 6] = [
        ProductKind::Pedal,
        ProductKind::PowerSupply,
        ProductKind::Pedalboard,
        ProductKind::MidiController,
        ProductKind::Utility,
        ProductKind::Plug,
    ];

    /// Stable `product_types.id`
    pub fn id(self) -> i64 {
        match self {
            ProductKind::Pedal => 1,
            ProductKind::PowerSupply => 2,
            ProductKind::Pedalboard => 3,
            ProductKind::MidiController => 4,
            ProductKind::Utility => 5,
            ProductKind::Plug => 6,
        }
    }

    /// Stable `product_types.type_name`
    pub fn as_str(self) -> &'static str {
        match self {
            ProductKind::Pedal => "pedal",
            ProductKind::PowerSupply => "power_supply",
            ProductKind::Pedalboard => "pedalboard",
            ProductKind::MidiController => "midi_controller",
            ProductKind::Utility => "utility",
            ProductKind::Plug => "plug",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ProductKind::Pedal => "Guitar effects pedal",
            ProductKind::PowerSupply => "Pedalboard power supply",
            ProductKind::Pedalboard => "Pedalboard chassis",
            ProductKind::MidiController => "MIDI foot controller",
            ProductKind::Utility => "Tuner, DI, attenuator or other utility device",
            ProductKind::Plug => "Cable plug or connector",
        }
    }

    pub fn from_id(id: i64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown product type id: {}", id)))
    }
}

/// Row of the `product_types` reference table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub id: i64,
    pub type_name: String,
    pub description: Option<String>,
}

/// Product row joined with its manufacturer name and type name
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub manufacturer_id: i64,
    pub manufacturer_name: String,
    pub product_type_id: i64,
    pub product_type: String,
    pub model: String,
    pub color_options: Option<String>,
    pub in_production: Option<bool>,
    pub width_mm: Option<f64>,
    pub depth_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub weight_grams: Option<i64>,
    pub msrp_cents: Option<i64>,
    pub product_page: Option<String>,
    pub instruction_manual: Option<String>,
    pub image_path: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub data_reliability: Option<String>,
}

impl Product {
    /// Footprint in mm², treating a missing dimension as zero
    pub fn footprint_area_mm2(&self) -> f64 {
        self.width_mm.unwrap_or(0.0) * self.depth_mm.unwrap_or(0.0)
    }
}

const PRODUCT_SELECT: &str = r#"
    SELECT p.id, p.manufacturer_id, m.name AS manufacturer_name,
           p.product_type_id, t.type_name AS product_type,
           p.model, p.color_options, p.in_production,
           p.width_mm, p.depth_mm, p.height_mm, p.weight_grams,
           p.msrp_cents, p.product_page, p.instruction_manual, p.image_path,
           p.description, p.tags, p.data_reliability
    FROM products p
    JOIN manufacturers m ON m.id = p.manufacturer_id
    JOIN product_types t ON t.id = p.product_type_id
"#;

/// Load a product by id
pub async fn find_product(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!("{PRODUCT_SELECT} WHERE p.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Load every product, ordered by id
pub async fn find_all_products(pool: &SqlitePool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!("{PRODUCT_SELECT} ORDER BY p.id"))
        .fetch_all(pool)
        .await?;

    Ok(products)
}

/// Load products of one type, ordered by id
pub async fn find_products_by_type(pool: &SqlitePool, type_id: i64) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "{PRODUCT_SELECT} WHERE p.product_type_id = ? ORDER BY p.id"
    ))
    .bind(type_id)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Load products made by one manufacturer, ordered by id
pub async fn find_products_by_manufacturer(
    pool: &SqlitePool,
    manufacturer_id: i64,
) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "{PRODUCT_SELECT} WHERE p.manufacturer_id = ? ORDER BY p.id"
    ))
    .bind(manufacturer_id)
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Count products made by one manufacturer
pub async fn count_products_by_manufacturer(pool: &SqlitePool, manufacturer_id: i64) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE manufacturer_id = ?")
        .bind(manufacturer_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Load the product type reference rows, ordered by id
pub async fn find_all_product_types(pool: &SqlitePool) -> Result<Vec<ProductType>> {
    let types = sqlx::query_as::<_, ProductType>(
        "SELECT id, type_name, description FROM product_types ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(types)
}
