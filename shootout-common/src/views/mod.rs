//! Product views
//!
//! A view is the flattened JSON shape of one product: the shared product
//! columns, the type-specific detail payload, and the product's jacks. Views
//! are derived on every read and never stored.

pub mod assembler;

use crate::db::{
    Jack, Manufacturer, MidiControllerDetail, NestedPedalDetails, PedalboardDetail, PlugDetail,
    PowerSupplyDetail, Product, UtilityDetail,
};
use serde::Serialize;

pub use assembler::{assemble, assemble_all, find_view, list_views};

/// Render integer cents as `"$<dollars>.<cents>"`
pub fn format_msrp(cents: Option<i64>) -> Option<String> {
    cents.map(|c| format!("${}.{:02}", c / 100, c % 100))
}

/// Product columns shared by every detail view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub id: i64,
    pub model: String,
    pub manufacturer_name: String,
    pub manufacturer_id: i64,
    pub color_options: Option<String>,
    pub in_production: Option<bool>,
    pub width_mm: Option<f64>,
    pub depth_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub weight_grams: Option<i64>,
    pub msrp_display: Option<String>,
    pub msrp_cents: Option<i64>,
    pub product_page: Option<String>,
    pub instruction_manual: Option<String>,
    pub image_path: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub data_reliability: Option<String>,
}

impl From<Product> for ProductFields {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            msrp_display: format_msrp(p.msrp_cents),
            model: p.model,
            manufacturer_name: p.manufacturer_name,
            manufacturer_id: p.manufacturer_id,
            color_options: p.color_options,
            in_production: p.in_production,
            width_mm: p.width_mm,
            depth_mm: p.depth_mm,
            height_mm: p.height_mm,
            weight_grams: p.weight_grams,
            msrp_cents: p.msrp_cents,
            product_page: p.product_page,
            instruction_manual: p.instruction_manual,
            image_path: p.image_path,
            description: p.description,
            tags: p.tags,
            data_reliability: p.data_reliability,
        }
    }
}

/// Product + detail payload + jacks
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView<P> {
    #[serde(flatten)]
    pub product: ProductFields,
    #[serde(flatten)]
    pub detail: P,
    pub jacks: Vec<Jack>,
}

impl<P> ProductView<P> {
    pub fn id(&self) -> i64 {
        self.product.id
    }
}

pub type PedalView = ProductView<NestedPedalDetails>;
pub type PowerSupplyView = ProductView<PowerSupplyDetail>;
pub type PedalboardView = ProductView<PedalboardDetail>;
pub type MidiControllerView = ProductView<MidiControllerDetail>;
pub type UtilityView = ProductView<UtilityDetail>;
pub type PlugView = ProductView<PlugDetail>;

/// Type-agnostic product row for list endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: i64,
    pub model: String,
    pub manufacturer_name: String,
    pub manufacturer_id: i64,
    pub product_type: String,
    pub product_type_id: i64,
    pub color_options: Option<String>,
    pub in_production: Option<bool>,
    pub width_mm: Option<f64>,
    pub depth_mm: Option<f64>,
    pub height_mm: Option<f64>,
    pub weight_grams: Option<i64>,
    pub msrp_display: Option<String>,
    pub msrp_cents: Option<i64>,
    pub product_page: Option<String>,
    pub image_path: Option<String>,
}

impl From<&Product> for ProductSummary {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id,
            model: p.model.clone(),
            manufacturer_name: p.manufacturer_name.clone(),
            manufacturer_id: p.manufacturer_id,
            product_type: p.product_type.clone(),
            product_type_id: p.product_type_id,
            color_options: p.color_options.clone(),
            in_production: p.in_production,
            width_mm: p.width_mm,
            depth_mm: p.depth_mm,
            height_mm: p.height_mm,
            weight_grams: p.weight_grams,
            msrp_display: format_msrp(p.msrp_cents),
            msrp_cents: p.msrp_cents,
            product_page: p.product_page.clone(),
            image_path: p.image_path.clone(),
        }
    }
}

/// Single-product view without type-specific detail
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailView {
    #[serde(flatten)]
    pub summary: ProductSummary,
    pub instruction_manual: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub jacks: Vec<Jack>,
}

impl ProductDetailView {
    pub fn new(product: Product, jacks: Vec<Jack>) -> Self {
        Self {
            summary: ProductSummary::from(&product),
            instruction_manual: product.instruction_manual,
            description: product.description,
            tags: product.tags,
            jacks,
        }
    }
}

/// Manufacturer with its computed product count
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturerView {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
    pub founded: Option<String>,
    pub status: Option<String>,
    pub specialty: Option<String>,
    pub website: Option<String>,
    pub product_count: i64,
}

impl ManufacturerView {
    pub fn new(m: Manufacturer, product_count: i64) -> Self {
        Self {
            id: m.id,
            name: m.name,
            country: m.country,
            founded: m.founded,
            status: m.status,
            specialty: m.specialty,
            website: m.website,
            product_count,
        }
    }
}
