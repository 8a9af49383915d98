//! Catalog read endpoints: manufacturers, products and per-type views

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use shootout_common::db::{
    Jack, MidiControllerDetail, PedalDetail, PedalboardDetail, PlugDetail, PowerSupplyDetail,
    ProductType, UtilityDetail,
};
use shootout_common::views::{
    find_view, list_views, ManufacturerView, MidiControllerView, PedalView, PedalboardView,
    PlugView, PowerSupplyView, ProductDetailView, ProductSummary, UtilityView,
};

use crate::api::params::required_id;
use crate::error::{ApiError, ApiResult, OrNotFound};
use crate::services::catalog;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ManufacturerQuery {
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub type_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PedalQuery {
    pub effect_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityQuery {
    pub utility_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Manufacturers
// ---------------------------------------------------------------------------

/// GET /api/manufacturers[?search=]
pub async fn list_manufacturers(
    State(state): State<AppState>,
    Query(query): Query<ManufacturerQuery>,
) -> ApiResult<Json<Vec<ManufacturerView>>> {
    let manufacturers = catalog::list_manufacturers(&state.db, query.search.as_deref()).await?;
    Ok(Json(manufacturers))
}

/// GET /api/manufacturers/:id
pub async fn get_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ManufacturerView>> {
    let manufacturer = catalog::get_manufacturer(&state.db, id)
        .await?
        .or_not_found("Manufacturer", id)?;
    Ok(Json(manufacturer))
}

/// GET /api/manufacturers/:id/products
///
/// An unknown manufacturer and one with no products are both 404.
pub async fn list_manufacturer_products(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<ProductSummary>>> {
    let products = catalog::list_manufacturer_products(&state.db, id).await?;
    if products.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No products found for manufacturer {}",
            id
        )));
    }
    Ok(Json(products))
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// GET /api/products[?typeId=]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> ApiResult<Json<Vec<ProductSummary>>> {
    let type_id = match query.type_id.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => Some(required_id("typeId", Some(raw))?),
        _ => None,
    };
    Ok(Json(catalog::list_products(&state.db, type_id).await?))
}

/// GET /api/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProductDetailView>> {
    let product = catalog::get_product(&state.db, id)
        .await?
        .or_not_found("Product", id)?;
    Ok(Json(product))
}

/// GET /api/products/:id/jacks
pub async fn list_product_jacks(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Vec<Jack>>> {
    Ok(Json(catalog::list_product_jacks(&state.db, id).await?))
}

/// GET /api/product-types
pub async fn list_product_types(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductType>>> {
    Ok(Json(catalog::list_product_types(&state.db).await?))
}

// ---------------------------------------------------------------------------
// Per-type views
// ---------------------------------------------------------------------------

/// GET /api/pedals[?effectType=]
pub async fn list_pedals(
    State(state): State<AppState>,
    Query(query): Query<PedalQuery>,
) -> ApiResult<Json<Vec<PedalView>>> {
    let pedals = catalog::list_pedals(&state.db, query.effect_type.as_deref()).await?;
    Ok(Json(pedals))
}

/// GET /api/pedals/:id
pub async fn get_pedal(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PedalView>> {
    let pedal = find_view::<PedalDetail>(&state.db, id)
        .await?
        .or_not_found("Pedal", id)?;
    Ok(Json(pedal))
}

/// GET /api/power-supplies
pub async fn list_power_supplies(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PowerSupplyView>>> {
    Ok(Json(list_views::<PowerSupplyDetail>(&state.db).await?))
}

/// GET /api/power-supplies/:id
pub async fn get_power_supply(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PowerSupplyView>> {
    let supply = find_view::<PowerSupplyDetail>(&state.db, id)
        .await?
        .or_not_found("Power supply", id)?;
    Ok(Json(supply))
}

/// GET /api/pedalboards
pub async fn list_pedalboards(State(state): State<AppState>) -> ApiResult<Json<Vec<PedalboardView>>> {
    Ok(Json(list_views::<PedalboardDetail>(&state.db).await?))
}

/// GET /api/pedalboards/:id
pub async fn get_pedalboard(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<PedalboardView>> {
    let board = find_view::<PedalboardDetail>(&state.db, id)
        .await?
        .or_not_found("Pedalboard", id)?;
    Ok(Json(board))
}

/// GET /api/midi-controllers
pub async fn list_midi_controllers(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<MidiControllerView>>> {
    Ok(Json(list_views::<MidiControllerDetail>(&state.db).await?))
}

/// GET /api/midi-controllers/:id
pub async fn get_midi_controller(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MidiControllerView>> {
    let controller = find_view::<MidiControllerDetail>(&state.db, id)
        .await?
        .or_not_found("MIDI controller", id)?;
    Ok(Json(controller))
}

/// GET /api/utilities[?utilityType=]
pub async fn list_utilities(
    State(state): State<AppState>,
    Query(query): Query<UtilityQuery>,
) -> ApiResult<Json<Vec<UtilityView>>> {
    let utilities = catalog::list_utilities(&state.db, query.utility_type.as_deref()).await?;
    Ok(Json(utilities))
}

/// GET /api/utilities/:id
pub async fn get_utility(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UtilityView>> {
    let utility = find_view::<UtilityDetail>(&state.db, id)
        .await?
        .or_not_found("Utility", id)?;
    Ok(Json(utility))
}

/// GET /api/plugs
pub async fn list_plugs(State(state): State<AppState>) -> ApiResult<Json<Vec<PlugView>>> {
    Ok(Json(list_views::<PlugDetail>(&state.db).await?))
}

/// GET /api/plugs/:id
pub async fn get_plug(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<PlugView>> {
    let plug = find_view::<PlugDetail>(&state.db, id)
        .await?
        .or_not_found("Plug", id)?;
    Ok(Json(plug))
}

/// Build catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/manufacturers", get(list_manufacturers))
        .route("/api/manufacturers/:id", get(get_manufacturer))
        .route("/api/manufacturers/:id/products", get(list_manufacturer_products))
        .route("/api/products", get(list_products))
        .route("/api/products/:id", get(get_product))
        .route("/api/products/:id/jacks", get(list_product_jacks))
        .route("/api/product-types", get(list_product_types))
        .route("/api/pedals", get(list_pedals))
        .route("/api/pedals/:id", get(get_pedal))
        .route("/api/power-supplies", get(list_power_supplies))
        .route("/api/power-supplies/:id", get(get_power_supply))
        .route("/api/pedalboards", get(list_pedalboards))
        .route("/api/pedalboards/:id", get(get_pedalboard))
        .route("/api/midi-controllers", get(list_midi_controllers))
        .route("/api/midi-controllers/:id", get(get_midi_controller))
        .route("/api/utilities", get(list_utilities))
        .route("/api/utilities/:id", get(get_utility))
        .route("/api/plugs", get(list_plugs))
        .route("/api/plugs/:id", get(get_plug))
}
