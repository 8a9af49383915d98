//! Planner endpoints: board fit, MIDI compatibility, power budget

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::api::params::{id_list, required_id};
use crate::error::{ApiResult, OrNotFound};
use crate::services::board_planner::{self, Components, FitCheckResult};
use crate::services::midi_planner::{self, CompatibilityResult, MidiDevice};
use crate::services::power_budget::{self, CalculationResult, SupplyMatch};
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitCheckQuery {
    pub board_id: Option<String>,
    pub pedal_ids: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityQuery {
    pub controller_id: Option<String>,
    pub pedal_ids: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateQuery {
    pub supply_id: Option<String>,
    pub pedal_ids: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuppliesQuery {
    pub pedal_ids: Option<String>,
}

/// GET /api/board-planner/components
pub async fn get_components(State(state): State<AppState>) -> ApiResult<Json<Components>> {
    Ok(Json(board_planner::list_components(&state.db).await?))
}

/// GET /api/board-planner/fit-check?boardId=&pedalIds=
pub async fn fit_check(
    State(state): State<AppState>,
    Query(query): Query<FitCheckQuery>,
) -> ApiResult<Json<FitCheckResult>> {
    let board_id = required_id("boardId", query.board_id.as_deref())?;
    let pedal_ids = id_list("pedalIds", query.pedal_ids.as_deref())?;

    let result = board_planner::fit_check(&state.db, board_id, &pedal_ids)
        .await?
        .or_not_found("Pedalboard", board_id)?;
    Ok(Json(result))
}

/// GET /api/midi-planner/devices
pub async fn get_devices(State(state): State<AppState>) -> ApiResult<Json<Vec<MidiDevice>>> {
    Ok(Json(midi_planner::list_devices(&state.db).await?))
}

/// GET /api/midi-planner/compatibility?controllerId=&pedalIds=
pub async fn check_compatibility(
    State(state): State<AppState>,
    Query(query): Query<CompatibilityQuery>,
) -> ApiResult<Json<CompatibilityResult>> {
    let controller_id = required_id("controllerId", query.controller_id.as_deref())?;
    let pedal_ids = id_list("pedalIds", query.pedal_ids.as_deref())?;

    let result = midi_planner::check_compatibility(&state.db, controller_id, &pedal_ids)
        .await?
        .or_not_found("MIDI controller", controller_id)?;
    Ok(Json(result))
}

/// GET /api/power-budget/calculate?supplyId=&pedalIds=
pub async fn calculate(
    State(state): State<AppState>,
    Query(query): Query<CalculateQuery>,
) -> ApiResult<Json<CalculationResult>> {
    let supply_id = required_id("supplyId", query.supply_id.as_deref())?;
    let pedal_ids = id_list("pedalIds", query.pedal_ids.as_deref())?;

    let result = power_budget::calculate(&state.db, supply_id, &pedal_ids)
        .await?
        .or_not_found("Power supply", supply_id)?;
    Ok(Json(result))
}

/// GET /api/power-budget/supplies-for-pedals?pedalIds=
pub async fn supplies_for_pedals(
    State(state): State<AppState>,
    Query(query): Query<SuppliesQuery>,
) -> ApiResult<Json<Vec<SupplyMatch>>> {
    let pedal_ids = id_list("pedalIds", query.pedal_ids.as_deref())?;
    Ok(Json(
        power_budget::find_supplies_for_pedals(&state.db, &pedal_ids).await?,
    ))
}

/// Build planner routes
pub fn planner_routes() -> Router<AppState> {
    Router::new()
        .route("/api/board-planner/components", get(get_components))
        .route("/api/board-planner/fit-check", get(fit_check))
        .route("/api/midi-planner/devices", get(get_devices))
        .route("/api/midi-planner/compatibility", get(check_compatibility))
        .route("/api/power-budget/calculate", get(calculate))
        .route("/api/power-budget/supplies-for-pedals", get(supplies_for_pedals))
}
