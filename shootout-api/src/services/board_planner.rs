//! Board planner: do these pedals fit on this pedalboard?
//!
//! The check compares total pedal footprint area against the board's usable
//! area. It ignores shape and layout, so a "fits" answer is necessary but not
//! sufficient for a real arrangement.

use serde::Serialize;
use shootout_common::db::{find_product, PedalDetail, PedalboardDetail, PowerSupplyDetail};
use shootout_common::views::{find_view, list_views, PedalView, PedalboardView, PowerSupplyView};
use shootout_common::Result;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use super::round_to_int;

pub const BOARD_DIMENSIONS_UNKNOWN: &str = "Board dimensions unknown — cannot check fit.";

/// Everything the planner UI offers for selection
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    pub pedalboards: Vec<PedalboardView>,
    pub power_supplies: Vec<PowerSupplyView>,
    pub pedals: Vec<PedalView>,
}

/// Physical size of one selected pedal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PedalFootprint {
    pub id: i64,
    pub model: String,
    pub manufacturer_name: String,
    pub width_mm: Option<f64>,
    pub depth_mm: Option<f64>,
    pub height_mm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FitCheckResult {
    pub board_id: i64,
    pub board_model: String,
    pub board_usable_width_mm: Option<f64>,
    pub board_usable_depth_mm: Option<f64>,
    pub total_pedal_area_mm2: f64,
    pub board_area_mm2: f64,
    pub fits_by_area: bool,
    pub pedals: Vec<PedalFootprint>,
    /// Requested ids with no matching product
    pub unresolved_pedal_ids: Vec<i64>,
    pub summary: String,
}

/// All pedalboards, power supplies and pedals
pub async fn list_components(pool: &SqlitePool) -> Result<Components> {
    Ok(Components {
        pedalboards: list_views::<PedalboardDetail>(pool).await?,
        power_supplies: list_views::<PowerSupplyDetail>(pool).await?,
        pedals: list_views::<PedalDetail>(pool).await?,
    })
}

/// Area fit of `pedal_ids` on board `board_id`
///
/// Pedal ids may repeat (two of the same pedal) and unknown ids are skipped.
pub async fn fit_check(
    pool: &SqlitePool,
    board_id: i64,
    pedal_ids: &[i64],
) -> Result<Option<FitCheckResult>> {
    let Some(board) = find_view::<PedalboardDetail>(pool, board_id).await? else {
        return Ok(None);
    };

    let usable_width = board.detail.usable_width_mm.or(board.product.width_mm);
    let usable_depth = board.detail.usable_depth_mm.or(board.product.depth_mm);

    let (Some(width), Some(depth)) = (usable_width, usable_depth) else {
        warn!("Board {} has no usable dimensions, fit check degraded", board_id);
        return Ok(Some(FitCheckResult {
            board_id,
            board_model: board.product.model,
            board_usable_width_mm: None,
            board_usable_depth_mm: None,
            total_pedal_area_mm2: 0.0,
            board_area_mm2: 0.0,
            fits_by_area: false,
            pedals: Vec::new(),
            unresolved_pedal_ids: Vec::new(),
            summary: BOARD_DIMENSIONS_UNKNOWN.to_string(),
        }));
    };

    let board_area = width * depth;

    let mut total_area = 0.0;
    let mut pedals = Vec::with_capacity(pedal_ids.len());
    let mut unresolved = Vec::new();

    for &pedal_id in pedal_ids {
        match find_product(pool, pedal_id).await? {
            Some(product) => {
                total_area += product.footprint_area_mm2();
                pedals.push(PedalFootprint {
                    id: product.id,
                    model: product.model,
                    manufacturer_name: product.manufacturer_name,
                    width_mm: product.width_mm,
                    depth_mm: product.depth_mm,
                    height_mm: product.height_mm,
                });
            }
            None => unresolved.push(pedal_id),
        }
    }

    let fits = total_area <= board_area;
    let summary = fit_summary(total_area, board_area, fits);
    debug!("Fit check board {}: {}", board_id, summary);

    Ok(Some(FitCheckResult {
        board_id,
        board_model: board.product.model,
        board_usable_width_mm: Some(width),
        board_usable_depth_mm: Some(depth),
        total_pedal_area_mm2: total_area,
        board_area_mm2: board_area,
        fits_by_area: fits,
        pedals,
        unresolved_pedal_ids: unresolved,
        summary,
    }))
}

fn fit_summary(total_area: f64, board_area: f64, fits: bool) -> String {
    if fits {
        // Zero-area board with zero-area pedals: report 0% rather than NaN
        let percent = if board_area > 0.0 {
            total_area / board_area * 100.0
        } else {
            0.0
        };
        format!(
            "Pedals use {} of {} mm² ({}% of board area).",
            round_to_int(total_area),
            round_to_int(board_area),
            round_to_int(percent)
        )
    } else {
        format!(
            "Pedals need {} mm² but board only has {} mm² — over by {} mm².",
            round_to_int(total_area),
            round_to_int(board_area),
            round_to_int(total_area - board_area)
        )
    }
}
