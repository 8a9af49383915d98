//! Power budget: total pedal current draw against supply capacity
//!
//! A plain sum of each pedal's rated draw. Voltage and polarity are reported
//! per pedal but never checked against the supply's outputs.

use serde::Serialize;
use shootout_common::db::{find_power_input_jack, find_product, PowerSupplyDetail};
use shootout_common::views::{find_view, list_views};
use shootout_common::Result;
use sqlx::SqlitePool;
use tracing::debug;

/// Power requirements of one pedal, from its first "Power Input" jack
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PedalPower {
    pub id: i64,
    pub model: String,
    pub manufacturer_name: String,
    pub voltage: Option<String>,
    pub current_ma: Option<i64>,
    pub polarity: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub supply_id: i64,
    pub supply_model: String,
    pub total_capacity_ma: i64,
    pub total_draw_ma: i64,
    pub remaining_ma: i64,
    pub within_budget: bool,
    pub pedals: Vec<PedalPower>,
    /// Requested ids with no matching product
    pub unresolved_pedal_ids: Vec<i64>,
    pub summary: String,
}

/// A supply with enough capacity for a pedal selection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyMatch {
    pub id: i64,
    pub model: String,
    pub manufacturer_name: String,
    pub total_capacity_ma: i64,
    pub required_ma: i64,
    pub headroom_ma: i64,
    pub msrp_display: Option<String>,
}

/// Per-pedal power rows plus the ids that resolved to nothing
struct PedalDraw {
    pedals: Vec<PedalPower>,
    unresolved: Vec<i64>,
}

impl PedalDraw {
    /// Sum of known draws; pedals without a rating add nothing
    fn total_ma(&self) -> i64 {
        self.pedals.iter().filter_map(|p| p.current_ma).sum()
    }
}

/// Any product type may appear; only its first "Power Input" jack counts
async fn collect_pedal_power(pool: &SqlitePool, pedal_ids: &[i64]) -> Result<PedalDraw> {
    let mut pedals = Vec::with_capacity(pedal_ids.len());
    let mut unresolved = Vec::new();

    for &pedal_id in pedal_ids {
        let Some(product) = find_product(pool, pedal_id).await? else {
            unresolved.push(pedal_id);
            continue;
        };

        let power_jack = find_power_input_jack(pool, pedal_id).await?;
        let (voltage, current_ma, polarity) = match power_jack {
            Some(jack) => (jack.voltage, jack.current_ma, jack.polarity),
            None => (None, None, None),
        };

        pedals.push(PedalPower {
            id: product.id,
            model: product.model,
            manufacturer_name: product.manufacturer_name,
            voltage,
            current_ma,
            polarity,
        });
    }

    Ok(PedalDraw { pedals, unresolved })
}

/// Draw of `pedal_ids` against supply `supply_id`
pub async fn calculate(
    pool: &SqlitePool,
    supply_id: i64,
    pedal_ids: &[i64],
) -> Result<Option<CalculationResult>> {
    let Some(supply) = find_view::<PowerSupplyDetail>(pool, supply_id).await? else {
        return Ok(None);
    };

    let capacity = supply.detail.total_current_ma.unwrap_or(0);
    let draw = collect_pedal_power(pool, pedal_ids).await?;
    let total_draw = draw.total_ma();
    let remaining = capacity - total_draw;
    let within_budget = remaining >= 0;

    let summary = budget_summary(capacity, total_draw, remaining);
    debug!("Power budget supply {}: {}", supply_id, summary);

    Ok(Some(CalculationResult {
        supply_id,
        supply_model: supply.product.model,
        total_capacity_ma: capacity,
        total_draw_ma: total_draw,
        remaining_ma: remaining,
        within_budget,
        pedals: draw.pedals,
        unresolved_pedal_ids: draw.unresolved,
        summary,
    }))
}

fn budget_summary(capacity: i64, total_draw: i64, remaining: i64) -> String {
    if remaining >= 0 {
        format!(
            "Total draw: {}mA of {}mA capacity ({}mA headroom).",
            total_draw, capacity, remaining
        )
    } else {
        format!(
            "Over budget! Need {}mA but supply only provides {}mA (short by {}mA).",
            total_draw, capacity, -remaining
        )
    }
}

/// Supplies whose rated capacity covers the combined draw of `pedal_ids`
///
/// Supplies without a capacity rating are never suggested.
pub async fn find_supplies_for_pedals(
    pool: &SqlitePool,
    pedal_ids: &[i64],
) -> Result<Vec<SupplyMatch>> {
    let required = collect_pedal_power(pool, pedal_ids).await?.total_ma();

    let matches: Vec<SupplyMatch> = list_views::<PowerSupplyDetail>(pool)
        .await?
        .into_iter()
        .filter_map(|supply| {
            let capacity = supply.detail.total_current_ma?;
            (capacity >= required).then(|| SupplyMatch {
                id: supply.product.id,
                model: supply.product.model,
                manufacturer_name: supply.product.manufacturer_name,
                total_capacity_ma: capacity,
                required_ma: required,
                headroom_ma: capacity - required,
                msrp_display: supply.product.msrp_display,
            })
        })
        .collect();

    debug!(
        "{} supplies cover {}mA for {} pedals",
        matches.len(),
        required,
        pedal_ids.len()
    );

    Ok(matches)
}
