//! Type-specific product detail records
//!
//! Each product type has its own detail table keyed by `product_id`, which is
//! also the owning product's id. `DetailRecord` lets the view assembler treat
//! all six tables uniformly.

use crate::db::products::ProductKind;
use crate::Result;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};

/// A row of one of the per-type detail tables
pub trait DetailRecord: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + Sized {
    /// Detail table name
    const TABLE: &'static str;
    /// Product type this detail belongs to
    const KIND: ProductKind;

    /// Shape the detail takes inside a serialized view
    type Payload: Serialize;

    /// Shared identity with the owning product
    fn product_id(&self) -> i64;

    fn into_payload(self) -> Self::Payload;
}

/// Load one detail record by product id
pub async fn find_detail<D: DetailRecord>(pool: &SqlitePool, product_id: i64) -> Result<Option<D>> {
    let detail = sqlx::query_as::<_, D>(&format!(
        "SELECT * FROM {} WHERE product_id = ?",
        D::TABLE
    ))
    .bind(product_id)
    .fetch_optional(pool)
    .await?;

    Ok(detail)
}

/// Load every detail record of a type, ordered by product id
pub async fn find_all_details<D: DetailRecord>(pool: &SqlitePool) -> Result<Vec<D>> {
    let details = sqlx::query_as::<_, D>(&format!(
        "SELECT * FROM {} ORDER BY product_id",
        D::TABLE
    ))
    .fetch_all(pool)
    .await?;

    Ok(details)
}

// ---------------------------------------------------------------------------
// Pedals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PedalDetail {
    #[serde(skip_serializing)]
    pub product_id: i64,
    /// e.g. "Delay", "Overdrive", "Reverb"
    pub effect_type: Option<String>,
    pub circuit_type: Option<String>,
    pub circuit_routing_options: Option<String>,
    /// "Analog", "Digital", "Hybrid"
    pub signal_type: Option<String>,
    pub bypass_type: Option<String>,
    pub mono_stereo: Option<String>,
    pub audio_mix: Option<String>,
    pub has_analog_dry_through: Option<bool>,
    pub has_spillover: Option<bool>,
    pub sample_rate_khz: Option<i64>,
    pub bit_depth: Option<i64>,
    pub latency_ms: Option<f64>,
    pub preset_count: Option<i64>,
    pub has_tap_tempo: Option<bool>,
    pub midi_capable: Option<bool>,
    /// Free text, e.g. "PC, CC, Clock"
    pub midi_receive_capabilities: Option<String>,
    pub midi_send_capabilities: Option<String>,
    pub has_software_editor: Option<bool>,
    pub software_platforms: Option<String>,
    pub is_firmware_updatable: Option<bool>,
    pub has_usb_audio: Option<bool>,
    pub battery_capable: Option<bool>,
    pub fx_loop_count: Option<i64>,
    pub has_reorderable_loops: Option<bool>,
}

impl PedalDetail {
    /// MIDI capability with an absent flag read as "no"
    pub fn is_midi_capable(&self) -> bool {
        self.midi_capable.unwrap_or(false)
    }
}

/// Pedal views nest their detail fields under `pedalDetails`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedPedalDetails {
    pub pedal_details: PedalDetail,
}

impl DetailRecord for PedalDetail {
    const TABLE: &'static str = "pedal_details";
    const KIND: ProductKind = ProductKind::Pedal;
    type Payload = NestedPedalDetails;

    fn product_id(&self) -> i64 {
        self.product_id
    }

    fn into_payload(self) -> NestedPedalDetails {
        NestedPedalDetails { pedal_details: self }
    }
}

/// Load pedals with an exact effect type, ordered by product id
pub async fn find_pedals_by_effect_type(
    pool: &SqlitePool,
    effect_type: &str,
) -> Result<Vec<PedalDetail>> {
    let pedals = sqlx::query_as::<_, PedalDetail>(
        "SELECT * FROM pedal_details WHERE effect_type = ? ORDER BY product_id",
    )
    .bind(effect_type)
    .fetch_all(pool)
    .await?;

    Ok(pedals)
}

/// Load pedals flagged `midi_capable`, ordered by product id
pub async fn find_midi_capable_pedals(pool: &SqlitePool) -> Result<Vec<PedalDetail>> {
    let pedals = sqlx::query_as::<_, PedalDetail>(
        "SELECT * FROM pedal_details WHERE midi_capable = 1 ORDER BY product_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(pedals)
}

// ---------------------------------------------------------------------------
// Power supplies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerSupplyDetail {
    #[serde(skip_serializing)]
    pub product_id: i64,
    pub supply_type: Option<String>,
    /// e.g. "Toroidal transformer", "Switch-mode"
    pub topology: Option<String>,
    pub input_voltage_range: Option<String>,
    pub input_frequency: Option<String>,
    pub total_output_count: Option<i64>,
    /// Rated total current across all outputs
    pub total_current_ma: Option<i64>,
    pub isolated_output_count: Option<i64>,
    pub available_voltages: Option<String>,
    pub has_variable_voltage: Option<bool>,
    pub voltage_range: Option<String>,
    pub mounting_type: Option<String>,
    pub bracket_included: Option<bool>,
    pub is_expandable: Option<bool>,
    pub expansion_port_type: Option<String>,
    pub is_battery_powered: Option<bool>,
    pub battery_capacity_wh: Option<f64>,
}

impl DetailRecord for PowerSupplyDetail {
    const TABLE: &'static str = "power_supply_details";
    const KIND: ProductKind = ProductKind::PowerSupply;
    type Payload = Self;

    fn product_id(&self) -> i64 {
        self.product_id
    }

    fn into_payload(self) -> Self {
        self
    }
}

// ---------------------------------------------------------------------------
// Pedalboards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PedalboardDetail {
    #[serde(skip_serializing)]
    pub product_id: i64,
    /// Mounting surface width; falls back to the product width when absent
    pub usable_width_mm: Option<f64>,
    pub usable_depth_mm: Option<f64>,
    pub surface_type: Option<String>,
    pub rail_spacing_mm: Option<f64>,
    pub material: Option<String>,
    pub tilt_angle_degrees: Option<f64>,
    pub under_clearance_mm: Option<f64>,
    pub has_second_tier: Option<bool>,
    pub tier2_usable_width_mm: Option<f64>,
    pub tier2_usable_depth_mm: Option<f64>,
    pub tier2_under_clearance_mm: Option<f64>,
    pub tier2_height_mm: Option<f64>,
    pub has_integrated_power: Option<bool>,
    pub integrated_power_product_id: Option<i64>,
    pub has_integrated_patch_bay: Option<bool>,
    pub case_included: Option<bool>,
    pub case_type: Option<String>,
    pub max_load_kg: Option<f64>,
}

impl DetailRecord for PedalboardDetail {
    const TABLE: &'static str = "pedalboard_details";
    const KIND: ProductKind = ProductKind::Pedalboard;
    type Payload = Self;

    fn product_id(&self) -> i64 {
        self.product_id
    }

    fn into_payload(self) -> Self {
        self
    }
}

// ---------------------------------------------------------------------------
// MIDI controllers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MidiControllerDetail {
    #[serde(skip_serializing)]
    pub product_id: i64,
    pub footswitch_count: Option<i64>,
    pub footswitch_type: Option<String>,
    pub has_led_indicators: Option<bool>,
    pub led_color_options: Option<String>,
    pub bank_count: Option<i64>,
    pub presets_per_bank: Option<i64>,
    pub total_preset_slots: Option<i64>,
    pub has_display: Option<bool>,
    pub display_type: Option<String>,
    pub display_size: Option<String>,
    pub expression_input_count: Option<i64>,
    pub midi_channels: Option<i64>,
    pub supports_midi_clock: Option<bool>,
    pub supports_sysex: Option<bool>,
    pub software_editor_available: Option<bool>,
    pub software_platforms: Option<String>,
    pub on_device_programming: Option<bool>,
    pub is_firmware_updatable: Option<bool>,
    pub config_format: Option<String>,
    pub config_format_documented: Option<bool>,
    pub has_tuner: Option<bool>,
    pub has_tap_tempo: Option<bool>,
    pub has_setlist_mode: Option<bool>,
    pub has_per_switch_displays: Option<bool>,
    pub aux_switch_input_count: Option<i64>,
    pub has_usb_host: Option<bool>,
    pub has_bluetooth_midi: Option<bool>,
    pub audio_loop_count: Option<i64>,
    pub has_reorderable_loops: Option<bool>,
    pub loop_bypass_type: Option<String>,
    pub has_parallel_routing: Option<bool>,
    pub has_gapless_switching: Option<bool>,
    pub has_spillover: Option<bool>,
}

impl DetailRecord for MidiControllerDetail {
    const TABLE: &'static str = "midi_controller_details";
    const KIND: ProductKind = ProductKind::MidiController;
    type Payload = Self;

    fn product_id(&self) -> i64 {
        self.product_id
    }

    fn into_payload(self) -> Self {
        self
    }
}

// ---------------------------------------------------------------------------
// Utilities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityDetail {
    #[serde(skip_serializing)]
    pub product_id: i64,
    /// e.g. "Tuner", "DI Box", "Attenuator", "Volume Pedal"
    pub utility_type: String,
    pub is_active: Option<bool>,
    pub signal_type: Option<String>,
    pub bypass_type: Option<String>,
    pub has_ground_lift: Option<bool>,
    pub has_pad: Option<bool>,
    pub pad_db: Option<i64>,
    pub tuning_display_type: Option<String>,
    pub tuning_accuracy_cents: Option<f64>,
    pub polyphonic_tuning: Option<bool>,
    pub sweep_type: Option<String>,
    pub has_tuner_out: Option<bool>,
    pub has_minimum_volume: Option<bool>,
    pub has_polarity_switch: Option<bool>,
    pub power_handling_watts: Option<i64>,
    pub has_reactive_load: Option<bool>,
    pub has_attenuation: Option<bool>,
    pub attenuation_range_db: Option<String>,
    pub has_cab_sim: Option<bool>,
}

impl DetailRecord for UtilityDetail {
    const TABLE: &'static str = "utility_details";
    const KIND: ProductKind = ProductKind::Utility;
    type Payload = Self;

    fn product_id(&self) -> i64 {
        self.product_id
    }

    fn into_payload(self) -> Self {
        self
    }
}

/// Load utilities with an exact utility type, ordered by product id
pub async fn find_utilities_by_type(
    pool: &SqlitePool,
    utility_type: &str,
) -> Result<Vec<UtilityDetail>> {
    let utilities = sqlx::query_as::<_, UtilityDetail>(
        "SELECT * FROM utility_details WHERE utility_type = ? ORDER BY product_id",
    )
    .bind(utility_type)
    .fetch_all(pool)
    .await?;

    Ok(utilities)
}

// ---------------------------------------------------------------------------
// Plugs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlugDetail {
    #[serde(skip_serializing)]
    pub product_id: i64,
    pub plug_type: String,
    pub connector_type: String,
    pub is_right_angle: Option<bool>,
    pub is_pancake: Option<bool>,
    pub plug_width_mm: Option<f64>,
    pub plug_depth_mm: Option<f64>,
    pub plug_height_mm: Option<f64>,
    pub cable_exit_direction: Option<String>,
    pub is_solderless: Option<bool>,
    pub housing_material: Option<String>,
    pub has_locking_mechanism: Option<bool>,
}

impl DetailRecord for PlugDetail {
    const TABLE: &'static str = "plug_details";
    const KIND: ProductKind = ProductKind::Plug;
    type Payload = Self;

    fn product_id(&self) -> i64 {
        self.product_id
    }

    fn into_payload(self) -> Self {
        self
    }
}
