//! Database initialization
//!
//! Creates the catalog schema on first run. Every statement is idempotent
//! (`CREATE TABLE IF NOT EXISTS`, `INSERT OR IGNORE`), so opening an existing
//! database runs the same sequence safely.

use crate::db::products::ProductKind;
use crate::{Error, Result};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Open (or create) the catalog database and ensure the schema exists
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_schema(&pool).await?;

    Ok(pool)
}

/// Connect to an existing catalog database in read-only mode
///
/// The service never writes, so production deployments can point this at a
/// database produced by the ingestion tooling.
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(Error::Config(format!(
            "Database not found: {}\nRun without --read-only once to create the schema.",
            db_path.display()
        )));
    }

    // mode=ro: SQLite rejects every write on these connections
    let db_url = format!("sqlite://{}?mode=ro", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    Ok(pool)
}

/// Create every catalog table and seed the product type reference rows
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(pool)
        .await?;

    create_product_types_table(pool).await?;
    create_manufacturers_table(pool).await?;
    create_products_table(pool).await?;

    // Per-type detail tables (1:1 with products via product_id)
    create_pedal_details_table(pool).await?;
    create_power_supply_details_table(pool).await?;
    create_pedalboard_details_table(pool).await?;
    create_midi_controller_details_table(pool).await?;
    create_utility_details_table(pool).await?;
    create_plug_details_table(pool).await?;

    create_jacks_table(pool).await?;

    seed_product_types(pool).await?;

    Ok(())
}

async fn create_product_types_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS product_types (
            id INTEGER PRIMARY KEY,
            type_name TEXT NOT NULL UNIQUE,
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_manufacturers_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS manufacturers (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            country TEXT,
            founded TEXT,
            status TEXT,
            specialty TEXT,
            website TEXT,
            notes TEXT,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_products_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY,
            manufacturer_id INTEGER NOT NULL REFERENCES manufacturers(id),
            product_type_id INTEGER NOT NULL REFERENCES product_types(id),
            model TEXT NOT NULL,
            color_options TEXT,
            in_production BOOLEAN,
            width_mm REAL,
            depth_mm REAL,
            height_mm REAL,
            weight_grams INTEGER,
            msrp_cents INTEGER,
            product_page TEXT,
            instruction_manual TEXT,
            image_path TEXT,
            description TEXT,
            tags TEXT,
            data_reliability TEXT,
            notes TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_manufacturer ON products(manufacturer_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_products_type ON products(product_type_id)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_pedal_details_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pedal_details (
            product_id INTEGER PRIMARY KEY REFERENCES products(id) ON DELETE CASCADE,
            effect_type TEXT,
            circuit_type TEXT,
            circuit_routing_options TEXT,
            signal_type TEXT,
            bypass_type TEXT,
            mono_stereo TEXT,
            audio_mix TEXT,
            has_analog_dry_through BOOLEAN,
            has_spillover BOOLEAN,
            sample_rate_khz INTEGER,
            bit_depth INTEGER,
            latency_ms REAL,
            preset_count INTEGER,
            has_tap_tempo BOOLEAN,
            midi_capable BOOLEAN,
            midi_receive_capabilities TEXT,
            midi_send_capabilities TEXT,
            has_software_editor BOOLEAN,
            software_platforms TEXT,
            is_firmware_updatable BOOLEAN,
            has_usb_audio BOOLEAN,
            battery_capable BOOLEAN,
            fx_loop_count INTEGER,
            has_reorderable_loops BOOLEAN
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_power_supply_details_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS power_supply_details (
            product_id INTEGER PRIMARY KEY REFERENCES products(id) ON DELETE CASCADE,
            supply_type TEXT,
            topology TEXT,
            input_voltage_range TEXT,
            input_frequency TEXT,
            total_output_count INTEGER,
            total_current_ma INTEGER,
            isolated_output_count INTEGER,
            available_voltages TEXT,
            has_variable_voltage BOOLEAN,
            voltage_range TEXT,
            mounting_type TEXT,
            bracket_included BOOLEAN,
            is_expandable BOOLEAN,
            expansion_port_type TEXT,
            is_battery_powered BOOLEAN,
            battery_capacity_wh REAL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_pedalboard_details_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pedalboard_details (
            product_id INTEGER PRIMARY KEY REFERENCES products(id) ON DELETE CASCADE,
            usable_width_mm REAL,
            usable_depth_mm REAL,
            surface_type TEXT,
            rail_spacing_mm REAL,
            material TEXT,
            tilt_angle_degrees REAL,
            under_clearance_mm REAL,
            has_second_tier BOOLEAN,
            tier2_usable_width_mm REAL,
            tier2_usable_depth_mm REAL,
            tier2_under_clearance_mm REAL,
            tier2_height_mm REAL,
            has_integrated_power BOOLEAN,
            integrated_power_product_id INTEGER REFERENCES products(id),
            has_integrated_patch_bay BOOLEAN,
            case_included BOOLEAN,
            case_type TEXT,
            max_load_kg REAL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_midi_controller_details_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS midi_controller_details (
            product_id INTEGER PRIMARY KEY REFERENCES products(id) ON DELETE CASCADE,
            footswitch_count INTEGER,
            footswitch_type TEXT,
            has_led_indicators BOOLEAN,
            led_color_options TEXT,
            bank_count INTEGER,
            presets_per_bank INTEGER,
            total_preset_slots INTEGER,
            has_display BOOLEAN,
            display_type TEXT,
            display_size TEXT,
            expression_input_count INTEGER,
            midi_channels INTEGER,
            supports_midi_clock BOOLEAN,
            supports_sysex BOOLEAN,
            software_editor_available BOOLEAN,
            software_platforms TEXT,
            on_device_programming BOOLEAN,
            is_firmware_updatable BOOLEAN,
            config_format TEXT,
            config_format_documented BOOLEAN,
            has_tuner BOOLEAN,
            has_tap_tempo BOOLEAN,
            has_setlist_mode BOOLEAN,
            has_per_switch_displays BOOLEAN,
            aux_switch_input_count INTEGER,
            has_usb_host BOOLEAN,
            has_bluetooth_midi BOOLEAN,
            audio_loop_count INTEGER,
            has_reorderable_loops BOOLEAN,
            loop_bypass_type TEXT,
            has_parallel_routing BOOLEAN,
            has_gapless_switching BOOLEAN,
            has_spillover BOOLEAN
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_utility_details_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS utility_details (
            product_id INTEGER PRIMARY KEY REFERENCES products(id) ON DELETE CASCADE,
            utility_type TEXT NOT NULL,
            is_active BOOLEAN,
            signal_type TEXT,
            bypass_type TEXT,
            has_ground_lift BOOLEAN,
            has_pad BOOLEAN,
            pad_db INTEGER,
            tuning_display_type TEXT,
            tuning_accuracy_cents REAL,
            polyphonic_tuning BOOLEAN,
            sweep_type TEXT,
            has_tuner_out BOOLEAN,
            has_minimum_volume BOOLEAN,
            has_polarity_switch BOOLEAN,
            power_handling_watts INTEGER,
            has_reactive_load BOOLEAN,
            has_attenuation BOOLEAN,
            attenuation_range_db TEXT,
            has_cab_sim BOOLEAN
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_plug_details_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS plug_details (
            product_id INTEGER PRIMARY KEY REFERENCES products(id) ON DELETE CASCADE,
            plug_type TEXT NOT NULL,
            connector_type TEXT NOT NULL,
            is_right_angle BOOLEAN,
            is_pancake BOOLEAN,
            plug_width_mm REAL,
            plug_depth_mm REAL,
            plug_height_mm REAL,
            cable_exit_direction TEXT,
            is_solderless BOOLEAN,
            housing_material TEXT,
            has_locking_mechanism BOOLEAN
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_jacks_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jacks (
            id INTEGER PRIMARY KEY,
            product_id INTEGER NOT NULL REFERENCES products(id) ON DELETE CASCADE,
            category TEXT NOT NULL,
            direction TEXT NOT NULL,
            jack_name TEXT,
            position TEXT,
            connector_type TEXT NOT NULL,
            impedance_ohms INTEGER,
            voltage TEXT,
            current_ma INTEGER,
            polarity TEXT,
            function TEXT,
            power_over_connector BOOLEAN,
            is_isolated BOOLEAN,
            is_buffered BOOLEAN,
            buffer_switchable BOOLEAN,
            has_ground_lift BOOLEAN,
            has_phase_invert BOOLEAN,
            normalled_to_jack_id INTEGER REFERENCES jacks(id),
            normalling_type TEXT,
            group_id TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_jacks_product ON jacks(product_id)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Insert the fixed product type rows (ids are stable across databases)
async fn seed_product_types(pool: &SqlitePool) -> Result<()> {
    for kind in ProductKind::ALL {
        sqlx::query(
            "INSERT OR IGNORE INTO product_types (id, type_name, description) VALUES (?, ?, ?)",
        )
        .bind(kind.id())
        .bind(kind.as_str())
        .bind(kind.description())
        .execute(pool)
        .await?;
    }

    Ok(())
}
