//! Test helpers for shootout-api integration tests
//!
//! `seeded_pool()` builds an in-memory catalog with a small, fixed set of
//! products. Ids are grouped by type:
//!
//! | id  | type            | notes                                          |
//! |-----|-----------------|------------------------------------------------|
//! | 100 | pedalboard      | usable 600x300                                 |
//! | 101 | pedalboard      | no dimensions at all                           |
//! | 102 | pedalboard      | no usable dims, product 400x200                |
//! | 200 | power supply    | 1500 mA, $199.99                               |
//! | 201 | power supply    | 500 mA                                         |
//! | 202 | power supply    | capacity unknown                               |
//! | 300 | pedal           | 70x120, 300 mA, no MIDI                        |
//! | 301 | pedal           | 70x120, 250 mA, MIDI in TRS-A                  |
//! | 302 | pedal           | no dims, no power jack, MIDI-capable, no input |
//! | 303 | pedal           | 60x110, 100 mA, MIDI in 5-pin DIN              |
//! | 400 | midi controller | MIDI out 5-pin DIN                             |
//! | 401 | midi controller | no MIDI outputs                                |
//! | 500 | utility         | Tuner                                          |
//! | 600 | plug            | 1/4" TS patch plug                             |

#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use serde_json::Value;
use shootout_api::{build_router, AppState};
use shootout_common::db::create_schema;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const PEDAL: i64 = 1;
const POWER_SUPPLY: i64 = 2;
const PEDALBOARD: i64 = 3;
const MIDI_CONTROLLER: i64 = 4;
const UTILITY: i64 = 5;
const PLUG: i64 = 6;

async fn exec(pool: &SqlitePool, sql: &str) {
    sqlx::query(sql).execute(pool).await.expect(sql);
}

#[allow(clippy::too_many_arguments)]
async fn product(
    pool: &SqlitePool,
    id: i64,
    manufacturer_id: i64,
    type_id: i64,
    model: &str,
    width_mm: Option<f64>,
    depth_mm: Option<f64>,
    msrp_cents: Option<i64>,
) {
    sqlx::query(
        "INSERT INTO products (id, manufacturer_id, product_type_id, model, width_mm, depth_mm, height_mm, msrp_cents, in_production)
         VALUES (?, ?, ?, ?, ?, ?, 55.0, ?, 1)",
    )
    .bind(id)
    .bind(manufacturer_id)
    .bind(type_id)
    .bind(model)
    .bind(width_mm)
    .bind(depth_mm)
    .bind(msrp_cents)
    .execute(pool)
    .await
    .expect("insert product");
}

#[allow(clippy::too_many_arguments)]
async fn jack(
    pool: &SqlitePool,
    id: i64,
    product_id: i64,
    category: &str,
    direction: &str,
    connector_type: &str,
    voltage: Option<&str>,
    current_ma: Option<i64>,
) {
    sqlx::query(
        "INSERT INTO jacks (id, product_id, category, direction, connector_type, voltage, current_ma, polarity)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(product_id)
    .bind(category)
    .bind(direction)
    .bind(connector_type)
    .bind(voltage)
    .bind(current_ma)
    .bind(voltage.map(|_| "Center Negative"))
    .execute(pool)
    .await
    .expect("insert jack");
}

/// In-memory catalog with the fixture set described above
pub async fn seeded_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");
    create_schema(&pool).await.expect("schema");

    exec(
        &pool,
        "INSERT INTO manufacturers (id, name, country, status) VALUES
            (1, 'Boss', 'Japan', 'Active'),
            (2, 'Strymon', 'USA', 'Active'),
            (3, 'Disaster Area Designs', 'USA', 'Active'),
            (4, 'Voodoo Lab', 'USA', 'Active'),
            (5, 'Pedaltrain', 'USA', 'Active'),
            (6, 'Empty Brand', NULL, 'Defunct')",
    )
    .await;

    // Pedalboards
    product(&pool, 100, 5, PEDALBOARD, "Classic Jr", Some(610.0), Some(318.0), Some(14999)).await;
    product(&pool, 101, 5, PEDALBOARD, "Mystery Board", None, None, None).await;
    product(&pool, 102, 5, PEDALBOARD, "Nano", Some(400.0), Some(200.0), None).await;
    exec(&pool, "INSERT INTO pedalboard_details (product_id, usable_width_mm, usable_depth_mm) VALUES (100, 600.0, 300.0)").await;
    exec(&pool, "INSERT INTO pedalboard_details (product_id) VALUES (101)").await;
    exec(&pool, "INSERT INTO pedalboard_details (product_id) VALUES (102)").await;

    // Power supplies
    product(&pool, 200, 4, POWER_SUPPLY, "Pedal Power 2 Plus", Some(140.0), Some(80.0), Some(19999)).await;
    product(&pool, 201, 4, POWER_SUPPLY, "Pedal Power Mini", Some(90.0), Some(60.0), None).await;
    product(&pool, 202, 4, POWER_SUPPLY, "Pedal Power Unknown", None, None, None).await;
    exec(&pool, "INSERT INTO power_supply_details (product_id, total_current_ma, total_output_count) VALUES (200, 1500, 8)").await;
    exec(&pool, "INSERT INTO power_supply_details (product_id, total_current_ma) VALUES (201, 500)").await;
    exec(&pool, "INSERT INTO power_supply_details (product_id) VALUES (202)").await;
    jack(&pool, 2001, 200, "Power Output", "Output", "2.1mm barrel", Some("9V DC"), Some(250)).await;

    // Pedals
    product(&pool, 300, 1, PEDAL, "DS-1", Some(70.0), Some(120.0), Some(5999)).await;
    product(&pool, 301, 2, PEDAL, "Timeline", Some(70.0), Some(120.0), Some(44900)).await;
    product(&pool, 302, 2, PEDAL, "Iridium", None, None, None).await;
    product(&pool, 303, 2, PEDAL, "BigSky", Some(60.0), Some(110.0), None).await;
    exec(&pool, "INSERT INTO pedal_details (product_id, effect_type, midi_capable) VALUES (300, 'Distortion', 0)").await;
    exec(&pool, "INSERT INTO pedal_details (product_id, effect_type, midi_capable, midi_receive_capabilities, preset_count) VALUES (301, 'Delay', 1, 'PC, CC', 200)").await;
    exec(&pool, "INSERT INTO pedal_details (product_id, effect_type, midi_capable) VALUES (302, 'Amp Sim', 1)").await;
    exec(&pool, "INSERT INTO pedal_details (product_id, effect_type, midi_capable, midi_receive_capabilities) VALUES (303, 'Reverb', 1, 'PC, CC, Clock')").await;

    jack(&pool, 3001, 300, "Audio", "Input", "1/4\" TS", None, None).await;
    jack(&pool, 3002, 300, "Power Input", "Input", "2.1mm barrel", Some("9V DC"), Some(300)).await;
    jack(&pool, 3011, 301, "Power Input", "Input", "2.1mm barrel", Some("9V DC"), Some(250)).await;
    jack(&pool, 3012, 301, "MIDI In", "Input", "TRS-A", None, None).await;
    // Second power jack must be ignored (first match only)
    jack(&pool, 3013, 301, "Power Input", "Input", "2.1mm barrel", Some("12V DC"), Some(999)).await;
    jack(&pool, 3021, 302, "USB", "Input", "USB-C", None, None).await;
    jack(&pool, 3031, 303, "MIDI In", "Input", "5-pin DIN", None, None).await;
    jack(&pool, 3032, 303, "MIDI Out/Thru", "Output", "5-pin DIN", None, None).await;
    jack(&pool, 3033, 303, "Power Input", "Input", "2.1mm barrel", Some("9V DC"), Some(100)).await;

    // MIDI controllers
    product(&pool, 400, 3, MIDI_CONTROLLER, "DMC.3XL", Some(230.0), Some(110.0), Some(29900)).await;
    product(&pool, 401, 3, MIDI_CONTROLLER, "Silent Switch", Some(100.0), Some(60.0), None).await;
    exec(&pool, "INSERT INTO midi_controller_details (product_id, footswitch_count, total_preset_slots) VALUES (400, 3, 768)").await;
    exec(&pool, "INSERT INTO midi_controller_details (product_id, footswitch_count) VALUES (401, 1)").await;
    jack(&pool, 4001, 400, "MIDI Out", "Output", "5-pin DIN", None, None).await;
    jack(&pool, 4002, 400, "MIDI In", "Input", "5-pin DIN", None, None).await;
    jack(&pool, 4003, 400, "Power Input", "Input", "2.1mm barrel", Some("9V DC"), Some(200)).await;
    jack(&pool, 4011, 401, "Expression", "Input", "1/4\" TRS", None, None).await;

    // Utility and plug
    product(&pool, 500, 1, UTILITY, "TU-3", Some(73.0), Some(129.0), Some(9999)).await;
    exec(&pool, "INSERT INTO utility_details (product_id, utility_type, is_active) VALUES (500, 'Tuner', 1)").await;
    product(&pool, 600, 2, PLUG, "Patch Plug", None, None, None).await;
    exec(&pool, "INSERT INTO plug_details (product_id, plug_type, connector_type, is_right_angle) VALUES (600, 'Patch', '1/4\" TS', 1)").await;

    pool
}

/// Router over the seeded catalog
pub async fn seeded_app() -> Router {
    build_router(AppState::new(seeded_pool().await))
}

/// GET request with an empty body
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Extract JSON body from response
pub async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}
