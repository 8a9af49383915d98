//! Integration tests for shootout-api HTTP endpoints

mod helpers;

use axum::http::StatusCode;
use helpers::{extract_json, get, seeded_app};
use tower::util::ServiceExt; // for `oneshot` method

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let app = seeded_app().await;
    let response = app.oneshot(get(uri)).await.unwrap();
    let status = response.status();
    (status, extract_json(response.into_body()).await)
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "shootout-api");
    assert!(body["version"].is_string());
    assert!(body["uptimeSeconds"].is_u64());
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_manufacturers_with_counts_and_search() {
    let (status, body) = get_json("/api/manufacturers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(body[1]["name"], "Strymon");
    // Timeline, Iridium, BigSky, Patch Plug
    assert_eq!(body[1]["productCount"], 4);

    let (_, body) = get_json("/api/manufacturers?search=VOODOO").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["productCount"], 3);

    // Blank search is the same as no search
    let (_, body) = get_json("/api/manufacturers?search=").await;
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_manufacturer_get_and_missing() {
    let (status, body) = get_json("/api/manufacturers/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Boss");
    assert_eq!(body["country"], "Japan");

    let (status, body) = get_json("/api/manufacturers/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_manufacturer_products_empty_is_not_found() {
    let (status, body) = get_json("/api/manufacturers/1/products").await;
    assert_eq!(status, StatusCode::OK);
    let models: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["model"].as_str().unwrap())
        .collect();
    assert_eq!(models, vec!["DS-1", "TU-3"]);

    let (status, _) = get_json("/api/manufacturers/6/products").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_products_filter_by_type() {
    let (_, all) = get_json("/api/products").await;
    assert_eq!(all.as_array().unwrap().len(), 14);

    let (status, boards) = get_json("/api/products?typeId=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(boards.as_array().unwrap().len(), 3);
    assert_eq!(boards[0]["productType"], "pedalboard");
    assert_eq!(boards[0]["msrpDisplay"], "$149.99");

    let (status, body) = get_json("/api/products?typeId=pedal").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");

    // Product types are a fixed set; other ids match nothing
    let (status, body) = get_json("/api/products?typeId=9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_product_detail_and_jacks() {
    let (status, body) = get_json("/api/products/301").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "Timeline");
    assert_eq!(body["productType"], "pedal");
    let jack_ids: Vec<i64> = body["jacks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_i64().unwrap())
        .collect();
    assert_eq!(jack_ids, vec![3011, 3012, 3013]);

    let (status, jacks) = get_json("/api/products/303/jacks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(jacks.as_array().unwrap().len(), 3);
    assert_eq!(jacks[0]["connectorType"], "5-pin DIN");

    // Unknown product has no jacks rather than a 404
    let (status, jacks) = get_json("/api/products/9999/jacks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(jacks, serde_json::json!([]));

    let (status, _) = get_json("/api/products/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_types() {
    let (status, body) = get_json("/api/product-types").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
    assert_eq!(body[3]["id"], 4);
    assert_eq!(body[3]["typeName"], "midi_controller");
}

#[tokio::test]
async fn test_pedal_views_nest_details() {
    let (status, body) = get_json("/api/pedals/301").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "Timeline");
    assert_eq!(body["manufacturerName"], "Strymon");
    assert_eq!(body["msrpDisplay"], "$449.00");
    assert_eq!(body["pedalDetails"]["effectType"], "Delay");
    assert_eq!(body["pedalDetails"]["midiCapable"], true);
    assert_eq!(body["jacks"].as_array().unwrap().len(), 3);

    let (_, delays) = get_json("/api/pedals?effectType=Delay").await;
    assert_eq!(delays.as_array().unwrap().len(), 1);

    let (_, all) = get_json("/api/pedals").await;
    assert_eq!(all.as_array().unwrap().len(), 4);

    // A board is not a pedal
    let (status, _) = get_json("/api/pedals/100").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_other_views_flatten_details() {
    let (status, supply) = get_json("/api/power-supplies/200").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(supply["totalCurrentMa"], 1500);
    assert_eq!(supply["totalOutputCount"], 8);

    let (_, board) = get_json("/api/pedalboards/100").await;
    assert_eq!(board["usableWidthMm"], 600.0);

    let (_, controller) = get_json("/api/midi-controllers/400").await;
    assert_eq!(controller["totalPresetSlots"], 768);

    let (_, tuners) = get_json("/api/utilities?utilityType=Tuner").await;
    assert_eq!(tuners[0]["utilityType"], "Tuner");
    let (_, none) = get_json("/api/utilities?utilityType=DI%20Box").await;
    assert_eq!(none, serde_json::json!([]));

    let (status, plug) = get_json("/api/plugs/600").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plug["plugType"], "Patch");
    assert_eq!(plug["isRightAngle"], true);

    for uri in [
        "/api/power-supplies",
        "/api/pedalboards",
        "/api/midi-controllers",
        "/api/utilities",
        "/api/plugs",
    ] {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(body.is_array(), "{}", uri);
    }

    for uri in [
        "/api/power-supplies/300",
        "/api/pedalboards/300",
        "/api/midi-controllers/300",
        "/api/utilities/300",
        "/api/plugs/300",
    ] {
        let (status, _) = get_json(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
    }
}

// =============================================================================
// Planners
// =============================================================================

#[tokio::test]
async fn test_fit_check_endpoint() {
    let (status, body) =
        get_json("/api/board-planner/fit-check?boardId=100&pedalIds=300,%20301,404").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fitsByArea"], true);
    assert_eq!(body["boardAreaMm2"], 180000.0);
    assert_eq!(body["pedals"].as_array().unwrap().len(), 2);
    assert_eq!(body["unresolvedPedalIds"], serde_json::json!([404]));
    assert_eq!(body["pedals"][0]["widthMm"], 70.0);
}

#[tokio::test]
async fn test_fit_check_unknown_board_is_404() {
    let (status, body) = get_json("/api/board-planner/fit-check?boardId=1&pedalIds=300").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_planner_bad_parameters_are_400() {
    for uri in [
        "/api/board-planner/fit-check?boardId=100&pedalIds=1,two",
        "/api/board-planner/fit-check?pedalIds=300",
        "/api/midi-planner/compatibility?controllerId=abc&pedalIds=301",
        "/api/power-budget/calculate?supplyId=200",
        "/api/power-budget/supplies-for-pedals",
    ] {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_eq!(body["error"]["code"], "BAD_REQUEST", "{}", uri);
    }
}

#[tokio::test]
async fn test_empty_pedal_list_is_accepted() {
    let (status, body) = get_json("/api/power-budget/calculate?supplyId=200&pedalIds=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalDrawMa"], 0);
    assert_eq!(body["withinBudget"], true);
}

#[tokio::test]
async fn test_components_endpoint() {
    let (status, body) = get_json("/api/board-planner/components").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pedalboards"].as_array().unwrap().len(), 3);
    assert_eq!(body["powerSupplies"].as_array().unwrap().len(), 3);
    assert_eq!(body["pedals"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_midi_endpoints() {
    let (status, devices) = get_json("/api/midi-planner/devices").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(devices[0]["productType"], "midi_controller");
    assert_eq!(devices[0]["presetCount"], 768);
    assert!(devices[0]["midiJacks"].is_array());

    let (status, body) =
        get_json("/api/midi-planner/compatibility?controllerId=400&pedalIds=301,303,999").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["controllerModel"], "DMC.3XL");
    assert_eq!(body["pedals"][0]["connectionType"], "Adapter needed");
    assert_eq!(body["pedals"][1]["connectionType"], "Direct (5-pin DIN)");
    assert_eq!(body["pedals"][1]["notes"], "");
    assert_eq!(
        body["summary"],
        "2 of 3 pedals are MIDI-compatible with DMC.3XL."
    );

    let (status, _) =
        get_json("/api/midi-planner/compatibility?controllerId=300&pedalIds=301").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_power_budget_endpoints() {
    let (status, body) =
        get_json("/api/power-budget/calculate?supplyId=200&pedalIds=300,301,302").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalDrawMa"], 550);
    assert_eq!(body["remainingMa"], 950);
    assert_eq!(body["withinBudget"], true);
    assert_eq!(body["pedals"][0]["polarity"], "Center Negative");

    let (status, supplies) =
        get_json("/api/power-budget/supplies-for-pedals?pedalIds=300,301,302").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(supplies.as_array().unwrap().len(), 1);
    assert_eq!(supplies[0]["headroomMa"], 950);
    assert_eq!(supplies[0]["msrpDisplay"], "$199.99");

    let (status, _) = get_json("/api/power-budget/calculate?supplyId=9&pedalIds=300").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
