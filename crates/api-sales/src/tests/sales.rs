#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::error::ErrorResponse;
use crate::models::HomeResponse;
use crate::tests::common::get_json;
use crate::tests::server::run_test_server;
use core_table::{Table, Value};
use http::StatusCode;

#[tokio::test]
async fn test_home_lists_endpoints() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, server.addr, "/").await;
    assert_eq!(status, StatusCode::OK);
    let home: HomeResponse = serde_json::from_value(body).unwrap();
    assert!(home.endpoints.iter().any(|e| e == "/api/xlsx"));
}

#[tokio::test]
async fn test_spreadsheet_source_returns_whole_table() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, server.addr, "/api/xlsx").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    // Column names come through verbatim, embedded spaces included.
    assert_eq!(rows[0]["Product line"], "Health and beauty");
    assert_eq!(rows[0]["City"], "Yangon");
}

#[tokio::test]
async fn test_relational_source_returns_whole_table() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, server.addr, "/api/sql").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["product"], "Health and beauty");
}

#[tokio::test]
async fn test_city_filter_preserves_source_order() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, server.addr, "/api/sales?city=Yangon").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Invoice ID"], "750-67-8428");
    assert_eq!(rows[1]["Invoice ID"], "631-41-3108");
}

#[tokio::test]
async fn test_combined_filters_and_together() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) =
        get_json(&client, server.addr, "/api/sales?city=Yangon&gender=Male").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["Product line"], "Home and lifestyle");
}

#[tokio::test]
async fn test_no_matches_is_empty_array_not_error() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, server.addr, "/api/sales?city=Naypyidaw").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_limit_beyond_count_returns_everything() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) =
        get_json(&client, server.addr, "/api/sales?city=Yangon&limit=5&offset=0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_offset_beyond_count_is_empty() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, server.addr, "/api/sales?offset=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_non_numeric_limit_is_bad_request() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, server.addr, "/api/sales?limit=five").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(body).unwrap();
    assert_eq!(error.status_code, 400);
    assert!(error.message.contains("limit"), "{}", error.message);
}

#[tokio::test]
async fn test_unrecognized_source_falls_back_to_relational() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, server.addr, "/api/sales?source=parquet").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].as_object().unwrap().contains_key("revenue"));
}

#[tokio::test]
async fn test_wire_round_trip_preserves_values() {
    let server = run_test_server().await;
    let client = reqwest::Client::new();
    let (status, body) = get_json(&client, server.addr, "/api/xlsx").await;
    assert_eq!(status, StatusCode::OK);

    let table: Table = serde_json::from_value(body.clone()).unwrap();
    assert_eq!(table.rows[0]["Sales"], Value::Float(548.97));
    assert!(matches!(table.rows[0]["Date"], Value::Date(_)));
    // Re-serializing the parsed table reproduces the wire payload.
    assert_eq!(serde_json::to_value(&table).unwrap(), body);
}
