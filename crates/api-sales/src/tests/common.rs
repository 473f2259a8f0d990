#![allow(clippy::unwrap_used, clippy::expect_used)]

use http::StatusCode;
use std::net::SocketAddr;

pub async fn get_json(
    client: &reqwest::Client,
    addr: SocketAddr,
    path_and_query: &str,
) -> (StatusCode, serde_json::Value) {
    let url = format!("http://{addr}{path_and_query}");
    let res = client.get(&url).send().await.unwrap();
    let status = res.status();
    let body = res.json::<serde_json::Value>().await.unwrap();
    (status, body)
}
