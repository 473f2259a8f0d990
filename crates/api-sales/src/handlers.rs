use crate::error::{ErrorResponse, SalesResult};
use crate::models::{HomeResponse, SalesParams};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use core_store::SourceKind;
use core_table::Table;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(home, get_spreadsheet, get_relational, get_sales),
    components(schemas(HomeResponse, ErrorResponse)),
    tags(
        (name = "sales", description = "Sales records endpoints"),
    )
)]
pub struct ApiDoc;

#[utoipa::path(
    get,
    operation_id = "home",
    tags = ["sales"],
    path = "/",
    responses(
        (status = 200, description = "Welcome payload with example endpoints", body = HomeResponse)
    )
)]
pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: "Welcome to the Sales API!".to_string(),
        endpoints: vec![
            "/api/xlsx".to_string(),
            "/api/sql".to_string(),
            "/api/sales?source=xlsx&product=Health%20and%20beauty".to_string(),
            "/api/sales?source=sql&city=Yangon&gender=Female&payment=Cash&limit=5&offset=0"
                .to_string(),
        ],
    })
}

#[utoipa::path(
    get,
    operation_id = "getSpreadsheetData",
    tags = ["sales"],
    path = "/api/xlsx",
    responses(
        (status = 200, description = "The entire spreadsheet table as a JSON array of row objects"),
        (status = 500, description = "Backing source unavailable or unreadable", body = ErrorResponse)
    )
)]
#[tracing::instrument(level = "debug", skip(state), err)]
pub async fn get_spreadsheet(State(state): State<AppState>) -> SalesResult<Json<Table>> {
    let table = state.store.load(SourceKind::Xlsx).await?;
    Ok(Json(table))
}

#[utoipa::path(
    get,
    operation_id = "getRelationalData",
    tags = ["sales"],
    path = "/api/sql",
    responses(
        (status = 200, description = "The entire relational table as a JSON array of row objects"),
        (status = 500, description = "Backing source unavailable or unreadable", body = ErrorResponse)
    )
)]
#[tracing::instrument(level = "debug", skip(state), err)]
pub async fn get_relational(State(state): State<AppState>) -> SalesResult<Json<Table>> {
    let table = state.store.load(SourceKind::Sql).await?;
    Ok(Json(table))
}

#[utoipa::path(
    get,
    operation_id = "getSalesData",
    tags = ["sales"],
    path = "/api/sales",
    params(SalesParams),
    responses(
        (status = 200, description = "Filtered, sliced rows as a JSON array; empty matches yield []"),
        (status = 400, description = "Malformed integer limit/offset", body = ErrorResponse),
        (status = 500, description = "Backing source unavailable or unreadable", body = ErrorResponse)
    )
)]
#[tracing::instrument(level = "debug", skip(state), err)]
pub async fn get_sales(
    State(state): State<AppState>,
    Query(params): Query<SalesParams>,
) -> SalesResult<Json<Table>> {
    let spec = params.filter_spec()?;
    let source = SourceKind::from_selector(params.source.as_deref());
    let table = state.store.load(source).await?;
    Ok(Json(core_filter::apply(table, &spec)))
}
