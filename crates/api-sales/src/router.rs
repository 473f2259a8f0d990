use crate::handlers::{get_relational, get_sales, get_spreadsheet, home};
use crate::state::AppState;
use axum::routing::get;
use axum::Router;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/api/xlsx", get(get_spreadsheet))
        .route("/api/sql", get(get_relational))
        .route("/api/sales", get(get_sales))
}
