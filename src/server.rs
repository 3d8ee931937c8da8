use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::error::GridbookError;
use crate::forecast::{self, ForecastPoint};
use crate::record::{Ledger, Record, RecordId};

#[derive(Deserialize)]
pub struct RecordInput {
    pub date: NaiveDate,
    pub demand_gwh: f64,
}

#[derive(Deserialize)]
pub struct PatchParams {
    pub demand_gwh: Option<f64>,
}

#[derive(Deserialize)]
pub struct ForecastParams {
    #[serde(default = "default_horizon")]
    pub years: i64,
}

fn default_horizon() -> i64 {
    1
}

// Status mapping lives here at the boundary; the ledger and the forecast
// engine only ever speak in GridbookError values.
impl IntoResponse for GridbookError {
    fn into_response(self) -> Response {
        let status = match &self {
            GridbookError::NotFound { .. } => StatusCode::NOT_FOUND,
            GridbookError::InvalidHorizon { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(error = %self, code = status.as_u16(), "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub fn router(ledger: Arc<Ledger>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    Router::new()
        .route("/", get(welcome))
        .route("/records", get(list_records).post(create_record))
        .route(
            "/records/:id",
            get(get_record)
                .put(replace_record)
                .patch(patch_record)
                .delete(delete_record),
        )
        .route("/forecast", get(forecast_demand))
        .layer(cors)
        .with_state(ledger)
}

/// Serve the ledger over HTTP at the given address (e.g. `"127.0.0.1:8080"`).
pub async fn serve(ledger: Arc<Ledger>, addr: &str) -> Result<(), std::io::Error> {
    let app = router(ledger);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await
}

async fn welcome() -> impl IntoResponse {
    Json(json!({
        "message": "gridbook is running",
        "records": "/records",
        "forecast": "/forecast",
    }))
}

async fn create_record(
    State(ledger): State<Arc<Ledger>>,
    Json(input): Json<RecordInput>,
) -> Result<(StatusCode, Json<Record>), GridbookError> {
    let record = ledger.insert(input.date, input.demand_gwh)?;
    info!(id = record.id(), date = %record.date(), "record created");
    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_records(
    State(ledger): State<Arc<Ledger>>,
) -> Result<Json<Vec<Record>>, GridbookError> {
    Ok(Json(ledger.all()?))
}

async fn get_record(
    State(ledger): State<Arc<Ledger>>,
    Path(id): Path<RecordId>,
) -> Result<Json<Record>, GridbookError> {
    Ok(Json(ledger.get(id)?))
}

async fn replace_record(
    State(ledger): State<Arc<Ledger>>,
    Path(id): Path<RecordId>,
    Json(input): Json<RecordInput>,
) -> Result<Json<Record>, GridbookError> {
    let record = ledger.replace(id, input.date, input.demand_gwh)?;
    info!(id, "record replaced");
    Ok(Json(record))
}

async fn patch_record(
    State(ledger): State<Arc<Ledger>>,
    Path(id): Path<RecordId>,
    Query(params): Query<PatchParams>,
) -> Result<Json<Record>, GridbookError> {
    let record = ledger.patch(id, params.demand_gwh)?;
    info!(id, changed = params.demand_gwh.is_some(), "record patched");
    Ok(Json(record))
}

async fn delete_record(
    State(ledger): State<Arc<Ledger>>,
    Path(id): Path<RecordId>,
) -> Result<StatusCode, GridbookError> {
    ledger.delete(id)?;
    info!(id, "record deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn forecast_demand(
    State(ledger): State<Arc<Ledger>>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<Vec<ForecastPoint>>, GridbookError> {
    let records = ledger.all()?;
    let points = forecast::project(&records, params.years, Local::now().year())?;
    Ok(Json(points))
}
