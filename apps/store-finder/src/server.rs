//! HTTP layer: `GET /nearest-stores`.
//!
//! Parameter presence and number parsing happen here; everything else is the
//! engine's call.  Failures are always `{"error": "..."}` bodies:
//!
//! | Cause                                  | Status |
//! |----------------------------------------|--------|
//! | missing `lat` / `lon` / `radius_km`    | 400    |
//! | non-numeric parameter                  | 400    |
//! | `QueryError::InvalidArgument`          | 400    |
//! | `DataIntegrity` / `IndexMismatch`      | 500    |
//! | `DatasetTooLarge`                      | 500    |

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

use sf_core::GeoPoint;
use sf_query::{QueryError, StoreCatalog};

pub type AppState = Arc<StoreCatalog>;

const MISSING_PARAMS: &str = "Missing required query parameters: lat, lon, radius_km";

/// Raw query string; values stay text until [`parse_params`] checks them.
#[derive(Debug, Default, Deserialize)]
pub struct NearestStoresParams {
    lat:       Option<String>,
    lon:       Option<String>,
    radius_km: Option<String>,
}

pub fn router(catalog: AppState) -> Router {
    Router::new()
        .route("/nearest-stores", get(nearest_stores))
        .route("/health", get(|| async { "ok" }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

async fn nearest_stores(
    State(catalog): State<AppState>,
    Query(params): Query<NearestStoresParams>,
) -> Response {
    let (at, radius_km) = match parse_params(&params) {
        Ok(v) => v,
        Err(msg) => {
            debug!(%msg, "rejected nearest-stores request");
            return error_response(StatusCode::BAD_REQUEST, msg);
        }
    };

    match catalog.query(at, radius_km) {
        Ok(outcome) => {
            debug!(%at, radius_km, found = outcome.total_matches(), "nearest-stores");
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                error!(error = %e, "nearest-stores query failed");
            } else {
                warn!(error = %e, "nearest-stores bad request");
            }
            error_response(status, e.to_string())
        }
    }
}

/// Validate presence and numeric form of the three parameters.
pub fn parse_params(p: &NearestStoresParams) -> Result<(GeoPoint, f64), String> {
    let (Some(lat), Some(lon), Some(radius)) = (&p.lat, &p.lon, &p.radius_km) else {
        return Err(MISSING_PARAMS.to_string());
    };
    let lat = parse_number("lat", lat)?;
    let lon = parse_number("lon", lon)?;
    let radius_km = parse_number("radius_km", radius)?;
    Ok((GeoPoint::new(lat, lon), radius_km))
}

fn parse_number(name: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("could not convert {name}={raw:?} to a number"))
}

pub fn status_for(e: &QueryError) -> StatusCode {
    if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
