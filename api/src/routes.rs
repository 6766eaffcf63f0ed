use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use shared::backfill::BackfillReport;
use shared::entity::{candles, prices};
use shared::models::{Period, Timeframe};
use shared::sources::COINDESK_SOURCE;
use shared::synthetic::{placeholder_price, SEED_SOURCE, SYNTHETIC_SOURCE};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/prices", get(get_prices))
        .route("/historical", get(get_historical))
        .route("/candles", get(get_candles))
        .route("/fetch-price", get(fetch_price))
        .route("/import-mock-data", post(import_mock_data))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Deserialize)]
struct HistoryQuery {
    period: Option<String>,
    source: Option<String>,
    limit: Option<u64>,
}

fn parse_period(token: Option<&str>) -> Result<Period, ApiError> {
    token
        .unwrap_or("day")
        .parse::<Period>()
        .map_err(ApiError::bad_request)
}

/// Spot price history inside the period window, ascending by timestamp.
async fn get_prices(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<prices::Model>>, ApiError> {
    let period = parse_period(query.period.as_deref())?;
    let rows = state
        .prices
        .window(period, query.source.as_deref(), query.limit)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(rows))
}

/// Same shape as `/prices` but defaulting to the seed dataset, which is what
/// the historical chart renders before live data accumulates.
async fn get_historical(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<prices::Model>>, ApiError> {
    let period = parse_period(query.period.as_deref())?;
    let source = query.source.as_deref().unwrap_or(SEED_SOURCE);
    let rows = state
        .prices
        .window(period, Some(source), query.limit)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(rows))
}

#[derive(Deserialize)]
struct CandleQuery {
    symbol: Option<String>,
    timeframe: Option<String>,
    limit: Option<u64>,
}

async fn get_candles(
    State(state): State<AppState>,
    Query(query): Query<CandleQuery>,
) -> Result<Json<Vec<candles::Model>>, ApiError> {
    let timeframe = query
        .timeframe
        .as_deref()
        .unwrap_or("1h")
        .parse::<Timeframe>()
        .map_err(ApiError::bad_request)?;
    let symbol = query.symbol.as_deref().unwrap_or(&state.config.symbol);
    let limit = query.limit.unwrap_or(100);
    let rows = state
        .candles
        .window(symbol, timeframe, limit)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(rows))
}

/// Fetch-and-store the live spot price. When the source is unreachable a
/// bounded placeholder keeps the endpoint available; it is stored and
/// returned tagged `synthetic`, never under a live provider tag.
async fn fetch_price(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let (price, source) = match state.coindesk.current_price().await {
        Ok(quote) => (quote.price, COINDESK_SOURCE),
        Err(err) => {
            warn!("Spot fetch failed, serving synthetic price: {}", err);
            (placeholder_price(), SYNTHETIC_SOURCE)
        }
    };
    state
        .prices
        .insert(Utc::now(), price, source)
        .await
        .map_err(ApiError::internal)?;
    Ok(Json(json!({ "success": true, "price": price, "source": source })))
}

async fn import_mock_data(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<BackfillReport>), ApiError> {
    let report = shared::backfill::run(&state.prices, &state.candles, &state.config)
        .await
        .map_err(ApiError::internal)?;
    Ok((StatusCode::OK, Json(report)))
}
