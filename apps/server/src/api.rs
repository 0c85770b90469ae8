use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    config::Config,
    error::ApiResult,
    main_lib::AppState,
    models::{Account, GenerationStatus, GenerationToggle, GeneratorStopped, Ship, ShipStatistics},
    ws,
};

const DEFAULT_SHIPS_LIMIT: i64 = 50;
const MAX_SHIPS_LIMIT: i64 = 500;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "Health")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/generation", responses((status = 200, body = GenerationStatus)))]
async fn generation_status(State(state): State<Arc<AppState>>) -> Json<GenerationStatus> {
    Json(GenerationStatus {
        enabled: state.generator.auto_generation_enabled(),
    })
}

#[utoipa::path(post, path = "/api/v1/generation/toggle", request_body = GenerationToggle, responses((status = 200, body = GenerationStatus)))]
async fn toggle_generation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerationToggle>,
) -> Json<GenerationStatus> {
    let enabled = state.generator.set_auto_generation(payload.enabled).await;
    Json(GenerationStatus { enabled })
}

#[utoipa::path(post, path = "/api/v1/generation/stop", responses((status = 200, body = GeneratorStopped)))]
async fn stop_generation(State(state): State<Arc<AppState>>) -> Json<GeneratorStopped> {
    state.generator.stop().await;
    Json(GeneratorStopped {
        running: state.generator.is_running().await,
    })
}

#[utoipa::path(get, path = "/api/v1/accounts", responses((status = 200, body = [Account])))]
async fn list_accounts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Account>>> {
    let accounts = state.account_service.get_all_accounts()?;
    Ok(Json(accounts.into_iter().map(Account::from).collect()))
}

#[utoipa::path(get, path = "/api/v1/accounts/flagged", responses((status = 200, body = [Account])))]
async fn list_flagged_accounts(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Account>>> {
    let accounts = state.account_service.get_flagged_accounts()?;
    Ok(Json(accounts.into_iter().map(Account::from).collect()))
}

#[derive(Deserialize)]
struct ListShipsParams {
    limit: Option<i64>,
}

#[utoipa::path(get, path = "/api/v1/ships", responses((status = 200, body = [Ship])))]
async fn list_ships(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListShipsParams>,
) -> ApiResult<Json<Vec<Ship>>> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_SHIPS_LIMIT)
        .clamp(1, MAX_SHIPS_LIMIT);
    let ships = state.ship_service.get_recent_ships(limit)?;
    Ok(Json(ships.into_iter().map(Ship::from).collect()))
}

#[utoipa::path(get, path = "/api/v1/ships/statistics", responses((status = 200, body = ShipStatistics)))]
async fn ship_statistics(State(state): State<Arc<AppState>>) -> ApiResult<Json<ShipStatistics>> {
    let stats = state.ship_service.get_statistics()?;
    Ok(Json(ShipStatistics::from(stats)))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        readyz,
        generation_status,
        toggle_generation,
        stop_generation,
        list_accounts,
        list_flagged_accounts,
        list_ships,
        ship_statistics,
    ),
    components(schemas(
        Account,
        Ship,
        ShipStatistics,
        GenerationStatus,
        GenerationToggle,
        GeneratorStopped,
    ))
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allow
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/api/v1/healthz", get(healthz))
        .route("/api/v1/readyz", get(readyz))
        .route("/api/v1/generation", get(generation_status))
        .route("/api/v1/generation/toggle", post(toggle_generation))
        .route("/api/v1/generation/stop", post(stop_generation))
        .route("/api/v1/accounts", get(list_accounts))
        .route("/api/v1/accounts/flagged", get(list_flagged_accounts))
        .route("/api/v1/ships", get(list_ships))
        .route("/api/v1/ships/statistics", get(ship_statistics))
        .route("/api/v1/openapi.json", get(openapi_json))
        .route("/ws", get(ws::websocket_handler))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors)
        .with_state(state)
}
