use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower::{BoxError, ServiceBuilder};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use parkway_core::Minutes;
use parkway_core::routing::{Route, plan};
use parkway_core::scene::{RouteScene, WaitBand, project};

use crate::error::ApiError;
use crate::state::AppState;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/map", get(map_scene))
        .route("/route", post(plan_route))
        .route("/wait-times", get(wait_times))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(REQUEST_TIMEOUT),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_middleware_error(err: BoxError) -> (StatusCode, String) {
    if err.is::<tower::timeout::error::Elapsed>() {
        (StatusCode::REQUEST_TIMEOUT, "Request timed out".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
struct RouteRequest {
    start: String,
    end: String,
}

#[derive(Debug, Serialize)]
struct RouteResponse {
    route: Route,
    scene: RouteScene,
}

async fn plan_route(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, ApiError> {
    let snapshot = state.snapshot();
    let route = plan(&state.model, &snapshot, &request.start, &request.end)?;
    let scene = project(&state.model, &snapshot, Some(&route));
    Ok(Json(RouteResponse { route, scene }))
}

async fn map_scene(State(state): State<Arc<AppState>>) -> Json<RouteScene> {
    let snapshot = state.snapshot();
    Json(project(&state.model, &snapshot, None))
}

#[derive(Debug, Serialize)]
struct WaitEntry {
    name: String,
    wait_minutes: Minutes,
    band: WaitBand,
}

async fn wait_times(State(state): State<Arc<AppState>>) -> Json<Vec<WaitEntry>> {
    let snapshot = state.snapshot();
    let entries = state
        .model
        .graph
        .attraction_names()
        .map(|name| {
            let wait_minutes = snapshot.wait_for(name);
            WaitEntry {
                name: name.to_string(),
                wait_minutes,
                band: WaitBand::from_wait(wait_minutes),
            }
        })
        .collect();
    Json(entries)
}
