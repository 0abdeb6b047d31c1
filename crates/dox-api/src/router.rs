//! Route definitions for the dox HTTP API.
//!
//! All routes are mounted under `/api`. Each route answers unsupported
//! methods with a JSON 405.

use axum::Router;
use axum::routing::{MethodRouter, any, get, post};

use crate::handlers;
use crate::state::AppState;

/// Build the API router and thread `state` through every route.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(drive_routes())
        .merge(folder_routes())
        .merge(document_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Service liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", json_405(get(handlers::health::health)))
}

/// Single-level listing
fn drive_routes() -> Router<AppState> {
    Router::new().route("/drive", json_405(get(handlers::drive::list_drive)))
}

/// Folder creation
fn folder_routes() -> Router<AppState> {
    Router::new().route(
        "/folders",
        json_405(post(handlers::folder::create_folder)),
    )
}

/// Document create/read/update
fn document_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/documents",
            json_405(post(handlers::document::create_document)),
        )
        .route("/documents/", any(handlers::document::missing_id))
        .route(
            "/documents/{id}",
            json_405(
                get(handlers::document::get_document).put(handlers::document::update_document),
            ),
        )
}

fn json_405(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(handlers::method_not_allowed)
}
