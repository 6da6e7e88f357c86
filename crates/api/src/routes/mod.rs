pub mod health;
pub mod track;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tracks                                          list, create
/// /tracks/{id}                                     get
/// /genres                                          genre choices
/// ```
///
/// The tree is mounted both at the root and under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tracks", track::router())
        .route("/genres", get(handlers::track::genres))
}
