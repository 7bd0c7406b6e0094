pub mod activity;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                 list, create
/// /projects/{id}                            get, update
/// /projects/{project_id}/activities         list, create
/// /projects/{id}/exchange-rate              update (PUT)
/// /projects/{id}/exchange-rate-history      list (GET)
/// /projects/{id}/budget-analysis            compute (GET)
///
/// /activities/{id}                          update (PUT)
/// /activities/{id}/status                   transition (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/activities", activity::router())
}
