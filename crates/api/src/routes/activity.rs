//! Route definitions for the `/activities` resource.
//!
//! Creation and listing are project-scoped and live under
//! `/projects/{project_id}/activities`; updates and status transitions
//! address the activity directly.

use axum::routing::put;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// PUT /{id}         -> update
/// PUT /{id}/status  -> set_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(activity::update))
        .route("/{id}/status", put(activity::set_status))
}
