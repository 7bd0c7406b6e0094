//! Route definitions for the `/projects` resource.
//!
//! Also nests activities, the exchange-rate operations, and the budget
//! analysis under `/projects/{id}/...`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{activity, budget_analysis, exchange_rate, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
///
/// GET    /{project_id}/activities       -> list_by_project
/// POST   /{project_id}/activities       -> create
///
/// PUT    /{id}/exchange-rate            -> exchange_rate::update
/// GET    /{id}/exchange-rate-history    -> exchange_rate::list_by_project
/// GET    /{id}/budget-analysis          -> budget_analysis::get_by_project
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id).put(project::update))
        .route(
            "/{project_id}/activities",
            get(activity::list_by_project).post(activity::create),
        )
        .route("/{id}/exchange-rate", put(exchange_rate::update))
        .route(
            "/{id}/exchange-rate-history",
            get(exchange_rate::list_by_project),
        )
        .route("/{id}/budget-analysis", get(budget_analysis::get_by_project))
}
