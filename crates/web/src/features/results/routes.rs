use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{
    create_result, get_result, list_results, list_results_by_status, update_result_status,
};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_result))
        .route("/:id/status", put(update_result_status))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_results))
        .route("/status", get(list_results_by_status))
        .route("/:id", get(get_result))
        .merge(protected)
}
