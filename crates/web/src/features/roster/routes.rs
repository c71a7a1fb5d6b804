use axum::{Router, routing::get};

use super::handlers::{get_team, list_candidates, list_programmes, list_teams};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/teams", get(list_teams))
        .route("/teams/:code", get(get_team))
        .route("/candidates", get(list_candidates))
        .route("/programmes", get(list_programmes))
}
