use axum::Router;

use crate::middleware::auth::ApiKeys;
use crate::state::AppState;

pub mod results;
pub mod roster;
pub mod standings;

pub fn api_routes(api_keys: ApiKeys) -> Router<AppState> {
    Router::new()
        .merge(standings::routes::routes())
        .merge(roster::routes::routes())
        .nest("/results", results::routes::routes(api_keys))
}
