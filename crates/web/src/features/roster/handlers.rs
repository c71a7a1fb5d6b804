use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use storage::models::{Candidate, Programme, Team};
use utoipa::IntoParams;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CandidateFilter {
    /// Team code to scope the roster to
    pub team: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "All teams", body = Vec<Team>)
    ),
    tag = "roster"
)]
pub async fn list_teams(State(state): State<AppState>) -> WebResult<Json<Vec<Team>>> {
    let teams = services::list_teams(state.db.pool())
        .await
        .map_err(WebError::fetch("Failed to fetch teams"))?;

    Ok(Json(teams))
}

#[utoipa::path(
    get,
    path = "/api/teams/{code}",
    params(
        ("code" = String, Path, description = "Team code")
    ),
    responses(
        (status = 200, description = "Team found", body = Team),
        (status = 404, description = "Team not found")
    ),
    tag = "roster"
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> WebResult<Json<Team>> {
    let team = services::get_team(state.db.pool(), &code).await?;

    Ok(Json(team))
}

#[utoipa::path(
    get,
    path = "/api/candidates",
    params(CandidateFilter),
    responses(
        (status = 200, description = "Registered candidates", body = Vec<Candidate>)
    ),
    tag = "roster"
)]
pub async fn list_candidates(
    State(state): State<AppState>,
    query: Result<Query<CandidateFilter>, QueryRejection>,
) -> WebResult<Json<Vec<Candidate>>> {
    let Query(filter) = query?;

    let candidates = services::list_candidates(state.db.pool(), filter.team.as_deref())
        .await
        .map_err(WebError::fetch("Failed to fetch candidates"))?;

    Ok(Json(candidates))
}

#[utoipa::path(
    get,
    path = "/api/programmes",
    responses(
        (status = 200, description = "All programmes", body = Vec<Programme>)
    ),
    tag = "roster"
)]
pub async fn list_programmes(State(state): State<AppState>) -> WebResult<Json<Vec<Programme>>> {
    let programmes = services::list_programmes(state.db.pool())
        .await
        .map_err(WebError::fetch("Failed to fetch programmes"))?;

    Ok(Json(programmes))
}
