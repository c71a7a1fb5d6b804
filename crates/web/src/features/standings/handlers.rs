use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use storage::dto::standings::{
    ChecklistFilter, GrandMarksFilter, RankedIndividualResponse, RankedTeamResponse,
    TeamSubtotalResponse, ToppersFilter,
};

use crate::error::{WebError, WebResult};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/grand-marks",
    params(GrandMarksFilter),
    responses(
        (status = 200, description = "Teams ranked by points, zero-point teams omitted", body = Vec<RankedTeamResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Failed to fetch grand marks")
    ),
    tag = "standings"
)]
pub async fn get_grand_marks(
    State(state): State<AppState>,
    query: Result<Query<GrandMarksFilter>, QueryRejection>,
) -> WebResult<Json<Vec<RankedTeamResponse>>> {
    let Query(filter) = query?;

    let ranked = services::grand_marks(state.db.pool(), state.scoring_context(), &filter)
        .await
        .map_err(WebError::fetch("Failed to fetch grand marks"))?;

    Ok(Json(ranked.into_iter().map(RankedTeamResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/grand-marks/combined",
    responses(
        (status = 200, description = "Arts and sports subtotals merged into one ranking", body = Vec<RankedTeamResponse>),
        (status = 500, description = "Failed to fetch grand marks")
    ),
    tag = "standings"
)]
pub async fn get_combined_grand_marks(
    State(state): State<AppState>,
) -> WebResult<Json<Vec<RankedTeamResponse>>> {
    let ranked = services::combined_grand_marks(state.db.pool(), state.scoring_context())
        .await
        .map_err(WebError::fetch("Failed to fetch grand marks"))?;

    Ok(Json(ranked.into_iter().map(RankedTeamResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/admin-checklist-marks",
    params(ChecklistFilter),
    responses(
        (status = 200, description = "Subtotal per team, zero rows included", body = Vec<TeamSubtotalResponse>),
        (status = 400, description = "Missing or unknown category"),
        (status = 500, description = "Failed to fetch checklist marks")
    ),
    tag = "standings"
)]
pub async fn get_checklist_marks(
    State(state): State<AppState>,
    query: Result<Query<ChecklistFilter>, QueryRejection>,
) -> WebResult<Json<Vec<TeamSubtotalResponse>>> {
    let Query(filter) = query?;

    let rows = services::checklist_marks(state.db.pool(), state.scoring_context(), filter.category)
        .await
        .map_err(WebError::fetch("Failed to fetch checklist marks"))?;

    Ok(Json(rows.into_iter().map(TeamSubtotalResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/individual-toppers",
    params(ToppersFilter),
    responses(
        (status = 200, description = "Candidates ranked by points", body = Vec<RankedIndividualResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Failed to fetch individual toppers")
    ),
    tag = "standings"
)]
pub async fn get_individual_toppers(
    State(state): State<AppState>,
    query: Result<Query<ToppersFilter>, QueryRejection>,
) -> WebResult<Json<Vec<RankedIndividualResponse>>> {
    let Query(filter) = query?;

    filter.validate().map_err(WebError::BadRequest)?;

    let ranked = services::individual_toppers(state.db.pool(), state.scoring_context(), &filter)
        .await
        .map_err(WebError::fetch("Failed to fetch individual toppers"))?;

    Ok(Json(
        ranked.into_iter().map(RankedIndividualResponse::from).collect(),
    ))
}
