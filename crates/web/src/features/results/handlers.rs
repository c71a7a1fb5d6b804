use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::result::{CreateResultRequest, ResultListFilter, UpdateResultStatusRequest},
    models::{FestivalResult, ResultStatus},
};
use validator::Validate;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/results",
    params(ResultListFilter),
    responses(
        (status = 200, description = "Raw result sheets", body = Vec<FestivalResult>)
    ),
    tag = "results"
)]
pub async fn list_results(
    State(state): State<AppState>,
    query: Result<Query<ResultListFilter>, QueryRejection>,
) -> WebResult<Json<Vec<FestivalResult>>> {
    let Query(filter) = query?;

    let results = services::list_results(state.db.pool(), filter.status)
        .await
        .map_err(WebError::fetch("Failed to fetch results"))?;

    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/api/results/status",
    params(ResultListFilter),
    responses(
        (status = 200, description = "Result sheets with the given status, published by default", body = Vec<FestivalResult>)
    ),
    tag = "results"
)]
pub async fn list_results_by_status(
    State(state): State<AppState>,
    query: Result<Query<ResultListFilter>, QueryRejection>,
) -> WebResult<Json<Vec<FestivalResult>>> {
    let Query(filter) = query?;

    let status = filter.status.unwrap_or(ResultStatus::Published);

    let results = services::list_results(state.db.pool(), Some(status))
        .await
        .map_err(WebError::fetch("Failed to fetch results"))?;

    Ok(Json(results))
}

#[utoipa::path(
    get,
    path = "/api/results/{id}",
    params(
        ("id" = String, Path, description = "Result id")
    ),
    responses(
        (status = 200, description = "Result found", body = FestivalResult),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn get_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Json<FestivalResult>> {
    let result = services::get_result(state.db.pool(), &id).await?;

    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/api/results",
    request_body = CreateResultRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Result created", body = FestivalResult),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Programme does not exist")
    ),
    tag = "results"
)]
pub async fn create_result(
    State(state): State<AppState>,
    Json(req): Json<CreateResultRequest>,
) -> WebResult<Response> {
    req.validate()?;

    req.validate_sheet()
        .map_err(|e| WebError::BadRequest(e.to_string()))?;

    let result = services::create_result(state.db.pool(), req).await?;

    Ok((StatusCode::CREATED, Json(result)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/results/{id}/status",
    params(
        ("id" = String, Path, description = "Result id")
    ),
    request_body = UpdateResultStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Status changed", body = FestivalResult),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Result not found")
    ),
    tag = "results"
)]
pub async fn update_result_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateResultStatusRequest>,
) -> WebResult<Json<FestivalResult>> {
    let updated = services::update_status(state.db.pool(), &id, req.status).await?;

    Ok(Json(updated))
}
