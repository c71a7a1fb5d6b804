use sqlx::PgPool;
use storage::{
    dto::result::CreateResultRequest,
    error::{Result, StorageError},
    models::{FestivalResult, ResultStatus},
    repository::{festival_result::ResultRepository, programme::ProgrammeRepository},
};
use uuid::Uuid;

/// List result sheets, optionally by status
pub async fn list_results(pool: &PgPool, status: Option<ResultStatus>) -> Result<Vec<FestivalResult>> {
    let repo = ResultRepository::new(pool);
    repo.list(status).await
}

pub async fn get_result(pool: &PgPool, id: &str) -> Result<FestivalResult> {
    let repo = ResultRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a result sheet for an existing programme
pub async fn create_result(pool: &PgPool, request: CreateResultRequest) -> Result<FestivalResult> {
    ProgrammeRepository::new(pool)
        .find_by_id(&request.programme_id)
        .await
        .map_err(|e| match e {
            StorageError::NotFound => {
                StorageError::ConstraintViolation("Programme does not exist".to_string())
            }
            other => other,
        })?;

    let result = request.into_result(Uuid::new_v4().to_string());

    let repo = ResultRepository::new(pool);
    repo.create(&result).await
}

/// Publish or withdraw a result sheet
pub async fn update_status(pool: &PgPool, id: &str, status: ResultStatus) -> Result<FestivalResult> {
    let repo = ResultRepository::new(pool);
    let updated = repo.update_status(id, status).await?;

    tracing::info!("Result {} is now {}", updated.id, updated.status.as_str());

    Ok(updated)
}
