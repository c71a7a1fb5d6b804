use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};

use crate::error::{Result, StorageError};
use crate::models::{FestivalResult, Placement, ResultStatus, TeamPlacement};

const RESULT_COLUMNS: &str = r#"
    result_id, programme_id, status,
    first_place, second_place, third_place,
    first_place_teams, second_place_teams, third_place_teams,
    first_points, second_points, third_points
"#;

#[derive(FromRow)]
struct ResultRow {
    result_id: String,
    programme_id: String,
    status: String,
    first_place: Json<Vec<Placement>>,
    second_place: Json<Vec<Placement>>,
    third_place: Json<Vec<Placement>>,
    first_place_teams: Json<Vec<TeamPlacement>>,
    second_place_teams: Json<Vec<TeamPlacement>>,
    third_place_teams: Json<Vec<TeamPlacement>>,
    first_points: Option<Decimal>,
    second_points: Option<Decimal>,
    third_points: Option<Decimal>,
}

impl TryFrom<ResultRow> for FestivalResult {
    type Error = StorageError;

    fn try_from(row: ResultRow) -> Result<Self> {
        Ok(Self {
            status: row.status.parse().map_err(StorageError::InvalidData)?,
            id: row.result_id,
            programme_id: row.programme_id,
            first_place: row.first_place.0,
            second_place: row.second_place.0,
            third_place: row.third_place.0,
            first_place_teams: row.first_place_teams.0,
            second_place_teams: row.second_place_teams.0,
            third_place_teams: row.third_place_teams.0,
            first_points: row.first_points,
            second_points: row.second_points,
            third_points: row.third_points,
        })
    }
}

/// Repository for result sheets
pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List result sheets, optionally restricted to one status
    pub async fn list(&self, status: Option<ResultStatus>) -> Result<Vec<FestivalResult>> {
        let query = format!(
            "SELECT {} FROM results WHERE ($1::TEXT IS NULL OR status = $1) ORDER BY created_at, result_id",
            RESULT_COLUMNS
        );

        let rows = sqlx::query_as::<_, ResultRow>(&query)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(FestivalResult::try_from).collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<FestivalResult> {
        let query = format!("SELECT {} FROM results WHERE result_id = $1", RESULT_COLUMNS);

        let row = sqlx::query_as::<_, ResultRow>(&query)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        FestivalResult::try_from(row)
    }

    pub async fn create(&self, result: &FestivalResult) -> Result<FestivalResult> {
        let query = format!(
            r#"
            INSERT INTO results (
                result_id, programme_id, status,
                first_place, second_place, third_place,
                first_place_teams, second_place_teams, third_place_teams,
                first_points, second_points, third_points
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            RESULT_COLUMNS
        );

        let row = sqlx::query_as::<_, ResultRow>(&query)
            .bind(&result.id)
            .bind(&result.programme_id)
            .bind(result.status.as_str())
            .bind(Json(&result.first_place))
            .bind(Json(&result.second_place))
            .bind(Json(&result.third_place))
            .bind(Json(&result.first_place_teams))
            .bind(Json(&result.second_place_teams))
            .bind(Json(&result.third_place_teams))
            .bind(result.first_points)
            .bind(result.second_points)
            .bind(result.third_points)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                let err = StorageError::from(e);
                if err.is_unique_violation() {
                    return StorageError::ConstraintViolation(
                        "Result id already exists".to_string(),
                    );
                }
                err
            })?;

        FestivalResult::try_from(row)
    }

    /// Move a sheet between draft and published
    pub async fn update_status(&self, id: &str, status: ResultStatus) -> Result<FestivalResult> {
        let query = format!(
            r#"
            UPDATE results
            SET status = $2, updated_at = CURRENT_TIMESTAMP
            WHERE result_id = $1
            RETURNING {}
            "#,
            RESULT_COLUMNS
        );

        let row = sqlx::query_as::<_, ResultRow>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        FestivalResult::try_from(row)
    }
}
