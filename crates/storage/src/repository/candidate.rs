use sqlx::{FromRow, PgPool};

use crate::error::{Result, StorageError};
use crate::models::Candidate;

#[derive(FromRow)]
struct CandidateRow {
    chest_number: String,
    name: String,
    team_code: String,
    section: String,
}

impl TryFrom<CandidateRow> for Candidate {
    type Error = StorageError;

    fn try_from(row: CandidateRow) -> Result<Self> {
        Ok(Self {
            section: row.section.parse().map_err(StorageError::InvalidData)?,
            chest_number: row.chest_number,
            name: row.name,
            team: row.team_code,
        })
    }
}

/// Repository for Candidate database operations
pub struct CandidateRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CandidateRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Candidate>> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT chest_number, name, team_code, section
            FROM candidates
            ORDER BY chest_number
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Candidate::try_from).collect()
    }

    pub async fn list_by_team(&self, team_code: &str) -> Result<Vec<Candidate>> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT chest_number, name, team_code, section
            FROM candidates
            WHERE team_code = $1
            ORDER BY chest_number
            "#,
        )
        .bind(team_code)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Candidate::try_from).collect()
    }
}
