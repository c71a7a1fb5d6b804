use sqlx::{FromRow, PgPool};

use crate::error::{Result, StorageError};
use crate::models::{Programme, Subcategory};

#[derive(FromRow)]
struct ProgrammeRow {
    programme_id: String,
    code: String,
    name: String,
    category: String,
    subcategory: Option<String>,
    section: String,
    position_type: String,
}

impl TryFrom<ProgrammeRow> for Programme {
    type Error = StorageError;

    fn try_from(row: ProgrammeRow) -> Result<Self> {
        Ok(Self {
            category: row.category.parse().map_err(StorageError::InvalidData)?,
            subcategory: row
                .subcategory
                .map(|s| s.parse::<Subcategory>())
                .transpose()
                .map_err(StorageError::InvalidData)?,
            section: row.section.parse().map_err(StorageError::InvalidData)?,
            position_type: row.position_type.parse().map_err(StorageError::InvalidData)?,
            id: row.programme_id,
            code: row.code,
            name: row.name,
        })
    }
}

/// Repository for Programme database operations
pub struct ProgrammeRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProgrammeRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Programme>> {
        let rows = sqlx::query_as::<_, ProgrammeRow>(
            r#"
            SELECT programme_id, code, name, category, subcategory, section, position_type
            FROM programmes
            ORDER BY code
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Programme::try_from).collect()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Programme> {
        let row = sqlx::query_as::<_, ProgrammeRow>(
            r#"
            SELECT programme_id, code, name, category, subcategory, section, position_type
            FROM programmes
            WHERE programme_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Programme::try_from(row)
    }
}
