use super::models::CanonicalSnapshot;
use crate::Result;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};
use storage::models::{Candidate, FestivalResult, Programme, Team};
use tracing::info;

/// Row counts written by one import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub teams: usize,
    pub candidates: usize,
    pub programmes: usize,
    pub results: usize,
}

pub struct CanonicalTransformer<'a> {
    pool: &'a PgPool,
}

impl<'a> CanonicalTransformer<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Upserts the whole snapshot in a single transaction.
    pub async fn import_to_database(&self, canonical: CanonicalSnapshot) -> Result<ImportSummary> {
        let snapshot = canonical.snapshot;
        let mut tx = self.pool.begin().await?;
        let mut summary = ImportSummary::default();

        for team in &snapshot.teams {
            self.upsert_team(team, &mut tx).await?;
            summary.teams += 1;
        }
        info!("Upserted {} teams", summary.teams);

        for candidate in &snapshot.candidates {
            self.upsert_candidate(candidate, &mut tx).await?;
            summary.candidates += 1;
        }
        info!("Upserted {} candidates", summary.candidates);

        for programme in &snapshot.programmes {
            self.upsert_programme(programme, &mut tx).await?;
            summary.programmes += 1;
        }
        info!("Upserted {} programmes", summary.programmes);

        for result in &snapshot.results {
            self.upsert_result(result, &mut tx).await?;
            summary.results += 1;
        }
        info!("Upserted {} results", summary.results);

        tx.commit().await?;
        Ok(summary)
    }

    async fn upsert_team(&self, team: &Team, tx: &mut Transaction<'_, Postgres>) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO teams (code, name, color, points, members)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (code)
            DO UPDATE SET
                name = EXCLUDED.name,
                color = EXCLUDED.color,
                points = EXCLUDED.points,
                members = EXCLUDED.members
            "#,
        )
        .bind(&team.code)
        .bind(&team.name)
        .bind(&team.color)
        .bind(team.points)
        .bind(team.members)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn upsert_candidate(
        &self,
        candidate: &Candidate,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO candidates (chest_number, name, team_code, section)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (chest_number)
            DO UPDATE SET
                name = EXCLUDED.name,
                team_code = EXCLUDED.team_code,
                section = EXCLUDED.section
            "#,
        )
        .bind(&candidate.chest_number)
        .bind(&candidate.name)
        .bind(&candidate.team)
        .bind(candidate.section.as_str())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn upsert_programme(
        &self,
        programme: &Programme,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO programmes (programme_id, code, name, category, subcategory, section, position_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (programme_id)
            DO UPDATE SET
                code = EXCLUDED.code,
                name = EXCLUDED.name,
                category = EXCLUDED.category,
                subcategory = EXCLUDED.subcategory,
                section = EXCLUDED.section,
                position_type = EXCLUDED.position_type
            "#,
        )
        .bind(&programme.id)
        .bind(&programme.code)
        .bind(&programme.name)
        .bind(programme.category.as_str())
        .bind(programme.subcategory.map(|s| s.as_str()))
        .bind(programme.section.as_str())
        .bind(programme.position_type.as_str())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn upsert_result(
        &self,
        result: &FestivalResult,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO results (
                result_id, programme_id, status,
                first_place, second_place, third_place,
                first_place_teams, second_place_teams, third_place_teams,
                first_points, second_points, third_points
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (result_id)
            DO UPDATE SET
                programme_id = EXCLUDED.programme_id,
                status = EXCLUDED.status,
                first_place = EXCLUDED.first_place,
                second_place = EXCLUDED.second_place,
                third_place = EXCLUDED.third_place,
                first_place_teams = EXCLUDED.first_place_teams,
                second_place_teams = EXCLUDED.second_place_teams,
                third_place_teams = EXCLUDED.third_place_teams,
                first_points = EXCLUDED.first_points,
                second_points = EXCLUDED.second_points,
                third_points = EXCLUDED.third_points,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
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
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
