use sqlx::PgPool;
use storage::{
    error::Result,
    models::{Candidate, Programme, Team},
    repository::{
        candidate::CandidateRepository, programme::ProgrammeRepository, team::TeamRepository,
    },
};

pub async fn list_teams(pool: &PgPool) -> Result<Vec<Team>> {
    let repo = TeamRepository::new(pool);
    repo.list().await
}

pub async fn get_team(pool: &PgPool, code: &str) -> Result<Team> {
    let repo = TeamRepository::new(pool);
    repo.find_by_code(code).await
}

/// List candidates, optionally scoped to one team
pub async fn list_candidates(pool: &PgPool, team: Option<&str>) -> Result<Vec<Candidate>> {
    let repo = CandidateRepository::new(pool);
    match team {
        Some(team_code) => repo.list_by_team(team_code).await,
        None => repo.list().await,
    }
}

pub async fn list_programmes(pool: &PgPool) -> Result<Vec<Programme>> {
    let repo = ProgrammeRepository::new(pool);
    repo.list().await
}
