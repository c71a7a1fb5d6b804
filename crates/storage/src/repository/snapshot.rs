use sqlx::PgPool;

use super::candidate::CandidateRepository;
use super::festival_result::ResultRepository;
use super::programme::ProgrammeRepository;
use super::team::TeamRepository;
use crate::error::Result;
use crate::models::{FestivalSnapshot, ResultStatus};

/// Reads everything the standings need. The four scans run concurrently;
/// only published results are fetched.
pub async fn load_snapshot(pool: &PgPool) -> Result<FestivalSnapshot> {
    let teams = TeamRepository::new(pool);
    let candidates = CandidateRepository::new(pool);
    let programmes = ProgrammeRepository::new(pool);
    let results = ResultRepository::new(pool);

    let (teams, candidates, programmes, results) = tokio::try_join!(
        teams.list(),
        candidates.list(),
        programmes.list(),
        results.list(Some(ResultStatus::Published)),
    )?;

    Ok(FestivalSnapshot {
        teams,
        candidates,
        programmes,
        results,
    })
}
