mod client;
mod models;

pub use client::LegacyClient;
pub use models::*;

use crate::{Result, traits::SnapshotSource};
use storage::models::{Candidate, FestivalResult, FestivalSnapshot, Programme, Team};
use tracing::info;

/// Pulls the four collections from a running legacy deployment.
pub struct LegacySource {
    client: LegacyClient,
}

impl LegacySource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: LegacyClient::new(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }
}

#[async_trait::async_trait]
impl SnapshotSource for LegacySource {
    async fn fetch_snapshot(&self) -> Result<FestivalSnapshot> {
        info!("Fetching festival data from {}", self.client.base_url());

        let (teams, candidates, programmes, results) = tokio::try_join!(
            self.client.fetch_teams(),
            self.client.fetch_candidates(),
            self.client.fetch_programmes(),
            self.client.fetch_results(),
        )?;

        info!(
            "Fetched {} teams, {} candidates, {} programmes, {} results",
            teams.len(),
            candidates.len(),
            programmes.len(),
            results.len()
        );

        Ok(FestivalSnapshot {
            teams: teams.into_iter().map(Team::from).collect(),
            candidates: candidates
                .into_iter()
                .map(Candidate::try_from)
                .collect::<Result<_>>()?,
            programmes: programmes
                .into_iter()
                .map(Programme::try_from)
                .collect::<Result<_>>()?,
            results: results
                .into_iter()
                .map(FestivalResult::try_from)
                .collect::<Result<_>>()?,
        })
    }

    fn name(&self) -> &'static str {
        "legacy"
    }
}
