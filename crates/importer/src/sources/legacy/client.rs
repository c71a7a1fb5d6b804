use serde::de::DeserializeOwned;

use super::models::{ApiList, LegacyCandidate, LegacyProgramme, LegacyResult, LegacyTeam};
use crate::error::Result;

/// HTTP client for the legacy festival JSON API.
pub struct LegacyClient {
    base_url: String,
    client: reqwest::Client,
}

impl LegacyClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .user_agent(concat!("festival-import/", env!("CARGO_PKG_VERSION")))
                .build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_teams(&self) -> Result<Vec<LegacyTeam>> {
        self.fetch_list("/api/teams").await
    }

    pub async fn fetch_candidates(&self) -> Result<Vec<LegacyCandidate>> {
        self.fetch_list("/api/candidates").await
    }

    pub async fn fetch_programmes(&self) -> Result<Vec<LegacyProgramme>> {
        self.fetch_list("/api/programmes").await
    }

    /// Every result sheet, drafts included.
    pub async fn fetch_results(&self) -> Result<Vec<LegacyResult>> {
        self.fetch_list("/api/results").await
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let data = response.json::<ApiList<T>>().await?;

        Ok(data.into_vec())
    }
}
