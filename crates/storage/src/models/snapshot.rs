use serde::{Deserialize, Serialize};

use super::{Candidate, FestivalResult, Programme, Team};

/// Everything the standings need, read once per request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalSnapshot {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub programmes: Vec<Programme>,
    #[serde(default)]
    pub results: Vec<FestivalResult>,
}

impl FestivalSnapshot {
    pub fn published_results(&self) -> impl Iterator<Item = &FestivalResult> {
        self.results.iter().filter(|result| result.is_published())
    }
}
