use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Senior,
    Junior,
    SubJunior,
    General,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Senior => "senior",
            Self::Junior => "junior",
            Self::SubJunior => "sub-junior",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "senior" => Ok(Self::Senior),
            "junior" => Ok(Self::Junior),
            "sub-junior" | "subjunior" | "sub_junior" => Ok(Self::SubJunior),
            "general" => Ok(Self::General),
            other => Err(format!("unknown section '{}'", other)),
        }
    }
}

/// A registered participant. The chest number usually encodes the team,
/// but `team` is authoritative when both are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub chest_number: String,
    pub name: String,
    pub team: String,
    pub section: Section,
}

impl Candidate {
    pub fn new(
        chest_number: impl Into<String>,
        name: impl Into<String>,
        team: impl Into<String>,
        section: Section,
    ) -> Self {
        Self {
            chest_number: chest_number.into(),
            name: name.into(),
            team: team.into(),
            section,
        }
    }
}
