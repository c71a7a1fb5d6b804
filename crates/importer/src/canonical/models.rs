use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storage::models::FestivalSnapshot;

pub const FORMAT_VERSION: &str = "1.0.0";

/// A festival snapshot on disk, with a note on where it came from.
///
/// The snapshot collections sit at the top level next to
/// `format_version` and `source`, so a file can be edited by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalSnapshot {
    pub format_version: String,
    pub source: SourceMetadata,
    #[serde(flatten)]
    pub snapshot: FestivalSnapshot,
}

impl CanonicalSnapshot {
    pub fn new(source: SourceMetadata, snapshot: FestivalSnapshot) -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            source,
            snapshot,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    #[serde(rename = "type")]
    pub r#type: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub extracted_at: DateTime<Utc>,
    pub extractor: String,
}

impl SourceMetadata {
    pub fn new(r#type: SourceType, url: Option<String>) -> Self {
        Self {
            r#type,
            url,
            extracted_at: Utc::now(),
            extractor: format!("festival-import {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Legacy,
    Manual,
}
