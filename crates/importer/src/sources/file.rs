use std::path::PathBuf;

use storage::models::FestivalSnapshot;
use tracing::info;

use crate::Result;
use crate::canonical::CanonicalSnapshot;
use crate::traits::SnapshotSource;

/// Reads a canonical snapshot file from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<CanonicalSnapshot> {
        info!("Loading canonical JSON from: {}", self.path.display());

        let json_content = tokio::fs::read_to_string(&self.path).await?;
        let canonical: CanonicalSnapshot = serde_json::from_str(&json_content)?;

        info!(
            "Loaded snapshot v{} with {} teams, {} programmes, {} results",
            canonical.format_version,
            canonical.snapshot.teams.len(),
            canonical.snapshot.programmes.len(),
            canonical.snapshot.results.len()
        );

        Ok(canonical)
    }
}

#[async_trait::async_trait]
impl SnapshotSource for FileSource {
    async fn fetch_snapshot(&self) -> Result<FestivalSnapshot> {
        Ok(self.load().await?.snapshot)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
