use crate::Result;
use storage::models::FestivalSnapshot;

/// Somewhere a complete festival snapshot can be read from.
#[async_trait::async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<FestivalSnapshot>;

    fn name(&self) -> &'static str;
}
