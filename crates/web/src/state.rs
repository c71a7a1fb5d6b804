use std::sync::Arc;

use storage::Database;
use storage::services::{PositionPoints, ScoringContext, TeamCodeClassifier};

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub position_points: PositionPoints,
    pub classifier: Arc<TeamCodeClassifier>,
}

impl AppState {
    pub fn new(db: Database, position_points: PositionPoints) -> Self {
        Self {
            db,
            position_points,
            classifier: Arc::new(TeamCodeClassifier::default()),
        }
    }

    pub fn scoring_context(&self) -> ScoringContext<'_> {
        ScoringContext::new(self.position_points, &self.classifier)
    }
}
