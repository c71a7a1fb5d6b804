//! Standings computation shared by the HTTP API and the import CLI.
//!
//! Everything here is pure: the same snapshot always yields the same
//! standings, and nothing in this module touches the database.

pub mod aggregation;
pub mod grade_points;
pub mod ranking;
pub mod team_classifier;

pub use aggregation::{
    Aggregation, DataQualityWarning, DroppedEntries, IndividualTotals, MAX_POSITION_POINTS,
    PlacementCounts, PositionPoints, ProgrammeFilter, ScoringContext, TeamTotals, aggregate,
};
pub use grade_points::{grade_points, is_known_grade};
pub use ranking::{
    CategoryFilter, RankedIndividual, RankedTeam, SubtotalCategory, TeamSubtotal, compose,
    compose_individuals, merge_subtotals, subtotals,
};
pub use team_classifier::{ChestNumberMatcher, TeamCodeClassifier, team_code_from_chest_number};
