use super::models::{CanonicalSnapshot, FORMAT_VERSION};
use crate::{ImporterError, Result};
use std::collections::HashSet;
use storage::models::Position;
use storage::services::{MAX_POSITION_POINTS, is_known_grade, team_code_from_chest_number};
use tracing::warn;

pub struct CanonicalValidator;

impl CanonicalValidator {
    pub fn validate(canonical: &CanonicalSnapshot) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();
        let snapshot = &canonical.snapshot;

        if canonical.format_version != FORMAT_VERSION {
            report.errors.push(format!(
                "Unsupported format version: {}. Expected {}",
                canonical.format_version, FORMAT_VERSION
            ));
        }

        if snapshot.teams.is_empty() {
            report.errors.push("At least one team is required".to_string());
        }

        let mut team_codes = HashSet::new();
        for team in &snapshot.teams {
            if team.code.trim().is_empty() {
                report.errors.push(format!("Team '{}' has an empty code", team.name));
            }
            if team.name.trim().is_empty() {
                report
                    .errors
                    .push(format!("Team '{}' has an empty name", team.code));
            }
            if !team_codes.insert(team.code.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate team code: '{}'", team.code));
            }
        }

        let mut chest_numbers = HashSet::new();
        for candidate in &snapshot.candidates {
            if candidate.chest_number.trim().is_empty() {
                report.errors.push(format!(
                    "Candidate '{}' has an empty chest number",
                    candidate.name
                ));
            }
            if candidate.name.trim().is_empty() {
                report.errors.push(format!(
                    "Candidate '{}' has an empty name",
                    candidate.chest_number
                ));
            }
            if !chest_numbers.insert(candidate.chest_number.as_str()) {
                report.errors.push(format!(
                    "Duplicate chest number: '{}'",
                    candidate.chest_number
                ));
            }

            if !team_codes.contains(candidate.team.as_str()) {
                report.warnings.push(format!(
                    "Candidate '{}' belongs to unknown team '{}'",
                    candidate.chest_number, candidate.team
                ));
            } else {
                let inferred = team_code_from_chest_number(&candidate.chest_number, &snapshot.teams);
                if !inferred.is_empty() && inferred != candidate.team {
                    report.warnings.push(format!(
                        "Candidate '{}' is registered with team '{}' but the chest number suggests '{}'",
                        candidate.chest_number, candidate.team, inferred
                    ));
                }
            }
        }

        let mut programme_ids = HashSet::new();
        for programme in &snapshot.programmes {
            if programme.id.trim().is_empty() {
                report.errors.push(format!(
                    "Programme '{}' has an empty id",
                    programme.name
                ));
            }
            if programme.name.trim().is_empty() {
                report
                    .errors
                    .push(format!("Programme '{}' has an empty name", programme.id));
            }
            if !programme_ids.insert(programme.id.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate programme id: '{}'", programme.id));
            }
        }

        let mut result_ids = HashSet::new();
        for result in &snapshot.results {
            if result.id.trim().is_empty() {
                report.errors.push(format!(
                    "Result for programme '{}' has an empty id",
                    result.programme_id
                ));
            }
            if !result_ids.insert(result.id.as_str()) {
                report
                    .errors
                    .push(format!("Duplicate result id: '{}'", result.id));
            }

            if !programme_ids.contains(result.programme_id.as_str()) {
                report.warnings.push(format!(
                    "Result '{}' references unknown programme '{}'",
                    result.id, result.programme_id
                ));
            }

            for position in Position::ALL {
                if result.points_for(position).is_some_and(|p| p.is_sign_negative()) {
                    report.errors.push(format!(
                        "Result '{}' has negative {} points",
                        result.id, position
                    ));
                }
                if result
                    .points_for(position)
                    .is_some_and(|p| p > MAX_POSITION_POINTS)
                {
                    report.errors.push(format!(
                        "Result '{}' has {} points above {}",
                        result.id, position, MAX_POSITION_POINTS
                    ));
                }

                let winners = result.winners(position);
                let winning_teams = result.winning_teams(position);
                let has_winners = !winners.is_empty() || !winning_teams.is_empty();

                if has_winners && result.points_for(position).is_none() {
                    report.warnings.push(format!(
                        "Result '{}' has {} place winners but no {} points",
                        result.id, position, position
                    ));
                }

                let grades = winners
                    .iter()
                    .filter_map(|w| w.grade.as_deref())
                    .chain(winning_teams.iter().filter_map(|t| t.grade.as_deref()));
                for grade in grades {
                    if !grade.is_empty() && !is_known_grade(grade) {
                        report.warnings.push(format!(
                            "Result '{}' has unknown grade '{}' in {} place",
                            result.id, grade, position
                        ));
                    }
                }
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::models::{SourceMetadata, SourceType};
    use rust_decimal::Decimal;
    use storage::models::{
        Candidate, Category, FestivalResult, FestivalSnapshot, Placement, Programme,
        ResultStatus, Section, Team,
    };

    fn snapshot() -> FestivalSnapshot {
        FestivalSnapshot {
            teams: vec![Team::new("SMD", "Samad"), Team::new("INT", "Intellects")],
            candidates: vec![Candidate::new("SMD013", "Ameen", "SMD", Section::Senior)],
            programmes: vec![Programme::new("P1", "Elocution", Category::Arts)],
            results: vec![
                FestivalResult::new("R1", "P1", ResultStatus::Published)
                    .with_points(Decimal::from(5), Decimal::from(3), Decimal::from(1))
                    .with_winner(Position::First, Placement::new("SMD013", Some("A"))),
            ],
        }
    }

    fn canonical(snapshot: FestivalSnapshot) -> CanonicalSnapshot {
        CanonicalSnapshot::new(SourceMetadata::new(SourceType::Manual, None), snapshot)
    }

    #[test]
    fn test_clean_snapshot_has_no_warnings() {
        let report = CanonicalValidator::validate(&canonical(snapshot())).unwrap();
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }

    #[test]
    fn test_rejects_unsupported_version() {
        let mut canonical = canonical(snapshot());
        canonical.format_version = "0.9.0".to_string();

        let err = CanonicalValidator::validate(&canonical).unwrap_err();
        assert!(err.to_string().contains("Unsupported format version"));
    }

    #[test]
    fn test_rejects_duplicates() {
        let mut snapshot = snapshot();
        snapshot.teams.push(Team::new("SMD", "Samad again"));
        snapshot
            .candidates
            .push(Candidate::new("SMD013", "Other", "SMD", Section::Junior));
        snapshot
            .programmes
            .push(Programme::new("P1", "Essay", Category::Arts));

        let err = CanonicalValidator::validate(&canonical(snapshot)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("3 error(s)"));
        assert!(message.contains("Duplicate team code: 'SMD'"));
        assert!(message.contains("Duplicate chest number: 'SMD013'"));
        assert!(message.contains("Duplicate programme id: 'P1'"));
    }

    #[test]
    fn test_rejects_oversized_points() {
        let huge: Decimal = "79000000000000000000000000000".parse().unwrap();
        let mut snapshot = snapshot();
        snapshot.results[0].first_points = Some(huge);

        let err = CanonicalValidator::validate(&canonical(snapshot)).unwrap_err();
        assert!(err.to_string().contains("Result 'R1' has first points above 1000"));
    }

    #[test]
    fn test_rejects_empty_names() {
        let mut snapshot = snapshot();
        snapshot.teams.push(Team::new("AQS", " "));

        let err = CanonicalValidator::validate(&canonical(snapshot)).unwrap_err();
        assert!(err.to_string().contains("Team 'AQS' has an empty name"));
    }

    #[test]
    fn test_warns_about_data_quality() {
        let mut snapshot = snapshot();
        snapshot
            .candidates
            .push(Candidate::new("INT007", "Sara", "SMD", Section::Junior));
        snapshot
            .candidates
            .push(Candidate::new("XYZ1", "Nobody", "XYZ", Section::Junior));
        snapshot.results.push(
            FestivalResult::new("R2", "GONE", ResultStatus::Published)
                .with_winner(Position::Second, Placement::new("INT007", Some("a"))),
        );

        let report = CanonicalValidator::validate(&canonical(snapshot)).unwrap();
        let warnings = report.warnings.join("\n");

        assert!(warnings.contains("chest number suggests 'INT'"));
        assert!(warnings.contains("unknown team 'XYZ'"));
        assert!(warnings.contains("unknown programme 'GONE'"));
        assert!(warnings.contains("no second points"));
        assert!(warnings.contains("unknown grade 'a'"));
        assert_eq!(report.warnings.len(), 5);
    }
}
