use rust_decimal::Decimal;
use serde::Deserialize;
use storage::models::{
    Candidate, Category, FestivalResult, Placement, PositionType, Programme, ResultStatus,
    Section, Subcategory, Team, TeamPlacement,
};

use crate::{ImporterError, Result};

/// The legacy API answers either with a bare array or with
/// `{ "success": true, "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiList<T> {
    Envelope { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ApiList<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Envelope { data } => data,
            Self::Bare(items) => items,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LegacyTeam {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub points: Option<Decimal>,
    #[serde(default)]
    pub members: Option<i32>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCandidate {
    pub chest_number: String,
    pub name: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub section: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProgramme {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub position_type: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LegacyWinner {
    pub chest_number: String,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LegacyWinningTeam {
    pub team_code: String,
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LegacyResult {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(alias = "programId")]
    pub programme_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub first_place: Vec<LegacyWinner>,
    #[serde(default)]
    pub second_place: Vec<LegacyWinner>,
    #[serde(default)]
    pub third_place: Vec<LegacyWinner>,
    #[serde(default)]
    pub first_place_teams: Vec<LegacyWinningTeam>,
    #[serde(default)]
    pub second_place_teams: Vec<LegacyWinningTeam>,
    #[serde(default)]
    pub third_place_teams: Vec<LegacyWinningTeam>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub first_points: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub second_points: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub third_points: Option<Decimal>,
}

fn parse_section(raw: Option<&str>) -> Result<Section> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(section) => section
            .parse()
            .map_err(ImporterError::TransformationError),
        None => Ok(Section::General),
    }
}

/// Empty strings stand for "not set" in legacy documents.
fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

impl From<LegacyTeam> for Team {
    fn from(team: LegacyTeam) -> Self {
        Self {
            code: team.code,
            name: team.name,
            color: team.color.filter(|c| !c.trim().is_empty()),
            points: team.points.unwrap_or_default(),
            members: team.members.unwrap_or_default(),
        }
    }
}

impl TryFrom<LegacyCandidate> for Candidate {
    type Error = ImporterError;

    fn try_from(candidate: LegacyCandidate) -> Result<Self> {
        Ok(Self {
            section: parse_section(candidate.section.as_deref())?,
            chest_number: candidate.chest_number,
            name: candidate.name,
            team: candidate.team,
        })
    }
}

impl TryFrom<LegacyProgramme> for Programme {
    type Error = ImporterError;

    fn try_from(programme: LegacyProgramme) -> Result<Self> {
        let category: Category = programme
            .category
            .parse()
            .map_err(ImporterError::TransformationError)?;

        let subcategory = match non_empty(programme.subcategory.as_deref()) {
            Some(raw) => Some(
                raw.parse::<Subcategory>()
                    .map_err(ImporterError::TransformationError)?,
            ),
            None => None,
        };

        let position_type = match non_empty(programme.position_type.as_deref()) {
            Some(raw) => raw
                .parse::<PositionType>()
                .map_err(ImporterError::TransformationError)?,
            None => PositionType::Individual,
        };

        Ok(Self {
            code: non_empty(programme.code.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| programme.id.clone()),
            section: parse_section(programme.section.as_deref())?,
            id: programme.id,
            name: programme.name,
            category,
            subcategory,
            position_type,
        })
    }
}

/// Grades pass through untouched; only the empty string means "no grade".
fn raw_grade(grade: Option<&str>) -> Option<&str> {
    grade.filter(|g| !g.is_empty())
}

fn placements(winners: Vec<LegacyWinner>) -> Vec<Placement> {
    winners
        .into_iter()
        .map(|w| Placement::new(w.chest_number, raw_grade(w.grade.as_deref())))
        .collect()
}

fn team_placements(teams: Vec<LegacyWinningTeam>) -> Vec<TeamPlacement> {
    teams
        .into_iter()
        .map(|t| TeamPlacement::new(t.team_code, raw_grade(t.grade.as_deref())))
        .collect()
}

impl TryFrom<LegacyResult> for FestivalResult {
    type Error = ImporterError;

    fn try_from(result: LegacyResult) -> Result<Self> {
        let status = match non_empty(result.status.as_deref()) {
            Some(raw) => raw
                .parse::<ResultStatus>()
                .map_err(ImporterError::TransformationError)?,
            None => ResultStatus::default(),
        };

        Ok(Self {
            id: result.id,
            programme_id: result.programme_id,
            status,
            first_place: placements(result.first_place),
            second_place: placements(result.second_place),
            third_place: placements(result.third_place),
            first_place_teams: team_placements(result.first_place_teams),
            second_place_teams: team_placements(result.second_place_teams),
            third_place_teams: team_placements(result.third_place_teams),
            first_points: result.first_points,
            second_points: result.second_points,
            third_points: result.third_points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_and_bare_lists() {
        let enveloped: ApiList<LegacyTeam> =
            serde_json::from_str(r#"{"success": true, "data": [{"code": "SMD", "name": "Samad"}]}"#)
                .unwrap();
        let bare: ApiList<LegacyTeam> =
            serde_json::from_str(r#"[{"code": "INT", "name": "Intellects", "points": 4.5}]"#)
                .unwrap();

        assert_eq!(enveloped.into_vec()[0].code, "SMD");
        let team = Team::from(bare.into_vec().remove(0));
        assert_eq!(team.points, "4.5".parse::<Decimal>().unwrap());
        assert_eq!(team.members, 0);
    }

    #[test]
    fn test_result_conversion() {
        let json = r#"{
            "_id": "65f0c0ffee",
            "programId": "P1",
            "status": "published",
            "firstPlace": [{"chestNumber": "SMD013", "grade": "A"}],
            "secondPlace": [{"chestNumber": "INT007", "grade": ""}],
            "thirdPlace": [{"chestNumber": "AQS001", "grade": " A"}],
            "thirdPlaceTeams": [{"teamCode": "AQS"}],
            "firstPoints": 5,
            "secondPoints": 3
        }"#;

        let legacy: LegacyResult = serde_json::from_str(json).unwrap();
        let result = FestivalResult::try_from(legacy).unwrap();

        assert_eq!(result.id, "65f0c0ffee");
        assert_eq!(result.programme_id, "P1");
        assert!(result.is_published());
        assert_eq!(result.first_place[0].grade.as_deref(), Some("A"));
        assert_eq!(result.second_place[0].grade, None);
        assert_eq!(result.third_place[0].grade.as_deref(), Some(" A"));
        assert_eq!(result.third_place_teams[0].team_code, "AQS");
        assert_eq!(result.first_points, Some(Decimal::from(5)));
        assert_eq!(result.third_points, None);
    }

    #[test]
    fn test_result_without_status_is_draft() {
        let legacy: LegacyResult =
            serde_json::from_str(r#"{"_id": "r1", "programmeId": "P1"}"#).unwrap();
        let result = FestivalResult::try_from(legacy).unwrap();
        assert_eq!(result.status, ResultStatus::Draft);
        assert!(result.first_place.is_empty());
    }

    #[test]
    fn test_programme_conversion() {
        let legacy: LegacyProgramme = serde_json::from_str(
            r#"{"_id": "P1", "name": "Elocution", "category": "Arts", "subcategory": "non-stage", "section": "Sub-Junior"}"#,
        )
        .unwrap();
        let programme = Programme::try_from(legacy).unwrap();

        assert_eq!(programme.code, "P1");
        assert_eq!(programme.category, Category::Arts);
        assert_eq!(programme.subcategory, Some(Subcategory::NonStage));
        assert_eq!(programme.section, Section::SubJunior);
        assert_eq!(programme.position_type, PositionType::Individual);

        let sports: LegacyProgramme = serde_json::from_str(
            r#"{"_id": "P2", "code": "S100", "name": "100m", "category": "sports", "subcategory": ""}"#,
        )
        .unwrap();
        let sports = Programme::try_from(sports).unwrap();
        assert_eq!(sports.code, "S100");
        assert_eq!(sports.subcategory, None);
        assert_eq!(sports.section, Section::General);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let legacy: LegacyProgramme = serde_json::from_str(
            r#"{"_id": "P3", "name": "Quiz", "category": "games"}"#,
        )
        .unwrap();
        let err = Programme::try_from(legacy).unwrap_err();
        assert!(matches!(err, ImporterError::TransformationError(_)));
    }

    #[test]
    fn test_candidate_section_defaults_to_general() {
        let legacy: LegacyCandidate =
            serde_json::from_str(r#"{"chestNumber": "SMD013", "name": "Ameen", "team": "SMD"}"#)
                .unwrap();
        let candidate = Candidate::try_from(legacy).unwrap();
        assert_eq!(candidate.section, Section::General);
    }
}
