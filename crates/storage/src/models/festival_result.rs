use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    #[default]
    Draft,
    Published,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl FromStr for ResultStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(format!("unknown result status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    First,
    Second,
    Third,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::First, Position::Second, Position::Third];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
            Self::Third => "third",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An individual winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub chest_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl Placement {
    pub fn new(chest_number: impl Into<String>, grade: Option<&str>) -> Self {
        Self {
            chest_number: chest_number.into(),
            grade: grade.map(str::to_string),
        }
    }
}

/// A winning team in a group programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamPlacement {
    pub team_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl TeamPlacement {
    pub fn new(team_code: impl Into<String>, grade: Option<&str>) -> Self {
        Self {
            team_code: team_code.into(),
            grade: grade.map(str::to_string),
        }
    }
}

/// The result sheet of one programme.
///
/// Position points are optional: older sheets were saved without them and
/// the standings fall back to the configured defaults for those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FestivalResult {
    pub id: String,
    pub programme_id: String,
    #[serde(default)]
    pub status: ResultStatus,
    #[serde(default)]
    pub first_place: Vec<Placement>,
    #[serde(default)]
    pub second_place: Vec<Placement>,
    #[serde(default)]
    pub third_place: Vec<Placement>,
    #[serde(default)]
    pub first_place_teams: Vec<TeamPlacement>,
    #[serde(default)]
    pub second_place_teams: Vec<TeamPlacement>,
    #[serde(default)]
    pub third_place_teams: Vec<TeamPlacement>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub first_points: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub second_points: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub third_points: Option<Decimal>,
}

impl FestivalResult {
    pub fn new(id: impl Into<String>, programme_id: impl Into<String>, status: ResultStatus) -> Self {
        Self {
            id: id.into(),
            programme_id: programme_id.into(),
            status,
            first_place: Vec::new(),
            second_place: Vec::new(),
            third_place: Vec::new(),
            first_place_teams: Vec::new(),
            second_place_teams: Vec::new(),
            third_place_teams: Vec::new(),
            first_points: None,
            second_points: None,
            third_points: None,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == ResultStatus::Published
    }

    pub fn points_for(&self, position: Position) -> Option<Decimal> {
        match position {
            Position::First => self.first_points,
            Position::Second => self.second_points,
            Position::Third => self.third_points,
        }
    }

    pub fn winners(&self, position: Position) -> &[Placement] {
        match position {
            Position::First => &self.first_place,
            Position::Second => &self.second_place,
            Position::Third => &self.third_place,
        }
    }

    pub fn winning_teams(&self, position: Position) -> &[TeamPlacement] {
        match position {
            Position::First => &self.first_place_teams,
            Position::Second => &self.second_place_teams,
            Position::Third => &self.third_place_teams,
        }
    }

    pub fn with_points(mut self, first: Decimal, second: Decimal, third: Decimal) -> Self {
        self.first_points = Some(first);
        self.second_points = Some(second);
        self.third_points = Some(third);
        self
    }

    pub fn with_winner(mut self, position: Position, placement: Placement) -> Self {
        match position {
            Position::First => self.first_place.push(placement),
            Position::Second => self.second_place.push(placement),
            Position::Third => self.third_place.push(placement),
        }
        self
    }

    pub fn with_winning_team(mut self, position: Position, placement: TeamPlacement) -> Self {
        match position {
            Position::First => self.first_place_teams.push(placement),
            Position::Second => self.second_place_teams.push(placement),
            Position::Third => self.third_place_teams.push(placement),
        }
        self
    }
}
