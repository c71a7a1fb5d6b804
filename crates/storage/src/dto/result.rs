use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{FestivalResult, Placement, ResultStatus, TeamPlacement};
use crate::services::MAX_POSITION_POINTS;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResultListFilter {
    pub status: Option<ResultStatus>,
}

/// Request payload for entering a result sheet
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateResultRequest {
    #[validate(length(
        min = 1,
        max = 64,
        message = "Programme id must be between 1 and 64 characters"
    ))]
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

impl CreateResultRequest {
    /// Checks that span several fields
    pub fn validate_sheet(&self) -> Result<(), &'static str> {
        let points = [self.first_points, self.second_points, self.third_points];
        if points.iter().flatten().any(|p| p.is_sign_negative()) {
            return Err("Position points must not be negative");
        }
        if points.iter().flatten().any(|p| *p > MAX_POSITION_POINTS) {
            return Err("Position points must not exceed 1000");
        }

        let individuals = [&self.first_place, &self.second_place, &self.third_place];
        if individuals
            .iter()
            .flat_map(|list| list.iter())
            .any(|winner| winner.chest_number.trim().is_empty())
        {
            return Err("Every winner needs a chest number");
        }

        let teams = [
            &self.first_place_teams,
            &self.second_place_teams,
            &self.third_place_teams,
        ];
        if teams
            .iter()
            .flat_map(|list| list.iter())
            .any(|winner| winner.team_code.trim().is_empty())
        {
            return Err("Every winning team needs a team code");
        }

        Ok(())
    }

    pub fn into_result(self, id: String) -> FestivalResult {
        FestivalResult {
            id,
            programme_id: self.programme_id,
            status: self.status,
            first_place: self.first_place,
            second_place: self.second_place,
            third_place: self.third_place,
            first_place_teams: self.first_place_teams,
            second_place_teams: self.second_place_teams,
            third_place_teams: self.third_place_teams,
            first_points: self.first_points,
            second_points: self.second_points,
            third_points: self.third_points,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateResultStatusRequest {
    pub status: ResultStatus,
}
