use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{Section, Subcategory};
use crate::services::{
    CategoryFilter, ProgrammeFilter, RankedIndividual, RankedTeam, SubtotalCategory, TeamSubtotal,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SubcategoryFilter {
    #[default]
    All,
    Stage,
    NonStage,
}

impl SubcategoryFilter {
    pub fn as_subcategory(&self) -> Option<Subcategory> {
        match self {
            Self::All => None,
            Self::Stage => Some(Subcategory::Stage),
            Self::NonStage => Some(Subcategory::NonStage),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GrandMarksFilter {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub subcategory: SubcategoryFilter,
    pub section: Option<Section>,
}

impl GrandMarksFilter {
    pub fn programme_filter(&self) -> ProgrammeFilter {
        ProgrammeFilter {
            subcategory: self.subcategory.as_subcategory(),
            section: self.section,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ChecklistFilter {
    pub category: SubtotalCategory,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ToppersFilter {
    #[serde(default)]
    pub category: CategoryFilter,
    pub section: Option<Section>,
    pub limit: Option<usize>,
}

impl ToppersFilter {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(limit) = self.limit
            && !(1..=100).contains(&limit)
        {
            return Err("limit must be between 1 and 100".to_string());
        }

        Ok(())
    }

    pub fn programme_filter(&self) -> ProgrammeFilter {
        ProgrammeFilter {
            subcategory: None,
            section: self.section,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedTeamResponse {
    pub rank: u32,
    pub team_code: String,
    pub name: String,
    pub color: Option<String>,
    pub points: f64,
    pub results: u32,
    pub arts_points: f64,
    pub sports_points: f64,
    pub arts_results: u32,
    pub sports_results: u32,
    pub first_places: u32,
    pub second_places: u32,
    pub third_places: u32,
}

impl From<RankedTeam> for RankedTeamResponse {
    fn from(team: RankedTeam) -> Self {
        Self {
            rank: team.rank,
            team_code: team.team_code,
            name: team.name,
            color: team.color,
            points: decimal_to_f64(team.points),
            results: team.results,
            arts_points: decimal_to_f64(team.arts_points),
            sports_points: decimal_to_f64(team.sports_points),
            arts_results: team.arts_results,
            sports_results: team.sports_results,
            first_places: team.placements.first,
            second_places: team.placements.second,
            third_places: team.placements.third,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamSubtotalResponse {
    pub team_code: String,
    pub name: String,
    pub color: Option<String>,
    pub points: f64,
    pub results: u32,
}

impl From<TeamSubtotal> for TeamSubtotalResponse {
    fn from(subtotal: TeamSubtotal) -> Self {
        Self {
            team_code: subtotal.team_code,
            name: subtotal.name,
            color: subtotal.color,
            points: decimal_to_f64(subtotal.points),
            results: subtotal.results,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedIndividualResponse {
    pub rank: u32,
    pub chest_number: String,
    pub name: String,
    pub team_code: String,
    pub section: Section,
    pub points: f64,
    pub results: u32,
    pub arts_points: f64,
    pub sports_points: f64,
    pub first_places: u32,
    pub second_places: u32,
    pub third_places: u32,
}

impl From<RankedIndividual> for RankedIndividualResponse {
    fn from(individual: RankedIndividual) -> Self {
        Self {
            rank: individual.rank,
            chest_number: individual.chest_number,
            name: individual.name,
            team_code: individual.team_code,
            section: individual.section,
            points: decimal_to_f64(individual.points),
            results: individual.results,
            arts_points: decimal_to_f64(individual.arts_points),
            sports_points: decimal_to_f64(individual.sports_points),
            first_places: individual.placements.first,
            second_places: individual.placements.second,
            third_places: individual.placements.third,
        }
    }
}

fn decimal_to_f64(decimal: Decimal) -> f64 {
    decimal.to_f64().unwrap_or(0.0)
}
