use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::aggregation::{IndividualTotals, PlacementCounts, TeamTotals};
use crate::models::Section;

/// Which points a ranking is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Arts,
    Sports,
}

impl CategoryFilter {
    fn points(&self, arts: Decimal, sports: Decimal) -> Decimal {
        match self {
            Self::All => arts.saturating_add(sports),
            Self::Arts => arts,
            Self::Sports => sports,
        }
    }

    fn results(&self, arts: u32, sports: u32) -> u32 {
        match self {
            Self::All => arts.saturating_add(sports),
            Self::Arts => arts,
            Self::Sports => sports,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedTeam {
    pub rank: u32,
    pub team_code: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Decimal,
    pub results: u32,
    pub arts_points: Decimal,
    pub sports_points: Decimal,
    pub arts_results: u32,
    pub sports_results: u32,
    pub placements: PlacementCounts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedIndividual {
    pub rank: u32,
    pub chest_number: String,
    pub name: String,
    pub team_code: String,
    pub section: Section,
    pub points: Decimal,
    pub results: u32,
    pub arts_points: Decimal,
    pub sports_points: Decimal,
    pub placements: PlacementCounts,
}

/// Ranks teams by the points of `category`.
///
/// Teams without points are left out. The sort is stable, so tied teams
/// keep their input order; rank is the 1-based position in the output.
pub fn compose(totals: &[TeamTotals], category: CategoryFilter) -> Vec<RankedTeam> {
    let mut ranked: Vec<RankedTeam> = totals
        .iter()
        .map(|team| RankedTeam {
            rank: 0,
            team_code: team.team_code.clone(),
            name: team.name.clone(),
            color: team.color.clone(),
            points: category.points(team.arts_points, team.sports_points),
            results: category.results(team.arts_results, team.sports_results),
            arts_points: team.arts_points,
            sports_points: team.sports_points,
            arts_results: team.arts_results,
            sports_results: team.sports_results,
            placements: team.placements,
        })
        .filter(|team| team.points > Decimal::ZERO)
        .collect();

    ranked.sort_by(|a, b| b.points.cmp(&a.points));

    for (idx, team) in ranked.iter_mut().enumerate() {
        team.rank = idx as u32 + 1;
    }

    ranked
}

/// Same rules as [`compose`], for the individual toppers.
pub fn compose_individuals(
    totals: &[IndividualTotals],
    category: CategoryFilter,
) -> Vec<RankedIndividual> {
    let mut ranked: Vec<RankedIndividual> = totals
        .iter()
        .map(|individual| RankedIndividual {
            rank: 0,
            chest_number: individual.chest_number.clone(),
            name: individual.name.clone(),
            team_code: individual.team_code.clone(),
            section: individual.section,
            points: category.points(individual.arts_points, individual.sports_points),
            results: category.results(individual.arts_results, individual.sports_results),
            arts_points: individual.arts_points,
            sports_points: individual.sports_points,
            placements: individual.placements,
        })
        .filter(|individual| individual.points > Decimal::ZERO)
        .collect();

    ranked.sort_by(|a, b| b.points.cmp(&a.points));

    for (idx, individual) in ranked.iter_mut().enumerate() {
        individual.rank = idx as u32 + 1;
    }

    ranked
}

/// Subtotal shown on the admin checklist for one side of the festival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SubtotalCategory {
    ArtsTotal,
    Sports,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamSubtotal {
    pub team_code: String,
    pub name: String,
    pub color: Option<String>,
    pub points: Decimal,
    pub results: u32,
}

/// One subtotal per team, zero rows included, in input order.
pub fn subtotals(totals: &[TeamTotals], category: SubtotalCategory) -> Vec<TeamSubtotal> {
    totals
        .iter()
        .map(|team| {
            let (points, results) = match category {
                SubtotalCategory::ArtsTotal => (team.arts_points, team.arts_results),
                SubtotalCategory::Sports => (team.sports_points, team.sports_results),
            };

            TeamSubtotal {
                team_code: team.team_code.clone(),
                name: team.name.clone(),
                color: team.color.clone(),
                points,
                results,
            }
        })
        .collect()
}

/// Unions separately computed arts and sports subtotals by team code.
///
/// A team missing on one side counts zero there. Arts entries come first,
/// followed by teams only present on the sports side.
pub fn merge_subtotals(arts: &[TeamSubtotal], sports: &[TeamSubtotal]) -> Vec<TeamTotals> {
    let mut merged: Vec<TeamTotals> = Vec::with_capacity(arts.len().max(sports.len()));
    let mut index: HashMap<&str, usize> = HashMap::new();

    for subtotal in arts {
        let idx = *index.entry(subtotal.team_code.as_str()).or_insert_with(|| {
            merged.push(TeamTotals::empty(
                subtotal.team_code.clone(),
                subtotal.name.clone(),
                subtotal.color.clone(),
            ));
            merged.len() - 1
        });
        let entry = &mut merged[idx];
        entry.arts_points = entry.arts_points.saturating_add(subtotal.points);
        entry.arts_results += subtotal.results;
    }

    for subtotal in sports {
        let idx = *index.entry(subtotal.team_code.as_str()).or_insert_with(|| {
            merged.push(TeamTotals::empty(
                subtotal.team_code.clone(),
                subtotal.name.clone(),
                subtotal.color.clone(),
            ));
            merged.len() - 1
        });
        let entry = &mut merged[idx];
        entry.sports_points = entry.sports_points.saturating_add(subtotal.points);
        entry.sports_results += subtotal.results;
    }

    merged
}
