use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::grade_points::{grade_points, is_known_grade};
use super::team_classifier::TeamCodeClassifier;
use crate::models::{
    Candidate, Category, FestivalResult, FestivalSnapshot, Position, Programme, Section,
    Subcategory, Team,
};

/// Highest position points a result sheet may carry.
pub const MAX_POSITION_POINTS: Decimal = Decimal::ONE_THOUSAND;

/// Position points used when a result sheet does not carry its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionPoints {
    pub first: Decimal,
    pub second: Decimal,
    pub third: Decimal,
}

impl PositionPoints {
    pub fn new(first: Decimal, second: Decimal, third: Decimal) -> Self {
        Self {
            first,
            second,
            third,
        }
    }

    pub fn for_position(&self, position: Position) -> Decimal {
        match position {
            Position::First => self.first,
            Position::Second => self.second,
            Position::Third => self.third,
        }
    }
}

/// Parses `first,second,third`, e.g. `5,3,1`.
impl FromStr for PositionPoints {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<Decimal>()
                    .map_err(|e| format!("invalid position points '{}': {}", part.trim(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [first, second, third] if values.iter().all(|v| !v.is_sign_negative()) => {
                Ok(Self::new(*first, *second, *third))
            }
            [_, _, _] => Err("position points must not be negative".to_string()),
            _ => Err(format!(
                "expected three comma separated values (first,second,third), got {}",
                values.len()
            )),
        }
    }
}

/// Restricts which programmes count toward the standings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgrammeFilter {
    pub subcategory: Option<Subcategory>,
    pub section: Option<Section>,
}

impl ProgrammeFilter {
    pub fn accepts(&self, programme: &Programme) -> bool {
        let subcategory_ok = self
            .subcategory
            .is_none_or(|wanted| programme.subcategory == Some(wanted));
        let section_ok = self.section.is_none_or(|wanted| programme.section == wanted);

        subcategory_ok && section_ok
    }
}

/// Request-scoped inputs of one aggregation run.
pub struct ScoringContext<'a> {
    pub defaults: PositionPoints,
    pub classifier: &'a TeamCodeClassifier,
    pub filter: ProgrammeFilter,
}

impl<'a> ScoringContext<'a> {
    pub fn new(defaults: PositionPoints, classifier: &'a TeamCodeClassifier) -> Self {
        Self {
            defaults,
            classifier,
            filter: ProgrammeFilter::default(),
        }
    }

    pub fn with_filter(mut self, filter: ProgrammeFilter) -> Self {
        self.filter = filter;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementCounts {
    pub first: u32,
    pub second: u32,
    pub third: u32,
}

impl PlacementCounts {
    fn record(&mut self, position: Position) {
        match position {
            Position::First => self.first += 1,
            Position::Second => self.second += 1,
            Position::Third => self.third += 1,
        }
    }
}

/// Points and result counts of one team, split by category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamTotals {
    pub team_code: String,
    pub name: String,
    pub color: Option<String>,
    pub arts_points: Decimal,
    pub sports_points: Decimal,
    pub arts_results: u32,
    pub sports_results: u32,
    pub placements: PlacementCounts,
}

impl TeamTotals {
    pub fn new(team: &Team) -> Self {
        Self::empty(team.code.clone(), team.name.clone(), team.color.clone())
    }

    pub fn empty(team_code: String, name: String, color: Option<String>) -> Self {
        Self {
            team_code,
            name,
            color,
            arts_points: Decimal::ZERO,
            sports_points: Decimal::ZERO,
            arts_results: 0,
            sports_results: 0,
            placements: PlacementCounts::default(),
        }
    }

    pub fn total_points(&self) -> Decimal {
        self.arts_points.saturating_add(self.sports_points)
    }

    pub fn total_results(&self) -> u32 {
        self.arts_results + self.sports_results
    }

    fn record(&mut self, category: Category, position: Position, points: Decimal) {
        match category {
            Category::Arts => {
                self.arts_points = self.arts_points.saturating_add(points);
                self.arts_results += 1;
            }
            Category::Sports => {
                self.sports_points = self.sports_points.saturating_add(points);
                self.sports_results += 1;
            }
        }
        self.placements.record(position);
    }
}

/// Points of one candidate, used for the individual toppers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndividualTotals {
    pub chest_number: String,
    pub name: String,
    pub team_code: String,
    pub section: Section,
    pub arts_points: Decimal,
    pub sports_points: Decimal,
    pub arts_results: u32,
    pub sports_results: u32,
    pub placements: PlacementCounts,
}

impl IndividualTotals {
    fn new(candidate: &Candidate) -> Self {
        Self {
            chest_number: candidate.chest_number.clone(),
            name: candidate.name.clone(),
            team_code: candidate.team.clone(),
            section: candidate.section,
            arts_points: Decimal::ZERO,
            sports_points: Decimal::ZERO,
            arts_results: 0,
            sports_results: 0,
            placements: PlacementCounts::default(),
        }
    }

    fn record(&mut self, category: Category, position: Position, points: Decimal) {
        match category {
            Category::Arts => {
                self.arts_points = self.arts_points.saturating_add(points);
                self.arts_results += 1;
            }
            Category::Sports => {
                self.sports_points = self.sports_points.saturating_add(points);
                self.sports_results += 1;
            }
        }
        self.placements.record(position);
    }
}

/// Data-entry problems noticed while scoring. They never abort a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataQualityWarning {
    /// A placement list has winners but the sheet has no points for it,
    /// so the configured default was used.
    MissingPositionPoints { result_id: String, position: Position },
    /// A non-empty grade outside the grade table; it scored zero.
    UnknownGrade { result_id: String, grade: String },
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPositionPoints {
                result_id,
                position,
            } => write!(
                f,
                "Result '{}' has {} place winners but no {} points; using the configured default",
                result_id, position, position
            ),
            Self::UnknownGrade { result_id, grade } => {
                write!(f, "Result '{}' has unknown grade '{}'; scored as 0", result_id, grade)
            }
        }
    }
}

/// Entries left out of the totals because a reference did not resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DroppedEntries {
    pub missing_programme: usize,
    pub unresolved_team: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// One entry per known team, in snapshot order, zero totals included.
    pub teams: Vec<TeamTotals>,
    /// Candidates that scored at least once, in order of first appearance.
    pub individuals: Vec<IndividualTotals>,
    pub warnings: Vec<DataQualityWarning>,
    pub dropped: DroppedEntries,
}

impl Aggregation {
    pub fn team(&self, team_code: &str) -> Option<&TeamTotals> {
        self.teams.iter().find(|totals| totals.team_code == team_code)
    }

    pub fn individual(&self, chest_number: &str) -> Option<&IndividualTotals> {
        self.individuals
            .iter()
            .find(|totals| totals.chest_number == chest_number)
    }

    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }

        if self.dropped != DroppedEntries::default() {
            debug!(
                missing_programme = self.dropped.missing_programme,
                unresolved_team = self.dropped.unresolved_team,
                "Skipped unresolvable result entries"
            );
        }
    }
}

struct Accumulator<'a> {
    teams: Vec<TeamTotals>,
    team_index: HashMap<&'a str, usize>,
    individuals: Vec<IndividualTotals>,
    individual_index: HashMap<&'a str, usize>,
    warnings: Vec<DataQualityWarning>,
    dropped: DroppedEntries,
}

impl<'a> Accumulator<'a> {
    fn new(known_teams: &'a [Team]) -> Self {
        let mut teams = Vec::with_capacity(known_teams.len());
        let mut team_index = HashMap::with_capacity(known_teams.len());

        for team in known_teams {
            if !team_index.contains_key(team.code.as_str()) {
                team_index.insert(team.code.as_str(), teams.len());
                teams.push(TeamTotals::new(team));
            }
        }

        Self {
            teams,
            team_index,
            individuals: Vec::new(),
            individual_index: HashMap::new(),
            warnings: Vec::new(),
            dropped: DroppedEntries::default(),
        }
    }

    fn credit_team(&mut self, team_code: &str, category: Category, position: Position, points: Decimal) {
        match self.team_index.get(team_code) {
            Some(&idx) => self.teams[idx].record(category, position, points),
            None => self.dropped.unresolved_team += 1,
        }
    }

    fn credit_individual(
        &mut self,
        candidate: &'a Candidate,
        category: Category,
        position: Position,
        points: Decimal,
    ) {
        let idx = match self.individual_index.get(candidate.chest_number.as_str()) {
            Some(&idx) => idx,
            None => {
                self.individual_index
                    .insert(candidate.chest_number.as_str(), self.individuals.len());
                self.individuals.push(IndividualTotals::new(candidate));
                self.individuals.len() - 1
            }
        };

        self.individuals[idx].record(category, position, points);
    }

    fn position_points(
        &mut self,
        result: &FestivalResult,
        position: Position,
        defaults: &PositionPoints,
    ) -> Decimal {
        result.points_for(position).unwrap_or_else(|| {
            self.warnings.push(DataQualityWarning::MissingPositionPoints {
                result_id: result.id.clone(),
                position,
            });
            defaults.for_position(position)
        })
    }

    fn grade_bonus(&mut self, result: &FestivalResult, grade: Option<&str>) -> Decimal {
        let grade = grade.unwrap_or("");
        if !grade.is_empty() && !is_known_grade(grade) {
            self.warnings.push(DataQualityWarning::UnknownGrade {
                result_id: result.id.clone(),
                grade: grade.to_string(),
            });
        }
        grade_points(grade)
    }
}

/// Accumulates per-team and per-candidate points over the published
/// results of a snapshot.
///
/// Each winner earns the position points of the sheet plus the bonus of
/// its grade. Results whose programme is unknown, and winners whose team
/// cannot be resolved to a known team, are skipped and only counted in
/// [`Aggregation::dropped`].
pub fn aggregate(snapshot: &FestivalSnapshot, context: &ScoringContext<'_>) -> Aggregation {
    let programmes: HashMap<&str, &Programme> = snapshot
        .programmes
        .iter()
        .map(|programme| (programme.id.as_str(), programme))
        .collect();
    let candidates: HashMap<&str, &Candidate> = snapshot
        .candidates
        .iter()
        .map(|candidate| (candidate.chest_number.as_str(), candidate))
        .collect();

    let mut acc = Accumulator::new(&snapshot.teams);

    for result in snapshot.published_results() {
        let Some(programme) = programmes.get(result.programme_id.as_str()) else {
            acc.dropped.missing_programme += 1;
            continue;
        };

        if !context.filter.accepts(programme) {
            continue;
        }

        let category = programme.category;

        for position in Position::ALL {
            let winners = result.winners(position);
            if winners.is_empty() {
                continue;
            }

            let base = acc.position_points(result, position, &context.defaults);

            for winner in winners {
                let bonus = acc.grade_bonus(result, winner.grade.as_deref());
                let points = base.saturating_add(bonus);
                let candidate = candidates.get(winner.chest_number.as_str()).copied();

                let team_code = candidate
                    .map(|c| c.team.clone())
                    .filter(|team| !team.is_empty())
                    .or_else(|| {
                        context
                            .classifier
                            .classify(&winner.chest_number, &snapshot.teams)
                    });

                match team_code {
                    Some(code) => acc.credit_team(&code, category, position, points),
                    None => acc.dropped.unresolved_team += 1,
                }

                if let Some(candidate) = candidate {
                    acc.credit_individual(candidate, category, position, points);
                }
            }
        }

        for position in Position::ALL {
            let winners = result.winning_teams(position);
            if winners.is_empty() {
                continue;
            }

            let base = acc.position_points(result, position, &context.defaults);

            for winner in winners {
                let bonus = acc.grade_bonus(result, winner.grade.as_deref());
                let points = base.saturating_add(bonus);
                acc.credit_team(&winner.team_code, category, position, points);
            }
        }
    }

    Aggregation {
        teams: acc.teams,
        individuals: acc.individuals,
        warnings: acc.warnings,
        dropped: acc.dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Placement, ResultStatus, TeamPlacement};

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    fn defaults() -> PositionPoints {
        PositionPoints::new(dec("5"), dec("3"), dec("1"))
    }

    fn snapshot() -> FestivalSnapshot {
        FestivalSnapshot {
            teams: vec![
                Team::new("SMD", "Samad"),
                Team::new("INT", "Intellects"),
                Team::new("AQS", "Aqsa"),
            ],
            candidates: vec![
                Candidate::new("SMD013", "Ameen", "SMD", Section::Senior),
                Candidate::new("INT007", "Bilal", "INT", Section::Junior),
                Candidate::new("X1", "Transferred", "AQS", Section::Senior),
            ],
            programmes: vec![
                Programme::new("p-song", "Song", Category::Arts)
                    .with_subcategory(Subcategory::Stage)
                    .with_section(Section::Senior),
                Programme::new("p-essay", "Essay", Category::Arts)
                    .with_subcategory(Subcategory::NonStage)
                    .with_section(Section::Junior),
                Programme::new("p-race", "100m", Category::Sports).with_section(Section::Senior),
            ],
            results: Vec::new(),
        }
    }

    fn published(id: &str, programme_id: &str) -> FestivalResult {
        FestivalResult::new(id, programme_id, ResultStatus::Published).with_points(
            dec("5"),
            dec("3"),
            dec("1"),
        )
    }

    fn run(snapshot: &FestivalSnapshot) -> Aggregation {
        let classifier = TeamCodeClassifier::default();
        aggregate(snapshot, &ScoringContext::new(defaults(), &classifier))
    }

    #[test]
    fn test_position_points_plus_grade() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-song")
                .with_winner(Position::First, Placement::new("SMD013", Some("A")))
                .with_winner(Position::Second, Placement::new("INT007", Some("B+")))
                .with_winner(Position::Third, Placement::new("SMD013", None)),
        );

        let agg = run(&snap);

        let smd = agg.team("SMD").unwrap();
        assert_eq!(smd.arts_points, dec("15"));
        assert_eq!(smd.arts_results, 2);
        assert_eq!(smd.sports_points, Decimal::ZERO);
        assert_eq!(smd.placements, PlacementCounts { first: 1, second: 0, third: 1 });

        let int = agg.team("INT").unwrap();
        assert_eq!(int.arts_points, dec("10"));
        assert_eq!(int.placements.second, 1);

        assert!(agg.warnings.is_empty());
    }

    #[test]
    fn test_huge_stored_points_saturate_instead_of_panicking() {
        let huge = dec("79000000000000000000000000000");
        let mut snap = snapshot();
        for id in ["r1", "r2"] {
            snap.results.push(
                published(id, "p-song")
                    .with_points(huge, dec("3"), dec("1"))
                    .with_winner(Position::First, Placement::new("SMD013", Some("A+"))),
            );
        }

        let agg = run(&snap);

        let smd = agg.team("SMD").unwrap();
        assert_eq!(smd.arts_points, Decimal::MAX);
        assert_eq!(smd.arts_results, 2);
        assert_eq!(smd.total_points(), Decimal::MAX);
        assert_eq!(agg.individual("SMD013").unwrap().arts_points, Decimal::MAX);
    }

    #[test]
    fn test_category_buckets() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-race").with_winner(Position::First, Placement::new("SMD013", None)),
        );

        let smd = run(&snap).team("SMD").cloned().unwrap();
        assert_eq!(smd.sports_points, dec("5"));
        assert_eq!(smd.sports_results, 1);
        assert_eq!(smd.arts_points, Decimal::ZERO);
        assert_eq!(smd.arts_results, 0);
    }

    #[test]
    fn test_candidate_team_wins_over_chest_number() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-song").with_winner(Position::First, Placement::new("X1", None)),
        );

        let agg = run(&snap);
        assert_eq!(agg.team("AQS").unwrap().arts_points, dec("5"));
        assert_eq!(agg.dropped.unresolved_team, 0);
    }

    #[test]
    fn test_unknown_candidate_falls_back_to_classifier() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-song")
                .with_winner(Position::First, Placement::new("650", None))
                .with_winner(Position::Second, Placement::new("SM99", Some("A+"))),
        );

        let agg = run(&snap);
        assert_eq!(agg.team("AQS").unwrap().arts_points, dec("5"));
        assert_eq!(agg.team("SMD").unwrap().arts_points, dec("13"));
        assert!(agg.individuals.is_empty());
    }

    #[test]
    fn test_team_placements() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-race")
                .with_winning_team(Position::First, TeamPlacement::new("INT", Some("A-")))
                .with_winning_team(Position::Second, TeamPlacement::new("AQS", None)),
        );

        let agg = run(&snap);
        assert_eq!(agg.team("INT").unwrap().sports_points, dec("13"));
        assert_eq!(agg.team("AQS").unwrap().sports_points, dec("3"));
        assert_eq!(agg.team("SMD").unwrap().total_points(), Decimal::ZERO);
    }

    #[test]
    fn test_draft_results_never_contribute() {
        let mut snap = snapshot();
        snap.results.push(
            FestivalResult::new("r1", "p-song", ResultStatus::Draft)
                .with_points(dec("5"), dec("3"), dec("1"))
                .with_winner(Position::First, Placement::new("SMD013", Some("A+")))
                .with_winning_team(Position::First, TeamPlacement::new("INT", None)),
        );

        let agg = run(&snap);
        assert!(agg.teams.iter().all(|t| t.total_points() == Decimal::ZERO));
        assert!(agg.teams.iter().all(|t| t.total_results() == 0));
        assert!(agg.individuals.is_empty());
    }

    #[test]
    fn test_missing_programme_is_skipped() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "deleted").with_winner(Position::First, Placement::new("SMD013", None)),
        );

        let agg = run(&snap);
        assert_eq!(agg.dropped.missing_programme, 1);
        assert_eq!(agg.team("SMD").unwrap().total_points(), Decimal::ZERO);
        assert!(agg.warnings.is_empty());
    }

    #[test]
    fn test_unresolved_teams_are_dropped() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-song")
                .with_winner(Position::First, Placement::new("#42", None))
                .with_winner(Position::First, Placement::new("150", None))
                .with_winning_team(Position::Second, TeamPlacement::new("GONE", None)),
        );

        let agg = run(&snap);
        assert_eq!(agg.dropped.unresolved_team, 3);
        assert!(agg.teams.iter().all(|t| t.total_points() == Decimal::ZERO));
    }

    #[test]
    fn test_missing_points_use_defaults_and_warn() {
        let mut snap = snapshot();
        snap.results.push(
            FestivalResult::new("r1", "p-song", ResultStatus::Published)
                .with_winner(Position::Second, Placement::new("SMD013", None)),
        );

        let agg = run(&snap);
        assert_eq!(agg.team("SMD").unwrap().arts_points, dec("3"));
        assert_eq!(
            agg.warnings,
            vec![DataQualityWarning::MissingPositionPoints {
                result_id: "r1".to_string(),
                position: Position::Second,
            }]
        );
    }

    #[test]
    fn test_zero_defaults_are_respected() {
        let mut snap = snapshot();
        snap.results.push(
            FestivalResult::new("r1", "p-song", ResultStatus::Published)
                .with_winner(Position::First, Placement::new("SMD013", Some("B"))),
        );

        let classifier = TeamCodeClassifier::default();
        let zero = PositionPoints::new(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
        let agg = aggregate(&snap, &ScoringContext::new(zero, &classifier));

        assert_eq!(agg.team("SMD").unwrap().arts_points, dec("6"));
    }

    #[test]
    fn test_lowercase_grade_scores_zero_and_warns() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-song").with_winner(Position::First, Placement::new("SMD013", Some("a+"))),
        );

        let agg = run(&snap);
        assert_eq!(agg.team("SMD").unwrap().arts_points, dec("5"));
        assert_eq!(
            agg.warnings,
            vec![DataQualityWarning::UnknownGrade {
                result_id: "r1".to_string(),
                grade: "a+".to_string(),
            }]
        );
    }

    #[test]
    fn test_individual_totals() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-song").with_winner(Position::First, Placement::new("SMD013", Some("A"))),
        );
        snap.results.push(
            published("r2", "p-race").with_winner(Position::Third, Placement::new("SMD013", None)),
        );

        let agg = run(&snap);
        let ameen = agg.individual("SMD013").unwrap();
        assert_eq!(ameen.name, "Ameen");
        assert_eq!(ameen.arts_points, dec("14"));
        assert_eq!(ameen.sports_points, dec("1"));
        assert_eq!(ameen.placements, PlacementCounts { first: 1, second: 0, third: 1 });
        assert!(agg.individual("INT007").is_none());
    }

    #[test]
    fn test_subcategory_filter() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-song").with_winner(Position::First, Placement::new("SMD013", None)),
        );
        snap.results.push(
            published("r2", "p-essay").with_winner(Position::First, Placement::new("INT007", None)),
        );
        snap.results.push(
            published("r3", "p-race").with_winner(Position::First, Placement::new("INT007", None)),
        );

        let classifier = TeamCodeClassifier::default();
        let context = ScoringContext::new(defaults(), &classifier).with_filter(ProgrammeFilter {
            subcategory: Some(Subcategory::Stage),
            section: None,
        });
        let agg = aggregate(&snap, &context);

        assert_eq!(agg.team("SMD").unwrap().arts_points, dec("5"));
        assert_eq!(agg.team("INT").unwrap().total_points(), Decimal::ZERO);
    }

    #[test]
    fn test_section_filter() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-song").with_winner(Position::First, Placement::new("SMD013", None)),
        );
        snap.results.push(
            published("r2", "p-essay").with_winner(Position::First, Placement::new("INT007", None)),
        );

        let classifier = TeamCodeClassifier::default();
        let context = ScoringContext::new(defaults(), &classifier).with_filter(ProgrammeFilter {
            subcategory: None,
            section: Some(Section::Junior),
        });
        let agg = aggregate(&snap, &context);

        assert_eq!(agg.team("SMD").unwrap().total_points(), Decimal::ZERO);
        assert_eq!(agg.team("INT").unwrap().arts_points, dec("5"));
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-song")
                .with_winner(Position::First, Placement::new("SMD013", Some("E-")))
                .with_winner(Position::Second, Placement::new("INT007", Some("D-"))),
        );
        snap.results.push(
            FestivalResult::new("r2", "p-race", ResultStatus::Published)
                .with_winning_team(Position::First, TeamPlacement::new("AQS", Some("E"))),
        );

        assert_eq!(run(&snap), run(&snap));
    }

    #[test]
    fn test_extra_first_place_only_moves_that_team() {
        let mut snap = snapshot();
        snap.results.push(
            published("r1", "p-song")
                .with_winner(Position::First, Placement::new("SMD013", Some("B")))
                .with_winner(Position::Second, Placement::new("INT007", None)),
        );
        let before = run(&snap);

        snap.results.push(
            published("r2", "p-race").with_winner(Position::First, Placement::new("INT007", Some("A"))),
        );
        let after = run(&snap);

        let int_before = before.team("INT").unwrap();
        let int_after = after.team("INT").unwrap();
        assert_eq!(int_after.sports_points - int_before.sports_points, dec("14"));
        assert_eq!(int_after.arts_points, int_before.arts_points);
        assert_eq!(after.team("SMD"), before.team("SMD"));
        assert_eq!(after.team("AQS"), before.team("AQS"));
    }

    #[test]
    fn test_teams_keep_snapshot_order() {
        let agg = run(&snapshot());
        let codes: Vec<&str> = agg.teams.iter().map(|t| t.team_code.as_str()).collect();
        assert_eq!(codes, vec!["SMD", "INT", "AQS"]);
    }

    #[test]
    fn test_parse_position_points() {
        let points: PositionPoints = "5, 3, 1".parse().unwrap();
        assert_eq!(points, PositionPoints::new(dec("5"), dec("3"), dec("1")));

        let points: PositionPoints = "10,7.5,0".parse().unwrap();
        assert_eq!(points.for_position(Position::Second), dec("7.5"));

        assert!("5,3".parse::<PositionPoints>().is_err());
        assert!("5,3,x".parse::<PositionPoints>().is_err());
        assert!("5,-3,1".parse::<PositionPoints>().is_err());
        assert!("".parse::<PositionPoints>().is_err());
    }
}
