use rust_decimal::Decimal;
use storage::models::{
    Candidate, Category, FestivalResult, FestivalSnapshot, Placement, Position, Programme,
    ResultStatus, Section, Team, TeamPlacement,
};
use storage::services::{
    CategoryFilter, PositionPoints, ScoringContext, SubtotalCategory, TeamCodeClassifier,
    aggregate, compose, merge_subtotals, subtotals,
};

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

fn festival() -> FestivalSnapshot {
    FestivalSnapshot {
        teams: vec![
            Team::new("SMD", "Samad").with_color("#1e88e5"),
            Team::new("INT", "Intellects").with_color("#e53935"),
            Team::new("AQS", "Aqsa").with_color("#43a047"),
        ],
        candidates: vec![
            Candidate::new("SMD013", "Ameen", "SMD", Section::Senior),
            Candidate::new("INT021", "Bilal", "INT", Section::Senior),
        ],
        programmes: vec![
            Programme::new("p-arts", "Mappilappattu", Category::Arts),
            Programme::new("p-sports", "Relay", Category::Sports),
        ],
        results: vec![
            FestivalResult::new("r-arts", "p-arts", ResultStatus::Published)
                .with_points(dec("5"), dec("3"), dec("1"))
                .with_winner(Position::First, Placement::new("SMD013", Some("A"))),
            FestivalResult::new("r-sports", "p-sports", ResultStatus::Published)
                .with_points(dec("5"), dec("3"), dec("1"))
                .with_winning_team(Position::Second, TeamPlacement::new("SMD", None)),
        ],
    }
}

fn defaults() -> PositionPoints {
    PositionPoints::new(dec("5"), dec("3"), dec("1"))
}

#[test]
fn test_grand_marks_end_to_end() {
    let classifier = TeamCodeClassifier::default();
    let aggregation = aggregate(&festival(), &ScoringContext::new(defaults(), &classifier));
    let ranked = compose(&aggregation.teams, CategoryFilter::All);

    assert_eq!(ranked.len(), 1);
    let smd = &ranked[0];
    assert_eq!(smd.rank, 1);
    assert_eq!(smd.team_code, "SMD");
    assert_eq!(smd.color.as_deref(), Some("#1e88e5"));
    assert_eq!(smd.arts_points, dec("14"));
    assert_eq!(smd.sports_points, dec("3"));
    assert_eq!(smd.points, dec("17"));
    assert_eq!(smd.results, 2);
}

#[test]
fn test_combined_view_matches_direct_totals() {
    let mut snapshot = festival();
    snapshot.results.push(
        FestivalResult::new("r-late", "p-sports", ResultStatus::Published)
            .with_points(dec("5"), dec("3"), dec("1"))
            .with_winner(Position::First, Placement::new("INT021", Some("E-")))
            .with_winner(Position::Third, Placement::new("650", Some("B"))),
    );

    let classifier = TeamCodeClassifier::default();
    let aggregation = aggregate(&snapshot, &ScoringContext::new(defaults(), &classifier));

    let merged = merge_subtotals(
        &subtotals(&aggregation.teams, SubtotalCategory::ArtsTotal),
        &subtotals(&aggregation.teams, SubtotalCategory::Sports),
    );
    let combined = compose(&merged, CategoryFilter::All);
    let direct = compose(&aggregation.teams, CategoryFilter::All);

    assert_eq!(combined.len(), direct.len());
    for (merged_team, direct_team) in combined.iter().zip(&direct) {
        assert_eq!(merged_team.team_code, direct_team.team_code);
        assert_eq!(merged_team.points, direct_team.points);
        assert_eq!(merged_team.points, merged_team.arts_points + merged_team.sports_points);
    }

    let codes: Vec<&str> = combined.iter().map(|t| t.team_code.as_str()).collect();
    assert_eq!(codes, vec!["SMD", "AQS", "INT"]);
    assert_eq!(combined[2].points, dec("5.01"));
}

#[test]
fn test_missing_programme_does_not_fail_the_ranking() {
    let mut snapshot = festival();
    snapshot.programmes.retain(|programme| programme.id != "p-arts");

    let classifier = TeamCodeClassifier::default();
    let aggregation = aggregate(&snapshot, &ScoringContext::new(defaults(), &classifier));
    let ranked = compose(&aggregation.teams, CategoryFilter::All);

    assert_eq!(aggregation.dropped.missing_programme, 1);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].points, dec("3"));
    assert_eq!(ranked[0].arts_points, Decimal::ZERO);
}

#[test]
fn test_snapshot_file_round_trips_legacy_numbers() {
    let json = r#"{
        "teams": [{ "code": "SMD", "name": "Samad", "points": 120 }],
        "candidates": [{ "chestNumber": "SMD013", "name": "Ameen", "team": "SMD", "section": "senior" }],
        "programmes": [{
            "id": "p1", "code": "A01", "name": "Song", "category": "arts",
            "subcategory": "stage", "section": "senior", "positionType": "individual"
        }],
        "results": [{
            "id": "r1", "programmeId": "p1", "status": "published",
            "firstPlace": [{ "chestNumber": "SMD013", "grade": "A+" }],
            "firstPoints": 5
        }]
    }"#;

    let snapshot: FestivalSnapshot = serde_json::from_str(json).unwrap();
    let classifier = TeamCodeClassifier::default();
    let aggregation = aggregate(&snapshot, &ScoringContext::new(defaults(), &classifier));

    assert_eq!(aggregation.team("SMD").unwrap().arts_points, dec("15"));
    assert_eq!(snapshot.teams[0].points, dec("120"));
}
