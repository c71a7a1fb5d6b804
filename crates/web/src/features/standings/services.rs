use sqlx::PgPool;
use storage::{
    dto::standings::{GrandMarksFilter, ToppersFilter},
    error::Result,
    models::FestivalSnapshot,
    repository::snapshot::load_snapshot,
    services::{
        Aggregation, CategoryFilter, RankedIndividual, RankedTeam, ScoringContext,
        SubtotalCategory, TeamSubtotal, aggregate, compose, compose_individuals, merge_subtotals,
        subtotals,
    },
};

fn score(snapshot: &FestivalSnapshot, context: &ScoringContext<'_>) -> Aggregation {
    let aggregation = aggregate(snapshot, context);
    aggregation.log_warnings();
    aggregation
}

/// Team ranking for the grand marks board
pub async fn grand_marks(
    pool: &PgPool,
    context: ScoringContext<'_>,
    filter: &GrandMarksFilter,
) -> Result<Vec<RankedTeam>> {
    let snapshot = load_snapshot(pool).await?;
    let context = context.with_filter(filter.programme_filter());

    let aggregation = score(&snapshot, &context);

    Ok(compose(&aggregation.teams, filter.category))
}

/// Arts and sports subtotals computed separately, then merged and ranked
pub async fn combined_grand_marks(
    pool: &PgPool,
    context: ScoringContext<'_>,
) -> Result<Vec<RankedTeam>> {
    let snapshot = load_snapshot(pool).await?;
    let aggregation = score(&snapshot, &context);

    let arts = subtotals(&aggregation.teams, SubtotalCategory::ArtsTotal);
    let sports = subtotals(&aggregation.teams, SubtotalCategory::Sports);

    Ok(compose(&merge_subtotals(&arts, &sports), CategoryFilter::All))
}

/// Per-team subtotal for the admin checklist
pub async fn checklist_marks(
    pool: &PgPool,
    context: ScoringContext<'_>,
    category: SubtotalCategory,
) -> Result<Vec<TeamSubtotal>> {
    let snapshot = load_snapshot(pool).await?;
    let aggregation = score(&snapshot, &context);

    Ok(subtotals(&aggregation.teams, category))
}

/// Individual toppers, truncated to `limit` when given
pub async fn individual_toppers(
    pool: &PgPool,
    context: ScoringContext<'_>,
    filter: &ToppersFilter,
) -> Result<Vec<RankedIndividual>> {
    let snapshot = load_snapshot(pool).await?;
    let context = context.with_filter(filter.programme_filter());

    let aggregation = score(&snapshot, &context);

    let mut ranked = compose_individuals(&aggregation.individuals, filter.category);
    if let Some(limit) = filter.limit {
        ranked.truncate(limit);
    }

    Ok(ranked)
}
