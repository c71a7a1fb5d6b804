use clap::{Parser, Subcommand};
use importer::{
    FileSource, LegacySource, SnapshotSource,
    canonical::{
        CanonicalSnapshot, CanonicalTransformer, CanonicalValidator, SourceMetadata, SourceType,
    },
};
use sqlx::postgres::PgPoolOptions;
use std::path::PathBuf;
use storage::services::{
    CategoryFilter, PositionPoints, ScoringContext, TeamCodeClassifier, aggregate, compose,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "festival-import")]
#[command(about = "Festival data importer and offline standings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    /// Points for first,second,third when a result sheet carries none
    #[arg(long, env = "DEFAULT_POSITION_POINTS", global = true)]
    position_points: Option<PositionPoints>,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a running legacy deployment to a canonical snapshot file
    Legacy {
        #[arg(long)]
        base_url: String,

        #[arg(long, default_value = "./imports")]
        output: PathBuf,
    },
    /// Validate a canonical snapshot and upsert it into the database
    Canonical {
        file: PathBuf,

        #[arg(long)]
        validate_only: bool,
    },
    /// Print the team ranking of a canonical snapshot
    Standings {
        file: PathBuf,

        #[arg(long, default_value = "all", value_parser = parse_category)]
        category: CategoryFilter,

        #[arg(long)]
        top: Option<usize>,
    },
}

fn parse_category(raw: &str) -> Result<CategoryFilter, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "all" => Ok(CategoryFilter::All),
        "arts" => Ok(CategoryFilter::Arts),
        "sports" => Ok(CategoryFilter::Sports),
        other => Err(format!(
            "unknown category '{}', expected all, arts or sports",
            other
        )),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "festival_import={},importer={},storage={}",
                    log_level, log_level, log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Legacy { base_url, output } => {
            handle_legacy_export(&base_url, output).await?;
        }
        Commands::Canonical {
            file,
            validate_only,
        } => {
            handle_canonical_import(file, validate_only, cli.database_url.as_deref()).await?;
        }
        Commands::Standings {
            file,
            category,
            top,
        } => {
            let points = cli
                .position_points
                .ok_or("DEFAULT_POSITION_POINTS or --position-points is required (e.g. 5,3,1)")?;
            handle_standings(file, category, top, points).await?;
        }
    }

    Ok(())
}

async fn handle_legacy_export(
    base_url: &str,
    output: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = LegacySource::new(base_url)?;
    let snapshot = source.fetch_snapshot().await?;

    let canonical = CanonicalSnapshot::new(
        SourceMetadata::new(SourceType::Legacy, Some(source.base_url().to_string())),
        snapshot,
    );

    let report = CanonicalValidator::validate(&canonical)?;
    report.log_warnings();

    tokio::fs::create_dir_all(&output).await?;

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S");
    let filepath = output.join(format!("{}_legacy.json", timestamp));

    let json = serde_json::to_string_pretty(&canonical)?;
    tokio::fs::write(&filepath, json).await?;

    tracing::info!("Exported to: {}", filepath.display());
    tracing::info!("Review and edit if needed, then import with:");
    tracing::info!("   festival-import canonical {}", filepath.display());

    Ok(())
}

async fn handle_canonical_import(
    file: PathBuf,
    validate_only: bool,
    database_url: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let canonical = FileSource::new(file).load().await?;

    tracing::info!("Validating canonical format...");
    let validation_report = CanonicalValidator::validate(&canonical)?;
    validation_report.log_warnings();
    tracing::info!(
        "Validation successful ({} warning(s))",
        validation_report.warnings.len()
    );

    if validate_only {
        return Ok(());
    }

    let database_url = database_url.ok_or("DATABASE_URL or --database-url is required to import")?;

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    let transformer = CanonicalTransformer::new(&pool);
    let summary = transformer.import_to_database(canonical).await?;

    tracing::info!(
        "Import completed: {} teams, {} candidates, {} programmes, {} results",
        summary.teams,
        summary.candidates,
        summary.programmes,
        summary.results
    );

    Ok(())
}

async fn handle_standings(
    file: PathBuf,
    category: CategoryFilter,
    top: Option<usize>,
    points: PositionPoints,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = FileSource::new(file).fetch_snapshot().await?;

    let classifier = TeamCodeClassifier::default();
    let context = ScoringContext::new(points, &classifier);
    let aggregation = aggregate(&snapshot, &context);
    aggregation.log_warnings();

    let ranked = compose(&aggregation.teams, category);
    let shown = top.unwrap_or(ranked.len()).min(ranked.len());

    println!(
        "{:>4}  {:<8} {:<24} {:>10} {:>10} {:>10} {:>8}",
        "Rank", "Code", "Team", "Points", "Arts", "Sports", "Results"
    );
    for team in &ranked[..shown] {
        println!(
            "{:>4}  {:<8} {:<24} {:>10} {:>10} {:>10} {:>8}",
            team.rank,
            team.team_code,
            team.name,
            team.points,
            team.arts_points,
            team.sports_points,
            team.results
        );
    }

    if ranked.is_empty() {
        tracing::warn!("No team has scored yet");
    }

    Ok(())
}
