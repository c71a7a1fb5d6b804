use std::time::Duration;

use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod state;

use config::Config;
use middleware::auth::ApiKeys;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::standings::handlers::get_grand_marks,
        features::standings::handlers::get_combined_grand_marks,
        features::standings::handlers::get_checklist_marks,
        features::standings::handlers::get_individual_toppers,
        features::results::handlers::list_results,
        features::results::handlers::list_results_by_status,
        features::results::handlers::get_result,
        features::results::handlers::create_result,
        features::results::handlers::update_result_status,
        features::roster::handlers::list_teams,
        features::roster::handlers::get_team,
        features::roster::handlers::list_candidates,
        features::roster::handlers::list_programmes,
    ),
    components(
        schemas(
            storage::dto::standings::RankedTeamResponse,
            storage::dto::standings::TeamSubtotalResponse,
            storage::dto::standings::RankedIndividualResponse,
            storage::dto::standings::SubcategoryFilter,
            storage::dto::result::CreateResultRequest,
            storage::dto::result::UpdateResultStatusRequest,
            storage::services::CategoryFilter,
            storage::services::SubtotalCategory,
            storage::models::Team,
            storage::models::Candidate,
            storage::models::Programme,
            storage::models::FestivalResult,
            storage::models::Placement,
            storage::models::TeamPlacement,
            storage::models::ResultStatus,
            storage::models::Category,
            storage::models::Subcategory,
            storage::models::Section,
            storage::models::PositionType,
        )
    ),
    tags(
        (name = "standings", description = "Public team and individual rankings"),
        (name = "results", description = "Result sheets"),
        (name = "roster", description = "Teams, candidates and programmes"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting festival standings API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!(
        "Configuration loaded, default position points {}/{}/{}",
        config.position_points.first,
        config.position_points.second,
        config.position_points.third
    );

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);
    if api_keys.is_empty() {
        tracing::warn!("API_KEYS is empty, result writes will be rejected");
    }

    let state = AppState::new(db, config.position_points);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .nest("/api", features::api_routes(api_keys))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    axum::serve(listener, app).await?;

    Ok(())
}
