use anyhow::{Context, Result, anyhow};
use storage::services::PositionPoints;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub api_keys: String,
    /// Points for first/second/third when a result sheet carries none.
    pub position_points: PositionPoints,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("PORT must be a number")?
                .parse()?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            api_keys: std::env::var("API_KEYS").unwrap_or_default(),
            position_points: parse_position_points(
                &std::env::var("DEFAULT_POSITION_POINTS")
                    .context("Cannot load DEFAULT_POSITION_POINTS env variable (e.g. 5,3,1)")?,
            )?,
        })
    }
}

fn parse_position_points(raw: &str) -> Result<PositionPoints> {
    raw.parse::<PositionPoints>()
        .map_err(|e| anyhow!(e))
        .context("DEFAULT_POSITION_POINTS must be first,second,third")
}
