use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A festival team. `code` is the join key used by candidates and results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    /// Denormalized total kept by the admin tools; standings never read it.
    #[serde(default, with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub points: Decimal,
    #[serde(default)]
    pub members: i32,
}

impl Team {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            color: None,
            points: Decimal::ZERO,
            members: 0,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
