use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Arts,
    Sports,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arts => "arts",
            Self::Sports => "sports",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arts" => Ok(Self::Arts),
            "sports" => Ok(Self::Sports),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// Only arts programmes carry a subcategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Subcategory {
    Stage,
    NonStage,
}

impl Subcategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stage => "stage",
            Self::NonStage => "non-stage",
        }
    }
}

impl FromStr for Subcategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stage" => Ok(Self::Stage),
            "non-stage" | "nonstage" | "non_stage" => Ok(Self::NonStage),
            other => Err(format!("unknown subcategory '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PositionType {
    Individual,
    Group,
    General,
}

impl PositionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Group => "group",
            Self::General => "general",
        }
    }
}

impl FromStr for PositionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "individual" => Ok(Self::Individual),
            "group" => Ok(Self::Group),
            "general" => Ok(Self::General),
            other => Err(format!("unknown position type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Programme {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub subcategory: Option<Subcategory>,
    pub section: Section,
    pub position_type: PositionType,
}

impl Programme {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        let id = id.into();
        Self {
            code: id.clone(),
            id,
            name: name.into(),
            category,
            subcategory: None,
            section: Section::General,
            position_type: PositionType::Individual,
        }
    }

    pub fn with_subcategory(mut self, subcategory: Subcategory) -> Self {
        self.subcategory = Some(subcategory);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }
}
