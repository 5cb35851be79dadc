use crate::domain::ports::ProfileProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty, validate_scores, validate_year_order, Validate,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Project metadata and the fixed score dataset, constructed once per run.
/// Any field can be overridden from a TOML profile file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub project_name: String,
    pub author: String,
    pub motto: String,
    pub location: String,
    pub version: String,
    pub year_started: i32,
    pub current_year: i32,
    pub services: Vec<String>,
    pub satisfaction_scores: Vec<f64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            project_name: "Aurora Analytics".to_string(),
            author: "A. Rivera".to_string(),
            motto: "Measure twice.".to_string(),
            location: "Dallas, TX".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            year_started: 2020,
            current_year: chrono::Utc::now().year(),
            services: vec![
                "Data Analysis".to_string(),
                "Machine Learning".to_string(),
                "Business Intelligence".to_string(),
            ],
            satisfaction_scores: vec![4.8, 4.6, 4.9, 5.0, 4.7],
        }
    }
}

impl Profile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let profile: Profile = toml::from_str(content)?;
        Ok(profile)
    }
}

impl Validate for Profile {
    fn validate(&self) -> Result<()> {
        validate_non_empty("project_name", &self.project_name)?;
        validate_non_empty("author", &self.author)?;
        validate_non_empty("version", &self.version)?;
        validate_scores("satisfaction_scores", &self.satisfaction_scores)?;
        validate_year_order("year_started", self.year_started, self.current_year)?;
        Ok(())
    }
}

impl ProfileProvider for Profile {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn motto(&self) -> &str {
        &self.motto
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn year_started(&self) -> i32 {
        self.year_started
    }

    fn current_year(&self) -> i32 {
        self.current_year
    }

    fn services(&self) -> &[String] {
        &self.services
    }

    fn scores(&self) -> &[f64] {
        &self.satisfaction_scores
    }
}
