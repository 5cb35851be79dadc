use crate::utils::error::{Result, TaglineError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TaglineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_scores(field_name: &str, scores: &[f64]) -> Result<()> {
    if scores.is_empty() {
        return Err(TaglineError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for score in scores {
        if !score.is_finite() {
            return Err(TaglineError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: score.to_string(),
                reason: "Scores must be finite numbers".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_year_order(field_name: &str, year_started: i32, current_year: i32) -> Result<()> {
    if year_started > current_year {
        return Err(TaglineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: year_started.to_string(),
            reason: format!("year_started is after current_year ({})", current_year),
        });
    }
    Ok(())
}
