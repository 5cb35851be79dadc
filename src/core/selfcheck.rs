use crate::core::stats::compute_stats;
use crate::core::tagline::TaglineBuilder;
use crate::domain::ports::ProfileProvider;
use crate::utils::error::{Result, TaglineError};

fn check(condition: bool, description: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(TaglineError::SelfCheckError {
            check: description.to_string(),
        })
    }
}

/// Recomputes the statistics and re-renders the tagline, verifying the
/// invariants the rest of the crate relies on.
pub fn run_self_check<C: ProfileProvider>(profile: &C) -> Result<()> {
    let stats = compute_stats(profile.scores())?;

    check(
        stats.count == profile.scores().len(),
        "score count does not match the dataset length",
    )?;
    check(
        stats.minimum <= stats.mean && stats.mean <= stats.maximum,
        "mean lies outside [minimum, maximum]",
    )?;
    check(
        profile.year_started() <= profile.current_year(),
        "year_started is after current_year",
    )?;

    let tagline = TaglineBuilder::new(profile).render()?;
    check(
        tagline.text.contains(profile.project_name()),
        "tagline is missing the project name",
    )?;
    check(
        tagline.text.contains(profile.author()),
        "tagline is missing the author",
    )?;
    check(
        tagline.text.contains(profile.version()),
        "tagline is missing the version",
    )?;

    let again = TaglineBuilder::new(profile).render()?;
    check(
        again.text == tagline.text,
        "repeated rendering produced different text",
    )?;

    tracing::info!("Self-check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EmptyScores;

    impl ProfileProvider for EmptyScores {
        fn project_name(&self) -> &str {
            "Aurora Analytics"
        }
        fn author(&self) -> &str {
            "A. Rivera"
        }
        fn motto(&self) -> &str {
            ""
        }
        fn location(&self) -> &str {
            ""
        }
        fn version(&self) -> &str {
            "0.1.0"
        }
        fn year_started(&self) -> i32 {
            2020
        }
        fn current_year(&self) -> i32 {
            2025
        }
        fn services(&self) -> &[String] {
            &[]
        }
        fn scores(&self) -> &[f64] {
            &[]
        }
    }

    #[test]
    fn test_self_check_rejects_empty_scores() {
        let result = run_self_check(&EmptyScores);
        assert!(matches!(result, Err(TaglineError::EmptyInputError)));
    }
}
