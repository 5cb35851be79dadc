use crate::core::stats::compute_stats;
use crate::domain::model::Tagline;
use crate::domain::ports::ProfileProvider;
use crate::utils::error::Result;

const BANNER: &str = "**********************************************************";

/// Renders the project header from a profile and its computed statistics.
pub struct TaglineBuilder<'a, C: ProfileProvider> {
    profile: &'a C,
}

impl<'a, C: ProfileProvider> TaglineBuilder<'a, C> {
    pub fn new(profile: &'a C) -> Self {
        Self { profile }
    }

    pub fn render(&self) -> Result<Tagline> {
        let profile = self.profile;
        let stats = compute_stats(profile.scores())?;
        let years_active = profile.current_year() - profile.year_started();

        let mut lines = Vec::new();
        lines.push(BANNER.to_string());
        lines.push(format!(
            "{} - Project Header (v{})",
            profile.project_name(),
            profile.version()
        ));
        lines.push(BANNER.to_string());
        lines.push(row("Author", profile.author()));
        lines.push(row("Motto", profile.motto()));
        lines.push(row("Location", profile.location()));
        lines.push(row(
            "Years Active",
            format!("{} (since {})", years_active, profile.year_started()),
        ));
        lines.push(row(
            &format!("Services ({})", profile.services().len()),
            profile.services().join(", "),
        ));
        lines.push(row(
            &format!("Satisfaction Scores ({})", stats.count),
            join_scores(profile.scores()),
        ));
        lines.push(row("Minimum Score", stats.minimum));
        lines.push(row("Maximum Score", stats.maximum));
        lines.push(row("Mean Score", format!("{:.2}", stats.mean)));
        lines.push(row("Std Deviation", format!("{:.2}", stats.std_dev)));
        lines.push(BANNER.to_string());

        Ok(Tagline {
            text: lines.join("\n"),
            stats,
        })
    }
}

fn row(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<28}{}", format!("{}:", label), value)
}

fn join_scores(scores: &[f64]) -> String {
    scores
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
