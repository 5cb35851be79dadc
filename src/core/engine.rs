use crate::core::tagline::TaglineBuilder;
use crate::domain::model::Tagline;
use crate::domain::ports::{ProfileProvider, Speech};
use crate::utils::error::Result;

/// Drives one report run: render the tagline, print it, and optionally
/// read it aloud through the attached speech collaborator.
pub struct ReportEngine<C: ProfileProvider> {
    profile: C,
    speech: Option<Box<dyn Speech>>,
}

impl<C: ProfileProvider> ReportEngine<C> {
    pub fn new(profile: C, speech: Option<Box<dyn Speech>>) -> Self {
        Self { profile, speech }
    }

    pub fn run(&self) -> Result<Tagline> {
        tracing::info!("Composing tagline header");
        let tagline = TaglineBuilder::new(&self.profile).render()?;

        println!("{}", tagline.text);

        if let Some(speech) = &self.speech {
            tracing::info!("Reading tagline aloud via {}", speech.engine_name());
            // Speech is best-effort: a failing engine degrades to print-only.
            if let Err(e) = speech.speak(&tagline.text) {
                tracing::warn!("Text-to-speech skipped: {}", e);
            }
        }

        Ok(tagline)
    }
}
