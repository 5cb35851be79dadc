pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::Profile;
pub use core::engine::ReportEngine;
pub use core::selfcheck::run_self_check;
pub use core::stats::compute_stats;
pub use core::tagline::TaglineBuilder;
pub use domain::model::{ScoreStats, Tagline};
pub use domain::ports::{ProfileProvider, Speech};
pub use utils::error::{Result, TaglineError};

/// Crate version, interpolated into the default tagline.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Renders the tagline from the built-in profile.
pub fn get_tagline() -> Result<Tagline> {
    let profile = Profile::default();
    TaglineBuilder::new(&profile).render()
}
