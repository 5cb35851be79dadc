pub mod engine;
pub mod selfcheck;
pub mod stats;
pub mod tagline;

pub use crate::domain::model::{ScoreStats, Tagline};
pub use crate::domain::ports::{ProfileProvider, Speech};
pub use crate::utils::error::Result;
