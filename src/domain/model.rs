use serde::{Deserialize, Serialize};

/// Summary statistics computed over the profile's satisfaction scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub count: usize,
    pub mean: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub std_dev: f64,
}

/// A rendered project header together with the statistics it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tagline {
    pub text: String,
    pub stats: ScoreStats,
}
