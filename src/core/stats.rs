use crate::domain::model::ScoreStats;
use crate::utils::error::{Result, TaglineError};

/// Computes count, mean, minimum, maximum and sample standard deviation
/// over a non-empty slice of scores.
pub fn compute_stats(values: &[f64]) -> Result<ScoreStats> {
    if values.is_empty() {
        return Err(TaglineError::EmptyInputError);
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;
    let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);
    let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Sample standard deviation (n - 1); a single observation has no spread.
    let std_dev = if count > 1 {
        let squared_diffs: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (squared_diffs / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    Ok(ScoreStats {
        count,
        mean,
        minimum,
        maximum,
        std_dev,
    })
}
