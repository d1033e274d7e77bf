//! Breakpoint statistics over embedding distances
//!
//! A chunk boundary is placed wherever the cosine distance between
//! consecutive sentence embeddings jumps above a cutoff. The cutoff comes
//! from one of three statistics over the distance distribution, selected by
//! [`BreakpointThresholdType`].

use docsplit_config::BreakpointThresholdType;

/// Cosine similarity of two vectors; 0.0 when either has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Linearly interpolated percentile, `pct` in [0, 100].
pub fn percentile(values: &[f32], pct: f64) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = pct.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let weight = (rank - lo as f64) as f32;
    sorted[lo] + (sorted[hi] - sorted[lo]) * weight
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// Population standard deviation.
fn std_dev(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / values.len() as f32;
    variance.sqrt()
}

/// Distance cutoff above which a boundary is placed.
pub fn breakpoint_threshold(
    distances: &[f32],
    threshold_type: BreakpointThresholdType,
    amount: f64,
) -> f32 {
    match threshold_type {
        BreakpointThresholdType::Percentile => percentile(distances, amount),
        BreakpointThresholdType::StandardDeviation => {
            mean(distances) + amount as f32 * std_dev(distances)
        }
        BreakpointThresholdType::Interquartile => {
            let iqr = percentile(distances, 75.0) - percentile(distances, 25.0);
            mean(distances) + amount as f32 * iqr
        }
    }
}
