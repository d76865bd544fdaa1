//! Weighted Shannon entropy over tile weight distributions

/// Weighted Shannon entropy of a domain described by its member weights
///
/// For weights `wᵢ` with total `W`, returns `-Σ (wᵢ/W) · log2(wᵢ/W)`.
/// Empty and singleton domains carry no uncertainty and return 0. Members
/// with non-positive weight contribute nothing, matching the convention
/// `p · log2(p) → 0` as `p → 0`.
pub fn weighted_entropy(weights: &[f64]) -> f64 {
    if weights.len() <= 1 {
        return 0.0;
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    let mut entropy = 0.0;
    for &weight in weights {
        let p = weight / total;
        if p > 0.0 {
            entropy -= p * p.log2();
        }
    }
    entropy
}
