//! Validation utilities for the Smart Farming Advisor

/// Tolerance for probability-vector normalization checks
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Normalize a free-form label for case-insensitive table lookups
pub fn normalize_label(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Validate that a slice is a probability vector: every component finite
/// and non-negative, summing to 1 within tolerance
pub fn validate_probability_vector(probabilities: &[f64]) -> Result<(), &'static str> {
    if probabilities.is_empty() {
        return Err("Probability vector is empty");
    }
    for p in probabilities {
        if !p.is_finite() {
            return Err("Probability vector contains a non-finite component");
        }
        if *p < 0.0 {
            return Err("Probability vector contains a negative component");
        }
    }
    let sum: f64 = probabilities.iter().sum();
    if (sum - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
        return Err("Probability vector does not sum to 1");
    }
    Ok(())
}

/// Validate a computed water amount: finite and non-negative
pub fn validate_water_amount(inches_per_week: f64) -> Result<(), &'static str> {
    if !inches_per_week.is_finite() {
        return Err("Water amount must be finite");
    }
    if inches_per_week < 0.0 {
        return Err("Water amount cannot be negative");
    }
    Ok(())
}
