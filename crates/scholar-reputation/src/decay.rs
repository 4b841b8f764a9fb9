// crates/scholar-reputation/src/decay.rs
//
// Time-decay for contribution points.
//
// Contributions lose relevance as they age: a paper or review is worth half
// its points after one half-life, a quarter after two, and so on. Decay never
// increases value with age.

use crate::constants::HALF_LIFE_MONTHS;

/// Exponential decay factor for a contribution `age_months` old, using the
/// platform half-life of 60 months.
///
/// Returns a value in (0.0, 1.0]; exactly 1.0 at age 0 and 0.5 at one
/// half-life. Negative or NaN ages are treated as 0. Past roughly 61,000
/// months the factor bottoms out at `f64::MIN_POSITIVE` instead of
/// underflowing to 0, so it is non-increasing there rather than strictly
/// decreasing.
pub fn decay_factor(age_months: f64) -> f64 {
    half_life_decay(age_months, HALF_LIFE_MONTHS)
}

/// Exponential decay: 2^(-age / half_life).
///
/// # Arguments
/// * `age_months` - Age of the contribution in 30-day months.
/// * `half_life_months` - Age at which the factor reaches 0.5.
///
/// # Returns
/// The decay factor, floored at `f64::MIN_POSITIVE`. A non-positive
/// half-life decays everything to 0.0.
pub fn half_life_decay(age_months: f64, half_life_months: f64) -> f64 {
    if half_life_months <= 0.0 || half_life_months.is_nan() {
        return 0.0;
    }
    let age = sanitize_age(age_months);
    2.0_f64.powf(-age / half_life_months).max(f64::MIN_POSITIVE)
}

/// Apply the platform decay to a point value.
pub fn apply_decay(value: f64, age_months: f64) -> f64 {
    value * decay_factor(age_months)
}

/// Clamp an age into the valid domain: NaN and negatives become 0.
pub(crate) fn sanitize_age(age_months: f64) -> f64 {
    if age_months.is_nan() {
        0.0
    } else {
        age_months.max(0.0)
    }
}
