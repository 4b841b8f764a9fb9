// crates/scholar-core/src/time.rs
//
// Age helpers. Months are approximated as 30 days.

use chrono::{DateTime, Utc};

/// Seconds in one 30-day month.
pub const SECONDS_PER_MONTH: f64 = 30.0 * 24.0 * 60.0 * 60.0;

/// Elapsed months between `created_at` and `now`.
///
/// Timestamps in the future yield 0 rather than a negative age.
pub fn months_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - created_at).num_seconds() as f64;
    (seconds / SECONDS_PER_MONTH).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn thirty_days_is_one_month() {
        let now = Utc::now();
        let then = now - Duration::days(30);
        assert!((months_since(then, now) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sixty_days_is_two_months() {
        let now = Utc::now();
        let then = now - Duration::days(60);
        assert!((months_since(then, now) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn same_instant_is_zero() {
        let now = Utc::now();
        assert_eq!(months_since(now, now), 0.0);
    }

    #[test]
    fn future_timestamp_floors_at_zero() {
        let now = Utc::now();
        let later = now + Duration::days(10);
        assert_eq!(months_since(later, now), 0.0);
    }
}
