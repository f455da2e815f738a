//! Calendar features the classifier was trained on.

use chrono::{Datelike, NaiveDate};

/// Categorical/numeric features derived from a match date.
///
/// Weekday numbering follows the classifier's training data: 0 = Sunday
/// through 6 = Saturday. The season-half flag encodes the league calendar,
/// August through May, with August–January as the first half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFeatures {
    pub month: u32,
    pub weekday: u32,
    pub year: i32,
    pub is_weekend: bool,
    pub is_first_half_season: bool,
}

impl DateFeatures {
    /// Encode a calendar date. Works from year/month/day components, so the
    /// result never shifts across a timezone boundary.
    pub fn encode(date: NaiveDate) -> Self {
        let month = date.month();
        let weekday = date.weekday().num_days_from_sunday();
        Self {
            month,
            weekday,
            year: date.year(),
            is_weekend: weekday == 0 || weekday == 6,
            is_first_half_season: month >= 8 || month <= 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn encodes_a_saturday_in_march() {
        let features = DateFeatures::encode(date(2025, 3, 15));
        assert_eq!(features.month, 3);
        assert_eq!(features.weekday, 6);
        assert_eq!(features.year, 2025);
        assert!(features.is_weekend);
        assert!(!features.is_first_half_season);
    }

    #[test]
    fn weekend_flag_matches_weekday_across_years() {
        for y in 2020..=2026 {
            for ordinal in 1..=365 {
                let Some(d) = NaiveDate::from_yo_opt(y, ordinal) else {
                    continue;
                };
                let features = DateFeatures::encode(d);
                assert_eq!(
                    features.is_weekend,
                    features.weekday == 0 || features.weekday == 6,
                    "mismatch on {d}"
                );
            }
        }
    }

    #[test]
    fn leap_day_encodes_consistently() {
        // 2024-02-29 was a Thursday.
        let features = DateFeatures::encode(date(2024, 2, 29));
        assert_eq!(features.weekday, 4);
        assert!(!features.is_weekend);
        assert!(!features.is_first_half_season);
    }

    #[test]
    fn season_half_boundaries() {
        assert!(!DateFeatures::encode(date(2024, 7, 31)).is_first_half_season);
        assert!(DateFeatures::encode(date(2024, 8, 1)).is_first_half_season);
        assert!(DateFeatures::encode(date(2025, 1, 31)).is_first_half_season);
        assert!(!DateFeatures::encode(date(2025, 2, 1)).is_first_half_season);
    }

    #[test]
    fn season_half_over_all_months() {
        for m in 1..=12u32 {
            let features = DateFeatures::encode(date(2024, m, 15));
            assert_eq!(features.is_first_half_season, m >= 8 || m == 1);
        }
    }
}
