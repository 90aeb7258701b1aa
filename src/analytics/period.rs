//! Calendar buckets for transaction filtering
//!
//! Classifies a timestamp into a named time window relative to "now".
//! Day and month are calendar buckets (they match the user's mental model
//! of "today" and "this month"); week and bimester are rolling windows
//! anchored on "now", which reads better for recent-activity views.

use chrono::{DateTime, Datelike, Duration, Months, Utc};

use crate::models::Transaction;

/// A named calendar or rolling time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Same calendar date as "now" (not a rolling 24h window)
    Day,
    /// Rolling window: the 7 days up to "now", inclusive lower bound
    Week,
    /// Same calendar month and year as "now"
    Month,
    /// Rolling window: the 2 calendar months up to "now"
    Bimester,
}

impl Period {
    /// Check whether `date` falls inside this bucket relative to `now`
    ///
    /// Rolling windows check only the lower bound, so future-dated
    /// transactions pass. The bimester cutoff is a calendar-month
    /// subtraction (31 Mar − 2 months clamps to 31 Jan / 28-29 Feb as
    /// chrono defines it), not a flat 60 days, and the cutoff instant
    /// itself is included.
    pub fn contains(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Self::Day => date.date_naive() == now.date_naive(),
            Self::Week => date >= now - Duration::days(7),
            Self::Month => date.year() == now.year() && date.month() == now.month(),
            Self::Bimester => match now.checked_sub_months(Months::new(2)) {
                Some(cutoff) => date >= cutoff,
                // `now` is out of chrono's representable range; nothing sane
                // to compare against, so let everything through
                None => true,
            },
        }
    }

    /// Borrow the transactions that fall inside this bucket
    pub fn filter<'a>(
        &self,
        transactions: &'a [Transaction],
        now: DateTime<Utc>,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|t| self.contains(t.date, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_day_is_calendar_date_not_rolling() {
        let now = at(2025, 6, 15, 8);
        assert!(Period::Day.contains(at(2025, 6, 15, 23), now));
        assert!(Period::Day.contains(at(2025, 6, 15, 0), now));
        // 20 hours ago, but a different calendar date
        assert!(!Period::Day.contains(at(2025, 6, 14, 12), now));
    }

    #[test]
    fn test_week_rolling_inclusive() {
        let now = at(2025, 6, 15, 12);
        assert!(Period::Week.contains(at(2025, 6, 10, 0), now));
        // Exactly 7 days ago: inclusive lower bound
        assert!(Period::Week.contains(at(2025, 6, 8, 12), now));
        assert!(!Period::Week.contains(at(2025, 6, 8, 11), now));
        // No upper bound: future-dated transactions pass
        assert!(Period::Week.contains(at(2025, 7, 1, 0), now));
    }

    #[test]
    fn test_month_is_calendar_month() {
        let now = at(2025, 6, 15, 12);
        assert!(Period::Month.contains(at(2025, 6, 1, 0), now));
        assert!(Period::Month.contains(at(2025, 6, 30, 23), now));
        assert!(!Period::Month.contains(at(2025, 5, 31, 23), now));
        // Same month, previous year
        assert!(!Period::Month.contains(at(2024, 6, 15, 12), now));
    }

    #[test]
    fn test_bimester_calendar_anchored() {
        let now = at(2025, 6, 15, 12);
        // Boundary date included
        assert!(Period::Bimester.contains(at(2025, 4, 15, 12), now));
        assert!(!Period::Bimester.contains(at(2025, 4, 15, 11), now));
        assert!(Period::Bimester.contains(at(2025, 5, 1, 0), now));
    }

    #[test]
    fn test_bimester_month_end_clamping() {
        // 31 Mar − 2 months clamps to 31 Jan
        let now = at(2025, 3, 31, 0);
        assert!(Period::Bimester.contains(at(2025, 1, 31, 0), now));
        assert!(!Period::Bimester.contains(at(2025, 1, 30, 23), now));

        // 30 Apr − 2 months clamps to 28 Feb (2025 is not a leap year),
        // which a flat 60-day window would place differently
        let now = at(2025, 4, 30, 0);
        assert!(Period::Bimester.contains(at(2025, 2, 28, 0), now));
        assert!(!Period::Bimester.contains(at(2025, 2, 27, 23), now));
    }

    #[test]
    fn test_filter() {
        let now = at(2025, 6, 15, 12);
        let txns = vec![
            Transaction::expense_at(Money::from_reais(10), "Lazer", at(2025, 6, 15, 9)).unwrap(),
            Transaction::expense_at(Money::from_reais(20), "Lazer", at(2025, 6, 1, 9)).unwrap(),
            Transaction::expense_at(Money::from_reais(30), "Lazer", at(2025, 3, 1, 9)).unwrap(),
        ];

        assert_eq!(Period::Day.filter(&txns, now).len(), 1);
        assert_eq!(Period::Month.filter(&txns, now).len(), 2);
        assert_eq!(Period::Bimester.filter(&txns, now).len(), 2);
    }
}
