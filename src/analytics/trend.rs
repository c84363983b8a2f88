use chrono::NaiveDate;
use serde::Serialize;

use crate::model::attendance::AttendanceRecord;

pub const DEFAULT_TREND_WINDOW: usize = 14;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Hours worked, rounded to one decimal.
    pub hours: f64,
}

/// Last `window_size` records with logged minutes, oldest first.
///
/// The window counts qualifying records, not calendar days: with absences in
/// between, 14 points may span well over two weeks.
pub fn recent_hours_trend(records: &[AttendanceRecord], window_size: usize) -> Vec<TrendPoint> {
    let qualifying: Vec<&AttendanceRecord> =
        records.iter().filter(|r| r.total_minutes > 0).collect();
    let start = qualifying.len().saturating_sub(window_size);

    qualifying[start..]
        .iter()
        .map(|r| TrendPoint {
            date: r.date,
            hours: (f64::from(r.total_minutes) / 60.0 * 10.0).round() / 10.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Days;

    use super::*;
    use crate::model::attendance::AttendanceStatus;

    fn records(minutes: &[u32]) -> Vec<AttendanceRecord> {
        let first = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        minutes
            .iter()
            .enumerate()
            .map(|(i, &m)| AttendanceRecord {
                date: first.checked_add_days(Days::new(i as u64)).unwrap(),
                check_in: None,
                check_out: None,
                total_minutes: m,
                status: if m > 0 {
                    AttendanceStatus::Present
                } else {
                    AttendanceStatus::Absent
                },
            })
            .collect()
    }

    #[test]
    fn zero_minute_days_never_appear() {
        let trend = recent_hours_trend(&records(&[480, 0, 450, 0, 510]), 14);
        assert_eq!(trend.len(), 3);
        assert!(trend.iter().all(|p| p.hours > 0.0));
    }

    #[test]
    fn window_bounds_the_tail_of_qualifying_records() {
        let minutes: Vec<u32> = (0..20).map(|i| 400 + i).collect();
        let all = records(&minutes);
        let trend = recent_hours_trend(&all, 14);
        assert_eq!(trend.len(), 14);
        // Oldest-first ordering, starting at the 7th qualifying record.
        assert_eq!(trend[0].date, all[6].date);
        assert_eq!(trend.last().unwrap().date, all[19].date);
    }

    #[test]
    fn hours_round_to_one_decimal() {
        let trend = recent_hours_trend(&records(&[125]), 14);
        assert_eq!(trend[0].hours, 2.1);

        let trend = recent_hours_trend(&records(&[465]), 14);
        assert_eq!(trend[0].hours, 7.8);
    }

    #[test]
    fn short_histories_pass_through_whole() {
        let trend = recent_hours_trend(&records(&[480, 450]), 14);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].hours, 8.0);
        assert_eq!(trend[1].hours, 7.5);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(recent_hours_trend(&[], 14).is_empty());
        assert!(recent_hours_trend(&records(&[0, 0]), 14).is_empty());
    }
}
