use chrono::Datelike;
use serde::Serialize;

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};

/// Per-status counts for one "Week <n>" label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyBucket {
    pub week: String,
    pub present: u32,
    pub late: u32,
    pub absent: u32,
    pub leave: u32,
}

impl WeeklyBucket {
    fn new(week: String) -> Self {
        Self {
            week,
            present: 0,
            late: 0,
            absent: 0,
            leave: 0,
        }
    }
}

/// Buckets non-weekend records by week-of-month, `ceil(day_of_month / 7)`.
///
/// Buckets are emitted in first-seen order, and records from different
/// calendar months sharing a week number collapse into one bucket; both
/// reproduce the dashboard's observed chart output.
pub fn weekly_breakdown(records: &[AttendanceRecord]) -> Vec<WeeklyBucket> {
    let mut buckets: Vec<WeeklyBucket> = Vec::new();

    for record in records {
        if record.status == AttendanceStatus::Weekend {
            continue;
        }

        let week = format!("Week {}", (record.date.day() + 6) / 7);
        let idx = match buckets.iter().position(|b| b.week == week) {
            Some(idx) => idx,
            None => {
                buckets.push(WeeklyBucket::new(week));
                buckets.len() - 1
            }
        };

        match record.status {
            AttendanceStatus::Present => buckets[idx].present += 1,
            AttendanceStatus::Late => buckets[idx].late += 1,
            AttendanceStatus::Absent => buckets[idx].absent += 1,
            AttendanceStatus::Leave => buckets[idx].leave += 1,
            AttendanceStatus::Weekend => {}
        }
    }

    buckets
}
