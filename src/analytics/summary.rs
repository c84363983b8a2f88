use serde::Serialize;

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};

/// Flat summary over one employee's attendance history. Recomputed from the
/// record slice on demand; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedStatistics {
    pub total_present: u32,
    pub total_absent: u32,
    /// Integer percent in 0..=100. Reports 0 when there are no present or
    /// absent records to divide by.
    pub attendance_rate: u32,
    /// Full-precision average; one-decimal rounding happens at display time.
    pub avg_hours_per_day: f64,
}

pub fn summary_statistics(records: &[AttendanceRecord]) -> DerivedStatistics {
    let mut present = 0u32;
    let mut late = 0u32;
    let mut absent = 0u32;
    let mut worked_minutes = 0u64;

    for record in records {
        match record.status {
            AttendanceStatus::Present => present += 1,
            AttendanceStatus::Late => late += 1,
            AttendanceStatus::Absent => absent += 1,
            AttendanceStatus::Leave | AttendanceStatus::Weekend => {}
        }
        if record.total_minutes > 0 {
            worked_minutes += u64::from(record.total_minutes);
        }
    }

    let total_present = present + late;

    // The denominator is the status-based working-day count, not the number
    // of records that logged minutes: a present day with zero logged minutes
    // still dilutes the average.
    let avg_minutes = if total_present > 0 {
        worked_minutes as f64 / f64::from(total_present)
    } else {
        0.0
    };

    let attendance_rate = if total_present + absent > 0 {
        (f64::from(total_present) / f64::from(total_present + absent) * 100.0).round() as u32
    } else {
        0
    };

    DerivedStatistics {
        total_present,
        total_absent: absent,
        attendance_rate,
        avg_hours_per_day: avg_minutes / 60.0,
    }
}
