use serde::Serialize;

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};

/// Chart slice order is fixed; weekend days never chart.
const CHART_ORDER: [AttendanceStatus; 4] = [
    AttendanceStatus::Present,
    AttendanceStatus::Late,
    AttendanceStatus::Absent,
    AttendanceStatus::Leave,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub label: String,
    pub count: u32,
}

/// Counts records per chartable status, dropping empty slices.
pub fn status_distribution(records: &[AttendanceRecord]) -> Vec<StatusCount> {
    CHART_ORDER
        .iter()
        .filter_map(|&status| {
            let count = records.iter().filter(|r| r.status == status).count() as u32;
            (count > 0).then(|| StatusCount {
                label: status.to_string(),
                count,
            })
        })
        .collect()
}
