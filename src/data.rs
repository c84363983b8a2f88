use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};

use crate::model::attendance::AttendanceRecord;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::performance::PerformanceReview;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

/// Everything the dashboard shows, loaded once and read-only afterwards.
/// `revision` is unique per load and keys the derived-statistics cache.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub revision: u64,
    pub employee: Employee,
    pub attendance: Vec<AttendanceRecord>,
    pub reviews: Vec<PerformanceReview>,
    pub departments: Vec<Department>,
}

/// Parses the embedded fixture documents. The attendance sequence arrives
/// date-ascending with unique dates and is treated as immutable for the
/// session.
pub fn load_dataset() -> Result<Dataset> {
    let employee: Employee =
        serde_json::from_str(include_str!("../fixtures/employee_profile.json"))
            .context("employee profile fixture")?;
    let attendance: Vec<AttendanceRecord> =
        serde_json::from_str(include_str!("../fixtures/attendance.json"))
            .context("attendance fixture")?;
    let reviews: Vec<PerformanceReview> =
        serde_json::from_str(include_str!("../fixtures/performance_reviews.json"))
            .context("performance reviews fixture")?;
    let departments: Vec<Department> =
        serde_json::from_str(include_str!("../fixtures/departments.json"))
            .context("departments fixture")?;

    log::info!(
        "Fixture load complete: {} attendance records, {} reviews, {} departments",
        attendance.len(),
        reviews.len(),
        departments.len()
    );

    Ok(Dataset {
        revision: NEXT_REVISION.fetch_add(1, Ordering::Relaxed),
        employee,
        attendance,
        reviews,
        departments,
    })
}
