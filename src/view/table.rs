use crate::model::attendance::{AttendanceRecord, AttendanceStatus};

const DEFAULT_PER_PAGE: u32 = 10;

/// Search / filter / pagination inputs for the attendance history table.
#[derive(Debug, Clone, Default)]
pub struct AttendanceQuery {
    /// Case-insensitive substring match against the ISO date or status label.
    pub search: Option<String>,
    /// `None` means "all".
    pub status: Option<AttendanceStatus>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// One page of filtered rows plus the footer metadata.
#[derive(Debug, Clone)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a AttendanceRecord>,
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
    pub total_pages: u32,
}

impl TablePage<'_> {
    /// 1-based index of the first row shown, 0 when the page is empty.
    pub fn first_row_index(&self) -> usize {
        if self.rows.is_empty() {
            0
        } else {
            ((self.page - 1) * self.per_page) as usize + 1
        }
    }

    /// 1-based index of the last row shown.
    pub fn last_row_index(&self) -> usize {
        ((self.page as usize - 1) * self.per_page as usize + self.rows.len()).min(self.total)
    }
}

pub fn filter_records<'a>(
    records: &'a [AttendanceRecord],
    query: &AttendanceQuery,
) -> Vec<&'a AttendanceRecord> {
    let needle = query
        .search
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    records
        .iter()
        .filter(|r| {
            let matches_search = needle.is_empty()
                || r.date.to_string().contains(&needle)
                || r.status.to_string().to_lowercase().contains(&needle);
            let matches_status = query.status.map_or(true, |s| s == r.status);
            matches_search && matches_status
        })
        .collect()
}

/// Filters, then slices out the requested 1-based page. Out-of-range pages
/// come back with empty rows, never an error.
pub fn paginate<'a>(records: &'a [AttendanceRecord], query: &AttendanceQuery) -> TablePage<'a> {
    let filtered = filter_records(records, query);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE).max(1);
    let page = query.page.unwrap_or(1).max(1);
    let total = filtered.len();
    let total_pages = (total as u32).div_ceil(per_page);

    let start = ((page - 1) * per_page) as usize;
    let rows: Vec<&AttendanceRecord> = filtered
        .into_iter()
        .skip(start)
        .take(per_page as usize)
        .collect();

    TablePage {
        rows,
        page,
        per_page,
        total,
        total_pages,
    }
}

/// Sorted, deduplicated status labels for the filter dropdown.
pub fn available_statuses(records: &[AttendanceRecord]) -> Vec<String> {
    let mut labels: Vec<String> = records
        .iter()
        .map(|r| r.status.to_string().to_lowercase())
        .collect();
    labels.sort();
    labels.dedup();
    labels
}
