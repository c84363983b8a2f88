use std::fmt::Write as _;

use tracing::debug;

use crate::analytics::{
    DerivedStatistics, StatusCount, TrendPoint, WeeklyBucket, recent_hours_trend,
    status_distribution, weekly_breakdown,
};
use crate::data::Dataset;
use crate::model::employee::Employee;
use crate::model::performance::PerformanceReview;
use crate::utils::format::{format_date_long, format_date_short, format_hours_short, format_time};
use crate::utils::stats_cache;
use crate::view::state::UiState;
use crate::view::table::{AttendanceQuery, TablePage, paginate};

/// Assembles every dashboard section into one printable document.
pub fn render(
    dataset: &Dataset,
    ui: &UiState,
    query: &AttendanceQuery,
    trend_window: usize,
) -> String {
    let stats = stats_cache::summary_for(dataset);
    let page = paginate(&dataset.attendance, query);
    let weekly = weekly_breakdown(&dataset.attendance);
    let distribution = status_distribution(&dataset.attendance);
    let trend = recent_hours_trend(&dataset.attendance, trend_window);

    debug!(
        records = dataset.attendance.len(),
        buckets = weekly.len(),
        trend_points = trend.len(),
        "rendering dashboard sections"
    );

    let mut out = String::new();
    let first_name = dataset.employee.name.split(' ').next().unwrap_or_default();
    let _ = writeln!(out, "== Employee Dashboard ==");
    let _ = writeln!(out, "Welcome back, {first_name}!");
    if let Some(banner) = &ui.success_message {
        let _ = writeln!(out, "[{banner}]");
    }
    out.push('\n');

    out.push_str(&render_stat_cards(&stats));
    out.push('\n');
    out.push_str(&render_profile(&dataset.employee));
    out.push('\n');
    out.push_str(&render_table(&page));
    out.push('\n');
    out.push_str(&render_weekly(&weekly));
    out.push('\n');
    out.push_str(&render_distribution(&distribution));
    out.push('\n');
    out.push_str(&render_trend(&trend));
    out.push('\n');
    out.push_str(&render_reviews(&dataset.reviews));
    out
}

pub fn render_stat_cards(stats: &DerivedStatistics) -> String {
    format!(
        "Days Present: {} | Attendance Rate: {}% | Avg Hours/Day: {}h | Days Absent: {}\n",
        stats.total_present,
        stats.attendance_rate,
        format_hours_short(stats.avg_hours_per_day),
        stats.total_absent,
    )
}

pub fn render_profile(employee: &Employee) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} — {}", employee.name, employee.role);
    let _ = writeln!(out, "{} | {}", employee.department, employee.location);
    let _ = writeln!(
        out,
        "{} | {} | Joined {}",
        employee.email,
        employee.phone,
        format_date_long(employee.joined_on)
    );
    out
}

pub fn render_table(page: &TablePage<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Attendance History");

    if page.total == 0 {
        let _ = writeln!(out, "No records match your search criteria.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<14} {:>9} {:>10} {:>12}  {}",
        "Date", "Check In", "Check Out", "Total Hours", "Status"
    );
    for record in &page.rows {
        let check_in = record
            .check_in
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let check_out = record
            .check_out
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let hours = if record.total_minutes > 0 {
            format_time(record.total_minutes)
        } else {
            "-".to_string()
        };
        let _ = writeln!(
            out,
            "{:<14} {:>9} {:>10} {:>12}  {}",
            format_date_long(record.date),
            check_in,
            check_out,
            hours,
            record.status,
        );
    }

    if page.total_pages > 1 {
        let _ = writeln!(
            out,
            "Showing {} to {} of {} results (page {}/{})",
            page.first_row_index(),
            page.last_row_index(),
            page.total,
            page.page,
            page.total_pages,
        );
    }
    out
}

pub fn render_weekly(buckets: &[WeeklyBucket]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Weekly Attendance");
    for bucket in buckets {
        let _ = writeln!(
            out,
            "{:<7} present {:>2} | late {:>2} | absent {:>2} | leave {:>2}",
            bucket.week, bucket.present, bucket.late, bucket.absent, bucket.leave,
        );
    }
    out
}

pub fn render_distribution(slices: &[StatusCount]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Distribution");
    let total: u32 = slices.iter().map(|s| s.count).sum();
    for slice in slices {
        let percent = (f64::from(slice.count) / f64::from(total) * 100.0).round();
        let _ = writeln!(out, "{}: {} ({percent:.0}%)", slice.label, slice.count);
    }
    out
}

pub fn render_trend(points: &[TrendPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Hours Trend");
    for point in points {
        let _ = writeln!(
            out,
            "{:<7} {}h",
            format_date_short(point.date),
            format_hours_short(point.hours)
        );
    }
    out
}

pub fn render_reviews(reviews: &[PerformanceReview]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Performance Reviews");
    for review in reviews {
        let filled = review.star_count() as usize;
        let stars = "★".repeat(filled) + &"☆".repeat(5 - filled);
        let _ = writeln!(
            out,
            "{:<8} {:>3}  {}  [{}] — {}",
            review.period, review.score, stars, review.rating, review.reviewer,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::attendance::{AttendanceRecord, AttendanceStatus};

    #[test]
    fn stat_cards_use_one_decimal_hours() {
        let line = render_stat_cards(&DerivedStatistics {
            total_present: 2,
            total_absent: 1,
            attendance_rate: 67,
            avg_hours_per_day: 7.75,
        });
        assert_eq!(
            line,
            "Days Present: 2 | Attendance Rate: 67% | Avg Hours/Day: 7.8h | Days Absent: 1\n"
        );
    }

    #[test]
    fn empty_table_shows_the_no_match_message() {
        let page = paginate(
            &[],
            &AttendanceQuery {
                search: Some("nothing".into()),
                ..Default::default()
            },
        );
        let text = render_table(&page);
        assert!(text.contains("No records match your search criteria."));
    }

    #[test]
    fn table_rows_dash_out_missing_times_and_hours() {
        let records = vec![AttendanceRecord {
            date: NaiveDate::from_ymd_opt(2026, 6, 9).unwrap(),
            check_in: None,
            check_out: None,
            total_minutes: 0,
            status: AttendanceStatus::Absent,
        }];
        let page = paginate(&records, &AttendanceQuery::default());
        let text = render_table(&page);
        assert!(text.contains("Jun 9, 2026"));
        assert!(text.contains(" - "));
        assert!(!text.contains("Showing"), "single page has no footer");
    }

    #[test]
    fn distribution_percentages_round_like_the_pie_labels() {
        let slices = vec![
            StatusCount {
                label: "Present".into(),
                count: 2,
            },
            StatusCount {
                label: "Absent".into(),
                count: 1,
            },
        ];
        let text = render_distribution(&slices);
        assert!(text.contains("Present: 2 (67%)"));
        assert!(text.contains("Absent: 1 (33%)"));
    }

    #[test]
    fn review_line_carries_rounded_stars() {
        use crate::model::performance::{PerformanceReview, Rating};

        let text = render_reviews(&[PerformanceReview {
            id: "rev-1".into(),
            period: "Q1 2026".into(),
            score: 3.4,
            rating: Rating::Yellow,
            reviewer: "Sara Malik".into(),
        }]);
        assert!(text.contains("★★★☆☆"));
        assert!(text.contains("[Yellow]"));
    }
}
