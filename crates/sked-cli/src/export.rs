use anyhow::{Context, Result};
use chrono::NaiveDate;
use sked_core::models::{Event, DATE_FORMAT};
use sked_core::weekly::{group_by_week, week_by_day, WeekDays, WeekWindow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
.schedule-container { max-width: 1200px; margin: 0 auto; }
.day-schedule { margin-bottom: 30px; }
h2 { color: #333; text-align: center; margin-bottom: 20px; }
h3 { color: #666; margin: 15px 0; }
table { border-collapse: collapse; width: 100%; table-layout: fixed; }
th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
th { background-color: #DEB8B8; color: black; font-weight: bold; }
tr:nth-child(even) { background-color: #f5f0f0; }
.time-column { width: 20%; }
.event-column { width: 50%; }
.location-column { width: 30%; }
td { white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
";

/// File name of one week's page, e.g. `schedule_2025-01-06_to_2025-01-12.html`.
pub fn week_file_name(window: &WeekWindow) -> String {
    format!("schedule_{}_to_{}.html", window.start, window.end)
}

/// Writes one page per week that holds at least one event.
///
/// Events without a start date belong to no week and are left out. Returns the
/// written paths in week order.
pub fn export_weeks(events: &[Event], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let groups = group_by_week(events);
    let mut written = Vec::with_capacity(groups.weeks.len());

    for window in groups.windows() {
        let week = week_by_day(events, window.start);
        let path = dir.join(week_file_name(&window));
        fs::write(&path, render_week_html(&week))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    info!(dir = %dir.display(), pages = written.len(), "weekly report exported");
    Ok(written)
}

/// A standalone HTML page with one table per day.
pub fn render_week_html(week: &WeekDays<'_>) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset='UTF-8'>\n");
    html.push_str(&format!("<style>\n{}</style>\n</head>\n<body>\n", STYLE));
    html.push_str("<div class='schedule-container'>\n");
    html.push_str(&format!(
        "<h2>Weekly Schedule: {} to {}</h2>\n",
        week.window.start.format(DATE_FORMAT),
        week.window.end.format(DATE_FORMAT)
    ));

    for (date, events) in &week.days {
        render_day_table(&mut html, *date, events);
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_day_table(html: &mut String, date: NaiveDate, events: &[&Event]) {
    html.push_str("<div class='day-schedule'>\n");
    html.push_str(&format!(
        "<h3>{} - {}</h3>\n",
        date.format("%A").to_string().to_uppercase(),
        date.format(DATE_FORMAT)
    ));
    html.push_str("<table>\n<tr>\n");
    html.push_str("<th class='time-column'>Time</th>\n");
    html.push_str("<th class='event-column'>Event</th>\n");
    html.push_str("<th class='location-column'>Location</th>\n");
    html.push_str("</tr>\n");

    if events.is_empty() {
        html.push_str(
            "<tr><td colspan='3' style='text-align: center;'>No events scheduled</td></tr>\n",
        );
    }
    for event in events {
        html.push_str(&format!(
            "<tr>\n<td class='time-column'>{}</td>\n<td class='event-column'>{}</td>\n<td class='location-column'>{}</td>\n</tr>\n",
            escape_html(&event.formatted_time()),
            escape_html(&event.title),
            escape_html(&event.location)
        ));
    }

    html.push_str("</table>\n</div>\n");
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_render_week_html() {
        let events = vec![
            Event::new("Late <b>", at(7, 15), at(7, 16), "R&D"),
            Event::new("Early", at(7, 8), at(7, 9), "Lab"),
        ];
        let week = week_by_day(&events, NaiveDate::from_ymd_opt(2025, 1, 7).unwrap());
        let html = render_week_html(&week);

        assert!(html.contains("<h2>Weekly Schedule: Jan 6, 2025 to Jan 12, 2025</h2>"));
        assert!(html.contains("<h3>TUESDAY - Jan 7, 2025</h3>"));
        assert_eq!(html.matches("No events scheduled").count(), 6);
        assert!(html.contains("Late &lt;b&gt;"));
        assert!(html.contains("R&amp;D"));
        assert!(html.find("Early").unwrap() < html.find("Late").unwrap());
        assert!(html.contains("8:00 AM - 9:00 AM"));
    }

    #[test]
    fn test_page_layout_lines() {
        let events = vec![Event::new("Gym", at(8, 18), at(8, 19), "Club")];
        let week = week_by_day(&events, NaiveDate::from_ymd_opt(2025, 1, 8).unwrap());
        let html = render_week_html(&week);

        assert!(html.starts_with("<!DOCTYPE html>\n"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("</style>\n</head>\n<body>\n<div class='schedule-container'>\n<h2>"));
        assert!(html.contains("</h2>\n<div class='day-schedule'>\n<h3>MONDAY - Jan 6, 2025</h3>\n<table>"));
        assert!(html.contains("<td class='location-column'>Club</td>\n</tr>\n</table>"));
        assert_eq!(html.matches("<div class='day-schedule'>").count(), 7);
    }

    #[test]
    fn test_export_writes_one_page_per_week() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("weekly_schedules");
        let events = vec![
            Event::new("A", at(6, 9), at(6, 10), "X"),
            Event::new("B", at(15, 9), at(15, 10), "X"),
            Event::new("C", at(8, 9), at(8, 10), "X"),
            Event::default(),
        ];

        let written = export_weeks(&events, &out).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec![
                "schedule_2025-01-06_to_2025-01-12.html",
                "schedule_2025-01-13_to_2025-01-19.html",
            ]
        );
        let first = fs::read_to_string(&written[0]).unwrap();
        assert!(first.contains(">A<") && first.contains(">C<") && !first.contains(">B<"));
    }
}
