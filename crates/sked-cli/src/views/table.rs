use chrono::{Local, NaiveDateTime};
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use sked_core::models::Event;
use sked_core::weekly::WeekDays;

/// Builds the event table: one row per event, in schedule order.
pub fn events_table(events: &[Event], now: NaiveDateTime) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Title", "Location", "Date", "Time", "Starts"]);

    for (i, event) in events.iter().enumerate() {
        let mut row = Row::new();
        row.add_cell(Cell::new(i + 1));

        let mut title_cell = Cell::new(&event.title);
        let finished = event.end.is_some_and(|end| end <= now);
        if finished {
            title_cell = title_cell.fg(Color::DarkGrey);
        } else if event.start.is_some_and(|start| start.date() == now.date()) {
            title_cell = title_cell.fg(Color::Yellow).add_attribute(Attribute::Bold);
        }
        row.add_cell(title_cell);
        row.add_cell(Cell::new(&event.location));

        row.add_cell(Cell::new(or_none(event.formatted_date())));

        let mut time_cell = Cell::new(or_none(event.formatted_time()));
        if event.is_inverted() {
            time_cell = time_cell.fg(Color::Red);
        }
        row.add_cell(time_cell);

        let starts = match event.start {
            Some(start) => (start - now).humanize(),
            None => "None".to_string(),
        };
        row.add_cell(Cell::new(starts));
        table.add_row(row);
    }

    table
}

pub fn display_events(events: &[Event]) {
    if events.is_empty() {
        println!("No events scheduled.");
        return;
    }
    println!("{}", events_table(events, Local::now().naive_local()));
}

/// Builds one table per week with a row per day.
pub fn week_table(week: &WeekDays<'_>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Day", "Time", "Event", "Location"]);

    for (date, events) in &week.days {
        let day_label = date.format("%a %b %-d").to_string();
        if events.is_empty() {
            table.add_row(vec![
                Cell::new(day_label),
                Cell::new("").fg(Color::DarkGrey),
                Cell::new("No events").fg(Color::DarkGrey),
                Cell::new(""),
            ]);
            continue;
        }
        for (i, event) in events.iter().enumerate() {
            let label = if i == 0 { day_label.clone() } else { String::new() };
            table.add_row(vec![
                Cell::new(label).add_attribute(Attribute::Bold),
                Cell::new(event.formatted_time()),
                Cell::new(&event.title),
                Cell::new(&event.location),
            ]);
        }
    }

    table
}

fn or_none(text: String) -> String {
    if text.is_empty() {
        "None".to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sked_core::weekly::week_by_day;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_events_table_rows() {
        let events = vec![
            Event::new("Standup", at(6, 9), at(6, 10), "Room 1"),
            Event::default(),
        ];
        let rendered = events_table(&events, at(1, 0)).to_string();
        assert!(rendered.contains("Standup"));
        assert!(rendered.contains("Jan 6, 2025"));
        assert!(rendered.contains("9:00 AM - 10:00 AM"));
        assert!(rendered.contains("None"));
    }

    #[test]
    fn test_week_table_marks_empty_days() {
        let events = vec![Event::new("Gym", at(8, 18), at(8, 19), "Club")];
        let week = week_by_day(&events, NaiveDate::from_ymd_opt(2025, 1, 8).unwrap());
        let rendered = week_table(&week).to_string();
        assert!(rendered.contains("Wed Jan 8"));
        assert!(rendered.contains("Gym"));
        assert_eq!(rendered.matches("No events").count(), 6);
    }
}
