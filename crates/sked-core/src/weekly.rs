//! Week grouping for the weekly view and report export.
//!
//! Weeks run Monday to Sunday. Every function here is a pure projection over a
//! slice of events and never mutates or reorders the source.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

use crate::models::Event;

/// The Monday on or before `date`, clamped to [`NaiveDate::MIN`].
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = Duration::days(i64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_signed(offset).unwrap_or(NaiveDate::MIN)
}

/// The Sunday on or after `date`, clamped to [`NaiveDate::MAX`].
pub fn week_end(date: NaiveDate) -> NaiveDate {
    let offset = Duration::days(i64::from(6 - date.weekday().num_days_from_monday()));
    date.checked_add_signed(offset).unwrap_or(NaiveDate::MAX)
}

/// An inclusive Monday..Sunday date range.
///
/// The first and last weeks of chrono's calendar are truncated at
/// [`NaiveDate::MIN`] and [`NaiveDate::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekWindow {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            start: week_start(date),
            end: week_end(date),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The dates of the week, Monday first. Seven except in a truncated week.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take_while({
            let end = self.end;
            move |date| *date <= end
        })
    }

    /// The following week, or `self` at the end of the calendar.
    pub fn next(&self) -> Self {
        self.end.succ_opt().map_or(*self, Self::containing)
    }

    /// The preceding week, or `self` at the start of the calendar.
    pub fn previous(&self) -> Self {
        self.start.pred_opt().map_or(*self, Self::containing)
    }
}

/// Events bucketed by the Monday of the week holding their start date.
#[derive(Debug, Clone, Default)]
pub struct WeeklyGroups<'a> {
    /// Week buckets in ascending order; events keep insertion order.
    pub weeks: BTreeMap<NaiveDate, Vec<&'a Event>>,
    /// Events with no start date, which belong to no week.
    pub unscheduled: Vec<&'a Event>,
}

impl<'a> WeeklyGroups<'a> {
    /// Number of events across every bucket, including `unscheduled`.
    pub fn total(&self) -> usize {
        self.weeks.values().map(Vec::len).sum::<usize>() + self.unscheduled.len()
    }

    pub fn windows(&self) -> impl Iterator<Item = WeekWindow> + '_ {
        self.weeks.keys().map(|start| WeekWindow::containing(*start))
    }
}

/// Buckets every event by the week of its start date.
pub fn group_by_week(events: &[Event]) -> WeeklyGroups<'_> {
    let mut groups = WeeklyGroups::default();
    for event in events {
        match event.start {
            Some(start) => groups
                .weeks
                .entry(week_start(start.date()))
                .or_default()
                .push(event),
            None => groups.unscheduled.push(event),
        }
    }
    groups
}

/// One week split into its seven days.
#[derive(Debug, Clone)]
pub struct WeekDays<'a> {
    pub window: WeekWindow,
    /// Monday..Sunday, each day's events sorted by start time.
    pub days: Vec<(NaiveDate, Vec<&'a Event>)>,
}

impl<'a> WeekDays<'a> {
    pub fn day(&self, date: NaiveDate) -> Option<&[&'a Event]> {
        self.days
            .iter()
            .find(|(day, _)| *day == date)
            .map(|(_, events)| events.as_slice())
    }

    pub fn event_count(&self) -> usize {
        self.days.iter().map(|(_, events)| events.len()).sum()
    }
}

/// Splits the week containing `any_date` by day.
///
/// Unlike [`group_by_week`], each day is sorted ascending by start. The sort is
/// stable, so events starting at the same instant keep insertion order.
pub fn week_by_day(events: &[Event], any_date: NaiveDate) -> WeekDays<'_> {
    let window = WeekWindow::containing(any_date);
    let days = window
        .days()
        .map(|date| {
            let mut on_day: Vec<&Event> = events
                .iter()
                .filter(|e| e.start.map(|s| s.date()) == Some(date))
                .collect();
            on_day.sort_by_key(|e| e.start);
            (date, on_day)
        })
        .collect();
    WeekDays { window, days }
}

/// Events starting within the week containing `any_date`, in insertion order.
pub fn events_in_week(events: &[Event], any_date: NaiveDate) -> Vec<&Event> {
    let window = WeekWindow::containing(any_date);
    events
        .iter()
        .filter(|e| e.start.is_some_and(|s| window.contains(s.date())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, Weekday};
    use rstest::rstest;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, month, day).unwrap()
    }

    fn at(month: u32, day: u32, hour: u32) -> NaiveDateTime {
        date(month, day).and_hms_opt(hour, 0, 0).unwrap()
    }

    fn event(title: &str, start: NaiveDateTime) -> Event {
        Event::new(title, start, start + Duration::hours(1), "")
    }

    #[rstest]
    #[case::monday(date(1, 6), date(1, 6))]
    #[case::wednesday(date(1, 8), date(1, 6))]
    #[case::sunday(date(1, 12), date(1, 6))]
    #[case::across_year(date(1, 1), date(12, 30).with_year(2024).unwrap())]
    fn test_week_start(#[case] input: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(week_start(input), expected);
        assert_eq!(week_start(input).weekday(), Weekday::Mon);
        assert_eq!(week_end(input), expected + Duration::days(6));
    }

    #[test]
    fn test_window_navigation() {
        let week = WeekWindow::containing(date(1, 8));
        assert_eq!(week.days().count(), 7);
        assert!(week.contains(date(1, 12)));
        assert!(!week.contains(date(1, 13)));
        assert_eq!(week.next().start, date(1, 13));
        assert_eq!(week.previous().start, date(12, 30).with_year(2024).unwrap());
    }

    #[test]
    fn test_calendar_limits_are_clamped() {
        let last = WeekWindow::containing(NaiveDate::MAX);
        assert_eq!(last.end, NaiveDate::MAX);
        assert_eq!(last.start.weekday(), Weekday::Mon);
        assert!(last.contains(NaiveDate::MAX));
        assert_eq!(last.next(), last);
        assert_eq!(last.days().last(), Some(NaiveDate::MAX));

        let first = WeekWindow::containing(NaiveDate::MIN);
        assert_eq!(first.start, NaiveDate::MIN);
        assert_eq!(first.previous(), first);
        assert!(first.days().count() <= 7);

        let edge = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap();
        let events = vec![Event::new("Edge", edge, edge, "")];
        assert_eq!(group_by_week(&events).total(), 1);
        assert_eq!(week_by_day(&events, NaiveDate::MAX).event_count(), 1);
        assert_eq!(events_in_week(&events, NaiveDate::MAX).len(), 1);
    }

    #[test]
    fn test_group_by_week_orders_weeks_and_keeps_insertion_order() {
        let events = vec![
            event("Later week", at(1, 14, 9)),
            event("Wed", at(1, 8, 15)),
            event("Mon", at(1, 6, 9)),
            Event::default(),
        ];
        let groups = group_by_week(&events);

        let starts: Vec<_> = groups.weeks.keys().copied().collect();
        assert_eq!(starts, vec![date(1, 6), date(1, 13)]);

        let first: Vec<_> = groups.weeks[&date(1, 6)].iter().map(|e| e.title.as_str()).collect();
        assert_eq!(first, vec!["Wed", "Mon"]);
        assert_eq!(groups.unscheduled.len(), 1);
        assert_eq!(groups.total(), events.len());
    }

    #[test]
    fn test_week_by_day_sorts_and_keeps_empty_days() {
        let events = vec![
            event("Afternoon", at(1, 7, 14)),
            event("Morning", at(1, 7, 8)),
            event("Next week", at(1, 14, 8)),
        ];
        let week = week_by_day(&events, date(1, 9));

        assert_eq!(week.window.start, date(1, 6));
        assert_eq!(week.days.len(), 7);
        assert!(week.day(date(1, 6)).unwrap().is_empty());

        let tuesday: Vec<_> = week.day(date(1, 7)).unwrap().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(tuesday, vec!["Morning", "Afternoon"]);
        assert_eq!(week.event_count(), 2);
    }

    #[test]
    fn test_events_in_week() {
        let events = vec![
            event("Before", at(1, 5, 9)),
            event("Sun", at(1, 12, 9)),
            event("Mon", at(1, 6, 9)),
        ];
        let titles: Vec<_> = events_in_week(&events, date(1, 6))
            .into_iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Sun", "Mon"]);
    }
}
