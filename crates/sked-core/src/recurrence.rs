use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::CoreError;
use crate::models::Event;

/// What every occurrence of a series shares: title, location and time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceTemplate {
    pub title: String,
    pub location: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl OccurrenceTemplate {
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            start_time,
            end_time,
        }
    }

    /// Takes the time-of-day portion of an event's bounds; `None` if either is unset.
    pub fn from_event(event: &Event) -> Option<Self> {
        let (start, end) = event.interval()?;
        Some(Self::new(
            event.title.clone(),
            event.location.clone(),
            start.time(),
            end.time(),
        ))
    }

    /// The concrete event for one calendar date.
    ///
    /// Both bounds land on `date`, so a template whose end time precedes its
    /// start time yields an inverted event.
    pub fn on(&self, date: NaiveDate) -> Event {
        Event::new(
            self.title.clone(),
            date.and_time(self.start_time),
            date.and_time(self.end_time),
            self.location.clone(),
        )
    }
}

/// A weekly pattern over an inclusive date range.
///
/// The rule is transient: expand it with [`RecurrenceRule::generate_occurrences`]
/// and offer each resulting [`Event`] to a schedule on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub template: OccurrenceTemplate,
    pub days_of_week: HashSet<Weekday>,
    pub series_start: NaiveDate,
    pub series_end: NaiveDate,
}

impl RecurrenceRule {
    pub fn new(
        template: OccurrenceTemplate,
        days_of_week: impl IntoIterator<Item = Weekday>,
        series_start: NaiveDate,
        series_end: NaiveDate,
    ) -> Self {
        Self {
            template,
            days_of_week: days_of_week.into_iter().collect(),
            series_start,
            series_end,
        }
    }

    /// Dates in the series range that fall on a selected weekday, ascending.
    ///
    /// Empty when no weekday is selected or `series_start > series_end`.
    pub fn occurrence_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let span = (self.series_end - self.series_start).num_days();
        let start = self.series_start;
        (0..=span)
            .map(move |offset| start + Duration::days(offset))
            .filter(move |date| self.days_of_week.contains(&date.weekday()))
    }

    /// One event per matching date, in date order. No overlap checking happens here.
    pub fn generate_occurrences(&self) -> Vec<Event> {
        self.occurrence_dates()
            .map(|date| self.template.on(date))
            .collect()
    }

    pub fn occurrence_count(&self) -> usize {
        self.occurrence_dates().count()
    }
}

/// Parses a day selection such as `mon,wed`, `monday,friday`, `weekdays`,
/// `weekends` or `daily`.
pub fn parse_weekdays(input: &str) -> Result<HashSet<Weekday>, CoreError> {
    use Weekday::*;

    let normalized = input.trim().to_lowercase();
    match normalized.as_str() {
        "weekdays" | "workdays" => return Ok([Mon, Tue, Wed, Thu, Fri].into_iter().collect()),
        "weekends" => return Ok([Sat, Sun].into_iter().collect()),
        "daily" | "everyday" => {
            return Ok([Mon, Tue, Wed, Thu, Fri, Sat, Sun].into_iter().collect())
        }
        _ => {}
    }

    let mut days = HashSet::new();
    let mut invalid = Vec::new();

    for day in normalized.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let weekday = match day {
            "mon" | "monday" | "m" => Mon,
            "tue" | "tuesday" | "tu" => Tue,
            "wed" | "wednesday" | "w" => Wed,
            "thu" | "thursday" | "th" => Thu,
            "fri" | "friday" | "f" => Fri,
            "sat" | "saturday" | "sa" => Sat,
            "sun" | "sunday" | "su" => Sun,
            _ => {
                invalid.push(day.to_string());
                continue;
            }
        };
        days.insert(weekday);
    }

    if !invalid.is_empty() {
        return Err(CoreError::InvalidInput(format!(
            "Invalid day(s): {}",
            invalid.join(", ")
        )));
    }
    if days.is_empty() {
        return Err(CoreError::EmptyDaySelection);
    }
    Ok(days)
}
