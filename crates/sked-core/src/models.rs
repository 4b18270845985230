use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Date pattern used by every event formatter, e.g. "Jan 6, 2025".
pub const DATE_FORMAT: &str = "%b %-d, %Y";
/// Time pattern used by every event formatter, e.g. "9:05 AM".
pub const TIME_FORMAT: &str = "%-I:%M %p";

/// A single titled time interval at a location.
///
/// Times are naive local date-times. Either bound may be unset, in which case
/// the event never takes part in overlap checks and formats as an empty string.
/// The core does not require `start <= end`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
}

impl Event {
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Changing the bounds of an event already stored in a
    /// [`Schedule`](crate::schedule::Schedule) is not re-checked; call
    /// [`Schedule::overlapping_pairs`](crate::schedule::Schedule::overlapping_pairs)
    /// afterwards if the invariant matters.
    pub fn set_start(&mut self, start: Option<NaiveDateTime>) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Option<NaiveDateTime>) {
        self.end = end;
    }

    /// Both bounds, when both are set.
    #[inline]
    pub fn interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.start?, self.end?))
    }

    /// Returns true if `start > end`.
    pub fn is_inverted(&self) -> bool {
        matches!(self.interval(), Some((start, end)) if start > end)
    }

    /// Half-open interval test: `[s, e)` and `[s2, e2)` overlap iff
    /// `s < e2 && e > s2`. Back-to-back events do not overlap, and an event
    /// with an unset bound overlaps nothing.
    pub fn overlaps(&self, other: &Event) -> bool {
        match (self.interval(), other.interval()) {
            (Some(a), Some(b)) => intervals_overlap(a, b),
            _ => false,
        }
    }

    /// First event in `events` that this one overlaps.
    pub fn first_conflict<'a>(&self, events: &'a [Event]) -> Option<&'a Event> {
        events.iter().find(|existing| self.overlaps(existing))
    }

    /// Start date, e.g. "Jan 6, 2025".
    pub fn formatted_date(&self) -> String {
        self.start
            .map(|start| start.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn formatted_end_date(&self) -> String {
        self.end
            .map(|end| end.format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn formatted_start_time(&self) -> String {
        self.start
            .map(|start| start.format(TIME_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn formatted_end_time(&self) -> String {
        self.end
            .map(|end| end.format(TIME_FORMAT).to_string())
            .unwrap_or_default()
    }

    /// "9:00 AM - 9:30 AM", or empty if either bound is unset.
    pub fn formatted_time(&self) -> String {
        match self.interval() {
            Some((start, end)) => format!(
                "{} - {}",
                start.format(TIME_FORMAT),
                end.format(TIME_FORMAT)
            ),
            None => String::new(),
        }
    }

    /// "Jan 6, 2025 9:00 AM - 9:30 AM", or empty if either bound is unset.
    pub fn formatted_range(&self) -> String {
        match self.interval() {
            Some((start, _)) => format!("{} {}", start.format(DATE_FORMAT), self.formatted_time()),
            None => String::new(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}\n{}", self.title, self.location, self.formatted_range())
    }
}

/// Half-open intersection of `[a.0, a.1)` and `[b.0, b.1)`.
#[inline]
pub fn intervals_overlap(
    a: (NaiveDateTime, NaiveDateTime),
    b: (NaiveDateTime, NaiveDateTime),
) -> bool {
    a.0 < b.1 && a.1 > b.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn event(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::new(title, start, end, "Room 1")
    }

    #[rstest]
    #[case::identical((9, 0), (9, 30), (9, 0), (9, 30), true)]
    #[case::partial_left((9, 0), (9, 30), (9, 15), (9, 45), true)]
    #[case::contained((9, 0), (10, 0), (9, 15), (9, 30), true)]
    #[case::touching_after((9, 0), (9, 30), (9, 30), (10, 0), false)]
    #[case::touching_before((9, 30), (10, 0), (9, 0), (9, 30), false)]
    #[case::disjoint((9, 0), (9, 30), (11, 0), (12, 0), false)]
    fn test_overlap_is_half_open(
        #[case] a_start: (u32, u32),
        #[case] a_end: (u32, u32),
        #[case] b_start: (u32, u32),
        #[case] b_end: (u32, u32),
        #[case] expected: bool,
    ) {
        let a = event("A", at(6, a_start.0, a_start.1), at(6, a_end.0, a_end.1));
        let b = event("B", at(6, b_start.0, b_start.1), at(6, b_end.0, b_end.1));
        assert_eq!(a.overlaps(&b), expected);
        assert_eq!(b.overlaps(&a), expected);
    }

    #[test]
    fn test_unset_bounds_never_overlap() {
        let full = event("Full", at(6, 0, 0), at(6, 23, 0));
        let mut open_ended = full.clone();
        open_ended.set_end(None);

        assert!(!open_ended.overlaps(&full));
        assert!(!full.overlaps(&open_ended));
        assert!(!Event::default().overlaps(&full));
    }

    #[test]
    fn test_formatting() {
        let e = event("Standup", at(6, 9, 0), at(6, 9, 30));
        assert_eq!(e.formatted_date(), "Jan 6, 2025");
        assert_eq!(e.formatted_start_time(), "9:00 AM");
        assert_eq!(e.formatted_end_time(), "9:30 AM");
        assert_eq!(e.formatted_time(), "9:00 AM - 9:30 AM");
        assert_eq!(e.formatted_range(), "Jan 6, 2025 9:00 AM - 9:30 AM");
        assert_eq!(e.to_string(), "Standup at Room 1\nJan 6, 2025 9:00 AM - 9:30 AM");

        let afternoon = event("Review", at(7, 14, 5), at(7, 15, 0));
        assert_eq!(afternoon.formatted_time(), "2:05 PM - 3:00 PM");
    }

    #[test]
    fn test_formatting_unset_is_empty() {
        let mut e = Event::default();
        assert_eq!(e.formatted_date(), "");
        assert_eq!(e.formatted_time(), "");
        assert_eq!(e.formatted_range(), "");

        e.set_start(Some(at(6, 9, 0)));
        assert_eq!(e.formatted_date(), "Jan 6, 2025");
        assert_eq!(e.formatted_end_time(), "");
        assert_eq!(e.formatted_range(), "");
    }

    #[test]
    fn test_inverted_detection() {
        assert!(event("Back", at(6, 10, 0), at(6, 9, 0)).is_inverted());
        assert!(!event("Zero", at(6, 9, 0), at(6, 9, 0)).is_inverted());
        assert!(!Event::default().is_inverted());
    }
}
