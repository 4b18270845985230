use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::CoreError;
use crate::models::Event;
use crate::weekly;

/// An ordered collection of events for one named calendar.
///
/// Events are kept in insertion order. No two stored events overlap, but this
/// is only checked by [`Schedule::add_event`]; editing a stored event in place
/// through [`Schedule::events_mut`] is not re-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    name: String,
    #[serde(default)]
    events: Vec<Event>,
}

impl Schedule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Adds `event` unless it overlaps a stored event.
    ///
    /// Returns `false` and leaves the schedule untouched on conflict.
    pub fn add_event(&mut self, event: Event) -> bool {
        self.try_add_event(event).is_ok()
    }

    /// Like [`Schedule::add_event`], but names the blocking event on conflict.
    pub fn try_add_event(&mut self, event: Event) -> Result<(), CoreError> {
        if let Some(existing) = self.conflicting_event(&event) {
            debug!(
                schedule = %self.name,
                title = %event.title,
                conflicting = %existing.title,
                "event rejected: overlaps existing event"
            );
            return Err(CoreError::Overlap {
                title: event.title,
                conflicting: existing.title.clone(),
            });
        }
        debug!(schedule = %self.name, title = %event.title, "event added");
        self.events.push(event);
        Ok(())
    }

    /// The first stored event that would block `event`.
    pub fn conflicting_event(&self, event: &Event) -> Option<&Event> {
        event.first_conflict(&self.events)
    }

    /// Offers each event to [`Schedule::add_event`] in order.
    ///
    /// This is not a transaction: accepted events stay even when later ones
    /// are rejected. The result holds one flag per offered event.
    pub fn add_events<I>(&mut self, events: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Event>,
    {
        events.into_iter().map(|event| self.add_event(event)).collect()
    }

    /// Removes the first event whose title matches `title` case-insensitively.
    ///
    /// Later events sharing the title are kept. Use
    /// [`Schedule::remove_event_at`] to remove a specific event.
    pub fn remove_event(&mut self, title: &str) -> bool {
        match self.position_by_title(title) {
            Some(index) => {
                self.events.remove(index);
                true
            }
            None => {
                debug!(schedule = %self.name, title, "no event to remove");
                false
            }
        }
    }

    /// Index of the first event whose title matches `title` case-insensitively.
    pub fn position_by_title(&self, title: &str) -> Option<usize> {
        let wanted = title.to_lowercase();
        self.events
            .iter()
            .position(|e| e.title.to_lowercase() == wanted)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Event> {
        self.position_by_title(title).map(|i| &self.events[i])
    }

    pub fn remove_event_at(&mut self, index: usize) -> Option<Event> {
        (index < self.events.len()).then(|| self.events.remove(index))
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Mutable access to stored events.
    ///
    /// Moving an event in time through this slice bypasses the overlap gate;
    /// check [`Schedule::overlapping_pairs`] afterwards.
    pub fn events_mut(&mut self) -> &mut [Event] {
        &mut self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Index pairs `(i, j)`, `i < j`, of stored events that overlap.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.events.iter().enumerate() {
            for (j, b) in self.events.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// Plain-text view of the week containing `any_date`, one section per day.
    pub fn weekly_view(&self, any_date: NaiveDate) -> String {
        let week = weekly::week_by_day(&self.events, any_date);
        let mut output = format!(
            "Weekly Schedule ({} - {})\n\n",
            week.window.start, week.window.end
        );

        for (date, events) in &week.days {
            output.push_str(&format!("{}:\n", date.format("%A, %b %-d")));
            if events.is_empty() {
                output.push_str("  No events.\n");
            }
            for event in events {
                output.push_str(&format!("  {}\n", event));
            }
            output.push('\n');
        }
        output
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Schedule: {}\n", self.name)?;
        if self.events.is_empty() {
            writeln!(f, "No events scheduled.")?;
        }
        for (i, event) in self.events.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, event.title)?;
            writeln!(f, "   Location: {}", event.location)?;
            writeln!(f, "   Start: {}", format_bound(event.start))?;
            writeln!(f, "   End: {}\n", format_bound(event.end))?;
        }
        writeln!(f, "End of Schedule :)")
    }
}

fn format_bound(bound: Option<chrono::NaiveDateTime>) -> String {
    bound
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}
