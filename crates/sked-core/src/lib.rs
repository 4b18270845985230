//! # Sked Core Library
//!
//! The scheduling model behind Sked: events, overlap-free schedules, weekly
//! recurrence and week grouping. Everything here is synchronous and performs
//! no I/O; callers own persistence and presentation.
//!
//! ## Core Modules
//!
//! - [`models`]: The [`Event`](models::Event) type and the half-open overlap rule
//! - [`schedule`]: Named event collections that refuse double-booking
//! - [`recurrence`]: Weekly recurrence rules expanded into plain events
//! - [`weekly`]: Grouping by ISO week and by day for views and reports
//! - [`manager`]: The set of schedules a user owns
//! - [`validation`]: Explicit field checks for input collaborators
//! - [`error`]: Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime, Weekday};
//! use sked_core::models::Event;
//! use sked_core::recurrence::{OccurrenceTemplate, RecurrenceRule};
//! use sked_core::schedule::Schedule;
//!
//! let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
//! let mut schedule = Schedule::new("Work");
//!
//! let standup = Event::new(
//!     "Standup",
//!     monday.and_hms_opt(9, 0, 0).unwrap(),
//!     monday.and_hms_opt(9, 30, 0).unwrap(),
//!     "Room 1",
//! );
//! assert!(schedule.add_event(standup));
//!
//! let rule = RecurrenceRule::new(
//!     OccurrenceTemplate::new(
//!         "Review",
//!         "Room 2",
//!         NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!         NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
//!     ),
//!     [Weekday::Mon, Weekday::Wed],
//!     monday,
//!     monday + chrono::Duration::days(13),
//! );
//! let accepted = schedule.add_events(rule.generate_occurrences());
//! assert_eq!(accepted, vec![false, true, true, true]);
//! ```

pub mod error;
pub mod manager;
pub mod models;
pub mod recurrence;
pub mod schedule;
pub mod validation;
pub mod weekly;
