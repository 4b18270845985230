use serde::Deserialize;

use crate::error::CoreError;
use crate::models::Event;

/// Field checks a form collaborator applies before calling
/// [`Schedule::add_event`](crate::schedule::Schedule::add_event).
///
/// The schedule itself never validates fields; it only enforces the overlap
/// rule. Pass a policy explicitly wherever input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Reject blank titles
    pub require_title: bool,
    /// Reject blank locations
    pub require_location: bool,
    /// Reject events that end before they start
    pub reject_inverted: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            require_title: true,
            require_location: true,
            reject_inverted: true,
        }
    }
}

impl ValidationPolicy {
    /// Accepts anything, matching what the schedule alone enforces.
    pub fn permissive() -> Self {
        Self {
            require_title: false,
            require_location: false,
            reject_inverted: false,
        }
    }

    pub fn validate(&self, event: &Event) -> Result<(), CoreError> {
        if self.require_title && event.title.trim().is_empty() {
            return Err(CoreError::InvalidInput("Title must not be empty".to_string()));
        }
        if self.require_location && event.location.trim().is_empty() {
            return Err(CoreError::InvalidInput("Location must not be empty".to_string()));
        }
        if event.start.is_none() || event.end.is_none() {
            return Err(CoreError::InvalidInput(
                "Both start and end must be set".to_string(),
            ));
        }
        if self.reject_inverted && event.is_inverted() {
            return Err(CoreError::InvalidInput(format!(
                "Event '{}' ends before it starts",
                event.title
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(title: &str, location: &str, start_hour: u32, end_hour: u32) -> Event {
        let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        Event::new(
            title,
            day.and_hms_opt(start_hour, 0, 0).unwrap(),
            day.and_hms_opt(end_hour, 0, 0).unwrap(),
            location,
        )
    }

    #[test]
    fn test_default_policy() {
        let policy = ValidationPolicy::default();
        assert!(policy.validate(&event("Standup", "Room 1", 9, 10)).is_ok());
        assert!(policy.validate(&event("  ", "Room 1", 9, 10)).is_err());
        assert!(policy.validate(&event("Standup", "", 9, 10)).is_err());
        assert!(policy.validate(&event("Standup", "Room 1", 10, 9)).is_err());
        assert!(policy.validate(&Event::default()).is_err());
    }

    #[test]
    fn test_permissive_policy_still_needs_bounds() {
        let policy = ValidationPolicy::permissive();
        assert!(policy.validate(&event("", "", 10, 9)).is_ok());
        assert!(matches!(
            policy.validate(&Event::default()),
            Err(CoreError::InvalidInput(_))
        ));
    }
}
