use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;
use crate::schedule::Schedule;

/// Name of the schedule a fresh manager starts with.
pub const DEFAULT_SCHEDULE_NAME: &str = "Weekly Schedule";

/// The named schedules a user owns, one of which is current.
///
/// Names are unique ignoring case. The manager never becomes empty: removing
/// the last schedule is refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleManager {
    schedules: Vec<Schedule>,
    #[serde(default)]
    current: usize,
}

impl Default for ScheduleManager {
    fn default() -> Self {
        Self::with_schedule(Schedule::new(DEFAULT_SCHEDULE_NAME))
    }
}

impl ScheduleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(schedule: Schedule) -> Self {
        Self {
            schedules: vec![schedule],
            current: 0,
        }
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schedules.iter().map(Schedule::name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.schedules
            .iter()
            .position(|s| s.name().to_lowercase() == wanted)
    }

    pub fn add_schedule(&mut self, schedule: Schedule) -> Result<(), CoreError> {
        if self.position(schedule.name()).is_some() {
            return Err(CoreError::DuplicateSchedule(schedule.name().to_string()));
        }
        debug!(name = schedule.name(), "schedule added");
        self.schedules.push(schedule);
        Ok(())
    }

    pub fn schedule(&self, name: &str) -> Option<&Schedule> {
        self.position(name).map(|i| &self.schedules[i])
    }

    pub fn schedule_mut(&mut self, name: &str) -> Option<&mut Schedule> {
        self.position(name).map(move |i| &mut self.schedules[i])
    }

    pub fn current(&self) -> &Schedule {
        &self.schedules[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Schedule {
        &mut self.schedules[self.current]
    }

    pub fn set_current(&mut self, name: &str) -> Result<(), CoreError> {
        let index = self
            .position(name)
            .ok_or_else(|| CoreError::NotFound(format!("No schedule named '{}'", name)))?;
        self.current = index;
        Ok(())
    }

    /// Removes the schedule named `name`, keeping the current selection on the
    /// same schedule where possible.
    pub fn remove_schedule(&mut self, name: &str) -> Result<Schedule, CoreError> {
        let index = self
            .position(name)
            .ok_or_else(|| CoreError::NotFound(format!("No schedule named '{}'", name)))?;
        if self.schedules.len() == 1 {
            return Err(CoreError::InvalidInput(
                "Cannot remove the only schedule".to_string(),
            ));
        }
        let removed = self.schedules.remove(index);
        if self.current > index || self.current >= self.schedules.len() {
            self.current = self.current.saturating_sub(1);
        }
        debug!(name = removed.name(), "schedule removed");
        Ok(removed)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let manager: Self = serde_json::from_str(json)?;
        if manager.schedules.is_empty() || manager.current >= manager.schedules.len() {
            return Err(CoreError::InvalidInput(
                "Saved state has no valid current schedule".to_string(),
            ));
        }
        Ok(manager)
    }
}
