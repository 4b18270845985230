use anyhow::{anyhow, Result};
use sked_core::error::CoreError;
use sked_core::manager::ScheduleManager;
use sked_core::schedule::Schedule;

/// The schedule named by `--schedule`, or the current one.
pub fn target_schedule<'a>(
    manager: &'a ScheduleManager,
    name: Option<&str>,
) -> Result<&'a Schedule> {
    match name {
        Some(name) => manager.schedule(name).ok_or_else(|| not_found(name)),
        None => Ok(manager.current()),
    }
}

pub fn target_schedule_mut<'a>(
    manager: &'a mut ScheduleManager,
    name: Option<&str>,
) -> Result<&'a mut Schedule> {
    match name {
        Some(name) => manager.schedule_mut(name).ok_or_else(|| not_found(name)),
        None => Ok(manager.current_mut()),
    }
}

fn not_found(name: &str) -> anyhow::Error {
    anyhow!(CoreError::NotFound(format!("No schedule named '{}'", name)))
}
