use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Style};
use sked_core::error::CoreError;

use crate::cli::RemoveCommand;
use crate::store::ScheduleStore;
use crate::util::target_schedule_mut;

/// Removes the first event whose title matches, case-insensitively.
///
/// Returns `Ok(false)` when the user declines the confirmation prompt.
pub fn remove_event(
    store: &impl ScheduleStore,
    schedule_name: Option<&str>,
    command: RemoveCommand,
) -> Result<bool> {
    let mut manager = store.load()?;
    let schedule = target_schedule_mut(&mut manager, schedule_name)?;

    if schedule.find_by_title(&command.title).is_none() {
        return Err(CoreError::NotFound(format!("No event titled '{}'", command.title)).into());
    }

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!(
                "Are you sure you want to remove event '{}'?",
                command.title
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Removal cancelled.");
            return Ok(false);
        }
    }

    if !schedule.remove_event(&command.title) {
        return Err(CoreError::NotFound(format!("No event titled '{}'", command.title)).into());
    }
    store.save(&manager)?;

    let success_style = Style::new().green().bold();
    println!(
        "{} Removed event: {}",
        "✓".style(success_style),
        command.title.bright_white().bold()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use sked_core::manager::ScheduleManager;
    use sked_core::models::Event;

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::default();
        let mut manager = ScheduleManager::new();
        let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        for (title, hour) in [("Gym", 7), ("Standup", 9), ("gym", 18)] {
            manager.current_mut().add_event(Event::new(
                title,
                day.and_hms_opt(hour, 0, 0).unwrap(),
                day.and_hms_opt(hour + 1, 0, 0).unwrap(),
                "Somewhere",
            ));
        }
        store.save(&manager).unwrap();
        store
    }

    #[test]
    fn test_force_removes_first_match_only() {
        let store = seeded_store();
        let command = RemoveCommand { title: "GYM".to_string(), force: true };
        assert!(remove_event(&store, None, command).unwrap());

        let manager = store.snapshot();
        let titles: Vec<_> = manager.current().events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Standup", "gym"]);
    }

    #[test]
    fn test_accented_title_matches_any_case() {
        let store = MemoryStore::default();
        let mut manager = ScheduleManager::new();
        let day = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        manager.current_mut().add_event(Event::new(
            "Café",
            day.and_hms_opt(8, 0, 0).unwrap(),
            day.and_hms_opt(9, 0, 0).unwrap(),
            "Corner",
        ));
        store.save(&manager).unwrap();

        let command = RemoveCommand { title: "CAFÉ".to_string(), force: true };
        assert!(remove_event(&store, None, command).unwrap());
        assert!(store.snapshot().current().is_empty());
    }

    #[test]
    fn test_missing_title_is_not_found() {
        let store = seeded_store();
        let command = RemoveCommand { title: "Lunch".to_string(), force: true };
        let err = remove_event(&store, None, command).unwrap_err();
        assert!(matches!(err.downcast_ref::<CoreError>(), Some(CoreError::NotFound(_))));
        assert_eq!(store.snapshot().current().len(), 3);
    }
}
