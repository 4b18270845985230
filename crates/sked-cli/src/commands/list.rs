use anyhow::Result;
use owo_colors::OwoColorize;
use sked_core::models::Event;
use sked_core::weekly::events_in_week;

use crate::cli::ListCommand;
use crate::parser::parse_date;
use crate::store::ScheduleStore;
use crate::util::target_schedule;
use crate::views::table::display_events;

pub fn list_events(
    store: &impl ScheduleStore,
    schedule_name: Option<&str>,
    command: ListCommand,
) -> Result<()> {
    let manager = store.load()?;
    let schedule = target_schedule(&manager, schedule_name)?;
    let events = selected_events(schedule.events(), command.week.as_deref())?;

    println!("{}", schedule.name().bold());
    display_events(&events);
    Ok(())
}

fn selected_events(events: &[Event], week: Option<&str>) -> Result<Vec<Event>> {
    match week {
        Some(input) => {
            let date = parse_date(input)?;
            Ok(events_in_week(events, date).into_iter().cloned().collect())
        }
        None => Ok(events.to_vec()),
    }
}

/// Prints the plain listing of every event in insertion order.
pub fn show_schedule(store: &impl ScheduleStore, schedule_name: Option<&str>) -> Result<String> {
    let manager = store.load()?;
    let schedule = target_schedule(&manager, schedule_name)?;
    let listing = schedule.to_string();
    print!("{}", listing);
    Ok(listing)
}
