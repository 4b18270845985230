use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use sked_core::models::Event;
use sked_core::validation::ValidationPolicy;

use crate::cli::AddCommand;
use crate::parser::parse_datetime;
use crate::store::ScheduleStore;
use crate::util::target_schedule_mut;

pub fn add_event(
    store: &impl ScheduleStore,
    schedule_name: Option<&str>,
    command: AddCommand,
    policy: &ValidationPolicy,
) -> Result<()> {
    let start = parse_datetime(&command.start)?;
    let end = parse_datetime(&command.end)?;
    let event = Event::new(command.title, start, end, command.location);
    policy.validate(&event)?;

    let mut manager = store.load()?;
    let schedule = target_schedule_mut(&mut manager, schedule_name)?;

    let summary = format!("{} ({})", event.title, event.formatted_range());
    schedule.try_add_event(event)?;
    let schedule_label = schedule.name().to_string();
    store.save(&manager)?;

    let success_style = Style::new().green().bold();
    let info_style = Style::new().blue();
    println!(
        "{} Added event: {}",
        "✓".style(success_style),
        summary.bright_white().bold()
    );
    println!("  {} Schedule: {}", "→".style(info_style), schedule_label.yellow());
    Ok(())
}
