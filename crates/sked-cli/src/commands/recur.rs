use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use sked_core::models::Event;
use sked_core::recurrence::{parse_weekdays, OccurrenceTemplate, RecurrenceRule};
use sked_core::validation::ValidationPolicy;
use tracing::warn;

use crate::cli::RecurCommand;
use crate::parser::{parse_date, parse_time};
use crate::store::ScheduleStore;
use crate::util::target_schedule_mut;

/// Outcome of offering every occurrence of a series to a schedule.
#[derive(Debug, Default)]
pub struct RecurOutcome {
    pub accepted: Vec<Event>,
    pub rejected: Vec<Event>,
}

pub fn add_recurring(
    store: &impl ScheduleStore,
    schedule_name: Option<&str>,
    command: RecurCommand,
    policy: &ValidationPolicy,
) -> Result<RecurOutcome> {
    let days = parse_weekdays(&command.on)?;
    let series_start = parse_date(&command.from)?;
    let series_end = parse_date(&command.to)?;
    let template = OccurrenceTemplate::new(
        command.title,
        command.location,
        parse_time(&command.at)?,
        parse_time(&command.until)?,
    );
    policy.validate(&template.on(series_start))?;

    let rule = RecurrenceRule::new(template, days, series_start, series_end);
    let occurrences = rule.generate_occurrences();
    if occurrences.is_empty() {
        warn!(from = %series_start, to = %series_end, "no occurrences in range");
        println!("No selected weekday falls between {} and {}.", series_start, series_end);
        return Ok(RecurOutcome::default());
    }

    let mut manager = store.load()?;
    let schedule = target_schedule_mut(&mut manager, schedule_name)?;
    let results = schedule.add_events(occurrences.iter().cloned());

    let mut outcome = RecurOutcome::default();
    for (occurrence, accepted) in occurrences.into_iter().zip(results) {
        if accepted {
            outcome.accepted.push(occurrence);
        } else {
            outcome.rejected.push(occurrence);
        }
    }

    if !outcome.accepted.is_empty() {
        store.save(&manager)?;
    }
    print_outcome(&outcome);
    Ok(outcome)
}

fn print_outcome(outcome: &RecurOutcome) {
    let success_style = Style::new().green().bold();
    let warn_style = Style::new().yellow().bold();

    println!(
        "{} Added {} occurrence(s)",
        "✓".style(success_style),
        outcome.accepted.len()
    );
    if !outcome.rejected.is_empty() {
        println!(
            "{} Skipped {} overlapping occurrence(s):",
            "!".style(warn_style),
            outcome.rejected.len()
        );
        for event in &outcome.rejected {
            println!("  • {}", event.formatted_range().bright_black());
        }
    }
}
