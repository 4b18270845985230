use anyhow::Result;
use comfy_table::{Cell, Color, Table};
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Style};
use sked_core::error::CoreError;
use sked_core::manager::ScheduleManager;
use sked_core::schedule::Schedule;

use crate::cli::{ScheduleCommand, ScheduleSubcommand};
use crate::store::ScheduleStore;

pub fn schedule_command(store: &impl ScheduleStore, command: ScheduleCommand) -> Result<()> {
    let success_style = Style::new().green().bold();
    match command.command {
        ScheduleSubcommand::Add(command) => {
            let mut manager = store.load()?;
            manager.add_schedule(Schedule::new(command.name.trim()))?;
            store.save(&manager)?;
            println!(
                "{} Created schedule: {}",
                "✓".style(success_style),
                command.name.trim().yellow()
            );
        }
        ScheduleSubcommand::List => {
            let manager = store.load()?;
            println!("{}", schedules_table(&manager));
        }
        ScheduleSubcommand::Use(command) => {
            let mut manager = store.load()?;
            manager.set_current(&command.name)?;
            store.save(&manager)?;
            println!(
                "{} Now using: {}",
                "✓".style(success_style),
                manager.current().name().yellow()
            );
        }
        ScheduleSubcommand::Remove(command) => {
            let mut manager = store.load()?;
            let count = manager
                .schedule(&command.name)
                .map(Schedule::len)
                .ok_or_else(|| {
                    CoreError::NotFound(format!("No schedule named '{}'", command.name))
                })?;
            if !command.force {
                let confirmation = Confirm::new()
                    .with_prompt(format!(
                        "Delete schedule '{}' and its {} event(s)?",
                        command.name, count
                    ))
                    .default(false)
                    .interact()
                    .unwrap_or(false);
                if !confirmation {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }
            let removed = manager.remove_schedule(&command.name)?;
            store.save(&manager)?;
            println!(
                "{} Deleted schedule: {}",
                "✓".style(success_style),
                removed.name().yellow()
            );
        }
    }
    Ok(())
}

fn schedules_table(manager: &ScheduleManager) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["", "Name", "Events"]);
    let current = manager.current().name();
    for schedule in manager.schedules() {
        let is_current = schedule.name() == current;
        let marker = if is_current { "*" } else { "" };
        let mut name = Cell::new(schedule.name());
        if is_current {
            name = name.fg(Color::Green);
        }
        table.add_row(vec![Cell::new(marker), name, Cell::new(schedule.len())]);
    }
    table
}
