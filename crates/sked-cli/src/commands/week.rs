use anyhow::Result;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;
use sked_core::weekly::week_by_day;

use crate::cli::WeekCommand;
use crate::parser::parse_date;
use crate::store::ScheduleStore;
use crate::util::target_schedule;
use crate::views::table::week_table;

pub fn show_week(
    store: &impl ScheduleStore,
    schedule_name: Option<&str>,
    command: WeekCommand,
) -> Result<()> {
    let date = match command.date.as_deref() {
        Some(input) => parse_date(input)?,
        None => Local::now().date_naive(),
    };
    let manager = store.load()?;
    let schedule = target_schedule(&manager, schedule_name)?;

    if command.plain {
        print!("{}", schedule.weekly_view(date));
    } else {
        println!("{}", week_heading(schedule.name(), date).bold());
        println!("{}", week_table(&week_by_day(schedule.events(), date)));
    }
    Ok(())
}

fn week_heading(schedule: &str, date: NaiveDate) -> String {
    let week = sked_core::weekly::WeekWindow::containing(date);
    format!(
        "{}: {} to {}",
        schedule,
        week.start.format("%b %-d, %Y"),
        week.end.format("%b %-d, %Y")
    )
}
