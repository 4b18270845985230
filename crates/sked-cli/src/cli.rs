use clap::{Parser, Subcommand};

/// Sked: a personal weekly calendar that refuses double-booking
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Work on this schedule instead of the current one
    #[arg(long, short = 's', global = true)]
    pub schedule: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a single event
    Add(AddCommand),
    /// Add an event repeating on chosen weekdays over a date range
    Recur(RecurCommand),
    /// List events of the schedule
    List(ListCommand),
    /// Remove the first event with the given title
    Remove(RemoveCommand),
    /// Show one week, day by day
    Week(WeekCommand),
    /// Print the full schedule listing
    Show,
    /// Write one HTML page per week
    Export(ExportCommand),
    /// Manage schedules
    Schedule(ScheduleCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the event
    pub title: String,
    /// Where the event takes place
    #[arg(short, long)]
    pub location: String,
    /// Start, e.g. '2025-01-06 09:00'
    #[arg(long)]
    pub start: String,
    /// End, e.g. '2025-01-06 09:30'
    #[arg(long)]
    pub end: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RecurCommand {
    /// The title of every occurrence
    pub title: String,
    /// Where the occurrences take place
    #[arg(short, long)]
    pub location: String,
    /// Days of week (mon,tue,wed,thu,fri,sat,sun | weekdays | weekends | daily)
    #[arg(long)]
    pub on: String,
    /// First date of the series, e.g. '2025-01-06'
    #[arg(long)]
    pub from: String,
    /// Last date of the series (inclusive)
    #[arg(long)]
    pub to: String,
    /// Start time of each occurrence, e.g. '9:00 AM' or '14:30'
    #[arg(long)]
    pub at: String,
    /// End time of each occurrence
    #[arg(long)]
    pub until: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Only list events starting in the week containing this date
    #[arg(long)]
    pub week: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveCommand {
    /// Title of the event to remove (case-insensitive)
    pub title: String,
    /// Remove without confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct WeekCommand {
    /// Any date in the week to show (defaults to today)
    pub date: Option<String>,
    /// Print plain text instead of a table
    #[arg(long)]
    pub plain: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportCommand {
    /// Output directory (defaults to the configured export_dir)
    #[arg(long)]
    pub dir: Option<std::path::PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ScheduleCommand {
    #[command(subcommand)]
    pub command: ScheduleSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ScheduleSubcommand {
    /// Create a new, empty schedule
    Add(ScheduleNameCommand),
    /// List schedules
    List,
    /// Make a schedule the current one
    Use(ScheduleNameCommand),
    /// Delete a schedule and all its events
    Remove(ScheduleRemoveCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct ScheduleNameCommand {
    /// The name of the schedule
    pub name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ScheduleRemoveCommand {
    /// The name of the schedule to delete
    pub name: String,
    /// Delete without confirmation
    #[arg(short, long)]
    pub force: bool,
}
