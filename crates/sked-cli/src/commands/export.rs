use anyhow::Result;
use owo_colors::{OwoColorize, Style};
use std::path::{Path, PathBuf};

use crate::export::export_weeks;
use crate::store::ScheduleStore;
use crate::util::target_schedule;

pub fn export_schedule(
    store: &impl ScheduleStore,
    schedule_name: Option<&str>,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let manager = store.load()?;
    let schedule = target_schedule(&manager, schedule_name)?;
    let written = export_weeks(schedule.events(), dir)?;

    if written.is_empty() {
        println!("Nothing to export: '{}' has no scheduled events.", schedule.name());
        return Ok(written);
    }

    let success_style = Style::new().green().bold();
    println!(
        "{} Exported {} week(s) to {}",
        "✓".style(success_style),
        written.len(),
        dir.display().yellow()
    );
    for path in &written {
        println!("  • {}", path.display());
    }
    Ok(written)
}
