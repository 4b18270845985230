use anyhow::{anyhow, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

const TIME_FORMATS: &[&str] = &[
    "%H:%M:%S",    // 14:30:00
    "%H:%M",       // 14:30
    "%I:%M:%S %p", // 9:00:00 AM
    "%I:%M %p",    // 9:00 AM
    "%I:%M%p",     // 9:00AM
];

/// Parse a calendar date like "2025-01-06"
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(input, format).ok())
        .ok_or_else(|| {
            anyhow!(
                "Invalid date: '{}'\n\nSupported formats:\n  • 2025-01-06\n  • 2025/01/06\n  • 06.01.2025",
                input
            )
        })
}

/// Parse a time of day like "9:00 AM", "14:30", "9pm", "noon", "midnight"
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let normalized = input.trim().to_uppercase();

    match normalized.as_str() {
        "NOON" => return fixed_time(12),
        "MIDNIGHT" => return fixed_time(0),
        _ => {}
    }

    if let Some(time) = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&normalized, format).ok())
    {
        return Ok(time);
    }

    // Compact forms: "9PM", "9 AM"
    if let Some(hour) = normalized
        .strip_suffix("AM")
        .or_else(|| normalized.strip_suffix("PM"))
        .and_then(|h| h.trim().parse::<u32>().ok())
        .filter(|h| (1..=12).contains(h))
    {
        let hour = match (hour, normalized.ends_with("PM")) {
            (12, false) => 0,
            (12, true) => 12,
            (h, true) => h + 12,
            (h, false) => h,
        };
        if let Some(time) = NaiveTime::from_hms_opt(hour, 0, 0) {
            return Ok(time);
        }
    }

    Err(anyhow!(
        "Invalid time: '{}'\n\nSupported formats:\n  • 24-hour: '14:30', '09:00'\n  • 12-hour: '2:30 PM', '9:00 AM'\n  • Compact: '2pm', '9am'\n  • Special: 'noon', 'midnight'",
        input.trim()
    ))
}

fn fixed_time(hour: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| anyhow!("Invalid hour: {}", hour))
}

/// Parse "<date> <time>" or "<date>T<time>", e.g. "2025-01-06 09:30"
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    let (date, time) = input
        .split_once('T')
        .or_else(|| input.split_once(' '))
        .ok_or_else(|| anyhow!("Invalid date-time: '{}'. Expected e.g. '2025-01-06 09:30'", input))?;
    Ok(parse_date(date)?.and_time(parse_time(time)?))
}
