//! Display formatting helpers
//!
//! Human-readable durations, mm:ss clocks and long Spanish dates as shown
//! in the journal.

use chrono::{Datelike, NaiveDate};
use std::time::Duration;

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Format a duration with the largest fitting units
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use saludmente::util::format::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(105)), "1m 45s");
/// assert_eq!(format_duration(Duration::from_secs(30)), "30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();

    if total_secs >= 3600 {
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        format!("{}h {}m", hours, minutes)
    } else if total_secs >= 60 {
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        if seconds == 0 {
            format!("{}m", minutes)
        } else {
            format!("{}m {}s", minutes, seconds)
        }
    } else {
        format!("{}s", total_secs)
    }
}

/// Countdown-style clock, e.g. `01:45`
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Long Spanish date, e.g. "lunes, 19 de octubre de 2026"
pub fn spanish_long_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS[date.month0() as usize];
    format!("{}, {} de {} de {}", weekday, date.day(), month, date.year())
}

/// Fraction in [0, 1] as a gauge percentage
pub fn percent(fraction: f64) -> u16 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u16
}
