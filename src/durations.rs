//! Production Time Formatting

const MINUTES_PER_HOUR: f64 = 60.0;
const MINUTES_PER_DAY: f64 = MINUTES_PER_HOUR * 24.0;
const MINUTES_PER_MONTH: f64 = MINUTES_PER_DAY * 30.0;

/// Format a production time given in minutes, e.g. `"1 day, 2 hours, 30 seconds"`.
///
/// A month counts as 30 days. Zero components are omitted and fractional
/// minutes are rounded to whole seconds. Zero, negative and non-finite inputs
/// format as an empty string.
pub fn format_production_time(minutes: f64) -> String {
    if !minutes.is_finite() || minutes <= 0.0 {
        return String::new();
    }

    let mut remaining = minutes;

    let months = (remaining / MINUTES_PER_MONTH).floor();
    remaining %= MINUTES_PER_MONTH;

    let days = (remaining / MINUTES_PER_DAY).floor();
    remaining %= MINUTES_PER_DAY;

    let hours = (remaining / MINUTES_PER_HOUR).floor();
    remaining %= MINUTES_PER_HOUR;

    let mins = remaining.floor();
    let seconds = ((remaining - mins) * 60.0).round();

    [
        (months, "month"),
        (days, "day"),
        (hours, "hour"),
        (mins, "minute"),
        (seconds, "second"),
    ]
    .into_iter()
    .filter(|&(count, _)| count > 0.0)
    .map(|(count, unit)| {
        let plural = if count > 1.0 { "s" } else { "" };

        format!("{count} {unit}{plural}")
    })
    .collect::<Vec<_>>()
    .join(", ")
}
