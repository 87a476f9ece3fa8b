use itertools::Itertools;

const MINUTE: f64 = 60.;
const HOUR: f64 = 60. * MINUTE;
const DAY: f64 = 24. * HOUR;
const YEAR: f64 = 365. * DAY;

/// Formats a duration in seconds as years, days, hours, minutes and seconds.
/// Zero units are left out.
pub fn format_guess_time(seconds: f64) -> String {
    let parts = [
        ((seconds / YEAR).floor(), "years"),
        ((seconds / DAY).floor() % 365., "days"),
        ((seconds / HOUR).floor() % 24., "hours"),
        ((seconds / MINUTE).floor() % 60., "minutes"),
        (seconds.floor() % 60., "seconds"),
    ];

    let formatted = parts
        .iter()
        .filter(|(number, _)| *number > 0.)
        .map(|(number, unit)| format!("{number:.0} {unit}"))
        .join(", ");

    if formatted.is_empty() {
        "< 1 second".to_owned()
    } else {
        formatted
    }
}
