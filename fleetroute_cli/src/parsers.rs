use jiff::{Timestamp, civil::Date, tz::TimeZone};

fn parse_bound(input: &str, end_of_day: bool) -> Result<Timestamp, String> {
    if let Ok(timestamp) = input.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    let date = input
        .parse::<Date>()
        .map_err(|_| format!("Invalid date or timestamp: {input}"))?;

    let datetime = if end_of_day {
        date.at(23, 59, 59, 0)
    } else {
        date.at(0, 0, 0, 0)
    };

    datetime
        .to_zoned(TimeZone::UTC)
        .map(|zoned| zoned.timestamp())
        .map_err(|error| error.to_string())
}

/// `2024-03-04` is the start of that day in UTC.
pub fn parse_from(input: &str) -> Result<Timestamp, String> {
    parse_bound(input, false)
}

/// `2024-03-04` is the last second of that day in UTC, the window is inclusive.
pub fn parse_till(input: &str) -> Result<Timestamp, String> {
    parse_bound(input, true)
}
