use jiff::{Timestamp, Zoned, civil::Date, tz::TimeZone};

/// Localize a timestamp to the browser's timezone.
pub fn localize_timestamp(timestamp: Timestamp) -> Zoned {
    timestamp.to_zoned(TimeZone::system())
}

/// Today's date in the browser's timezone.
pub fn today() -> Date {
    Zoned::now().date()
}

pub fn format_date(date: Date) -> String {
    date.strftime("%b %d, %Y").to_string()
}

pub fn format_timestamp(timestamp: Timestamp) -> String {
    localize_timestamp(timestamp)
        .strftime("%b %d, %Y %H:%M")
        .to_string()
}

/// Value for an `<input type="datetime-local">`.
pub fn datetime_input_value(timestamp: Timestamp, tz: &TimeZone) -> String {
    timestamp
        .to_zoned(tz.clone())
        .strftime("%Y-%m-%dT%H:%M")
        .to_string()
}

/// Parse an `<input type="datetime-local">` value in the given timezone.
pub fn parse_datetime_input(value: &str, tz: &TimeZone) -> Option<Timestamp> {
    let datetime: jiff::civil::DateTime = value.trim().parse().ok()?;
    datetime.to_zoned(tz.clone()).ok().map(|zoned| zoned.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn datetime_inputs() {
        let ts: Timestamp = "2025-04-10T14:05:00Z".parse().unwrap();
        let value = datetime_input_value(ts, &TimeZone::UTC);
        assert_eq!(value, "2025-04-10T14:05");
        assert_eq!(parse_datetime_input(&value, &TimeZone::UTC), Some(ts));
        assert_eq!(parse_datetime_input("yesterday", &TimeZone::UTC), None);
    }

    #[test]
    fn dates_read_naturally() {
        assert_eq!(format_date(date(2025, 4, 10)), "Apr 10, 2025");
    }
}
