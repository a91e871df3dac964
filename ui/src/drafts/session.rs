use jiff::{Timestamp, tz::TimeZone};
use payloads::{
    Session,
    validation::{FieldErrors, validate_session},
};

use super::{optional, text};
use crate::utils::time::{datetime_input_value, parse_datetime_input};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionDraft {
    /// Optional in the form; a blank name is replaced by the start time.
    pub session_name: String,
    /// `<input type="datetime-local">` values.
    pub start_time: String,
    pub end_time: String,
    pub notes: String,
}

impl SessionDraft {
    pub fn from_details(details: &Session, tz: &TimeZone) -> Self {
        let input = |ts: Option<Timestamp>| {
            ts.map(|ts| datetime_input_value(ts, tz)).unwrap_or_default()
        };
        Self {
            session_name: details.session_name.clone(),
            start_time: input(details.start_time),
            end_time: input(details.end_time),
            notes: text(&details.notes),
        }
    }

    pub fn into_details(
        self,
        now: Timestamp,
        tz: &TimeZone,
    ) -> Result<Session, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut time = |value: &str, field| {
            if value.trim().is_empty() {
                return None;
            }
            let parsed = parse_datetime_input(value, tz);
            if parsed.is_none() {
                errors.add(field, "Please enter a valid date and time");
            }
            parsed
        };
        let start_time = time(&self.start_time, "start_time");
        let end_time = time(&self.end_time, "end_time");
        if !errors.is_empty() {
            return Err(errors);
        }

        let session_name = match optional(&self.session_name) {
            Some(name) => name,
            None => format!(
                "Session @ {}",
                now.to_zoned(tz.clone()).strftime("%H:%M:%S")
            ),
        };
        let details = Session {
            session_name,
            start_time,
            end_time,
            notes: optional(&self.notes),
        };
        validate_session(&details)?;
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        "2025-04-10T09:30:15Z".parse().unwrap()
    }

    #[test]
    fn blank_names_use_the_clock() {
        let details = SessionDraft::default()
            .into_details(now(), &TimeZone::UTC)
            .unwrap();
        assert_eq!(details.session_name, "Session @ 09:30:15");
        assert_eq!(details.start_time, None);
    }

    #[test]
    fn times_are_checked() {
        let draft = SessionDraft {
            session_name: "Driver work".into(),
            start_time: "2025-04-10T10:00".into(),
            end_time: "2025-04-10T09:00".into(),
            notes: String::new(),
        };
        let errors = draft.into_details(now(), &TimeZone::UTC).unwrap_err();
        assert!(errors.get("end_time").is_some());

        let draft = SessionDraft {
            start_time: "soon".into(),
            ..SessionDraft::default()
        };
        let errors = draft.into_details(now(), &TimeZone::UTC).unwrap_err();
        assert_eq!(
            errors.get("start_time"),
            Some("Please enter a valid date and time")
        );
    }
}
