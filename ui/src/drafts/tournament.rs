use jiff::civil::Date;
use payloads::{
    Tournament,
    validation::{FieldErrors, validate_tournament},
};

use super::{optional, parse_optional, text};

#[derive(Debug, Clone, PartialEq)]
pub struct TournamentDraft {
    pub name: String,
    pub description: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub is_active: bool,
}

impl TournamentDraft {
    /// A new single-day tournament on `today`.
    pub fn new(today: Date) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            start_date: today.to_string(),
            end_date: today.to_string(),
            location: String::new(),
            is_active: true,
        }
    }

    pub fn into_details(self) -> Result<Tournament, FieldErrors> {
        let mut errors = FieldErrors::new();
        let start_date =
            required_date(&self.start_date, "start_date", &mut errors);
        let end_date = required_date(&self.end_date, "end_date", &mut errors);
        let (Some(start_date), Some(end_date)) = (start_date, end_date) else {
            return Err(errors);
        };

        let details = Tournament {
            name: self.name.trim().to_string(),
            description: optional(&self.description),
            start_date,
            end_date,
            location: optional(&self.location),
            is_active: self.is_active,
        };
        validate_tournament(&details)?;
        Ok(details)
    }
}

fn required_date(
    value: &str,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<Date> {
    if value.trim().is_empty() {
        errors.add(field, "Date is required");
        return None;
    }
    parse_optional(value, field, "Please enter a valid date", errors)
}

impl From<&Tournament> for TournamentDraft {
    fn from(details: &Tournament) -> Self {
        Self {
            name: details.name.clone(),
            description: text(&details.description),
            start_date: details.start_date.to_string(),
            end_date: details.end_date.to_string(),
            location: text(&details.location),
            is_active: details.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn blank_optionals_become_none() {
        let draft = TournamentDraft {
            name: "  Spring Classic ".into(),
            location: "   ".into(),
            ..TournamentDraft::new(date(2025, 5, 1))
        };
        let details = draft.into_details().unwrap();
        assert_eq!(details.name, "Spring Classic");
        assert_eq!(details.location, None);
        assert_eq!(details.end_date, date(2025, 5, 1));
    }

    #[test]
    fn dates_must_parse_and_be_ordered() {
        let draft = TournamentDraft {
            name: "Spring Classic".into(),
            start_date: "05/01/2025".into(),
            ..TournamentDraft::new(date(2025, 5, 1))
        };
        let errors = draft.into_details().unwrap_err();
        assert_eq!(errors.get("start_date"), Some("Please enter a valid date"));

        let draft = TournamentDraft {
            name: "Spring Classic".into(),
            end_date: "2025-04-30".into(),
            ..TournamentDraft::new(date(2025, 5, 1))
        };
        let errors = draft.into_details().unwrap_err();
        assert!(errors.get("end_date").is_some());
    }

    #[test]
    fn edits_start_from_the_record() {
        let details = Tournament {
            name: "Member Guest".into(),
            description: None,
            start_date: date(2025, 6, 7),
            end_date: date(2025, 6, 8),
            location: Some("North Course".into()),
            is_active: false,
        };
        let draft = TournamentDraft::from(&details);
        assert_eq!(draft.start_date, "2025-06-07");
        assert_eq!(draft.into_details(), Ok(details));
    }
}
