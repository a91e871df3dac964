use jiff::civil::Date;
use payloads::{
    Gender, Golfer, GroupId, SkillLevel,
    validation::{FieldErrors, validate_golfer},
};
use rust_decimal::Decimal;

use super::{optional, parse_optional, text};

#[derive(Debug, Clone, PartialEq)]
pub struct GolferDraft {
    /// Left blank to have the server generate one.
    pub golfer_code: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: Option<Gender>,
    pub handicap: String,
    pub skill_level: SkillLevel,
    pub preferred_tee: String,
    pub group_id: Option<GroupId>,
    pub is_active: bool,
    pub notes: String,
}

impl Default for GolferDraft {
    fn default() -> Self {
        Self {
            golfer_code: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: String::new(),
            gender: None,
            handicap: String::new(),
            skill_level: SkillLevel::default(),
            preferred_tee: String::new(),
            group_id: None,
            is_active: true,
            notes: String::new(),
        }
    }
}

impl GolferDraft {
    pub fn in_group(group_id: Option<GroupId>) -> Self {
        Self {
            group_id,
            ..Self::default()
        }
    }

    pub fn into_details(self, today: Date) -> Result<Golfer, FieldErrors> {
        let mut errors = FieldErrors::new();
        let date_of_birth = parse_optional(
            &self.date_of_birth,
            "date_of_birth",
            "Please enter a valid date",
            &mut errors,
        );
        let handicap = parse_optional::<Decimal>(
            &self.handicap,
            "handicap",
            "Handicap must be a number",
            &mut errors,
        );
        if !errors.is_empty() {
            return Err(errors);
        }

        let details = Golfer {
            golfer_code: optional(&self.golfer_code),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: optional(&self.email),
            phone: optional(&self.phone),
            date_of_birth,
            gender: self.gender,
            handicap,
            skill_level: self.skill_level,
            preferred_tee: optional(&self.preferred_tee),
            group_id: self.group_id,
            is_active: self.is_active,
            notes: optional(&self.notes),
        };
        validate_golfer(&details, today)?;
        Ok(details)
    }
}

impl From<&Golfer> for GolferDraft {
    fn from(details: &Golfer) -> Self {
        Self {
            golfer_code: text(&details.golfer_code),
            first_name: details.first_name.clone(),
            last_name: details.last_name.clone(),
            email: text(&details.email),
            phone: text(&details.phone),
            date_of_birth: details
                .date_of_birth
                .map(|d| d.to_string())
                .unwrap_or_default(),
            gender: details.gender,
            handicap: details
                .handicap
                .map(|h| h.to_string())
                .unwrap_or_default(),
            skill_level: details.skill_level,
            preferred_tee: text(&details.preferred_tee),
            group_id: details.group_id,
            is_active: details.is_active,
            notes: text(&details.notes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use rust_decimal::dec;

    fn named() -> GolferDraft {
        GolferDraft {
            first_name: "Annika".into(),
            last_name: "Sorenstam".into(),
            ..GolferDraft::default()
        }
    }

    #[test]
    fn parses_typed_values() {
        let draft = GolferDraft {
            handicap: " 12.4 ".into(),
            date_of_birth: "1970-10-09".into(),
            email: "  ".into(),
            ..named()
        };
        let details = draft.into_details(date(2025, 1, 1)).unwrap();
        assert_eq!(details.handicap, Some(dec!(12.4)));
        assert_eq!(details.date_of_birth, Some(date(1970, 10, 9)));
        assert_eq!(details.email, None);
        assert_eq!(details.golfer_code, None);
        assert!(details.is_active);
    }

    #[test]
    fn unparseable_inputs_are_reported_first() {
        let draft = GolferDraft {
            first_name: String::new(),
            handicap: "scratch".into(),
            ..named()
        };
        let errors = draft.into_details(date(2025, 1, 1)).unwrap_err();
        assert_eq!(errors.get("handicap"), Some("Handicap must be a number"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn shared_rules_apply() {
        let draft = GolferDraft {
            email: "annika@".into(),
            handicap: "60".into(),
            date_of_birth: "2030-01-01".into(),
            ..named()
        };
        let errors = draft.into_details(date(2025, 1, 1)).unwrap_err();
        assert!(errors.get("email").is_some());
        assert!(errors.get("handicap").is_some());
        assert!(errors.get("date_of_birth").is_some());
    }
}
