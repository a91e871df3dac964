//! Field validation shared by the entity forms and the backend.
//!
//! Each `validate_*` function checks every field and reports all failures at
//! once, keyed by field name, so forms can show the message under the
//! offending input.

use std::collections::BTreeMap;
use std::fmt;

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;

use crate::{Golfer, Group, Session, Shot, ShotMetric, Tournament};

pub const TOURNAMENT_NAME_MAX_LEN: usize = 200;
pub const LOCATION_MAX_LEN: usize = 200;
pub const NICKNAME_MAX_LEN: usize = 100;
pub const MIN_GROUP_SIZE: i32 = 1;
pub const MAX_GROUP_SIZE: i32 = 8;
pub const GOLFER_NAME_MAX_LEN: usize = 100;
pub const GOLFER_CODE_MAX_LEN: usize = 20;
pub const PHONE_MAX_LEN: usize = 20;
pub const PREFERRED_TEE_MAX_LEN: usize = 20;
pub const MIN_HANDICAP: Decimal = Decimal::from_parts(10, 0, 0, true, 0);
pub const MAX_HANDICAP: Decimal = Decimal::from_parts(54, 0, 0, false, 0);
pub const SESSION_NAME_MAX_LEN: usize = 200;

/// Validation failures keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. The first error for a field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn too_long(value: &Option<String>, max: usize) -> bool {
    value.as_ref().is_some_and(|v| v.chars().count() > max)
}

/// Loose `local@domain.tld` shape check with no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_tournament(details: &Tournament) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if is_blank(&details.name) {
        errors.add("name", "Tournament name is required");
    } else if details.name.chars().count() > TOURNAMENT_NAME_MAX_LEN {
        errors.add(
            "name",
            "Tournament name must be less than 200 characters",
        );
    }
    if details.end_date < details.start_date {
        errors.add("end_date", "End date must be on or after the start date");
    }
    if too_long(&details.location, LOCATION_MAX_LEN) {
        errors.add("location", "Location must be less than 200 characters");
    }
    errors.into_result()
}

pub fn validate_group(details: &Group) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if !(MIN_GROUP_SIZE..=MAX_GROUP_SIZE).contains(&details.max_golfers) {
        errors.add("max_golfers", "Max golfers must be between 1 and 8");
    }
    if too_long(&details.nickname, NICKNAME_MAX_LEN) {
        errors.add("nickname", "Nickname must be less than 100 characters");
    }
    errors.into_result()
}

/// `today` is used to reject birth dates in the future.
pub fn validate_golfer(
    details: &Golfer,
    today: Date,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if is_blank(&details.first_name) {
        errors.add("first_name", "First name is required");
    } else if details.first_name.chars().count() > GOLFER_NAME_MAX_LEN {
        errors.add("first_name", "First name must be less than 100 characters");
    }
    if is_blank(&details.last_name) {
        errors.add("last_name", "Last name is required");
    } else if details.last_name.chars().count() > GOLFER_NAME_MAX_LEN {
        errors.add("last_name", "Last name must be less than 100 characters");
    }
    if too_long(&details.golfer_code, GOLFER_CODE_MAX_LEN) {
        errors.add("golfer_code", "Golfer ID must be less than 20 characters");
    }
    if let Some(email) = &details.email
        && !is_blank(email)
        && !is_valid_email(email.trim())
    {
        errors.add("email", "Please enter a valid email address");
    }
    if too_long(&details.phone, PHONE_MAX_LEN) {
        errors.add("phone", "Phone number must be less than 20 characters");
    }
    if let Some(handicap) = details.handicap
        && !(MIN_HANDICAP..=MAX_HANDICAP).contains(&handicap)
    {
        errors.add("handicap", "Handicap must be between -10 and 54");
    }
    if too_long(&details.preferred_tee, PREFERRED_TEE_MAX_LEN) {
        errors.add(
            "preferred_tee",
            "Preferred tee must be less than 20 characters",
        );
    }
    if let Some(dob) = details.date_of_birth
        && dob > today
    {
        errors.add("date_of_birth", "Date of birth cannot be in the future");
    }
    errors.into_result()
}

/// Allowed range for a launch-monitor measurement.
pub fn metric_range(metric: ShotMetric) -> (f64, f64) {
    match metric {
        ShotMetric::BallSpeed => (0.0, 250.0),
        ShotMetric::ClubHeadSpeed => (0.0, 200.0),
        ShotMetric::LaunchAngle => (-20.0, 60.0),
        ShotMetric::SpinRate => (0.0, 10_000.0),
        ShotMetric::CarryDistance => (0.0, 400.0),
        ShotMetric::TotalDistance => (0.0, 500.0),
        ShotMetric::SideAngle => (-45.0, 45.0),
    }
}

/// Check a single metric value, returning the error message on failure.
pub fn validate_metric(metric: ShotMetric, value: f64) -> Result<(), String> {
    let (min, max) = metric_range(metric);
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "{metric} must be between {min} and {max}{}",
            metric.unit()
        ))
    }
}

pub fn validate_shot(details: &Shot) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if let Some(hole) = details.hole_number
        && !(1..=18).contains(&hole)
    {
        errors.add("hole_number", "Hole number must be between 1 and 18");
    }
    for metric in ShotMetric::ALL {
        if let Some(value) = details.metric(metric)
            && let Err(message) = validate_metric(metric, value)
        {
            errors.add(metric.column(), message);
        }
    }
    errors.into_result()
}

pub fn validate_session(details: &Session) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if is_blank(&details.session_name) {
        errors.add("session_name", "Session name is required");
    } else if details.session_name.chars().count() > SESSION_NAME_MAX_LEN {
        errors.add(
            "session_name",
            "Session name must be less than 200 characters",
        );
    }
    if let (Some(start), Some(end)) = (details.start_time, details.end_time)
        && end < start
    {
        errors.add("end_time", "End time must be after the start time");
    }
    errors.into_result()
}

/// Build a golfer code such as `JDOE1234` from the first initial, the first
/// three letters of the last name and the last four digits of `now` in
/// milliseconds.
pub fn generate_golfer_code(
    first_name: &str,
    last_name: &str,
    now: Timestamp,
) -> String {
    let initial: String = first_name.trim().chars().take(1).collect();
    let last: String = last_name.trim().chars().take(3).collect();
    let millis = now.as_millisecond().rem_euclid(10_000);
    format!("{}{}{millis:04}", initial.to_uppercase(), last.to_uppercase())
}

/// Whole years between `date_of_birth` and `today`.
pub fn age_on(date_of_birth: Date, today: Date) -> i32 {
    let mut age = i32::from(today.year()) - i32::from(date_of_birth.year());
    if (today.month(), today.day())
        < (date_of_birth.month(), date_of_birth.day())
    {
        age -= 1;
    }
    age
}

/// Ball speed over club head speed, rounded to two decimals.
pub fn smash_factor(
    ball_speed: Option<f64>,
    club_head_speed: Option<f64>,
) -> Option<f64> {
    match (ball_speed, club_head_speed) {
        (Some(ball), Some(club)) if ball > 0.0 && club > 0.0 => {
            Some((ball / club * 100.0).round() / 100.0)
        }
        _ => None,
    }
}

/// Display name for a group without a nickname.
pub fn group_display_name(nickname: Option<&str>, group_number: i32) -> String {
    match nickname.map(str::trim) {
        Some(nickname) if !nickname.is_empty() => nickname.to_string(),
        _ => format!("Group {group_number}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ShotType, SkillLevel};
    use jiff::civil::date;
    use rust_decimal::dec;

    fn golfer() -> Golfer {
        Golfer {
            golfer_code: None,
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: None,
            phone: None,
            date_of_birth: None,
            gender: None,
            handicap: None,
            skill_level: SkillLevel::Intermediate,
            preferred_tee: None,
            group_id: None,
            is_active: true,
            notes: None,
        }
    }

    #[test]
    fn tournament_requires_name_and_ordered_dates() {
        let details = Tournament {
            name: "  ".into(),
            description: None,
            start_date: date(2025, 6, 10),
            end_date: date(2025, 6, 9),
            location: Some("x".repeat(201)),
            is_active: true,
        };
        let errors = validate_tournament(&details).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("name"), Some("Tournament name is required"));
        assert!(errors.get("end_date").is_some());
        assert!(errors.get("location").is_some());

        let details = Tournament {
            name: "Spring Open".into(),
            end_date: date(2025, 6, 10),
            location: None,
            ..details
        };
        assert!(validate_tournament(&details).is_ok());
    }

    #[test]
    fn group_size_bounds() {
        for (max_golfers, ok) in [(0, false), (1, true), (8, true), (9, false)]
        {
            let group = Group {
                max_golfers,
                ..Default::default()
            };
            assert_eq!(validate_group(&group).is_ok(), ok, "{max_golfers}");
        }
    }

    #[test]
    fn golfer_field_rules() {
        let today = date(2025, 6, 1);
        assert!(validate_golfer(&golfer(), today).is_ok());

        let bad = Golfer {
            first_name: String::new(),
            email: Some("not-an-email".into()),
            handicap: Some(dec!(54.5)),
            date_of_birth: Some(date(2025, 6, 2)),
            golfer_code: Some("X".repeat(21)),
            ..golfer()
        };
        let errors = validate_golfer(&bad, today).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                "date_of_birth",
                "email",
                "first_name",
                "golfer_code",
                "handicap"
            ]
        );

        let edge = Golfer {
            handicap: Some(dec!(-10)),
            email: Some("jane@club.golf".into()),
            ..golfer()
        };
        assert!(validate_golfer(&edge, today).is_ok());
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a@.c"));
    }

    #[test]
    fn shot_metric_ranges() {
        let shot = Shot {
            hole_number: Some(19),
            ball_speed: Some(251.0),
            launch_angle: Some(-20.0),
            side_angle: Some(45.5),
            shot_type: ShotType::Drive,
            ..Default::default()
        };
        let errors = validate_shot(&shot).unwrap_err();
        assert!(errors.get("hole_number").is_some());
        assert_eq!(
            errors.get("ball_speed"),
            Some("Ball Speed must be between 0 and 250 mph")
        );
        assert!(errors.get("launch_angle").is_none());
        assert!(errors.get("side_angle").is_some());
        assert!(validate_metric(ShotMetric::SpinRate, f64::NAN).is_err());
    }

    #[test]
    fn session_end_after_start() {
        let start: Timestamp = "2025-06-01T10:00:00Z".parse().unwrap();
        let session = Session {
            session_name: "Range".into(),
            start_time: Some(start),
            end_time: Some(start - jiff::SignedDuration::from_secs(60)),
            notes: None,
        };
        let errors = validate_session(&session).unwrap_err();
        assert!(errors.get("end_time").is_some());
    }

    #[test]
    fn golfer_code_generation() {
        let now = Timestamp::from_millisecond(1_717_000_001_234).unwrap();
        assert_eq!(generate_golfer_code("jane", "doe", now), "JDOE1234");
        assert_eq!(generate_golfer_code("Al", "Li", now), "ALI1234");
        let now = Timestamp::from_millisecond(1_717_000_000_007).unwrap();
        assert_eq!(generate_golfer_code("Bo", "Smith", now), "BSMI0007");
    }

    #[test]
    fn age_counts_whole_years() {
        let dob = date(1990, 6, 15);
        assert_eq!(age_on(dob, date(2025, 6, 14)), 34);
        assert_eq!(age_on(dob, date(2025, 6, 15)), 35);
    }

    #[test]
    fn smash_factor_rounding() {
        assert_eq!(smash_factor(Some(150.0), Some(100.0)), Some(1.5));
        assert_eq!(smash_factor(Some(160.0), Some(107.0)), Some(1.5));
        assert_eq!(smash_factor(Some(149.0), Some(0.0)), None);
        assert_eq!(smash_factor(None, Some(100.0)), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(group_display_name(Some("Eagles"), 3), "Eagles");
        assert_eq!(group_display_name(Some(" "), 3), "Group 3");
        assert_eq!(group_display_name(None, 1), "Group 1");
    }
}
