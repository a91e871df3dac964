use std::collections::HashMap;

use jiff::tz::TimeZone;
use payloads::{
    GolferId, SessionId, Shot, ShotMetric, ShotType,
    validation::{FieldErrors, smash_factor, validate_shot},
};

use super::{optional, parse_optional, text};
use crate::utils::format::parse_number;
use crate::utils::time::{datetime_input_value, parse_datetime_input};

pub const CLUBS: [&str; 17] = [
    "Driver", "3 Wood", "5 Wood", "7 Wood", "Hybrid", "3 Iron", "4 Iron",
    "5 Iron", "6 Iron", "7 Iron", "8 Iron", "9 Iron", "Pitching Wedge",
    "Gap Wedge", "Sand Wedge", "Lob Wedge", "Putter",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotDraft {
    pub golfer_id: Option<GolferId>,
    pub session_id: Option<SessionId>,
    pub hole_number: String,
    pub shot_type: ShotType,
    pub club_used: String,
    metrics: HashMap<ShotMetric, String>,
    pub is_simulated: bool,
    pub launch_monitor_id: String,
    pub notes: String,
    /// `<input type="datetime-local">` value; blank lets the server stamp it.
    pub timestamp: String,
}

impl ShotDraft {
    pub fn for_golfer(
        golfer_id: Option<GolferId>,
        session_id: Option<SessionId>,
    ) -> Self {
        Self {
            golfer_id,
            session_id,
            ..Self::default()
        }
    }

    pub fn from_details(details: &Shot, tz: &TimeZone) -> Self {
        let metrics = ShotMetric::ALL
            .into_iter()
            .filter_map(|m| Some((m, details.metric(m)?.to_string())))
            .collect();
        Self {
            golfer_id: details.golfer_id,
            session_id: details.session_id,
            hole_number: details
                .hole_number
                .map(|h| h.to_string())
                .unwrap_or_default(),
            shot_type: details.shot_type,
            club_used: text(&details.club_used),
            metrics,
            is_simulated: details.is_simulated,
            launch_monitor_id: text(&details.launch_monitor_id),
            notes: text(&details.notes),
            timestamp: details
                .timestamp
                .map(|ts| datetime_input_value(ts, tz))
                .unwrap_or_default(),
        }
    }

    pub fn metric(&self, metric: ShotMetric) -> &str {
        self.metrics.get(&metric).map(String::as_str).unwrap_or_default()
    }

    pub fn set_metric(&mut self, metric: ShotMetric, value: String) {
        self.metrics.insert(metric, value);
    }

    /// Smash factor for the speeds typed so far.
    pub fn smash_factor(&self) -> Option<f64> {
        smash_factor(
            parse_number(self.metric(ShotMetric::BallSpeed)),
            parse_number(self.metric(ShotMetric::ClubHeadSpeed)),
        )
    }

    pub fn into_details(self, tz: &TimeZone) -> Result<Shot, FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.golfer_id.is_none() && self.session_id.is_none() {
            errors.add("golfer_id", "Please select a golfer");
        }
        let hole_number = parse_optional(
            &self.hole_number,
            "hole_number",
            "Hole number must be between 1 and 18",
            &mut errors,
        );
        let timestamp = if self.timestamp.trim().is_empty() {
            None
        } else {
            let parsed = parse_datetime_input(&self.timestamp, tz);
            if parsed.is_none() {
                errors.add("timestamp", "Please enter a valid date and time");
            }
            parsed
        };

        let mut details = Shot {
            golfer_id: self.golfer_id,
            session_id: self.session_id,
            hole_number,
            shot_type: self.shot_type,
            club_used: optional(&self.club_used),
            is_simulated: self.is_simulated,
            launch_monitor_id: optional(&self.launch_monitor_id),
            notes: optional(&self.notes),
            timestamp,
            ..Shot::default()
        };
        for metric in ShotMetric::ALL {
            let input = self.metric(metric);
            if input.trim().is_empty() {
                continue;
            }
            match parse_number(input) {
                Some(value) => details.set_metric(metric, Some(value)),
                None => errors.add(
                    metric.column(),
                    format!("{metric} must be a number"),
                ),
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        validate_shot(&details)?;
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn golfer() -> Option<GolferId> {
        Some(GolferId(Uuid::new_v4()))
    }

    #[test]
    fn live_smash_factor() {
        let mut draft = ShotDraft::for_golfer(golfer(), None);
        assert_eq!(draft.smash_factor(), None);
        draft.set_metric(ShotMetric::BallSpeed, "150".into());
        draft.set_metric(ShotMetric::ClubHeadSpeed, "100".into());
        assert_eq!(draft.smash_factor(), Some(1.5));
        draft.set_metric(ShotMetric::ClubHeadSpeed, "fast".into());
        assert_eq!(draft.smash_factor(), None);
    }

    #[test]
    fn needs_a_golfer_or_session() {
        let errors = ShotDraft::default()
            .into_details(&TimeZone::UTC)
            .unwrap_err();
        assert_eq!(errors.get("golfer_id"), Some("Please select a golfer"));

        let session = Some(SessionId(Uuid::new_v4()));
        let details = ShotDraft::for_golfer(None, session)
            .into_details(&TimeZone::UTC)
            .unwrap();
        assert_eq!(details.session_id, session);
        assert_eq!(details.shot_type, ShotType::Drive);
    }

    #[test]
    fn metrics_are_parsed_and_ranged() {
        let mut draft = ShotDraft::for_golfer(golfer(), None);
        draft.set_metric(ShotMetric::CarryDistance, "245.5".into());
        draft.set_metric(ShotMetric::SpinRate, "lots".into());
        let errors = draft.clone().into_details(&TimeZone::UTC).unwrap_err();
        assert_eq!(errors.get("spin_rate"), Some("Spin Rate must be a number"));

        draft.set_metric(ShotMetric::SpinRate, "12000".into());
        let errors = draft.clone().into_details(&TimeZone::UTC).unwrap_err();
        assert!(errors.get("spin_rate").is_some());

        draft.set_metric(ShotMetric::SpinRate, String::new());
        let details = draft.into_details(&TimeZone::UTC).unwrap();
        assert_eq!(details.carry_distance, Some(245.5));
        assert_eq!(details.spin_rate, None);
    }

    #[test]
    fn edits_round_trip_the_timestamp() {
        let details = Shot {
            golfer_id: golfer(),
            ball_speed: Some(160.0),
            timestamp: Some("2025-04-10T14:05:00Z".parse().unwrap()),
            ..Shot::default()
        };
        let draft = ShotDraft::from_details(&details, &TimeZone::UTC);
        assert_eq!(draft.metric(ShotMetric::BallSpeed), "160");
        assert_eq!(draft.timestamp, "2025-04-10T14:05");
        assert_eq!(draft.into_details(&TimeZone::UTC), Ok(details));
    }
}
