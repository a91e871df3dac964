//! Types shared between the golf console backend and its browser frontend.
//!
//! Entity "details" structs are the editable fields of a record and double as
//! create/update request bodies. The matching [`responses`] types wrap the
//! details together with the id, server-computed fields and timestamps.

pub mod api_client;
pub mod requests;
pub mod responses;
pub mod validation;

pub use api_client::{APIClient, ClientError};

use derive_more::Display;
use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Id type wrapper helps ensure we don't mix up ids for different tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct TournamentId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct GroupId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct GolferId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct ShotId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
)]
#[cfg_attr(feature = "use-sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct SessionId(pub Uuid);

/// Anything with a stable identity that can be listed, selected and deleted.
pub trait Record {
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug + 'static;

    fn id(&self) -> Self::Id;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub name: String,
    pub description: Option<String>,
    pub start_date: Date,
    pub end_date: Date,
    pub location: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Groups may exist without a tournament, e.g. for practice rounds.
    pub tournament_id: Option<TournamentId>,
    pub nickname: Option<String>,
    pub max_golfers: i32,
}

impl Default for Group {
    fn default() -> Self {
        Self {
            tournament_id: None,
            nickname: None,
            max_golfers: DEFAULT_MAX_GOLFERS,
        }
    }
}

pub const DEFAULT_MAX_GOLFERS: i32 = 4;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(
    feature = "use-sqlx",
    derive(sqlx::Type),
    sqlx(type_name = "skill_level", rename_all = "snake_case")
)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Professional,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Professional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Professional => "professional",
        }
    }
}

impl std::str::FromStr for SkillLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[cfg_attr(
    feature = "use-sqlx",
    derive(sqlx::Type),
    sqlx(type_name = "gender")
)]
pub enum Gender {
    #[serde(rename = "M")]
    #[cfg_attr(feature = "use-sqlx", sqlx(rename = "M"))]
    #[display("Male")]
    Male,
    #[serde(rename = "F")]
    #[cfg_attr(feature = "use-sqlx", sqlx(rename = "F"))]
    #[display("Female")]
    Female,
    #[serde(rename = "O")]
    #[cfg_attr(feature = "use-sqlx", sqlx(rename = "O"))]
    #[display("Other")]
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Self::Male, Self::Female, Self::Other];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Other => "O",
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.code() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(
    feature = "use-sqlx",
    derive(sqlx::Type),
    sqlx(type_name = "shot_type", rename_all = "snake_case")
)]
pub enum ShotType {
    #[default]
    Drive,
    Approach,
    Chip,
    Putt,
    Bunker,
    Other,
}

impl ShotType {
    pub const ALL: [ShotType; 6] = [
        Self::Drive,
        Self::Approach,
        Self::Chip,
        Self::Putt,
        Self::Bunker,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Drive => "drive",
            Self::Approach => "approach",
            Self::Chip => "chip",
            Self::Putt => "putt",
            Self::Bunker => "bunker",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for ShotType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shot_type| shot_type.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Golfer {
    /// Generated by the server when left blank.
    pub golfer_code: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<Date>,
    pub gender: Option<Gender>,
    pub handicap: Option<Decimal>,
    pub skill_level: SkillLevel,
    pub preferred_tee: Option<String>,
    pub group_id: Option<GroupId>,
    pub is_active: bool,
    pub notes: Option<String>,
}

/// Launch-monitor measurements, all optional since devices report partial
/// data depending on shot type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub golfer_id: Option<GolferId>,
    pub session_id: Option<SessionId>,
    pub hole_number: Option<i32>,
    pub shot_type: ShotType,
    pub club_used: Option<String>,
    /// mph
    pub ball_speed: Option<f64>,
    /// mph
    pub club_head_speed: Option<f64>,
    /// degrees
    pub launch_angle: Option<f64>,
    /// rpm
    pub spin_rate: Option<f64>,
    /// yards
    pub carry_distance: Option<f64>,
    /// yards
    pub total_distance: Option<f64>,
    /// degrees
    pub side_angle: Option<f64>,
    pub is_simulated: bool,
    pub launch_monitor_id: Option<String>,
    pub notes: Option<String>,
    /// Defaults to the time of creation.
    pub timestamp: Option<Timestamp>,
}

impl Shot {
    pub fn metric(&self, metric: ShotMetric) -> Option<f64> {
        match metric {
            ShotMetric::BallSpeed => self.ball_speed,
            ShotMetric::ClubHeadSpeed => self.club_head_speed,
            ShotMetric::LaunchAngle => self.launch_angle,
            ShotMetric::SpinRate => self.spin_rate,
            ShotMetric::CarryDistance => self.carry_distance,
            ShotMetric::TotalDistance => self.total_distance,
            ShotMetric::SideAngle => self.side_angle,
        }
    }

    pub fn set_metric(&mut self, metric: ShotMetric, value: Option<f64>) {
        let slot = match metric {
            ShotMetric::BallSpeed => &mut self.ball_speed,
            ShotMetric::ClubHeadSpeed => &mut self.club_head_speed,
            ShotMetric::LaunchAngle => &mut self.launch_angle,
            ShotMetric::SpinRate => &mut self.spin_rate,
            ShotMetric::CarryDistance => &mut self.carry_distance,
            ShotMetric::TotalDistance => &mut self.total_distance,
            ShotMetric::SideAngle => &mut self.side_angle,
        };
        *slot = value;
    }
}

/// A single editable launch-monitor measurement on a shot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ShotMetric {
    #[display("Ball Speed")]
    BallSpeed,
    #[display("Club Head Speed")]
    ClubHeadSpeed,
    #[display("Launch Angle")]
    LaunchAngle,
    #[display("Spin Rate")]
    SpinRate,
    #[display("Carry Distance")]
    CarryDistance,
    #[display("Total Distance")]
    TotalDistance,
    #[display("Side Angle")]
    SideAngle,
}

impl ShotMetric {
    pub const ALL: [ShotMetric; 7] = [
        Self::BallSpeed,
        Self::ClubHeadSpeed,
        Self::LaunchAngle,
        Self::SpinRate,
        Self::CarryDistance,
        Self::TotalDistance,
        Self::SideAngle,
    ];

    /// Database column holding this metric.
    pub fn column(&self) -> &'static str {
        match self {
            Self::BallSpeed => "ball_speed",
            Self::ClubHeadSpeed => "club_head_speed",
            Self::LaunchAngle => "launch_angle",
            Self::SpinRate => "spin_rate",
            Self::CarryDistance => "carry_distance",
            Self::TotalDistance => "total_distance",
            Self::SideAngle => "side_angle",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::BallSpeed | Self::ClubHeadSpeed => " mph",
            Self::LaunchAngle | Self::SideAngle => "°",
            Self::SpinRate => " rpm",
            Self::CarryDistance | Self::TotalDistance => " yds",
        }
    }
}

/// A practice session groups shots recorded outside of tournament play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_name: String,
    /// Defaults to the time of creation.
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub notes: Option<String>,
}
