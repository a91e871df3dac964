use crate::{GolferId, GroupId, Record, SessionId, ShotId, TournamentId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
///
/// `next` and `previous` carry page numbers rather than urls so the client
/// can walk the pages with the same filter it started with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Total number of matching records across all pages.
    pub count: i64,
    pub next: Option<u32>,
    pub previous: Option<u32>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    pub tournament_id: TournamentId,
    pub tournament_details: crate::Tournament,
    pub total_groups: i64,
    pub total_golfers: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for Tournament {
    type Id = TournamentId;

    fn id(&self) -> TournamentId {
        self.tournament_id
    }
}

impl std::ops::Deref for Tournament {
    type Target = crate::Tournament;

    fn deref(&self) -> &Self::Target {
        &self.tournament_details
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentWithGroups {
    pub tournament: Tournament,
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub group_id: GroupId,
    pub group_details: crate::Group,
    /// Sequential within the owning tournament, starting at 1.
    pub group_number: i32,
    /// The nickname if set, otherwise "Group {group_number}".
    pub display_name: String,
    pub tournament_name: Option<String>,
    pub current_golfer_count: i64,
    pub is_full: bool,
    pub available_spots: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for Group {
    type Id = GroupId;

    fn id(&self) -> GroupId {
        self.group_id
    }
}

impl std::ops::Deref for Group {
    type Target = crate::Group;

    fn deref(&self) -> &Self::Target {
        &self.group_details
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupWithGolfers {
    pub group: Group,
    pub golfers: Vec<Golfer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Golfer {
    pub golfer_id: GolferId,
    pub golfer_details: crate::Golfer,
    pub full_name: String,
    /// Whole years, as of the server's current date.
    pub age: Option<i32>,
    pub group_name: Option<String>,
    pub tournament_id: Option<TournamentId>,
    pub tournament_name: Option<String>,
    pub shot_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for Golfer {
    type Id = GolferId;

    fn id(&self) -> GolferId {
        self.golfer_id
    }
}

impl std::ops::Deref for Golfer {
    type Target = crate::Golfer;

    fn deref(&self) -> &Self::Target {
        &self.golfer_details
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub shot_id: ShotId,
    /// The timestamp is always filled in on responses.
    pub shot_details: crate::Shot,
    /// Sequential per golfer, starting at 1.
    pub shot_number: i32,
    pub smash_factor: Option<f64>,
    pub golfer_name: Option<String>,
    pub group_name: Option<String>,
    pub tournament_name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for Shot {
    type Id = ShotId;

    fn id(&self) -> ShotId {
        self.shot_id
    }
}

impl std::ops::Deref for Shot {
    type Target = crate::Shot;

    fn deref(&self) -> &Self::Target {
        &self.shot_details
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: SessionId,
    pub session_details: crate::Session,
    pub shot_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Record for Session {
    type Id = SessionId;

    fn id(&self) -> SessionId {
        self.session_id
    }
}

impl std::ops::Deref for Session {
    type Target = crate::Session;

    fn deref(&self) -> &Self::Target {
        &self.session_details
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDeleteResult {
    pub message: String,
    pub deleted_count: u64,
    pub children_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAssignmentResult {
    pub message: String,
    pub assigned_count: u64,
}

/// Aggregate launch-monitor numbers over a filtered set of shots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotStatistics {
    pub total_shots: i64,
    pub average_ball_speed: Option<f64>,
    pub average_carry_distance: Option<f64>,
    pub average_total_distance: Option<f64>,
    pub longest_total_distance: Option<f64>,
    pub best_smash_factor: Option<f64>,
    pub shots_by_type: Vec<ShotTypeCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotTypeCount {
    pub shot_type: crate::ShotType,
    pub count: i64,
}
