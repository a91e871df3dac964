//! Screen filters remembered across navigation.

use payloads::{
    GolferId, GroupId, SessionId, TournamentId,
    requests::{GolferFilter, ShotFilter},
};
use yewdux::prelude::*;

/// Which golfers the Golfers screen lists. A scope whose id is not chosen
/// yet lists nothing rather than everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GolferScope {
    #[default]
    All,
    Tournament(Option<TournamentId>),
    Group(Option<GroupId>),
    Unassigned,
}

/// Which shots the Shots screen lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShotScope {
    #[default]
    All,
    Golfer(Option<GolferId>),
    Group(Option<GroupId>),
    Tournament(Option<TournamentId>),
    Unassigned,
}

pub const GOLFER_SCOPE_MODES: [(&str, &str); 4] = [
    ("all", "All golfers"),
    ("tournament", "By tournament"),
    ("group", "By group"),
    ("unassigned", "Unassigned"),
];

pub const SHOT_SCOPE_MODES: [(&str, &str); 5] = [
    ("all", "All shots"),
    ("golfer", "By golfer"),
    ("group", "By group"),
    ("tournament", "By tournament"),
    ("unassigned", "Unassigned golfers"),
];

impl GolferScope {
    pub fn mode(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Tournament(_) => "tournament",
            Self::Group(_) => "group",
            Self::Unassigned => "unassigned",
        }
    }

    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "tournament" => Self::Tournament(None),
            "group" => Self::Group(None),
            "unassigned" => Self::Unassigned,
            _ => Self::All,
        }
    }

    /// `None` while the scope still needs an id.
    pub fn filter(&self) -> Option<GolferFilter> {
        let filter = match *self {
            Self::All => GolferFilter::default(),
            Self::Tournament(tournament_id) => GolferFilter {
                tournament_id: Some(tournament_id?),
                ..Default::default()
            },
            Self::Group(group_id) => GolferFilter {
                group_id: Some(group_id?),
                ..Default::default()
            },
            Self::Unassigned => GolferFilter {
                unassigned: Some(true),
                ..Default::default()
            },
        };
        Some(filter)
    }

    /// Group to preselect when creating a golfer from this scope.
    pub fn group_id(&self) -> Option<GroupId> {
        match *self {
            Self::Group(group_id) => group_id,
            _ => None,
        }
    }
}

impl ShotScope {
    pub fn mode(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Golfer(_) => "golfer",
            Self::Group(_) => "group",
            Self::Tournament(_) => "tournament",
            Self::Unassigned => "unassigned",
        }
    }

    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "golfer" => Self::Golfer(None),
            "group" => Self::Group(None),
            "tournament" => Self::Tournament(None),
            "unassigned" => Self::Unassigned,
            _ => Self::All,
        }
    }

    /// `None` while the scope still needs an id.
    pub fn filter(&self) -> Option<ShotFilter> {
        let filter = match *self {
            Self::All => ShotFilter::default(),
            Self::Golfer(golfer_id) => ShotFilter {
                golfer_id: Some(golfer_id?),
                ..Default::default()
            },
            Self::Group(group_id) => ShotFilter {
                group_id: Some(group_id?),
                ..Default::default()
            },
            Self::Tournament(tournament_id) => ShotFilter {
                tournament_id: Some(tournament_id?),
                ..Default::default()
            },
            Self::Unassigned => ShotFilter {
                unassigned: Some(true),
                ..Default::default()
            },
        };
        Some(filter)
    }

    pub fn golfer_id(&self) -> Option<GolferId> {
        match *self {
            Self::Golfer(golfer_id) => golfer_id,
            _ => None,
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    pub group_tournament: Option<TournamentId>,
    pub golfer_scope: GolferScope,
    pub shot_scope: ShotScope,
    pub selected_session: Option<SessionId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn scopes_need_an_id() {
        assert_eq!(GolferScope::Group(None).filter(), None);
        let group_id = GroupId(Uuid::new_v4());
        let filter = GolferScope::Group(Some(group_id)).filter();
        assert_eq!(filter.and_then(|f| f.group_id), Some(group_id));
        assert_eq!(
            GolferScope::Unassigned.filter().and_then(|f| f.unassigned),
            Some(true)
        );
        assert_eq!(ShotScope::All.filter(), Some(ShotFilter::default()));
    }

    #[test]
    fn modes_round_trip() {
        for (mode, _) in GOLFER_SCOPE_MODES {
            assert_eq!(GolferScope::from_mode(mode).mode(), mode);
        }
        for (mode, _) in SHOT_SCOPE_MODES {
            assert_eq!(ShotScope::from_mode(mode).mode(), mode);
        }
        assert_eq!(ShotScope::from_mode("bogus"), ShotScope::All);
    }
}
