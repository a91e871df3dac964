use payloads::{
    Group, TournamentId,
    validation::{FieldErrors, validate_group},
};

use super::{optional, text};

#[derive(Debug, Clone, PartialEq)]
pub struct GroupDraft {
    pub tournament_id: Option<TournamentId>,
    pub nickname: String,
    pub max_golfers: String,
}

impl Default for GroupDraft {
    fn default() -> Self {
        Self::from(&Group::default())
    }
}

impl GroupDraft {
    pub fn in_tournament(tournament_id: Option<TournamentId>) -> Self {
        Self {
            tournament_id,
            ..Self::default()
        }
    }

    pub fn into_details(self) -> Result<Group, FieldErrors> {
        let Ok(max_golfers) = self.max_golfers.trim().parse() else {
            let mut errors = FieldErrors::new();
            errors.add("max_golfers", "Max golfers must be between 1 and 8");
            return Err(errors);
        };
        let details = Group {
            tournament_id: self.tournament_id,
            nickname: optional(&self.nickname),
            max_golfers,
        };
        validate_group(&details)?;
        Ok(details)
    }
}

impl From<&Group> for GroupDraft {
    fn from(details: &Group) -> Self {
        Self {
            tournament_id: details.tournament_id,
            nickname: text(&details.nickname),
            max_golfers: details.max_golfers.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_a_foursome() {
        let details = GroupDraft::default().into_details().unwrap();
        assert_eq!(details.max_golfers, 4);
        assert_eq!(details.nickname, None);
    }

    #[test]
    fn capacity_is_checked() {
        for input in ["", "four", "0", "9"] {
            let draft = GroupDraft {
                max_golfers: input.into(),
                ..GroupDraft::default()
            };
            let errors = draft.into_details().unwrap_err();
            assert!(errors.get("max_golfers").is_some(), "{input:?}");
        }
    }
}
