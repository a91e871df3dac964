//! Form state as typed by the user.
//!
//! Inputs hold raw strings so half-typed values survive re-renders. Each
//! draft converts into its `payloads` details struct with
//! `into_details`, reporting unparseable inputs first and then running the
//! shared validators, so the form and the backend agree on every rule.

mod golfer;
mod group;
mod session;
mod shot;
mod tournament;

pub use golfer::GolferDraft;
pub use group::GroupDraft;
pub use session::SessionDraft;
pub use shot::{CLUBS, ShotDraft};
pub use tournament::TournamentDraft;

use std::str::FromStr;

use payloads::validation::FieldErrors;

/// Trimmed input, or `None` when blank.
fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse an optional input. Blank is `Ok(None)`; garbage records `message`
/// against `field`.
fn parse_optional<T: FromStr>(
    value: &str,
    field: &'static str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<T> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add(field, message);
            None
        }
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
