//! Create / edit dialogs for each entity.
//!
//! A form keeps a draft, validates it on submit and hands the resulting
//! details to `on_save` together with a completion callback. The dialog
//! closes itself once the save succeeds.

mod golfer_form;
mod group_form;
mod session_form;
mod shot_form;
mod tournament_form;

pub use golfer_form::GolferForm;
pub use group_form::GroupForm;
pub use session_form::SessionForm;
pub use shot_form::ShotForm;
pub use tournament_form::TournamentForm;
