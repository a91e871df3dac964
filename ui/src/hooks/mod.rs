pub mod use_fetch;
pub mod use_golfers;
pub mod use_groups;
pub mod use_resource;
pub mod use_sessions;
pub mod use_shots;
pub mod use_system_theme;
pub mod use_title;
pub mod use_tournaments;

pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_golfers::use_golfers;
pub use use_groups::{GroupsHandle, use_groups};
pub use use_resource::{Done, Resource, ResourceHandle, use_resource};
pub use use_sessions::use_sessions;
pub use use_shots::{ShotsHandle, use_shots};
pub use use_system_theme::use_system_theme;
pub use use_title::use_title;
pub use use_tournaments::use_tournaments;

/// Distinguishes "not fetched yet" from "fetched but empty".
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::NotFetched => None,
            Self::Fetched(data) => Some(data),
        }
    }
}
