//! Browser console for tournaments, groups, golfers, shots and practice
//! sessions.

use payloads::APIClient;
use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod contexts;
mod drafts;
mod hooks;
mod logs;
mod pages;
mod state;
mod theme;
mod utils;

use components::layout::MainLayout;
use contexts::toast::ToastProvider;
use pages::{
    DashboardPage, GolfersPage, GroupsPage, NotFoundPage, OperationsPage,
    SessionsPage, ShotsPage, TournamentsPage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .or_else(|| web_sys::window()?.location().origin().ok())
        .unwrap_or_default();

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| logs::init_logging());
    hooks::use_system_theme();

    html! {
        <BrowserRouter>
            <ToastProvider>
                <MainLayout>
                    <Switch<Route> render={switch} />
                </MainLayout>
            </ToastProvider>
        </BrowserRouter>
    }
}

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/tournaments")]
    Tournaments,
    #[at("/groups")]
    Groups,
    #[at("/golfers")]
    Golfers,
    #[at("/shots")]
    Shots,
    #[at("/sessions")]
    Sessions,
    #[at("/operations")]
    Operations,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entries of the navigation bar, in display order.
    pub const NAVIGATION: [Route; 7] = [
        Route::Dashboard,
        Route::Tournaments,
        Route::Groups,
        Route::Golfers,
        Route::Shots,
        Route::Sessions,
        Route::Operations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Tournaments => "Tournaments",
            Route::Groups => "Groups",
            Route::Golfers => "Golfers",
            Route::Shots => "Shots",
            Route::Sessions => "Practice Sessions",
            Route::Operations => "Event Operations",
            Route::NotFound => "Not Found",
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Tournaments => html! { <TournamentsPage /> },
        Route::Groups => html! { <GroupsPage /> },
        Route::Golfers => html! { <GolfersPage /> },
        Route::Shots => html! { <ShotsPage /> },
        Route::Sessions => html! { <SessionsPage /> },
        Route::Operations => html! { <OperationsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
