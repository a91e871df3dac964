use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::hooks::use_title;

#[function_component]
pub fn NotFoundPage() -> Html {
    use_title("Not Found");
    html! {
        <div class="text-center py-16 space-y-4">
            <h1 class="text-4xl font-bold text-neutral-900 dark:text-white">{"404"}</h1>
            <p class="text-neutral-600 dark:text-neutral-300">{"Page not found"}</p>
            <Link<Route>
                to={Route::Dashboard}
                classes="inline-block text-sm text-neutral-700 dark:text-neutral-300 underline"
            >
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
