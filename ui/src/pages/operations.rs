use yew::prelude::*;

use crate::hooks::use_title;

/// Live scoring and event-day tools. Not available yet.
#[function_component]
pub fn OperationsPage() -> Html {
    use_title("Event Operations");
    html! {
        <div class="text-center py-16 space-y-4">
            <div class="text-5xl">{"🏌️"}</div>
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                {"Event Operations"}
            </h1>
            <p class="text-lg font-medium text-neutral-700 dark:text-neutral-300">
                {"Coming Soon"}
            </p>
            <p class="max-w-md mx-auto text-sm text-neutral-600 dark:text-neutral-400">
                {"Live scoring, tee times and leaderboards will be managed from here."}
            </p>
        </div>
    }
}
