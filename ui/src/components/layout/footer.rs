use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::use_fetch;

/// Shows whether the backend answers its health check.
#[function_component]
pub fn Footer() -> Html {
    let health = use_fetch((), || async {
        get_api_client()
            .health_check()
            .await
            .map_err(|e| e.to_string())
    });

    let (dot, status) = if health.is_loading {
        ("bg-neutral-400", "Checking API...")
    } else if health.error.is_some() {
        ("bg-red-500", "API unreachable")
    } else {
        ("bg-green-500", "API online")
    };

    html! {
        <footer class="bg-white dark:bg-neutral-900 border-t border-neutral-200 dark:border-neutral-700 mt-auto">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex justify-between items-center text-sm text-neutral-600 dark:text-neutral-400">
                <span>{"Golf Tournament Console"}</span>
                <button
                    onclick={health.refetch.reform(|_: MouseEvent| ())}
                    class="flex items-center gap-2 hover:text-neutral-900 dark:hover:text-white"
                    title="Check again"
                >
                    <span class={classes!("inline-block", "w-2", "h-2", "rounded-full", dot)} />
                    {status}
                </button>
            </div>
        </footer>
    }
}
