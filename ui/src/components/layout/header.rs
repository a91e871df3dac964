use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::theme::ThemeToggle;

#[function_component]
pub fn Header() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="bg-white dark:bg-neutral-800 border-b border-neutral-200 dark:border-neutral-700">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <Link<Route> to={Route::Dashboard} classes="flex-shrink-0">
                        <h1 class="text-xl font-semibold text-neutral-900 dark:text-white">
                            {"⛳ Golf Console"}
                        </h1>
                    </Link<Route>>
                    <ThemeToggle />
                </div>
                <nav class="flex gap-1 overflow-x-auto -mb-px">
                    {for Route::NAVIGATION.into_iter().map(|route| {
                        let classes = if current == Some(route) {
                            "px-3 py-2 text-sm font-medium whitespace-nowrap border-b-2 \
                             border-neutral-900 dark:border-white text-neutral-900 dark:text-white"
                        } else {
                            "px-3 py-2 text-sm font-medium whitespace-nowrap border-b-2 \
                             border-transparent text-neutral-600 dark:text-neutral-400 \
                             hover:text-neutral-900 dark:hover:text-white"
                        };
                        html! {
                            <Link<Route> to={route} {classes}>
                                {route.label()}
                            </Link<Route>>
                        }
                    })}
                </nav>
            </div>
        </header>
    }
}
