use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;
use yewdux::prelude::*;

use crate::theme::{ThemeState, apply_theme_to_document};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn dark_media_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok()?
}

fn set_system_preference(dispatch: &Dispatch<ThemeState>, prefers_dark: bool) {
    dispatch.reduce_mut(move |state| {
        state.system_prefers_dark = prefers_dark;
        state.effective_theme = state.resolve(state.theme);
        apply_theme_to_document(state.effective_theme);
    });
}

/// Track the system color scheme so the System theme follows it.
#[hook]
pub fn use_system_theme() {
    let dispatch = use_dispatch::<ThemeState>();

    use_effect_with((), move |_| {
        let media_query = dark_media_query();
        let prefers_dark =
            media_query.as_ref().is_some_and(MediaQueryList::matches);
        set_system_preference(&dispatch, prefers_dark);

        let closure =
            Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
                set_system_preference(&dispatch, event.matches());
            }) as Box<dyn FnMut(MediaQueryListEvent)>);

        if let Some(media_query) = &media_query {
            let _ = media_query.add_event_listener_with_callback(
                "change",
                closure.as_ref().unchecked_ref(),
            );
        }

        // Rust retains ownership of the closure, JS only has a pointer to it
        move || {
            if let Some(media_query) = media_query {
                let _ = media_query.remove_event_listener_with_callback(
                    "change",
                    closure.as_ref().unchecked_ref(),
                );
            }
            drop(closure);
        }
    });
}
