use web_sys::window;
use yew::prelude::*;
use yewdux::prelude::*;

const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => Theme::System,
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct ThemeState {
    pub theme: Theme,
    /// The theme actually shown, with System resolved to Light or Dark.
    pub effective_theme: Theme,
    pub system_prefers_dark: bool,
}

impl ThemeState {
    pub fn resolve(&self, theme: Theme) -> Theme {
        match theme {
            Theme::System if self.system_prefers_dark => Theme::Dark,
            Theme::System => Theme::Light,
            theme => theme,
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_stored_theme() -> Theme {
    local_storage()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok()?)
        .map(|theme| Theme::parse(&theme))
        .unwrap_or_default()
}

fn store_theme(theme: Theme) {
    let Some(storage) = local_storage() else {
        return;
    };
    // System is the default and is stored as the absence of a preference
    let _ = match theme {
        Theme::System => storage.remove_item(STORAGE_KEY),
        theme => storage.set_item(STORAGE_KEY, theme.as_str()),
    };
}

pub fn apply_theme_to_document(effective: Theme) {
    let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = if effective == Theme::Dark {
        html.class_list().add_1("dark")
    } else {
        html.class_list().remove_1("dark")
    };
}

/// Current preference, effective theme and a setter that persists the
/// preference.
#[hook]
pub fn use_theme() -> (Theme, Theme, Callback<Theme>) {
    let (state, dispatch) = use_store::<ThemeState>();

    let setter = use_callback(
        dispatch.clone(),
        move |new_theme: Theme, dispatch: &Dispatch<ThemeState>| {
            store_theme(new_theme);
            dispatch.reduce_mut(|state| {
                state.theme = new_theme;
                state.effective_theme = state.resolve(new_theme);
                apply_theme_to_document(state.effective_theme);
            });
        },
    );

    (state.theme, state.effective_theme, setter)
}

#[function_component]
pub fn ThemeToggle() -> Html {
    let (_, effective_theme, set_theme) = use_theme();

    {
        let set_theme = set_theme.clone();
        use_effect_with((), move |_| {
            set_theme.emit(get_stored_theme());
        });
    }

    let toggle_theme = use_callback(
        (effective_theme, set_theme),
        move |_: MouseEvent, (effective_theme, set_theme)| {
            let new_theme = match *effective_theme {
                Theme::Dark => Theme::Light,
                _ => Theme::Dark,
            };
            set_theme.emit(new_theme);
        },
    );

    let (icon, title) = match effective_theme {
        Theme::Dark => ("☀️", "Switch to light mode"),
        _ => ("🌙", "Switch to dark mode"),
    };

    html! {
        <button
            class="p-2 rounded-lg hover:bg-neutral-200 dark:hover:bg-neutral-700 transition-colors"
            onclick={toggle_theme}
            title={title}
            aria-label={title}
        >
            <span class="text-xl">{icon}</span>
        </button>
    }
}
