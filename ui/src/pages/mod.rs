mod dashboard;
mod golfers;
mod groups;
mod not_found;
mod operations;
mod sessions;
mod shot_columns;
mod shots;
mod tournaments;

pub use dashboard::DashboardPage;
pub use golfers::GolfersPage;
pub use groups::GroupsPage;
pub use not_found::NotFoundPage;
pub use operations::OperationsPage;
pub use sessions::SessionsPage;
pub use shots::ShotsPage;
pub use tournaments::TournamentsPage;

use payloads::Record;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::DeleteTarget;

/// The dialog an entity screen has open.
#[derive(Clone, PartialEq)]
enum Dialog<R: Record> {
    Closed,
    Create,
    Edit(R),
    Delete(DeleteTarget<R>),
}

/// Callbacks that open each kind of dialog.
struct DialogControls<R: Record> {
    close: Callback<()>,
    create: Callback<()>,
    edit: Callback<R>,
    bulk_delete: Callback<Vec<R::Id>>,
}

fn dialog_controls<R>(dialog: &UseStateHandle<Dialog<R>>) -> DialogControls<R>
where
    R: Record + 'static,
{
    let set = |make: fn() -> Dialog<R>| {
        let dialog = dialog.clone();
        Callback::from(move |()| dialog.set(make()))
    };
    DialogControls {
        close: set(|| Dialog::Closed),
        create: set(|| Dialog::Create),
        edit: {
            let dialog = dialog.clone();
            Callback::from(move |record| dialog.set(Dialog::Edit(record)))
        },
        bulk_delete: {
            let dialog = dialog.clone();
            Callback::from(move |ids| {
                dialog.set(Dialog::Delete(DeleteTarget::Many(ids)))
            })
        },
    }
}

/// Callback asking to delete one record, described by `name`.
fn delete_one<R>(
    dialog: &UseStateHandle<Dialog<R>>,
    name: fn(&R) -> String,
) -> Callback<R>
where
    R: Record + 'static,
{
    let dialog = dialog.clone();
    Callback::from(move |record: R| {
        let target = DeleteTarget::One(record.id(), name(&record));
        dialog.set(Dialog::Delete(target));
    })
}

fn page_header(title: &str, subtitle: &str, actions: Html) -> Html {
    html! {
        <div class="mb-6 flex flex-wrap items-end justify-between gap-4">
            <div>
                <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                    {title}
                </h1>
                <p class="mt-1 text-sm text-neutral-600 dark:text-neutral-400">
                    {subtitle}
                </p>
            </div>
            {actions}
        </div>
    }
}

/// Muted notice shown in place of a table.
fn notice(message: &str) -> Html {
    html! {
        <div class="p-8 text-center rounded-lg border border-dashed border-neutral-300 dark:border-neutral-600 text-sm text-neutral-600 dark:text-neutral-400">
            {message}
        </div>
    }
}

fn status_badge(active: bool, on: &str, off: &str) -> Html {
    let (class, text) = if active {
        (
            "bg-green-100 text-green-800 dark:bg-green-900/30 dark:text-green-300",
            on,
        )
    } else {
        (
            "bg-neutral-100 text-neutral-700 dark:bg-neutral-700 dark:text-neutral-300",
            off,
        )
    };
    html! {
        <span class={classes!("px-2", "py-0.5", "rounded-full", "text-xs", "font-medium", class)}>
            {text}
        </span>
    }
}

/// A compact select for screen-level filters. Options are `(value, text)`.
fn filter_select(
    label: &str,
    value: &str,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
) -> Html {
    let onchange = on_change.reform(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value()
    });
    html! {
        <label class="flex items-center gap-2 text-sm text-neutral-700 dark:text-neutral-300">
            {label}
            <select
                {onchange}
                class="px-3 py-2 border border-neutral-300 dark:border-neutral-600 rounded-md bg-white dark:bg-neutral-700 text-neutral-900 dark:text-white"
            >
                {for options.into_iter().map(|(option, text)| html! {
                    <option selected={option == value} value={option.clone()}>{text}</option>
                })}
            </select>
        </label>
    }
}

/// Options for picking one record, led by a blank `placeholder` entry.
fn id_options<R>(
    placeholder: &str,
    records: &[R],
    text: fn(&R) -> String,
) -> Vec<(String, String)>
where
    R: Record,
    R::Id: std::fmt::Display,
{
    std::iter::once((String::new(), placeholder.to_string()))
        .chain(records.iter().map(|r| (r.id().to_string(), text(r))))
        .collect()
}

fn id_value<Id: ToString>(id: Option<Id>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}
