//! Practice sessions: pick a session, then record and adjust its shots.

use payloads::{
    SessionId,
    requests::{GolferFilter, SessionFilter, ShotFilter},
    responses::{Session, Shot},
};
use yew::prelude::*;
use yewdux::prelude::*;

use super::shot_columns::editable_shot_columns;
use super::{
    Dialog, delete_one, dialog_controls, filter_select, id_options, id_value,
    notice, page_header,
};
use crate::components::form_fields::selected_id;
use crate::components::forms::{SessionForm, ShotForm};
use crate::components::{DataTable, DeleteDialog};
use crate::hooks::{Done, use_golfers, use_sessions, use_shots, use_title};
use crate::state::State;
use crate::utils::format::{or_dash, pluralize};
use crate::utils::time::format_timestamp;

#[function_component]
pub fn SessionsPage() -> Html {
    use_title("Practice Sessions");
    let (state, dispatch) = use_store::<State>();
    let sessions = use_sessions(SessionFilter::default());
    // A remembered session that has since been deleted falls back to the
    // newest one.
    let selected = state
        .selected_session
        .filter(|id| sessions.find(*id).is_some())
        .or_else(|| sessions.items().first().map(|s| s.session_id));
    let current = selected.and_then(|id| sessions.find(id)).cloned();

    let shots = use_shots(ShotFilter {
        session_id: selected,
        ..Default::default()
    });
    let golfers = use_golfers(GolferFilter::default());

    let session_dialog = use_state(|| Dialog::<Session>::Closed);
    let session_controls = dialog_controls(&session_dialog);
    let delete_session =
        delete_one(&session_dialog, |s: &Session| s.session_name.clone());
    let shot_dialog = use_state(|| Dialog::<Shot>::Closed);
    let shot_controls = dialog_controls(&shot_dialog);
    let delete_shot = delete_one(&shot_dialog, |s: &Shot| {
        format!("shot #{}", s.shot_number)
    });

    let on_session_change =
        dispatch.reduce_mut_callback_with(|state, value: String| {
            state.selected_session = selected_id(&value, SessionId);
        });

    let session_picker = html! {
        <div class="flex flex-wrap items-center gap-4">
            if !sessions.items().is_empty() {
                {filter_select(
                    "Session",
                    &id_value(selected),
                    id_options("Choose a session", sessions.items(), |s| {
                        s.session_name.clone()
                    }),
                    on_session_change,
                )}
            }
            <button
                onclick={session_controls.create.reform(|_: MouseEvent| ())}
                class="px-4 py-2 text-sm font-medium rounded-md text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200"
            >
                {"New Session"}
            </button>
        </div>
    };

    let session_dialog_view = match &*session_dialog {
        Dialog::Closed => html! {},
        Dialog::Create => html! {
            <SessionForm
                on_save={sessions.create.clone()}
                on_close={session_controls.close.clone()}
            />
        },
        Dialog::Edit(session) => {
            let id = session.session_id;
            let on_save = sessions.update.reform(
                move |(details, done): (payloads::Session, Done)| {
                    (id, details, done)
                },
            );
            html! {
                <SessionForm
                    session={session.clone()}
                    {on_save}
                    on_close={session_controls.close.clone()}
                />
            }
        }
        Dialog::Delete(target) => html! {
            <DeleteDialog<Session>
                target={target.clone()}
                delete={sessions.delete.clone()}
                bulk_delete={sessions.bulk_delete.clone()}
                children_label="Also delete the session's shots"
                on_close={session_controls.close.clone()}
            />
        },
    };

    let shot_dialog_view = match &*shot_dialog {
        Dialog::Closed => html! {},
        Dialog::Create => html! {
            <ShotForm
                golfers={golfers.items().to_vec()}
                sessions={sessions.items().to_vec()}
                default_session={selected}
                on_save={shots.create.clone()}
                on_close={shot_controls.close.clone()}
            />
        },
        Dialog::Edit(shot) => {
            let id = shot.shot_id;
            let on_save = shots.update.reform(
                move |(details, done): (payloads::Shot, Done)| {
                    (id, details, done)
                },
            );
            html! {
                <ShotForm
                    shot={shot.clone()}
                    golfers={golfers.items().to_vec()}
                    sessions={sessions.items().to_vec()}
                    {on_save}
                    on_close={shot_controls.close.clone()}
                />
            }
        }
        Dialog::Delete(target) => html! {
            <DeleteDialog<Shot>
                target={target.clone()}
                delete={shots.delete.clone()}
                bulk_delete={shots.bulk_delete.clone()}
                on_close={shot_controls.close.clone()}
            />
        },
    };

    let body = match current {
        Some(session) => {
            let edit = session.clone();
            let remove = session.clone();
            html! {
                <>
                    <SessionSummary
                        session={session}
                        on_edit={session_controls.edit.reform(move |()| edit.clone())}
                        on_delete={delete_session.reform(move |()| remove.clone())}
                    />
                    <DataTable<Shot>
                        title="Session Shots"
                        rows={shots.items().to_vec()}
                        columns={editable_shot_columns(&shots)}
                        is_loading={shots.is_loading}
                        on_create={shot_controls.create.clone()}
                        on_refresh={shots.refetch.clone()}
                        on_edit={shot_controls.edit.clone()}
                        on_delete={delete_shot}
                        on_bulk_delete={shot_controls.bulk_delete.clone()}
                        empty_message="No shots in this session yet"
                        search_placeholder="Search shots..."
                    />
                </>
            }
        }
        None if sessions.is_loading => notice("Loading sessions..."),
        None => notice("No practice sessions yet. Create one to start recording shots."),
    };

    html! {
        <div>
            {page_header(
                "Practice Sessions",
                "Record range sessions and correct launch monitor readings in place.",
                session_picker,
            )}
            {body}
            {session_dialog_view}
            {shot_dialog_view}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SessionSummaryProps {
    session: Session,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
}

#[function_component]
fn SessionSummary(props: &SessionSummaryProps) -> Html {
    let session = &props.session;
    let time = |t: Option<jiff::Timestamp>| {
        or_dash(t.map(format_timestamp).as_deref())
    };
    html! {
        <div class="mb-6 p-4 rounded-lg border border-neutral-200 dark:border-neutral-700 bg-white dark:bg-neutral-800">
            <div class="flex flex-wrap items-start justify-between gap-4">
                <div>
                    <h2 class="text-lg font-semibold text-neutral-900 dark:text-white">
                        {&session.session_name}
                    </h2>
                    <p class="mt-1 text-sm text-neutral-600 dark:text-neutral-400">
                        {format!(
                            "{} to {} · {}",
                            time(session.start_time),
                            time(session.end_time),
                            pluralize(
                                usize::try_from(session.shot_count).unwrap_or(0),
                                "shot",
                                "shots",
                            ),
                        )}
                    </p>
                    if let Some(notes) = &session.notes {
                        <p class="mt-2 text-sm text-neutral-700 dark:text-neutral-300">
                            {notes}
                        </p>
                    }
                </div>
                <div class="flex gap-2">
                    <button
                        onclick={props.on_edit.reform(|_: MouseEvent| ())}
                        class="px-3 py-1.5 text-sm rounded-md border border-neutral-300 dark:border-neutral-600 hover:bg-neutral-50 dark:hover:bg-neutral-700"
                    >
                        {"Edit Session"}
                    </button>
                    <button
                        onclick={props.on_delete.reform(|_: MouseEvent| ())}
                        class="px-3 py-1.5 text-sm rounded-md text-red-600 dark:text-red-400 border border-red-300 dark:border-red-800 hover:bg-red-50 dark:hover:bg-red-900/20"
                    >
                        {"Delete Session"}
                    </button>
                </div>
            </div>
        </div>
    }
}
