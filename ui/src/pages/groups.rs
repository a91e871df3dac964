use std::collections::BTreeSet;

use list_view::Column;
use payloads::{
    GolferId, GroupId, TournamentId,
    requests::{GolferFilter, GroupFilter, TournamentFilter},
    responses::Group,
};
use yew::prelude::*;
use yewdux::prelude::*;

use super::{
    Dialog, delete_one, dialog_controls, filter_select, id_options, id_value,
    page_header, status_badge,
};
use crate::components::form_fields::selected_id;
use crate::components::forms::GroupForm;
use crate::components::{DataTable, DeleteDialog, Modal, RowAction, TableColumn};
use crate::get_api_client;
use crate::hooks::{
    Done, use_fetch, use_golfers, use_groups, use_title, use_tournaments,
};
use crate::state::State;
use crate::utils::format::{or_dash, pluralize};

fn columns() -> Vec<TableColumn<Group>> {
    vec![
        TableColumn::new(Column::new("name", "Group", |g: &Group| {
            g.display_name.as_str().into()
        })),
        TableColumn::new(Column::new("tournament", "Tournament", |g: &Group| {
            g.tournament_name.as_deref().into()
        }))
        .render_with(|g: Group| html! { {or_dash(g.tournament_name.as_deref())} }),
        TableColumn::new(Column::new("golfers", "Golfers", |g: &Group| {
            g.current_golfer_count.into()
        }))
        .render_with(|g: Group| {
            html! { {format!("{} / {}", g.current_golfer_count, g.max_golfers)} }
        }),
        TableColumn::new(Column::new("spots", "Open Spots", |g: &Group| {
            g.available_spots.into()
        })),
        TableColumn::new(
            Column::new("is_full", "Status", |g: &Group| g.is_full.into())
                .unsearchable(),
        )
        .render_with(|g: Group| status_badge(!g.is_full, "Open", "Full")),
    ]
}

#[function_component]
pub fn GroupsPage() -> Html {
    use_title("Groups");
    let (state, dispatch) = use_store::<State>();
    let tournaments = use_tournaments(TournamentFilter::default());
    let groups = use_groups(GroupFilter {
        tournament_id: state.group_tournament,
        ..Default::default()
    });
    let dialog = use_state(|| Dialog::<Group>::Closed);
    let roster = use_state(|| None::<Group>);
    let controls = dialog_controls(&dialog);
    let on_delete = delete_one(&dialog, |g: &Group| g.display_name.clone());

    let on_tournament_change =
        dispatch.reduce_mut_callback_with(|state, value: String| {
            state.group_tournament = selected_id(&value, TournamentId);
        });

    let open_roster = {
        let roster = roster.clone();
        Callback::from(move |group: Group| roster.set(Some(group)))
    };
    let close_roster = {
        let roster = roster.clone();
        Callback::from(move |()| roster.set(None))
    };

    let dialog_view = match &*dialog {
        Dialog::Closed => html! {},
        Dialog::Create => html! {
            <GroupForm
                tournaments={tournaments.items().to_vec()}
                default_tournament={state.group_tournament}
                on_save={groups.create.clone()}
                on_close={controls.close.clone()}
            />
        },
        Dialog::Edit(group) => {
            let id = group.group_id;
            let on_save = groups.update.reform(
                move |(details, done): (payloads::Group, Done)| {
                    (id, details, done)
                },
            );
            html! {
                <GroupForm
                    group={group.clone()}
                    tournaments={tournaments.items().to_vec()}
                    {on_save}
                    on_close={controls.close.clone()}
                />
            }
        }
        Dialog::Delete(target) => html! {
            <DeleteDialog<Group>
                target={target.clone()}
                delete={groups.delete.clone()}
                bulk_delete={groups.bulk_delete.clone()}
                children_label="Also delete assigned golfers and their shots"
                on_close={controls.close.clone()}
            />
        },
    };

    let tournament_filter = filter_select(
        "Tournament",
        &id_value(state.group_tournament),
        id_options("All tournaments", tournaments.items(), |t| t.name.clone()),
        on_tournament_change,
    );

    html! {
        <div>
            {page_header(
                "Groups",
                "Organise golfers into playing groups of up to eight.",
                tournament_filter,
            )}
            <DataTable<Group>
                title="Groups"
                rows={groups.items().to_vec()}
                columns={columns()}
                is_loading={groups.is_loading}
                on_create={controls.create.clone()}
                on_refresh={groups.refetch.clone()}
                on_edit={controls.edit.clone()}
                {on_delete}
                on_bulk_delete={controls.bulk_delete.clone()}
                actions={vec![RowAction {
                    label: "Roster".into(),
                    on_click: open_roster,
                }]}
                empty_message="No groups yet"
                search_placeholder="Search groups..."
            />
            {dialog_view}
            if let Some(group) = &*roster {
                <RosterModal
                    group_id={group.group_id}
                    assign_golfers={groups.assign_golfers.clone()}
                    remove_golfers={groups.remove_golfers.clone()}
                    on_close={close_roster}
                />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RosterModalProps {
    group_id: GroupId,
    assign_golfers: Callback<(GroupId, Vec<GolferId>, Done)>,
    remove_golfers: Callback<(GroupId, Vec<GolferId>, Done)>,
    on_close: Callback<()>,
}

/// Golfers in a group, with controls to add unassigned golfers and remove
/// members.
#[function_component]
fn RosterModal(props: &RosterModalProps) -> Html {
    let group_id = props.group_id;
    let roster = use_fetch(group_id, move || async move {
        get_api_client()
            .get_group_with_golfers(&group_id)
            .await
            .map_err(|e| e.to_string())
    });
    let unassigned = use_golfers(GolferFilter {
        unassigned: Some(true),
        ..Default::default()
    });
    let to_add = use_state(BTreeSet::<GolferId>::new);
    let busy = use_state(|| false);

    // Both lists change after an assignment.
    let done: Done = {
        let busy = busy.clone();
        let to_add = to_add.clone();
        let refetch_roster = roster.refetch.clone();
        let refetch_unassigned = unassigned.refetch.clone();
        Callback::from(move |ok: bool| {
            busy.set(false);
            if ok {
                to_add.set(BTreeSet::new());
            }
            refetch_roster.emit(());
            refetch_unassigned.emit(());
        })
    };

    let on_remove = {
        let busy = busy.clone();
        let remove_golfers = props.remove_golfers.clone();
        let done = done.clone();
        Callback::from(move |golfer_id: GolferId| {
            busy.set(true);
            remove_golfers.emit((group_id, vec![golfer_id], done.clone()));
        })
    };

    let on_add = {
        let busy = busy.clone();
        let to_add = to_add.clone();
        let assign_golfers = props.assign_golfers.clone();
        Callback::from(move |_: MouseEvent| {
            busy.set(true);
            let ids = to_add.iter().copied().collect();
            assign_golfers.emit((group_id, ids, done.clone()));
        })
    };

    let toggle_add = {
        let to_add = to_add.clone();
        Callback::from(move |golfer_id: GolferId| {
            let mut next = (*to_add).clone();
            if !next.remove(&golfer_id) {
                next.insert(golfer_id);
            }
            to_add.set(next);
        })
    };

    let title = roster
        .data
        .as_ref()
        .map(|r| format!("Roster: {}", r.group.display_name))
        .unwrap_or_else(|| "Roster".to_string());

    let content = roster.render("roster", |roster, _, _| {
        let group = &roster.group;
        let too_many = i64::try_from(to_add.len()).unwrap_or(i64::MAX)
            > group.available_spots;
        html! {
            <div class="space-y-6">
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {format!(
                        "{} of {} assigned",
                        pluralize(roster.golfers.len(), "golfer", "golfers"),
                        group.max_golfers
                    )}
                </p>

                <ul class="divide-y divide-neutral-200 dark:divide-neutral-700">
                    {for roster.golfers.iter().map(|golfer| {
                        let golfer_id = golfer.golfer_id;
                        html! {
                            <li class="py-2 flex items-center justify-between">
                                <span class="text-sm">{&golfer.full_name}</span>
                                <button
                                    onclick={on_remove.reform(move |_: MouseEvent| golfer_id)}
                                    disabled={*busy}
                                    class="text-sm text-red-600 dark:text-red-400 hover:underline disabled:opacity-50"
                                >
                                    {"Remove"}
                                </button>
                            </li>
                        }
                    })}
                    if roster.golfers.is_empty() {
                        <li class="py-2 text-sm text-neutral-500">{"No golfers assigned"}</li>
                    }
                </ul>

                if !group.is_full {
                    <div>
                        <h4 class="mb-2 text-sm font-semibold text-neutral-900 dark:text-neutral-100">
                            {"Add unassigned golfers"}
                        </h4>
                        if unassigned.items().is_empty() {
                            <p class="text-sm text-neutral-500">{"Every golfer is in a group."}</p>
                        }
                        <ul class="max-h-48 overflow-y-auto space-y-1">
                            {for unassigned.items().iter().map(|golfer| {
                                let golfer_id = golfer.golfer_id;
                                html! {
                                    <li>
                                        <label class="flex items-center gap-2 text-sm">
                                            <input
                                                type="checkbox"
                                                checked={to_add.contains(&golfer_id)}
                                                onchange={toggle_add.reform(move |_: Event| golfer_id)}
                                            />
                                            {&golfer.full_name}
                                        </label>
                                    </li>
                                }
                            })}
                        </ul>
                        if too_many {
                            <p class="mt-2 text-xs text-red-600 dark:text-red-400">
                                {format!(
                                    "Only {} left in this group",
                                    pluralize(usize::try_from(group.available_spots).unwrap_or(0), "spot", "spots")
                                )}
                            </p>
                        }
                        <button
                            onclick={on_add.clone()}
                            disabled={*busy || to_add.is_empty() || too_many}
                            class="mt-3 px-4 py-2 text-sm font-medium rounded-md text-white bg-neutral-900 hover:bg-neutral-800 dark:bg-neutral-100 dark:text-neutral-900 disabled:opacity-50"
                        >
                            {format!("Add Selected ({})", to_add.len())}
                        </button>
                    </div>
                }
            </div>
        }
    });

    html! {
        <Modal {title} on_close={props.on_close.clone()} max_width="max-w-lg">
            {content}
        </Modal>
    }
}
