use payloads::{
    GolferId, GroupId, TournamentId,
    requests::{GolferFilter, GroupFilter, SessionFilter, TournamentFilter},
    responses::Shot,
};
use yew::prelude::*;
use yewdux::prelude::*;

use super::shot_columns::shot_columns;
use super::{
    Dialog, delete_one, dialog_controls, filter_select, id_options, id_value,
    notice, page_header,
};
use crate::components::form_fields::selected_id;
use crate::components::forms::ShotForm;
use crate::components::{DataTable, DeleteDialog};
use crate::hooks::{
    Done, use_golfers, use_groups, use_sessions, use_shots, use_title,
    use_tournaments,
};
use crate::state::{SHOT_SCOPE_MODES, ShotScope, State};

fn shot_name(shot: &Shot) -> String {
    match &shot.golfer_name {
        Some(golfer) => format!("shot #{} by {golfer}", shot.shot_number),
        None => format!("shot #{}", shot.shot_number),
    }
}

#[function_component]
pub fn ShotsPage() -> Html {
    use_title("Shots");
    let (state, dispatch) = use_store::<State>();
    let scope = state.shot_scope;
    let filter = scope.filter();
    let shots = use_shots(filter.clone().unwrap_or_default());
    let golfers = use_golfers(GolferFilter::default());
    let groups = use_groups(GroupFilter::default());
    let tournaments = use_tournaments(TournamentFilter::default());
    let sessions = use_sessions(SessionFilter::default());
    let dialog = use_state(|| Dialog::<Shot>::Closed);
    let controls = dialog_controls(&dialog);
    let on_delete = delete_one(&dialog, shot_name);

    let on_mode_change = dispatch.reduce_mut_callback_with(|state, mode: String| {
        state.shot_scope = ShotScope::from_mode(&mode);
    });
    let on_scope_id_change =
        dispatch.reduce_mut_callback_with(|state, value: String| {
            state.shot_scope = match state.shot_scope {
                ShotScope::Golfer(_) => {
                    ShotScope::Golfer(selected_id(&value, GolferId))
                }
                ShotScope::Group(_) => {
                    ShotScope::Group(selected_id(&value, GroupId))
                }
                ShotScope::Tournament(_) => {
                    ShotScope::Tournament(selected_id(&value, TournamentId))
                }
                scope => scope,
            };
        });

    let mode_options = SHOT_SCOPE_MODES
        .iter()
        .map(|(mode, text)| (mode.to_string(), text.to_string()))
        .collect();
    let scope_id_picker = match scope {
        ShotScope::Golfer(golfer_id) => filter_select(
            "Golfer",
            &id_value(golfer_id),
            id_options("Choose a golfer", golfers.items(), |g| {
                g.full_name.clone()
            }),
            on_scope_id_change,
        ),
        ShotScope::Group(group_id) => filter_select(
            "Group",
            &id_value(group_id),
            id_options("Choose a group", groups.items(), |g| {
                g.display_name.clone()
            }),
            on_scope_id_change,
        ),
        ShotScope::Tournament(tournament_id) => filter_select(
            "Tournament",
            &id_value(tournament_id),
            id_options("Choose a tournament", tournaments.items(), |t| {
                t.name.clone()
            }),
            on_scope_id_change,
        ),
        ShotScope::All | ShotScope::Unassigned => html! {},
    };
    let scope_controls = html! {
        <div class="flex flex-wrap items-center gap-4">
            {filter_select("Show", scope.mode(), mode_options, on_mode_change)}
            {scope_id_picker}
        </div>
    };

    let dialog_view = match &*dialog {
        Dialog::Closed => html! {},
        Dialog::Create => html! {
            <ShotForm
                golfers={golfers.items().to_vec()}
                sessions={sessions.items().to_vec()}
                default_golfer={scope.golfer_id()}
                on_save={shots.create.clone()}
                on_close={controls.close.clone()}
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
                    on_close={controls.close.clone()}
                />
            }
        }
        Dialog::Delete(target) => html! {
            <DeleteDialog<Shot>
                target={target.clone()}
                delete={shots.delete.clone()}
                bulk_delete={shots.bulk_delete.clone()}
                on_close={controls.close.clone()}
            />
        },
    };

    let table = if filter.is_some() {
        html! {
            <DataTable<Shot>
                title="Shots"
                rows={shots.items().to_vec()}
                columns={shot_columns()}
                is_loading={shots.is_loading}
                on_create={controls.create.clone()}
                on_refresh={shots.refetch.clone()}
                on_edit={controls.edit.clone()}
                {on_delete}
                on_bulk_delete={controls.bulk_delete.clone()}
                empty_message="No shots recorded for this view"
                search_placeholder="Search by golfer, type, club..."
            />
        }
    } else {
        notice(match scope {
            ShotScope::Golfer(_) => "Choose a golfer to see their shots.",
            ShotScope::Group(_) => "Choose a group to see its shots.",
            _ => "Choose a tournament to see its shots.",
        })
    };

    html! {
        <div>
            {page_header(
                "Shots",
                "Launch monitor data for every recorded shot.",
                scope_controls,
            )}
            {table}
            {dialog_view}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use payloads::ShotId;
    use uuid::Uuid;

    fn shot(golfer_name: Option<&str>) -> Shot {
        Shot {
            shot_id: ShotId(Uuid::new_v4()),
            shot_details: payloads::Shot::default(),
            shot_number: 3,
            smash_factor: None,
            golfer_name: golfer_name.map(str::to_string),
            group_name: None,
            tournament_name: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn shots_are_named_by_number_and_golfer() {
        assert_eq!(shot_name(&shot(Some("Ana Ruiz"))), "shot #3 by Ana Ruiz");
        assert_eq!(shot_name(&shot(None)), "shot #3");
    }
}
