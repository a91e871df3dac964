use list_view::Column;
use payloads::{
    GroupId, TournamentId,
    requests::{GroupFilter, TournamentFilter},
    responses::Golfer,
};
use rust_decimal::prelude::ToPrimitive;
use yew::prelude::*;
use yewdux::prelude::*;

use super::{
    Dialog, delete_one, dialog_controls, filter_select, id_options, id_value,
    notice, page_header, status_badge,
};
use crate::components::form_fields::selected_id;
use crate::components::forms::GolferForm;
use crate::components::{DataTable, DeleteDialog, TableColumn};
use crate::hooks::{Done, use_golfers, use_groups, use_title, use_tournaments};
use crate::state::{GOLFER_SCOPE_MODES, GolferScope, State};
use crate::utils::format::or_dash;

fn columns() -> Vec<TableColumn<Golfer>> {
    vec![
        TableColumn::new(Column::new("name", "Name", |g: &Golfer| {
            g.full_name.as_str().into()
        })),
        TableColumn::new(Column::new("code", "Code", |g: &Golfer| {
            g.golfer_code.as_deref().into()
        }))
        .render_with(|g: Golfer| html! {
            <span class="font-mono text-xs">{or_dash(g.golfer_code.as_deref())}</span>
        }),
        TableColumn::new(Column::new("group", "Group", |g: &Golfer| {
            g.group_name.as_deref().into()
        }))
        .render_with(|g: Golfer| html! { {or_dash(g.group_name.as_deref())} }),
        TableColumn::new(Column::new("tournament", "Tournament", |g: &Golfer| {
            g.tournament_name.as_deref().into()
        }))
        .render_with(|g: Golfer| {
            html! { {or_dash(g.tournament_name.as_deref())} }
        }),
        TableColumn::new(Column::new("skill_level", "Skill", |g: &Golfer| {
            g.skill_level.to_string().into()
        })),
        TableColumn::new(Column::new("handicap", "Handicap", |g: &Golfer| {
            g.handicap.and_then(|h| h.to_f64()).into()
        }))
        .render_with(|g: Golfer| {
            let handicap = g.handicap.map(|h| h.to_string());
            html! { {or_dash(handicap.as_deref())} }
        }),
        TableColumn::new(Column::new("age", "Age", |g: &Golfer| g.age.into())),
        TableColumn::new(Column::new("shots", "Shots", |g: &Golfer| {
            g.shot_count.into()
        })),
        TableColumn::new(
            Column::new("is_active", "Status", |g: &Golfer| g.is_active.into())
                .unsearchable(),
        )
        .render_with(|g: Golfer| status_badge(g.is_active, "Active", "Inactive")),
    ]
}

#[function_component]
pub fn GolfersPage() -> Html {
    use_title("Golfers");
    let (state, dispatch) = use_store::<State>();
    let scope = state.golfer_scope;
    let filter = scope.filter();
    let golfers = use_golfers(filter.clone().unwrap_or_default());
    let groups = use_groups(GroupFilter::default());
    let tournaments = use_tournaments(TournamentFilter::default());
    let dialog = use_state(|| Dialog::<Golfer>::Closed);
    let controls = dialog_controls(&dialog);
    let on_delete = delete_one(&dialog, |g: &Golfer| g.full_name.clone());

    let on_mode_change = dispatch.reduce_mut_callback_with(|state, mode: String| {
        state.golfer_scope = GolferScope::from_mode(&mode);
    });
    let on_scope_id_change =
        dispatch.reduce_mut_callback_with(|state, value: String| {
            state.golfer_scope = match state.golfer_scope {
                GolferScope::Tournament(_) => {
                    GolferScope::Tournament(selected_id(&value, TournamentId))
                }
                GolferScope::Group(_) => {
                    GolferScope::Group(selected_id(&value, GroupId))
                }
                scope => scope,
            };
        });

    let mode_options = GOLFER_SCOPE_MODES
        .iter()
        .map(|(mode, text)| (mode.to_string(), text.to_string()))
        .collect();
    let scope_id_picker = match scope {
        GolferScope::Tournament(tournament_id) => filter_select(
            "Tournament",
            &id_value(tournament_id),
            id_options("Choose a tournament", tournaments.items(), |t| {
                t.name.clone()
            }),
            on_scope_id_change,
        ),
        GolferScope::Group(group_id) => filter_select(
            "Group",
            &id_value(group_id),
            id_options("Choose a group", groups.items(), |g| {
                g.display_name.clone()
            }),
            on_scope_id_change,
        ),
        GolferScope::All | GolferScope::Unassigned => html! {},
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
            <GolferForm
                groups={groups.items().to_vec()}
                default_group={scope.group_id()}
                on_save={golfers.create.clone()}
                on_close={controls.close.clone()}
            />
        },
        Dialog::Edit(golfer) => {
            let id = golfer.golfer_id;
            let on_save = golfers.update.reform(
                move |(details, done): (payloads::Golfer, Done)| {
                    (id, details, done)
                },
            );
            html! {
                <GolferForm
                    golfer={golfer.clone()}
                    groups={groups.items().to_vec()}
                    {on_save}
                    on_close={controls.close.clone()}
                />
            }
        }
        Dialog::Delete(target) => html! {
            <DeleteDialog<Golfer>
                target={target.clone()}
                delete={golfers.delete.clone()}
                bulk_delete={golfers.bulk_delete.clone()}
                children_label="Also delete their shots"
                on_close={controls.close.clone()}
            />
        },
    };

    let table = if filter.is_some() {
        html! {
            <DataTable<Golfer>
                title="Golfers"
                rows={golfers.items().to_vec()}
                columns={columns()}
                is_loading={golfers.is_loading}
                on_create={controls.create.clone()}
                on_refresh={golfers.refetch.clone()}
                on_edit={controls.edit.clone()}
                {on_delete}
                on_bulk_delete={controls.bulk_delete.clone()}
                empty_message="No golfers match this view"
                search_placeholder="Search by name, code, group..."
            />
        }
    } else {
        notice(match scope {
            GolferScope::Tournament(_) => "Choose a tournament to see its golfers.",
            _ => "Choose a group to see its golfers.",
        })
    };

    html! {
        <div>
            {page_header(
                "Golfers",
                "Register golfers and place them into groups.",
                scope_controls,
            )}
            {table}
            {dialog_view}
        </div>
    }
}
