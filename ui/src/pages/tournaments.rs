use list_view::Column;
use payloads::{requests::TournamentFilter, responses::Tournament};
use yew::prelude::*;

use super::{Dialog, delete_one, dialog_controls, page_header, status_badge};
use crate::components::forms::TournamentForm;
use crate::components::{DataTable, DeleteDialog, TableColumn};
use crate::hooks::{Done, use_title, use_tournaments};
use crate::utils::format::or_dash;
use crate::utils::time::format_date;

fn columns() -> Vec<TableColumn<Tournament>> {
    vec![
        TableColumn::new(Column::new("name", "Name", |t: &Tournament| {
            t.name.as_str().into()
        })),
        TableColumn::new(Column::new(
            "start_date",
            "Dates",
            |t: &Tournament| t.start_date.to_string().into(),
        ))
        .render_with(|t: Tournament| {
            let dates = if t.start_date == t.end_date {
                format_date(t.start_date)
            } else {
                format!(
                    "{} - {}",
                    format_date(t.start_date),
                    format_date(t.end_date)
                )
            };
            html! { <span class="whitespace-nowrap">{dates}</span> }
        }),
        TableColumn::new(Column::new("location", "Location", |t: &Tournament| {
            t.location.as_deref().into()
        }))
        .render_with(|t: Tournament| html! { {or_dash(t.location.as_deref())} }),
        TableColumn::new(Column::new("groups", "Groups", |t: &Tournament| {
            t.total_groups.into()
        })),
        TableColumn::new(Column::new("golfers", "Golfers", |t: &Tournament| {
            t.total_golfers.into()
        })),
        TableColumn::new(
            Column::new("is_active", "Status", |t: &Tournament| {
                t.is_active.into()
            })
            .unsearchable(),
        )
        .render_with(|t: Tournament| {
            status_badge(t.is_active, "Active", "Inactive")
        }),
    ]
}

#[function_component]
pub fn TournamentsPage() -> Html {
    use_title("Tournaments");
    let tournaments = use_tournaments(TournamentFilter::default());
    let dialog = use_state(|| Dialog::<Tournament>::Closed);
    let controls = dialog_controls(&dialog);
    let on_delete = delete_one(&dialog, |t: &Tournament| t.name.clone());

    let dialog_view = match &*dialog {
        Dialog::Closed => html! {},
        Dialog::Create => html! {
            <TournamentForm
                on_save={tournaments.create.clone()}
                on_close={controls.close.clone()}
            />
        },
        Dialog::Edit(tournament) => {
            let id = tournament.tournament_id;
            let on_save = tournaments.update.reform(
                move |(details, done): (payloads::Tournament, Done)| {
                    (id, details, done)
                },
            );
            html! {
                <TournamentForm
                    tournament={tournament.clone()}
                    {on_save}
                    on_close={controls.close.clone()}
                />
            }
        }
        Dialog::Delete(target) => html! {
            <DeleteDialog<Tournament>
                target={target.clone()}
                delete={tournaments.delete.clone()}
                bulk_delete={tournaments.bulk_delete.clone()}
                children_label="Also delete its groups, along with their golfers and shots"
                on_close={controls.close.clone()}
            />
        },
    };

    html! {
        <div>
            {page_header(
                "Tournaments",
                "Create tournaments and track how many groups and golfers are registered.",
                html! {},
            )}
            <DataTable<Tournament>
                title="All Tournaments"
                rows={tournaments.items().to_vec()}
                columns={columns()}
                is_loading={tournaments.is_loading}
                on_create={controls.create.clone()}
                on_refresh={tournaments.refetch.clone()}
                on_edit={controls.edit.clone()}
                {on_delete}
                on_bulk_delete={controls.bulk_delete.clone()}
                empty_message="No tournaments yet"
                search_placeholder="Search tournaments..."
            />
            {dialog_view}
        </div>
    }
}
