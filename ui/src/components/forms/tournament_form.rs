use payloads::{Tournament, responses, validation::FieldErrors};
use yew::prelude::*;

use crate::components::form_fields::{
    CheckboxInput, TextArea, TextInput, draft_setter, field_error,
};
use crate::components::form_modal::{FormModal, save_done};
use crate::drafts::TournamentDraft;
use crate::hooks::Done;
use crate::utils::time::today;

#[derive(Properties, PartialEq)]
pub struct TournamentFormProps {
    /// The tournament being edited; `None` creates one.
    #[prop_or_default]
    pub tournament: Option<responses::Tournament>,
    pub on_save: Callback<(Tournament, Done)>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn TournamentForm(props: &TournamentFormProps) -> Html {
    let draft = use_state(|| match &props.tournament {
        Some(tournament) => TournamentDraft::from(&tournament.tournament_details),
        None => TournamentDraft::new(today()),
    });
    let errors = use_state(FieldErrors::new);
    let saving = use_state(|| false);

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |()| match (*draft).clone().into_details() {
            Ok(details) => {
                errors.set(FieldErrors::new());
                saving.set(true);
                on_save.emit((details, save_done(&saving, &on_close)));
            }
            Err(field_errors) => errors.set(field_errors),
        })
    };

    let (title, submit_text) = match props.tournament {
        Some(_) => ("Edit Tournament", "Save Changes"),
        None => ("Create Tournament", "Create Tournament"),
    };
    let context = props
        .tournament
        .as_ref()
        .map(|t| AttrValue::from(format!("Editing: {}", t.name)));

    html! {
        <FormModal
            {title}
            {context}
            {submit_text}
            is_saving={*saving}
            {on_submit}
            on_close={props.on_close.clone()}
        >
            <TextInput
                label="Tournament Name"
                value={draft.name.clone()}
                on_change={draft_setter(&draft, |d, v: String| d.name = v)}
                error={field_error(&errors, "name")}
                placeholder="e.g., Spring Classic"
                required=true
            />
            <TextArea
                label="Description"
                value={draft.description.clone()}
                on_change={draft_setter(&draft, |d, v: String| d.description = v)}
            />
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <TextInput
                    label="Start Date"
                    input_type="date"
                    value={draft.start_date.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.start_date = v)}
                    error={field_error(&errors, "start_date")}
                    required=true
                />
                <TextInput
                    label="End Date"
                    input_type="date"
                    value={draft.end_date.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.end_date = v)}
                    error={field_error(&errors, "end_date")}
                    required=true
                />
            </div>
            <TextInput
                label="Location"
                value={draft.location.clone()}
                on_change={draft_setter(&draft, |d, v: String| d.location = v)}
                error={field_error(&errors, "location")}
                placeholder="e.g., Pebble Beach Golf Links"
            />
            <CheckboxInput
                label="Active"
                checked={draft.is_active}
                on_change={draft_setter(&draft, |d, v: bool| d.is_active = v)}
            />
        </FormModal>
    }
}
