use jiff::{Timestamp, tz::TimeZone};
use payloads::{Session, responses, validation::FieldErrors};
use yew::prelude::*;

use crate::components::form_fields::{
    TextArea, TextInput, draft_setter, field_error,
};
use crate::components::form_modal::{FormModal, save_done};
use crate::drafts::SessionDraft;
use crate::hooks::Done;

#[derive(Properties, PartialEq)]
pub struct SessionFormProps {
    #[prop_or_default]
    pub session: Option<responses::Session>,
    pub on_save: Callback<(Session, Done)>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn SessionForm(props: &SessionFormProps) -> Html {
    let tz = TimeZone::system();
    let draft = use_state(|| match &props.session {
        Some(session) => {
            SessionDraft::from_details(&session.session_details, &tz)
        }
        None => SessionDraft::default(),
    });
    let errors = use_state(FieldErrors::new);
    let saving = use_state(|| false);

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |()| {
            match (*draft).clone().into_details(Timestamp::now(), &tz) {
                Ok(details) => {
                    errors.set(FieldErrors::new());
                    saving.set(true);
                    on_save.emit((details, save_done(&saving, &on_close)));
                }
                Err(field_errors) => errors.set(field_errors),
            }
        })
    };

    let (title, submit_text) = match props.session {
        Some(_) => ("Edit Session", "Save Changes"),
        None => ("Create New Golf Session", "Create Session"),
    };

    html! {
        <FormModal
            {title}
            {submit_text}
            is_saving={*saving}
            {on_submit}
            on_close={props.on_close.clone()}
        >
            <TextInput
                label="Session Name (Optional)"
                value={draft.session_name.clone()}
                on_change={draft_setter(&draft, |d, v: String| d.session_name = v)}
                error={field_error(&errors, "session_name")}
                placeholder="e.g., Morning Practice, Driver Work, etc."
            />
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <TextInput
                    label="Start Time"
                    input_type="datetime-local"
                    value={draft.start_time.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.start_time = v)}
                    error={field_error(&errors, "start_time")}
                    placeholder="Defaults to now"
                />
                <TextInput
                    label="End Time"
                    input_type="datetime-local"
                    value={draft.end_time.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.end_time = v)}
                    error={field_error(&errors, "end_time")}
                />
            </div>
            <TextArea
                label="Notes"
                value={draft.notes.clone()}
                on_change={draft_setter(&draft, |d, v: String| d.notes = v)}
            />
        </FormModal>
    }
}
