use jiff::tz::TimeZone;
use payloads::{
    GolferId, SessionId, Shot, ShotMetric, ShotType, responses,
    validation::FieldErrors,
};
use yew::prelude::*;

use crate::components::form_fields::{
    CheckboxInput, SelectInput, TextArea, TextInput, draft_setter,
    field_error, selected_id,
};
use crate::components::form_modal::{FormModal, save_done};
use crate::drafts::{CLUBS, ShotDraft};
use crate::hooks::Done;

#[derive(Properties, PartialEq)]
pub struct ShotFormProps {
    #[prop_or_default]
    pub shot: Option<responses::Shot>,
    pub golfers: Vec<responses::Golfer>,
    /// Offered in a session picker when not empty.
    #[prop_or_default]
    pub sessions: Vec<responses::Session>,
    #[prop_or_default]
    pub default_golfer: Option<GolferId>,
    #[prop_or_default]
    pub default_session: Option<SessionId>,
    pub on_save: Callback<(Shot, Done)>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn ShotForm(props: &ShotFormProps) -> Html {
    let tz = TimeZone::system();
    let draft = use_state(|| match &props.shot {
        Some(shot) => ShotDraft::from_details(&shot.shot_details, &tz),
        None => {
            ShotDraft::for_golfer(props.default_golfer, props.default_session)
        }
    });
    let errors = use_state(FieldErrors::new);
    let saving = use_state(|| false);

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |()| match (*draft).clone().into_details(&tz) {
            Ok(details) => {
                errors.set(FieldErrors::new());
                saving.set(true);
                on_save.emit((details, save_done(&saving, &on_close)));
            }
            Err(field_errors) => errors.set(field_errors),
        })
    };

    let golfer_options = props
        .golfers
        .iter()
        .map(|g| {
            let text = match &g.group_name {
                Some(group) => format!("{} ({group})", g.full_name),
                None => g.full_name.clone(),
            };
            (AttrValue::from(g.golfer_id.to_string()), AttrValue::from(text))
        })
        .collect::<Vec<_>>();
    let session_options = props
        .sessions
        .iter()
        .map(|s| {
            (
                AttrValue::from(s.session_id.to_string()),
                AttrValue::from(s.session_name.clone()),
            )
        })
        .collect::<Vec<_>>();
    let type_options = ShotType::ALL
        .into_iter()
        .map(|t| (AttrValue::from(t.as_str()), AttrValue::from(t.to_string())))
        .collect::<Vec<_>>();
    let club_options = CLUBS
        .into_iter()
        .map(|c| (AttrValue::from(c), AttrValue::from(c)))
        .collect::<Vec<_>>();

    let metric_inputs = ShotMetric::ALL.into_iter().map(|metric| {
        let on_change = {
            let draft = draft.clone();
            Callback::from(move |value: String| {
                let mut next = (*draft).clone();
                next.set_metric(metric, value);
                draft.set(next);
            })
        };
        html! {
            <TextInput
                label={format!("{metric} ({})", metric.unit().trim())}
                input_type="number"
                step="0.1"
                value={draft.metric(metric).to_string()}
                {on_change}
                error={field_error(&errors, metric.column())}
            />
        }
    });

    let smash_factor = match draft.smash_factor() {
        Some(smash) => format!("{smash:.2}"),
        None => "N/A".to_string(),
    };

    let (title, submit_text) = match props.shot {
        Some(_) => ("Edit Shot", "Save Changes"),
        None => ("Record Shot", "Record Shot"),
    };
    let context = props.shot.as_ref().map(|s| {
        let golfer = s.golfer_name.as_deref().unwrap_or("no golfer");
        AttrValue::from(format!("Editing shot #{} for {golfer}", s.shot_number))
    });

    html! {
        <FormModal
            {title}
            {context}
            {submit_text}
            is_saving={*saving}
            {on_submit}
            on_close={props.on_close.clone()}
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <SelectInput
                    label="Golfer"
                    value={draft.golfer_id.map(|id| id.to_string()).unwrap_or_default()}
                    options={golfer_options}
                    placeholder="Select golfer"
                    on_change={draft_setter(&draft, |d, v: String| {
                        d.golfer_id = selected_id(&v, GolferId);
                    })}
                    error={field_error(&errors, "golfer_id")}
                />
                if !session_options.is_empty() {
                    <SelectInput
                        label="Practice Session"
                        value={draft.session_id.map(|id| id.to_string()).unwrap_or_default()}
                        options={session_options}
                        placeholder="No session"
                        on_change={draft_setter(&draft, |d, v: String| {
                            d.session_id = selected_id(&v, SessionId);
                        })}
                    />
                }
                <SelectInput
                    label="Shot Type"
                    value={draft.shot_type.as_str()}
                    options={type_options}
                    on_change={draft_setter(&draft, |d, v: String| {
                        d.shot_type = v.parse().unwrap_or_default();
                    })}
                    required=true
                />
                <SelectInput
                    label="Club"
                    value={draft.club_used.clone()}
                    options={club_options}
                    placeholder="Select club"
                    on_change={draft_setter(&draft, |d, v: String| d.club_used = v)}
                />
                <TextInput
                    label="Hole Number"
                    input_type="number"
                    value={draft.hole_number.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.hole_number = v)}
                    error={field_error(&errors, "hole_number")}
                    placeholder="1-18"
                />
                <TextInput
                    label="Timestamp"
                    input_type="datetime-local"
                    value={draft.timestamp.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.timestamp = v)}
                    error={field_error(&errors, "timestamp")}
                />
            </div>

            <h4 class="pt-2 text-sm font-semibold text-neutral-900 dark:text-neutral-100">
                {"Launch Monitor Data"}
            </h4>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {for metric_inputs}
                <div class="flex flex-col justify-end">
                    <span class="text-sm font-medium text-neutral-700 dark:text-neutral-300">
                        {"Smash Factor"}
                    </span>
                    <span class="py-2 text-lg font-semibold tabular-nums">
                        {smash_factor}
                    </span>
                </div>
            </div>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                <TextInput
                    label="Launch Monitor ID"
                    value={draft.launch_monitor_id.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.launch_monitor_id = v)}
                />
                <div class="flex items-end pb-2">
                    <CheckboxInput
                        label="Simulated shot"
                        checked={draft.is_simulated}
                        on_change={draft_setter(&draft, |d, v: bool| d.is_simulated = v)}
                    />
                </div>
            </div>
            <TextArea
                label="Notes"
                value={draft.notes.clone()}
                on_change={draft_setter(&draft, |d, v: String| d.notes = v)}
            />
        </FormModal>
    }
}
