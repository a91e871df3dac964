use payloads::{
    Group, TournamentId, responses,
    validation::{FieldErrors, MAX_GROUP_SIZE, MIN_GROUP_SIZE},
};
use yew::prelude::*;

use crate::components::form_fields::{
    SelectInput, TextInput, draft_setter, field_error, selected_id,
};
use crate::components::form_modal::{FormModal, save_done};
use crate::drafts::GroupDraft;
use crate::hooks::Done;

#[derive(Properties, PartialEq)]
pub struct GroupFormProps {
    #[prop_or_default]
    pub group: Option<responses::Group>,
    /// Tournaments offered in the tournament picker.
    pub tournaments: Vec<responses::Tournament>,
    /// Preselected tournament for a new group.
    #[prop_or_default]
    pub default_tournament: Option<TournamentId>,
    pub on_save: Callback<(Group, Done)>,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn GroupForm(props: &GroupFormProps) -> Html {
    let draft = use_state(|| match &props.group {
        Some(group) => GroupDraft::from(&group.group_details),
        None => GroupDraft::in_tournament(props.default_tournament),
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

    let tournament_options = props
        .tournaments
        .iter()
        .map(|t| {
            (
                AttrValue::from(t.tournament_id.to_string()),
                AttrValue::from(t.name.clone()),
            )
        })
        .collect::<Vec<_>>();
    let size_options = (MIN_GROUP_SIZE..=MAX_GROUP_SIZE)
        .map(|n| (AttrValue::from(n.to_string()), AttrValue::from(n.to_string())))
        .collect::<Vec<_>>();

    let (title, submit_text) = match props.group {
        Some(_) => ("Edit Group", "Save Changes"),
        None => ("Create Group", "Create Group"),
    };
    let context = props.group.as_ref().map(|g| {
        AttrValue::from(format!(
            "Editing: {} ({} of {} golfers assigned)",
            g.display_name, g.current_golfer_count, g.max_golfers
        ))
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
            <SelectInput
                label="Tournament"
                value={draft.tournament_id.map(|id| id.to_string()).unwrap_or_default()}
                options={tournament_options}
                placeholder="No tournament"
                on_change={draft_setter(&draft, |d, v: String| {
                    d.tournament_id = selected_id(&v, TournamentId);
                })}
            />
            <TextInput
                label="Nickname"
                value={draft.nickname.clone()}
                on_change={draft_setter(&draft, |d, v: String| d.nickname = v)}
                error={field_error(&errors, "nickname")}
                placeholder="Defaults to the group number"
            />
            <SelectInput
                label="Max Golfers"
                value={draft.max_golfers.clone()}
                options={size_options}
                on_change={draft_setter(&draft, |d, v: String| d.max_golfers = v)}
                error={field_error(&errors, "max_golfers")}
                required=true
            />
        </FormModal>
    }
}
