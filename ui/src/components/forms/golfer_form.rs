use payloads::{
    Gender, Golfer, GroupId, SkillLevel, responses, validation::FieldErrors,
};
use yew::prelude::*;

use crate::components::form_fields::{
    CheckboxInput, SelectInput, TextArea, TextInput, draft_setter,
    field_error, selected_id,
};
use crate::components::form_modal::{FormModal, save_done};
use crate::drafts::GolferDraft;
use crate::hooks::Done;
use crate::utils::time::today;

#[derive(Properties, PartialEq)]
pub struct GolferFormProps {
    #[prop_or_default]
    pub golfer: Option<responses::Golfer>,
    pub groups: Vec<responses::Group>,
    #[prop_or_default]
    pub default_group: Option<GroupId>,
    pub on_save: Callback<(Golfer, Done)>,
    pub on_close: Callback<()>,
}

/// Groups a golfer can be put in: those with a free spot, plus the one
/// they're already in.
fn assignable_groups(
    groups: &[responses::Group],
    current: Option<GroupId>,
) -> Vec<(AttrValue, AttrValue)> {
    groups
        .iter()
        .filter(|g| !g.is_full || Some(g.group_id) == current)
        .map(|g| {
            let mut text = g.display_name.clone();
            if let Some(tournament) = &g.tournament_name {
                text.push_str(&format!(" · {tournament}"));
            }
            text.push_str(&format!(" ({} spots left)", g.available_spots));
            (AttrValue::from(g.group_id.to_string()), AttrValue::from(text))
        })
        .collect()
}

#[function_component]
pub fn GolferForm(props: &GolferFormProps) -> Html {
    let current_group = props.golfer.as_ref().and_then(|g| g.group_id);
    let draft = use_state(|| match &props.golfer {
        Some(golfer) => GolferDraft::from(&golfer.golfer_details),
        None => GolferDraft::in_group(props.default_group),
    });
    let errors = use_state(FieldErrors::new);
    let saving = use_state(|| false);

    let on_submit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let on_save = props.on_save.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |()| match (*draft).clone().into_details(today()) {
            Ok(details) => {
                errors.set(FieldErrors::new());
                saving.set(true);
                on_save.emit((details, save_done(&saving, &on_close)));
            }
            Err(field_errors) => errors.set(field_errors),
        })
    };

    let gender_options = Gender::ALL
        .into_iter()
        .map(|g| (AttrValue::from(g.code()), AttrValue::from(g.to_string())))
        .collect::<Vec<_>>();
    let skill_options = SkillLevel::ALL
        .into_iter()
        .map(|s| (AttrValue::from(s.as_str()), AttrValue::from(s.to_string())))
        .collect::<Vec<_>>();

    let (title, submit_text) = match props.golfer {
        Some(_) => ("Edit Golfer", "Save Changes"),
        None => ("Add Golfer", "Add Golfer"),
    };
    let context = props.golfer.as_ref().map(|g| {
        let code = g.golfer_code.as_deref().unwrap_or("no code");
        AttrValue::from(format!("Editing: {} ({code})", g.full_name))
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
                <TextInput
                    label="First Name"
                    value={draft.first_name.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.first_name = v)}
                    error={field_error(&errors, "first_name")}
                    required=true
                />
                <TextInput
                    label="Last Name"
                    value={draft.last_name.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.last_name = v)}
                    error={field_error(&errors, "last_name")}
                    required=true
                />
                <TextInput
                    label="Golfer ID"
                    value={draft.golfer_code.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.golfer_code = v)}
                    error={field_error(&errors, "golfer_code")}
                    placeholder="Auto-generated if blank"
                />
                <TextInput
                    label="Email"
                    input_type="email"
                    value={draft.email.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.email = v)}
                    error={field_error(&errors, "email")}
                />
                <TextInput
                    label="Phone"
                    input_type="tel"
                    value={draft.phone.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.phone = v)}
                    error={field_error(&errors, "phone")}
                />
                <TextInput
                    label="Date of Birth"
                    input_type="date"
                    value={draft.date_of_birth.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.date_of_birth = v)}
                    error={field_error(&errors, "date_of_birth")}
                />
                <SelectInput
                    label="Gender"
                    value={draft.gender.map(|g| g.code()).unwrap_or_default()}
                    options={gender_options}
                    placeholder="Not specified"
                    on_change={draft_setter(&draft, |d, v: String| d.gender = v.parse().ok())}
                />
                <TextInput
                    label="Handicap"
                    input_type="number"
                    step="0.1"
                    value={draft.handicap.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.handicap = v)}
                    error={field_error(&errors, "handicap")}
                />
                <SelectInput
                    label="Skill Level"
                    value={draft.skill_level.as_str()}
                    options={skill_options}
                    on_change={draft_setter(&draft, |d, v: String| {
                        d.skill_level = v.parse().unwrap_or_default();
                    })}
                    required=true
                />
                <TextInput
                    label="Preferred Tee"
                    value={draft.preferred_tee.clone()}
                    on_change={draft_setter(&draft, |d, v: String| d.preferred_tee = v)}
                    error={field_error(&errors, "preferred_tee")}
                    placeholder="e.g., Blue"
                />
            </div>
            <SelectInput
                label="Group"
                value={draft.group_id.map(|id| id.to_string()).unwrap_or_default()}
                options={assignable_groups(&props.groups, current_group)}
                placeholder="Unassigned"
                on_change={draft_setter(&draft, |d, v: String| {
                    d.group_id = selected_id(&v, GroupId);
                })}
            />
            <CheckboxInput
                label="Active"
                checked={draft.is_active}
                on_change={draft_setter(&draft, |d, v: bool| d.is_active = v)}
            />
            <TextArea
                label="Notes"
                value={draft.notes.clone()}
                on_change={draft_setter(&draft, |d, v: String| d.notes = v)}
            />
        </FormModal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use uuid::Uuid;

    fn group(name: &str, count: i64, max: i32) -> responses::Group {
        responses::Group {
            group_id: GroupId(Uuid::new_v4()),
            group_details: payloads::Group {
                tournament_id: None,
                nickname: Some(name.to_string()),
                max_golfers: max,
            },
            group_number: 1,
            display_name: name.to_string(),
            tournament_name: None,
            current_golfer_count: count,
            is_full: i64::from(max) <= count,
            available_spots: (i64::from(max) - count).max(0),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn full_groups_are_hidden_unless_current() {
        let open = group("Early birds", 2, 4);
        let full = group("Foursome", 4, 4);
        let groups = vec![open.clone(), full.clone()];

        let options = assignable_groups(&groups, None);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].1.as_str(), "Early birds (2 spots left)");

        let options = assignable_groups(&groups, Some(full.group_id));
        assert_eq!(options.len(), 2);
    }
}
