//! Controlled inputs for the entity forms. Each shows its label, the current
//! draft value and the validation message for its field.

use payloads::validation::FieldErrors;
use uuid::Uuid;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

const LABEL_CLASS: &str =
    "block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1";

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-neutral-300 \
     dark:border-neutral-600 rounded-md shadow-sm bg-white dark:bg-neutral-700 \
     text-neutral-900 dark:text-neutral-100 focus:outline-none focus:ring-2 \
     focus:ring-neutral-500 focus:border-neutral-500 disabled:opacity-50 \
     disabled:cursor-not-allowed";

/// Callback that edits one field of a draft held in state.
pub fn draft_setter<D, V>(
    draft: &UseStateHandle<D>,
    set: fn(&mut D, V),
) -> Callback<V>
where
    D: Clone + 'static,
    V: 'static,
{
    let draft = draft.clone();
    Callback::from(move |value: V| {
        let mut next = (*draft).clone();
        set(&mut next, value);
        draft.set(next);
    })
}

/// Parse an id picked in a `<select>`; the empty placeholder is `None`.
pub fn selected_id<Id>(value: &str, wrap: fn(Uuid) -> Id) -> Option<Id> {
    value.parse().ok().map(wrap)
}

pub fn field_error(errors: &FieldErrors, field: &str) -> Option<AttrValue> {
    errors.get(field).map(|e| AttrValue::from(e.to_string()))
}

fn label(text: &AttrValue, required: bool) -> Html {
    html! {
        <label class={LABEL_CLASS}>
            {text}
            if required {
                <span class="text-red-600 dark:text-red-400">{" *"}</span>
            }
        </label>
    }
}

fn error_text(error: &Option<AttrValue>) -> Html {
    match error {
        Some(error) => html! {
            <p class="mt-1 text-xs text-red-600 dark:text-red-400">{error}</p>
        },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    /// `text`, `number`, `date`, `datetime-local`, `email`...
    #[prop_or_else(|| AttrValue::from("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub step: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn TextInput(props: &TextInputProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div>
            {label(&props.label, props.required)}
            <input
                type={props.input_type.clone()}
                value={props.value.clone()}
                {oninput}
                placeholder={props.placeholder.clone()}
                step={props.step.clone()}
                disabled={props.disabled}
                class={INPUT_CLASS}
            />
            {error_text(&props.error)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TextAreaProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_change: Callback<String>,
    #[prop_or(3)]
    pub rows: u32,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn TextArea(props: &TextAreaProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div>
            {label(&props.label, false)}
            <textarea
                value={props.value.clone()}
                {oninput}
                rows={props.rows.to_string()}
                disabled={props.disabled}
                class={INPUT_CLASS}
            />
            {error_text(&props.error)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectInputProps {
    pub label: AttrValue,
    /// Value of the selected option; empty selects the placeholder.
    pub value: AttrValue,
    /// `(value, text)` pairs.
    pub options: Vec<(AttrValue, AttrValue)>,
    pub on_change: Callback<String>,
    /// Text of an empty first option, when the field may be left unset.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn SelectInput(props: &SelectInputProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div>
            {label(&props.label, props.required)}
            <select {onchange} disabled={props.disabled} class={INPUT_CLASS}>
                if let Some(placeholder) = &props.placeholder {
                    <option value="" selected={props.value.is_empty()}>
                        {placeholder}
                    </option>
                }
                {for props.options.iter().map(|(value, text)| html! {
                    <option
                        value={value.clone()}
                        selected={*value == props.value}
                    >
                        {text}
                    </option>
                })}
            </select>
            {error_text(&props.error)}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckboxInputProps {
    pub label: AttrValue,
    pub checked: bool,
    pub on_change: Callback<bool>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component]
pub fn CheckboxInput(props: &CheckboxInputProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.checked());
        })
    };

    html! {
        <label class="flex items-center gap-2 text-sm font-medium text-neutral-700 dark:text-neutral-300">
            <input
                type="checkbox"
                checked={props.checked}
                {onchange}
                disabled={props.disabled}
                class="h-4 w-4 text-neutral-600 focus:ring-neutral-500 border-neutral-300 dark:border-neutral-600 rounded disabled:opacity-50"
            />
            {&props.label}
        </label>
    }
}
