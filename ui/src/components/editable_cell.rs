use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::format::{format_metric, parse_number};

#[derive(Properties, PartialEq)]
pub struct EditableCellProps {
    pub value: Option<f64>,
    /// Unit appended to the displayed value, e.g. " mph".
    #[prop_or_default]
    pub suffix: AttrValue,
    /// Called with the new value. Input that isn't a number is dropped.
    pub on_save: Callback<f64>,
    #[prop_or_default]
    pub disabled: bool,
}

/// A number that turns into an input when clicked.
#[function_component]
pub fn EditableCell(props: &EditableCellProps) -> Html {
    let editing = use_state(|| false);
    let input = use_state(String::new);
    let input_ref = use_node_ref();

    {
        let input_ref = input_ref.clone();
        use_effect_with(*editing, move |editing| {
            if *editing
                && let Some(input) = input_ref.cast::<HtmlInputElement>()
            {
                let _ = input.focus();
                input.select();
            }
        });
    }

    let start = {
        let editing = editing.clone();
        let input = input.clone();
        let value = props.value;
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if disabled {
                return;
            }
            input.set(value.map(|v| v.to_string()).unwrap_or_default());
            editing.set(true);
        })
    };

    let save = {
        let editing = editing.clone();
        let input = input.clone();
        let on_save = props.on_save.clone();
        let current = props.value;
        Callback::from(move |()| {
            editing.set(false);
            if let Some(value) = parse_number(&input)
                && Some(value) != current
            {
                on_save.emit(value);
            }
        })
    };

    let cancel = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(false))
    };

    if !*editing {
        return html! {
            <button
                onclick={start}
                disabled={props.disabled}
                title="Click to edit"
                class="px-2 py-1 -mx-2 rounded text-left tabular-nums hover:bg-neutral-100 dark:hover:bg-neutral-700 disabled:hover:bg-transparent"
            >
                {format_metric(props.value, &props.suffix)}
            </button>
        };
    }

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let onkeydown = {
        let save = save.clone();
        let cancel = cancel.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => {
                e.prevent_default();
                save.emit(());
            }
            "Escape" => cancel.emit(()),
            _ => {}
        })
    };

    html! {
        <div class="flex items-center gap-1">
            <input
                ref={input_ref}
                type="number"
                step="0.1"
                value={(*input).clone()}
                {oninput}
                {onkeydown}
                class="w-24 px-2 py-1 text-sm border border-neutral-300 dark:border-neutral-600 rounded bg-white dark:bg-neutral-700"
            />
            <button
                onclick={save.reform(|_: MouseEvent| ())}
                title="Save"
                class="px-1 text-green-600 dark:text-green-400 hover:text-green-800"
            >
                {"✓"}
            </button>
            <button
                onclick={cancel.reform(|_: MouseEvent| ())}
                title="Cancel"
                class="px-1 text-red-600 dark:text-red-400 hover:text-red-800"
            >
                {"✕"}
            </button>
        </div>
    }
}
