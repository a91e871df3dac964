use yew::prelude::*;

use crate::components::Modal;
use crate::hooks::Done;

#[derive(Properties, PartialEq)]
pub struct FormModalProps {
    pub title: AttrValue,
    /// Shown above the fields when editing, e.g. the record's name.
    #[prop_or_default]
    pub context: Option<AttrValue>,
    #[prop_or_else(|| AttrValue::from("Save"))]
    pub submit_text: AttrValue,
    pub is_saving: bool,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
    pub children: Html,
}

/// Modal frame shared by the entity forms: header, optional edit banner,
/// fields and a Cancel / submit footer.
#[function_component]
pub fn FormModal(props: &FormModalProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <Modal
            title={props.title.clone()}
            on_close={props.on_close.clone()}
            max_width="max-w-2xl"
            close_on_backdrop={!props.is_saving}
        >
            if let Some(context) = &props.context {
                <div class="mb-4 p-3 rounded-md bg-blue-50 dark:bg-blue-900/20 border border-blue-200 dark:border-blue-800 text-sm text-blue-800 dark:text-blue-300">
                    {context}
                </div>
            }
            <form {onsubmit} class="space-y-4">
                {props.children.clone()}
                <div class="flex justify-end gap-3 pt-4">
                    <button
                        type="button"
                        onclick={props.on_close.reform(|_: MouseEvent| ())}
                        disabled={props.is_saving}
                        class="py-2 px-4 border border-neutral-300 dark:border-neutral-600
                               rounded-md shadow-sm text-sm font-medium text-neutral-700 dark:text-neutral-300
                               bg-white dark:bg-neutral-700 hover:bg-neutral-50 dark:hover:bg-neutral-600
                               disabled:opacity-50 disabled:cursor-not-allowed
                               transition-colors duration-200"
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        disabled={props.is_saving}
                        class="py-2 px-4 border border-transparent rounded-md shadow-sm
                               text-sm font-medium text-white bg-neutral-900 hover:bg-neutral-800
                               dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                               disabled:opacity-50 disabled:cursor-not-allowed
                               transition-colors duration-200"
                    >
                        if props.is_saving {
                            {"Saving..."}
                        } else {
                            {&props.submit_text}
                        }
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// Completion callback for a form save: clears the saving flag and closes
/// the form once the request succeeded.
pub fn save_done(
    saving: &UseStateHandle<bool>,
    on_close: &Callback<()>,
) -> Done {
    let saving = saving.clone();
    let on_close = on_close.clone();
    Callback::from(move |ok: bool| {
        saving.set(false);
        if ok {
            on_close.emit(());
        }
    })
}
