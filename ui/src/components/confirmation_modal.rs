use yew::prelude::*;

use crate::components::Modal;
use crate::utils::format::pluralize;

#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    /// Modal title (e.g., "Delete Group")
    pub title: AttrValue,
    /// What will happen if the user confirms
    pub message: AttrValue,
    #[prop_or_else(|| AttrValue::from("Delete"))]
    pub confirm_text: AttrValue,
    /// Bulk operations show how many records are affected.
    #[prop_or_default]
    pub item_count: Option<usize>,
    /// Offer to delete dependent records as well.
    #[prop_or_default]
    pub show_children_option: bool,
    #[prop_or_else(|| AttrValue::from("Also delete related items"))]
    pub children_label: AttrValue,
    #[prop_or_else(|| AttrValue::from(
        "If unchecked, related items will be unassociated but not deleted"
    ))]
    pub children_description: AttrValue,
    /// Receives whether dependent records should be deleted too.
    pub on_confirm: Callback<bool>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub is_loading: bool,
}

#[function_component]
pub fn ConfirmationModal(props: &ConfirmationModalProps) -> Html {
    let delete_children = use_state(|| false);

    let on_children_toggle = {
        let delete_children = delete_children.clone();
        Callback::from(move |_: Event| delete_children.set(!*delete_children))
    };

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        let delete_children = *delete_children;
        Callback::from(move |_: MouseEvent| on_confirm.emit(delete_children))
    };

    let on_cancel_click = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <Modal
            title={props.title.clone()}
            on_close={props.on_close.clone()}
            close_on_backdrop={!props.is_loading}
        >
            <div class="space-y-4">
                <p class="text-sm text-neutral-600 dark:text-neutral-400">
                    {&props.message}
                </p>

                if let Some(count) = props.item_count {
                    <p class="text-sm font-medium text-neutral-900 dark:text-neutral-100">
                        {format!(
                            "{} will be affected.",
                            pluralize(count, "item", "items")
                        )}
                    </p>
                }

                if props.show_children_option {
                    <div class="p-3 rounded-md bg-amber-50 dark:bg-amber-900/20 border border-amber-200 dark:border-amber-800">
                        <label class="flex items-center gap-2 text-sm font-medium text-neutral-900 dark:text-neutral-100">
                            <input
                                type="checkbox"
                                checked={*delete_children}
                                onchange={on_children_toggle}
                                disabled={props.is_loading}
                                class="h-4 w-4 rounded border-neutral-300 dark:border-neutral-600"
                            />
                            {&props.children_label}
                        </label>
                        <p class="mt-1 ml-6 text-xs text-neutral-600 dark:text-neutral-400">
                            {&props.children_description}
                        </p>
                    </div>
                }
            </div>

            <div class="flex justify-end gap-3 mt-6">
                <button
                    onclick={on_cancel_click}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-neutral-700 dark:text-neutral-300
                           bg-white dark:bg-neutral-700 border border-neutral-300 dark:border-neutral-600
                           rounded-md hover:bg-neutral-50 dark:hover:bg-neutral-600
                           disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                >
                    {"Cancel"}
                </button>
                <button
                    onclick={on_confirm_click}
                    disabled={props.is_loading}
                    class="px-4 py-2 text-sm font-medium text-white
                           bg-red-600 hover:bg-red-700 dark:bg-red-700 dark:hover:bg-red-600
                           rounded-md disabled:opacity-50 disabled:cursor-not-allowed
                           transition-colors"
                >
                    if props.is_loading {
                        {"Processing..."}
                    } else {
                        {&props.confirm_text}
                    }
                </button>
            </div>
        </Modal>
    }
}
