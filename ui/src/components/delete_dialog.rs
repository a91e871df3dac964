use payloads::Record;
use yew::prelude::*;

use crate::components::ConfirmationModal;
use crate::hooks::{Done, Resource};

/// What a delete confirmation is about.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget<R: Record> {
    /// A single record, with the name shown to the user.
    One(R::Id, String),
    Many(Vec<R::Id>),
}

#[derive(Properties, PartialEq)]
pub struct DeleteDialogProps<R: Resource> {
    pub target: DeleteTarget<R>,
    pub delete: Callback<(R::Id, bool, Done)>,
    pub bulk_delete: Callback<(Vec<R::Id>, bool, Done)>,
    /// Offers cascading to dependent records when set.
    #[prop_or_default]
    pub children_label: Option<AttrValue>,
    pub on_close: Callback<()>,
}

/// Confirms and performs a single or bulk delete through a data hook.
///
/// ```rust,ignore
/// <DeleteDialog<Golfer>
///     {target}
///     delete={golfers.delete.clone()}
///     bulk_delete={golfers.bulk_delete.clone()}
///     children_label="Also delete their shots"
///     on_close={close}
/// />
/// ```
#[function_component]
pub fn DeleteDialog<R: Resource>(props: &DeleteDialogProps<R>) -> Html {
    let deleting = use_state(|| false);

    let done: Done = {
        let deleting = deleting.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |ok: bool| {
            deleting.set(false);
            if ok {
                on_close.emit(());
            }
        })
    };

    let on_confirm = {
        let deleting = deleting.clone();
        let target = props.target.clone();
        let delete = props.delete.clone();
        let bulk_delete = props.bulk_delete.clone();
        Callback::from(move |delete_children: bool| {
            deleting.set(true);
            match &target {
                DeleteTarget::One(id, _) => {
                    delete.emit((*id, delete_children, done.clone()))
                }
                DeleteTarget::Many(ids) => bulk_delete.emit((
                    ids.clone(),
                    delete_children,
                    done.clone(),
                )),
            }
        })
    };

    let label = R::LABEL.to_lowercase();
    let (title, message, item_count) = match &props.target {
        DeleteTarget::One(_, name) => (
            format!("Delete {}", R::LABEL),
            format!(
                "Are you sure you want to delete {name}? This action cannot be undone."
            ),
            None,
        ),
        DeleteTarget::Many(ids) => (
            format!("Delete {}s", R::LABEL),
            format!(
                "Are you sure you want to delete the selected {label}s? This action cannot be undone."
            ),
            Some(ids.len()),
        ),
    };

    html! {
        <ConfirmationModal
            {title}
            {message}
            {item_count}
            show_children_option={props.children_label.is_some()}
            children_label={props.children_label.clone().unwrap_or_default()}
            {on_confirm}
            on_close={props.on_close.clone()}
            is_loading={*deleting}
        />
    }
}
