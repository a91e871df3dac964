use std::rc::Rc;

use uuid::Uuid;
use yew::prelude::*;

const SUCCESS_DURATION_MS: u32 = 4000;
const ERROR_DURATION_MS: u32 = 8000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    /// Milliseconds until auto-dismiss.
    pub duration: u32,
}

impl Toast {
    pub fn error(message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type: ToastType::Error,
            duration: ERROR_DURATION_MS,
        }
    }

    pub fn success(message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type: ToastType::Success,
            duration: SUCCESS_DURATION_MS,
        }
    }
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();

        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|toast| toast.id != id),
        }

        Rc::new(ToastState { toasts })
    }
}

pub type ToastContext = UseReducerHandle<ToastState>;

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let toast_state = use_reducer(ToastState::default);

    html! {
        <ContextProvider<ToastContext> context={toast_state}>
            {props.children.clone()}
        </ContextProvider<ToastContext>>
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastHandle {
    context: Option<ToastContext>,
}

impl ToastHandle {
    pub fn add(&self, toast: Toast) {
        let Some(context) = self.context.clone() else {
            tracing::warn!(message = %toast.message, "toast outside of a ToastProvider");
            return;
        };
        let toast_id = toast.id;
        let duration_ms = toast.duration;

        context.dispatch(ToastAction::Add(toast));

        yew::platform::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            context.dispatch(ToastAction::Remove(toast_id));
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.add(Toast::error(message.into()));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.add(Toast::success(message.into()));
    }

    pub fn remove(&self, id: Uuid) {
        if let Some(context) = &self.context {
            context.dispatch(ToastAction::Remove(id));
        }
    }
}

#[hook]
pub fn use_toast() -> ToastHandle {
    ToastHandle {
        context: use_context::<ToastContext>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_keep_arrival_order() {
        let first = Toast::success("Golfer created successfully".into());
        let second = Toast::error("Network error".into());
        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Add(first.clone()))
            .reduce(ToastAction::Add(second.clone()));
        assert_eq!(state.toasts, vec![first.clone(), second.clone()]);

        let state = state.reduce(ToastAction::Remove(first.id));
        assert_eq!(state.toasts, vec![second]);
    }
}
