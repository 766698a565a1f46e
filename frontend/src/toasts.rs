use crate::services::notifier::{Toast, ToastKind};
use crate::services::AppServices;
use std::rc::Rc;
use yew::prelude::*;

const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Default, PartialEq)]
struct ToastList {
    toasts: Vec<Toast>,
}

enum ToastAction {
    Push(Toast),
    Dismiss(u64),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => {
                toasts.push(toast);
                let overflow = toasts.len().saturating_sub(MAX_VISIBLE_TOASTS);
                toasts.drain(..overflow);
            }
            ToastAction::Dismiss(id) => toasts.retain(|toast| toast.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[function_component(Toasts)]
pub fn toasts() -> Html {
    let services = use_context::<AppServices>().expect("AppServices context is provided by App");
    let list = use_reducer(ToastList::default);

    {
        let list = list.clone();
        use_effect_with((), move |_| {
            let subscription = services
                .notifier
                .subscribe(move |toast| list.dispatch(ToastAction::Push(toast.clone())));
            move || drop(subscription)
        });
    }

    html! {
        <div class="fixed top-4 right-4 flex flex-col gap-2 z-50">
            { for list.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_dismiss = {
                    let list = list.clone();
                    Callback::from(move |_: MouseEvent| list.dispatch(ToastAction::Dismiss(id)))
                };
                let color = match toast.kind {
                    ToastKind::Error => "bg-red-600",
                    ToastKind::Success => "bg-green-600",
                };
                html! {
                    <div key={id} class={classes!("text-white", "px-4", "py-2", "rounded", "shadow", "cursor-pointer", color)} onclick={on_dismiss}>
                        { &toast.message }
                    </div>
                }
            })}
        </div>
    }
}
