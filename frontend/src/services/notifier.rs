use recommended_videos::{Listeners, Notifier, Subscription};
use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Forwards notifications to whichever `Toasts` component is mounted.
#[derive(Default)]
pub struct ToastNotifier {
    next_id: Cell<u64>,
    toasts: Listeners<Toast>,
}

impl ToastNotifier {
    pub fn subscribe(&self, listener: impl Fn(&Toast) + 'static) -> Subscription {
        self.toasts.subscribe(listener)
    }

    fn push(&self, kind: ToastKind, message: &str) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.toasts.emit(&Toast {
            id,
            kind,
            message: message.to_string(),
        });
    }
}

impl Notifier for ToastNotifier {
    fn error(&self, message: &str) {
        log::error!("{message}");
        self.push(ToastKind::Error, message);
    }

    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message);
    }
}
