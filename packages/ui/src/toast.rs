use std::time::Duration;

use dioxus::prelude::*;

use crate::timer::sleep;

/// How long a toast stays on screen unless clicked away.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Resolution of the provider's expiry clock.
const TOAST_TICK: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    remaining: Duration,
}

/// Transient notifications, newest last.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toasts {
    entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: &str) -> u64 {
        self.next_id += 1;
        self.entries.push(Toast {
            id: self.next_id,
            kind,
            message: message.to_string(),
            remaining: TOAST_DURATION,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    /// Count `elapsed` against every toast and drop the expired ones.
    pub fn advance(&mut self, elapsed: Duration) {
        for toast in &mut self.entries {
            toast.remaining = toast.remaining.saturating_sub(elapsed);
        }
        self.entries.retain(|t| !t.remaining.is_zero());
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Show a toast. [`ToastProvider`] removes it after [`TOAST_DURATION`], whether
/// or not the caller is still mounted.
pub fn show_toast(toasts: &mut Signal<Toasts>, kind: ToastKind, message: &str) {
    toasts.write().push(kind, message);
}

/// Provides the toast context and renders the stack in the top-right corner.
///
/// The expiry clock runs in this component's scope, so toasts raised by a view
/// that unmounts still time out.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let mut toasts = use_context_provider(|| Signal::new(Toasts::default()));
    use_future(move || async move {
        loop {
            sleep(TOAST_TICK).await;
            if !toasts.peek().entries().is_empty() {
                toasts.write().advance(TOAST_TICK);
            }
        }
    });
    let entries = toasts().entries().to_vec();

    rsx! {
        {children}

        div {
            class: "toaster",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    },
                    role: "status",
                    onclick: {
                        let id = toast.id;
                        move |_| toasts.write().dismiss(id)
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
