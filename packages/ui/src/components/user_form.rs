use api::{UserDraft, UserRecord};
use dioxus::prelude::*;

use crate::service::use_user_service;
use crate::submission::{submit_user, FormMode, SubmitError, SubmitGuard};
use crate::toast::{show_toast, use_toasts, ToastKind};
use crate::validation::{validate, ValidationErrors};

/// Add/edit form for a single user.
///
/// Fields are validated before anything is sent. While a request is out the
/// submit button is disabled and further submits are dropped. On failure the
/// message shows inline and as a toast, and the fields keep their values.
#[component]
pub fn UserForm(
    #[props(default)] mode: FormMode,
    on_complete: EventHandler<UserRecord>,
    #[props(default)] on_cancel: Option<EventHandler<()>>,
) -> Element {
    let service = use_user_service();
    let mut toasts = use_toasts();
    let guard = use_hook(SubmitGuard::new);

    let initial = mode.initial_draft();
    let mut name = use_signal(|| initial.name.clone());
    let mut email = use_signal(|| initial.email.clone());
    let mut errors = use_signal(ValidationErrors::default);
    let mut failure = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let submit_mode = mode.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(pending) = guard.try_begin() else {
            tracing::debug!("submit already in progress, ignoring");
            return;
        };

        let draft = UserDraft::new(name(), email());
        if let Err(invalid) = validate(&draft) {
            errors.set(invalid);
            return;
        }
        errors.set(ValidationErrors::default());
        failure.set(None);
        submitting.set(true);

        let service = service.clone();
        let mode = submit_mode.clone();
        spawn(async move {
            let _pending = pending;
            let outcome = submit_user(&service, &mode, &draft).await;
            submitting.set(false);
            match outcome {
                Ok(record) => {
                    if mode == FormMode::Create {
                        name.set(String::new());
                        email.set(String::new());
                    }
                    on_complete.call(record);
                }
                Err(SubmitError::Invalid(invalid)) => errors.set(invalid),
                Err(SubmitError::Api(e)) => {
                    let message = e.to_string();
                    show_toast(&mut toasts, ToastKind::Error, &message);
                    failure.set(Some(message));
                }
            }
        });
    };

    let field_errors = errors();
    let button_label = if submitting() {
        mode.pending_label()
    } else {
        mode.submit_label()
    };

    rsx! {
        form {
            class: "user-form",
            onsubmit: handle_submit,
            novalidate: true,

            if let Some(message) = failure() {
                div { class: "form-failure", role: "alert", "{message}" }
            }

            div {
                class: "form-field",
                label { r#for: "user-name", "Name" }
                input {
                    id: "user-name",
                    r#type: "text",
                    value: name(),
                    oninput: move |evt: FormEvent| {
                        name.set(evt.value());
                        errors.write().name = None;
                    },
                }
                if let Some(message) = field_errors.name {
                    p { class: "field-error", "{message}" }
                }
            }

            div {
                class: "form-field",
                label { r#for: "user-email", "Email" }
                input {
                    id: "user-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| {
                        email.set(evt.value());
                        errors.write().email = None;
                    },
                }
                if let Some(message) = field_errors.email {
                    p { class: "field-error", "{message}" }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "btn btn--primary",
                    r#type: "submit",
                    disabled: submitting(),
                    "{button_label}"
                }
                if let Some(on_cancel) = on_cancel {
                    button {
                        class: "btn btn--outline",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Close"
                    }
                }
            }
        }
    }
}
