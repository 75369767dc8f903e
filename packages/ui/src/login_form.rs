//! Sign-in form driving a [`SessionGate`].

use api::RemoteAuth;
use dioxus::prelude::*;
use records::{AdminSession, GateOutcome, SessionGate};

#[component]
pub fn LoginForm(on_signed_in: EventHandler<AdminSession>) -> Element {
    let mut gate = use_signal(SessionGate::new);

    let onsubmit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let mut pending = gate();
        gate.write().busy = true;

        let outcome = pending.submit(&RemoteAuth).await;
        gate.set(pending);

        if let GateOutcome::Authenticated(admin) = outcome {
            on_signed_in.call(admin);
        }
    };

    let busy = gate().busy;

    rsx! {
        form {
            class: "login-form",
            onsubmit: onsubmit,

            h1 { class: "login-title", "Admin Login" }

            div {
                class: "form-field",
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    autocomplete: "username",
                    required: true,
                    disabled: busy,
                    value: gate().identifier,
                    oninput: move |evt| gate.write().identifier = evt.value(),
                }
            }

            div {
                class: "form-field",
                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    autocomplete: "current-password",
                    required: true,
                    disabled: busy,
                    value: gate().secret,
                    oninput: move |evt| gate.write().secret = evt.value(),
                }
            }

            if let Some(message) = gate().error {
                p { class: "login-error", role: "alert", "{message}" }
            }

            button {
                class: "primary",
                r#type: "submit",
                disabled: busy,
                if busy { "Signing in..." } else { "Login" }
            }
        }
    }
}
