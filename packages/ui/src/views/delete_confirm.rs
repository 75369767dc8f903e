use dioxus::prelude::*;

#[component]
pub fn DeleteConfirmView(
    name: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "delete-confirm",
            h2 { class: "dialog-title", "Delete Student" }
            p { "Are you sure you want to delete {name}?" }
            div {
                class: "form-actions",
                button {
                    class: "danger",
                    onclick: move |_| on_confirm.call(()),
                    "Delete"
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
