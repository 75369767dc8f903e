use dioxus::prelude::*;

/// Read-only view of one student, every field labelled.
#[component]
pub fn StudentDetailView(entries: Vec<(&'static str, String)>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "student-detail",
            h2 { class: "dialog-title", "Student Details" }
            dl {
                class: "detail-list",
                for (label, value) in entries {
                    div {
                        key: "{label}",
                        class: "detail-row",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "secondary",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
        }
    }
}
