use dioxus::prelude::*;
use records::{Field, Gender, StudentDraft};

/// Create/edit form. Every input writes straight into the draft through `on_change`.
#[component]
pub fn StudentFormDialog(
    draft: StudentDraft,
    editing: bool,
    on_change: EventHandler<(Field, String)>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if editing { "Edit Student" } else { "Add Student" };

    rsx! {
        form {
            class: "student-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },

            h2 { class: "dialog-title", "{title}" }

            div {
                class: "form-grid",
                for field in Field::ALL {
                    div {
                        key: "{field.name()}",
                        class: "form-field",
                        label { r#for: "student-{field.name()}", "{field.label()}" }
                        if field == Field::Gender {
                            select {
                                id: "student-{field.name()}",
                                value: draft.get(field).to_string(),
                                onchange: move |evt| on_change.call((field, evt.value())),
                                option { value: "", "Select gender" }
                                for gender in Gender::ALL {
                                    option {
                                        key: "{gender}",
                                        value: gender.as_str(),
                                        "{gender}"
                                    }
                                }
                            }
                        } else if field == Field::Address {
                            textarea {
                                id: "student-{field.name()}",
                                rows: 2,
                                value: draft.get(field).to_string(),
                                oninput: move |evt| on_change.call((field, evt.value())),
                            }
                        } else {
                            input {
                                id: "student-{field.name()}",
                                r#type: field.input_type(),
                                value: draft.get(field).to_string(),
                                oninput: move |evt| on_change.call((field, evt.value())),
                            }
                        }
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    r#type: "submit",
                    if editing { "Update" } else { "Submit" }
                }
                button {
                    class: "secondary",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
