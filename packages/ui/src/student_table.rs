use dioxus::prelude::*;
use records::{RecordId, Row};

/// The student list. The "ID" column is the display position, not the document id.
#[component]
pub fn StudentTable(
    rows: Vec<Row>,
    on_view: EventHandler<RecordId>,
    on_edit: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "students-empty", "No students yet." }
        };
    }

    rsx! {
        table {
            class: "students-table",
            thead {
                tr {
                    th { "ID" }
                    th { "Name" }
                    th { "Class" }
                    th { "Section" }
                    th { "Roll Number" }
                    th { "Actions" }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        key: "{row.id}",
                        td { "{row.position}" }
                        td { "{row.name}" }
                        td { "{row.class}" }
                        td { "{row.section}" }
                        td { "{row.roll_number}" }
                        td {
                            class: "row-actions",
                            button {
                                title: "View",
                                onclick: {
                                    let id = row.id.clone();
                                    move |_| on_view.call(id.clone())
                                },
                                "View"
                            }
                            button {
                                title: "Edit",
                                onclick: {
                                    let id = row.id.clone();
                                    move |_| on_edit.call(id.clone())
                                },
                                "Edit"
                            }
                            button {
                                class: "danger",
                                title: "Delete",
                                onclick: {
                                    let id = row.id.clone();
                                    move |_| on_delete.call(id.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
