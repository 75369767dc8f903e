use dioxus::prelude::*;
use records::AdminSession;

#[component]
pub fn Sidebar(
    admin: Option<AdminSession>,
    on_sign_out: EventHandler<()>,
) -> Element {
    rsx! {
        aside {
            class: "sidebar",

            div {
                class: "sidebar-header",
                span { class: "sidebar-title", "Rollcall" }
                if let Some(ref a) = admin {
                    span { class: "sidebar-user", "{a.email}" }
                }
            }

            nav {
                class: "sidebar-nav",
                span { class: "sidebar-item active", "Students" }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "sidebar-item",
                    onclick: move |_| on_sign_out.call(()),
                    "Logout"
                }
            }
        }
    }
}
