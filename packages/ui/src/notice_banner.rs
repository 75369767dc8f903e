use dioxus::prelude::*;
use records::NoticeKind;

use crate::notices::use_notices;

#[component]
pub fn NoticeBanner() -> Element {
    let mut notices = use_notices();
    let entries = notices().entries.clone();

    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notice-stack",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: match notice.kind {
                        NoticeKind::Error => "notice error",
                        NoticeKind::Success => "notice success",
                        NoticeKind::Info => "notice info",
                    },
                    role: "alert",
                    span { class: "notice-time", "{notice.timestamp}" }
                    span { class: "notice-message", "{notice.message}" }
                    button {
                        class: "notice-close",
                        title: "Dismiss",
                        onclick: move |_| notices.write().dismiss(notice.id),
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
