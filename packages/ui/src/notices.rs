//! Notice queue behind the banner, and the [`Notifier`] the controllers use.

use dioxus::prelude::*;
use records::{NoticeKind, Notifier};

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub timestamp: String,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    /// Most notices kept on screen at once; older ones drop off.
    pub const MAX_VISIBLE: usize = 3;

    pub fn push(&mut self, kind: NoticeKind, message: &str, timestamp: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            timestamp,
            kind,
            message: message.to_string(),
        });
        if self.entries.len() > Self::MAX_VISIBLE {
            let excess = self.entries.len() - Self::MAX_VISIBLE;
            self.entries.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

#[component]
pub fn NoticeProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notices::default()));

    rsx! {
        {children}
    }
}

/// Routes controller notices into the banner.
#[derive(Clone, Copy, PartialEq)]
pub struct UiNotifier {
    notices: Signal<Notices>,
}

impl UiNotifier {
    pub fn new(notices: Signal<Notices>) -> Self {
        Self { notices }
    }
}

impl Notifier for UiNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        let mut notices = self.notices;
        let id = notices.write().push(kind, message, current_time());

        #[cfg(target_arch = "wasm32")]
        spawn(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
            notices.write().dismiss(id);
        });
        #[cfg(not(target_arch = "wasm32"))]
        let _ = id;
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
