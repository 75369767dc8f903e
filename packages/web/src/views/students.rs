//! Student list: the Record Manager screen.

use api::{RemoteAuth, RemoteStore};
use dioxus::prelude::*;
use records::{RecordId, RecordManager, StudentRecord};
use ui::views::{DeleteConfirmView, ModalOverlay, StudentDetailView};
use ui::{use_auth, use_notices, AuthState, Sidebar, StudentFormDialog, StudentTable, UiNotifier};

use crate::Route;

type Manager = RecordManager<RemoteStore, UiNotifier>;

#[component]
pub fn Students() -> Element {
    let mut auth = use_auth();
    let notices = use_notices();
    let nav = use_navigator();

    let mut manager: Signal<Manager> =
        use_signal(|| RecordManager::new(RemoteStore, UiNotifier::new(notices)));

    // No session: back to the login page
    use_effect(move || {
        let state = auth();
        if !state.loading && state.admin.is_none() {
            nav.replace(Route::Login {});
        }
    });

    // Load the collection once signed in. Store calls run on a clone and are
    // folded back into the live manager, so clicks made meanwhile are kept.
    let _loader = use_resource(move || async move {
        if auth().admin.is_none() {
            return;
        }
        match api::get_config().await {
            Ok(config) => manager.write().apply_config(&config),
            Err(e) => tracing::warn!("using default display settings: {e}"),
        }
        // peek: reading the manager here must not re-run the loader
        let mut running = manager.peek().clone();
        if running.load().await.is_err() {
            tracing::warn!("student list left empty");
        }
        manager.write().finish_load(&running);
    });

    let find = move |id: &RecordId| -> Option<StudentRecord> {
        manager
            .read()
            .state()
            .records
            .iter()
            .find(|r| &r.id == id)
            .cloned()
    };

    let on_view = move |id: RecordId| {
        if let Some(record) = find(&id) {
            manager.write().view(&record);
        }
    };

    let on_edit = move |id: RecordId| {
        if let Some(record) = find(&id) {
            manager.write().open_edit(&record);
        }
    };

    let on_delete = move |id: RecordId| {
        if let Some(record) = find(&id) {
            manager.write().request_delete(&record);
        }
    };

    let on_submit = move |_| async move {
        let mut running = manager();
        let outcome = running.submit().await;
        manager.write().finish_submit(&running, &outcome);
    };

    let on_confirm_delete = move |_| async move {
        let mut running = manager();
        let Some(target) = running.state().pending_delete.as_ref().map(|r| r.id.clone()) else {
            return;
        };
        running.confirm_delete().await;
        manager.write().finish_delete(&running, &target);
    };

    let on_sign_out = move |_| async move {
        let mut running = manager();
        if running.sign_out(&RemoteAuth).await.is_ok() {
            manager.set(running);
            auth.set(AuthState::signed_out());
            nav.replace(Route::Login {});
        }
    };

    let current = manager();
    let state = current.state();

    rsx! {
        div {
            class: "students-layout",

            Sidebar {
                admin: auth().admin,
                on_sign_out: on_sign_out,
            }

            main {
                class: "students-main",

                header {
                    class: "students-header",
                    h1 { "Students" }
                    button {
                        class: "primary",
                        onclick: move |_| manager.write().open_create(),
                        "Add Student"
                    }
                }

                StudentTable {
                    rows: current.rows(),
                    on_view: on_view,
                    on_edit: on_edit,
                    on_delete: on_delete,
                }
            }
        }

        // Overlays
        if state.form_open {
            ModalOverlay {
                wide: true,
                on_close: move |_| manager.write().cancel_form(),
                StudentFormDialog {
                    draft: state.draft.clone(),
                    editing: current.is_editing(),
                    on_change: move |(field, value)| manager.write().set_field(field, value),
                    on_submit: on_submit,
                    on_cancel: move |_| manager.write().cancel_form(),
                }
            }
        }
        if state.detail.is_some() {
            ModalOverlay {
                on_close: move |_| manager.write().close_view(),
                StudentDetailView {
                    entries: current.detail_entries(),
                    on_close: move |_| manager.write().close_view(),
                }
            }
        }
        if let Some(target) = &state.pending_delete {
            ModalOverlay {
                on_close: move |_| manager.write().cancel_delete(),
                DeleteConfirmView {
                    name: target.full_name(),
                    on_confirm: on_confirm_delete,
                    on_cancel: move |_| manager.write().cancel_delete(),
                }
            }
        }
    }
}
