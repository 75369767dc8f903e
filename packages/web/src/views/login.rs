//! Login page: the Session Gate.

use dioxus::prelude::*;
use ui::{use_auth, AuthState, LoginForm};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();

    // If already signed in, go straight to the student list
    use_effect(move || {
        let state = auth();
        if !state.loading && state.admin.is_some() {
            nav.replace(Route::Students {});
        }
    });

    rsx! {
        div {
            class: "login-container",
            LoginForm {
                on_signed_in: move |admin| {
                    auth.set(AuthState::signed_in(admin));
                    nav.push(Route::Students {});
                },
            }
        }
    }
}
