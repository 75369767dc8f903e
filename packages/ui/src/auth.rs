//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use records::AdminSession;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub admin: Option<AdminSession>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            admin: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(admin: AdminSession) -> Self {
        Self {
            admin: Some(admin),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            admin: None,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the admin signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Ask the server for an existing session on mount
    let _ = use_resource(move || async move {
        match api::get_current_admin().await {
            Ok(Some(admin)) => auth_state.set(AuthState::signed_in(admin)),
            Ok(None) => auth_state.set(AuthState::signed_out()),
            Err(e) => {
                tracing::warn!("session check failed: {e}");
                auth_state.set(AuthState::signed_out());
            }
        }
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
