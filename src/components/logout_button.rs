//! Logout button that signs the user out and reports the new auth status.
//!
//! DESIGN
//! ======
//! The host owns the auth status and passes its setter in as `set_status`.
//! The button only owns its in-flight phase, which disables it while the
//! requests are pending so a double click cannot start a second logout.

#[cfg(test)]
#[path = "logout_button_test.rs"]
mod logout_button_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::{NavigateOptions, hooks::use_navigate};

use crate::config::LogoutConfig;
use crate::net::types::AuthStatus;
use crate::state::logout::LogoutPhase;
#[cfg(feature = "hydrate")]
use crate::{net::api::BrowserAuthApi, util::logout::LogoutControl};

fn button_label(phase: LogoutPhase) -> &'static str {
    if phase.is_pending() { "Logging out..." } else { "Logout" }
}

/// Button that logs the user out, forwards the resulting status and
/// navigates home.
///
/// Must be rendered inside a `<Router>`. Outside the `hydrate` build the
/// click handler is inert.
#[component]
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn LogoutButton(
    #[prop(into)] set_status: Callback<AuthStatus>,
    #[prop(optional)] config: Option<LogoutConfig>,
) -> impl IntoView {
    let phase = RwSignal::new(LogoutPhase::Idle);
    #[cfg(feature = "hydrate")]
    let config = StoredValue::new(config.unwrap_or_default());
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let config = config.get_value();
            leptos::task::spawn_local(async move {
                let control = LogoutControl::new(
                    BrowserAuthApi::new(config.clone()),
                    set_status,
                    move |path: &str| navigate(path, NavigateOptions::default()),
                )
                .with_phase(phase)
                .with_home_path(config.home_path);
                control.activate().await;
            });
        }
    };

    view! {
        <button
            type="button"
            class="logout_button"
            class:logout_button--pending=move || phase.get().is_pending()
            disabled=move || phase.get().is_pending()
            aria-busy=move || phase.get().is_pending().to_string()
            on:click=on_click
        >
            {move || button_label(phase.get())}
        </button>
    }
}
