//! Unlock / create-vault page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing route. A visit to `/?setup=1` opens on the create-vault form;
//! otherwise the unlock form is shown and the user can switch. On success the
//! page hard-navigates to the dashboard so the typed password does not
//! outlive this page.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::strength_meter::StrengthMeter;
use crate::net::api::ApiClient;
use crate::net::types::{LoginRequest, SetupRequest};
use crate::state::auth::{AuthFlow, AuthState};
#[cfg(feature = "hydrate")]
use crate::state::followup::Followup;
#[cfg(feature = "hydrate")]
use crate::util::browser;
use crate::util::task::Liveness;

/// A validated request ready to send.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
enum PendingAuth {
    Login(LoginRequest),
    Setup(SetupRequest),
}

impl PendingAuth {
    fn flow(&self) -> AuthFlow {
        match self {
            PendingAuth::Login(_) => AuthFlow::Login,
            PendingAuth::Setup(_) => AuthFlow::Setup,
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let query = use_query_map();
    let show_setup = query.with_untracked(|q| q.get("setup").is_some_and(|v| v == "1"));

    let auth = RwSignal::new(AuthState::new(show_setup));
    let alive = Liveness::for_current_owner();

    let submit = Callback::new(move |()| {
        let pending = auth
            .try_update(|s| {
                if s.show_setup {
                    s.begin_setup().map(PendingAuth::Setup)
                } else {
                    s.begin_login().map(PendingAuth::Login)
                }
            })
            .flatten();
        let Some(pending) = pending else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let flow = pending.flow();
                let result = match &pending {
                    PendingAuth::Login(body) => api.login(body).await,
                    PendingAuth::Setup(body) => api.setup(body).await,
                };
                if !alive.is_alive() {
                    log::debug!("auth result dropped after page teardown");
                    return;
                }
                if let Err(e) = &result {
                    log::warn!("{flow:?} failed: {e}");
                }
                if let Some(Followup::Redirect(path)) = auth.try_update(|s| s.finish(flow, result)) {
                    browser::redirect(path);
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (pending.flow(), &api, &alive);
        }
    });

    let show_setup = move || auth.with(|s| s.show_setup);
    let loading = move || auth.with(|s| s.loading);
    let input_type = move || if auth.with(|s| s.show_password) { "text" } else { "password" };
    let master = Signal::derive(move || auth.with(|s| s.master_password.clone()));

    view! {
        <div class="login-page">
            <h1>"Vault"</h1>
            <p>{move || if show_setup() { "Create your vault" } else { "Unlock your vault" }}</p>

            <form
                class="login-page__form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="dialog__label">
                    "Master Password"
                    <div class="login-page__row">
                        <input
                            class="dialog__input"
                            type=input_type
                            autocomplete=move || if show_setup() { "new-password" } else { "current-password" }
                            prop:value=master
                            on:input=move |ev| auth.update(|s| s.master_password = event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="btn btn--icon"
                            on:click=move |_| auth.update(|s| s.show_password = !s.show_password)
                        >
                            {move || if auth.with(|s| s.show_password) { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>

                <Show when=show_setup>
                    <StrengthMeter password=master/>
                    <label class="dialog__label">
                        "Confirm Password"
                        <input
                            class="dialog__input"
                            type=input_type
                            autocomplete="new-password"
                            prop:value=move || auth.with(|s| s.confirm_password.clone())
                            on:input=move |ev| auth.update(|s| s.confirm_password = event_target_value(&ev))
                        />
                    </label>
                </Show>

                {move || auth.with(|s| s.error.clone()).map(|message| view! { <p class="login-page__error">{message}</p> })}

                <button type="submit" class="btn btn--primary login-button" disabled=loading>
                    {move || match (loading(), show_setup()) {
                        (true, true) => "Creating...",
                        (true, false) => "Unlocking...",
                        (false, true) => "Create Vault",
                        (false, false) => "Unlock",
                    }}
                </button>
            </form>

            <button class="btn btn--link" disabled=loading on:click=move |_| auth.update(AuthState::toggle_setup)>
                {move || if show_setup() { "Already have a vault? Unlock it" } else { "First time? Create a vault" }}
            </button>
        </div>
    }
}
