//! Toast notification overlay for the dashboard.

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;

/// Shows the dashboard's single toast slot. Auto-hide is driven by the page;
/// clicking the toast hides it early.
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    let class = move || {
        let kind = state.with(|s| s.toast.kind);
        format!("toast {}", kind.css_class())
    };

    view! {
        <Show when=move || state.with(|s| s.toast.visible)>
            <div class=class role="status" on:click=move |_| state.update(|s| s.toast.dismiss())>
                {move || state.with(|s| s.toast.message.clone())}
            </div>
        </Show>
    }
}
