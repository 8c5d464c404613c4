//! Vault dashboard: entry list, filters, search, entry dialog.
//!
//! SYSTEM CONTEXT
//! ==============
//! All state lives in one `RwSignal<DashboardState>` provided as context to
//! the child components. Handlers here only sequence requests: they call a
//! `begin_*` transition, await the API, drop the result if the page has been
//! torn down, then call the matching `finish_*` and act on its `Followup`.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::entry_card::EntryCard;
use crate::components::entry_modal::EntryModal;
use crate::components::toast::Toast;
use crate::components::type_sidebar::TypeSidebar;
use crate::config::ClientConfig;
#[cfg(feature = "hydrate")]
use crate::net::api::ApiClient;
use crate::net::types::{Entry, EntryKind};
use crate::state::dashboard::{DELETE_CONFIRM_MESSAGE, DashboardState, should_copy};
#[cfg(feature = "hydrate")]
use crate::state::followup::Followup;
use crate::util::browser;
#[cfg(feature = "hydrate")]
use crate::util::task::Liveness;

/// Everything a spawned request needs to report back.
#[derive(Clone)]
struct PageHandle {
    #[cfg(feature = "hydrate")]
    api: ApiClient,
    state: RwSignal<DashboardState>,
    #[cfg(feature = "hydrate")]
    alive: Liveness,
}

#[cfg(feature = "hydrate")]
impl PageHandle {
    /// Apply a `finish_*` transition unless the page is gone, then follow up.
    fn finish(&self, apply: impl FnOnce(&mut DashboardState) -> Followup) {
        if !self.alive.is_alive() {
            log::debug!("dashboard result dropped after page teardown");
            return;
        }
        match self.state.try_update(apply) {
            Some(Followup::Reload) => load_entries(self.clone()),
            Some(Followup::Redirect(path)) => browser::redirect(path),
            Some(Followup::Stay) | None => {}
        }
    }
}

fn load_entries(page: PageHandle) {
    if !page.state.try_update(DashboardState::begin_load).unwrap_or(false) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = page.api.list_entries().await;
        if let Err(e) = &result {
            log::warn!("list entries failed: {e}");
        }
        page.finish(|s| s.finish_load(result));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = page;
}

fn view_entry(page: PageHandle, id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = page.api.fetch_entry(&id).await;
        if let Err(e) = &result {
            log::warn!("fetch entry {id} failed: {e}");
        }
        page.finish(|s| s.finish_view(result));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (page, id);
}

fn save_entry(page: PageHandle) {
    let Some(request) = page.state.try_update(DashboardState::begin_save).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let was_update = request.is_update();
        let result = page.api.save_entry(&request).await;
        if let Err(e) = &result {
            log::warn!("save entry failed: {e}");
        }
        page.finish(|s| s.finish_save(was_update, result));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (page, request);
}

fn delete_entry(page: PageHandle) {
    // Ask only when there is something to delete.
    if page.state.with_untracked(|s| s.deleting || s.modal.as_ref().is_none_or(|m| m.form.id.is_none())) {
        return;
    }
    let confirmed = browser::confirm(DELETE_CONFIRM_MESSAGE);
    let Some(id) = page.state.try_update(|s| s.begin_delete(confirmed)).flatten() else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = page.api.delete_entry(&id).await;
        if let Err(e) = &result {
            log::warn!("delete entry {id} failed: {e}");
        }
        page.finish(|s| s.finish_delete(result));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (page, id);
}

fn copy_to_clipboard(page: PageHandle, text: String) {
    if !should_copy(&text) {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = browser::copy_text(&text).await;
        if let Err(e) = &result {
            log::warn!("clipboard write failed: {e}");
        }
        page.finish(|s| {
            s.finish_copy(result);
            Followup::Stay
        });
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (page, text);
}

fn logout(page: PageHandle) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        page.api.logout().await;
        browser::redirect(crate::app::LOGIN_PATH);
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = page;
}

/// Hide the toast `duration` after it was shown, unless a newer one replaced it.
fn schedule_toast_expiry(page: &PageHandle, seq: u64, duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        let page = page.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(duration).await;
            if page.alive.is_alive() {
                page.state.try_update(|s| s.toast.expire(seq));
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (page, seq, duration);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let state = RwSignal::new(DashboardState::default());
    provide_context(state);

    let page = PageHandle {
        #[cfg(feature = "hydrate")]
        api: expect_context::<ApiClient>(),
        state,
        #[cfg(feature = "hydrate")]
        alive: Liveness::for_current_owner(),
    };
    let page = StoredValue::new(page);

    // Initial load runs once, in the browser.
    Effect::new(move |_| load_entries(page.get_value()));

    // One timer per shown toast; `expire` ignores timers for replaced toasts.
    let toast_duration = config.toast_duration;
    let toast_slot = Memo::new(move |_| state.with(|s| (s.toast.visible, s.toast.seq)));
    Effect::new(move |_| {
        let (visible, seq) = toast_slot.get();
        if visible {
            schedule_toast_expiry(&page.get_value(), seq, toast_duration);
        }
    });

    let on_open = Callback::new(move |id: String| view_entry(page.get_value(), id));
    let on_new = Callback::new(move |kind: EntryKind| state.update(|s| s.open_modal(kind)));
    let on_save = Callback::new(move |()| save_entry(page.get_value()));
    let on_delete = Callback::new(move |()| delete_entry(page.get_value()));
    let on_copy = Callback::new(move |text: String| copy_to_clipboard(page.get_value(), text));
    let on_generate = Callback::new(move |()| {
        state.update(|s| {
            s.generate_password(&mut rand::rng());
        });
    });

    // Memos so form and search keystrokes only re-render the list when the
    // visible entries actually change.
    let entries = Memo::new(move |_| {
        state.with(|s| s.filtered_entries().into_iter().cloned().collect::<Vec<Entry>>())
    });
    let has_any = Memo::new(move |_| state.with(|s| !s.entries.is_empty()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <button
                    class="btn btn--icon dashboard-page__menu"
                    title="Menu"
                    on:click=move |_| state.update(|s| s.mobile_menu_open = !s.mobile_menu_open)
                >
                    "☰"
                </button>
                <h1>"Vault"</h1>
                <input
                    class="dashboard-page__search"
                    type="search"
                    placeholder="Search entries..."
                    prop:value=move || state.with(|s| s.search_query.clone())
                    on:input=move |ev| state.update(|s| s.search_query = event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| logout(page.get_value())>
                    "Lock"
                </button>
            </header>

            <div class="dashboard-page__body">
                <TypeSidebar on_new=on_new/>

                <main class="dashboard-page__list">
                    {move || {
                        if loading.get() && !has_any.get() {
                            view! { <p class="dashboard-page__empty">"Loading entries..."</p> }.into_any()
                        } else {
                            let list = entries.get();
                            if list.is_empty() {
                                let message = if has_any.get() { "No matching entries." } else { "Your vault is empty." };
                                view! { <p class="dashboard-page__empty">{message}</p> }.into_any()
                            } else {
                                list.into_iter()
                                    .map(|entry| view! { <EntryCard entry=entry on_open=on_open/> })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }
                    }}
                </main>
            </div>

            <EntryModal on_save=on_save on_delete=on_delete on_copy=on_copy on_generate=on_generate/>
            <Toast/>
        </div>
    }
}
