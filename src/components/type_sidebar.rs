//! Filter sidebar: "All" plus one row per entry type with its count.

use leptos::prelude::*;

use crate::net::types::EntryKind;
use crate::state::catalog::ENTRY_TYPES;
use crate::state::dashboard::{DashboardState, EntryFilter};

/// Type filters and the "new entry" menu.
///
/// On narrow screens the sidebar is collapsed behind `mobile_menu_open`;
/// choosing a filter or a new entry type closes it again.
#[component]
pub fn TypeSidebar(on_new: Callback<EntryKind>) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    let sidebar_class = move || {
        if state.with(|s| s.mobile_menu_open) {
            "type-sidebar type-sidebar--open"
        } else {
            "type-sidebar"
        }
    };

    let filter_class = move |filter: EntryFilter| {
        if state.with(|s| s.filter == filter) {
            "type-sidebar__filter type-sidebar__filter--active"
        } else {
            "type-sidebar__filter"
        }
    };

    let show_new_menu = RwSignal::new(false);

    view! {
        <aside class=sidebar_class>
            <div class="type-sidebar__new">
                <button class="btn btn--primary" on:click=move |_| show_new_menu.update(|v| *v = !*v)>
                    "+ New Entry"
                </button>
                <Show when=move || show_new_menu.get()>
                    <div class="type-sidebar__new-menu">
                        {ENTRY_TYPES
                            .iter()
                            .map(|info| {
                                let kind = info.kind;
                                view! {
                                    <button
                                        class="type-sidebar__new-item"
                                        on:click=move |_| {
                                            show_new_menu.set(false);
                                            on_new.run(kind);
                                        }
                                    >
                                        {info.label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </Show>
            </div>

            <nav class="type-sidebar__filters">
                <button
                    class=move || filter_class(EntryFilter::All)
                    on:click=move |_| state.update(|s| s.set_filter(EntryFilter::All))
                >
                    <span>"All Items"</span>
                    <span class="type-sidebar__count">{move || state.with(|s| s.entries.len())}</span>
                </button>
                {ENTRY_TYPES
                    .iter()
                    .map(|info| {
                        let filter = EntryFilter::Kind(info.kind);
                        view! {
                            <button
                                class=move || filter_class(filter)
                                on:click=move |_| state.update(|s| s.set_filter(filter))
                            >
                                <svg
                                    class=format!("type-sidebar__icon {}", info.color)
                                    viewBox="0 0 24 24"
                                    fill="none"
                                    stroke="currentColor"
                                    stroke-width="2"
                                    aria-hidden="true"
                                >
                                    <path stroke-linecap="round" stroke-linejoin="round" d=info.icon_path></path>
                                </svg>
                                <span>{info.label}</span>
                                <span class="type-sidebar__count">{move || state.with(|s| s.count_of(info.kind))}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </aside>
    }
}
