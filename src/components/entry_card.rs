//! List row for one vault entry.

use leptos::prelude::*;

use crate::net::types::Entry;
use crate::state::catalog::{entry_meta, entry_subtitle, entry_type};

/// A clickable card showing an entry's type icon, title, subtitle and meta
/// line. Entries of an unrecognised type render without an icon.
#[component]
pub fn EntryCard(entry: Entry, on_open: Callback<String>) -> impl IntoView {
    let info = entry.kind().map(entry_type);
    let subtitle = entry_subtitle(&entry);
    let meta = entry_meta(&entry);
    let id = entry.id.clone();
    let title = entry.title;

    let icon = info.map(|info| {
        view! {
            <span class=format!("entry-card__icon {} {}", info.bg_color, info.color)>
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true">
                    <path stroke-linecap="round" stroke-linejoin="round" d=info.icon_path></path>
                </svg>
            </span>
        }
    });

    let open = move |_| {
        if let Some(id) = id.clone() {
            on_open.run(id);
        }
    };

    view! {
        <button class="entry-card" on:click=open>
            {icon}
            <span class="entry-card__body">
                <span class="entry-card__title">{title}</span>
                <span class="entry-card__subtitle">{subtitle}</span>
            </span>
            <span class="entry-card__meta">{meta}</span>
        </button>
    }
}
