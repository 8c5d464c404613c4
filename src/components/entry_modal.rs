//! Create / view / edit dialog for a single entry.
//!
//! The form is generated from `catalog::form_fields` for the entry's type,
//! framed by the title and notes fields every type shares. All edits go
//! straight into `DashboardState::modal`; network actions are delegated to
//! the page through callbacks.

use leptos::prelude::*;

use crate::net::types::EntryKind;
use crate::state::catalog::{FieldInput, FieldSpec, entry_type, form_fields};
use crate::state::dashboard::{DashboardState, EntryModal as ModalState, ModalMode};

const TITLE_FIELD: FieldSpec = FieldSpec { key: "title", label: "Title", input: FieldInput::Text, section: None };
const NOTES_FIELD: FieldSpec = FieldSpec { key: "notes", label: "Notes", input: FieldInput::Block, section: None };
const MASK: &str = "••••••••";

/// Entry dialog. Renders nothing while no modal is open.
#[component]
pub fn EntryModal(
    on_save: Callback<()>,
    on_delete: Callback<()>,
    on_copy: Callback<String>,
    on_generate: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    // Memos so typing into the form does not rebuild the field list.
    let kind = Memo::new(move |_| state.with(|s| s.modal.as_ref().and_then(|m| m.form.kind())));
    let mode = Memo::new(move |_| state.with(|s| s.modal.as_ref().map(|m| m.mode)));
    let is_open = move || mode.get().is_some();

    let close = move || state.update(DashboardState::close_modal);

    let heading = move || match (mode.get(), kind.get()) {
        (Some(ModalMode::Create), Some(kind)) => format!("New {}", singular(kind)),
        (Some(ModalMode::Edit), _) => "Edit Entry".to_owned(),
        _ => state.with(|s| s.modal.as_ref().map(|m| m.form.title.clone()).unwrap_or_default()),
    };

    let fields = move || {
        kind.get().map(|kind| {
            let mut last_section = None;
            form_fields(kind)
                .iter()
                .map(|spec| {
                    let section_heading = spec.section.filter(|_| spec.section != last_section);
                    last_section = spec.section;
                    view! {
                        {section_heading.map(|s| view! { <h3 class="entry-modal__section">{s}</h3> })}
                        <FieldRow spec=*spec on_copy=on_copy on_generate=on_generate/>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    let error = move || state.with(|s| s.modal.as_ref().and_then(|m| m.error.clone()));
    let saving = move || state.with(|s| s.saving);
    let deleting = move || state.with(|s| s.deleting);

    view! {
        <Show when=is_open>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class="dialog entry-modal"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close();
                        }
                    }
                >
                    <header class="entry-modal__header">
                        {move || kind.get().map(|kind| view! { <EntryTypeBadge kind=kind/> })}
                        <h2>{heading}</h2>
                        <button class="btn btn--icon" title="Close" on:click=move |_| close()>
                            "×"
                        </button>
                    </header>

                    <form
                        class="entry-modal__form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            on_save.run(());
                        }
                    >
                        <FieldRow spec=TITLE_FIELD on_copy=on_copy on_generate=on_generate/>
                        {fields}
                        <FieldRow spec=NOTES_FIELD on_copy=on_copy on_generate=on_generate/>

                        {move || error().map(|message| view! { <p class="entry-modal__error">{message}</p> })}

                        <div class="dialog__actions">
                            {move || match mode.get() {
                                Some(ModalMode::View) => {
                                    view! {
                                        <button
                                            type="button"
                                            class="btn btn--danger"
                                            disabled=deleting
                                            on:click=move |_| on_delete.run(())
                                        >
                                            {move || if deleting() { "Deleting..." } else { "Delete" }}
                                        </button>
                                        <button
                                            type="button"
                                            class="btn btn--primary"
                                            on:click=move |_| state.update(DashboardState::start_edit)
                                        >
                                            "Edit"
                                        </button>
                                    }
                                        .into_any()
                                }
                                _ => {
                                    view! {
                                        <button type="button" class="btn" on:click=move |_| close()>
                                            "Cancel"
                                        </button>
                                        <button type="submit" class="btn btn--primary" disabled=saving>
                                            {move || if saving() { "Saving..." } else { "Save" }}
                                        </button>
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

/// One labelled field. Read-only in view mode, an input otherwise.
#[component]
fn FieldRow(spec: FieldSpec, on_copy: Callback<String>, on_generate: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let key = spec.key;

    let read_only = Memo::new(move |_| state.with(|s| s.modal.as_ref().is_some_and(ModalState::is_read_only)));
    let revealed = Memo::new(move |_| state.with(|s| s.modal.as_ref().is_some_and(|m| m.show_password)));
    let value = move || {
        state.with(|s| s.modal.as_ref().and_then(|m| m.form.field(key)).unwrap_or_default().to_owned())
    };

    let set_value = move |raw: String| state.update(|s| s.set_form_field(key, raw));
    let toggle = move |_: leptos::ev::MouseEvent| state.update(DashboardState::toggle_show_password);
    let can_generate = key == "password";

    let reveal_button = move || {
        spec.input.is_secret().then(|| {
            view! {
                <button type="button" class="btn btn--icon" title="Show or hide" on:click=toggle>
                    {move || if revealed.get() { "Hide" } else { "Show" }}
                </button>
            }
        })
    };

    view! {
        <div class="entry-modal__field">
            <label class="dialog__label" for=key>
                {spec.label}
            </label>
            {move || {
                if read_only.get() {
                    let shown = move || {
                        if spec.input.is_secret() && !revealed.get() && !value().is_empty() {
                            MASK.to_owned()
                        } else {
                            value()
                        }
                    };
                    let class = if spec.input.is_multiline() {
                        "entry-modal__value entry-modal__value--block"
                    } else {
                        "entry-modal__value"
                    };
                    view! {
                        <div class="entry-modal__row">
                            <span class=class>{shown}</span>
                            {reveal_button()}
                            <Show when=move || !value().is_empty()>
                                <button
                                    type="button"
                                    class="btn btn--icon"
                                    title="Copy"
                                    on:click=move |_| on_copy.run(value())
                                >
                                    "Copy"
                                </button>
                            </Show>
                        </div>
                    }
                        .into_any()
                } else if spec.input.is_multiline() {
                    let class = if spec.input.is_secret() {
                        "dialog__input dialog__input--mono"
                    } else {
                        "dialog__input"
                    };
                    view! {
                        <textarea
                            id=key
                            class=class
                            rows="4"
                            prop:value=value
                            on:input=move |ev| set_value(event_target_value(&ev))
                        ></textarea>
                    }
                        .into_any()
                } else {
                    let input_type = move || {
                        if spec.input.is_secret() && revealed.get() { "text" } else { spec.input.html_type() }
                    };
                    view! {
                        <div class="entry-modal__row">
                            <input
                                id=key
                                class="dialog__input"
                                type=input_type
                                autocomplete="off"
                                prop:value=value
                                on:input=move |ev| set_value(event_target_value(&ev))
                            />
                            {reveal_button()}
                            {can_generate
                                .then(|| {
                                    view! {
                                        <button
                                            type="button"
                                            class="btn btn--icon"
                                            title="Generate password"
                                            on:click=move |_| on_generate.run(())
                                        >
                                            "Generate"
                                        </button>
                                    }
                                })}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

fn singular(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Login => "Login",
        EntryKind::Note => "Secure Note",
        EntryKind::CreditCard => "Credit Card",
        EntryKind::Identity => "Identity",
        EntryKind::ApiCredential => "API Credential",
        EntryKind::Database => "Database",
        EntryKind::Server => "Server",
        EntryKind::SoftwareLicense => "Software License",
        EntryKind::SshKey => "SSH Key",
        EntryKind::Wifi => "WiFi Network",
        EntryKind::BankAccount => "Bank Account",
    }
}

/// Type badge shown next to the dialog heading.
#[component]
fn EntryTypeBadge(kind: EntryKind) -> impl IntoView {
    let info = entry_type(kind);
    view! { <span class=format!("entry-type-badge {} {}", info.bg_color, info.color)>{singular(kind)}</span> }
}
