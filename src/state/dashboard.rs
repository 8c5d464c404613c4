//! Dashboard state: cached entry list, filters, entry modal, toast.
//!
//! SYSTEM CONTEXT
//! ==============
//! The entry list is a snapshot of the last successful `GET /api/entries` and
//! is never patched locally; every successful mutation asks for a reload.
//! Each network operation is split into `begin_*` (local checks, in-flight
//! guard, request construction) and `finish_*` (fold the result, return the
//! page's next step). A 401 from any dashboard call means the session is gone
//! and always yields a redirect to the login page.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use rand::{CryptoRng, Rng};

use super::catalog::SEARCH_FIELDS;
use super::followup::Followup;
use super::toast::{ToastKind, ToastState};
use crate::app::LOGIN_PATH;
use crate::net::api::SaveRequest;
use crate::net::error::ApiError;
use crate::net::types::{Entry, EntryKind};
use crate::util::password;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this entry? This cannot be undone.";
const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Type filter applied before search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryFilter {
    #[default]
    All,
    Kind(EntryKind),
}

impl EntryFilter {
    pub fn matches(self, entry: &Entry) -> bool {
        match self {
            EntryFilter::All => true,
            EntryFilter::Kind(kind) => entry.kind() == Some(kind),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    View,
    Edit,
}

/// The open entry modal and its form buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryModal {
    pub mode: ModalMode,
    pub form: Entry,
    pub show_password: bool,
    pub error: Option<String>,
}

impl EntryModal {
    fn new(mode: ModalMode, form: Entry) -> Self {
        Self { mode, form, show_password: false, error: None }
    }

    pub fn is_read_only(&self) -> bool {
        self.mode == ModalMode::View
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub entries: Vec<Entry>,
    /// List request in flight.
    pub loading: bool,
    /// A load was asked for while one was in flight; run another when it ends.
    pub reload_pending: bool,
    pub filter: EntryFilter,
    pub search_query: String,
    pub mobile_menu_open: bool,
    /// `None` when no modal is open.
    pub modal: Option<EntryModal>,
    /// Save request in flight.
    pub saving: bool,
    /// Delete request in flight.
    pub deleting: bool,
    pub toast: ToastState,
}

impl DashboardState {
    // =============================================================
    // Derived views
    // =============================================================

    /// Entries passing the type filter, then the search query.
    ///
    /// The query is applied only when it is non-blank after trimming, and is
    /// matched case-insensitively as a substring of any `SEARCH_FIELDS` value.
    pub fn filtered_entries(&self) -> Vec<&Entry> {
        let query = (!self.search_query.trim().is_empty()).then(|| self.search_query.to_lowercase());
        self.entries
            .iter()
            .filter(|entry| self.filter.matches(entry))
            .filter(|entry| query.as_deref().is_none_or(|q| matches_query(entry, q)))
            .collect()
    }

    /// Number of cached entries of `kind`.
    pub fn count_of(&self, kind: EntryKind) -> usize {
        self.entries.iter().filter(|e| e.kind() == Some(kind)).count()
    }

    pub fn set_filter(&mut self, filter: EntryFilter) {
        self.filter = filter;
        self.mobile_menu_open = false;
    }

    // =============================================================
    // Entry list
    // =============================================================

    /// Mark the list as loading. Returns `false` if a load is already
    /// running; that load's `finish_load` then asks for a fresh one, since its
    /// response may predate the change that wanted the reload.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            self.reload_pending = true;
            return false;
        }
        self.loading = true;
        true
    }

    pub fn finish_load(&mut self, result: Result<Vec<Entry>, ApiError>) -> Followup {
        self.loading = false;
        let next = if std::mem::take(&mut self.reload_pending) { Followup::Reload } else { Followup::Stay };
        match result {
            Ok(entries) => {
                self.entries = entries;
                next
            }
            Err(e) if e.is_unauthorized() => Followup::Redirect(LOGIN_PATH),
            Err(_) => {
                self.show_toast("Failed to load entries", ToastKind::Error);
                next
            }
        }
    }

    // =============================================================
    // Modal
    // =============================================================

    /// Open the create modal with a blank entry of `kind`.
    pub fn open_modal(&mut self, kind: EntryKind) {
        self.modal = Some(EntryModal::new(ModalMode::Create, Entry::blank(kind)));
        self.mobile_menu_open = false;
    }

    /// Fold the result of `GET /api/entries/{id}` into a view modal.
    pub fn finish_view(&mut self, result: Result<Entry, ApiError>) -> Followup {
        match result {
            Ok(entry) => {
                self.modal = Some(EntryModal::new(ModalMode::View, entry));
                Followup::Stay
            }
            Err(e) if e.is_unauthorized() => Followup::Redirect(LOGIN_PATH),
            Err(e) => {
                let message = e.server_message().unwrap_or("Failed to load entry").to_owned();
                self.show_toast(message, ToastKind::Error);
                Followup::Stay
            }
        }
    }

    /// Switch an open view modal into edit mode.
    pub fn start_edit(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            if modal.mode == ModalMode::View && modal.form.id.is_some() {
                modal.mode = ModalMode::Edit;
                modal.error = None;
            }
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Set one form field. Ignored when no modal is open or it is read-only.
    pub fn set_form_field(&mut self, key: &str, value: String) {
        if let Some(modal) = self.modal.as_mut() {
            if !modal.is_read_only() {
                modal.form.set_field(key, value);
            }
        }
    }

    pub fn toggle_show_password(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            modal.show_password = !modal.show_password;
        }
    }

    /// Fill the form's `password` field with a fresh random password and
    /// reveal it. Returns `false` if the type has no password field.
    pub fn generate_password<R: Rng + CryptoRng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(modal) = self.modal.as_mut() else {
            return false;
        };
        if modal.is_read_only() || modal.form.field("password").is_none() {
            return false;
        }
        modal.form.set_field("password", password::generate_password(rng));
        modal.show_password = true;
        true
    }

    // =============================================================
    // Save
    // =============================================================

    /// Validate the form and build the save request.
    ///
    /// Returns `None` with nothing sent when there is no editable modal, a
    /// save is already in flight, or the title is blank (which also sets the
    /// inline error).
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        if self.saving {
            return None;
        }
        let modal = self.modal.as_mut()?;
        modal.error = None;

        if modal.form.title.trim().is_empty() {
            modal.error = Some("Title is required".to_owned());
            return None;
        }

        let request = match (modal.mode, modal.form.id.clone()) {
            (ModalMode::Create, _) => SaveRequest::Create(modal.form.clone()),
            (ModalMode::Edit, Some(id)) => SaveRequest::Update { id, entry: modal.form.clone() },
            (ModalMode::Edit, None) | (ModalMode::View, _) => return None,
        };
        self.saving = true;
        Some(request)
    }

    pub fn finish_save(&mut self, was_update: bool, result: Result<Option<Entry>, ApiError>) -> Followup {
        self.saving = false;
        match result {
            Ok(_) => {
                let message = if was_update { "Entry updated!" } else { "Entry created!" };
                self.show_toast(message, ToastKind::Success);
                self.close_modal();
                Followup::Reload
            }
            Err(e) if e.is_unauthorized() => Followup::Redirect(LOGIN_PATH),
            Err(e) => {
                let message = if e.is_transport() {
                    NETWORK_ERROR
                } else {
                    e.server_message().unwrap_or("Failed to save")
                };
                if let Some(modal) = self.modal.as_mut() {
                    modal.error = Some(message.to_owned());
                }
                Followup::Stay
            }
        }
    }

    // =============================================================
    // Delete
    // =============================================================

    /// Return the id to delete, or `None` (nothing sent) if the user did not
    /// confirm, the open entry has no id, or a delete is already in flight.
    pub fn begin_delete(&mut self, confirmed: bool) -> Option<String> {
        if !confirmed || self.deleting {
            return None;
        }
        let id = self.modal.as_ref()?.form.id.clone()?;
        self.deleting = true;
        Some(id)
    }

    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Followup {
        self.deleting = false;
        match result {
            Ok(()) => {
                self.show_toast("Entry deleted!", ToastKind::Success);
                self.close_modal();
                Followup::Reload
            }
            Err(e) if e.is_unauthorized() => Followup::Redirect(LOGIN_PATH),
            Err(e) if e.is_transport() => {
                self.show_toast("Network error", ToastKind::Error);
                Followup::Stay
            }
            Err(e) => {
                let message = e.server_message().unwrap_or("Failed to delete").to_owned();
                self.show_toast(message, ToastKind::Error);
                Followup::Stay
            }
        }
    }

    // =============================================================
    // Toast / clipboard
    // =============================================================

    pub fn show_toast(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.toast.show(message, kind)
    }

    pub fn finish_copy(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => self.show_toast("Copied to clipboard!", ToastKind::Success),
            Err(_) => self.show_toast("Failed to copy", ToastKind::Error),
        };
    }
}

/// Whether a copy request should reach the clipboard at all.
pub fn should_copy(text: &str) -> bool {
    !text.is_empty()
}

fn matches_query(entry: &Entry, query_lower: &str) -> bool {
    SEARCH_FIELDS.iter().any(|key| {
        entry
            .field(key)
            .is_some_and(|value| !value.is_empty() && value.to_lowercase().contains(query_lower))
    })
}
