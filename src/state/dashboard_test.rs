use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn entry(json: serde_json::Value) -> Entry {
    serde_json::from_value(json).unwrap()
}

fn sample_entries() -> Vec<Entry> {
    vec![
        entry(serde_json::json!({ "id": "1", "type": "login", "title": "Router", "username": "admin", "url": "http://192.168.0.1" })),
        entry(serde_json::json!({ "id": "2", "type": "wifi", "title": "Home", "ssid": "HomeNet", "security_type": "WPA2" })),
        entry(serde_json::json!({ "id": "3", "type": "login", "title": "Mail", "username": "me", "url": "https://mail.example.com" })),
        entry(serde_json::json!({ "id": "4", "type": "note", "title": "Recovery codes", "preview": "admin codes" })),
        entry(serde_json::json!({ "id": "5", "type": "bank_account", "title": "Checking", "bank_name": "First Bank" })),
    ]
}

fn loaded() -> DashboardState {
    DashboardState { entries: sample_entries(), ..DashboardState::default() }
}

fn ids(entries: &[&Entry]) -> Vec<String> {
    entries.iter().map(|e| e.id.clone().unwrap_or_default()).collect()
}

fn viewing(id: &str) -> DashboardState {
    let mut state = loaded();
    let mut form = Entry::blank(EntryKind::Login);
    form.id = Some(id.to_owned());
    form.title = "Router".to_owned();
    state.finish_view(Ok(form));
    state
}

fn unauthorized() -> ApiError {
    ApiError::from_status(401, Some("Unauthorized".to_owned()))
}

// =============================================================
// filtered_entries
// =============================================================

#[test]
fn all_filter_and_empty_query_returns_list_unchanged() {
    let state = loaded();
    assert_eq!(ids(&state.filtered_entries()), ["1", "2", "3", "4", "5"]);
}

#[test]
fn type_filter_keeps_only_that_type_in_order() {
    let mut state = loaded();
    state.set_filter(EntryFilter::Kind(EntryKind::Login));
    assert_eq!(ids(&state.filtered_entries()), ["1", "3"]);
}

#[test]
fn search_is_case_insensitive() {
    let mut state = loaded();
    state.search_query = "ADMIN".to_owned();
    assert_eq!(ids(&state.filtered_entries()), ["1"]);
}

#[test]
fn search_ignores_non_searchable_fields() {
    let mut state = loaded();
    state.search_query = "codes".to_owned();
    assert_eq!(ids(&state.filtered_entries()), ["4"]);

    state.search_query = "wpa2".to_owned();
    assert!(state.filtered_entries().is_empty());
}

#[test]
fn whitespace_query_does_not_filter() {
    let mut state = loaded();
    state.search_query = "   ".to_owned();
    assert_eq!(state.filtered_entries().len(), 5);
}

#[test]
fn filter_then_search_compose() {
    let mut state = loaded();
    state.set_filter(EntryFilter::Kind(EntryKind::Login));
    state.search_query = "mail".to_owned();
    assert_eq!(ids(&state.filtered_entries()), ["3"]);
}

#[test]
fn search_matches_across_types() {
    let mut state = loaded();
    state.search_query = "home".to_owned();
    assert_eq!(ids(&state.filtered_entries()), ["2"]);

    state.search_query = "first".to_owned();
    assert_eq!(ids(&state.filtered_entries()), ["5"]);
}

#[test]
fn count_of_counts_per_type() {
    let state = loaded();
    assert_eq!(state.count_of(EntryKind::Login), 2);
    assert_eq!(state.count_of(EntryKind::Wifi), 1);
    assert_eq!(state.count_of(EntryKind::SshKey), 0);
}

#[test]
fn set_filter_closes_mobile_menu() {
    let mut state = DashboardState { mobile_menu_open: true, ..DashboardState::default() };
    state.set_filter(EntryFilter::All);
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Load
// =============================================================

#[test]
fn begin_load_guards_concurrent_loads() {
    let mut state = DashboardState::default();
    assert!(state.begin_load());
    assert!(!state.begin_load());
}

#[test]
fn finish_load_replaces_entries() {
    let mut state = DashboardState::default();
    state.begin_load();
    assert_eq!(state.finish_load(Ok(sample_entries())), Followup::Stay);
    assert_eq!(state.entries.len(), 5);
    assert!(!state.loading);
}

#[test]
fn reload_requested_during_load_runs_after_it() {
    let mut state = DashboardState::default();
    assert!(state.begin_load());

    state.open_modal(EntryKind::Note);
    state.set_form_field("title", "Memo".to_owned());
    state.begin_save().unwrap();
    assert_eq!(state.finish_save(false, Ok(None)), Followup::Reload);
    assert!(!state.begin_load());

    // The response to the older request arrives without the new entry.
    assert_eq!(state.finish_load(Ok(vec![])), Followup::Reload);
    assert!(!state.reload_pending);

    assert!(state.begin_load());
    assert_eq!(state.finish_load(Ok(sample_entries())), Followup::Stay);
    assert_eq!(state.entries.len(), 5);
}

#[test]
fn pending_reload_survives_failed_load() {
    let mut state = DashboardState::default();
    state.begin_load();
    state.begin_load();
    assert_eq!(state.finish_load(Err(ApiError::Timeout)), Followup::Reload);
    assert_eq!(state.toast.message, "Failed to load entries");
}

#[test]
fn finish_load_failure_keeps_entries_and_toasts() {
    let mut state = loaded();
    state.begin_load();
    state.finish_load(Err(ApiError::Decode("bad json".to_owned())));
    assert_eq!(state.entries.len(), 5);
    assert!(state.toast.visible);
    assert_eq!(state.toast.message, "Failed to load entries");
    assert_eq!(state.toast.kind, ToastKind::Error);
    assert!(!state.loading);
}

// =============================================================
// 401 handling
// =============================================================

#[test]
fn every_operation_redirects_on_401() {
    let login = Followup::Redirect("/");

    let mut state = loaded();
    assert_eq!(state.finish_load(Err(unauthorized())), login);

    let mut state = loaded();
    assert_eq!(state.finish_view(Err(unauthorized())), login);

    let mut state = viewing("1");
    state.start_edit();
    state.begin_save().unwrap();
    assert_eq!(state.finish_save(true, Err(unauthorized())), login);
    assert!(!state.saving);

    let mut state = viewing("1");
    state.begin_delete(true).unwrap();
    assert_eq!(state.finish_delete(Err(unauthorized())), login);
    assert!(!state.deleting);
}

// =============================================================
// Modal
// =============================================================

#[test]
fn open_modal_for_wifi_has_blank_wifi_fields() {
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Wifi);
    let modal = state.modal.as_ref().unwrap();
    assert_eq!(modal.mode, ModalMode::Create);
    assert_eq!(modal.form.field("ssid"), Some(""));
    assert_eq!(modal.form.field("security_type"), Some(""));
    assert_eq!(modal.form.field("card_number"), None);
    assert!(!modal.show_password);
    assert_eq!(modal.error, None);
}

#[test]
fn finish_view_opens_read_only_modal() {
    let state = viewing("1");
    let modal = state.modal.as_ref().unwrap();
    assert_eq!(modal.mode, ModalMode::View);
    assert!(modal.is_read_only());
    assert_eq!(modal.form.id.as_deref(), Some("1"));
}

#[test]
fn finish_view_failure_toasts_server_message() {
    let mut state = loaded();
    state.finish_view(Err(ApiError::from_status(404, Some("Entry not found".to_owned()))));
    assert!(state.modal.is_none());
    assert_eq!(state.toast.message, "Entry not found");

    state.finish_view(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.toast.message, "Failed to load entry");
}

#[test]
fn view_mode_ignores_field_edits() {
    let mut state = viewing("1");
    state.set_form_field("username", "changed".to_owned());
    assert_eq!(state.modal.as_ref().unwrap().form.field("username"), Some(""));

    state.start_edit();
    state.set_form_field("username", "changed".to_owned());
    assert_eq!(state.modal.as_ref().unwrap().form.field("username"), Some("changed"));
}

#[test]
fn close_modal_drops_form() {
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Login);
    state.close_modal();
    assert!(state.modal.is_none());
}

// =============================================================
// Save
// =============================================================

#[test]
fn blank_title_never_builds_request() {
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Login);
    state.set_form_field("title", "   ".to_owned());

    assert!(state.begin_save().is_none());
    assert!(!state.saving);
    assert_eq!(state.modal.as_ref().unwrap().error.as_deref(), Some("Title is required"));
}

#[test]
fn create_mode_builds_post_request() {
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Login);
    state.set_form_field("title", "Router".to_owned());
    state.set_form_field("username", "admin".to_owned());

    let request = state.begin_save().unwrap();
    assert!(!request.is_update());
    assert_eq!(request.entry().field("username"), Some("admin"));
    assert!(state.saving);
}

#[test]
fn edit_mode_builds_put_request_for_entry_id() {
    let mut state = viewing("42");
    state.start_edit();
    let request = state.begin_save().unwrap();
    assert_eq!(request, SaveRequest::Update { id: "42".to_owned(), entry: state.modal.as_ref().unwrap().form.clone() });
}

#[test]
fn view_mode_cannot_save() {
    let mut state = viewing("1");
    assert!(state.begin_save().is_none());
    assert!(!state.saving);
}

#[test]
fn saving_guard_blocks_double_submit() {
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Note);
    state.set_form_field("title", "Memo".to_owned());
    assert!(state.begin_save().is_some());
    assert!(state.begin_save().is_none());
}

#[test]
fn save_success_toasts_closes_and_reloads() {
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Note);
    state.set_form_field("title", "Memo".to_owned());
    state.begin_save();

    assert_eq!(state.finish_save(false, Ok(None)), Followup::Reload);
    assert_eq!(state.toast.message, "Entry created!");
    assert!(state.modal.is_none());
    assert!(!state.saving);
}

#[test]
fn update_success_uses_update_wording() {
    let mut state = viewing("1");
    state.start_edit();
    state.begin_save();
    state.finish_save(true, Ok(None));
    assert_eq!(state.toast.message, "Entry updated!");
}

#[test]
fn save_server_error_stays_inline() {
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Login);
    state.set_form_field("title", "Router".to_owned());
    state.begin_save();

    let next = state.finish_save(false, Err(ApiError::from_status(400, Some("Invalid entry type".to_owned()))));
    assert_eq!(next, Followup::Stay);
    let modal = state.modal.as_ref().unwrap();
    assert_eq!(modal.error.as_deref(), Some("Invalid entry type"));
    assert!(!state.saving);
}

#[test]
fn save_error_fallbacks() {
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Login);
    state.set_form_field("title", "Router".to_owned());

    state.begin_save();
    state.finish_save(false, Err(ApiError::from_status(500, None)));
    assert_eq!(state.modal.as_ref().unwrap().error.as_deref(), Some("Failed to save"));

    state.begin_save();
    state.finish_save(false, Err(ApiError::Timeout));
    assert_eq!(state.modal.as_ref().unwrap().error.as_deref(), Some("Network error. Please try again."));
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_without_confirmation_sends_nothing() {
    let mut state = viewing("1");
    let before = state.entries.clone();
    assert!(state.begin_delete(false).is_none());
    assert!(!state.deleting);
    assert_eq!(state.entries, before);
    assert!(state.modal.is_some());
}

#[test]
fn delete_requires_saved_entry() {
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Login);
    assert!(state.begin_delete(true).is_none());
}

#[test]
fn delete_success_toasts_closes_and_reloads() {
    let mut state = viewing("7");
    assert_eq!(state.begin_delete(true).as_deref(), Some("7"));
    assert!(state.begin_delete(true).is_none());

    assert_eq!(state.finish_delete(Ok(())), Followup::Reload);
    assert_eq!(state.toast.message, "Entry deleted!");
    assert!(state.modal.is_none());
}

#[test]
fn delete_failures_toast() {
    let mut state = viewing("7");
    state.begin_delete(true);
    state.finish_delete(Err(ApiError::from_status(404, None)));
    assert_eq!(state.toast.message, "Failed to delete");
    assert_eq!(state.toast.kind, ToastKind::Error);

    state.begin_delete(true);
    state.finish_delete(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.toast.message, "Network error");
    assert!(state.modal.is_some());
}

// =============================================================
// Password generator / clipboard
// =============================================================

#[test]
fn generate_password_fills_and_reveals() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Wifi);

    assert!(state.generate_password(&mut rng));
    let modal = state.modal.as_ref().unwrap();
    let generated = modal.form.field("password").unwrap();
    assert_eq!(generated.len(), password::GENERATED_LEN);
    assert!(generated.bytes().all(|b| password::PASSWORD_ALPHABET.contains(&b)));
    assert!(modal.show_password);
}

#[test]
fn generate_password_skips_types_without_password() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut state = DashboardState::default();
    state.open_modal(EntryKind::Note);
    assert!(!state.generate_password(&mut rng));
    assert!(!state.modal.as_ref().unwrap().show_password);
}

#[test]
fn copy_outcomes_toast() {
    let mut state = DashboardState::default();
    state.finish_copy(Ok(()));
    assert_eq!(state.toast.message, "Copied to clipboard!");
    state.finish_copy(Err("denied".to_owned()));
    assert_eq!(state.toast.message, "Failed to copy");
    assert_eq!(state.toast.kind, ToastKind::Error);
}

#[test]
fn empty_text_is_not_copied() {
    assert!(!should_copy(""));
    assert!(should_copy("hunter2"));
}
