use super::*;

fn with_passwords(master: &str, confirm: &str) -> AuthState {
    AuthState {
        master_password: master.to_owned(),
        confirm_password: confirm.to_owned(),
        ..AuthState::new(true)
    }
}

// =============================================================
// Strength feedback
// =============================================================

#[test]
fn strength_tracks_master_password() {
    let mut state = AuthState::default();
    assert_eq!(state.strength(), 0);
    assert_eq!(state.strength_text(), "");

    state.master_password = "Correct-Horse-9".to_owned();
    assert_eq!(state.strength(), 4);
    assert_eq!(state.strength_text(), "Strong");
    assert_eq!(state.strength_color(), "bg-vault-500");
}

#[test]
fn toggle_setup_clears_confirmation_and_error() {
    let mut state = with_passwords("abc", "abd");
    state.error = Some("Passwords do not match".to_owned());
    state.toggle_setup();
    assert!(!state.show_setup);
    assert!(state.confirm_password.is_empty());
    assert_eq!(state.error, None);
}

// =============================================================
// Login
// =============================================================

#[test]
fn begin_login_sets_loading_and_builds_request() {
    let mut state = with_passwords("secret-pass", "");
    state.error = Some("old".to_owned());
    let request = state.begin_login().unwrap();
    assert_eq!(request.master_password, "secret-pass");
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn begin_login_refuses_while_in_flight() {
    let mut state = with_passwords("secret-pass", "");
    assert!(state.begin_login().is_some());
    assert!(state.begin_login().is_none());
}

#[test]
fn login_success_redirects_to_dashboard() {
    let mut state = with_passwords("secret-pass", "");
    state.begin_login();
    assert_eq!(state.finish(AuthFlow::Login, Ok(())), Followup::Redirect("/dashboard"));
    assert!(!state.loading);
}

#[test]
fn login_rejection_shows_server_message() {
    let mut state = with_passwords("wrong", "");
    state.begin_login();
    let next = state.finish(AuthFlow::Login, Err(ApiError::from_status(401, Some("Invalid master password".to_owned()))));
    assert_eq!(next, Followup::Stay);
    assert_eq!(state.error.as_deref(), Some("Invalid master password"));
    assert!(!state.loading);
}

#[test]
fn login_failure_without_message_uses_generic() {
    let mut state = with_passwords("x", "");
    state.begin_login();
    state.finish(AuthFlow::Login, Err(ApiError::from_status(500, None)));
    assert_eq!(state.error.as_deref(), Some("Login failed"));
}

#[test]
fn login_network_failure_uses_network_message() {
    let mut state = with_passwords("x", "");
    state.begin_login();
    state.finish(AuthFlow::Login, Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.error.as_deref(), Some(NETWORK_ERROR));

    state.begin_login();
    state.finish(AuthFlow::Login, Err(ApiError::Timeout));
    assert_eq!(state.error.as_deref(), Some(NETWORK_ERROR));
    assert!(!state.loading);
}

// =============================================================
// Setup
// =============================================================

#[test]
fn setup_rejects_mismatch_without_request() {
    let mut state = with_passwords("long-enough-1", "long-enough-2");
    assert!(state.begin_setup().is_none());
    assert_eq!(state.error.as_deref(), Some("Passwords do not match"));
    assert!(!state.loading);
}

#[test]
fn setup_rejects_short_password_without_request() {
    let mut state = with_passwords("short", "short");
    assert!(state.begin_setup().is_none());
    assert_eq!(state.error.as_deref(), Some("Password must be at least 8 characters"));
    assert!(!state.loading);
}

#[test]
fn setup_checks_mismatch_before_length() {
    let mut state = with_passwords("a", "b");
    state.begin_setup();
    assert_eq!(state.error.as_deref(), Some("Passwords do not match"));
}

#[test]
fn setup_builds_request_when_valid() {
    let mut state = with_passwords("long-enough", "long-enough");
    let request = state.begin_setup().unwrap();
    assert_eq!(request.master_password, "long-enough");
    assert_eq!(request.confirm_password, "long-enough");
    assert!(state.loading);
}

#[test]
fn setup_failure_without_message_uses_setup_generic() {
    let mut state = with_passwords("long-enough", "long-enough");
    state.begin_setup();
    state.finish(AuthFlow::Setup, Err(ApiError::from_status(400, None)));
    assert_eq!(state.error.as_deref(), Some("Setup failed"));
}

#[test]
fn setup_server_error_is_shown() {
    let mut state = with_passwords("long-enough", "long-enough");
    state.begin_setup();
    state.finish(AuthFlow::Setup, Err(ApiError::from_status(400, Some("Vault already exists".to_owned()))));
    assert_eq!(state.error.as_deref(), Some("Vault already exists"));
}
