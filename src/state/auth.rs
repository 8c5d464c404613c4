//! Login and first-time setup form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the auth page. `begin_*` validates locally and arms the in-flight
//! guard; the page performs the request and hands the result to `finish`,
//! which turns it into an inline message or a redirect to the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::followup::Followup;
use crate::app::DASHBOARD_PATH;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, SetupRequest};
use crate::util::password;

pub const NETWORK_ERROR: &str = "Network error. Please try again.";

/// Which form was submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthFlow {
    Login,
    Setup,
}

impl AuthFlow {
    fn fallback_error(self) -> &'static str {
        match self {
            AuthFlow::Login => "Login failed",
            AuthFlow::Setup => "Setup failed",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub master_password: String,
    pub confirm_password: String,
    pub show_password: bool,
    /// A login or setup request is in flight.
    pub loading: bool,
    pub error: Option<String>,
    /// Show the create-vault form instead of the unlock form.
    pub show_setup: bool,
}

impl AuthState {
    pub fn new(show_setup: bool) -> Self {
        Self { show_setup, ..Self::default() }
    }

    pub fn strength(&self) -> u8 {
        password::password_strength(&self.master_password)
    }

    pub fn strength_text(&self) -> &'static str {
        password::strength_text(self.strength())
    }

    pub fn strength_color(&self) -> &'static str {
        password::strength_color(self.strength())
    }

    /// Switch between the unlock and create-vault forms.
    pub fn toggle_setup(&mut self) {
        self.show_setup = !self.show_setup;
        self.confirm_password.clear();
        self.error = None;
    }

    /// Prepare a login request. `None` while another request is in flight.
    pub fn begin_login(&mut self) -> Option<LoginRequest> {
        if self.loading {
            return None;
        }
        self.error = None;
        self.loading = true;
        Some(LoginRequest { master_password: self.master_password.clone() })
    }

    /// Validate and prepare a setup request. Validation failures set an
    /// inline error and return `None`; nothing is sent.
    pub fn begin_setup(&mut self) -> Option<SetupRequest> {
        if self.loading {
            return None;
        }
        self.error = None;

        if self.master_password != self.confirm_password {
            self.error = Some("Passwords do not match".to_owned());
            return None;
        }
        if !password::meets_min_length(&self.master_password) {
            self.error = Some(format!("Password must be at least {} characters", password::MIN_MASTER_LEN));
            return None;
        }

        self.loading = true;
        Some(SetupRequest {
            master_password: self.master_password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }

    /// Fold a login/setup result into state. Always clears `loading`.
    ///
    /// A 401 here is a rejected password, not an expired session, so it is
    /// shown inline like any other server error.
    pub fn finish(&mut self, flow: AuthFlow, result: Result<(), ApiError>) -> Followup {
        self.loading = false;
        match result {
            Ok(()) => Followup::Redirect(DASHBOARD_PATH),
            Err(e) if e.is_transport() => {
                self.error = Some(NETWORK_ERROR.to_owned());
                Followup::Stay
            }
            Err(e) => {
                let message = e.server_message().unwrap_or(flow.fallback_error());
                self.error = Some(message.to_owned());
                Followup::Stay
            }
        }
    }
}
