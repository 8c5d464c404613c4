//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each page owns one plain struct (`auth::AuthState`,
//! `dashboard::DashboardState`) held in an `RwSignal`. Transitions are
//! synchronous methods so they can be tested without a browser; pages only
//! glue them to requests and act on the returned `followup::Followup`.

pub mod auth;
pub mod catalog;
pub mod dashboard;
pub mod followup;
pub mod toast;
