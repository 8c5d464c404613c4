//! Networking modules for the vault HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls, `error` classifies their failures, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
