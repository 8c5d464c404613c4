//! Helpers below the state layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! `password` is pure and host-tested. `browser` wraps the few DOM calls the
//! pages make (navigation, confirm, clipboard) and `task` ties spawned
//! requests to the lifetime of the page that started them.

pub mod browser;
pub mod password;
pub mod task;
