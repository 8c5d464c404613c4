//! Reusable view components for the auth and dashboard pages.

pub mod entry_card;
pub mod entry_modal;
pub mod strength_meter;
pub mod toast;
pub mod type_sidebar;
