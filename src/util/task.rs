//! Cancellation token for async work owned by a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages spawn request tasks with `spawn_local`. A task that resolves after
//! its page was torn down must not write into that page's state, so each page
//! holds a `Liveness` cancelled from `on_cleanup` and tasks check it after
//! every await.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A token cancelled when the current reactive owner is cleaned up.
    pub fn for_current_owner() -> Self {
        let liveness = Self::new();
        let on_drop = liveness.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        liveness
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
