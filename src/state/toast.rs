//! Single-slot toast notification.
//!
//! DESIGN
//! ======
//! Only the most recent toast is shown; there is no queue. Each `show` bumps a
//! sequence number and the auto-hide timer carries the number it was started
//! for, so an older timer firing late cannot hide a newer toast.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub visible: bool,
    pub message: String,
    pub kind: ToastKind,
    /// Incremented on every `show`.
    pub seq: u64,
}

impl ToastState {
    /// Replace whatever is showing and return the sequence number the
    /// auto-hide timer should pass to `expire`.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.seq += 1;
        self.visible = true;
        self.message = message.into();
        self.kind = kind;
        self.seq
    }

    /// Hide the toast if it is still the one started as `seq`.
    pub fn expire(&mut self, seq: u64) -> bool {
        if seq != self.seq || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}
