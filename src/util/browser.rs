//! Browser glue: hard navigation, confirm dialogs, clipboard.
//!
//! TRADE-OFFS
//! ==========
//! These are hydrate-only effects. SSR and host-test builds compile them to
//! no-ops (or a refusal) so page code can call them unconditionally.

/// Navigate the whole document to `path`.
///
/// A hard navigation drops every in-memory secret held by the current page.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("redirect -> {path}");
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::warn!("redirect to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Ask the user to confirm a destructive action. Returns `false` if the
/// dialog cannot be shown.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error string if the clipboard is unavailable or the browser
/// rejects the write (e.g. missing permission or insecure context).
pub async fn copy_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| format!("{e:?}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("clipboard not available outside the browser".to_owned())
    }
}
