//! Gallery persistence adapters for the durable dark-mode flag.

use platform_store::{load_pref_with, save_pref_with, PrefsStore};

/// Storage key holding the dark-mode flag as a bare JSON boolean (`true`/`false`).
pub const DARK_MODE_KEY: &str = "asset_gallery.dark_mode.v1";

/// Loads the persisted dark-mode flag.
///
/// Returns `None` when the key is absent or unreadable; an unreadable value is logged and
/// treated as unset rather than failing boot.
pub async fn load_dark_mode<S: PrefsStore + ?Sized>(prefs: &S) -> Option<bool> {
    match load_pref_with(prefs, DARK_MODE_KEY).await {
        Ok(flag) => flag,
        Err(err) => {
            leptos::logging::warn!("dark-mode flag load failed: {err}");
            None
        }
    }
}

/// Persists the dark-mode flag.
///
/// # Errors
///
/// Returns an error when the preference store write fails.
pub async fn persist_dark_mode<S: PrefsStore + ?Sized>(
    prefs: &S,
    dark: bool,
) -> Result<(), String> {
    save_pref_with(prefs, DARK_MODE_KEY, &dark).await
}
