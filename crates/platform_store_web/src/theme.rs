//! Document-class theme service implementation.

use platform_store::ThemeService;

/// Presentation class toggled on the document root while dark mode is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, Default)]
/// Browser theme service toggling [`DARK_CLASS`] on `document.documentElement`.
pub struct WebThemeService;

impl ThemeService for WebThemeService {
    fn apply(&self, dark: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            let root = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element());
            if let Some(root) = root {
                let _ = root.class_list().toggle_with_force(DARK_CLASS, dark);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = dark;
        }
    }
}
