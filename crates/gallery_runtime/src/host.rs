//! Host-side runtime helpers for executing reducer effects against the remote-store boundary.
//!
//! The host context bundles the two configured remote targets with the preference and theme
//! services behind trait objects, so runtime tests can swap in memory-backed fakes while the
//! browser build wires the `platform_store_web` adapters.

mod boot;
mod store_effects;
mod theme_effects;

use std::rc::Rc;

use platform_store::{ObjectStore, PrefsStore, ThemeService};
use platform_store_web::{RemoteTargets, WebObjectStore, WebPrefsStore, WebThemeService};

use crate::{reducer::RuntimeEffect, runtime_context::GalleryRuntimeContext};

pub use store_effects::submit_upload;

#[derive(Clone)]
/// Host service bundle for gallery runtime side effects.
pub struct GalleryHostContext {
    working: Rc<dyn ObjectStore>,
    probe: Rc<dyn ObjectStore>,
    prefs: Rc<dyn PrefsStore>,
    theme: Rc<dyn ThemeService>,
}

impl Default for GalleryHostContext {
    fn default() -> Self {
        let targets = RemoteTargets::from_env();
        Self {
            working: Rc::new(WebObjectStore::new(targets.working)),
            probe: Rc::new(WebObjectStore::new(targets.probe)),
            prefs: Rc::new(WebPrefsStore),
            theme: Rc::new(WebThemeService),
        }
    }
}

impl GalleryHostContext {
    /// Assembles a host context from explicit service implementations.
    pub fn new(
        working: Rc<dyn ObjectStore>,
        probe: Rc<dyn ObjectStore>,
        prefs: Rc<dyn PrefsStore>,
        theme: Rc<dyn ThemeService>,
    ) -> Self {
        Self {
            working,
            probe,
            prefs,
            theme,
        }
    }

    /// Returns the store carrying all upload/list/delete traffic.
    pub fn working_store(&self) -> Rc<dyn ObjectStore> {
        self.working.clone()
    }

    /// Returns the store probed read-only at startup.
    pub fn probe_store(&self) -> Rc<dyn ObjectStore> {
        self.probe.clone()
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Returns the configured presentation-theme service.
    pub fn theme_service(&self) -> Rc<dyn ThemeService> {
        self.theme.clone()
    }

    /// Installs boot hydration and the startup connectivity probe.
    ///
    /// The boot sequence restores the persisted dark-mode flag, logs a best-effort probe
    /// against the probe bucket, and requests the initial listing snapshot. Probe outcome
    /// never affects rendered state.
    pub fn install_boot_hydration(&self, runtime: GalleryRuntimeContext) {
        boot::install(self.clone(), runtime);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: GalleryRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FetchListing { epoch } => {
                store_effects::fetch_listing(self.clone(), runtime, epoch);
            }
            RuntimeEffect::UploadPendingFile { key } => {
                store_effects::upload_pending(self.clone(), runtime, key);
            }
            RuntimeEffect::RemoveObject { name } => {
                store_effects::remove_object(self.clone(), runtime, name);
            }
            RuntimeEffect::ApplyTheme { dark } => self.theme.apply(dark),
            RuntimeEffect::PersistTheme { dark } => theme_effects::persist(self.clone(), dark),
        }
    }
}
