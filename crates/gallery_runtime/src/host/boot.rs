use leptos::{create_effect, logging, spawn_local, Callable};

use crate::{
    host::GalleryHostContext,
    model::{LIST_PREFIX, PROBE_LIMIT},
    persistence,
    reducer::GalleryAction,
    runtime_context::GalleryRuntimeContext,
};

pub(super) fn install(host: GalleryHostContext, runtime: GalleryRuntimeContext) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            let dark_mode = persistence::load_dark_mode(prefs.as_ref()).await;
            runtime.dispatch.call(GalleryAction::BootHydrated { dark_mode });

            // Diagnostic only: the probe result never feeds rendered state.
            let probe = host.probe_store();
            match probe.list(LIST_PREFIX, PROBE_LIMIT).await {
                Ok(sample) => logging::log!(
                    "store probe ok, sample item: {:?}",
                    sample.first().map(|entry| entry.name.as_str())
                ),
                Err(err) => logging::warn!("store probe failed: {err}"),
            }

            runtime.dispatch.call(GalleryAction::RefreshRequested);
        });
    });
}
