use leptos::{logging, spawn_local};

use crate::{host::GalleryHostContext, persistence};

pub(super) fn persist(host: GalleryHostContext, dark: bool) {
    spawn_local(async move {
        let prefs = host.prefs_store();
        if let Err(err) = persistence::persist_dark_mode(prefs.as_ref(), dark).await {
            logging::warn!("persist dark-mode flag failed: {err}");
        }
    });
}
