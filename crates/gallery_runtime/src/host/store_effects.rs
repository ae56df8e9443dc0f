use leptos::{logging, spawn_local, Callable};
use platform_store::next_monotonic_timestamp_ms;

use crate::{
    host::GalleryHostContext,
    model::{LIST_LIMIT, LIST_PREFIX},
    reducer::GalleryAction,
    runtime_context::GalleryRuntimeContext,
    selection::FileSelection,
};

/// Validates and starts an upload for the current form selection.
///
/// The selection is parked on the runtime context until the reducer admits the request and
/// the upload effect picks it up; a missing selection is rejected by the reducer and surfaces
/// through the upload-error slot.
pub fn submit_upload(runtime: GalleryRuntimeContext, selection: Option<FileSelection>) {
    let original_name = selection.as_ref().map(FileSelection::name);
    runtime.pending_upload.set_value(selection);
    runtime.dispatch.call(GalleryAction::UploadRequested {
        original_name,
        timestamp_ms: next_monotonic_timestamp_ms(),
    });
}

pub(super) fn fetch_listing(host: GalleryHostContext, runtime: GalleryRuntimeContext, epoch: u64) {
    let store = host.working_store();
    let gate = runtime.gate();
    spawn_local(async move {
        let result = store.list(LIST_PREFIX, LIST_LIMIT).await;
        if !gate.is_live() {
            return;
        }
        if let Err(err) = &result {
            logging::warn!("listing fetch failed: {err}");
        }
        runtime
            .dispatch
            .call(GalleryAction::ListingLoaded { epoch, result });
    });
}

pub(super) fn upload_pending(host: GalleryHostContext, runtime: GalleryRuntimeContext, key: String) {
    let Some(selection) = runtime.pending_upload.get_value() else {
        logging::warn!("upload effect ran without a parked selection");
        runtime.dispatch.call(GalleryAction::UploadSettled {
            result: Err("no file available for upload".to_string()),
        });
        return;
    };
    runtime.pending_upload.set_value(None);

    let store = host.working_store();
    let gate = runtime.gate();
    spawn_local(async move {
        let result = match selection.read_bytes().await {
            Ok(bytes) => store.upload(&key, bytes, selection.content_type()).await,
            Err(err) => Err(err),
        };
        if !gate.is_live() {
            return;
        }
        if let Err(err) = &result {
            logging::warn!("upload failed for {key}: {err}");
        }
        runtime.dispatch.call(GalleryAction::UploadSettled { result });
    });
}

pub(super) fn remove_object(host: GalleryHostContext, runtime: GalleryRuntimeContext, name: String) {
    let store = host.working_store();
    let gate = runtime.gate();
    spawn_local(async move {
        let keys = [name.clone()];
        let result = store.remove(&keys).await;
        if !gate.is_live() {
            return;
        }
        if let Err(err) = &result {
            logging::warn!("delete failed for {name}: {err}");
        }
        runtime
            .dispatch
            .call(GalleryAction::DeleteSettled { name, result });
    });
}
