//! End-to-end gallery sync flows driven over the reducer and an in-memory object store.
//!
//! These tests stand in for the browser effect executor: reducer-emitted effects are pumped
//! against [`MemoryObjectStore`] until the queue drains, so the observable listing snapshot
//! can be asserted after each user-visible operation.

use futures::executor::block_on;
use gallery_runtime::{
    reduce_gallery, GalleryAction, GalleryState, RuntimeEffect, LIST_LIMIT, LIST_PREFIX,
};
use platform_store::{MemoryObjectStore, MemoryStoreFault, ObjectStore};

/// Drains reducer-emitted effects against the store until none remain.
///
/// Upload effects consume `pending_bytes`; theme effects have no observable target here and
/// are dropped.
fn pump(
    state: &mut GalleryState,
    store: &MemoryObjectStore,
    mut effects: Vec<RuntimeEffect>,
    pending_bytes: &mut Option<Vec<u8>>,
) {
    while !effects.is_empty() {
        let mut next = Vec::new();
        for effect in effects.drain(..) {
            match effect {
                RuntimeEffect::FetchListing { epoch } => {
                    let result = block_on(store.list(LIST_PREFIX, LIST_LIMIT));
                    next.extend(
                        reduce_gallery(state, GalleryAction::ListingLoaded { epoch, result })
                            .expect("listing action"),
                    );
                }
                RuntimeEffect::UploadPendingFile { key } => {
                    let bytes = pending_bytes.take().unwrap_or_default();
                    let result = block_on(store.upload(&key, bytes, None));
                    next.extend(
                        reduce_gallery(state, GalleryAction::UploadSettled { result })
                            .expect("upload action"),
                    );
                }
                RuntimeEffect::RemoveObject { name } => {
                    let keys = [name.clone()];
                    let result = block_on(store.remove(&keys));
                    next.extend(
                        reduce_gallery(state, GalleryAction::DeleteSettled { name, result })
                            .expect("delete action"),
                    );
                }
                RuntimeEffect::ApplyTheme { .. } | RuntimeEffect::PersistTheme { .. } => {}
            }
        }
        effects = next;
    }
}

fn refresh(state: &mut GalleryState, store: &MemoryObjectStore) {
    let effects = reduce_gallery(state, GalleryAction::RefreshRequested).expect("refresh");
    pump(state, store, effects, &mut None);
}

fn submit(state: &mut GalleryState, store: &MemoryObjectStore, name: &str, ts: u64, bytes: Vec<u8>) {
    let effects = reduce_gallery(
        state,
        GalleryAction::UploadRequested {
            original_name: Some(name.to_string()),
            timestamp_ms: ts,
        },
    )
    .expect("upload request");
    pump(state, store, effects, &mut Some(bytes));
}

fn delete(state: &mut GalleryState, store: &MemoryObjectStore, name: &str) {
    let effects = reduce_gallery(
        state,
        GalleryAction::DeleteRequested {
            name: name.to_string(),
        },
    )
    .expect("delete request");
    pump(state, store, effects, &mut None);
}

fn names(state: &GalleryState) -> Vec<&str> {
    state.files.iter().map(|entry| entry.name.as_str()).collect()
}

#[test]
fn empty_bucket_lists_an_empty_snapshot() {
    let store = MemoryObjectStore::new();
    let mut state = GalleryState::default();

    refresh(&mut state, &store);

    assert!(state.files.is_empty());
}

#[test]
fn upload_appears_exactly_once_in_the_next_snapshot() {
    let store = MemoryObjectStore::new();
    let mut state = GalleryState::default();

    submit(&mut state, &store, "cat.png", 1_700, vec![1, 2, 3]);

    assert_eq!(names(&state), vec!["1700_cat.png"]);
    assert!(!state.submitting);
    assert_eq!(state.upload_error, None);
}

#[test]
fn delete_removes_the_key_from_the_next_snapshot() {
    let store = MemoryObjectStore::new();
    let mut state = GalleryState::default();
    submit(&mut state, &store, "cat.png", 1_700, Vec::new());
    submit(&mut state, &store, "dog.png", 1_800, Vec::new());

    delete(&mut state, &store, "1700_cat.png");

    assert_eq!(names(&state), vec!["1800_dog.png"]);
    assert_eq!(state.deleting, None);
}

#[test]
fn deleting_the_same_key_twice_is_a_harmless_noop() {
    let store = MemoryObjectStore::new();
    let mut state = GalleryState::default();
    submit(&mut state, &store, "cat.png", 1_700, Vec::new());

    delete(&mut state, &store, "1700_cat.png");
    delete(&mut state, &store, "1700_cat.png");

    assert!(state.files.is_empty());
    assert_eq!(state.deleting, None);
}

#[test]
fn deleting_a_name_absent_from_the_snapshot_still_round_trips() {
    let store = MemoryObjectStore::new();
    store.seed("1_keep.png", Vec::new());
    let mut state = GalleryState::default();
    refresh(&mut state, &store);

    delete(&mut state, &store, "ghost.png");

    assert_eq!(names(&state), vec!["1_keep.png"]);
    assert_eq!(state.deleting, None);
}

#[test]
fn failed_delete_leaves_the_snapshot_stale_and_clears_the_marker() {
    let store = MemoryObjectStore::new();
    store.seed("1_keep.png", Vec::new());
    let mut state = GalleryState::default();
    refresh(&mut state, &store);

    store.set_fault(Some(MemoryStoreFault::Remove));
    delete(&mut state, &store, "1_keep.png");

    // The remote object survived and the stale row keeps rendering until some later refresh.
    assert_eq!(names(&state), vec!["1_keep.png"]);
    assert_eq!(state.deleting, None);
    assert_eq!(store.len(), 1);
}

#[test]
fn failed_upload_surfaces_the_error_and_keeps_the_snapshot() {
    let store = MemoryObjectStore::new();
    store.seed("1_keep.png", Vec::new());
    let mut state = GalleryState::default();
    refresh(&mut state, &store);

    store.set_fault(Some(MemoryStoreFault::Upload));
    submit(&mut state, &store, "cat.png", 1_700, Vec::new());

    assert!(!state.submitting);
    assert!(state.upload_error.is_some());
    assert_eq!(names(&state), vec!["1_keep.png"]);
}

#[test]
fn failed_listing_keeps_the_previous_snapshot() {
    let store = MemoryObjectStore::new();
    store.seed("1_keep.png", Vec::new());
    let mut state = GalleryState::default();
    refresh(&mut state, &store);

    store.set_fault(Some(MemoryStoreFault::List));
    refresh(&mut state, &store);

    assert_eq!(names(&state), vec!["1_keep.png"]);
}

#[test]
fn superseded_listing_response_cannot_overwrite_the_newer_snapshot() {
    let store = MemoryObjectStore::new();
    let mut state = GalleryState::default();

    // Two refreshes race; capture each request's epoch without answering yet.
    let first = reduce_gallery(&mut state, GalleryAction::RefreshRequested).expect("first");
    let second = reduce_gallery(&mut state, GalleryAction::RefreshRequested).expect("second");
    let RuntimeEffect::FetchListing { epoch: old_epoch } = first[0].clone() else {
        panic!("expected fetch effect");
    };
    let RuntimeEffect::FetchListing { epoch: new_epoch } = second[0].clone() else {
        panic!("expected fetch effect");
    };

    // The newer request answers first with the post-mutation listing.
    store.seed("2_new.png", Vec::new());
    let result = block_on(store.list(LIST_PREFIX, LIST_LIMIT));
    reduce_gallery(
        &mut state,
        GalleryAction::ListingLoaded {
            epoch: new_epoch,
            result,
        },
    )
    .expect("current listing");

    // The older one straggles in afterwards carrying pre-mutation data.
    reduce_gallery(
        &mut state,
        GalleryAction::ListingLoaded {
            epoch: old_epoch,
            result: Ok(Vec::new()),
        },
    )
    .expect("stale listing");

    assert_eq!(names(&state), vec!["2_new.png"]);
}

#[test]
fn mixed_upload_and_delete_session_converges_on_the_remote_contents() {
    let store = MemoryObjectStore::new();
    let mut state = GalleryState::default();

    submit(&mut state, &store, "a.png", 1, Vec::new());
    submit(&mut state, &store, "b.png", 2, Vec::new());
    submit(&mut state, &store, "c.png", 3, Vec::new());
    delete(&mut state, &store, "2_b.png");

    assert_eq!(names(&state), vec!["1_a.png", "3_c.png"]);
    assert_eq!(state.files.len(), store.len());
}
