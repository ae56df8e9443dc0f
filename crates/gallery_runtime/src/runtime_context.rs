//! Runtime provider and context wiring for the gallery widget.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, the parked
//! upload selection, and the teardown gate. UI composition stays in [`crate::components`].

use leptos::*;
use platform_store::SyncGate;

use crate::{
    effect_executor,
    host::GalleryHostContext,
    model::GalleryState,
    reducer::{reduce_gallery, GalleryAction, RuntimeEffect},
    selection::FileSelection,
};

#[derive(Clone, Copy)]
/// Leptos context for reading gallery state and dispatching [`GalleryAction`] values.
pub struct GalleryRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<GalleryHostContext>,
    /// Reactive gallery state signal.
    pub state: RwSignal<GalleryState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Teardown gate consulted by async completions before writing state.
    pub gate: StoredValue<SyncGate>,
    /// Form selection parked between submission and the upload effect.
    pub pending_upload: StoredValue<Option<FileSelection>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<GalleryAction>,
}

impl GalleryRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: GalleryAction) {
        self.dispatch.call(action);
    }

    /// Returns a clone of the shared teardown gate.
    pub fn gate(&self) -> SyncGate {
        self.gate.get_value()
    }
}

#[component]
/// Provides [`GalleryRuntimeContext`] to descendant components and boots persisted state.
pub fn GalleryProvider(children: Children) -> impl IntoView {
    let host = store_value(GalleryHostContext::default());
    let state = create_rw_signal(GalleryState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());
    let gate = store_value(SyncGate::new());
    let pending_upload = store_value(Option::<FileSelection>::None);

    let dispatch = Callback::new(move |action: GalleryAction| {
        let mut gallery = state.get_untracked();
        let previous = gallery.clone();

        match reduce_gallery(&mut gallery, action) {
            Ok(new_effects) => {
                if gallery != previous {
                    state.set(gallery);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("gallery reducer error: {err}"),
        }
    });

    let runtime = GalleryRuntimeContext {
        host,
        state,
        effects,
        gate,
        pending_upload,
        dispatch,
    };

    provide_context(runtime);

    host.get_value().install_boot_hydration(runtime);
    effect_executor::install(runtime);
    on_cleanup(move || gate.get_value().retire());

    children().into_view()
}

/// Returns the current [`GalleryRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`GalleryProvider`].
pub fn use_gallery_runtime() -> GalleryRuntimeContext {
    use_context::<GalleryRuntimeContext>().expect("GalleryRuntimeContext not provided")
}
