//! Reactive runtime for the remote asset gallery widget: state model, reducer, host-effect
//! execution, persistence, and the Leptos view surface.

pub mod components;
pub mod host;
pub mod model;
pub mod persistence;
pub mod reducer;
pub mod selection;

mod effect_executor;
mod runtime_context;

pub use components::{GalleryShell, PLACEHOLDER_IMAGE};
pub use host::{submit_upload, GalleryHostContext};
pub use model::{GalleryState, LIST_LIMIT, LIST_PREFIX, PROBE_LIMIT};
pub use reducer::{
    reduce_gallery, GalleryAction, ReducerError, RuntimeEffect, SelectionError,
};
pub use runtime_context::{use_gallery_runtime, GalleryProvider, GalleryRuntimeContext};
pub use selection::FileSelection;
