//! Browser (`wasm32`) implementations of [`platform_store`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the gallery: a fetch-backed object
//! store speaking the Supabase Storage REST surface, a `localStorage`-backed preference store,
//! and a document-class theme service. On non-wasm targets the I/O adapters compile but report
//! unavailability, so host-side unit tests never touch the network or the DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
mod fetch;
pub mod object_store;
pub mod prefs;
pub mod theme;

pub use config::{RemoteTargets, StoreTarget};
pub use object_store::WebObjectStore;
pub use prefs::WebPrefsStore;
pub use theme::WebThemeService;
