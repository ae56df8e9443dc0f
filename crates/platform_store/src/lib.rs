//! Typed object-store contracts and shared models used across the gallery runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for remote-storage services. It exposes the
//! [`ObjectStore`] trait with its shared listing models, lightweight preference and theme
//! contracts, object-key/time helpers, and the teardown gate consulted by async effect
//! executors. Concrete browser adapters live in `platform_store_web`.
//!
//! # Example
//!
//! ```rust
//! use platform_store::{object_key, SyncGate};
//!
//! let key = object_key(1_700_000_000_000, "cat.png");
//! assert_eq!(key, "1700000000000_cat.png");
//!
//! let gate = SyncGate::new();
//! assert!(gate.is_live());
//! gate.retire();
//! assert!(!gate.is_live());
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod key;
pub mod prefs;
pub mod service;
pub mod sync_gate;
pub mod theme;
pub mod time;
pub mod types;

pub use error::StoreError;
pub use key::object_key;
pub use prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use service::{
    MemoryObjectStore, MemoryStoreFault, NoopObjectStore, ObjectStore, ObjectStoreFuture,
};
pub use sync_gate::SyncGate;
pub use theme::{NoopThemeService, RecordingThemeService, ThemeService};
pub use time::{next_monotonic_timestamp_ms, unix_time_ms_now};
pub use types::ObjectEntry;
