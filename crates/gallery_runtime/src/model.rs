use platform_store::ObjectEntry;
use serde::{Deserialize, Serialize};

/// Listing page size used for every gallery refresh.
pub const LIST_LIMIT: u32 = 100;
/// Listing bound used by the startup connectivity probe.
pub const PROBE_LIMIT: u32 = 1;
/// Prefix passed to listing calls; the gallery always lists the bucket root.
pub const LIST_PREFIX: &str = "";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Reactive state owned by the gallery widget.
pub struct GalleryState {
    /// Snapshot of the last successful, non-stale listing fetch.
    pub files: Vec<ObjectEntry>,
    /// Dark-mode flag, persisted across loads.
    pub dark_mode: bool,
    /// Name of the single entry whose removal is in flight, if any.
    pub deleting: Option<String>,
    /// Upload in flight; the submit control is disabled meanwhile.
    pub submitting: bool,
    /// User-visible message for the most recent failed upload attempt.
    pub upload_error: Option<String>,
    /// Monotonically increasing listing generation; responses carrying an older value are
    /// discarded instead of overwriting a newer snapshot.
    pub refresh_epoch: u64,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            dark_mode: false,
            deleting: None,
            submitting: false,
            upload_error: None,
            refresh_epoch: 0,
        }
    }
}

impl GalleryState {
    /// Returns `true` while `name`'s removal is in flight.
    pub fn is_deleting(&self, name: &str) -> bool {
        self.deleting.as_deref() == Some(name)
    }
}
