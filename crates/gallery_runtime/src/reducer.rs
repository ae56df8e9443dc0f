//! Reducer actions, side-effect intents, and transition logic for the gallery widget.

use platform_store::{object_key, ObjectEntry};
use thiserror::Error;

use crate::model::GalleryState;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_gallery`] to mutate [`GalleryState`].
pub enum GalleryAction {
    /// Apply the persisted dark-mode flag restored at boot.
    BootHydrated {
        /// Restored flag; `None` keeps the default.
        dark_mode: Option<bool>,
    },
    /// Request a fresh listing snapshot under a new epoch.
    RefreshRequested,
    /// A listing response landed for the given epoch.
    ListingLoaded {
        /// Epoch the request was issued under.
        epoch: u64,
        /// Entries on success; the failure message otherwise.
        result: Result<Vec<ObjectEntry>, String>,
    },
    /// The user submitted the upload form.
    UploadRequested {
        /// Original file name, or `None` when no file was chosen.
        original_name: Option<String>,
        /// Submission timestamp used to build the collision-resistant key.
        timestamp_ms: u64,
    },
    /// The in-flight upload finished.
    UploadSettled {
        /// Stored key on success; the failure message otherwise.
        result: Result<String, String>,
    },
    /// The user asked to delete one entry.
    DeleteRequested {
        /// Entry name to remove.
        name: String,
    },
    /// The in-flight delete finished.
    DeleteSettled {
        /// Entry name the request targeted.
        name: String,
        /// Failure message when the remote call failed.
        result: Result<(), String>,
    },
    /// The user toggled dark mode.
    ThemeToggled,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_gallery`] for the host runtime to execute.
pub enum RuntimeEffect {
    /// Fetch the listing snapshot for this epoch.
    FetchListing {
        /// Epoch to tag the eventual [`GalleryAction::ListingLoaded`] with.
        epoch: u64,
    },
    /// Upload the parked form selection under the prepared key.
    UploadPendingFile {
        /// Timestamped object key.
        key: String,
    },
    /// Remove a single object by name.
    RemoveObject {
        /// Object key to remove.
        name: String,
    },
    /// Apply the dark-mode flag to the presentation surface.
    ApplyTheme {
        /// Whether dark mode is active.
        dark: bool,
    },
    /// Persist the dark-mode flag to durable local storage.
    PersistTheme {
        /// Whether dark mode is active.
        dark: bool,
    },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Validation failure for the upload form selection.
pub enum SelectionError {
    /// The form was submitted without choosing a file.
    #[error("choose a file before uploading")]
    NoFileChosen,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
/// Reducer errors for actions rejected by the single-flight policy.
pub enum ReducerError {
    /// An upload is already in flight.
    #[error("an upload is already in flight")]
    UploadInFlight,
    /// A delete is already in flight.
    #[error("a delete is already in flight")]
    DeleteInFlight,
}

/// Applies a [`GalleryAction`] to the widget state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for the gallery: listing
/// responses are admitted by epoch compare-and-swap, mutating operations are single-flight
/// per kind, and every failure leaves the last-known-good snapshot untouched.
///
/// # Errors
///
/// Returns a [`ReducerError`] when an upload or delete is requested while one of the same
/// kind is still in flight.
pub fn reduce_gallery(
    state: &mut GalleryState,
    action: GalleryAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        GalleryAction::BootHydrated { dark_mode } => {
            if let Some(dark) = dark_mode {
                state.dark_mode = dark;
            }
            effects.push(RuntimeEffect::ApplyTheme {
                dark: state.dark_mode,
            });
        }
        GalleryAction::RefreshRequested => {
            effects.push(begin_refresh(state));
        }
        GalleryAction::ListingLoaded { epoch, result } => {
            // Compare-and-swap against the current epoch: a response from a superseded
            // request must not overwrite the newer snapshot, and a failed fetch keeps the
            // last-known-good listing.
            if let Ok(files) = result {
                if epoch == state.refresh_epoch {
                    state.files = files;
                }
            }
        }
        GalleryAction::UploadRequested {
            original_name,
            timestamp_ms,
        } => {
            if state.submitting {
                return Err(ReducerError::UploadInFlight);
            }
            match original_name {
                None => {
                    state.upload_error = Some(SelectionError::NoFileChosen.to_string());
                }
                Some(name) => {
                    state.submitting = true;
                    state.upload_error = None;
                    effects.push(RuntimeEffect::UploadPendingFile {
                        key: object_key(timestamp_ms, &name),
                    });
                }
            }
        }
        GalleryAction::UploadSettled { result } => {
            state.submitting = false;
            match result {
                Ok(_key) => {
                    state.upload_error = None;
                    effects.push(begin_refresh(state));
                }
                Err(message) => {
                    state.upload_error = Some(message);
                }
            }
        }
        GalleryAction::DeleteRequested { name } => {
            if state.deleting.is_some() {
                return Err(ReducerError::DeleteInFlight);
            }
            state.deleting = Some(name.clone());
            effects.push(RuntimeEffect::RemoveObject { name });
        }
        GalleryAction::DeleteSettled { name: _, result } => {
            // The marker clears no matter how the request ended.
            state.deleting = None;
            if result.is_ok() {
                effects.push(begin_refresh(state));
            }
        }
        GalleryAction::ThemeToggled => {
            state.dark_mode = !state.dark_mode;
            effects.push(RuntimeEffect::ApplyTheme {
                dark: state.dark_mode,
            });
            effects.push(RuntimeEffect::PersistTheme {
                dark: state.dark_mode,
            });
        }
    }
    Ok(effects)
}

fn begin_refresh(state: &mut GalleryState) -> RuntimeEffect {
    state.refresh_epoch += 1;
    RuntimeEffect::FetchListing {
        epoch: state.refresh_epoch,
    }
}

#[cfg(test)]
mod tests {
    use platform_store::ObjectEntry;
    use pretty_assertions::assert_eq;

    use super::*;

    fn entries(names: &[&str]) -> Vec<ObjectEntry> {
        names.iter().map(|name| ObjectEntry::named(*name)).collect()
    }

    #[test]
    fn boot_hydration_applies_restored_flag_and_emits_theme_application() {
        let mut state = GalleryState::default();
        let effects = reduce_gallery(
            &mut state,
            GalleryAction::BootHydrated {
                dark_mode: Some(true),
            },
        )
        .expect("hydrate");

        assert!(state.dark_mode);
        assert_eq!(effects, vec![RuntimeEffect::ApplyTheme { dark: true }]);
    }

    #[test]
    fn boot_hydration_without_a_stored_flag_keeps_the_default() {
        let mut state = GalleryState::default();
        let effects =
            reduce_gallery(&mut state, GalleryAction::BootHydrated { dark_mode: None })
                .expect("hydrate");

        assert!(!state.dark_mode);
        assert_eq!(effects, vec![RuntimeEffect::ApplyTheme { dark: false }]);
    }

    #[test]
    fn refresh_bumps_the_epoch_and_requests_a_fetch() {
        let mut state = GalleryState::default();
        let effects = reduce_gallery(&mut state, GalleryAction::RefreshRequested).expect("refresh");

        assert_eq!(state.refresh_epoch, 1);
        assert_eq!(effects, vec![RuntimeEffect::FetchListing { epoch: 1 }]);
    }

    #[test]
    fn current_listing_response_replaces_the_snapshot() {
        let mut state = GalleryState::default();
        reduce_gallery(&mut state, GalleryAction::RefreshRequested).expect("refresh");

        reduce_gallery(
            &mut state,
            GalleryAction::ListingLoaded {
                epoch: 1,
                result: Ok(entries(&["1_a.png", "2_b.png"])),
            },
        )
        .expect("listing");

        assert_eq!(state.files, entries(&["1_a.png", "2_b.png"]));
    }

    #[test]
    fn stale_listing_response_is_discarded() {
        let mut state = GalleryState::default();
        reduce_gallery(&mut state, GalleryAction::RefreshRequested).expect("first refresh");
        reduce_gallery(&mut state, GalleryAction::RefreshRequested).expect("second refresh");

        // The winner lands first.
        reduce_gallery(
            &mut state,
            GalleryAction::ListingLoaded {
                epoch: 2,
                result: Ok(entries(&["2_new.png"])),
            },
        )
        .expect("current listing");

        // Then the superseded request straggles in with older data.
        reduce_gallery(
            &mut state,
            GalleryAction::ListingLoaded {
                epoch: 1,
                result: Ok(entries(&["1_old.png"])),
            },
        )
        .expect("stale listing");

        assert_eq!(state.files, entries(&["2_new.png"]));
    }

    #[test]
    fn failed_listing_keeps_the_last_known_good_snapshot() {
        let mut state = GalleryState {
            files: entries(&["1_keep.png"]),
            refresh_epoch: 3,
            ..Default::default()
        };

        reduce_gallery(
            &mut state,
            GalleryAction::ListingLoaded {
                epoch: 3,
                result: Err("listing exploded".to_string()),
            },
        )
        .expect("failed listing");

        assert_eq!(state.files, entries(&["1_keep.png"]));
    }

    #[test]
    fn upload_without_a_selection_routes_the_validation_message() {
        let mut state = GalleryState::default();
        let effects = reduce_gallery(
            &mut state,
            GalleryAction::UploadRequested {
                original_name: None,
                timestamp_ms: 1_700,
            },
        )
        .expect("upload request");

        assert!(effects.is_empty());
        assert!(!state.submitting);
        assert_eq!(
            state.upload_error.as_deref(),
            Some("choose a file before uploading")
        );
    }

    #[test]
    fn upload_request_builds_the_timestamped_key_and_marks_submission() {
        let mut state = GalleryState {
            upload_error: Some("stale message".to_string()),
            ..Default::default()
        };
        let effects = reduce_gallery(
            &mut state,
            GalleryAction::UploadRequested {
                original_name: Some("cat.png".to_string()),
                timestamp_ms: 1_700,
            },
        )
        .expect("upload request");

        assert!(state.submitting);
        assert_eq!(state.upload_error, None);
        assert_eq!(
            effects,
            vec![RuntimeEffect::UploadPendingFile {
                key: "1700_cat.png".to_string()
            }]
        );
    }

    #[test]
    fn second_upload_while_one_is_in_flight_is_rejected() {
        let mut state = GalleryState {
            submitting: true,
            ..Default::default()
        };
        let err = reduce_gallery(
            &mut state,
            GalleryAction::UploadRequested {
                original_name: Some("b.png".to_string()),
                timestamp_ms: 2,
            },
        )
        .expect_err("second upload");

        assert_eq!(err, ReducerError::UploadInFlight);
    }

    #[test]
    fn upload_failure_routes_the_message_into_upload_error() {
        let mut state = GalleryState {
            submitting: true,
            ..Default::default()
        };
        let effects = reduce_gallery(
            &mut state,
            GalleryAction::UploadSettled {
                result: Err("bucket quota exceeded".to_string()),
            },
        )
        .expect("upload settled");

        assert!(effects.is_empty());
        assert!(!state.submitting);
        assert_eq!(state.upload_error.as_deref(), Some("bucket quota exceeded"));
    }

    #[test]
    fn upload_success_clears_the_error_and_triggers_a_refresh() {
        let mut state = GalleryState {
            submitting: true,
            refresh_epoch: 4,
            ..Default::default()
        };
        let effects = reduce_gallery(
            &mut state,
            GalleryAction::UploadSettled {
                result: Ok("1700_cat.png".to_string()),
            },
        )
        .expect("upload settled");

        assert!(!state.submitting);
        assert_eq!(state.upload_error, None);
        assert_eq!(effects, vec![RuntimeEffect::FetchListing { epoch: 5 }]);
    }

    #[test]
    fn delete_marks_the_row_and_emits_the_remove_intent() {
        let mut state = GalleryState::default();
        let effects = reduce_gallery(
            &mut state,
            GalleryAction::DeleteRequested {
                name: "1_a.png".to_string(),
            },
        )
        .expect("delete request");

        assert_eq!(state.deleting.as_deref(), Some("1_a.png"));
        assert_eq!(
            effects,
            vec![RuntimeEffect::RemoveObject {
                name: "1_a.png".to_string()
            }]
        );
    }

    #[test]
    fn concurrent_delete_requests_are_rejected() {
        let mut state = GalleryState {
            deleting: Some("1_a.png".to_string()),
            ..Default::default()
        };
        let err = reduce_gallery(
            &mut state,
            GalleryAction::DeleteRequested {
                name: "2_b.png".to_string(),
            },
        )
        .expect_err("second delete");

        assert_eq!(err, ReducerError::DeleteInFlight);
    }

    #[test]
    fn delete_failure_clears_the_marker_and_leaves_the_snapshot_stale() {
        let mut state = GalleryState {
            files: entries(&["1_a.png"]),
            deleting: Some("1_a.png".to_string()),
            ..Default::default()
        };
        let effects = reduce_gallery(
            &mut state,
            GalleryAction::DeleteSettled {
                name: "1_a.png".to_string(),
                result: Err("store said no".to_string()),
            },
        )
        .expect("delete settled");

        assert!(effects.is_empty());
        assert_eq!(state.deleting, None);
        assert_eq!(state.files, entries(&["1_a.png"]));
    }

    #[test]
    fn delete_success_clears_the_marker_and_triggers_a_refresh() {
        let mut state = GalleryState {
            deleting: Some("1_a.png".to_string()),
            refresh_epoch: 7,
            ..Default::default()
        };
        let effects = reduce_gallery(
            &mut state,
            GalleryAction::DeleteSettled {
                name: "1_a.png".to_string(),
                result: Ok(()),
            },
        )
        .expect("delete settled");

        assert_eq!(state.deleting, None);
        assert_eq!(effects, vec![RuntimeEffect::FetchListing { epoch: 8 }]);
    }

    #[test]
    fn theme_toggle_is_an_involution_and_persists_each_flip() {
        let mut state = GalleryState::default();

        let effects = reduce_gallery(&mut state, GalleryAction::ThemeToggled).expect("first");
        assert!(state.dark_mode);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ApplyTheme { dark: true },
                RuntimeEffect::PersistTheme { dark: true },
            ]
        );

        let effects = reduce_gallery(&mut state, GalleryAction::ThemeToggled).expect("second");
        assert!(!state.dark_mode);
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::ApplyTheme { dark: false },
                RuntimeEffect::PersistTheme { dark: false },
            ]
        );
    }
}
