//! Gallery widget UI composition: upload form, file grid, and theme toggle.

use leptos::*;
use platform_store::ObjectEntry;

use crate::{
    host::submit_upload,
    reducer::GalleryAction,
    runtime_context::use_gallery_runtime,
    selection::FileSelection,
};

/// Fixed local placeholder shown when an entry has no usable public URL or its image fails to
/// load.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24'%3E%3Crect width='24' height='24' fill='%23e5e7eb'/%3E%3Cpath d='M6 3h9l3 3v15H6z' fill='%239ca3af'/%3E%3C/svg%3E";

#[component]
/// Single-page gallery surface: theme toggle, upload form, and uploaded-file grid.
pub fn GalleryShell() -> impl IntoView {
    view! {
        <div class="gallery-root">
            <ThemeToggle />
            <h1 class="gallery-title">"File Uploader"</h1>
            <UploadForm />
            <UploadedFilesGrid />
        </div>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let dark = Signal::derive(move || runtime.state.with(|s| s.dark_mode));

    view! {
        <button
            type="button"
            class="theme-toggle"
            on:click=move |_| runtime.dispatch_action(GalleryAction::ThemeToggled)
        >
            {move || if dark.get() { "Light Mode" } else { "Dark Mode" }}
        </button>
    }
}

#[component]
fn UploadForm() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let file_input = create_node_ref::<html::Input>();
    let submitting = Signal::derive(move || runtime.state.with(|s| s.submitting));
    let upload_error = Signal::derive(move || runtime.state.with(|s| s.upload_error.clone()));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let selection = file_input
            .get()
            .and_then(|input| selection_from_input(&input));
        submit_upload(runtime, selection);
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <div class="upload-dropzone">
                <p>"Drag & drop a file here"</p>
                <p class="upload-dropzone-or">"or"</p>
                <input node_ref=file_input type="file" name="file" />
            </div>
            <button type="submit" class="upload-submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Submitting..." } else { "Upload" }}
            </button>
            <Show when=move || upload_error.get().is_some() fallback=|| ()>
                <p class="upload-error" role="alert">
                    {move || upload_error.get().unwrap_or_default()}
                </p>
            </Show>
        </form>
    }
}

fn selection_from_input(input: &HtmlElement<html::Input>) -> Option<FileSelection> {
    #[cfg(target_arch = "wasm32")]
    {
        input
            .files()
            .and_then(|files| files.get(0))
            .map(FileSelection::from_file)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = input;
        None
    }
}

#[component]
fn UploadedFilesGrid() -> impl IntoView {
    let runtime = use_gallery_runtime();
    let files = Signal::derive(move || runtime.state.with(|s| s.files.clone()));

    view! {
        <section class="gallery-files">
            <h2 class="gallery-files-title">"Uploaded Files"</h2>
            <div class="gallery-grid">
                <For each=move || files.get() key=|entry| entry.name.clone() let:entry>
                    <FileCard entry />
                </For>
            </div>
        </section>
    }
}

#[component]
fn FileCard(entry: ObjectEntry) -> impl IntoView {
    let runtime = use_gallery_runtime();
    let name = entry.name;
    let public_url = runtime.host.get_value().working_store().public_url(&name);

    let deleting = {
        let name = name.clone();
        Signal::derive(move || runtime.state.with(|s| s.is_deleting(&name)))
    };

    // One-shot fallback: after the first error the placeholder takes over and the handler has
    // nothing left to swap, so a broken placeholder cannot loop.
    let image_failed = create_rw_signal(false);
    let image_src = {
        let url = public_url.clone();
        move || {
            if image_failed.get() {
                PLACEHOLDER_IMAGE.to_string()
            } else {
                url.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
            }
        }
    };

    let delete_controls = {
        let name = name.clone();
        move || {
            if deleting.get() {
                view! { <p class="gallery-card-deleting">"Deleting..."</p> }.into_view()
            } else {
                let name = name.clone();
                view! {
                    <button
                        type="button"
                        class="gallery-card-delete"
                        on:click=move |_| {
                            runtime.dispatch_action(GalleryAction::DeleteRequested {
                                name: name.clone(),
                            })
                        }
                    >
                        "Delete"
                    </button>
                }
                .into_view()
            }
        }
    };

    view! {
        <div class="gallery-card">
            <p class="gallery-card-name">{name.clone()}</p>
            <img
                class="gallery-card-thumb"
                src=image_src
                alt=name.clone()
                on:error=move |_| {
                    if !image_failed.get_untracked() {
                        image_failed.set(true);
                    }
                }
            />
            {public_url.clone().map(|url| view! {
                <a
                    class="gallery-card-link"
                    href=url
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "View File"
                </a>
            })}
            {delete_controls}
        </div>
    }
}
