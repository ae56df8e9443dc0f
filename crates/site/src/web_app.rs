use gallery_runtime::{GalleryProvider, GalleryShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Asset Gallery" />
        <Meta
            name="description"
            content="Upload files to a remote bucket and browse what is already there."
        />

        <main class="site-root">
            <GalleryEntry />
        </main>
    }
}

#[component]
pub fn GalleryEntry() -> impl IntoView {
    view! {
        <GalleryProvider>
            <GalleryShell />
        </GalleryProvider>
    }
}
