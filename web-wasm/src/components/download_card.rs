//! ダウンロードカードコンポーネント

use leptos::prelude::*;

#[component]
pub fn DownloadCard<F>(on_download: F) -> impl IntoView
where
    F: Fn(()) + Send + Sync + Clone + 'static,
{
    view! {
        <div class="download-card">
            <div class="download-title">"✓ Conversion Complete!"</div>
            <button
                class="btn btn-primary gradient-button"
                on:click={
                    let on_download = on_download.clone();
                    move |_| on_download(())
                }
            >
                "Download SVG"
            </button>
        </div>
    }
}
