//! アップロードエリアコンポーネント

use gloo::file::File;
use leptos::prelude::*;
use vectorizer_common::PNG_MIME;
use web_sys::{DragEvent, FileList, HtmlInputElement};

const INPUT_ID: &str = "file-input";

#[component]
pub fn UploadArea<F>(
    file_name: Signal<Option<String>>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + Send + Sync + Clone + 'static,
{
    let (is_dragover, set_is_dragover) = signal(false);

    // ドロップとファイル選択で同じ処理を通す（先頭の1ファイルのみ）
    let handle_files = move |files: Option<FileList>| {
        if let Some(file) = files.and_then(|f| f.get(0)) {
            on_file(File::from(file));
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            handle_files(ev.data_transfer().and_then(|dt| dt.files()));
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        handle_files(input.files());
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <input type="file" accept=PNG_MIME class="hidden" id=INPUT_ID on:change=on_change />
            <label for=INPUT_ID class="upload-label">
                <div class="upload-icon">"🖼"</div>
                <p>{move || file_name.get().unwrap_or_else(|| "Drop your PNG file here".to_string())}</p>
                <p class="text-muted">"or click to browse files"</p>
            </label>
        </div>
    }
}
