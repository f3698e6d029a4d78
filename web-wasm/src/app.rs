//! メインアプリケーションコンポーネント

use gloo::file::File;
use leptos::prelude::*;
use vectorizer_common::Phase;
use crate::components::{
    header::Header,
    footer::Footer,
    upload_area::UploadArea,
    convert_button::ConvertButton,
    progress_bar::ProgressBar,
    download_card::DownloadCard,
};
use crate::controller::Controller;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller = Controller::new();
    let session = controller.session();

    let phase = Memo::new(move |_| session.with(|s| s.phase()));
    let file_name = Signal::derive(move || session.with(|s| s.selected().map(|f| f.name.clone())));
    let progress = Signal::derive(move || session.with(|s| s.progress()));

    view! {
        <div class="min-h-screen">
            <Header />

            <main class="container">
                <div class="intro">
                    <h2>"Convert PNG to SVG"</h2>
                    <p class="text-muted">
                        "Transform your PNG images into scalable SVG format with our retro-futuristic converter"
                    </p>
                </div>

                <div class="panel">
                    <UploadArea file_name=file_name on_file=move |file: File| controller.accept(file) />

                    <Show when=move || matches!(phase.get(), Phase::FileSelected | Phase::Converting)>
                        <ConvertButton
                            is_converting=Signal::derive(move || phase.get() == Phase::Converting)
                            on_convert=move |_: ()| controller.convert()
                        />
                    </Show>

                    <Show when=move || phase.get() == Phase::Converting>
                        <ProgressBar progress=progress />
                    </Show>

                    <Show when=move || phase.get() == Phase::Converted>
                        <DownloadCard on_download=move |_: ()| controller.download() />
                    </Show>
                </div>
            </main>

            <Footer />
        </div>
    }
}
