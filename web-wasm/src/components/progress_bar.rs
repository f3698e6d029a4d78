//! プログレスバーコンポーネント

use leptos::prelude::*;
use vectorizer_common::Progress;

#[component]
pub fn ProgressBar(progress: Signal<Progress>) -> impl IntoView {
    view! {
        <div class="progress-container">
            <div class="progress-label">
                <span>"Converting..."</span>
                <span class="progress-text">{move || progress.get().to_string()}</span>
            </div>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", progress.get().percent())
                />
            </div>
        </div>
    }
}
