//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="container header-row">
                <h1 class="neon-text">"⚡ Vectorizer"</h1>
                <nav class="header-nav">
                    <button class="btn btn-ghost">"Home"</button>
                    <button class="btn btn-ghost">"About"</button>
                    <button class="btn btn-ghost">"Help"</button>
                </nav>
            </div>
        </header>
    }
}
