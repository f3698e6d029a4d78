use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© 2025 Vectorizer. All rights reserved."</p>
            <div class="footer-links">
                <button class="btn btn-link">"Terms of Service"</button>
                <button class="btn btn-link">"Privacy Policy"</button>
            </div>
        </footer>
    }
}
