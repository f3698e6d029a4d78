//! 変換ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn ConvertButton<F>(
    is_converting: Signal<bool>,
    on_convert: F,
) -> impl IntoView
where
    F: Fn(()) + Send + Sync + Clone + 'static,
{
    view! {
        <button
            class="btn btn-primary gradient-button"
            disabled=move || is_converting.get()
            on:click={
                let on_convert = on_convert.clone();
                move |_| on_convert(())
            }
        >
            {move || if is_converting.get() { "Converting..." } else { "Convert to SVG" }}
        </button>
    }
}
